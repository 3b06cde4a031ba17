//! Type checking
//!
//! A function body is simulated as operations on a compile-time stack of
//! types: literals push their type, verbs consume their argument types and
//! push their return types. A function checks out when its body leaves
//! exactly the declared return types on the stack. Name resolution walks a
//! stack of scopes ([TypeWorlds]), innermost first, so module functions can
//! shadow builtins. The main interface is [check_modules].

use std::collections::{BTreeMap, HashMap};

use log::debug;
use miette::Diagnostic;
use thiserror::Error;

use crate::ast::Node;
use crate::builtin;
use crate::common::{Position, Type};
use crate::module::{Module, ModuleFunc};
use crate::parsing::Token;

#[derive(Debug, Error, Diagnostic)]
pub enum TypeCheckError {
    #[error("{position}: Wanted type `{wanted}` but got type `{got}` {context}")]
    Mismatch {
        wanted: Type,
        got: Type,
        context: String,
        position: Position,
    },

    #[error("{position}: Function `{name}` does not exist")]
    UndefinedName { name: String, position: Position },

    #[error("{position}: `{name}` is not of type function")]
    NotAFunction { name: String, position: Position },

    #[error("{position}: Not enough arguments in a call to `{name}`; wanted {wanted} but the stack holds {got}")]
    NotEnoughArguments {
        name: String,
        wanted: usize,
        got: usize,
        position: Position,
    },

    #[error("{position}: Function `{name}` does not return the right amount of values; wanted {wanted} but got {got}")]
    WrongReturnCount {
        name: String,
        wanted: usize,
        got: usize,
        position: Position,
    },

    #[error("{position}: Cannot infer types for this construct")]
    Unsupported { position: Position },
}

type Result<T> = std::result::Result<T, TypeCheckError>;

/// A single scope of name-to-type bindings
pub type TypeWorld = HashMap<String, Type>;

/// An ordered stack of scopes
///
/// Lookups scan from the innermost (last pushed) world outwards and return
/// the first hit.
#[derive(Debug, Clone, Default)]
pub struct TypeWorlds {
    worlds: Vec<TypeWorld>,
}

impl TypeWorlds {
    pub fn new(worlds: Vec<TypeWorld>) -> Self {
        Self { worlds }
    }

    pub fn lookup(&self, name: &str) -> Option<&Type> {
        self.worlds.iter().rev().find_map(|world| world.get(name))
    }
}

/// Infer the effect of one body node on the type stack
///
/// Takes the stack by value and returns the updated stack; the caller
/// threads it through the body.
pub fn infer_node(node: &Node, mut stack: Vec<Type>, worlds: &TypeWorlds) -> Result<Vec<Type>> {
    match node {
        Node::LitInt { .. } => {
            stack.push(Type::prim("int"));
            Ok(stack)
        }
        Node::LitFloat { .. } => {
            stack.push(Type::prim("float"));
            Ok(stack)
        }
        Node::Exp { items, token } => {
            for item in items {
                stack = infer_exp_item(item, stack, worlds, token)?;
            }
            Ok(stack)
        }
        other => Err(TypeCheckError::Unsupported {
            position: other.token().position.clone(),
        }),
    }
}

fn infer_exp_item(
    item: &Node,
    mut stack: Vec<Type>,
    worlds: &TypeWorlds,
    exp_token: &Token,
) -> Result<Vec<Type>> {
    match item {
        Node::LitInt { .. } => {
            stack.push(Type::prim("int"));
            Ok(stack)
        }
        Node::LitFloat { .. } => {
            stack.push(Type::prim("float"));
            Ok(stack)
        }

        Node::Verb { name, token } => {
            let typ = worlds
                .lookup(name)
                .ok_or_else(|| TypeCheckError::UndefinedName {
                    name: name.clone(),
                    position: token.position.clone(),
                })?;
            let Type::Func(func_type) = typ else {
                return Err(TypeCheckError::NotAFunction {
                    name: name.clone(),
                    position: token.position.clone(),
                });
            };

            let wanted = func_type.args.len();
            if stack.len() < wanted {
                return Err(TypeCheckError::NotEnoughArguments {
                    name: name.clone(),
                    wanted,
                    got: stack.len(),
                    position: token.position.clone(),
                });
            }

            // The top of the stack is the verb's last argument.
            let split = stack.len() - wanted;
            for (got, formal) in stack[split..].iter().zip(&func_type.args) {
                if !got.compatible_with(formal) {
                    return Err(TypeCheckError::Mismatch {
                        wanted: formal.clone(),
                        got: got.clone(),
                        context: format!("in a call to `{name}`"),
                        position: exp_token.position.clone(),
                    });
                }
            }

            stack.truncate(split);
            stack.extend(func_type.rets.iter().cloned());
            Ok(stack)
        }

        // A quotation pushes the referenced verb's type itself; nothing is
        // consumed.
        Node::Quot { name, token } => {
            let typ = worlds
                .lookup(name)
                .ok_or_else(|| TypeCheckError::UndefinedName {
                    name: name.clone(),
                    position: token.position.clone(),
                })?;
            if !matches!(typ, Type::Func(_)) {
                return Err(TypeCheckError::NotAFunction {
                    name: name.clone(),
                    position: token.position.clone(),
                });
            }
            stack.push(typ.clone());
            Ok(stack)
        }

        other => Err(TypeCheckError::Unsupported {
            position: other.token().position.clone(),
        }),
    }
}

/// Type check every function of every module
///
/// User functions are visible under their fully qualified
/// `module:function` name everywhere, and under their short name within
/// their own module, shadowing builtins. Modules and functions are checked
/// in name order, so the first reported error is deterministic.
pub fn check_modules(modules: &BTreeMap<String, Module>) -> Result<()> {
    let mut qualified_world = TypeWorld::new();
    for (key, module) in modules {
        debug_assert_eq!(key, &module.name, "BUG: module key does not match its name");
        for func in module.funcs.values() {
            let qualified = format!("{}:{}", module.name, func.name);
            qualified_world.insert(qualified, Type::Func(func.func_type.clone()));
        }
    }

    for module in modules.values() {
        let mut local_world = TypeWorld::new();
        for func in module.funcs.values() {
            local_world.insert(func.name.clone(), Type::Func(func.func_type.clone()));
        }

        let worlds = TypeWorlds::new(vec![
            builtin::builtins(),
            qualified_world.clone(),
            local_world,
        ]);

        for func in module.funcs.values() {
            debug!("checking `{}:{}`", module.name, func.name);
            check_function(func, &worlds)?;
        }
    }

    Ok(())
}

fn check_function(func: &ModuleFunc, worlds: &TypeWorlds) -> Result<()> {
    // A function starts executing with its arguments on the stack, first
    // argument deepest.
    let mut stack: Vec<Type> = func.node.args.iter().map(|arg| arg.typ.clone()).collect();

    for node in &func.node.body {
        stack = infer_node(node, stack, worlds)?;
    }

    let rets = &func.func_type.rets;
    if stack.len() != rets.len() {
        return Err(TypeCheckError::WrongReturnCount {
            name: func.name.clone(),
            wanted: rets.len(),
            got: stack.len(),
            position: func.node.token.position.clone(),
        });
    }

    for (got, wanted) in stack.iter().zip(rets) {
        if !got.compatible_with(wanted) {
            return Err(TypeCheckError::Mismatch {
                wanted: wanted.clone(),
                got: got.clone(),
                context: format!("(in returned values of function `{}`)", func.name),
                position: func.node.token.position.clone(),
            });
        }
    }

    Ok(())
}
