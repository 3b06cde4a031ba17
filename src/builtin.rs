//! Builtin verbs
//!
//! Prototype definitions for the verbs every program can use without
//! declaring anything. User functions may shadow these names. All builtins
//! are monomorphic; the verb calculus has no stack polymorphism yet, hence
//! the per-type `.i`/`.f` variants.

use crate::common::{FuncType, Type};
use crate::type_checking::TypeWorld;

fn int() -> Type {
    Type::prim("int")
}

fn float() -> Type {
    Type::prim("float")
}

fn verb(args: Vec<Type>, rets: Vec<Type>) -> Type {
    Type::Func(FuncType::new(args, rets))
}

/// The type world holding every builtin verb
pub fn builtins() -> TypeWorld {
    TypeWorld::from([
        (String::from("square.i"), verb(vec![int()], vec![int()])),
        (String::from("add.i"), verb(vec![int(), int()], vec![int()])),
        (String::from("sub.i"), verb(vec![int(), int()], vec![int()])),
        (String::from("mul.i"), verb(vec![int(), int()], vec![int()])),
        (
            String::from("add.f"),
            verb(vec![float(), float()], vec![float()]),
        ),
        (
            String::from("sub.f"),
            verb(vec![float(), float()], vec![float()]),
        ),
        (
            String::from("mul.f"),
            verb(vec![float(), float()], vec![float()]),
        ),
        (String::from("sqrt.f"), verb(vec![float()], vec![float()])),
        (String::from("to.f"), verb(vec![int()], vec![float()])),
        (String::from("to.i"), verb(vec![float()], vec![int()])),
        (String::from("dup.i"), verb(vec![int()], vec![int(), int()])),
        (
            String::from("dup.f"),
            verb(vec![float()], vec![float(), float()]),
        ),
        (String::from("drop.i"), verb(vec![int()], vec![])),
        (String::from("drop.f"), verb(vec![float()], vec![])),
    ])
}
