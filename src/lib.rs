//! The catena front end
//!
//! catena is a small concatenative language: programs are modules of typed
//! functions whose bodies are sequences of literals, verbs and quotations
//! operating on a value stack. This crate takes source text to a typed AST
//! and rejects programs that are ill-typed under the stack discipline:
//! - [parsing] tokenizes source files and builds the AST
//! - [module] assembles parsed functions into named modules
//! - [type_checking] simulates every function body on a stack of types

pub mod ast;
pub mod builtin;
mod common;
pub mod module;
pub mod parsing;
pub mod type_checking;

pub use common::{DuplicateUnionMember, FuncType, Position, Type};
pub use module::{load_module, load_modules, Module};
pub use parsing::parse;
pub use type_checking::{check_modules, TypeWorld, TypeWorlds};
