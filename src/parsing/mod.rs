//! Parsing
//!
//! This module turns source text into an AST. It works in two phases:
//! - the [lexer] pulls tokens out of the character stream, one at a time
//! - the [parser] runs recursive descent over those tokens
//!
//! The main interface is [parse] which takes one file's source code and
//! produces an [ast::Program]. The first error at either phase aborts the
//! parse.

use miette::Diagnostic;
use thiserror::Error;

mod lexer;
mod parser;
mod token;

pub use lexer::{LexError, Lexer};
pub use parser::Parser;
pub use token::{Token, TokenKind};

use crate::ast;
use crate::common::{Position, Type};

#[derive(Debug, Error, Diagnostic)]
pub enum ParseError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lex(#[from] LexError),

    #[error("{position}: Expected {expected} but got `{found}`")]
    UnexpectedToken {
        expected: String,
        found: String,
        position: Position,
    },

    #[error("{position}: `:` is not allowed in function names; offending identifier is `{name}`")]
    QualifiedFunctionName { name: String, position: Position },

    #[error("{position}: `{lexeme}` is not a valid integer literal")]
    InvalidIntLiteral { lexeme: String, position: Position },

    #[error("{position}: `{lexeme}` is not a valid float literal")]
    InvalidFloatLiteral { lexeme: String, position: Position },

    #[error("{position}: Union types can not be nested")]
    NestedUnion { position: Position },

    #[error("{position}: A union type needs at least one member")]
    EmptyUnion { position: Position },

    #[error("{position}: Duplicate type `{duplicate}` in union type")]
    DuplicateUnionMember { duplicate: Type, position: Position },

    #[error("{position}: `if` expressions are not implemented yet")]
    IfNotImplemented { position: Position },
}

/// Parse one file's source code into a [Program](ast::Program)
///
/// `file` is only used for the positions embedded in tokens and errors.
pub fn parse(source: &str, file: &str) -> Result<ast::Program, ParseError> {
    Parser::new(Lexer::new(source, file)).parse_program()
}
