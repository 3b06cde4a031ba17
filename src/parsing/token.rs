use std::fmt;

use crate::common::Position;

/// A lexical token with the position of its first rune
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Eof,

    /// The keyword `func`
    Func,
    /// The keyword `if`; recognized but not yet parsed
    If,

    Semicolon,
    /// Reserved for fully qualified names; nothing emits it yet since `:`
    /// only occurs inside identifiers
    Colon,
    NumSign,
    /// `'`, introducing a quotation
    Quot,

    LitInt,
    LitFloat,
    Ident,

    LBrace,
    RBrace,
    LBracket,
    RBracket,
    LParen,
    RParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Eof => write!(f, "end of file"),
            TokenKind::Func => write!(f, "`func`"),
            TokenKind::If => write!(f, "`if`"),
            TokenKind::Semicolon => write!(f, "`;`"),
            TokenKind::Colon => write!(f, "`:`"),
            TokenKind::NumSign => write!(f, "`#`"),
            TokenKind::Quot => write!(f, "`'`"),
            TokenKind::LitInt => write!(f, "an integer literal"),
            TokenKind::LitFloat => write!(f, "a float literal"),
            TokenKind::Ident => write!(f, "an identifier"),
            TokenKind::LBrace => write!(f, "`{{`"),
            TokenKind::RBrace => write!(f, "`}}`"),
            TokenKind::LBracket => write!(f, "`[`"),
            TokenKind::RBracket => write!(f, "`]`"),
            TokenKind::LParen => write!(f, "`(`"),
            TokenKind::RParen => write!(f, "`)`"),
        }
    }
}
