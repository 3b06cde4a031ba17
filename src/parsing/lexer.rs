//! Lexer
//!
//! A hand-written, pull-based tokenizer: [Lexer::next_token] produces one
//! token at a time and keeps a single rune of lookahead. Line and column
//! bookkeeping happens on every consumed rune, so each token carries the
//! exact position of its first rune.

use std::iter::Peekable;
use std::str::Chars;

use miette::Diagnostic;
use thiserror::Error;

use super::token::{Token, TokenKind};
use crate::common::Position;

#[derive(Debug, Clone, Error, Diagnostic)]
pub enum LexError {
    #[error("{position}: Unexpected character `{ch}`")]
    UnexpectedChar { ch: char, position: Position },

    #[error("{position}: Unexpected second `.` in numeric literal")]
    SecondDot { position: Position },

    #[error("{position}: Literal `{lexeme}` is missing at least one digit")]
    #[diagnostic(help("A `-` must be followed by at least one digit"))]
    MissingDigits { lexeme: String, position: Position },
}

type Result<T> = std::result::Result<T, LexError>;

pub struct Lexer<'src> {
    chars: Peekable<Chars<'src>>,
    file: String,
    line: u32,
    column: u32,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str, file: impl Into<String>) -> Self {
        Self {
            chars: source.chars().peekable(),
            file: file.into(),
            line: 1,
            column: 1,
        }
    }

    /// Produce the next token
    ///
    /// Once the source is exhausted, every further call yields another
    /// [TokenKind::Eof] token.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();

        let position = self.position();
        let Some(c) = self.bump() else {
            return Ok(Token {
                kind: TokenKind::Eof,
                lexeme: String::from("<eof>"),
                position,
            });
        };

        let punct = |kind: TokenKind, position: Position| {
            Ok(Token {
                kind,
                lexeme: c.to_string(),
                position,
            })
        };

        match c {
            '#' => punct(TokenKind::NumSign, position),
            ';' => punct(TokenKind::Semicolon, position),
            '{' => punct(TokenKind::LBrace, position),
            '}' => punct(TokenKind::RBrace, position),
            '[' => punct(TokenKind::LBracket, position),
            ']' => punct(TokenKind::RBracket, position),
            '(' => punct(TokenKind::LParen, position),
            ')' => punct(TokenKind::RParen, position),
            '\'' => punct(TokenKind::Quot, position),
            c if is_letter(c) || c == '%' => Ok(self.ident(c, position)),
            c if is_digit(c) || c == '-' => self.number(c, position),
            c => Err(LexError::UnexpectedChar { ch: c, position }),
        }
    }

    fn ident(&mut self, first: char, position: Position) -> Token {
        let mut lexeme = String::from(first);
        while let Some(&c) = self.chars.peek() {
            if !is_ident_continuation(c) {
                break;
            }
            lexeme.push(c);
            self.bump();
        }

        let kind = match lexeme.as_str() {
            "func" => TokenKind::Func,
            "if" => TokenKind::If,
            _ => TokenKind::Ident,
        };

        Token {
            kind,
            lexeme,
            position,
        }
    }

    fn number(&mut self, first: char, position: Position) -> Result<Token> {
        let mut lexeme = String::from(first);
        let mut seen_dot = false;

        while let Some(&c) = self.chars.peek() {
            if is_digit(c) {
                lexeme.push(c);
                self.bump();
            } else if c == '.' {
                if seen_dot {
                    return Err(LexError::SecondDot {
                        position: self.position(),
                    });
                }
                seen_dot = true;
                lexeme.push(c);
                self.bump();
            } else {
                break;
            }
        }

        if lexeme == "-" {
            return Err(LexError::MissingDigits { lexeme, position });
        }

        let kind = if seen_dot {
            TokenKind::LitFloat
        } else {
            TokenKind::LitInt
        };

        Ok(Token {
            kind,
            lexeme,
            position,
        })
    }

    fn skip_whitespace(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if !is_whitespace(c) {
                break;
            }
            self.bump();
        }
    }

    /// Consume one rune, maintaining the line and column counters
    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else if c != '\r' {
            self.column += 1;
        }
        Some(c)
    }

    /// The position of the next unconsumed rune
    fn position(&self) -> Position {
        Position {
            file: self.file.clone(),
            line: self.line,
            column: self.column,
        }
    }
}

// The classifier is strictly ASCII; anything else ends up as an
// unexpected-character error.

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_ident_continuation(c: char) -> bool {
    is_letter(c) || c == '.' || c == ':'
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}
