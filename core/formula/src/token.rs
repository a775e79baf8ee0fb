//! FILENAME: core/formula/src/token.rs
//! PURPOSE: Token definitions for the formula lexer.
//! CONTEXT: Tokens are the atomic units produced by the lexer, checked by the
//! validator, and handed to evaluation / dependency collaborators inside a Formula.

use serde::{Deserialize, Serialize};

/// Tokens recognized by the formula lexer, already in canonical form.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum Token {
    // Operands
    Number(f64),
    /// Cell-style variable such as A1 or XY42. Always stored upper-case.
    Variable(String),

    // Operators
    Plus,
    Minus,
    Asterisk,
    Slash,

    // Delimiters
    LParen,
    RParen,
}

/// Coarse token categories the syntax rules are written against.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum TokenKind {
    Number,
    Variable,
    Operator,
    OpenParen,
    CloseParen,
}

impl TokenKind {
    /// Number, Variable or CloseParen: tokens that complete an operand.
    /// A formula may end with one, and only an operator or `)` may follow one.
    pub fn is_value(self) -> bool {
        matches!(
            self,
            TokenKind::Number | TokenKind::Variable | TokenKind::CloseParen
        )
    }

    /// Number, Variable or OpenParen: tokens that may begin an operand.
    pub fn starts_operand(self) -> bool {
        matches!(
            self,
            TokenKind::Number | TokenKind::Variable | TokenKind::OpenParen
        )
    }
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Number(_) => TokenKind::Number,
            Token::Variable(_) => TokenKind::Variable,
            Token::Plus | Token::Minus | Token::Asterisk | Token::Slash => TokenKind::Operator,
            Token::LParen => TokenKind::OpenParen,
            Token::RParen => TokenKind::CloseParen,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // Shortest text that parses back to the same f64, never exponent form
            Token::Number(n) => write!(f, "{}", n),
            Token::Variable(s) => write!(f, "{}", s),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Asterisk => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Number => write!(f, "number"),
            TokenKind::Variable => write!(f, "variable"),
            TokenKind::Operator => write!(f, "operator"),
            TokenKind::OpenParen => write!(f, "'('"),
            TokenKind::CloseParen => write!(f, "')'"),
        }
    }
}

/// A token together with the exact slice of input it was scanned from.
#[derive(Debug, PartialEq, Clone)]
pub struct SpannedToken<'a> {
    pub token: Token,
    /// Source text as written, e.g. "2.0" or "ab1".
    pub text: &'a str,
    /// Byte offset of `text` within the raw formula.
    pub offset: usize,
}

impl SpannedToken<'_> {
    pub fn kind(&self) -> TokenKind {
        self.token.kind()
    }

    /// Byte offset just past this token.
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

/// Returns true if `name` is exactly one run of ASCII letters followed by one
/// run of ASCII digits (e.g. "A1", "ab12"), i.e. a legal variable.
pub fn is_variable(name: &str) -> bool {
    let digits_at = match name.find(|c: char| !c.is_ascii_alphabetic()) {
        Some(0) | None => return false,
        Some(i) => i,
    };
    name[digits_at..].chars().all(|c| c.is_ascii_digit())
}
