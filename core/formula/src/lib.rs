//! FILENAME: core/formula/src/lib.rs
//! PURPOSE: Library root for the formula syntax front end.
//! CONTEXT: Decides whether a raw string is a well-formed arithmetic formula
//! and, if so, produces its canonical token sequence for the evaluator and
//! the dependency graph. Nothing here evaluates anything.
//!
//! PIPELINE: Formula String --> Lexer --> Tokens --> Validator --> Formula
//!
//! SUPPORTED SYNTAX:
//! - Numbers: 3, 2.50, 1e2, 4E-3
//! - Variables (cell names): A1, ab12 (case-insensitive)
//! - Binary operators: + - * /
//! - Parentheses for grouping
//!
//! Any rule violation rejects the whole string with a [`FormulaFormatError`].

pub mod error;
pub mod formula;
pub mod lexer;
pub mod token;
pub mod validator;


/// `log` target for everything this crate emits.
pub(crate) const LOG_TARGET: &str = "FORMULA";

// Re-export commonly used types for convenience
pub use error::{FormulaErrorKind, FormulaFormatError, FormulaResult};
pub use formula::Formula;
pub use lexer::{tokenize, Lexer};
pub use token::{is_variable, SpannedToken, Token, TokenKind};
pub use validator::{validate, Validator};
