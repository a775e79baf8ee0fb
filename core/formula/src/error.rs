//! FILENAME: core/formula/src/error.rs
//! PURPOSE: The single error type returned when a formula string is rejected.
//! CONTEXT: Every variant is fatal to the construction attempt. Positions are
//! byte offsets into the raw formula so a UI can highlight the failure.

use crate::token::TokenKind;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum FormulaFormatError {
    #[error("no valid token starts at position {position}: {found:?}")]
    Lexical { position: usize, found: char },

    #[error("a formula must contain at least one token")]
    NoTokens,

    #[error("formula cannot start with {kind} (position {position})")]
    InvalidFirstToken { position: usize, kind: TokenKind },

    #[error("formula cannot end with {kind} (position {position})")]
    InvalidLastToken { position: usize, kind: TokenKind },

    #[error("{kind} cannot follow '(' or an operator (position {position})")]
    InvalidTokenAfterOpenOrOperator { position: usize, kind: TokenKind },

    #[error("{kind} cannot follow a number, variable or ')' (position {position})")]
    InvalidTokenAfterValue { position: usize, kind: TokenKind },

    #[error("')' at position {position} has no matching '('")]
    UnbalancedClosingParen { position: usize },

    #[error("{missing} unclosed '(' at end of formula (position {position})")]
    UnbalancedParentheses { position: usize, missing: usize },
}

/// Fieldless mirror of [`FormulaFormatError`] for matching on the rule only.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum FormulaErrorKind {
    Lexical,
    NoTokens,
    InvalidFirstToken,
    InvalidLastToken,
    InvalidTokenAfterOpenOrOperator,
    InvalidTokenAfterValue,
    UnbalancedClosingParen,
    UnbalancedParentheses,
}

impl FormulaFormatError {
    pub fn kind(&self) -> FormulaErrorKind {
        match self {
            FormulaFormatError::Lexical { .. } => FormulaErrorKind::Lexical,
            FormulaFormatError::NoTokens => FormulaErrorKind::NoTokens,
            FormulaFormatError::InvalidFirstToken { .. } => FormulaErrorKind::InvalidFirstToken,
            FormulaFormatError::InvalidLastToken { .. } => FormulaErrorKind::InvalidLastToken,
            FormulaFormatError::InvalidTokenAfterOpenOrOperator { .. } => {
                FormulaErrorKind::InvalidTokenAfterOpenOrOperator
            }
            FormulaFormatError::InvalidTokenAfterValue { .. } => {
                FormulaErrorKind::InvalidTokenAfterValue
            }
            FormulaFormatError::UnbalancedClosingParen { .. } => {
                FormulaErrorKind::UnbalancedClosingParen
            }
            FormulaFormatError::UnbalancedParentheses { .. } => {
                FormulaErrorKind::UnbalancedParentheses
            }
        }
    }

    /// Byte offset the error refers to. An empty formula reports 0.
    pub fn position(&self) -> usize {
        match *self {
            FormulaFormatError::NoTokens => 0,
            FormulaFormatError::Lexical { position, .. }
            | FormulaFormatError::InvalidFirstToken { position, .. }
            | FormulaFormatError::InvalidLastToken { position, .. }
            | FormulaFormatError::InvalidTokenAfterOpenOrOperator { position, .. }
            | FormulaFormatError::InvalidTokenAfterValue { position, .. }
            | FormulaFormatError::UnbalancedClosingParen { position }
            | FormulaFormatError::UnbalancedParentheses { position, .. } => position,
        }
    }
}

pub type FormulaResult<T> = Result<T, FormulaFormatError>;
