//! FILENAME: core/formula/src/formula.rs
//! PURPOSE: The validated, immutable Formula value.
//! CONTEXT: Built in one step from a raw string (lexer + validator). Evaluation
//! and dependency tracking consume its canonical tokens and variable set; the
//! canonical string doubles as the equality / hash key.

use crate::error::{FormulaFormatError, FormulaResult};
use crate::lexer::Lexer;
use crate::token::Token;
use crate::validator::validate;
use crate::LOG_TARGET;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A syntactically valid formula such as `(A1 + 2.5) * b7`.
///
/// Numbers are kept as parsed `f64` values and variables upper-cased, so
/// `"x1 + 2.0"` and `"X1+2"` produce equal formulas with canonical text `X1+2`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Formula {
    tokens: Vec<Token>,
    canonical: String,
    variables: BTreeSet<String>,
}

impl Formula {
    /// Tokenizes and validates `raw`. Either the whole formula is accepted or
    /// the first rule violation is returned.
    pub fn new(raw: &str) -> FormulaResult<Formula> {
        match validate(Lexer::new(raw)) {
            Ok(tokens) => {
                let formula = Formula::from_tokens(tokens);
                debug!(
                    target: LOG_TARGET,
                    "accepted {:?} as {} ({} variables)",
                    raw,
                    formula.canonical,
                    formula.variables.len()
                );
                Ok(formula)
            }
            Err(e) => {
                debug!(target: LOG_TARGET, "rejected {:?}: {}", raw, e);
                Err(e)
            }
        }
    }

    fn from_tokens(tokens: Vec<Token>) -> Formula {
        let canonical = tokens.iter().map(Token::to_string).collect();
        let variables = tokens
            .iter()
            .filter_map(|token| match token {
                Token::Variable(name) => Some(name.clone()),
                _ => None,
            })
            .collect();

        Formula {
            tokens,
            canonical,
            variables,
        }
    }

    /// Canonical tokens in source order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Distinct variable names (upper-case), sorted.
    pub fn variables(&self) -> &BTreeSet<String> {
        &self.variables
    }

    /// Canonical rendering: canonical tokens concatenated without whitespace.
    pub fn as_str(&self) -> &str {
        &self.canonical
    }
}

impl PartialEq for Formula {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for Formula {}

impl Hash for Formula {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl FromStr for Formula {
    type Err = FormulaFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Formula::new(s)
    }
}

impl TryFrom<&str> for Formula {
    type Error = FormulaFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Formula::new(value)
    }
}

impl TryFrom<String> for Formula {
    type Error = FormulaFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Formula::new(&value)
    }
}

impl From<Formula> for String {
    fn from(formula: Formula) -> Self {
        formula.canonical
    }
}
