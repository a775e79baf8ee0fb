//! FILENAME: core/formula/src/validator.rs
//! PURPOSE: Single-pass syntax check over the lexer's token stream.
//! CONTEXT: This is the second stage of the pipeline. Instead of building a
//! tree, it runs a small state machine (previous token kind plus running
//! parenthesis counts) and collects the canonical tokens of an accepted formula.
//!
//! RULES (checked per token in this order, then at end of input):
//!   first token     --> NUMBER | VARIABLE | "("
//!   after "(" / op  --> NUMBER | VARIABLE | "("
//!   after value     --> OPERATOR | ")"          (value = NUMBER | VARIABLE | ")")
//!   closing paren   --> never more ")" than "(" seen so far
//!   one token       --> at least one token
//!   last token      --> NUMBER | VARIABLE | ")"
//!   balanced        --> as many "(" as ")" overall

use crate::error::{FormulaFormatError, FormulaResult};
use crate::token::{SpannedToken, Token, TokenKind};
use crate::LOG_TARGET;
use log::trace;

/// Running state of the syntax check.
#[derive(Debug, Default)]
pub struct Validator {
    open_count: usize,
    close_count: usize,
    previous: Option<TokenKind>,
    /// Offset of the most recently accepted token.
    last_offset: usize,
    /// Offset just past the most recently accepted token.
    end: usize,
    output: Vec<Token>,
    /// First rejection; once set, every later call reports it again.
    failed: Option<FormulaFormatError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks one token against everything seen so far and keeps it.
    /// A rejected token leaves the counts untouched and fuses the validator.
    pub fn accept(&mut self, spanned: SpannedToken<'_>) -> FormulaResult<()> {
        if let Some(e) = &self.failed {
            return Err(e.clone());
        }
        if let Err(e) = self.check(&spanned) {
            self.failed = Some(e.clone());
            return Err(e);
        }

        match spanned.kind() {
            TokenKind::OpenParen => self.open_count += 1,
            TokenKind::CloseParen => self.close_count += 1,
            _ => {}
        }

        trace!(
            target: LOG_TARGET,
            "token {:?} at {} (depth {})",
            spanned.text,
            spanned.offset,
            self.open_count - self.close_count
        );

        self.previous = Some(spanned.kind());
        self.last_offset = spanned.offset;
        self.end = spanned.end();
        self.output.push(spanned.token);
        Ok(())
    }

    fn check(&self, spanned: &SpannedToken<'_>) -> FormulaResult<()> {
        let kind = spanned.kind();
        let position = spanned.offset;

        match self.previous {
            None if !kind.starts_operand() => {
                return Err(FormulaFormatError::InvalidFirstToken { position, kind });
            }
            Some(prev) if !prev.is_value() && !kind.starts_operand() => {
                return Err(FormulaFormatError::InvalidTokenAfterOpenOrOperator { position, kind });
            }
            // Only an operator or ')' may follow a value
            Some(prev) if prev.is_value() && kind.starts_operand() => {
                return Err(FormulaFormatError::InvalidTokenAfterValue { position, kind });
            }
            _ => {}
        }

        if kind == TokenKind::CloseParen && self.close_count >= self.open_count {
            return Err(FormulaFormatError::UnbalancedClosingParen { position });
        }

        Ok(())
    }

    /// Applies the end-of-input rules and hands back the canonical tokens.
    pub fn finish(self) -> FormulaResult<Vec<Token>> {
        if let Some(e) = self.failed {
            return Err(e);
        }

        let Some(last) = self.previous else {
            return Err(FormulaFormatError::NoTokens);
        };

        if !last.is_value() {
            return Err(FormulaFormatError::InvalidLastToken {
                position: self.last_offset,
                kind: last,
            });
        }

        if self.open_count != self.close_count {
            return Err(FormulaFormatError::UnbalancedParentheses {
                position: self.end,
                missing: self.open_count - self.close_count,
            });
        }

        Ok(self.output)
    }
}

/// Drives a [`Validator`] over a token stream. The first error, lexical or
/// structural, in left-to-right order is the one returned.
pub fn validate<'a, I>(tokens: I) -> FormulaResult<Vec<Token>>
where
    I: IntoIterator<Item = FormulaResult<SpannedToken<'a>>>,
{
    let mut validator = Validator::new();
    for spanned in tokens {
        validator.accept(spanned?)?;
    }
    validator.finish()
}
