//! FILENAME: core/formula/src/lexer.rs
//! PURPOSE: Scans a raw formula string and produces a lazy stream of Tokens.
//! CONTEXT: This is the first stage of the pipeline. It skips whitespace and
//! scans numbers and variables by maximal munch. Any character that cannot
//! start a token stops the scan with a lexical error.
//!
//! TOKENS:
//! - Numbers: 12  3.5  1e2  2.5E-3   (digits first; ".5" and "1." are rejected)
//! - Variables: A1  ab12  XY9        (letters then digits; "a" and "ab" are rejected)
//! - Single char: + - * / ( )

use crate::error::{FormulaFormatError, FormulaResult};
use crate::token::{SpannedToken, Token};
use std::iter::Peekable;
use std::str::CharIndices;

/// One-shot, forward-only token stream over a formula string.
///
/// Iterating yields `Ok` tokens until the input is exhausted or an error is
/// hit; after an error the lexer is fused and yields `None`.
pub struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    failed: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            chars: input.char_indices().peekable(),
            failed: false,
        }
    }

    /// Advances the lexer and returns the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<FormulaResult<SpannedToken<'a>>> {
        self.skip_whitespace();

        let (start, ch) = self.chars.next()?;
        let result = match ch {
            '+' => Ok(self.spanned(Token::Plus, start)),
            '-' => Ok(self.spanned(Token::Minus, start)),
            '*' => Ok(self.spanned(Token::Asterisk, start)),
            '/' => Ok(self.spanned(Token::Slash, start)),
            '(' => Ok(self.spanned(Token::LParen, start)),
            ')' => Ok(self.spanned(Token::RParen, start)),

            ch if ch.is_ascii_digit() => self.read_number(start),

            ch if ch.is_ascii_alphabetic() => self.read_variable(start, ch),

            found => Err(FormulaFormatError::Lexical {
                position: start,
                found,
            }),
        };
        Some(result)
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|&(_, ch)| ch.is_whitespace()).is_some() {}
    }

    /// Byte offset of the next unread character.
    fn offset(&mut self) -> usize {
        self.chars
            .peek()
            .map(|&(i, _)| i)
            .unwrap_or(self.input.len())
    }

    fn spanned(&mut self, token: Token, start: usize) -> SpannedToken<'a> {
        let end = self.offset();
        SpannedToken {
            token,
            text: &self.input[start..end],
            offset: start,
        }
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let mut count = 0;
        while self.chars.next_if(|&(_, ch)| pred(ch)).is_some() {
            count += 1;
        }
        count
    }

    /// True when the character after the next one is a digit, optionally
    /// with a sign in between (`allow_sign`). Does not consume anything.
    fn digit_after_next(&self, allow_sign: bool) -> bool {
        let mut ahead = self.chars.clone();
        ahead.next();
        if allow_sign {
            ahead.next_if(|&(_, ch)| ch == '+' || ch == '-');
        }
        matches!(ahead.peek(), Some(&(_, ch)) if ch.is_ascii_digit())
    }

    /// Reads `digits ('.' digits)? ([eE] [+-]? digits)?`. The fraction and
    /// exponent parts are only taken when digits follow; otherwise the `.`
    /// or `e` is left for the next scan, where it fails on its own.
    fn read_number(&mut self, start: usize) -> FormulaResult<SpannedToken<'a>> {
        self.eat_while(|ch| ch.is_ascii_digit());

        if matches!(self.chars.peek(), Some(&(_, '.'))) && self.digit_after_next(false) {
            self.chars.next();
            self.eat_while(|ch| ch.is_ascii_digit());
        }

        if matches!(self.chars.peek(), Some(&(_, 'e' | 'E'))) && self.digit_after_next(true) {
            self.chars.next();
            self.chars.next_if(|&(_, ch)| ch == '+' || ch == '-');
            self.eat_while(|ch| ch.is_ascii_digit());
        }

        let end = self.offset();
        let text = &self.input[start..end];
        match text.parse::<f64>() {
            // Overflow to infinity would render as "inf", which is not a formula.
            // Underflow flushes to 0, which renders and re-lexes as 0.
            Ok(n) if n.is_finite() => Ok(SpannedToken {
                token: Token::Number(n),
                text,
                offset: start,
            }),
            _ => Err(FormulaFormatError::Lexical {
                position: start,
                found: text.chars().next().unwrap_or_default(),
            }),
        }
    }

    fn read_variable(&mut self, start: usize, first_char: char) -> FormulaResult<SpannedToken<'a>> {
        self.eat_while(|ch| ch.is_ascii_alphabetic());

        if self.eat_while(|ch| ch.is_ascii_digit()) == 0 {
            // Letters with no row number, e.g. "A" or "ab"
            return Err(FormulaFormatError::Lexical {
                position: start,
                found: first_char,
            });
        }

        let end = self.offset();
        let text = &self.input[start..end];
        Ok(SpannedToken {
            token: Token::Variable(text.to_ascii_uppercase()), // Normalize to UPPERCASE
            text,
            offset: start,
        })
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = FormulaResult<SpannedToken<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.next_token()?;
        self.failed = item.is_err();
        Some(item)
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Scans the whole input eagerly. Stops at the first lexical error.
pub fn tokenize(input: &str) -> FormulaResult<Vec<SpannedToken<'_>>> {
    Lexer::new(input).collect()
}
