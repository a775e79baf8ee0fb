//! FILENAME: core/formula/tests/properties.rs
//! PURPOSE: Property-based tests for formula construction using proptest.
//!
//! These tests verify that:
//! 1. Construction is total: any string is either accepted or rejected, never a panic
//! 2. Generated well-formed formulas are accepted and their canonical text is stable
//! 3. Variable identity does not depend on letter case

use formula::{Formula, Lexer};
use proptest::prelude::*;

fn number_strategy() -> impl Strategy<Value = String> {
    "[0-9]{1,6}(\\.[0-9]{1,4})?([eE][+-]?[0-9]{1,2})?"
}

fn variable_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,3}[0-9]{1,3}"
}

fn operator_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("+"), Just("-"), Just("*"), Just("/")]
}

fn spacing_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(""), Just(" "), Just("\t"), Just("  ")]
}

/// Well-formed formulas built from the grammar the validator enforces.
fn formula_strategy() -> impl Strategy<Value = String> {
    let operand = prop_oneof![number_strategy(), variable_strategy()];
    operand.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            (inner.clone(), spacing_strategy(), operator_strategy(), inner.clone())
                .prop_map(|(left, pad, op, right)| format!("{left}{pad}{op}{pad}{right}")),
            (spacing_strategy(), inner).prop_map(|(pad, e)| format!("({pad}{e}{pad})")),
        ]
    })
}

proptest! {
    #[test]
    fn construction_is_total(input in ".*") {
        if let Err(e) = Formula::new(&input) {
            prop_assert!(e.position() <= input.len());
            prop_assert!(input.is_char_boundary(e.position()));
        }
    }

    #[test]
    fn construction_is_total_on_formula_alphabet(input in "[0-9a-cA-C.eE+\\-*/() %]{0,24}") {
        let _ = Formula::new(&input);
    }

    #[test]
    fn lexer_stops_after_first_error(input in ".{0,40}") {
        let mut seen_error = false;
        for item in Lexer::new(&input) {
            prop_assert!(!seen_error);
            seen_error = item.is_err();
        }
    }

    #[test]
    fn generated_formulas_are_accepted(input in formula_strategy()) {
        prop_assert!(Formula::new(&input).is_ok(), "rejected {:?}", input);
    }

    #[test]
    fn canonical_form_is_idempotent(input in formula_strategy()) {
        let first = Formula::new(&input).unwrap();
        let second = Formula::new(first.as_str()).unwrap();
        prop_assert_eq!(first.as_str(), second.as_str());
        prop_assert_eq!(first.variables(), second.variables());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn variable_identity_ignores_case(name in variable_strategy()) {
        let lower = Formula::new(&name.to_ascii_lowercase()).unwrap();
        let upper = Formula::new(&name.to_ascii_uppercase()).unwrap();
        prop_assert_eq!(lower.variables(), upper.variables());
        prop_assert_eq!(lower, upper);
    }
}
