//! Whole-input syntax validation.
//!
//! The rewriting engine stops caring about syntax after the first
//! violation. This module walks the same automaton but collects ALL
//! violations using Stillwater's `Validation`, skipping each offending
//! character and carrying on from the last good configuration.
//!
//! # Example
//!
//! ```rust
//! use infix_pda::validation::{validate, SyntaxErrorKind};
//! use stillwater::validation::Validation;
//!
//! assert!(validate("(a+b)*c").is_success());
//!
//! match validate("a+#b)") {
//!     Validation::Failure(errors) => {
//!         assert_eq!(errors.len(), 2);
//!         assert!(errors
//!             .iter()
//!             .any(|e| e.kind == SyntaxErrorKind::InvalidCharacter('#')));
//!     }
//!     Validation::Success(_) => panic!("expected violations"),
//! }
//! ```

pub mod violations;

pub use violations::{SyntaxError, SyntaxErrorKind};

use crate::automaton::{self, Configuration};
use crate::core::{InputSymbol, PdaState, StackSymbol};
use log::debug;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Check an expression, accumulating every violation.
pub fn validate(expression: &str) -> Validation<(), NonEmptyVec<SyntaxError>> {
    let model = automaton::model();
    let mut config = Configuration::initial(model);
    let mut checks: Vec<Validation<(), NonEmptyVec<SyntaxError>>> = Vec::new();
    let mut length = 0;

    for (position, c) in expression.chars().enumerate() {
        length = position + 1;
        let input = InputSymbol::from_char(c);

        let check = if model.next_state(&config, input) == PdaState::Dead {
            let kind = violation_kind(&config, input, c);
            debug!("violation at {position}: {kind}");
            Validation::fail(SyntaxError { position, kind })
        } else {
            model.apply(&mut config, input);
            Validation::success(())
        };
        checks.push(check);
    }

    if model.next_state(&config, InputSymbol::Epsilon) == PdaState::Dead {
        let kind = if config.depth() > 0 {
            SyntaxErrorKind::UnclosedGroup
        } else {
            SyntaxErrorKind::UnexpectedEnd
        };
        checks.push(Validation::fail(SyntaxError {
            position: length,
            kind,
        }));
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Name the reason a move from `config` on `input` is rejected.
fn violation_kind(config: &Configuration, input: InputSymbol, c: char) -> SyntaxErrorKind {
    match (config.state, input) {
        (_, InputSymbol::Other) => SyntaxErrorKind::InvalidCharacter(c),
        (_, InputSymbol::Operator(_)) => SyntaxErrorKind::UnexpectedOperator(c),
        (PdaState::Nested, InputSymbol::Close) => SyntaxErrorKind::EmptyGroup,
        (PdaState::AfterOperator, InputSymbol::Close) => SyntaxErrorKind::MissingOperand,
        (_, InputSymbol::Close) if config.top() != Some(StackSymbol::Open) => {
            SyntaxErrorKind::UnmatchedClose
        }
        (_, InputSymbol::Open) | (PdaState::AfterGroup, InputSymbol::Operand) => {
            SyntaxErrorKind::MissingOperator
        }
        _ => SyntaxErrorKind::InvalidCharacter(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(expression: &str) -> Vec<(usize, SyntaxErrorKind)> {
        match validate(expression) {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().map(|e| (e.position, e.kind)).collect(),
        }
    }

    #[test]
    fn well_formed_expressions_pass() {
        for expression in ["", "a", "a+b*c", "(a+b)*c", "((x))", "a1^(b2-c3)/d"] {
            assert!(validate(expression).is_success(), "{expression}");
        }
    }

    #[test]
    fn accumulates_all_violations() {
        assert_eq!(
            kinds("a+#b)"),
            vec![
                (2, SyntaxErrorKind::InvalidCharacter('#')),
                (4, SyntaxErrorKind::UnmatchedClose),
            ]
        );
    }

    #[test]
    fn operator_in_operand_position() {
        assert_eq!(
            kinds("*a"),
            vec![(0, SyntaxErrorKind::UnexpectedOperator('*'))]
        );
        assert_eq!(
            kinds("a+-b"),
            vec![(2, SyntaxErrorKind::UnexpectedOperator('-'))]
        );
        assert_eq!(
            kinds("(^a)"),
            vec![(1, SyntaxErrorKind::UnexpectedOperator('^'))]
        );
    }

    #[test]
    fn bracket_violations() {
        assert_eq!(kinds(")a"), vec![(0, SyntaxErrorKind::UnmatchedClose)]);
        assert_eq!(
            kinds("(a+)"),
            vec![
                (3, SyntaxErrorKind::MissingOperand),
                (4, SyntaxErrorKind::UnclosedGroup),
            ]
        );
        assert_eq!(
            kinds("a(b)"),
            vec![
                (1, SyntaxErrorKind::MissingOperator),
                (3, SyntaxErrorKind::UnmatchedClose),
            ]
        );
        assert_eq!(
            kinds("()"),
            vec![
                (1, SyntaxErrorKind::EmptyGroup),
                (2, SyntaxErrorKind::UnclosedGroup),
            ]
        );
    }

    #[test]
    fn closed_group_needs_an_operator_before_the_next_operand() {
        assert_eq!(kinds("(a)b"), vec![(3, SyntaxErrorKind::MissingOperator)]);
        assert_eq!(kinds("a+(b)c"), vec![(5, SyntaxErrorKind::MissingOperator)]);
        assert_eq!(
            kinds("(a)(b)"),
            vec![
                (3, SyntaxErrorKind::MissingOperator),
                (4, SyntaxErrorKind::MissingOperator),
                (5, SyntaxErrorKind::UnmatchedClose),
            ]
        );
        assert!(validate("(a)*(b)").is_success());
    }

    #[test]
    fn end_of_input_violations() {
        assert_eq!(kinds("(a+b"), vec![(4, SyntaxErrorKind::UnclosedGroup)]);
        assert_eq!(kinds("a*"), vec![(2, SyntaxErrorKind::UnexpectedEnd)]);
    }
}
