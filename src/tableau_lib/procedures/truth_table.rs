//! The truth table method.
//!
//! A formula is a tautology exactly when it is true on every assignment of values to its variables.
//! The truth table method checks each assignment in turn, and so requires 2^n evaluations for a formula with n variables.
//!
//! The method is kept as an independent check on the tableau method, and as such shares nothing with the tableau method other than the representation of formulas.
//! Variables are found by a walk of the formula given.
//!
//! ```rust
//! # use tableau_lib::structures::formula::Formula;
//! # use tableau_lib::procedures::truth_table::{check, TableOutcome};
//! let p = Formula::literal("p");
//! let excluded_middle = Formula::disjunction(p.clone(), Formula::negation(p.clone()));
//! assert_eq!(check(&excluded_middle, 20), Ok(TableOutcome::Tautology));
//!
//! match check(&p, 20) {
//!     Ok(TableOutcome::Falsified(assignment)) => assert_eq!(assignment.get("p"), Some(&false)),
//!     _ => panic!("p is not a tautology"),
//! }
//! ```

use std::collections::BTreeMap;

use crate::{
    config::VariableLimit,
    misc::log::targets::{self},
    structures::formula::Formula,
    types::err::{self},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableOutcome {
    /// The formula is true on every assignment.
    Tautology,

    /// The first assignment found on which the formula is false.
    Falsified(BTreeMap<String, bool>),
}

/// Checks `formula` on each assignment to its variables, with variables ordered by name and false before true.
///
/// Formulas with more than `limit` distinct variables are not checked.
pub fn check(formula: &Formula, limit: VariableLimit) -> Result<TableOutcome, err::TruthTableError> {
    let variables = formula.variables().into_iter().collect::<Vec<_>>();
    let count = variables.len();

    if count > limit || count >= usize::BITS as usize {
        return Err(err::TruthTableError::TooManyVariables { count, limit });
    }

    for row in 0..(1_usize << count) {
        // The first variable is the most significant bit of the row.
        let value_of = |variable: &str| match variables.binary_search_by(|v| (*v).cmp(variable)) {
            Ok(index) => row & (1 << (count - 1 - index)) != 0,
            Err(_) => false,
        };

        if !formula.evaluate(value_of) {
            let assignment = variables
                .iter()
                .map(|variable| (variable.to_string(), value_of(*variable)))
                .collect::<BTreeMap<_, _>>();
            log::debug!(target: targets::TRUTH_TABLE, "False on row {row} of {}", 1_usize << count);
            return Ok(TableOutcome::Falsified(assignment));
        }
    }

    log::debug!(target: targets::TRUTH_TABLE, "True on all {} rows", 1_usize << count);
    Ok(TableOutcome::Tautology)
}

/// Whether `formula` is true on every assignment to its variables.
pub fn is_tautology(formula: &Formula, limit: VariableLimit) -> Result<bool, err::TruthTableError> {
    Ok(check(formula, limit)? == TableOutcome::Tautology)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p() -> Formula {
        Formula::literal("p")
    }

    fn q() -> Formula {
        Formula::literal("q")
    }

    #[test]
    fn tautologies() {
        let modus_ponens = Formula::implication(Formula::conjunction(p(), Formula::implication(p(), q())), q());
        assert_eq!(is_tautology(&modus_ponens, 20), Ok(true));

        let double_negation = Formula::equivalence(p(), Formula::negation(Formula::negation(p())));
        assert_eq!(is_tautology(&double_negation, 20), Ok(true));
    }

    #[test]
    fn first_falsifying_row() {
        let formula = Formula::disjunction(p(), q());
        let expected = BTreeMap::from([("p".to_string(), false), ("q".to_string(), false)]);
        assert_eq!(check(&formula, 20), Ok(TableOutcome::Falsified(expected)));

        let formula = Formula::implication(p(), q());
        let expected = BTreeMap::from([("p".to_string(), true), ("q".to_string(), false)]);
        assert_eq!(check(&formula, 20), Ok(TableOutcome::Falsified(expected)));
    }

    #[test]
    fn signs_are_respected() {
        assert_eq!(is_tautology(&Formula::conjunction(p(), q()).negated(), 20), Ok(false));
        let formula = Formula::conjunction(p(), p().negated()).negated();
        assert_eq!(is_tautology(&formula, 20), Ok(true));
    }

    #[test]
    fn limits() {
        let formula = Formula::conjunction(p(), q());
        assert_eq!(
            check(&formula, 1),
            Err(err::TruthTableError::TooManyVariables { count: 2, limit: 1 })
        );
    }
}
