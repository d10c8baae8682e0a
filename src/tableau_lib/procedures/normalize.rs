//! Folds negation wrappers into signs.
//!
//! Before a tableau is grown, every [Negation](Kind::Negation) wrapper is removed from a formula.
//! In place of the wrapper, the sign of the wrapped formula is adjusted so that the value of each node is unchanged.
//!
//! A chain of `k` unsigned wrappers around an unsigned formula collapses to the formula with sign `k mod 2 == 1`.
//!
//! ```rust
//! # use tableau_lib::structures::formula::Formula;
//! # use tableau_lib::procedures::normalize::normalize_formula;
//! let p = Formula::literal("p");
//! let formula = Formula::negation(Formula::negation(Formula::negation(p)));
//!
//! let normalized = normalize_formula(formula);
//! assert!(normalized.sign());
//! assert_eq!(normalized.to_string(), "~p");
//! ```
//!
//! Normalization takes ownership of the formulas given, so no un-normalized formula shares a node with the result.
//! Sub-formulas are visited with an explicit stack.

use crate::{
    misc::log::targets::{self},
    structures::formula::{Formula, Kind},
};

/// Normalizes each formula of a list, as with [normalize_formula].
pub fn normalize(formulas: Vec<Formula>) -> Vec<Formula> {
    formulas.into_iter().map(normalize_formula).collect()
}

/// Removes every negation wrapper from `formula`, adjusting signs to match.
///
/// Normalizing a normalized formula returns the formula unchanged.
pub fn normalize_formula(formula: Formula) -> Formula {
    let mut root = strip_negations(formula);

    let mut stack: Vec<&mut Formula> = vec![&mut root];
    while let Some(node) = stack.pop() {
        match node.kind_mut() {
            Kind::Literal(_) | Kind::Negation(_) => {}

            Kind::Conjunction(left, right)
            | Kind::Disjunction(left, right)
            | Kind::Implication(left, right)
            | Kind::Equivalence(left, right) => {
                for argument in [left, right] {
                    let taken = std::mem::replace(&mut **argument, placeholder());
                    **argument = strip_negations(taken);
                    stack.push(&mut **argument);
                }
            }
        }
    }

    log::trace!(target: targets::NORMALIZE, "Normalized: {root}");
    root
}

/// Removes the negation wrappers at the head of `formula`.
fn strip_negations(mut formula: Formula) -> Formula {
    loop {
        let (kind, sign) = formula.into_parts();
        match kind {
            Kind::Negation(inner) => {
                let mut inner = *inner;
                // An unsigned wrapper negates, a signed wrapper negates the negation.
                if !sign {
                    inner.negate();
                }
                log::trace!(target: targets::NORMALIZE, "Folded wrapper into: {inner}");
                formula = inner;
            }

            kind => return Formula::new(kind, sign),
        }
    }
}

/// A stand-in for a sub-formula while it is being normalized.
fn placeholder() -> Formula {
    Formula::literal(String::new())
}
