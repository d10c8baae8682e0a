//! The expansion rules of the tableau method.
//!
//! Each rule maps a (sign normalized) formula to the formulas to be attached below each leaf of the branches the formula is on.
//! The rules follow the semantics of each connective, and a rule is one of two shapes:
//! - *Linear*, when both sub-formulas must hold together, and so are placed one above the other on the same branch.
//! - *Branching*, when either sub-formula may hold, and so each is placed on a branch of its own.
//!
//! Equivalence is a mix of the two, with two branches each of which is linear.
//!
//! | Connective        | Unsigned                       | Signed                          |
//! |-------------------|--------------------------------|---------------------------------|
//! | `(A and B)`       | linear `A`, `B`                | branching `~A` \| `~B`          |
//! | `(A or B)`        | branching `A` \| `B`           | linear `~A`, `~B`               |
//! | `(A => B)`        | branching `~A` \| `B`          | linear `A`, `~B`                |
//! | `(A <=> B)`       | `A`, `B` \| `~A`, `~B`         | `A`, `~B` \| `~A`, `B`          |
//!
//! Literals have no expansion.
//! As each rule replaces a formula with strictly smaller formulas, repeated expansion terminates.
//!
//! ```rust
//! # use tableau_lib::structures::formula::Formula;
//! # use tableau_lib::procedures::expand::{expansion, Expansion};
//! let formula = Formula::implication(Formula::literal("p"), Formula::literal("q"));
//!
//! match expansion(&formula) {
//!     Ok(Expansion::Branching(left, right)) => {
//!         assert_eq!(left.to_string(), "~p");
//!         assert_eq!(right.to_string(), "q");
//!     }
//!     _ => panic!("An implication branches"),
//! }
//! ```

use crate::{
    structures::formula::{Formula, Kind},
    types::err::{self},
};

/// The formulas an expansion attaches below a leaf, and how they are attached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expansion {
    /// Nothing to attach, as the formula is a literal.
    Terminal,

    /// The first formula below the leaf, and the second below the first.
    Linear(Formula, Formula),

    /// Each formula directly below the leaf, on branches of their own.
    Branching(Formula, Formula),

    /// Two branches below the leaf, each a linear pair.
    Split((Formula, Formula), (Formula, Formula)),
}

/// The expansion of `formula`, determined by its connective and sign.
///
/// A negation wrapper has no expansion, as signs are normalized before expansion.
pub fn expansion(formula: &Formula) -> Result<Expansion, err::TableauError> {
    let sign = formula.sign();

    let expansion = match formula.kind() {
        Kind::Literal(_) => Expansion::Terminal,

        Kind::Negation(_) => return Err(err::TableauError::UnsupportedFormulaKind),

        Kind::Conjunction(a, b) => {
            let (a, b) = (a.as_ref().clone(), b.as_ref().clone());
            match sign {
                false => Expansion::Linear(a, b),
                true => Expansion::Branching(a.negated(), b.negated()),
            }
        }

        Kind::Disjunction(a, b) => {
            let (a, b) = (a.as_ref().clone(), b.as_ref().clone());
            match sign {
                false => Expansion::Branching(a, b),
                true => Expansion::Linear(a.negated(), b.negated()),
            }
        }

        Kind::Implication(a, b) => {
            let (a, b) = (a.as_ref().clone(), b.as_ref().clone());
            match sign {
                false => Expansion::Branching(a.negated(), b),
                true => Expansion::Linear(a, b.negated()),
            }
        }

        Kind::Equivalence(a, b) => {
            let (a, b) = (a.as_ref().clone(), b.as_ref().clone());
            let (not_a, not_b) = (a.clone().negated(), b.clone().negated());
            match sign {
                false => Expansion::Split((a, b), (not_a, not_b)),
                true => Expansion::Split((a, not_b), (not_a, b)),
            }
        }
    };

    Ok(expansion)
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

    fn rendered(expansion: Expansion) -> Vec<String> {
        match expansion {
            Expansion::Terminal => vec![],
            Expansion::Linear(a, b) | Expansion::Branching(a, b) => vec![a.to_string(), b.to_string()],
            Expansion::Split((a, b), (c, d)) => {
                vec![a.to_string(), b.to_string(), c.to_string(), d.to_string()]
            }
        }
    }

    #[test]
    fn literals_are_terminal() {
        assert_eq!(expansion(&p()), Ok(Expansion::Terminal));
        assert_eq!(expansion(&p().negated()), Ok(Expansion::Terminal));
    }

    #[test]
    fn wrappers_are_unsupported() {
        assert_eq!(
            expansion(&Formula::negation(p())),
            Err(err::TableauError::UnsupportedFormulaKind)
        );
    }

    #[test]
    fn shapes() {
        let conjunction = Formula::conjunction(p(), q());
        assert!(matches!(expansion(&conjunction), Ok(Expansion::Linear(..))));
        assert!(matches!(expansion(&conjunction.negated()), Ok(Expansion::Branching(..))));

        let disjunction = Formula::disjunction(p(), q());
        assert!(matches!(expansion(&disjunction), Ok(Expansion::Branching(..))));
        assert!(matches!(expansion(&disjunction.negated()), Ok(Expansion::Linear(..))));

        let implication = Formula::implication(p(), q());
        assert!(matches!(expansion(&implication), Ok(Expansion::Branching(..))));
        assert!(matches!(expansion(&implication.negated()), Ok(Expansion::Linear(..))));

        let equivalence = Formula::equivalence(p(), q());
        assert!(matches!(expansion(&equivalence), Ok(Expansion::Split(..))));
        assert!(matches!(expansion(&equivalence.negated()), Ok(Expansion::Split(..))));
    }

    #[test]
    fn signs() {
        let conjunction = Formula::conjunction(p(), q().negated());
        assert_eq!(rendered(expansion(&conjunction).unwrap()), ["p", "~q"]);
        assert_eq!(rendered(expansion(&conjunction.negated()).unwrap()), ["~p", "q"]);

        let disjunction = Formula::disjunction(p(), q());
        assert_eq!(rendered(expansion(&disjunction.negated()).unwrap()), ["~p", "~q"]);

        let implication = Formula::implication(p(), q());
        assert_eq!(rendered(expansion(&implication.clone()).unwrap()), ["~p", "q"]);
        assert_eq!(rendered(expansion(&implication.negated()).unwrap()), ["p", "~q"]);

        let equivalence = Formula::equivalence(p(), q());
        assert_eq!(rendered(expansion(&equivalence.clone()).unwrap()), ["p", "q", "~p", "~q"]);
        assert_eq!(rendered(expansion(&equivalence.negated()).unwrap()), ["p", "~q", "~p", "q"]);
    }

    #[test]
    fn expansions_shrink() {
        let formula = Formula::equivalence(Formula::conjunction(p(), q()), Formula::implication(q(), p()));
        let count = formula.connective_count();
        for part in rendered(expansion(&formula).unwrap()) {
            assert!(part.matches('(').count() < count);
        }
    }
}
