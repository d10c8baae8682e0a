//! Procedures of the tableau method, and of the truth table method used to check it.
//!
//! The tableau method is factored as:
//! - [normalize], to fold negation wrappers into signs.
//! - [expand], the rule for each connective.
//! - [grow], to apply rules until no formula is pending.
//! - [closure], to test a branch for a contradiction.
//!
//! A [context](crate::context) combines these to decide whether a formula is a tautology.

pub mod closure;
pub mod expand;
pub mod grow;
pub mod normalize;
pub mod truth_table;
