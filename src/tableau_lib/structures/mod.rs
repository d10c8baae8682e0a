//! Abstract elements of a tautology check.
//!
//! - [formula] holds the representation of formulas.

pub mod formula;
