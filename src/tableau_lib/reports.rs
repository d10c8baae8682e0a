//! Reports on a tautology check.
//!
//! The outcome of a check is a [Report].
//! When a formula is not a tautology the report carries a [Countermodel], read off some open branch.
//!
//! Branch summaries are kept separately, as [BranchReport]s, and reports of both kinds may be serialized (e.g. as JSON) with [serde].

use std::collections::BTreeMap;

use serde::Serialize;

/// An assignment of values to variables under which a formula is false.
///
/// Variables of the formula not in the countermodel are unconstrained, and any value may be given to them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Countermodel {
    assignment: BTreeMap<String, bool>,
}

impl Countermodel {
    pub fn new(assignment: BTreeMap<String, bool>) -> Self {
        Countermodel { assignment }
    }

    /// The value of `variable`, if constrained.
    pub fn value_of(&self, variable: &str) -> Option<bool> {
        self.assignment.get(variable).copied()
    }

    /// The value of `variable`, with unconstrained variables taking `default`.
    pub fn value_or(&self, variable: &str, default: bool) -> bool {
        self.value_of(variable).unwrap_or(default)
    }
}

impl std::fmt::Display for Countermodel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (variable, value) in &self.assignment {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            match value {
                true => write!(f, "{variable}")?,
                false => write!(f, "~{variable}")?,
            }
        }
        Ok(())
    }
}

/// The outcome of a tautology check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome")]
pub enum Report {
    /// Every branch of the tableau for the negated formula is closed.
    Tautology,

    /// Some branch is open, and so the formula is false under the countermodel.
    Falsifiable { countermodel: Countermodel },
}

impl Report {
    pub fn is_tautology(&self) -> bool {
        matches!(self, Self::Tautology)
    }

    pub fn countermodel(&self) -> Option<&Countermodel> {
        match self {
            Self::Tautology => None,
            Self::Falsifiable { countermodel } => Some(countermodel),
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tautology => write!(f, "Tautology"),
            Self::Falsifiable { .. } => write!(f, "Not a tautology"),
        }
    }
}

/// A summary of a single branch of a tableau.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BranchReport {
    /// The renderings of each formula on the branch, in order.
    pub labels: Vec<String>,

    /// Some complementary pair of renderings on the branch, if the branch is closed.
    pub contradiction: Option<(String, String)>,
}

impl BranchReport {
    pub fn is_closed(&self) -> bool {
        self.contradiction.is_some()
    }
}
