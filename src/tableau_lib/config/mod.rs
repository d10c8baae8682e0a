//! Configuration of a context.
//!
//! All options have defaults, found in [defaults].

pub mod defaults;

pub type RoundCount = usize;
pub type VariableLimit = usize;

#[derive(Debug, Clone)]
pub struct Config {
    /// The ceiling on growth rounds, as a guard against a faulty rule.
    pub round_limit: RoundLimit,

    /// Whether to keep a summary of each branch after a check.
    pub record_branches: bool,

    /// The most distinct variables the truth table method will enumerate.
    pub truth_table_variable_limit: VariableLimit,
}

impl Default for Config {
    fn default() -> Self {
        use defaults::*;
        Config {
            round_limit: ROUND_LIMIT,
            record_branches: RECORD_BRANCHES,
            truth_table_variable_limit: TRUTH_TABLE_VARIABLE_LIMIT,
        }
    }
}

/// How many growth rounds to allow before giving up on a tableau.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundLimit {
    /// One more than the connective count of the root.
    /// Each round removes at least one level of nesting from every pending formula, so this is never reached.
    Derived,

    /// A fixed number of rounds.
    Fixed(RoundCount),
}

impl RoundLimit {
    /// The limit for a root with the given connective count.
    pub fn for_connectives(&self, connectives: usize) -> RoundCount {
        match self {
            Self::Derived => connectives + 1,
            Self::Fixed(limit) => *limit,
        }
    }
}

impl std::fmt::Display for RoundLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Derived => write!(f, "Derived"),
            Self::Fixed(limit) => write!(f, "{limit}"),
        }
    }
}
