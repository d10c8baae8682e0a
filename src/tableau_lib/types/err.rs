//! Error types used in the library.
//!
//! - Parse errors are external, and expected whenever a formula is given as text.
//! - Tableau errors are internal, and indicate a fault in the library rather than in the formula.
//!   Neither is expected on a well-formed formula, and neither is recovered from.
//!
//! Names of the error enums, for the most part, overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Parse(ParseError),
    Tableau(TableauError),
    TruthTable(TruthTableError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Tableau(e) => write!(f, "Tableau error: {e}"),
            Self::TruthTable(e) => write!(f, "Truth table error: {e}"),
        }
    }
}

/// Noted errors when reading a formula from text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The input contained no formula.
    Empty,

    /// A character which begins no token.
    UnknownSymbol { position: usize, symbol: char },

    /// A token out of place, e.g. a connective where a formula was expected.
    UnexpectedToken {
        position: usize,
        found: String,
        expected: &'static str,
    },

    /// The input ended part way through a formula, e.g. with an unbalanced parenthesis.
    UnexpectedEnd { expected: &'static str },

    /// A complete formula was read, but further input followed.
    TrailingInput { position: usize },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "no formula given"),
            Self::UnknownSymbol { position, symbol } => {
                write!(f, "unknown symbol '{symbol}' at {position}")
            }
            Self::UnexpectedToken {
                position,
                found,
                expected,
            } => write!(f, "found '{found}' at {position}, expected {expected}"),
            Self::UnexpectedEnd { expected } => {
                write!(f, "input ended early, expected {expected}")
            }
            Self::TrailingInput { position } => {
                write!(f, "unexpected input after the formula at {position}")
            }
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Noted errors while growing a tableau.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TableauError {
    /// A negation wrapper reached the expander.
    /// Signs are normalized before growth, so this is unexpected.
    UnsupportedFormulaKind,

    /// Growth did not reach a fixpoint within the given number of rounds.
    /// Each round strictly shrinks the pending formulas, so this is unexpected.
    RoundLimitExceeded { limit: usize },
}

impl std::fmt::Display for TableauError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedFormulaKind => write!(f, "a negation wrapper reached the expander"),
            Self::RoundLimitExceeded { limit } => {
                write!(f, "growth exceeded the limit of {limit} rounds")
            }
        }
    }
}

impl From<TableauError> for ErrorKind {
    fn from(e: TableauError) -> Self {
        ErrorKind::Tableau(e)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TruthTableError {
    /// Enumeration would require 2^count assignments.
    TooManyVariables { count: usize, limit: usize },
}

impl std::fmt::Display for TruthTableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooManyVariables { count, limit } => {
                write!(f, "{count} variables exceeds the limit of {limit}")
            }
        }
    }
}

impl From<TruthTableError> for ErrorKind {
    fn from(e: TruthTableError) -> Self {
        ErrorKind::TruthTable(e)
    }
}
