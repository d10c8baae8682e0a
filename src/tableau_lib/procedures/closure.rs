//! Closure of branches.
//!
//! A branch is closed when it contains some formula together with the complement of the formula.
//! The complement of a rendering toggles a leading `~`, so `p` and `~p` are complements, as are `(p or q)` and `~(p or q)`.
//!
//! Comparison is on renderings, and so two formulas which are equivalent though rendered differently are not complements.
//!
//! ```rust
//! # use std::collections::BTreeSet;
//! # use tableau_lib::procedures::closure::is_closed;
//! assert!(is_closed(&BTreeSet::from(["p", "~p", "q"])));
//! assert!(!is_closed(&BTreeSet::from(["p", "q"])));
//! ```

use std::collections::BTreeSet;

use crate::misc::log::targets::{self};

/// The complement of a rendering.
pub fn complement(label: &str) -> std::borrow::Cow<'_, str> {
    match label.strip_prefix('~') {
        Some(positive) => std::borrow::Cow::Borrowed(positive),
        None => std::borrow::Cow::Owned(format!("~{label}")),
    }
}

/// Some complementary pair of labels, if any, with the label lacking the leading `~` first.
pub fn contradiction<'l>(labels: &BTreeSet<&'l str>) -> Option<(&'l str, &'l str)> {
    for label in labels {
        if let Some(positive) = label.strip_prefix('~') {
            if let Some(found) = labels.get(positive) {
                log::trace!(target: targets::CLOSURE, "Contradiction: {found} and {label}");
                return Some((*found, *label));
            }
        }
    }
    None
}

/// Whether `labels` contains some label together with its complement.
pub fn is_closed(labels: &BTreeSet<&str>) -> bool {
    contradiction(labels).is_some()
}
