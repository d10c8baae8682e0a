//! A library for determining whether a propositional formula is a tautology, by the analytic tableau method.
//!
//! A formula is built from variables with negation and the binary connectives of conjunction, disjunction, implication, and equivalence.
//! The library decides whether a formula is true on every assignment of values to its variables, and when it is not, gives an assignment on which the formula is false.
//!
//! # Orientation
//!
//! The library is designed around a [context].
//!
//! Contexts are built with a [configuration](crate::config) and check formulas given either as [structures](crate::structures::formula) or as text to be [parsed](crate::parser).
//!
//! A check attempts to refute the negation of a formula:
//! - The negated formula is [normalized](crate::procedures::normalize), so negation is recorded as the sign of a formula.
//! - The normalized formula is placed at the root of a [derivation tree](crate::tree), and the tree is [grown](crate::procedures::grow) by [expanding](crate::procedures::expand) each compound formula below each leaf it reaches.
//! - Each branch of the finished tree is tested for [closure](crate::procedures::closure).
//!
//! If every branch is closed the negated formula has no model, and so the formula is a tautology.
//! Otherwise, the literals on an open branch describe a [countermodel](crate::reports::Countermodel).
//!
//! Useful starting points, then, may be:
//! - The [rule table](crate::procedures::expand) to see how each kind of formula is expanded.
//! - The [derivation tree](crate::tree) to see how branches are tracked.
//! - The [truth table method](crate::procedures::truth_table), kept as an independent check.
//!
//! # Examples
//!
//! + Check some formulas, built programatically.
//!
//! ```rust
//! # use tableau_lib::context::check_tautology;
//! # use tableau_lib::structures::formula::Formula;
//! let p = Formula::literal("p");
//! let q = Formula::literal("q");
//!
//! // ~(p and q) <=> (~p or ~q)
//! let de_morgan = Formula::equivalence(
//!     Formula::negation(Formula::conjunction(p.clone(), q.clone())),
//!     Formula::disjunction(Formula::negation(p.clone()), Formula::negation(q.clone())),
//! );
//! assert!(check_tautology(de_morgan).is_ok_and(|report| report.is_tautology()));
//!
//! let report = check_tautology(Formula::implication(p, q)).unwrap();
//! let countermodel = report.countermodel().unwrap();
//! assert_eq!(countermodel.value_of("p"), Some(true));
//! assert_eq!(countermodel.value_of("q"), Some(false));
//! ```
//!
//! + Parse and check a formula, and inspect the derivation tree.
//!
//! ```rust
//! # use tableau_lib::config::Config;
//! # use tableau_lib::context::Context;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let report = the_context.check_str("((p => q) or (q => p))").unwrap();
//! assert!(report.is_tautology());
//!
//! let tree = the_context.tree().unwrap();
//! assert_eq!(tree.node(tree.root()).unwrap().rendered(), "~((p => q) or (q => p))");
//! assert!(the_context.branches().iter().all(|branch| branch.is_closed()));
//! ```
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made, with a variety of targets defined in order to help narrow output to relevant parts of the library.
//! The library never initialises a logger.
//!
//! The targets are listed in [misc::log].
//!
//! For example, rule applications are logged at the trace level to the [expansion](crate::misc::log::targets::EXPANSION) target, and the verdict on each branch is logged at the debug level to the [closure](crate::misc::log::targets::CLOSURE) target.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod config;
pub mod context;
pub mod parser;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod tree;
pub mod types;

pub mod misc;
