//! The context of a tautology check.
//!
//! A context holds a [configuration](crate::config) and, after a check, the derivation tree of the check along with a summary of each branch.
//!
//! A check of a formula F proceeds by:
//! 1. Wrapping F in a negation, and [normalizing](crate::procedures::normalize) the result.
//! 2. [Growing](crate::procedures::grow) a derivation tree from the normalized formula until no formula is pending.
//! 3. Testing each branch of the tree for [closure](crate::procedures::closure).
//!
//! F is a tautology exactly when every branch is closed.
//! Otherwise, the literals of the first open branch give a [countermodel](crate::reports::Countermodel).
//!
//! ```rust
//! # use tableau_lib::config::Config;
//! # use tableau_lib::context::Context;
//! # use tableau_lib::reports::Report;
//! let mut ctx = Context::from_config(Config::default());
//!
//! assert_eq!(ctx.check_str("((p and (p => q)) => q)"), Ok(Report::Tautology));
//!
//! let report = ctx.check_str("(p and q)").unwrap();
//! assert!(!report.is_tautology());
//! assert_eq!(report.countermodel().and_then(|model| model.value_of("p")), Some(false));
//! ```

use std::collections::BTreeMap;

use crate::{
    config::Config,
    misc::log::targets::{self},
    parser,
    procedures::{
        closure::contradiction,
        normalize::normalize,
        truth_table::{self, TableOutcome},
    },
    reports::{BranchReport, Countermodel, Report},
    structures::formula::Formula,
    tree::{DerivationTree, NodeKey},
    types::err::{self},
};

pub struct Context {
    pub config: Config,

    tree: Option<DerivationTree>,
    branches: Vec<BranchReport>,
    report: Option<Report>,
    rounds: usize,
}

impl Context {
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            tree: None,
            branches: Vec::new(),
            report: None,
            rounds: 0,
        }
    }

    /// The derivation tree of the most recent check, if any.
    pub fn tree(&self) -> Option<&DerivationTree> {
        self.tree.as_ref()
    }

    /// A summary of each branch of the most recent check, in depth-first order.
    ///
    /// Empty if branches are not recorded.
    pub fn branches(&self) -> &[BranchReport] {
        &self.branches
    }

    /// The report of the most recent check, if any.
    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    /// The count of growth rounds taken by the most recent check.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Parses `text` and [checks](Context::check_tautology) the formula read.
    pub fn check_str(&mut self, text: &str) -> Result<Report, err::ErrorKind> {
        let formula = parser::parse(text)?;
        Ok(self.check_tautology(formula)?)
    }

    /// Decides whether `formula` is a tautology.
    pub fn check_tautology(&mut self, formula: Formula) -> Result<Report, err::TableauError> {
        self.tree = None;
        self.branches.clear();
        self.report = None;
        self.rounds = 0;

        log::info!(target: targets::GROWTH, "Checking: {formula}");

        let mut roots = normalize(vec![Formula::negation(formula)]);
        let Some(root) = roots.pop() else {
            return Err(err::TableauError::UnsupportedFormulaKind);
        };

        let limit = self.config.round_limit.for_connectives(root.connective_count());
        let mut tree = DerivationTree::new(root);
        self.rounds = tree.grow(limit)?;

        let leaves = tree.current_leaves(tree.root());
        log::debug!(target: targets::CLOSURE, "{} branches after {} rounds", leaves.len(), self.rounds);

        let mut open_leaf: Option<NodeKey> = None;

        for (index, leaf) in leaves.iter().enumerate() {
            let labels = tree.branch_labels(*leaf);
            let witness = contradiction(&labels);

            match witness {
                Some((positive, negative)) => {
                    log::debug!(target: targets::CLOSURE, "Branch {} closed by {positive} and {negative}", index + 1)
                }
                None => {
                    log::debug!(target: targets::CLOSURE, "Branch {} open", index + 1);
                    if open_leaf.is_none() {
                        open_leaf = Some(*leaf);
                    }
                }
            }

            if self.config.record_branches {
                let mut path = tree.branch(*leaf);
                path.reverse();
                self.branches.push(BranchReport {
                    labels: path
                        .into_iter()
                        .filter_map(|key| tree.node(key))
                        .map(|node| node.rendered().to_string())
                        .collect(),
                    contradiction: witness.map(|(a, b)| (a.to_string(), b.to_string())),
                });
            }
        }

        let report = match open_leaf {
            None => Report::Tautology,
            Some(leaf) => {
                let assignment = tree
                    .branch_literals(leaf)
                    .into_iter()
                    .map(|(variable, value)| (variable.to_string(), value))
                    .collect::<BTreeMap<_, _>>();
                Report::Falsifiable {
                    countermodel: Countermodel::new(assignment),
                }
            }
        };

        log::info!(target: targets::CLOSURE, "{report}");

        self.tree = Some(tree);
        self.report = Some(report.clone());
        Ok(report)
    }

    /// Checks `formula` with the truth table method, within the configured variable limit.
    pub fn truth_table(&self, formula: &Formula) -> Result<TableOutcome, err::TruthTableError> {
        truth_table::check(formula, self.config.truth_table_variable_limit)
    }

    /// Whether the tableau method and truth table method agree on `formula`.
    ///
    /// The tableau check is made first, so the report and tree of the check are kept even if the truth table method fails.
    pub fn cross_check(&mut self, formula: &Formula) -> Result<bool, err::ErrorKind> {
        let by_tableau = self.check_tautology(formula.clone())?.is_tautology();
        let by_table = self.truth_table(formula)? == TableOutcome::Tautology;
        if by_table != by_tableau {
            log::error!(target: targets::TRUTH_TABLE, "Methods disagree on {formula}: tableau {by_tableau}, table {by_table}");
        }
        Ok(by_table == by_tableau)
    }
}

/// Decides whether `formula` is a tautology, with the default configuration.
pub fn check_tautology(formula: Formula) -> Result<Report, err::TableauError> {
    Context::from_config(Config::default()).check_tautology(formula)
}
