//! Growth of a derivation tree to a fixpoint.
//!
//! Growth proceeds in rounds.
//! In each round every node of the worklist is [expanded](DerivationTree::expand), and the edges of the expansion are recorded before the next node is expanded.
//! The derived nodes which are not literals form the worklist of the next round.
//!
//! As every formula derived from a node has fewer connectives than the formula of the node, the number of rounds is bounded by the connective count of the root.
//! A limit on rounds is still taken, and exceeding the limit is an error.

use crate::{
    config::RoundCount,
    misc::log::targets::{self},
    tree::{DerivationTree, NodeKey},
    types::err::{self},
};

impl DerivationTree {
    /// Expands each node of the worklist, and replaces the worklist with the non-literal nodes derived.
    pub fn growth_round(&mut self) -> Result<(), err::TableauError> {
        let current = self.take_worklist();
        let mut pending: Vec<NodeKey> = Vec::new();

        for key in current {
            let expanded = self.expand(key)?;

            for edge in expanded.edges {
                self.record(edge);
            }

            pending.extend(expanded.derived.into_iter().filter(|derived| {
                self.node(*derived)
                    .is_some_and(|node| !node.formula().is_literal())
            }));
        }

        log::debug!(target: targets::GROWTH, "Round complete with {} pending and {} edges", pending.len(), self.edges().len());
        self.extend_worklist(pending);
        Ok(())
    }

    /// Grows the tree until the worklist is empty, returning the number of rounds taken.
    ///
    /// If the worklist is not empty after `limit` rounds, growth stops with an error.
    pub fn grow(&mut self, limit: RoundCount) -> Result<RoundCount, err::TableauError> {
        let mut rounds = 0;

        while !self.worklist().is_empty() {
            if rounds == limit {
                log::error!(target: targets::GROWTH, "Round limit of {limit} reached");
                return Err(err::TableauError::RoundLimitExceeded { limit });
            }
            rounds += 1;
            log::debug!(target: targets::GROWTH, "Round {rounds} with {} pending", self.worklist().len());
            self.growth_round()?;
        }

        Ok(rounds)
    }
}
