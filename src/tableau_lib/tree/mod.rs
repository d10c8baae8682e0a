//! The derivation tree of a tableau.
//!
//! A derivation tree is a root formula together with a growing list of [edges](DerivationEdge).
//! Each edge records that some formula (the target) was derived from the formula at the end of a branch (the origin) by one rule application.
//!
//! # Nodes
//!
//! Each node of the tree owns its formula, and nodes are accessed through [keys](NodeKey).
//! Identity of nodes is identity of keys, and never the rendering of the formula of a node.
//!
//! Whenever a rule attaches formulas below a number of leaves, each leaf receives fresh (deep) clones.
//! So, no formula is shared between nodes, and a node below some branching point is on exactly one branch.
//!
//! # Leaves and branches
//!
//! A node is a leaf of the tree exactly when no edge has the node as its origin.
//! The [current leaves](DerivationTree::current_leaves) below a node are the ends of the open frontier from the node, and the [labels](DerivationTree::branch_labels) of a leaf are the renderings of each node on the path from the root to the leaf.
//!
//! # Growth
//!
//! Growth of a tree is handled by [procedures::grow](crate::procedures::grow), which calls [expand](DerivationTree::expand) on each node of a worklist until the worklist is empty.
//!
//! Traversals use an explicit stack, and no traversal mutates the tree.

pub mod graph;

use std::collections::BTreeSet;

use slotmap::{new_key_type, SecondaryMap, SlotMap};

use crate::{
    misc::log::targets::{self},
    procedures::expand::{expansion, Expansion},
    structures::formula::{Connective, Formula, Kind},
    types::err::{self},
};

new_key_type! {
    /// A key to a node of a derivation tree.
    pub struct NodeKey;
}

/// A node of a derivation tree.
#[derive(Clone, Debug)]
pub struct TreeNode {
    formula: Formula,
    rendered: String,
}

impl TreeNode {
    fn new(formula: Formula) -> Self {
        let rendered = formula.to_string();
        TreeNode { formula, rendered }
    }

    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    /// The canonical rendering of the formula of the node.
    pub fn rendered(&self) -> &str {
        &self.rendered
    }
}

/// Which rule produced an edge.
///
/// The application count is the order in which rules were applied during growth, and is only used to label edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Rule {
    pub connective: Connective,
    pub sign: bool,
    pub application: usize,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.sign {
            false => write!(f, "{} ({})", self.connective, self.application),
            true => write!(f, "~{} ({})", self.connective, self.application),
        }
    }
}

/// A record of `target` being derived from `origin` by `rule`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DerivationEdge {
    pub origin: NodeKey,
    pub target: NodeKey,
    pub rule: Rule,
}

/// Nodes derived by an expansion, and the edges which attach them.
#[derive(Debug, Default)]
pub struct Expanded {
    pub derived: Vec<NodeKey>,
    pub edges: Vec<DerivationEdge>,
}

#[derive(Debug)]
pub struct DerivationTree {
    nodes: SlotMap<NodeKey, TreeNode>,
    root: NodeKey,
    edges: Vec<DerivationEdge>,

    /// For each node with an outgoing edge, the targets of those edges, in order of addition.
    children: SecondaryMap<NodeKey, Vec<NodeKey>>,

    /// For each node other than the root, the origin of its (unique) incoming edge.
    parent: SecondaryMap<NodeKey, NodeKey>,

    /// Nodes awaiting expansion.
    worklist: Vec<NodeKey>,

    applications: usize,
}

impl DerivationTree {
    /// A tree with `root` as its only node.
    ///
    /// The root is placed on the worklist, unless it is a literal.
    pub fn new(root: Formula) -> Self {
        let mut nodes = SlotMap::with_key();
        let root_is_literal = root.is_literal();
        let root = nodes.insert(TreeNode::new(root));
        DerivationTree {
            nodes,
            root,
            edges: Vec::new(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            worklist: if root_is_literal { vec![] } else { vec![root] },
            applications: 0,
        }
    }

    pub fn root(&self) -> NodeKey {
        self.root
    }

    pub fn node(&self, key: NodeKey) -> Option<&TreeNode> {
        self.nodes.get(key)
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeKey, &TreeNode)> {
        self.nodes.iter()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edges(&self) -> &[DerivationEdge] {
        &self.edges
    }

    /// The targets of edges from `key`, in order of addition.
    pub fn children(&self, key: NodeKey) -> &[NodeKey] {
        match self.children.get(key) {
            Some(children) => children.as_slice(),
            None => &[],
        }
    }

    /// The origin of the edge to `key`, if `key` is not the root.
    pub fn parent(&self, key: NodeKey) -> Option<NodeKey> {
        self.parent.get(key).copied()
    }

    pub fn is_leaf(&self, key: NodeKey) -> bool {
        self.children(key).is_empty()
    }

    /// Nodes awaiting expansion.
    pub fn worklist(&self) -> &[NodeKey] {
        &self.worklist
    }

    pub(crate) fn take_worklist(&mut self) -> Vec<NodeKey> {
        std::mem::take(&mut self.worklist)
    }

    pub(crate) fn extend_worklist(&mut self, keys: impl IntoIterator<Item = NodeKey>) {
        self.worklist.extend(keys)
    }

    /// A count of rule applications made during growth.
    pub fn applications(&self) -> usize {
        self.applications
    }

    /// Records `edge`, linking its origin and target.
    pub fn record(&mut self, edge: DerivationEdge) {
        match self.children.get_mut(edge.origin) {
            Some(children) => children.push(edge.target),
            None => {
                self.children.insert(edge.origin, vec![edge.target]);
            }
        }
        self.parent.insert(edge.target, edge.origin);
        self.edges.push(edge);
    }

    /// Expands the formula at `key` below each of the current leaves from `key`.
    ///
    /// The derived nodes are added to the tree, but the edges are returned without being recorded.
    /// So, a caller should [record](DerivationTree::record) each edge before a further expansion.
    pub fn expand(&mut self, key: NodeKey) -> Result<Expanded, err::TableauError> {
        let (expansion, connective, sign) = {
            let Some(node) = self.nodes.get(key) else {
                return Ok(Expanded::default());
            };
            let expansion = expansion(&node.formula)?;
            // Negation wrappers are rejected above, so only literals remain.
            let Some((connective, _, _)) = node.formula.arguments() else {
                return Ok(Expanded::default());
            };
            log::trace!(target: targets::EXPANSION, "Expanding: {}", node.rendered);
            (expansion, connective, node.formula.sign())
        };

        self.applications += 1;
        let rule = Rule {
            connective,
            sign,
            application: self.applications,
        };
        log::trace!(target: targets::EXPANSION, "Rule: {rule}");

        let mut expanded = Expanded::default();

        for leaf in self.current_leaves(key) {
            // Fresh clones for each leaf, so no node is shared between branches.
            match &expansion {
                Expansion::Terminal => {}

                Expansion::Linear(a, b) => {
                    let a = self.attach(leaf, a.clone(), rule, &mut expanded);
                    self.attach(a, b.clone(), rule, &mut expanded);
                }

                Expansion::Branching(a, b) => {
                    self.attach(leaf, a.clone(), rule, &mut expanded);
                    self.attach(leaf, b.clone(), rule, &mut expanded);
                }

                Expansion::Split((a, b), (c, d)) => {
                    let a = self.attach(leaf, a.clone(), rule, &mut expanded);
                    self.attach(a, b.clone(), rule, &mut expanded);
                    let c = self.attach(leaf, c.clone(), rule, &mut expanded);
                    self.attach(c, d.clone(), rule, &mut expanded);
                }
            }
        }

        Ok(expanded)
    }

    /// Adds `formula` as a fresh node derived from `origin`, noting the node and edge in `expanded`.
    fn attach(
        &mut self,
        origin: NodeKey,
        formula: Formula,
        rule: Rule,
        expanded: &mut Expanded,
    ) -> NodeKey {
        let target = self.nodes.insert(TreeNode::new(formula));
        log::trace!(target: targets::EXPANSION, "+Node: {}", self.nodes[target].rendered);
        expanded.derived.push(target);
        expanded.edges.push(DerivationEdge {
            origin,
            target,
            rule,
        });
        target
    }

    /// The nodes reachable from `key` with no outgoing edge, in depth-first order.
    ///
    /// Only [recorded](DerivationTree::record) edges are followed.
    pub fn current_leaves(&self, key: NodeKey) -> Vec<NodeKey> {
        let mut leaves = Vec::new();
        let mut stack = vec![key];
        while let Some(node) = stack.pop() {
            let children = self.children(node);
            match children.is_empty() {
                true => leaves.push(node),
                false => stack.extend(children.iter().rev()),
            }
        }
        leaves
    }

    /// The keys of the nodes on the path from the root to `leaf`, from the leaf upwards.
    pub fn branch(&self, leaf: NodeKey) -> Vec<NodeKey> {
        let mut path = vec![leaf];
        let mut current = leaf;
        while let Some(parent) = self.parent(current) {
            path.push(parent);
            current = parent;
        }
        path
    }

    /// The renderings of each node on the path from the root to `leaf`, including both.
    pub fn branch_labels(&self, leaf: NodeKey) -> BTreeSet<&str> {
        self.branch(leaf)
            .into_iter()
            .filter_map(|key| self.nodes.get(key))
            .map(|node| node.rendered.as_str())
            .collect()
    }

    /// The literals on the path from the root to `leaf`, as (variable, value) pairs.
    ///
    /// An unsigned literal is valued true, and a signed literal false.
    pub fn branch_literals(&self, leaf: NodeKey) -> Vec<(&str, bool)> {
        self.branch(leaf)
            .into_iter()
            .filter_map(|key| self.nodes.get(key))
            .filter_map(|node| match node.formula.kind() {
                Kind::Literal(name) => Some((name.as_str(), !node.formula.sign())),
                _ => None,
            })
            .collect()
    }
}
