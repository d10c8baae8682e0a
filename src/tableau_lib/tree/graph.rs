//! Export of a derivation tree to a [petgraph] graph, e.g. for drawing.
//!
//! Node weights are the renderings of formulas and edge weights are rule labels, such as `Conjunction (1)`.
//! The export only reads the tree.

use petgraph::{
    dot::Dot,
    graph::{Graph, NodeIndex},
};
use slotmap::SecondaryMap;

use crate::tree::{DerivationTree, NodeKey};

impl DerivationTree {
    /// The tree as a directed graph, with nodes added in depth-first order from the root.
    pub fn to_graph(&self) -> Graph<String, String> {
        let mut graph = Graph::new();
        let mut indicies: SecondaryMap<NodeKey, NodeIndex> = SecondaryMap::new();

        let mut stack = vec![self.root()];
        while let Some(key) = stack.pop() {
            if let Some(node) = self.node(key) {
                let index = graph.add_node(node.rendered().to_string());
                indicies.insert(key, index);
            }
            stack.extend(self.children(key).iter().rev());
        }

        for edge in self.edges() {
            if let (Some(origin), Some(target)) = (indicies.get(edge.origin), indicies.get(edge.target)) {
                graph.add_edge(*origin, *target, edge.rule.to_string());
            }
        }

        graph
    }

    /// The tree in Graphviz DOT form.
    pub fn dot(&self) -> String {
        let graph = self.to_graph();
        format!("{}", Dot::new(&graph))
    }
}
