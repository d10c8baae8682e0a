//! Display of derivation trees and branches on a terminal.
//!
//! Colour is only added when asked for, as escape codes would otherwise break up the line protocol when output is piped.

use crossterm::style::{Color, Stylize};
use slotmap::SecondaryMap;

use tableau_lib::{
    procedures::closure::contradiction,
    reports::BranchReport,
    tree::{DerivationTree, NodeKey, Rule},
};

/// Whether stdout is a terminal, and so whether to colour output.
pub fn colour_stdout() -> bool {
    use crossterm::tty::IsTty;
    std::io::stdout().is_tty()
}

fn paint(text: String, colour: Color, enabled: bool) -> String {
    match enabled {
        true => text.with(colour).to_string(),
        false => text,
    }
}

/// The tree as an indented outline, one node to a line, with each leaf marked closed or open.
pub fn tree_outline(tree: &DerivationTree, colour: bool) -> Vec<String> {
    let mut rules: SecondaryMap<NodeKey, Rule> = SecondaryMap::new();
    for edge in tree.edges() {
        rules.insert(edge.target, edge.rule);
    }

    let mut lines = Vec::with_capacity(tree.node_count());
    let mut stack = vec![(tree.root(), 0_usize)];

    while let Some((key, depth)) = stack.pop() {
        let Some(node) = tree.node(key) else {
            continue;
        };

        let mut line = format!("c {}{}", "  ".repeat(depth), node.rendered());

        if let Some(rule) = rules.get(key) {
            line.push_str("  ");
            line.push_str(&paint(format!("[{rule}]"), Color::DarkGrey, colour));
        }

        if tree.is_leaf(key) {
            line.push_str("  ");
            match contradiction(&tree.branch_labels(key)) {
                Some((positive, negative)) => line.push_str(&paint(
                    format!("closed ({positive}, {negative})"),
                    Color::Green,
                    colour,
                )),
                None => line.push_str(&paint("open".to_string(), Color::Red, colour)),
            }
        }

        lines.push(line);

        for child in tree.children(key).iter().rev() {
            stack.push((*child, depth + 1));
        }
    }

    lines
}

/// Each branch on a line, with its verdict.
pub fn branch_lines(branches: &[BranchReport], colour: bool) -> Vec<String> {
    branches
        .iter()
        .enumerate()
        .map(|(index, branch)| {
            let verdict = match &branch.contradiction {
                Some((positive, negative)) => {
                    paint(format!("closed by {positive} and {negative}"), Color::Green, colour)
                }
                None => paint("open".to_string(), Color::Red, colour),
            };
            format!("c Branch {}: {} | {verdict}", index + 1, branch.labels.join(", "))
        })
        .collect()
}
