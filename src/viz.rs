//! Display helpers for tries
//!
//! Only counters and child presence are read here; nothing in this module
//! can change a trie.

use crate::model::Symbol;
use crate::trie::{DnaNode, DnaTrie};
use serde::{Deserialize, Serialize};

/// One node of the export, listed in traversal order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeExport {
    /// Label of the incoming edge
    pub symbol: Symbol,
    /// Distance from the root; the root's children are at depth 1
    pub depth: usize,
    pub through_count: u64,
    pub terminal_count: u64,
}

/// Export format for a whole trie
///
/// Nodes are flat and pre-ordered, so a node's parent is the nearest
/// earlier entry one level up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeExport {
    /// Root `through_count`, i.e. total insertions
    pub insertions: u64,
    /// Nodes below the root
    pub node_count: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<NodeExport>,
}

impl TreeExport {
    pub fn from_trie(trie: &DnaTrie) -> Self {
        let nodes: Vec<NodeExport> = walk_with_depth(trie)
            .map(|(symbol, depth, node)| NodeExport {
                symbol,
                depth,
                through_count: node.through_count(),
                terminal_count: node.terminal_count(),
            })
            .collect();
        TreeExport {
            insertions: trie.insertions(),
            node_count: nodes.len(),
            nodes,
        }
    }
}

/// Render a trie as indented text, one node per line
///
/// ```text
/// root through=2
///   A through=2 terminal=1
///     C through=1 terminal=1
/// ```
pub fn render_tree(trie: &DnaTrie) -> String {
    let mut out = format!("root through={}\n", trie.root().through_count());
    for (symbol, depth, node) in walk_with_depth(trie) {
        out.push_str(&format!(
            "{:indent$}{} through={} terminal={}\n",
            "",
            symbol,
            node.through_count(),
            node.terminal_count(),
            indent = depth * 2
        ));
    }
    out
}

/// Pre-order walk that also reports each node's depth
fn walk_with_depth(trie: &DnaTrie) -> impl Iterator<Item = (Symbol, usize, &DnaNode)> {
    let mut stack: Vec<(Symbol, usize, &DnaNode)> = trie
        .root()
        .children()
        .rev()
        .map(|(symbol, child)| (symbol, 1, child))
        .collect();
    std::iter::from_fn(move || {
        let (symbol, depth, node) = stack.pop()?;
        stack.extend(
            node.children()
                .rev()
                .map(|(s, child)| (s, depth + 1, child)),
        );
        Some((symbol, depth, node))
    })
}
