//! Depth-first walk of a trie

use super::DnaNode;
use crate::model::Symbol;
use std::iter::FusedIterator;

/// Iterator over every node below a root, paired with its edge symbol
///
/// Pre-order, with siblings visited in canonical symbol order. The root
/// itself is never yielded since it has no incoming edge.
#[derive(Clone, Debug)]
pub struct Traverse<'a> {
    stack: Vec<(Symbol, &'a DnaNode)>,
}

impl<'a> Traverse<'a> {
    pub(super) fn new(root: &'a DnaNode) -> Self {
        let mut stack = Vec::new();
        push_children(&mut stack, root);
        Traverse { stack }
    }
}

fn push_children<'a>(stack: &mut Vec<(Symbol, &'a DnaNode)>, node: &'a DnaNode) {
    // Reversed so the lowest symbol is popped first
    stack.extend(node.children().rev());
}

impl<'a> Iterator for Traverse<'a> {
    type Item = (Symbol, &'a DnaNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (symbol, node) = self.stack.pop()?;
        push_children(&mut self.stack, node);
        Some((symbol, node))
    }
}

impl FusedIterator for Traverse<'_> {}
