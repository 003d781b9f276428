//! Trie node type

use crate::model::{Symbol, ALPHABET_SIZE};
use std::fmt;

/// A node in the counting trie
///
/// Children live in a fixed array indexed by [`Symbol::index`], so a node
/// costs five pointer-sized slots plus two counters regardless of how many
/// children it actually has.
///
/// A single long read makes a chain as deep as the read, so `Clone`,
/// `PartialEq` and `Drop` walk the subtree with an explicit stack.
#[derive(Default)]
pub struct DnaNode {
    children: [Option<Box<DnaNode>>; ALPHABET_SIZE],
    /// Inserted sequences whose path visits this node
    through_count: u64,
    /// Inserted sequences ending exactly here
    terminal_count: u64,
}

impl DnaNode {
    /// Create an empty node
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of inserted sequences whose path includes this node
    pub fn through_count(&self) -> u64 {
        self.through_count
    }

    /// Number of inserted sequences that end at this node
    pub fn terminal_count(&self) -> u64 {
        self.terminal_count
    }

    /// Get the child reached via `symbol`, if any sequence used that edge
    pub fn child(&self, symbol: Symbol) -> Option<&DnaNode> {
        self.children[symbol.index()].as_deref()
    }

    /// Check whether the `symbol` slot is occupied
    pub fn has_child(&self, symbol: Symbol) -> bool {
        self.children[symbol.index()].is_some()
    }

    /// Occupied children in canonical symbol order
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (Symbol, &DnaNode)> + '_ {
        Symbol::ALL
            .into_iter()
            .zip(self.children.iter())
            .filter_map(|(symbol, slot)| slot.as_deref().map(|child| (symbol, child)))
    }

    /// Check if no sequence extends past this node
    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    /// Child at `symbol`, created on first use
    pub(super) fn child_or_insert(&mut self, symbol: Symbol) -> &mut DnaNode {
        self.children[symbol.index()].get_or_insert_with(Box::default)
    }

    pub(super) fn record_pass(&mut self) {
        self.through_count += 1;
    }

    /// Termination is one more pass-through on top of the terminal tally.
    pub(super) fn record_end(&mut self) -> u64 {
        self.through_count += 1;
        self.terminal_count += 1;
        self.terminal_count
    }

    /// Same counters, no children
    fn shallow_copy(&self) -> Self {
        DnaNode {
            children: Default::default(),
            through_count: self.through_count,
            terminal_count: self.terminal_count,
        }
    }
}

impl Clone for DnaNode {
    fn clone(&self) -> Self {
        let mut copy = self.shallow_copy();
        {
            let mut stack: Vec<(&DnaNode, &mut DnaNode)> = vec![(self, &mut copy)];
            while let Some((src, dst)) = stack.pop() {
                for (from, to) in src.children.iter().zip(dst.children.iter_mut()) {
                    if let Some(from) = from.as_deref() {
                        let to = to.insert(Box::new(from.shallow_copy()));
                        stack.push((from, &mut **to));
                    }
                }
            }
        }
        copy
    }
}

impl PartialEq for DnaNode {
    fn eq(&self, other: &Self) -> bool {
        let mut stack: Vec<(&DnaNode, &DnaNode)> = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.through_count != b.through_count || a.terminal_count != b.terminal_count {
                return false;
            }
            for (x, y) in a.children.iter().zip(b.children.iter()) {
                match (x.as_deref(), y.as_deref()) {
                    (Some(x), Some(y)) => stack.push((x, y)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Eq for DnaNode {}

impl Drop for DnaNode {
    fn drop(&mut self) {
        // Detach children first so each box is freed with empty slots
        let mut stack: Vec<Box<DnaNode>> =
            self.children.iter_mut().filter_map(Option::take).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}

/// Shows counters and occupied slots only, not the subtree
impl fmt::Debug for DnaNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let children: Vec<Symbol> = self.children().map(|(symbol, _)| symbol).collect();
        f.debug_struct("DnaNode")
            .field("through_count", &self.through_count)
            .field("terminal_count", &self.terminal_count)
            .field("children", &children)
            .finish()
    }
}
