//! Counting trie over the nucleotide alphabet
//!
//! This implements a prefix tree where:
//! - Every node has exactly five child slots, one per symbol
//! - Each node counts the sequences that pass through it and the
//!   sequences that end at it
//! - Traversal is depth-first in canonical symbol order

mod node;
mod traversal;
mod tree;

pub use node::DnaNode;
pub use traversal::Traverse;
pub use tree::DnaTrie;
