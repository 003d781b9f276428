//! # dna_bag
//!
//! A compact counting trie for DNA sequences.
//!
//! Sequences are drawn from the alphabet {A, C, G, T, N} (either case).
//! Each trie node keeps a fixed array of five child slots instead of a map,
//! and tracks two counters: how many inserted sequences pass through it and
//! how many end at it.
//!
//! ## Core Concepts
//!
//! - **Symbols**: the five canonical bases, which double as child slot indices
//! - **Nodes**: five optional children plus `through_count` and `terminal_count`
//! - **Traversal**: depth-first, canonical order, yielding `(edge symbol, node)`
//! - **Composition**: per-symbol totals of `through_count`, e.g. GC content
//!
//! ## Example
//!
//! ```
//! use dna_bag::{process_sequences, DnaTrie};
//!
//! let mut trie = DnaTrie::new();
//! trie.insert("ACGT")?;
//! assert_eq!(trie.insert("acgt")?, 2);
//! assert_eq!(trie.count_of("AC")?, 0);
//! assert_eq!(trie.prefix_count("AC")?, 2);
//!
//! let gc = process_sequences(["ACTG", "AACT", "TCAGG", "TTGGA"], ["C", "G"])?;
//! assert_eq!(gc, (8, 18));
//! # Ok::<(), dna_bag::Error>(())
//! ```

pub mod config;
pub mod input;
pub mod model;
pub mod shared;
pub mod stats;
pub mod trie;
pub mod viz;

mod error;

pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use model::{parse_targets, translate, Symbol, SymbolSet, ALPHABET_SIZE};
pub use shared::SharedTrie;
pub use stats::{composition, process_sequences, Composition, SymbolCounts};
pub use trie::{DnaNode, DnaTrie, Traverse};
pub use viz::{render_tree, NodeExport, TreeExport};
