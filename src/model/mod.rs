//! Core data model types for dna_bag

mod symbol;

pub use symbol::{parse_targets, translate, Symbol, SymbolSet, ALPHABET_SIZE};
