//! Error types for dna_bag

use thiserror::Error;

/// Result type alias for dna_bag operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in dna_bag operations
#[derive(Error, Debug)]
pub enum Error {
    /// A character outside {A,C,G,T,N} (either case) was found in a sequence.
    #[error("Invalid symbol {character:?} at position {position}")]
    InvalidSymbol { character: char, position: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// True for the only error the trie itself can raise
    pub fn is_invalid_symbol(&self) -> bool {
        matches!(self, Error::InvalidSymbol { .. })
    }
}
