//! Symbol composition statistics over a trie
//!
//! Every node contributes its `through_count` to the symbol on its incoming
//! edge. Summed over the whole tree this counts every symbol position of
//! every inserted sequence, which gives composition figures such as GC
//! content without re-reading the input.

use crate::model::{parse_targets, Symbol, SymbolSet, ALPHABET_SIZE};
use crate::trie::DnaTrie;
use crate::Result;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Occurrence totals per symbol
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SymbolCounts {
    counts: [u64; ALPHABET_SIZE],
}

impl SymbolCounts {
    /// Accumulate `through_count` by edge symbol across the whole trie
    pub fn from_trie(trie: &DnaTrie) -> Self {
        let mut counts = [0u64; ALPHABET_SIZE];
        for (symbol, node) in trie.traverse() {
            counts[symbol.index()] += node.through_count();
        }
        SymbolCounts { counts }
    }

    pub fn get(&self, symbol: Symbol) -> u64 {
        self.counts[symbol.index()]
    }

    /// All symbol positions
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Positions occupied by any symbol in `targets`
    pub fn sum_of(&self, targets: &SymbolSet) -> u64 {
        targets.iter().map(|s| self.get(s)).sum()
    }

    /// Totals in canonical symbol order
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        Symbol::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

impl Serialize for SymbolCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ALPHABET_SIZE))?;
        for (symbol, count) in self.iter() {
            map.serialize_entry(&symbol, &count)?;
        }
        map.end()
    }
}

/// Share of symbol positions that fall in a target set
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composition {
    /// Positions whose symbol is a target
    pub target_count: u64,
    /// All positions
    pub total_count: u64,
}

impl Composition {
    pub fn from_counts(counts: &SymbolCounts, targets: &SymbolSet) -> Self {
        Composition {
            target_count: counts.sum_of(targets),
            total_count: counts.total(),
        }
    }

    /// Target share in [0, 1], or None when nothing was counted
    pub fn fraction(&self) -> Option<f64> {
        if self.total_count == 0 {
            None
        } else {
            Some(self.target_count as f64 / self.total_count as f64)
        }
    }

    pub fn as_pair(&self) -> (u64, u64) {
        (self.target_count, self.total_count)
    }
}

/// Composition of an existing trie for the given targets
pub fn composition(trie: &DnaTrie, targets: &SymbolSet) -> Composition {
    Composition::from_counts(&SymbolCounts::from_trie(trie), targets)
}

/// Build a fresh trie from `sequences` and count target positions
///
/// Returns `(target_count, total_count)`. Targets are single letters in
/// either case; repeated targets are counted once.
pub fn process_sequences<I, S, T, U>(sequences: I, targets: T) -> Result<(u64, u64)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    T: IntoIterator<Item = U>,
    U: AsRef<str>,
{
    let targets = parse_targets(targets)?;
    let trie = DnaTrie::from_sequences(sequences)?;
    Ok(composition(&trie, &targets).as_pair())
}
