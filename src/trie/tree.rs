//! Counting trie implementation

use super::{DnaNode, Traverse};
use crate::model::{translate, Symbol};
use crate::Result;

/// A trie that counts DNA sequences and their prefixes
///
/// Owns the root node; every other node is owned by its parent's child
/// slot. Nodes are only ever created or incremented by [`DnaTrie::insert`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DnaTrie {
    root: DnaNode,
}

impl DnaTrie {
    /// Create a new empty trie
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trie from an initial collection of sequences
    pub fn from_sequences<I, S>(sequences: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = DnaTrie::new();
        trie.insert_all(sequences)?;
        Ok(trie)
    }

    /// Insert one sequence and return how many times it has now been inserted
    ///
    /// The whole sequence is validated before any counter changes, so an
    /// `InvalidSymbol` error leaves the trie untouched.
    pub fn insert(&mut self, sequence: &str) -> Result<u64> {
        let path = translate(sequence)?;

        let mut node = &mut self.root;
        for symbol in path {
            node.record_pass();
            node = node.child_or_insert(symbol);
        }
        Ok(node.record_end())
    }

    /// Insert sequences in order, stopping at the first invalid one
    ///
    /// Sequences before the failing one remain inserted.
    pub fn insert_all<I, S>(&mut self, sequences: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for sequence in sequences {
            self.insert(sequence.as_ref())?;
        }
        Ok(())
    }

    /// How many times exactly `sequence` was inserted
    pub fn count_of(&self, sequence: &str) -> Result<u64> {
        Ok(self.find(sequence)?.map_or(0, DnaNode::terminal_count))
    }

    /// How many inserted sequences start with `prefix`
    pub fn prefix_count(&self, prefix: &str) -> Result<u64> {
        Ok(self.find(prefix)?.map_or(0, DnaNode::through_count))
    }

    /// Walk every node below the root in canonical depth-first order
    pub fn traverse(&self) -> Traverse<'_> {
        Traverse::new(&self.root)
    }

    /// The root node (no edge symbol, never yielded by traversal)
    pub fn root(&self) -> &DnaNode {
        &self.root
    }

    /// Total number of successful insertions
    pub fn insertions(&self) -> u64 {
        self.root.through_count()
    }

    /// Number of nodes, not counting the root
    pub fn node_count(&self) -> usize {
        self.traverse().count()
    }

    /// Check if nothing has been inserted
    pub fn is_empty(&self) -> bool {
        self.insertions() == 0
    }

    // === Internal helpers ===

    fn find(&self, sequence: &str) -> Result<Option<&DnaNode>> {
        let path = translate(sequence)?;

        let mut node = &self.root;
        for symbol in path {
            match node.child(symbol) {
                Some(child) => node = child,
                None => return Ok(None),
            }
        }
        Ok(Some(node))
    }
}

impl<'a> IntoIterator for &'a DnaTrie {
    type Item = (Symbol, &'a DnaNode);
    type IntoIter = Traverse<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.traverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node<'a>(trie: &'a DnaTrie, path: &str) -> &'a DnaNode {
        trie.find(path).unwrap().expect("node should exist")
    }

    #[test]
    fn test_trie_structure() {
        let trie = DnaTrie::from_sequences(["AAC", "AA", "TG", "C"]).unwrap();

        let root = trie.root();
        assert_eq!(root.through_count(), 4);
        assert_eq!(root.terminal_count(), 0);
        assert!(!root.has_child(Symbol::G));
        assert!(!root.has_child(Symbol::N));

        let a = node(&trie, "A");
        assert_eq!(a.through_count(), 2);
        assert_eq!(a.terminal_count(), 0);

        let aa = node(&trie, "AA");
        assert_eq!(aa.through_count(), 2);
        assert_eq!(aa.terminal_count(), 1);

        let aac = node(&trie, "AAC");
        assert_eq!(aac.through_count(), 1);
        assert_eq!(aac.terminal_count(), 1);

        let c = node(&trie, "C");
        assert_eq!(c.through_count(), 1);
        assert_eq!(c.terminal_count(), 1);

        let t = node(&trie, "T");
        assert_eq!(t.through_count(), 1);
        assert_eq!(t.terminal_count(), 0);

        let tg = node(&trie, "TG");
        assert_eq!(tg.through_count(), 1);
        assert_eq!(tg.terminal_count(), 1);
    }

    #[test]
    fn test_terminal_node_counted_twice() {
        // One pass from descending into it, one for ending there
        let mut trie = DnaTrie::new();
        trie.insert("AC").unwrap();
        trie.insert("A").unwrap();

        let a = node(&trie, "A");
        assert_eq!(a.through_count(), 2);
        assert_eq!(a.terminal_count(), 1);
        assert_eq!(node(&trie, "AC").through_count(), 1);
    }

    #[test]
    fn test_insert_returns_count() {
        let mut trie = DnaTrie::new();
        assert_eq!(trie.insert("A").unwrap(), 1);
        assert_eq!(trie.insert("a").unwrap(), 2);
        assert_eq!(trie.count_of("A").unwrap(), 2);
        assert_eq!(trie.count_of("T").unwrap(), 0);
    }

    #[test]
    fn test_count_of_ignores_prefixes() {
        let trie = DnaTrie::from_sequences(["ACGT", "ACGT", "ACG"]).unwrap();
        assert_eq!(trie.count_of("ACGT").unwrap(), 2);
        assert_eq!(trie.count_of("ACG").unwrap(), 1);
        assert_eq!(trie.count_of("AC").unwrap(), 0);
        assert_eq!(trie.count_of("ACGTA").unwrap(), 0);
        assert_eq!(trie.prefix_count("AC").unwrap(), 3);
        assert_eq!(trie.prefix_count("ACGT").unwrap(), 2);
        assert_eq!(trie.prefix_count("G").unwrap(), 0);
    }

    #[test]
    fn test_case_insensitive() {
        let trie = DnaTrie::from_sequences(["acgtn", "ACGTN"]).unwrap();
        assert_eq!(trie.count_of("AcGtN").unwrap(), 2);
        assert_eq!(trie.node_count(), 5);
    }

    #[test]
    fn test_empty_sequence() {
        let mut trie = DnaTrie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.insert("").unwrap(), 1);
        assert_eq!(trie.root().through_count(), 1);
        assert_eq!(trie.root().terminal_count(), 1);
        assert_eq!(trie.count_of("").unwrap(), 1);
        assert_eq!(trie.node_count(), 0);
        assert!(!trie.is_empty());
    }

    #[test]
    fn test_invalid_insert_leaves_trie_unchanged() {
        let mut trie = DnaTrie::from_sequences(["ACT", "AG"]).unwrap();
        let before = trie.clone();

        let err = trie.insert("ACB").unwrap_err();
        assert!(err.is_invalid_symbol());
        assert_eq!(trie, before);

        assert!(trie.insert("B").is_err());
        assert_eq!(trie, before);
    }

    #[test]
    fn test_long_read_clone_compare_drop() {
        const LONG_READ: usize = 150_000;
        let read: String = "ACGTN".chars().cycle().take(LONG_READ).collect();

        // A small stack fails fast if any walk over the chain recurses
        std::thread::Builder::new()
            .stack_size(256 * 1024)
            .spawn(move || {
                let mut trie = DnaTrie::new();
                assert_eq!(trie.insert(&read).unwrap(), 1);
                assert_eq!(trie.node_count(), LONG_READ);
                assert_eq!(trie.prefix_count(&read[..LONG_READ / 2]).unwrap(), 1);

                let copy = trie.clone();
                assert_eq!(copy, trie);

                assert_eq!(trie.insert(&read).unwrap(), 2);
                assert_ne!(copy, trie);
                assert_eq!(copy.count_of(&read).unwrap(), 1);
                assert!(format!("{:?}", trie).contains("through_count: 2"));

                drop(copy);
                drop(trie);
            })
            .unwrap()
            .join()
            .unwrap();
    }

    #[test]
    fn test_invalid_lookup_is_error_not_zero() {
        let trie = DnaTrie::from_sequences(["A"]).unwrap();
        assert!(trie.count_of("X").unwrap_err().is_invalid_symbol());
        assert!(trie.prefix_count("AU").is_err());
        assert_eq!(trie.count_of("G").unwrap(), 0);
    }

    #[test]
    fn test_insert_all_stops_at_first_error() {
        let mut trie = DnaTrie::new();
        let result = trie.insert_all(["AC", "AZ", "GG"]);
        assert!(result.is_err());
        assert_eq!(trie.insertions(), 1);
        assert_eq!(trie.count_of("AC").unwrap(), 1);
        assert_eq!(trie.count_of("GG").unwrap(), 0);
    }

    #[test]
    fn test_traverse_order_and_labels() {
        let trie = DnaTrie::from_sequences(["TA", "NG", "CA", "C", "AT"]).unwrap();
        let labels: String = trie.traverse().map(|(s, _)| s.to_char()).collect();
        // A T | C A | T A | N G
        assert_eq!(labels, "ATCATANG");
    }

    #[test]
    fn test_traverse_is_restartable() {
        let trie = DnaTrie::from_sequences(["ACGT", "AGT"]).unwrap();
        let first: Vec<_> = trie.traverse().map(|(s, n)| (s, n.through_count())).collect();
        let second: Vec<_> = (&trie).into_iter().map(|(s, n)| (s, n.through_count())).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), trie.node_count());
    }

    #[test]
    fn test_traverse_empty_trie() {
        let trie = DnaTrie::new();
        assert_eq!(trie.traverse().next(), None);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        fn sequence() -> impl Strategy<Value = String> {
            "[ACGTNacgtn]{0,10}"
        }

        fn through_matches_children(node: &DnaNode) -> bool {
            let below: u64 = node.children().map(|(_, c)| c.through_count()).sum();
            node.through_count() == below + node.terminal_count()
                && node.children().all(|(_, c)| through_matches_children(c))
        }

        proptest! {
            #[test]
            fn repeated_insert_counts(seq in sequence(), n in 1u64..8) {
                let mut trie = DnaTrie::new();
                for i in 1..=n {
                    prop_assert_eq!(trie.insert(&seq).unwrap(), i);
                }
                prop_assert_eq!(trie.count_of(&seq).unwrap(), n);
            }

            #[test]
            fn insert_returns_lookup(seqs in proptest::collection::vec(sequence(), 0..20)) {
                let mut trie = DnaTrie::new();
                for seq in &seqs {
                    let returned = trie.insert(seq).unwrap();
                    prop_assert_eq!(returned, trie.count_of(seq).unwrap());
                }
                prop_assert_eq!(trie.insertions(), seqs.len() as u64);
            }

            #[test]
            fn counters_are_consistent(seqs in proptest::collection::vec(sequence(), 0..20)) {
                let trie = DnaTrie::from_sequences(&seqs).unwrap();

                prop_assert!(through_matches_children(trie.root()));
                for (_, node) in trie.traverse() {
                    prop_assert!(node.through_count() >= node.terminal_count());
                    prop_assert!(node.through_count() > 0);
                }

                let total: u64 = trie.traverse().map(|(_, n)| n.through_count()).sum();
                let lengths: u64 = seqs.iter().map(|s| s.len() as u64).sum();
                prop_assert_eq!(total, lengths);
            }

            #[test]
            fn traverse_visits_each_prefix_once(seqs in proptest::collection::vec(sequence(), 0..20)) {
                let trie = DnaTrie::from_sequences(&seqs).unwrap();

                let mut prefixes = std::collections::BTreeSet::new();
                for seq in &seqs {
                    let upper = seq.to_ascii_uppercase();
                    for end in 1..=upper.len() {
                        prefixes.insert(upper[..end].to_string());
                    }
                }
                prop_assert_eq!(trie.node_count(), prefixes.len());
            }
        }
    }
}
