//! The five-letter nucleotide alphabet used as trie edge labels

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of child slots per trie node
pub const ALPHABET_SIZE: usize = 5;

/// A canonical nucleotide symbol
///
/// The discriminant is the child slot index used by every trie node,
/// so the declaration order here is also the traversal order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Symbol {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
    /// Ambiguous base
    N = 4,
}

impl Symbol {
    /// All symbols in canonical slot order
    pub const ALL: [Symbol; ALPHABET_SIZE] = [Symbol::A, Symbol::C, Symbol::G, Symbol::T, Symbol::N];

    /// Map an ASCII byte (either case) onto a symbol
    #[inline]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'A' | b'a' => Some(Symbol::A),
            b'C' | b'c' => Some(Symbol::C),
            b'G' | b'g' => Some(Symbol::G),
            b'T' | b't' => Some(Symbol::T),
            b'N' | b'n' => Some(Symbol::N),
            _ => None,
        }
    }

    /// Map a character (either case) onto a symbol
    #[inline]
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii() {
            Self::from_ascii(c as u8)
        } else {
            None
        }
    }

    /// Symbol stored at the given child slot
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Symbol::A),
            1 => Some(Symbol::C),
            2 => Some(Symbol::G),
            3 => Some(Symbol::T),
            4 => Some(Symbol::N),
            _ => None,
        }
    }

    /// Child slot index (0..5)
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Uppercase letter for this symbol
    pub const fn to_char(self) -> char {
        match self {
            Symbol::A => 'A',
            Symbol::C => 'C',
            Symbol::G => 'G',
            Symbol::T => 'T',
            Symbol::N => 'N',
        }
    }
}

impl TryFrom<char> for Symbol {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        Symbol::from_char(c).ok_or(Error::InvalidSymbol {
            character: c,
            position: 0,
        })
    }
}

impl FromStr for Symbol {
    type Err = Error;

    /// Parse a single-letter symbol such as `"g"` or `"N"`
    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Symbol::try_from(c),
            (Some(_), Some(extra)) => Err(Error::InvalidSymbol {
                character: extra,
                position: 1,
            }),
            (None, _) => Err(Error::Config("Empty target symbol".into())),
        }
    }
}

impl From<Symbol> for char {
    fn from(symbol: Symbol) -> char {
        symbol.to_char()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Translate a whole sequence into slot symbols
///
/// Fails on the first rejected character, so callers can validate a
/// sequence completely before mutating anything.
pub fn translate(sequence: &str) -> Result<Vec<Symbol>> {
    sequence
        .chars()
        .enumerate()
        .map(|(position, character)| {
            Symbol::from_char(character).ok_or(Error::InvalidSymbol {
                character,
                position,
            })
        })
        .collect()
}

/// A set of symbols packed into one byte
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SymbolSet(u8);

impl SymbolSet {
    /// The empty set
    pub const fn empty() -> Self {
        SymbolSet(0)
    }

    /// Every symbol of the alphabet
    pub const fn all() -> Self {
        SymbolSet((1 << ALPHABET_SIZE) - 1)
    }

    pub fn insert(&mut self, symbol: Symbol) -> bool {
        let bit = 1 << symbol.index();
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.0 & (1 << symbol.index()) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Members in canonical order
    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        Symbol::ALL.into_iter().filter(move |s| self.contains(*s))
    }
}

impl FromIterator<Symbol> for SymbolSet {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        let mut set = SymbolSet::empty();
        for symbol in iter {
            set.insert(symbol);
        }
        set
    }
}

impl fmt::Debug for SymbolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for SymbolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: Vec<String> = self.iter().map(|s| s.to_string()).collect();
        write!(f, "{}", letters.join(", "))
    }
}

/// Parse caller-supplied target letters into a set
///
/// Each item must be exactly one accepted letter; repeats collapse.
pub fn parse_targets<I, S>(targets: I) -> Result<SymbolSet>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    targets
        .into_iter()
        .map(|t| t.as_ref().parse::<Symbol>())
        .collect()
}
