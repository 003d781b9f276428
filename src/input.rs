//! Reading sequence lists from text

use crate::Result;
use std::io::BufRead;
use std::path::Path;

/// Collect sequences from a line-oriented reader
///
/// One sequence per line with surrounding whitespace trimmed. Blank lines,
/// `#` comments and FASTA-style `>` headers are skipped. Lines are not
/// validated here; invalid symbols surface on insertion.
pub fn parse_sequences<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut sequences = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('>') {
            continue;
        }
        sequences.push(trimmed.to_string());
    }
    Ok(sequences)
}

/// Read sequences from a file
pub fn read_sequences(path: &Path) -> Result<Vec<String>> {
    let file = std::fs::File::open(path)?;
    parse_sequences(std::io::BufReader::new(file))
}
