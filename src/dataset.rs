use std::io::Read;

use itertools::Itertools;
use tracing::{debug, info};

use crate::trie::Trie;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Format {
    /// Byte separating a key from its value
    pub delimiter: u8,
    /// Lowercase every key before inserting it
    pub lowercase: bool,
}

impl Default for Format {
    fn default() -> Self {
        Self {
            delimiter: b'\t',
            lowercase: false,
        }
    }
}

/// Builds a trie from `key[<delimiter>value]` records, one per line.
///
/// Quotes carry no meaning and everything after the first delimiter is the
/// value, delimiters included. Records are put in file order, so a repeated
/// key keeps its last value.
pub fn parse(reader: impl Read, format: Format) -> Result<Trie<String>, csv::Error> {
    let mut trie = Trie::new();

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(format.delimiter)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);
    let separator = char::from(format.delimiter).to_string();
    for record in rdr.records() {
        let record = record?;
        let mut fields = record.iter();
        let Some(key) = fields.next() else {
            continue;
        };
        let key = if format.lowercase {
            key.to_lowercase()
        } else {
            key.to_owned()
        };
        debug!(%key, "loading record");
        trie.put(&key, fields.join(&separator));
    }

    info!(keys = trie.len(), depth = trie.depth(), "dataset loaded");
    Ok(trie)
}
