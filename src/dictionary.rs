//! Pronunciation dictionary storage and loading.
//!
//! The dictionary maps an uppercase word to every pronunciation listed for it,
//! in the order the lines were read. Source files follow the CMUdict layout:
//!
//! ```text
//! ;;; comment lines start with a semicolon
//! FIRE  F AY1 ER0
//! FIRE(2)  F AY1 R
//! ```
//!
//! Variant lines such as `FIRE(2)` are folded into the entry for `FIRE`.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::DictionaryError;

/// Matches a word carrying a variant index, e.g. `ASSOCIATE(3)` or `READ(12)`.
static VARIANT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)\(\d+\)$").expect("valid variant regex"));

/// Strip a trailing `(n)` variant index from a dictionary headword
pub fn base_word(raw: &str) -> &str {
    match VARIANT_RE.captures(raw).and_then(|c| c.get(1)) {
        Some(base) => base.as_str(),
        None => raw,
    }
}

/// An immutable word → pronunciations table
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
    entries: HashMap<String, Vec<String>>,
    pronunciation_count: usize,
}

impl Dictionary {
    /// Create a new empty dictionary
    pub fn new() -> Self {
        Dictionary::default()
    }

    /// Load a dictionary from a file in one step
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let mut builder = DictionaryBuilder::new();
        builder.load_path(path)?;
        Ok(builder.build())
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of pronunciations across all words
    pub fn pronunciation_count(&self) -> usize {
        self.pronunciation_count
    }

    /// Exact-match lookup. `word` must already be normalized to uppercase.
    pub fn lookup(&self, word: &str) -> Option<&[String]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Iterate over all headwords, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    fn push(&mut self, word: String, pronunciation: String) {
        self.entries.entry(word).or_default().push(pronunciation);
        self.pronunciation_count += 1;
    }
}

/// Builder for loading a Dictionary from CMUdict-formatted text
#[derive(Debug, Default)]
pub struct DictionaryBuilder {
    dictionary: Dictionary,
}

impl DictionaryBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        DictionaryBuilder::default()
    }

    /// Add a single dictionary line.
    ///
    /// Returns `false` when the line is blank or a comment. The phones are
    /// stored as written; they are not validated.
    pub fn add_line(&mut self, line: &str) -> bool {
        if line.starts_with(';') {
            return false;
        }
        let line = line.trim();
        if line.is_empty() {
            return false;
        }

        let (raw_word, phones) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line, ""));

        let word = base_word(raw_word).to_uppercase();
        self.dictionary.push(word, phones.trim().to_string());
        true
    }

    /// Load every line of an in-memory string
    pub fn load_str(&mut self, content: &str) -> usize {
        content.lines().filter(|line| self.add_line(line)).count()
    }

    /// Load from any buffered reader.
    ///
    /// Lines that are not valid UTF-8 are decoded lossily. On a read error the
    /// lines consumed so far remain in the builder.
    pub fn load_reader<R: BufRead>(&mut self, mut reader: R) -> Result<usize, DictionaryError> {
        let mut buf = Vec::new();
        let mut added = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            if self.add_line(&line) {
                added += 1;
            }
        }

        Ok(added)
    }

    /// Load a dictionary file from disk
    pub fn load_path(&mut self, path: impl AsRef<Path>) -> Result<usize, DictionaryError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let added = self.load_reader(BufReader::new(file))?;
        debug!(
            "loaded {} pronunciations from {} ({} words total)",
            added,
            path.display(),
            self.dictionary.len()
        );
        Ok(added)
    }

    /// Build and return the Dictionary
    pub fn build(self) -> Dictionary {
        self.dictionary
    }
}
