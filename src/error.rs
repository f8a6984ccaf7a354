//! Error types.
//!
//! Query-time failures are always [`WordNotFound`]. Loading a dictionary can
//! fail with a [`DictionaryError`], which the engine reports as a flag rather
//! than a per-query error.

use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A word was not present in the dictionary.
///
/// `word` is the normalized (uppercase) form that was searched for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[error("{word} not found in dictionary")]
pub struct WordNotFound {
    pub word: String,
}

impl WordNotFound {
    pub fn new(word: impl Into<String>) -> Self {
        WordNotFound { word: word.into() }
    }
}

/// Errors that can occur while loading a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The dictionary file could not be opened
    #[error("cannot open dictionary {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from an already open source failed part way through
    #[error("error reading dictionary: {0}")]
    Read(#[from] io::Error),

    /// Fetching the dictionary file failed
    #[error("dictionary download failed: {0}")]
    Download(String),
}
