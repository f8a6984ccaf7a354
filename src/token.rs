//! Token representation for English text.
//!
//! A Token is a single word cut out of a larger text, kept exactly as it was
//! written.

use serde::{Deserialize, Serialize};

/// A single word token
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The raw text of the token, with its original casing
    pub text: String,

    /// Starting byte offset in the (NFC normalized) input
    pub start: usize,

    /// Length in bytes
    pub len: usize,
}

impl Token {
    /// Create a token with text and position
    pub fn with_text(text: String, start: usize, len: usize) -> Self {
        Token { text, start, len }
    }

    /// Byte offset one past the end of the token
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Whether the token joins parts with a hyphen, e.g. "Drip-dry"
    pub fn is_compound(&self) -> bool {
        self.text.contains('-')
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
