//! Per-token results of looking up a whole text.
//!
//! Every input token gets exactly one slot, in input order. A word missing from
//! the dictionary only marks its own slot as failed.

use serde::{Deserialize, Serialize};

use crate::error::WordNotFound;

/// Lookup outcome for one token of a text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPhones {
    /// The token as it appeared in the text
    pub token: String,
    /// All pronunciations of the token, or the normalized word that was missing
    pub outcome: Result<Vec<String>, WordNotFound>,
}

impl TokenPhones {
    pub fn is_found(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The pronunciations, if the word was found
    pub fn phones(&self) -> Option<&[String]> {
        self.outcome.as_deref().ok()
    }
}

/// Lookup outcomes for every token of a text, in order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPhones {
    pub tokens: Vec<TokenPhones>,
}

impl TextPhones {
    pub fn new() -> Self {
        TextPhones::default()
    }

    pub fn push(&mut self, token: impl Into<String>, outcome: Result<Vec<String>, WordNotFound>) {
        self.tokens.push(TokenPhones {
            token: token.into(),
            outcome,
        });
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TokenPhones> {
        self.tokens.iter()
    }

    pub fn has_failures(&self) -> bool {
        self.tokens.iter().any(|t| !t.is_found())
    }

    /// Tokens that were found, with their pronunciations, in input order
    pub fn successes(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.tokens
            .iter()
            .filter_map(|t| t.phones().map(|p| (t.token.as_str(), p)))
    }

    /// The lookups that failed, in input order
    pub fn failures(&self) -> impl Iterator<Item = &WordNotFound> {
        self.tokens.iter().filter_map(|t| t.outcome.as_ref().err())
    }
}

impl std::ops::Index<usize> for TextPhones {
    type Output = TokenPhones;

    fn index(&self, index: usize) -> &TokenPhones {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TextPhones {
    type Item = &'a TokenPhones;
    type IntoIter = std::slice::Iter<'a, TokenPhones>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl IntoIterator for TextPhones {
    type Item = TokenPhones;
    type IntoIter = std::vec::IntoIter<TokenPhones>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}
