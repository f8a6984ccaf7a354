//! Splitting free text into word tokens.
//!
//! Words are runs of letters and digits. A single hyphen or apostrophe between
//! two such runs stays inside the word, so "Drip-dry" and "don't" are one token
//! each, while "dry--good" is two. Everything else separates words and is
//! dropped. Tokens keep the text exactly as written.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::token::Token;

static WORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:['’\-][\p{L}\p{N}]+)*").expect("valid word regex")
});

/// Anything that can turn text into an ordered list of word tokens
pub trait Tokenize {
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

/// The default tokenizer
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> Self {
        WordTokenizer
    }

    /// Tokenize text into words, in order of appearance
    pub fn words(text: &str) -> Vec<Token> {
        // Normalize Unicode (NFC normalization)
        let normalized: String = text.nfc().collect();

        WORD_RE
            .find_iter(&normalized)
            .map(|m| Token::with_text(m.as_str().to_string(), m.start(), m.len()))
            .collect()
    }
}

impl Tokenize for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        WordTokenizer::words(text)
    }
}

impl<F> Tokenize for F
where
    F: Fn(&str) -> Vec<Token>,
{
    fn tokenize(&self, text: &str) -> Vec<Token> {
        self(text)
    }
}
