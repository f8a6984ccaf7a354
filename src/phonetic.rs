//! The lookup engine.
//!
//! [`Phonetic`] owns a loaded [`Dictionary`] and answers per-word and per-text
//! queries against it. Every word-level query goes through
//! [`Phonetic::word_to_phones`], so a missing word always surfaces as the same
//! [`WordNotFound`].

use std::path::Path;
use std::sync::Arc;

use log::warn;

use crate::batch::TextPhones;
use crate::dict_source::default_dictionary_path;
use crate::dictionary::Dictionary;
use crate::error::{DictionaryError, WordNotFound};
use crate::phones;
use crate::tokenizer::{Tokenize, WordTokenizer};

/// Normalize a query word to dictionary key form.
///
/// Uppercases the word. Typographic apostrophes become ASCII ones, since
/// CMUdict spells contractions with `'`.
pub fn normalize(word: &str) -> String {
    word.replace('’', "'").to_uppercase()
}

/// Pronunciation lookup and analysis over a dictionary
#[derive(Debug, Clone)]
pub struct Phonetic {
    /// The dictionary (shared, read-only)
    dictionary: Arc<Dictionary>,
    /// Whether the dictionary source was read successfully
    loaded: bool,
}

impl Phonetic {
    /// Create an engine over the dictionary at the default location.
    ///
    /// A failed load leaves the engine empty; check [`Phonetic::is_loaded`].
    pub fn new() -> Self {
        Self::from_path(default_dictionary_path())
    }

    /// Create an engine over the dictionary file at `path`.
    ///
    /// A failed load is logged and leaves the engine empty, so every lookup
    /// returns [`WordNotFound`].
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match Self::try_from_path(path) {
            Ok(engine) => engine,
            Err(e) => {
                warn!("{}", e);
                Phonetic {
                    dictionary: Arc::new(Dictionary::new()),
                    loaded: false,
                }
            }
        }
    }

    /// Like [`Phonetic::from_path`], but returns the load error
    pub fn try_from_path(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        Ok(Self::with_dictionary(Dictionary::from_path(path)?))
    }

    /// Create an engine over an already built dictionary
    pub fn with_dictionary(dictionary: Dictionary) -> Self {
        Self::with_arc(Arc::new(dictionary))
    }

    /// Create an engine sharing a dictionary with other engines
    pub fn with_arc(dictionary: Arc<Dictionary>) -> Self {
        Phonetic {
            dictionary,
            loaded: true,
        }
    }

    /// Whether the dictionary was loaded successfully
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Get a reference to the dictionary
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Get the Arc reference to the dictionary (for sharing)
    pub fn dictionary_arc(&self) -> Arc<Dictionary> {
        Arc::clone(&self.dictionary)
    }

    /// All pronunciations of `word`, in dictionary order.
    ///
    /// Lookup is case-insensitive. The word is not trimmed or otherwise
    /// cleaned.
    pub fn word_to_phones(&self, word: &str) -> Result<&[String], WordNotFound> {
        let key = normalize(word);
        match self.dictionary.lookup(&key) {
            Some(phones) => Ok(phones),
            None => Err(WordNotFound { word: key }),
        }
    }

    /// Look up every word of `text`.
    ///
    /// Unknown words are recorded in their own slot and do not stop the
    /// remaining words from being looked up.
    pub fn text_to_phones(&self, text: &str) -> TextPhones {
        self.text_to_phones_with(&WordTokenizer, text)
    }

    /// Like [`Phonetic::text_to_phones`], splitting words with `tokenizer`
    pub fn text_to_phones_with<T>(&self, tokenizer: &T, text: &str) -> TextPhones
    where
        T: Tokenize + ?Sized,
    {
        self.tokens_to_phones(tokenizer.tokenize(text))
    }

    /// Look up an already tokenized sequence of words
    pub fn tokens_to_phones<I, S>(&self, tokens: I) -> TextPhones
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut result = TextPhones::new();
        for token in tokens {
            let token = token.as_ref();
            let outcome = self.word_to_phones(token).map(<[String]>::to_vec);
            result.push(token, outcome);
        }
        result
    }

    /// Stress digits of a pronunciation, see [`phones::phones_to_stress`]
    pub fn phones_to_stress(&self, phones: &str) -> String {
        phones::phones_to_stress(phones)
    }

    /// Stress pattern of every pronunciation of `word`
    pub fn word_to_stresses(&self, word: &str) -> Result<Vec<String>, WordNotFound> {
        let variants = self.word_to_phones(word)?;
        Ok(variants.iter().map(|p| phones::phones_to_stress(p)).collect())
    }

    /// Syllable count of a pronunciation, see [`phones::syllable_count`]
    pub fn syllable_count(&self, phones: &str) -> usize {
        phones::syllable_count(phones)
    }

    /// Syllable count of every pronunciation of `word`.
    ///
    /// Most words agree across variants, but some do not ("fire" is 2 or 1).
    pub fn word_to_syllable_counts(&self, word: &str) -> Result<Vec<usize>, WordNotFound> {
        let variants = self.word_to_phones(word)?;
        Ok(variants.iter().map(|p| phones::syllable_count(p)).collect())
    }

    /// Rhyming part of a pronunciation, see [`phones::rhyming_part`]
    pub fn rhyming_part(&self, phones: &str) -> String {
        phones::rhyming_part(phones)
    }

    /// Rhyming part of every pronunciation of `word`
    pub fn word_to_rhyming_parts(&self, word: &str) -> Result<Vec<String>, WordNotFound> {
        let variants = self.word_to_phones(word)?;
        Ok(variants.iter().map(|p| phones::rhyming_part(p)).collect())
    }

    /// Whether any pronunciation of `a` shares its rhyming part with any
    /// pronunciation of `b`
    pub fn rhymes(&self, a: &str, b: &str) -> Result<bool, WordNotFound> {
        let left = self.word_to_rhyming_parts(a)?;
        let right = self.word_to_rhyming_parts(b)?;
        Ok(left
            .iter()
            .filter(|part| !part.is_empty())
            .any(|part| right.contains(part)))
    }
}

impl Default for Phonetic {
    fn default() -> Self {
        Self::new()
    }
}
