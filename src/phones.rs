//! Analysis of ARPABET pronunciation strings.
//!
//! A pronunciation is a space separated list of phones such as
//! `"P EH1 R AH0 S K OW2 P"`. Vowel phones end with a stress digit:
//! 0 for no stress, 1 for primary stress and 2 for secondary stress.
//!
//! Every function here is total. Empty or malformed input gives an empty or
//! zero result.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// The 15 vowel symbols used by CMUdict (10 monophthongs, 5 diphthongs)
pub static CMU_VOWELS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "AA", "AE", "AH", "AO", "EH", "ER", "IH", "IY", "UH", "UW", "AW", "AY", "EY", "OW", "OY",
    ]
    .into_iter()
    .collect()
});

/// Lexical stress carried by a vowel phone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stress {
    Unstressed,
    Primary,
    Secondary,
}

impl Stress {
    /// Parse a stress digit
    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '0' => Some(Stress::Unstressed),
            '1' => Some(Stress::Primary),
            '2' => Some(Stress::Secondary),
            _ => None,
        }
    }

    pub fn as_digit(&self) -> char {
        match self {
            Stress::Unstressed => '0',
            Stress::Primary => '1',
            Stress::Secondary => '2',
        }
    }

    /// Primary or secondary
    pub fn is_stressed(&self) -> bool {
        !matches!(self, Stress::Unstressed)
    }
}

/// Split a pronunciation into its phones
pub fn phones(pronunciation: &str) -> impl Iterator<Item = &str> {
    pronunciation.split_whitespace()
}

/// The stress marked on a single phone, if it is a vowel phone
pub fn stress_of(phone: &str) -> Option<Stress> {
    phone.chars().last().and_then(Stress::from_digit)
}

/// Whether `phone` is one of the CMUdict vowels, with or without a stress digit
pub fn is_vowel(phone: &str) -> bool {
    let base = phone.trim_end_matches(|c: char| c.is_ascii_digit());
    CMU_VOWELS.contains(base)
}

/// Extract the stress digits of a pronunciation, left to right.
///
/// `"M AA1 D ER0 N AY2 Z D"` gives `"102"`.
pub fn phones_to_stress(pronunciation: &str) -> String {
    phones(pronunciation)
        .filter_map(stress_of)
        .map(|s| s.as_digit())
        .collect()
}

/// Number of syllables, i.e. the number of vowel phones
pub fn syllable_count(pronunciation: &str) -> usize {
    phones_to_stress(pronunciation).len()
}

/// Split a pronunciation into its phones, each with its byte offset
fn phone_spans(pronunciation: &str) -> Vec<(usize, &str)> {
    let mut spans = Vec::new();
    let mut start = None;

    for (i, c) in pronunciation.char_indices() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                spans.push((s, &pronunciation[s..i]));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        spans.push((s, &pronunciation[s..]));
    }

    spans
}

/// The part of a pronunciation that has to match for two words to rhyme.
///
/// Runs from the last stressed vowel (primary or secondary) to the end of the
/// input, trailing whitespace included. When nothing is stressed it runs from
/// the last vowel instead, and a pronunciation without vowels has no rhyming
/// part.
pub fn rhyming_part(pronunciation: &str) -> String {
    let spans = phone_spans(pronunciation);

    let last_stressed = spans
        .iter()
        .rposition(|(_, p)| stress_of(p).map_or(false, |s| s.is_stressed()));
    let start =
        last_stressed.or_else(|| spans.iter().rposition(|(_, p)| stress_of(p).is_some()));

    match start {
        Some(i) => pronunciation[spans[i].0..].to_string(),
        None => String::new(),
    }
}
