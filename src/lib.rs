//! # phonetic-rs
//!
//! Pronunciation lookup and phonetic analysis of English text, backed by the
//! [CMU Pronouncing Dictionary](https://github.com/cmusphinx/cmudict).
//!
//! Pronunciations are ARPABET phones separated by spaces. Vowel phones carry
//! a stress digit: 0 for no stress, 1 for primary and 2 for secondary stress.
//!
//! ## Quick Start
//!
//! ```rust
//! use phonetic_rs::{DictionaryBuilder, Phonetic};
//!
//! let mut builder = DictionaryBuilder::new();
//! builder.load_str("FIRE  F AY1 ER0\nFIRE(2)  F AY1 R\nDOG  D AO1 G\n");
//! let engine = Phonetic::with_dictionary(builder.build());
//!
//! assert_eq!(engine.word_to_syllable_counts("fire").unwrap(), vec![2, 1]);
//!
//! let result = engine.text_to_phones("Fire dog? asdfaga");
//! for token in &result {
//!     match &token.outcome {
//!         Ok(phones) => println!("{}: {}", token.token, phones[0]),
//!         Err(e) => println!("{}", e),
//!     }
//! }
//! ```
//!
//! ## Analysis Without a Dictionary
//!
//! The analysis functions work on any pronunciation string:
//!
//! ```rust
//! use phonetic_rs::phones::{phones_to_stress, rhyming_part, syllable_count};
//!
//! assert_eq!(phones_to_stress("M AA1 D ER0 N AY2 Z D"), "102");
//! assert_eq!(syllable_count("F AY1 ER0"), 2);
//! assert_eq!(rhyming_part("P EH1 R AH0 S K OW2 P"), "OW2 P");
//! ```

pub mod batch;
pub mod dict_source;
pub mod dictionary;
pub mod error;
pub mod phones;
pub mod phonetic;
pub mod token;
pub mod tokenizer;

// Re-export main types for convenience
pub use batch::{TextPhones, TokenPhones};
pub use dictionary::{Dictionary, DictionaryBuilder};
pub use error::{DictionaryError, WordNotFound};
pub use phones::{phones_to_stress, rhyming_part, syllable_count, Stress};
pub use phonetic::{normalize, Phonetic};
pub use token::Token;
pub use tokenizer::{Tokenize, WordTokenizer};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
