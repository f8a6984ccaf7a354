//! Integration tests against a CMUdict-format fixture
//!
//! `tests/fixtures/cmudict-sample.dict` holds real CMUdict 0.7b lines for the
//! words used below, including comment headers and numbered variants.

use std::io::Write;
use std::path::PathBuf;

use phonetic_rs::{
    phones_to_stress, rhyming_part, syllable_count, Dictionary, DictionaryBuilder,
    DictionaryError, Phonetic, Token, WordNotFound, WordTokenizer,
};

const SAMPLE: &str = include_str!("fixtures/cmudict-sample.dict");

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("cmudict-sample.dict")
}

fn engine() -> Phonetic {
    let mut builder = DictionaryBuilder::new();
    builder.load_str(SAMPLE);
    Phonetic::with_dictionary(builder.build())
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_load_from_path() {
    let engine = Phonetic::from_path(fixture_path());

    assert!(engine.is_loaded());
    assert_eq!(engine.dictionary().len(), 12);
    assert_eq!(engine.dictionary().pronunciation_count(), 20);
}

#[test]
fn test_load_from_path_matches_in_memory() {
    let from_file = Dictionary::from_path(fixture_path()).unwrap();
    let engine = engine();

    for word in from_file.words() {
        assert_eq!(from_file.lookup(word), engine.dictionary().lookup(word));
    }
}

#[test]
fn test_missing_dictionary_reports_flag() {
    let dir = tempfile::tempdir().unwrap();
    let engine = Phonetic::from_path(dir.path().join("cmudict-0.7b"));

    assert!(!engine.is_loaded());
    assert_eq!(
        engine.word_to_phones("dog"),
        Err(WordNotFound::new("DOG"))
    );
}

#[test]
fn test_try_from_path_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Phonetic::try_from_path(dir.path().join("missing.dict"));
    assert!(matches!(result, Err(DictionaryError::Io { .. })));
}

#[test]
fn test_load_temp_file_with_multi_digit_variants() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, ";;; generated").unwrap();
    for i in 0..12 {
        if i == 0 {
            writeln!(file, "TOMATO  T AH0 M EY1 T OW2").unwrap();
        } else {
            writeln!(file, "TOMATO({})  T AH0 M AA1 T OW{}", i + 1, i % 3).unwrap();
        }
    }
    file.flush().unwrap();

    let engine = Phonetic::from_path(file.path());
    let variants = engine.word_to_phones("tomato").unwrap();

    assert_eq!(variants.len(), 12);
    assert_eq!(variants[0], "T AH0 M EY1 T OW2");
    assert_eq!(variants[11], "T AH0 M AA1 T OW2");
    assert!(!engine.dictionary().contains("TOMATO(12)"));
}

// =============================================================================
// Lookup
// =============================================================================

#[test]
fn test_word_to_phones_any_case() {
    let engine = engine();

    let lower = engine.word_to_phones("associate").unwrap();
    let upper = engine.word_to_phones("ASSOCIATE").unwrap();

    assert_eq!(lower.len(), 4);
    assert_eq!(lower[0], "AH0 S OW1 S IY0 AH0 T");
    assert_eq!(lower, upper);
}

#[test]
fn test_word_to_phones_not_found() {
    let engine = engine();
    let err = engine.word_to_phones("sdfasdg").unwrap_err();

    assert_eq!(err.word, "SDFASDG");
    assert_eq!(err.to_string(), "SDFASDG not found in dictionary");
}

#[test]
fn test_apostrophe_word() {
    let engine = engine();
    assert_eq!(engine.word_to_phones("don't").unwrap(), ["D OW1 N T"]);
}

// =============================================================================
// Stress and syllables
// =============================================================================

#[test]
fn test_phones_to_stress() {
    let engine = engine();
    assert_eq!(engine.phones_to_stress("M AA1 D ER0 N AY2 Z D"), "102");
}

#[test]
fn test_word_to_stresses() {
    let stresses = engine().word_to_stresses("atoll").unwrap();

    assert_eq!(stresses.len(), 3);
    assert_eq!(stresses[0], "12");
    assert_eq!(stresses[2], "01");
}

#[test]
fn test_syllable_count() {
    assert_eq!(engine().syllable_count("F AY1 ER0"), 2);
}

#[test]
fn test_word_to_syllable_counts() {
    assert_eq!(engine().word_to_syllable_counts("fire").unwrap(), vec![2, 1]);
}

#[test]
fn test_syllable_count_matches_stress_length() {
    let engine = engine();
    let dict = engine.dictionary();

    for word in dict.words() {
        for p in dict.lookup(word).unwrap() {
            assert_eq!(syllable_count(p), phones_to_stress(p).len(), "{}", p);
        }
    }
}

#[test]
fn test_single_variant_word_gives_one_entry() {
    let engine = engine();

    assert_eq!(engine.word_to_phones("dog").unwrap().len(), 1);
    assert_eq!(engine.word_to_stresses("dog").unwrap(), vec!["1"]);
    assert_eq!(engine.word_to_syllable_counts("dog").unwrap(), vec![1]);
    assert_eq!(engine.word_to_rhyming_parts("dog").unwrap(), vec!["AO1 G"]);
}

#[test]
fn test_unknown_word_propagates_through_word_queries() {
    let engine = engine();
    let expected = WordNotFound::new("ASDFAGA");

    assert_eq!(engine.word_to_stresses("asdfaga").unwrap_err(), expected);
    assert_eq!(engine.word_to_syllable_counts("asdfaga").unwrap_err(), expected);
}

// =============================================================================
// Rhymes
// =============================================================================

#[test]
fn test_rhyming_part() {
    let engine = engine();

    assert_eq!(engine.rhyming_part("M AO1 R F"), "AO1 R F");
    assert_eq!(engine.rhyming_part("P UH1 L IY0"), "UH1 L IY0");
    assert_eq!(engine.rhyming_part("P EH1 R AH0 L AH0 S"), "EH1 R AH0 L AH0 S");
    assert_eq!(engine.rhyming_part("P EH1 R AH0 S K OW2 P"), "OW2 P");
    assert_eq!(engine.rhyming_part("DH AH0"), "AH0");
    assert_eq!(engine.rhyming_part("DH S K"), "");
}

#[test]
fn test_rhyming_parts_of_word() {
    let parts = engine().word_to_rhyming_parts("the").unwrap();
    assert_eq!(parts, vec!["AH0", "AH1", "IY0"]);
}

#[test]
fn test_rhymes() {
    let engine = engine();

    assert!(engine.rhymes("dog", "log").unwrap());
    assert!(!engine.rhymes("dog", "good").unwrap());
    assert_eq!(
        engine.rhymes("dog", "blorp").unwrap_err(),
        WordNotFound::new("BLORP")
    );
}

#[test]
fn test_analysis_is_repeatable() {
    let p = "P EH1 R AH0 S K OW2 P";
    assert_eq!(rhyming_part(p), rhyming_part(p));
    assert_eq!(phones_to_stress(p), phones_to_stress(p));
    assert_eq!(syllable_count(p), syllable_count(p));
}

// =============================================================================
// Text
// =============================================================================

#[test]
fn test_text_to_phones_simple() {
    let result = engine().text_to_phones("smelly dog");

    assert_eq!(result.len(), 2);
    assert!(!result.has_failures());
    assert_eq!(result[0].phones().unwrap()[0], "S M EH1 L IY0");
    assert_eq!(result[1].phones().unwrap()[0], "D AO1 G");
}

#[test]
fn test_text_to_phones_complex_punct() {
    let result = engine().text_to_phones("Smelly dog? Drip-dry--good dog.");

    assert_eq!(result.len(), 5);
    assert_eq!(result[0].token, "Smelly");
    assert_eq!(result[0].phones().unwrap()[0], "S M EH1 L IY0");
    assert_eq!(result[2].token, "Drip-dry");
    assert_eq!(result[2].phones().unwrap()[0], "D R IH1 P D R AY1");
}

#[test]
fn test_text_to_phones_unknown_word() {
    let result = engine().text_to_phones("Smelly dog? asdfaga");

    assert_eq!(result.len(), 3);
    assert!(result.has_failures());

    let failures: Vec<&WordNotFound> = result.failures().collect();
    assert_eq!(failures, vec![&WordNotFound::new("ASDFAGA")]);
    assert_eq!(result[2].token, "asdfaga");

    let successes: Vec<(&str, &[String])> = result.successes().collect();
    assert_eq!(successes.len(), 2);
    assert_eq!(successes[0].0, "Smelly");
    assert_eq!(successes[0].1[0], "S M EH1 L IY0");
    assert_eq!(successes[1].0, "dog");
    assert_eq!(successes[1].1[0], "D AO1 G");
}

#[test]
fn test_failure_does_not_stop_later_tokens() {
    let result = engine().text_to_phones("asdfaga qqq smelly");

    assert_eq!(result.len(), 3);
    assert_eq!(result.failures().count(), 2);
    assert_eq!(result[2].phones().unwrap()[0], "S M EH1 L IY0");
}

#[test]
fn test_text_to_phones_with_custom_tokenizer() {
    let engine = engine();
    let split_on_space = |text: &str| -> Vec<Token> {
        text.split(' ')
            .map(|w| Token::with_text(w.to_string(), 0, w.len()))
            .collect()
    };

    let result = engine.text_to_phones_with(&split_on_space, "dog? dog");

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].outcome, Err(WordNotFound::new("DOG?")));
    assert!(result[1].is_found());
}

#[test]
fn test_text_to_phones_with_default_tokenizer() {
    let engine = engine();
    let a = engine.text_to_phones("Good dog!");
    let b = engine.text_to_phones_with(&WordTokenizer, "Good dog!");
    assert_eq!(a, b);
}

#[test]
fn test_text_to_phones_empty() {
    let result = engine().text_to_phones(" ... ");
    assert!(result.is_empty());
    assert!(!result.has_failures());
}

#[test]
fn test_text_to_phones_json() {
    let result = engine().text_to_phones("dog asdfaga");
    let json = serde_json::to_string(&result).unwrap();

    assert!(json.contains("\"token\":\"dog\""));
    assert!(json.contains("\"word\":\"ASDFAGA\""));
}
