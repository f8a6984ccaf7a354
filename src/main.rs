//! Command-line interface for phonetic-rs
//!
//! Usage:
//!   phonetic [OPTIONS] <TEXT>
//!   echo "Smelly dog?" | phonetic --stress

use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::error;
use phonetic_rs::{dict_source, Phonetic, TextPhones};

/// Look up pronunciations, stress patterns, syllable counts and rhymes
#[derive(Debug, Parser)]
#[command(name = "phonetic", version)]
struct Args {
    /// Text to analyze (read from stdin if omitted)
    text: Option<String>,

    /// Path to a CMUdict-format dictionary file
    #[arg(short, long, env = dict_source::DICT_PATH_ENV)]
    dict: Option<PathBuf>,

    /// Output as JSON
    #[arg(short, long)]
    json: bool,

    /// Print stress patterns instead of phones
    #[arg(long, conflicts_with_all = ["syllables", "rhyme"])]
    stress: bool,

    /// Print syllable counts instead of phones
    #[arg(long, conflicts_with = "rhyme")]
    syllables: bool,

    /// Print rhyming parts instead of phones
    #[arg(long)]
    rhyme: bool,

    /// Fetch the dictionary to its default location if it is missing
    #[cfg(feature = "download")]
    #[arg(long, conflicts_with = "dict")]
    download: bool,
}

impl Args {
    fn render(&self, engine: &Phonetic, phones: &str) -> String {
        if self.stress {
            engine.phones_to_stress(phones)
        } else if self.syllables {
            engine.syllable_count(phones).to_string()
        } else if self.rhyme {
            engine.rhyming_part(phones)
        } else {
            phones.to_string()
        }
    }
}

fn load_engine(args: &Args) -> Phonetic {
    #[cfg(feature = "download")]
    if args.download {
        if let Err(e) = dict_source::get_default_dictionary() {
            error!("{}", e);
            process::exit(1);
        }
    }

    let path = args
        .dict
        .clone()
        .unwrap_or_else(dict_source::default_dictionary_path);

    match Phonetic::try_from_path(&path) {
        Ok(engine) => engine,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}

fn print_plain(args: &Args, engine: &Phonetic, result: &TextPhones) {
    for token in result {
        match token.phones() {
            Some(variants) => {
                let rendered: Vec<String> =
                    variants.iter().map(|p| args.render(engine, p)).collect();
                println!("{}\t{}", token.token, rendered.join("\t"));
            }
            None => println!("{}\tNOT FOUND", token.token),
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    // Read from stdin if no text provided
    let input_text = match &args.text {
        Some(t) => t.clone(),
        None => {
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                error!("error reading stdin: {}", e);
                process::exit(1);
            }
            buf
        }
    };

    if input_text.trim().is_empty() {
        error!("no input text provided");
        process::exit(1);
    }

    let engine = load_engine(&args);
    let result = engine.text_to_phones(&input_text);

    if args.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("error serializing to JSON: {}", e);
                process::exit(1);
            }
        }
    } else {
        print_plain(&args, &engine, &result);
    }
}
