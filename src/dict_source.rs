//! Locating and fetching the CMU pronouncing dictionary.
//!
//! The dictionary is looked for at a well-known location. With the
//! `download` feature it is fetched from GitHub into that location on first
//! use.

use std::env;
use std::path::{Path, PathBuf};

#[cfg(feature = "download")]
use crate::error::DictionaryError;

/// File name of the CMUdict release this crate reads
pub const DICTIONARY_FILE: &str = "cmudict-0.7b";

/// Environment variable that overrides the dictionary location
pub const DICT_PATH_ENV: &str = "PHONETIC_DICT";

/// Where the dictionary file is downloaded from
#[cfg(feature = "download")]
const CMUDICT_URL: &str = "https://raw.githubusercontent.com/Alexir/CMUdict/master/cmudict-0.7b";

/// Get the default base directory for dictionary data
/// Returns ~/.local/share/phonetic-rs/ (or the platform equivalent)
pub fn default_base_path() -> PathBuf {
    #[cfg(feature = "download")]
    {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("phonetic-rs")
    }
    #[cfg(not(feature = "download"))]
    {
        PathBuf::from("data").join("CMUdict")
    }
}

/// The dictionary file used when none is given explicitly.
///
/// `PHONETIC_DICT` wins if set, otherwise the file inside [`default_base_path`].
pub fn default_dictionary_path() -> PathBuf {
    match env::var_os(DICT_PATH_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => default_base_path().join(DICTIONARY_FILE),
    }
}

/// Check if a dictionary file exists at `path`
pub fn dictionary_exists(path: &Path) -> bool {
    path.is_file()
}

/// Download the dictionary to `path` unless it is already there
#[cfg(feature = "download")]
pub fn download_dictionary(path: &Path) -> Result<PathBuf, DictionaryError> {
    use log::info;
    use std::fs;

    if dictionary_exists(path) {
        return Ok(path.to_path_buf());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| DictionaryError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    info!("downloading {} to {}", DICTIONARY_FILE, path.display());

    let client = reqwest::blocking::Client::builder()
        .user_agent("phonetic-rs")
        .timeout(std::time::Duration::from_secs(120))
        .build()
        .map_err(|e| DictionaryError::Download(e.to_string()))?;

    let response = client
        .get(CMUDICT_URL)
        .send()
        .map_err(|e| DictionaryError::Download(e.to_string()))?;

    if !response.status().is_success() {
        return Err(DictionaryError::Download(format!(
            "HTTP {} from {}",
            response.status(),
            CMUDICT_URL
        )));
    }

    let bytes = response
        .bytes()
        .map_err(|e| DictionaryError::Download(e.to_string()))?;

    // Never leave a truncated file at `path`
    let partial = path.with_extension("part");
    fs::write(&partial, &bytes).map_err(|source| DictionaryError::Io {
        path: partial.clone(),
        source,
    })?;
    fs::rename(&partial, path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!("download completed ({} bytes)", bytes.len());

    Ok(path.to_path_buf())
}

/// Get the default dictionary, downloading it if necessary
#[cfg(feature = "download")]
pub fn get_default_dictionary() -> Result<PathBuf, DictionaryError> {
    download_dictionary(&default_dictionary_path())
}
