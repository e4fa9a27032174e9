//! Dictionary loading utilities
//!
//! Reads line-delimited word files and converts embedded string slices.

use super::Dictionary;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for dictionary sources that cannot be read
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dictionary `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Load a dictionary from a file, one word per line
///
/// Entries are trimmed, normalized to uppercase and kept only if they are
/// alphabetic and at least `min_word_len` long. Blank lines and rejected
/// entries are skipped silently.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be opened or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use boggle_solver::dictionary::loader::load_from_file;
///
/// let dictionary = load_from_file("data/dict.txt", 3).unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    min_word_len: usize,
) -> Result<Dictionary, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let raw_lines = content.lines().count();
    let dictionary = Dictionary::from_words(content.lines(), min_word_len);

    log::debug!(
        "loaded {} of {raw_lines} entries from {}",
        dictionary.len(),
        path.display()
    );
    if dictionary.is_empty() {
        log::warn!("dictionary {} contains no usable words", path.display());
    }

    Ok(dictionary)
}

/// Convert an embedded string slice to a dictionary
///
/// # Examples
/// ```
/// use boggle_solver::dictionary::SHORT_DICTIONARY;
/// use boggle_solver::dictionary::loader::words_from_slice;
///
/// let dictionary = words_from_slice(SHORT_DICTIONARY, 3);
/// let words: Vec<&str> = dictionary.iter().collect();
/// assert_eq!(words, ["ALPHA", "BETA", "DELTA", "GAMMA", "OMEGA"]);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], min_word_len: usize) -> Dictionary {
    Dictionary::from_words(slice.iter().copied(), min_word_len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn words_from_slice_filters_and_sorts() {
        let dictionary = words_from_slice(&["Omega", "am", "alpha", "de novo", "beta"], 3);
        let words: Vec<&str> = dictionary.iter().collect();
        assert_eq!(words, ["ALPHA", "BETA", "OMEGA"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let dictionary = words_from_slice(&[], 3);
        assert!(dictionary.is_empty());
    }

    #[test]
    fn load_from_file_reads_lines() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "gamma\nAlpha\n\n  beta  \nabout-face\nam\nOMEGA\ndelta").unwrap();

        let dictionary = load_from_file(file.path(), 3).unwrap();
        let words: Vec<&str> = dictionary.iter().collect();
        assert_eq!(words, ["ALPHA", "BETA", "DELTA", "GAMMA", "OMEGA"]);
    }

    #[test]
    fn load_from_file_handles_crlf() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "axe\r\nelm\r\n").unwrap();

        let dictionary = load_from_file(file.path(), 3).unwrap();
        let words: Vec<&str> = dictionary.iter().collect();
        assert_eq!(words, ["AXE", "ELM"]);
    }

    #[test]
    fn load_from_file_respects_min_length() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "axe\naxle\nample").unwrap();

        let dictionary = load_from_file(file.path(), 5).unwrap();
        let words: Vec<&str> = dictionary.iter().collect();
        assert_eq!(words, ["AMPLE"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        let err = load_from_file(&missing, 3).unwrap_err();
        let LoadError::Io { path, source } = err;
        assert_eq!(path, missing);
        assert_eq!(source.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn load_from_non_utf8_file_fails() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0x61, 0x78, 0x65, 0x0a, 0xff, 0xfe, 0x0a]).unwrap();

        assert!(load_from_file(file.path(), 3).is_err());
    }

    #[test]
    fn load_error_message_names_path() {
        let err = load_from_file("/definitely/not/here.txt", 3).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }
}
