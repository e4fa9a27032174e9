//! Boggle word representation
//!
//! A Word is an uppercase ASCII-alphabetic string at least as long as the configured minimum.

use std::fmt;
use thiserror::Error;

/// Shortest word accepted by classic Boggle rules
pub const DEFAULT_MIN_WORD_LEN: usize = 3;

/// A normalized dictionary word
///
/// Ordering is plain byte-wise lexicographic order, which is what the prefix
/// matcher's binary search relies on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
}

/// Error type for rejected dictionary entries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must have at least {min} letters, got {len}")]
    TooShort { len: usize, min: usize },
    #[error("word must contain only ASCII letters")]
    InvalidCharacters,
}

/// Canonical form for strings in the dictionary or on the board
///
/// # Examples
/// ```
/// use boggle_solver::core::normalize;
///
/// assert_eq!(normalize("filter"), "FILTER");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.to_ascii_uppercase()
}

/// Is `word` a legal Boggle word under the given minimum length?
///
/// # Examples
/// ```
/// use boggle_solver::core::is_allowed;
///
/// assert!(!is_allowed("am", 3)); // Too short
/// assert!(!is_allowed("de novo", 3)); // Non-alphabetic
/// assert!(!is_allowed("about-face", 3)); // Non-alphabetic
/// assert!(is_allowed("sample", 3));
/// ```
#[must_use]
pub fn is_allowed(word: &str, min_len: usize) -> bool {
    !word.is_empty() && word.len() >= min_len && word.bytes().all(|b| b.is_ascii_alphabetic())
}

impl Word {
    /// Create a new Word from a raw dictionary entry
    ///
    /// # Errors
    /// Returns `WordError` if the normalized entry is shorter than `min_len`
    /// or contains anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::Word;
    ///
    /// let word = Word::new("Sample", 3).unwrap();
    /// assert_eq!(word.text(), "SAMPLE");
    ///
    /// assert!(Word::new("am", 3).is_err());
    /// assert!(Word::new("x-ray", 3).is_err());
    /// ```
    pub fn new(raw: impl AsRef<str>, min_len: usize) -> Result<Self, WordError> {
        let text = normalize(raw.as_ref());

        if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        if text.is_empty() || text.len() < min_len {
            return Err(WordError::TooShort {
                len: text.len(),
                min: min_len,
            });
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters (and therefore board cells) in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word; present for API completeness
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.text.starts_with(prefix)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("alpha", 3).unwrap();
        assert_eq!(word.text(), "ALPHA");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("Omega", 3).unwrap().text(), "OMEGA");
        assert_eq!(Word::new("oMeGa", 3).unwrap().text(), "OMEGA");
    }

    #[test]
    fn word_creation_too_short() {
        assert_eq!(
            Word::new("am", 3),
            Err(WordError::TooShort { len: 2, min: 3 })
        );
        assert_eq!(Word::new("", 3), Err(WordError::TooShort { len: 0, min: 3 }));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("de novo", 3), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("about-face", 3), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("3d", 1), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("café", 3), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn empty_word_rejected_even_with_zero_minimum() {
        assert!(Word::new("", 0).is_err());
        assert!(!is_allowed("", 0));
    }

    #[test]
    fn allowed_respects_minimum() {
        assert!(is_allowed("AXE", 3));
        assert!(!is_allowed("AXE", 4));
        assert!(is_allowed("AX", 2));
    }

    #[test]
    fn normalize_leaves_non_ascii_alone() {
        assert_eq!(normalize("straße"), "STRAßE");
        assert!(!is_allowed(&normalize("straße"), 3));
    }

    #[test]
    fn word_ordering_is_lexicographic() {
        let mut words: Vec<Word> = ["beta", "alpha", "alp", "gamma"]
            .iter()
            .map(|w| Word::new(w, 3).unwrap())
            .collect();
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["ALP", "ALPHA", "BETA", "GAMMA"]);
    }

    #[test]
    fn word_display() {
        let word = Word::new("delta", 3).unwrap();
        assert_eq!(format!("{word}"), "DELTA");
    }
}
