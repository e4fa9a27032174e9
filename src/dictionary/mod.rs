//! Dictionaries for Boggle solving
//!
//! A `Dictionary` is an ascending, normalized word list. Duplicates are kept;
//! the prefix matcher tolerates them and the solver's output is a set anyway.

mod embedded;
pub mod loader;
mod matcher;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, SHORT_DICTIONARY, SHORT_DICTIONARY_COUNT};
pub use loader::LoadError;
pub use matcher::{Classification, PrefixMatcher, classify};

use crate::core::Word;
use std::path::Path;

/// Sorted list of valid words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<Word>,
    min_word_len: usize,
}

/// Word lists compiled into the binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddedDictionary {
    /// General-purpose list of about a thousand common words
    Default,
    /// Five Greek letter names, handy for demos
    Short,
}

impl EmbeddedDictionary {
    /// Look up an embedded dictionary by its CLI name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "default" | "all" => Some(Self::Default),
            "short" => Some(Self::Short),
            _ => None,
        }
    }

    /// Raw, unfiltered entries
    #[must_use]
    pub const fn entries(self) -> &'static [&'static str] {
        match self {
            Self::Default => DICTIONARY,
            Self::Short => SHORT_DICTIONARY,
        }
    }
}

impl Dictionary {
    /// Build a dictionary from raw entries
    ///
    /// Each entry is trimmed and normalized; entries that are not alphabetic or
    /// are shorter than `min_word_len` are dropped. The result is sorted.
    #[must_use]
    pub fn from_words<I, S>(entries: I, min_word_len: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<Word> = entries
            .into_iter()
            .filter_map(|entry| Word::new(entry.as_ref().trim(), min_word_len).ok())
            .collect();
        words.sort_unstable();

        Self {
            words,
            min_word_len,
        }
    }

    /// Load a dictionary file, one word per line
    ///
    /// # Errors
    /// Returns `LoadError` if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P, min_word_len: usize) -> Result<Self, LoadError> {
        loader::load_from_file(path, min_word_len)
    }

    /// One of the dictionaries compiled into the binary
    #[must_use]
    pub fn embedded(which: EmbeddedDictionary, min_word_len: usize) -> Self {
        loader::words_from_slice(which.entries(), min_word_len)
    }

    /// Classify a candidate as a word, a prefix of a word, or neither
    #[inline]
    #[must_use]
    pub fn classify(&self, candidate: &str) -> Classification {
        classify(candidate, &self.words)
    }

    /// Borrowed matcher over this dictionary's words
    #[must_use]
    pub fn matcher(&self) -> PrefixMatcher<'_, Word> {
        PrefixMatcher::new(&self.words)
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.classify(word) == Classification::Match
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(Word::text)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Minimum word length used when this dictionary was filtered
    #[must_use]
    pub const fn min_word_len(&self) -> usize {
        self.min_word_len
    }
}
