//! Set of words found on a board

use crate::core::ScoreTable;
use rustc_hash::FxHashSet;

/// Unique words discovered during one solve
///
/// Insertion order is irrelevant; `into_sorted` produces the ascending output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolutionSet {
    words: FxHashSet<String>,
}

impl SolutionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a word, returning `true` if it was not already present
    pub fn insert(&mut self, word: &str) -> bool {
        if self.words.contains(word) {
            return false;
        }
        self.words.insert(word.to_owned())
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Set union, used to combine per-start-cell results
    pub fn merge(&mut self, other: Self) {
        if self.words.len() < other.words.len() {
            let mine = std::mem::replace(&mut self.words, other.words);
            self.words.extend(mine);
        } else {
            self.words.extend(other.words);
        }
    }

    /// Length of the longest word, or 0 when empty
    #[must_use]
    pub fn longest_len(&self) -> usize {
        self.words.iter().map(String::len).max().unwrap_or(0)
    }

    /// Total score under the given table
    #[must_use]
    pub fn score(&self, table: &ScoreTable) -> u32 {
        table.score_all(self.iter())
    }

    /// Consume the set, returning its words in ascending order
    #[must_use]
    pub fn into_sorted(self) -> Vec<String> {
        let mut words: Vec<String> = self.words.into_iter().collect();
        words.sort_unstable();
        words
    }
}

impl<S: AsRef<str>> FromIterator<S> for SolutionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for word in iter {
            set.insert(word.as_ref());
        }
        set
    }
}
