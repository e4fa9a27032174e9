//! Word scoring
//!
//! Maps word length to points and sums over a set of found words.

/// Standard Boggle point values, indexed by word length
pub const STANDARD_POINTS: [u32; 17] = [0, 0, 0, 1, 1, 2, 3, 5, 11, 11, 11, 11, 11, 11, 11, 11, 11];

/// Immutable length-to-points lookup
///
/// Lengths past the last explicit value, up to `max_len()`, score the same as
/// the last value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTable {
    points: Vec<u32>,
    max_len: usize,
}

impl ScoreTable {
    /// Table from explicit values, where `points[n]` is the score for an n-letter word
    #[must_use]
    pub fn new(points: Vec<u32>) -> Self {
        let max_len = points.len().saturating_sub(1);
        Self { points, max_len }
    }

    /// The standard table, covering words up to 16 letters
    #[must_use]
    pub fn standard() -> Self {
        Self::new(STANDARD_POINTS.to_vec())
    }

    /// Longest word length the table can score
    #[must_use]
    pub const fn max_len(&self) -> usize {
        self.max_len
    }

    /// Extend the table so it covers words up to `max_len` letters
    ///
    /// Lengths past the end of the table score the same as the longest defined length.
    #[must_use]
    pub fn covering(mut self, max_len: usize) -> Self {
        self.max_len = self.max_len.max(max_len);
        self
    }

    /// Points for a single word
    ///
    /// # Panics
    /// Panics if the word is longer than `max_len()`. Words found on a board
    /// are bounded by its cell count, and `GameConfig` always extends the table
    /// to cover that, so this indicates a programming error.
    #[must_use]
    pub fn score_word(&self, word: &str) -> u32 {
        let len = word.len();
        assert!(
            len <= self.max_len(),
            "word {word:?} has {len} letters but the score table stops at {}",
            self.max_len
        );
        self.points
            .get(len)
            .or_else(|| self.points.last())
            .copied()
            .unwrap_or(0)
    }

    /// Sum of scores for each word
    ///
    /// The caller is responsible for deduplication; `SolutionSet` already is a set.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::ScoreTable;
    ///
    /// let table = ScoreTable::standard();
    /// assert_eq!(table.score_all(["ALPHA", "BETA", "ABSENTMINDED"]), 14);
    /// ```
    pub fn score_all<I, S>(&self, words: I) -> u32
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words.into_iter().map(|w| self.score_word(w.as_ref())).sum()
    }
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_values() {
        let table = ScoreTable::standard();
        assert_eq!(table.max_len(), 16);
        assert_eq!(table.score_word("AXE"), 1);
        assert_eq!(table.score_word("AXLE"), 1);
        assert_eq!(table.score_word("AMPLE"), 2);
        assert_eq!(table.score_word("SAMPLE"), 3);
        assert_eq!(table.score_word("EXAMPLE"), 5);
        assert_eq!(table.score_word("ABSENTMINDED"), 11);
    }

    #[test]
    fn short_words_score_zero() {
        let table = ScoreTable::standard();
        assert_eq!(table.score_word(""), 0);
        assert_eq!(table.score_word("AX"), 0);
    }

    #[test]
    fn score_all_example() {
        let table = ScoreTable::standard();
        assert_eq!(table.score_all(["ALPHA", "BETA", "ABSENTMINDED"]), 14);
    }

    #[test]
    fn score_all_empty() {
        let table = ScoreTable::standard();
        assert_eq!(table.score_all(Vec::<String>::new()), 0);
    }

    #[test]
    fn covering_extends_with_tail_value() {
        let table = ScoreTable::standard().covering(25);
        assert_eq!(table.max_len(), 25);
        assert_eq!(table.score_word(&"A".repeat(25)), 11);
        assert_eq!(table.score_word("SAMPLE"), 3);
    }

    #[test]
    fn covering_never_shrinks() {
        let table = ScoreTable::standard().covering(9);
        assert_eq!(table.max_len(), 16);
    }

    #[test]
    fn covering_empty_table_scores_zero() {
        let table = ScoreTable::new(Vec::new()).covering(4);
        assert_eq!(table.score_word("PLEA"), 0);
    }

    #[test]
    fn covering_huge_board_is_lazy() {
        let table = ScoreTable::standard().covering(usize::MAX);
        assert_eq!(table.max_len(), usize::MAX);
        assert_eq!(table.score_word(&"A".repeat(40)), 11);
    }

    #[test]
    fn empty_table_scores_empty_word() {
        let table = ScoreTable::new(Vec::new());
        assert_eq!(table.max_len(), 0);
        assert_eq!(table.score_word(""), 0);
    }

    #[test]
    #[should_panic(expected = "score table stops at 0")]
    fn empty_table_rejects_longer_words() {
        let _ = ScoreTable::new(Vec::new()).score_word("A");
    }

    #[test]
    #[should_panic(expected = "score table stops at 16")]
    fn overlong_word_is_a_programming_error() {
        let table = ScoreTable::standard();
        let _ = table.score_word(&"A".repeat(17));
    }
}
