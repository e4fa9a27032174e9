//! Game configuration
//!
//! Board dimensions, minimum word length and the score table, bundled into one
//! immutable value handed to the dictionary, board and scorer.

use super::score::ScoreTable;
use super::word::DEFAULT_MIN_WORD_LEN;
use thiserror::Error;

/// Error type for rejected configurations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board dimensions must be non-zero, got {rows}x{cols}")]
    ZeroDimension { rows: usize, cols: usize },
    #[error("board of {rows}x{cols} cells is too large")]
    TooLarge { rows: usize, cols: usize },
    #[error("minimum word length must be at least 1")]
    ZeroMinWordLength,
    #[error("score table covers words up to {covered} letters but the board has {cells} cells")]
    ScoreTableTooShort { covered: usize, cells: usize },
}

/// Immutable configuration for one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    rows: usize,
    cols: usize,
    min_word_len: usize,
    score_table: ScoreTable,
}

impl GameConfig {
    pub const CLASSIC_ROWS: usize = 4;
    pub const CLASSIC_COLS: usize = 4;

    /// Create a configuration with the standard score table
    ///
    /// The table is extended to cover the board's cell count, so every word the
    /// solver can find has a defined score.
    ///
    /// # Errors
    /// Returns `ConfigError` for zero dimensions, a zero minimum word length,
    /// or a board whose cell count overflows `usize`.
    pub fn new(rows: usize, cols: usize, min_word_len: usize) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::ZeroDimension { rows, cols });
        }
        if min_word_len == 0 {
            return Err(ConfigError::ZeroMinWordLength);
        }
        let cells = rows
            .checked_mul(cols)
            .ok_or(ConfigError::TooLarge { rows, cols })?;

        Ok(Self {
            rows,
            cols,
            min_word_len,
            score_table: ScoreTable::standard().covering(cells),
        })
    }

    /// Replace the score table
    ///
    /// # Errors
    /// Returns `ConfigError::ScoreTableTooShort` if the table cannot score a
    /// word that uses every cell on the board.
    pub fn with_score_table(self, score_table: ScoreTable) -> Result<Self, ConfigError> {
        let cells = self.cell_count();
        if score_table.max_len() < cells {
            return Err(ConfigError::ScoreTableTooShort {
                covered: score_table.max_len(),
                cells,
            });
        }
        Ok(Self {
            score_table,
            ..self
        })
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells, which is also the longest possible word
    #[inline]
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    #[inline]
    #[must_use]
    pub const fn min_word_len(&self) -> usize {
        self.min_word_len
    }

    #[inline]
    #[must_use]
    pub const fn score_table(&self) -> &ScoreTable {
        &self.score_table
    }
}

impl Default for GameConfig {
    /// Classic 4x4 board, three-letter minimum, standard scoring
    fn default() -> Self {
        Self {
            rows: Self::CLASSIC_ROWS,
            cols: Self::CLASSIC_COLS,
            min_word_len: DEFAULT_MIN_WORD_LEN,
            score_table: ScoreTable::standard(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic() {
        let config = GameConfig::default();
        assert_eq!(config.rows(), 4);
        assert_eq!(config.cols(), 4);
        assert_eq!(config.cell_count(), 16);
        assert_eq!(config.min_word_len(), 3);
        assert_eq!(config.score_table(), &ScoreTable::standard());
    }

    #[test]
    fn new_matches_default_for_classic_board() {
        assert_eq!(GameConfig::new(4, 4, 3).unwrap(), GameConfig::default());
    }

    #[test]
    fn larger_board_extends_score_table() {
        let config = GameConfig::new(5, 5, 4).unwrap();
        assert_eq!(config.cell_count(), 25);
        assert_eq!(config.score_table().max_len(), 25);
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert_eq!(
            GameConfig::new(0, 4, 3),
            Err(ConfigError::ZeroDimension { rows: 0, cols: 4 })
        );
        assert!(GameConfig::new(4, 0, 3).is_err());
    }

    #[test]
    fn zero_min_word_rejected() {
        assert_eq!(GameConfig::new(4, 4, 0), Err(ConfigError::ZeroMinWordLength));
    }

    #[test]
    fn overflowing_board_rejected() {
        assert!(matches!(
            GameConfig::new(usize::MAX, 2, 3),
            Err(ConfigError::TooLarge { .. })
        ));
    }

    #[test]
    fn huge_board_does_not_allocate_score_table() {
        let config = GameConfig::new(usize::MAX / 2, 2, 3).unwrap();
        assert_eq!(config.cell_count(), usize::MAX - 1);
        assert_eq!(config.score_table().max_len(), usize::MAX - 1);
        assert_eq!(config.score_table().score_word("ABSENTMINDED"), 11);
    }

    #[test]
    fn short_custom_score_table_rejected() {
        let table = ScoreTable::new(vec![0, 0, 0, 1, 1]);
        let result = GameConfig::default().with_score_table(table);
        assert_eq!(
            result,
            Err(ConfigError::ScoreTableTooShort {
                covered: 4,
                cells: 16
            })
        );
    }

    #[test]
    fn custom_score_table_accepted_when_long_enough() {
        let table = ScoreTable::new(vec![0, 0, 1, 2, 3]);
        let config = GameConfig::new(2, 2, 2)
            .unwrap()
            .with_score_table(table.clone())
            .unwrap();
        assert_eq!(config.score_table(), &table);
    }
}
