//! Board solving command
//!
//! Solves a single board and returns the sorted words with their score.

use crate::core::{Board, GameConfig, ShapeError};
use crate::dictionary::Dictionary;
use crate::solver::{Solver, solve_parallel};
use std::time::{Duration, Instant};

/// Configuration for solving a board
pub struct SolveConfig {
    pub letters: String,
    pub parallel: bool,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(letters: String) -> Self {
        Self {
            letters,
            parallel: false,
        }
    }
}

/// Result of solving a board
pub struct SolveResult {
    pub board: Board,
    pub words: Vec<String>,
    pub score: u32,
    /// Length of the longest word found, or 0 if none
    pub longest_word_len: usize,
    pub duration: Duration,
    pub parallel: bool,
}

/// Solve a board given as a flat letter string
///
/// # Errors
///
/// Returns `ShapeError` if the letters do not form a board of the configured
/// size. No search is attempted in that case.
pub fn solve_board(
    config: SolveConfig,
    game: &GameConfig,
    dictionary: &Dictionary,
) -> Result<SolveResult, ShapeError> {
    let mut board = Board::from_config(config.letters.trim(), game)?;

    let start = Instant::now();
    let solutions = if config.parallel {
        solve_parallel(&board, dictionary)
    } else {
        Solver::new(dictionary).solve(&mut board)
    };
    let duration = start.elapsed();

    let score = solutions.score(game.score_table());
    let longest_word_len = solutions.longest_len();
    let words = solutions.into_sorted();

    log::debug!(
        "solved {} in {:.2?}: {} words, {} points{}",
        board.letters(),
        duration,
        words.len(),
        score,
        if config.parallel { " (parallel)" } else { "" }
    );

    Ok(SolveResult {
        board,
        words,
        score,
        longest_word_len,
        duration,
        parallel: config.parallel,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::EmbeddedDictionary;

    fn dictionary() -> Dictionary {
        Dictionary::embedded(EmbeddedDictionary::Default, 3)
    }

    #[test]
    fn solve_sample_board() {
        let game = GameConfig::default();
        let config = SolveConfig::new("plxxmexxxaxxsxxx".to_string());

        let result = solve_board(config, &game, &dictionary()).unwrap();

        assert_eq!(
            result.words,
            [
                "AMP", "AMPLE", "AXE", "AXLE", "ELM", "EXAM", "LEA", "MAX", "PEA", "PLEA", "SAME",
                "SAMPLE", "SAX"
            ]
        );
        assert_eq!(result.score, 16);
        assert_eq!(result.longest_word_len, 6);
        assert!(result.board.all_free());
    }

    #[test]
    fn solve_parallel_matches() {
        let game = GameConfig::default();
        let dictionary = dictionary();

        let sequential =
            solve_board(SolveConfig::new("SERSPATGLINESERS".to_string()), &game, &dictionary)
                .unwrap();
        let mut config = SolveConfig::new("SERSPATGLINESERS".to_string());
        config.parallel = true;
        let parallel = solve_board(config, &game, &dictionary).unwrap();

        assert!(parallel.parallel);
        assert_eq!(sequential.words, parallel.words);
        assert_eq!(sequential.score, 95);
        assert_eq!(parallel.score, 95);
    }

    #[test]
    fn solve_trims_whitespace() {
        let game = GameConfig::default();
        let config = SolveConfig::new("  PLXXMEXXXAXXSXXX\n".to_string());
        assert!(solve_board(config, &game, &dictionary()).is_ok());
    }

    #[test]
    fn solve_rejects_short_board() {
        let game = GameConfig::default();
        let config = SolveConfig::new("PLXXMEXXXAXXSXX".to_string());
        let result = solve_board(config, &game, &dictionary());
        assert!(matches!(
            result,
            Err(ShapeError::WrongLength {
                expected: 16,
                actual: 15,
                ..
            })
        ));
    }

    #[test]
    fn solve_rejects_digit() {
        let game = GameConfig::default();
        let config = SolveConfig::new("PLXXMEXXXAXX5XXX".to_string());
        let result = solve_board(config, &game, &dictionary());
        assert!(matches!(result, Err(ShapeError::NonAlphabetic { found: '5', .. })));
    }

    #[test]
    fn solve_respects_board_dimensions() {
        let game = GameConfig::new(2, 3, 3).unwrap();
        let dictionary = Dictionary::from_words(["cat", "act", "tac"], 3);
        let result = solve_board(SolveConfig::new("CATXXX".to_string()), &game, &dictionary)
            .unwrap();
        // C A T / X X X: C and T are not adjacent, so ACT is unreachable
        assert_eq!(result.words, ["CAT", "TAC"]);
        assert_eq!(result.longest_word_len, 3);
        assert!(result.words.iter().all(|w| w.len() <= 6));
    }
}
