//! Benchmark command
//!
//! Solves a batch of random boards, timing the sequential and parallel solvers.

use crate::core::{Board, GameConfig, ShapeError};
use crate::dictionary::Dictionary;
use crate::solver::{Solver, solve_parallel};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// The sixteen dice of classic Boggle
pub const CLASSIC_DICE: [&str; 16] = [
    "AAEEGN", "ABBJOO", "ACHOPS", "AFFKPS", "AOOTTW", "CIMOTU", "DEILRX", "DELRVY", "DISTTY",
    "EEGHNW", "EEINSU", "EHRTVW", "EIOSST", "ELRTTY", "HIMNQU", "HLNNRZ",
];

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub count: usize,
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self {
            count,
            seed: None,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub boards: usize,
    pub total_words: usize,
    pub total_score: u64,
    pub average_words: f64,
    pub average_score: f64,
    pub best_board: Option<(String, usize)>,
    pub sequential_time: Duration,
    pub parallel_time: Duration,
    pub boards_per_second: f64,
    pub mismatches: usize,
}

/// Roll a random board's letters
///
/// Dice are shuffled into the cells and each shows a random face. Boards with
/// more than sixteen cells reuse the dice set.
pub fn roll_letters<R: Rng + ?Sized>(rng: &mut R, game: &GameConfig) -> String {
    let mut dice: Vec<&str> = CLASSIC_DICE
        .iter()
        .copied()
        .cycle()
        .take(game.cell_count())
        .collect();
    dice.shuffle(rng);

    dice.iter()
        .map(|die| {
            let faces = die.as_bytes();
            char::from(faces[rng.random_range(0..faces.len())])
        })
        .collect()
}

/// Run the benchmark
///
/// Every board is solved twice, once sequentially and once in parallel; any
/// disagreement between the two is counted in `mismatches`.
///
/// # Errors
///
/// Returns `ShapeError` only if a rolled board does not fit the configuration,
/// which indicates a bug in `roll_letters`.
pub fn run_benchmark(
    config: &BenchmarkConfig,
    game: &GameConfig,
    dictionary: &Dictionary,
) -> Result<BenchmarkResult, ShapeError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let pb = if config.show_progress {
        ProgressBar::new(config.count as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let mut total_words = 0;
    let mut total_score: u64 = 0;
    let mut best_board: Option<(String, usize)> = None;
    let mut sequential_time = Duration::ZERO;
    let mut parallel_time = Duration::ZERO;
    let mut mismatches = 0;

    for idx in 0..config.count {
        let letters = roll_letters(&mut rng, game);
        let mut board = Board::from_config(&letters, game)?;

        let start = Instant::now();
        let sequential = Solver::new(dictionary).solve(&mut board);
        sequential_time += start.elapsed();

        let start = Instant::now();
        let parallel = solve_parallel(&board, dictionary);
        parallel_time += start.elapsed();

        if sequential != parallel {
            log::warn!("sequential and parallel results differ on board {letters}");
            mismatches += 1;
        }

        let found = sequential.len();
        total_words += found;
        total_score += u64::from(sequential.score(game.score_table()));
        if best_board.as_ref().is_none_or(|(_, best)| found > *best) {
            best_board = Some((letters, found));
        }

        if idx % 10 == 0 {
            pb.set_message(format!("Avg words: {:.1}", total_words as f64 / (idx + 1) as f64));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let boards = config.count;
    let divisor = boards.max(1) as f64;
    let secs = sequential_time.as_secs_f64();

    Ok(BenchmarkResult {
        boards,
        total_words,
        total_score,
        average_words: total_words as f64 / divisor,
        average_score: total_score as f64 / divisor,
        best_board,
        sequential_time,
        parallel_time,
        boards_per_second: if secs > 0.0 { boards as f64 / secs } else { 0.0 },
        mismatches,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::EmbeddedDictionary;

    fn quiet(count: usize, seed: u64) -> BenchmarkConfig {
        BenchmarkConfig {
            count,
            seed: Some(seed),
            show_progress: false,
        }
    }

    #[test]
    fn rolled_letters_fit_board() {
        let mut rng = StdRng::seed_from_u64(7);
        let game = GameConfig::default();
        let letters = roll_letters(&mut rng, &game);
        assert_eq!(letters.len(), 16);
        assert!(Board::from_config(&letters, &game).is_ok());
    }

    #[test]
    fn rolled_letters_come_from_dice_faces() {
        let mut rng = StdRng::seed_from_u64(11);
        let game = GameConfig::default();
        for _ in 0..20 {
            let letters = roll_letters(&mut rng, &game);
            for letter in letters.chars() {
                assert!(CLASSIC_DICE.iter().any(|die| die.contains(letter)));
            }
        }
    }

    #[test]
    fn larger_boards_cycle_dice() {
        let mut rng = StdRng::seed_from_u64(3);
        let game = GameConfig::new(5, 5, 3).unwrap();
        assert_eq!(roll_letters(&mut rng, &game).len(), 25);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let game = GameConfig::default();
        let dictionary = Dictionary::embedded(EmbeddedDictionary::Default, 3);

        let first = run_benchmark(&quiet(5, 42), &game, &dictionary).unwrap();
        let second = run_benchmark(&quiet(5, 42), &game, &dictionary).unwrap();

        assert_eq!(first.total_words, second.total_words);
        assert_eq!(first.total_score, second.total_score);
        assert_eq!(first.best_board, second.best_board);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let game = GameConfig::default();
        let dictionary = Dictionary::embedded(EmbeddedDictionary::Default, 3);
        let result = run_benchmark(&quiet(8, 1), &game, &dictionary).unwrap();

        assert_eq!(result.boards, 8);
        assert_eq!(result.mismatches, 0);
        assert!((result.average_words * 8.0 - result.total_words as f64).abs() < 1e-9);
        if let Some((letters, best)) = &result.best_board {
            assert_eq!(letters.len(), 16);
            assert!(*best as f64 >= result.average_words);
        }
    }

    #[test]
    fn benchmark_zero_boards() {
        let game = GameConfig::default();
        let dictionary = Dictionary::embedded(EmbeddedDictionary::Short, 3);
        let result = run_benchmark(&quiet(0, 0), &game, &dictionary).unwrap();

        assert_eq!(result.boards, 0);
        assert_eq!(result.total_words, 0);
        assert!(result.best_board.is_none());
        assert!(result.average_words.abs() < f64::EPSILON);
    }
}
