//! Parallel solving across start cells
//!
//! Each start cell's search is independent given a read-only dictionary, so the
//! cells are fanned out over rayon's pool. Every worker owns a private board
//! copy, which keeps the mark/unmark stack discipline per thread.

use super::engine::Solver;
use super::solution::SolutionSet;
use crate::core::{Board, Position};
use crate::dictionary::Dictionary;
use rayon::prelude::*;

/// Find every dictionary word on the board using all available threads
///
/// Returns the same set as `Solver::solve`. The caller's board is only read.
///
/// # Examples
/// ```
/// use boggle_solver::core::Board;
/// use boggle_solver::dictionary::Dictionary;
/// use boggle_solver::solver::solve_parallel;
///
/// let dictionary = Dictionary::from_words(["plea", "same", "sax"], 3);
/// let board = Board::from_letters("PLXXMEXXXAXXSXXX", 4, 4).unwrap();
///
/// let solutions = solve_parallel(&board, &dictionary);
/// assert_eq!(solutions.into_sorted(), ["PLEA", "SAME", "SAX"]);
/// ```
#[must_use]
pub fn solve_parallel(board: &Board, dictionary: &Dictionary) -> SolutionSet {
    let starts: Vec<Position> = board.positions().collect();
    log::debug!(
        "fanning out {} start cells over {} threads",
        starts.len(),
        rayon::current_num_threads()
    );

    starts
        .into_par_iter()
        .map_init(
            || board.clone(),
            |local, (row, col)| Solver::new(dictionary).solve_from(local, row, col),
        )
        .reduce(SolutionSet::new, |mut acc, part| {
            acc.merge(part);
            acc
        })
}
