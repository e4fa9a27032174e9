//! Backtracking Boggle solver

use super::observer::{NoopObserver, SearchObserver};
use super::solution::SolutionSet;
use crate::core::{Board, Word};
use crate::dictionary::{Classification, Dictionary, PrefixMatcher};

/// Depth-first word finder
///
/// Borrows the dictionary for its lifetime and takes the board by exclusive
/// reference for each solve, so occupancy marks can only be changed by the
/// running search.
pub struct Solver<'d, O: SearchObserver = NoopObserver> {
    matcher: PrefixMatcher<'d, Word>,
    observer: O,
}

impl<'d> Solver<'d> {
    /// Create a solver with no observer attached
    #[must_use]
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self::with_observer(dictionary, NoopObserver)
    }
}

impl<'d, O: SearchObserver> Solver<'d, O> {
    /// Create a solver that reports occupancy changes to `observer`
    #[must_use]
    pub fn with_observer(dictionary: &'d Dictionary, observer: O) -> Self {
        Self {
            matcher: dictionary.matcher(),
            observer,
        }
    }

    /// Give back the observer, e.g. to read a recorded trace
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Find every dictionary word reachable on the board
    ///
    /// Every cell is tried as a starting point in row-major order. Cells already
    /// occupied on entry are never used. On return the board's occupancy is
    /// exactly as it was on entry.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::Board;
    /// use boggle_solver::dictionary::Dictionary;
    /// use boggle_solver::solver::Solver;
    ///
    /// let dictionary = Dictionary::from_words(["sample", "amp", "zebra"], 3);
    /// let mut board = Board::from_letters("PLXXMEXXXAXXSXXX", 4, 4).unwrap();
    ///
    /// let solutions = Solver::new(&dictionary).solve(&mut board);
    /// assert_eq!(solutions.into_sorted(), ["AMP", "SAMPLE"]);
    /// ```
    pub fn solve(&mut self, board: &mut Board) -> SolutionSet {
        let mut solutions = SolutionSet::new();
        let mut prefix = String::with_capacity(board.cell_count());
        #[cfg(debug_assertions)]
        let before = board.clone();

        for row in 0..board.rows() {
            for col in 0..board.cols() {
                self.explore(board, row, col, &mut prefix, &mut solutions);
            }
        }

        #[cfg(debug_assertions)]
        debug_assert!(*board == before, "occupancy not restored after solve");
        log::trace!(
            "found {} words on {}x{} board {}",
            solutions.len(),
            board.rows(),
            board.cols(),
            board.letters()
        );
        solutions
    }

    /// Find every word whose path starts at one cell
    ///
    /// The union of `solve_from` over all cells equals `solve`.
    pub fn solve_from(&mut self, board: &mut Board, row: usize, col: usize) -> SolutionSet {
        let mut solutions = SolutionSet::new();
        let mut prefix = String::with_capacity(board.cell_count());
        self.explore(board, row, col, &mut prefix, &mut solutions);
        solutions
    }

    /// One search step: extend `prefix` with the letter at (row, col)
    ///
    /// `prefix` is a shared buffer; it is restored to its entry value before
    /// returning, just like the board's occupancy.
    fn explore(
        &mut self,
        board: &mut Board,
        row: usize,
        col: usize,
        prefix: &mut String,
        solutions: &mut SolutionSet,
    ) {
        if !board.is_in_bounds(row as isize, col as isize) || !board.is_free(row, col) {
            return;
        }

        prefix.push(board.letter_at(row, col));

        match self.matcher.classify(prefix) {
            Classification::NoMatch => {
                prefix.pop();
                return;
            }
            Classification::Match => {
                solutions.insert(prefix);
            }
            Classification::Prefix => {}
        }

        board.mark_occupied(row, col);
        self.observer.on_occupy(row, col);

        for (next_row, next_col) in board.neighbors(row, col) {
            if board.is_free(next_row, next_col) {
                self.explore(board, next_row, next_col, prefix, solutions);
            }
        }

        board.mark_free(row, col);
        self.observer.on_release(row, col);

        prefix.pop();
    }
}
