//! Boggle board
//!
//! A rows x cols letter grid with a parallel occupancy flag per cell. The
//! occupancy flags only change during a search and follow strict stack
//! discipline: every `mark_occupied` is undone by exactly one `mark_free`.

use super::config::GameConfig;
use std::fmt;
use thiserror::Error;

/// A (row, col) grid coordinate
pub type Position = (usize, usize);

/// King-move offsets: every adjacent cell including diagonals
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Error type for rejected board input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("board needs exactly {expected} letters for {rows}x{cols}, got {actual}")]
    WrongLength {
        expected: usize,
        actual: usize,
        rows: usize,
        cols: usize,
    },
    #[error("board may only contain letters, found {found:?} at position {index}")]
    NonAlphabetic { found: char, index: usize },
}

/// Letter grid plus transient occupancy state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    letters: Vec<u8>,
    occupied: Vec<bool>,
}

impl Board {
    /// Unpack a flat string of `rows * cols` letters into a row-major grid
    ///
    /// Input is case-insensitive; letters are stored uppercase.
    ///
    /// # Errors
    /// Returns `ShapeError` if the length does not match the dimensions or any
    /// character is not an ASCII letter. Length is checked first.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::Board;
    ///
    /// let board = Board::from_letters("abcdefghijklmnop", 4, 4).unwrap();
    /// assert_eq!(board.letter_at(1, 2), 'G');
    ///
    /// assert!(Board::from_letters("abcdefghijklmno", 4, 4).is_err());
    /// assert!(Board::from_letters("abcdefghijklmn0p", 4, 4).is_err());
    /// ```
    pub fn from_letters(letters: &str, rows: usize, cols: usize) -> Result<Self, ShapeError> {
        let expected = rows.saturating_mul(cols);
        let actual = letters.chars().count();
        if actual != expected {
            return Err(ShapeError::WrongLength {
                expected,
                actual,
                rows,
                cols,
            });
        }

        if let Some((index, found)) = letters
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_alphabetic())
        {
            return Err(ShapeError::NonAlphabetic { found, index });
        }

        Ok(Self {
            rows,
            cols,
            letters: letters.bytes().map(|b| b.to_ascii_uppercase()).collect(),
            occupied: vec![false; expected],
        })
    }

    /// Unpack letters using the dimensions from a `GameConfig`
    ///
    /// # Errors
    /// Same as `from_letters`.
    pub fn from_config(letters: &str, config: &GameConfig) -> Result<Self, ShapeError> {
        Self::from_letters(letters, config.rows(), config.cols())
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

    #[inline]
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    #[inline]
    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Letter at a cell
    ///
    /// # Panics
    /// Panics if the position is out of bounds.
    #[inline]
    #[must_use]
    pub fn letter_at(&self, row: usize, col: usize) -> char {
        assert!(row < self.rows && col < self.cols, "({row}, {col}) is off the board");
        char::from(self.letters[self.index(row, col)])
    }

    /// Whether a possibly-negative coordinate lies on the board
    #[inline]
    #[must_use]
    pub const fn is_in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Whether a cell is available to the current search path
    ///
    /// # Panics
    /// Panics if the position is out of bounds.
    #[inline]
    #[must_use]
    pub fn is_free(&self, row: usize, col: usize) -> bool {
        !self.occupied[self.index(row, col)]
    }

    /// Claim a cell for the current search path
    #[inline]
    pub fn mark_occupied(&mut self, row: usize, col: usize) {
        let index = self.index(row, col);
        debug_assert!(!self.occupied[index], "({row}, {col}) reused on one path");
        self.occupied[index] = true;
    }

    /// Release a cell when backtracking
    #[inline]
    pub fn mark_free(&mut self, row: usize, col: usize) {
        let index = self.index(row, col);
        debug_assert!(self.occupied[index], "({row}, {col}) released twice");
        self.occupied[index] = false;
    }

    /// True when no cell is occupied, i.e. outside of any search
    #[must_use]
    pub fn all_free(&self) -> bool {
        self.occupied.iter().all(|&o| !o)
    }

    /// In-bounds cells adjacent to (row, col), diagonals included
    ///
    /// The iterator copies the dimensions, so it does not borrow the board and
    /// the caller may mutate occupancy while walking it.
    #[must_use]
    pub const fn neighbors(&self, row: usize, col: usize) -> Neighbors {
        Neighbors {
            rows: self.rows,
            cols: self.cols,
            row,
            col,
            next: 0,
        }
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let cols = self.cols;
        (0..self.cell_count()).map(move |i| (i / cols, i % cols))
    }

    /// The board's letters as a flat row-major string
    #[must_use]
    pub fn letters(&self) -> String {
        self.letters.iter().map(|&b| char::from(b)).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cols == 0 {
            return Ok(());
        }
        for (row, chunk) in self.letters.chunks(self.cols).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, &letter) in chunk.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", char::from(letter))?;
            }
        }
        Ok(())
    }
}

/// Iterator over the in-bounds neighbors of a cell
#[derive(Debug, Clone)]
pub struct Neighbors {
    rows: usize,
    cols: usize,
    row: usize,
    col: usize,
    next: usize,
}

impl Iterator for Neighbors {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        while let Some(&(d_row, d_col)) = NEIGHBOR_OFFSETS.get(self.next) {
            self.next += 1;
            let row = self.row.checked_add_signed(d_row);
            let col = self.col.checked_add_signed(d_col);
            if let (Some(row), Some(col)) = (row, col)
                && row < self.rows
                && col < self.cols
            {
                return Some((row, col));
            }
        }
        None
    }
}
