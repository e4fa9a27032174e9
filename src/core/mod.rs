//! Core domain types for Boggle
//!
//! Words, the letter grid, scoring and game configuration. Everything here is
//! pure data with no I/O.

mod board;
mod config;
mod score;
mod word;

pub use board::{Board, Neighbors, Position, ShapeError};
pub use config::{ConfigError, GameConfig};
pub use score::{STANDARD_POINTS, ScoreTable};
pub use word::{DEFAULT_MIN_WORD_LEN, Word, WordError, is_allowed, normalize};
