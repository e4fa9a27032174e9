//! Boggle Solver
//!
//! Finds every dictionary word that can be traced on a Boggle board by
//! moving between adjacent cells, using each cell at most once per word.
//!
//! # Quick Start
//!
//! ```rust
//! use boggle_solver::core::{Board, GameConfig};
//! use boggle_solver::dictionary::{Dictionary, EmbeddedDictionary};
//! use boggle_solver::solver::Solver;
//!
//! let game = GameConfig::default();
//! let dictionary = Dictionary::embedded(EmbeddedDictionary::Default, game.min_word_len());
//! let mut board = Board::from_config("PLXXMEXXXAXXSXXX", &game).unwrap();
//!
//! let solutions = Solver::new(&dictionary).solve(&mut board);
//! assert_eq!(solutions.score(game.score_table()), 16);
//! assert!(solutions.contains("SAMPLE"));
//! ```

// Core domain types
pub mod core;

// Word lists and prefix matching
pub mod dictionary;

// Search algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
