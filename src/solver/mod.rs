//! Boggle solving
//!
//! Backtracking search over the board, with an optional observer hook and a
//! parallel variant that splits the work by start cell.

mod engine;
pub mod observer;
mod parallel;
mod solution;

pub use engine::Solver;
pub use observer::{NoopObserver, SearchEvent, SearchObserver, SearchTrace};
pub use parallel::solve_parallel;
pub use solution::SolutionSet;
