//! Command implementations

pub mod benchmark;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, CLASSIC_DICE, roll_letters, run_benchmark};
pub use simple::{run_simple, run_simple_with};
pub use solve::{SolveConfig, SolveResult, solve_board};
