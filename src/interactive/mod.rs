//! Interactive TUI interface

pub mod app;
pub mod rendering;

pub use app::{App, Replay, ReplaySpeed, run_tui};
