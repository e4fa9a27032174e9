//! Formatting utilities for terminal output

use crate::core::Board;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Format a board as an indented letter grid
#[must_use]
pub fn format_board(board: &Board) -> String {
    let mut result = String::new();
    for line in board.to_string().lines() {
        let _ = writeln!(result, "  {line}");
    }
    result
}

/// Group words by length, shortest first
///
/// Words keep their relative order within each group.
#[must_use]
pub fn group_by_length<S: AsRef<str>>(words: &[S]) -> BTreeMap<usize, Vec<&str>> {
    let mut groups: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
    for word in words {
        let word = word.as_ref();
        groups.entry(word.len()).or_default().push(word);
    }
    groups
}

/// Lay words out in rows of at most `per_line`, padded to the longest word
#[must_use]
pub fn format_word_columns<S: AsRef<str>>(words: &[S], per_line: usize) -> String {
    let width = words.iter().map(|w| w.as_ref().len()).max().unwrap_or(0);
    let mut result = String::new();

    for chunk in words.chunks(per_line.max(1)) {
        let line = chunk
            .iter()
            .map(|w| format!("{:<width$}", w.as_ref()))
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(result, "  {}", line.trim_end());
    }

    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_is_indented_grid() {
        let board = Board::from_letters("ABCD", 2, 2).unwrap();
        assert_eq!(format_board(&board), "  A B\n  C D\n");
    }

    #[test]
    fn groups_ordered_by_length() {
        let words = ["AMP", "AMPLE", "AXE", "AXLE", "SAMPLE"];
        let groups = group_by_length(&words);

        let lengths: Vec<usize> = groups.keys().copied().collect();
        assert_eq!(lengths, [3, 4, 5, 6]);
        assert_eq!(groups[&3], ["AMP", "AXE"]);
        assert_eq!(groups[&6], ["SAMPLE"]);
    }

    #[test]
    fn word_columns_wrap() {
        let words = ["AMP", "AXE", "SAMPLE"];
        let text = format_word_columns(&words, 2);
        assert_eq!(text, "  AMP     AXE\n  SAMPLE\n");
    }

    #[test]
    fn word_columns_empty() {
        let words: [&str; 0] = [];
        assert_eq!(format_word_columns(&words, 4), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
