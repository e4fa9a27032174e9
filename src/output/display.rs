//! Display functions for command results

use super::formatters::{create_progress_bar, format_board, format_word_columns, group_by_length};
use crate::commands::{BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a board
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Board {}x{}:", result.board.rows(), result.board.cols());
    print!("{}", format_board(&result.board).bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\n{}", "No words found.".red().bold());
        return;
    }

    for (len, words) in group_by_length(&result.words) {
        println!(
            "\n{} ({})",
            format!("{len} letters").bright_cyan().bold(),
            words.len()
        );
        print!("{}", format_word_columns(&words, 8));
    }

    println!();
    println!(
        "{}",
        format!("✅ {} words, {} points", result.words.len(), result.score)
            .green()
            .bold()
    );

    if verbose {
        println!("   Longest word:  {} letters", result.longest_word_len);
        println!(
            "   Solve time:    {:.3}ms{}",
            result.duration.as_secs_f64() * 1000.0,
            if result.parallel { " (parallel)" } else { "" }
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Boards:".bright_cyan().bold());
    println!("   Boards solved:    {}", result.boards);
    println!("   Total words:      {}", result.total_words);
    println!(
        "   Average words:    {}",
        format!("{:.2}", result.average_words).bright_yellow().bold()
    );
    println!(
        "   Average score:    {}",
        format!("{:.2}", result.average_score).bright_yellow()
    );
    if let Some((letters, words)) = &result.best_board {
        println!("   Richest board:    {} ({} words)", letters.green(), words);
    }

    println!("\n⏱  {}", "Timing:".bright_cyan().bold());
    let sequential = result.sequential_time.as_secs_f64();
    let parallel = result.parallel_time.as_secs_f64();
    let slowest = sequential.max(parallel);
    println!(
        "   Sequential: {} {:.3}s",
        create_progress_bar(sequential, slowest, 30).green(),
        sequential
    );
    println!(
        "   Parallel:   {} {:.3}s",
        create_progress_bar(parallel, slowest, 30).green(),
        parallel
    );
    if parallel > 0.0 {
        println!("   Speedup:          {:.2}x", sequential / parallel);
    }
    println!("   Boards/second:    {:.1}", result.boards_per_second);

    if result.mismatches > 0 {
        println!(
            "\n{}",
            format!(
                "❌ {} boards differed between sequential and parallel solves",
                result.mismatches
            )
            .red()
            .bold()
        );
    }
}
