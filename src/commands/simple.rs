//! Simple interactive CLI mode
//!
//! Line-based solver without TUI: read a board, print its words, repeat.

use crate::commands::solve::{SolveConfig, solve_board};
use crate::core::GameConfig;
use crate::dictionary::Dictionary;
use crate::output::formatters::{format_board, format_word_columns};
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(game: &GameConfig, dictionary: &Dictionary) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let solved = run_simple_with(stdin.lock(), stdout.lock(), game, dictionary)?;
    log::info!("simple session ended after {solved} boards");
    Ok(())
}

/// Prompt loop over arbitrary input and output
///
/// An empty line or end of input ends the session. Boards that do not fit
/// the configured shape are reported and the user is prompted again.
/// Returns the number of boards solved.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    game: &GameConfig,
    dictionary: &Dictionary,
) -> io::Result<usize> {
    writeln!(
        output,
        "Boggle Solver: enter {} letters for a {}x{} board, row by row.",
        game.cell_count(),
        game.rows(),
        game.cols()
    )?;
    writeln!(output, "Press Enter on an empty line to quit.\n")?;

    let mut solved = 0;
    let mut line = String::new();

    loop {
        write!(output, "Board: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let letters = line.trim();
        if letters.is_empty() {
            break;
        }

        match solve_board(SolveConfig::new(letters.to_string()), game, dictionary) {
            Ok(result) => {
                solved += 1;
                writeln!(output, "\n{}", format_board(&result.board))?;
                if result.words.is_empty() {
                    writeln!(output, "No words found.")?;
                } else {
                    write!(output, "{}", format_word_columns(&result.words, 6))?;
                }
                writeln!(
                    output,
                    "{} words, {} points\n",
                    result.words.len(),
                    result.score
                )?;
            }
            Err(e) => writeln!(output, "Invalid board: {e}\n")?,
        }
    }

    writeln!(output, "Goodbye!")?;
    Ok(solved)
}
