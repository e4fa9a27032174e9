//! Boggle Solver - CLI
//!
//! Boggle solver with TUI and CLI modes using pruned backtracking search.

use anyhow::{Context, Result};
use boggle_solver::{
    commands::{BenchmarkConfig, SolveConfig, run_benchmark, run_simple, solve_board},
    core::{DEFAULT_MIN_WORD_LEN, GameConfig},
    dictionary::{Dictionary, EmbeddedDictionary},
    output::{print_benchmark_result, print_solve_result},
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "boggle_solver",
    about = "Boggle solver: finds every dictionary word on a letter grid",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Board rows
    #[arg(short, long, global = true, default_value_t = GameConfig::CLASSIC_ROWS)]
    rows: usize,

    /// Board columns
    #[arg(short, long, global = true, default_value_t = GameConfig::CLASSIC_COLS)]
    cols: usize,

    /// Minimum word length
    #[arg(short, long = "min-word", global = true, default_value_t = DEFAULT_MIN_WORD_LEN)]
    min_word: usize,

    /// Dictionary: 'default' (bundled), 'short' (tiny demo list), or path to file
    #[arg(short, long, global = true, default_value = "default")]
    dictionary: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode with search replay (default)
    Play,

    /// Simple CLI mode (line prompt without TUI)
    Simple,

    /// Solve one board
    Solve {
        /// Board letters, row by row
        letters: String,

        /// Show timing and longest word
        #[arg(short, long)]
        verbose: bool,

        /// Search start cells in parallel
        #[arg(short, long)]
        parallel: bool,
    },

    /// Benchmark solver performance on random boards
    Benchmark {
        /// Number of random boards to solve
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for reproducible boards
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

/// Load the dictionary selected by the -d flag
///
/// - "default" / "all": bundled word list
/// - "short": bundled demo list
/// - "<path>": one word per line from a file
fn load_dictionary(name: &str, min_word_len: usize) -> Result<Dictionary> {
    if let Some(embedded) = EmbeddedDictionary::from_name(name) {
        return Ok(Dictionary::embedded(embedded, min_word_len));
    }
    Dictionary::load(name, min_word_len).with_context(|| format!("loading dictionary '{name}'"))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let game = GameConfig::new(cli.rows, cli.cols, cli.min_word).context("invalid board settings")?;
    let dictionary = load_dictionary(&cli.dictionary, game.min_word_len())?;
    log::info!(
        "{} words loaded for a {}x{} board",
        dictionary.len(),
        game.rows(),
        game.cols()
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary, game),
        Commands::Simple => run_simple(&game, &dictionary).context("prompt session failed"),
        Commands::Solve {
            letters,
            verbose,
            parallel,
        } => run_solve_command(letters, verbose, parallel, &game, &dictionary),
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(count, seed, &game, &dictionary)
        }
    }
}

fn run_solve_command(
    letters: String,
    verbose: bool,
    parallel: bool,
    game: &GameConfig,
    dictionary: &Dictionary,
) -> Result<()> {
    let mut config = SolveConfig::new(letters);
    config.parallel = parallel;
    let result = solve_board(config, game, dictionary).context("cannot build board")?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(
    count: usize,
    seed: Option<u64>,
    game: &GameConfig,
    dictionary: &Dictionary,
) -> Result<()> {
    match seed {
        Some(seed) => println!("Running benchmark on {count} random boards (seed {seed})..."),
        None => println!("Running benchmark on {count} random boards..."),
    }

    let mut config = BenchmarkConfig::new(count);
    config.seed = seed;
    let result = run_benchmark(&config, game, dictionary)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_play_command(dictionary: &Dictionary, game: GameConfig) -> Result<()> {
    use boggle_solver::interactive::{App, run_tui};

    let app = App::new(dictionary, game);
    run_tui(app)
}
