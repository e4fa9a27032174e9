//! TUI application state and logic

use crate::core::{Board, GameConfig, Position};
use crate::dictionary::Dictionary;
use crate::solver::{SearchEvent, SearchTrace, Solver};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Most occupancy events kept for replay
pub const REPLAY_EVENT_LIMIT: usize = 200_000;

const TICK_RATE: Duration = Duration::from_millis(50);

/// How many recorded events the replay applies per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaySpeed {
    Normal,
    Fast,
}

impl ReplaySpeed {
    #[must_use]
    pub const fn steps_per_tick(self) -> usize {
        match self {
            Self::Normal => 1,
            Self::Fast => 250,
        }
    }

    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Normal => Self::Fast,
            Self::Fast => Self::Normal,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Fast => "fast",
        }
    }
}

/// Step-by-step playback of a recorded search
///
/// Keeps its own occupancy grid so the board being rendered is never
/// mutated.
#[derive(Debug, Clone)]
pub struct Replay {
    events: Vec<SearchEvent>,
    cursor: usize,
    cols: usize,
    occupied: Vec<bool>,
    path: Vec<Position>,
    dropped: usize,
}

impl Replay {
    #[must_use]
    pub fn new(trace: &SearchTrace, rows: usize, cols: usize) -> Self {
        Self {
            events: trace.events().to_vec(),
            cursor: 0,
            cols,
            occupied: vec![false; rows * cols],
            path: Vec::new(),
            dropped: trace.dropped(),
        }
    }

    /// Apply the next event, returning `false` once the replay is over
    pub fn step(&mut self) -> bool {
        let Some(&event) = self.events.get(self.cursor) else {
            return false;
        };
        self.cursor += 1;

        match event {
            SearchEvent::Occupy((row, col)) => {
                self.occupied[row * self.cols + col] = true;
                self.path.push((row, col));
            }
            SearchEvent::Release((row, col)) => {
                self.occupied[row * self.cols + col] = false;
                self.path.pop();
            }
        }
        true
    }

    /// Apply up to `steps` events
    pub fn advance(&mut self, steps: usize) {
        for _ in 0..steps {
            if !self.step() {
                break;
            }
        }
    }

    #[must_use]
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.occupied
            .get(row * self.cols + col)
            .copied()
            .unwrap_or(false)
    }

    /// Cells on the current search path, oldest first
    #[must_use]
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    /// Letters spelled by the current path
    #[must_use]
    pub fn spelled(&self, board: &Board) -> String {
        self.path
            .iter()
            .map(|&(row, col)| board.letter_at(row, col))
            .collect()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.events.len()
    }

    /// Fraction of recorded events replayed so far
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.events.is_empty() {
            1.0
        } else {
            self.cursor as f64 / self.events.len() as f64
        }
    }

    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.events.len()
    }

    /// Events the search produced beyond the recording cap
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.dropped
    }
}

/// A solved board and its results
#[derive(Debug, Clone)]
pub struct SolvedBoard {
    pub board: Board,
    pub words: Vec<String>,
    pub score: u32,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub boards_solved: usize,
    pub total_words: usize,
    pub best_score: u32,
}

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub game: GameConfig,
    pub input_buffer: String,
    pub solved: Option<SolvedBoard>,
    pub replay: Option<Replay>,
    pub speed: ReplaySpeed,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, game: GameConfig) -> Self {
        let prompt = format!(
            "Type {} letters for a {}x{} board, then press Enter.",
            game.cell_count(),
            game.rows(),
            game.cols()
        );

        Self {
            dictionary,
            game,
            input_buffer: String::new(),
            solved: None,
            replay: None,
            speed: ReplaySpeed::Normal,
            messages: vec![
                Message {
                    text: format!("Welcome! {} dictionary words loaded.", dictionary.len()),
                    style: MessageStyle::Info,
                },
                Message {
                    text: prompt,
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Add a typed character to the input, ignoring anything that is not a letter
    pub fn push_char(&mut self, c: char) {
        if c.is_ascii_alphabetic() && self.input_buffer.len() < self.game.cell_count() {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    /// Solve the board in the input buffer and start its replay
    pub fn submit(&mut self) {
        let letters = self.input_buffer.trim().to_string();
        let mut board = match Board::from_config(&letters, &self.game) {
            Ok(board) => board,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        let mut solver =
            Solver::with_observer(self.dictionary, SearchTrace::with_limit(REPLAY_EVENT_LIMIT));
        let solutions = solver.solve(&mut board);
        let trace = solver.into_observer();

        let score = solutions.score(self.game.score_table());
        let words = solutions.into_sorted();

        if trace.is_truncated() {
            log::info!(
                "replay truncated: {} events recorded, {} dropped",
                trace.len(),
                trace.dropped()
            );
        }

        self.stats.boards_solved += 1;
        self.stats.total_words += words.len();
        self.stats.best_score = self.stats.best_score.max(score);

        self.add_message(
            &format!("Found {} words worth {} points", words.len(), score),
            MessageStyle::Success,
        );

        self.replay = Some(Replay::new(&trace, board.rows(), board.cols()));
        self.solved = Some(SolvedBoard {
            board,
            words,
            score,
        });
        self.input_buffer.clear();
    }

    /// Advance the replay by one tick at the current speed
    pub fn tick(&mut self) {
        if let Some(replay) = self.replay.as_mut() {
            replay.advance(self.speed.steps_per_tick());
        }
    }

    pub fn toggle_speed(&mut self) {
        self.speed = self.speed.toggle();
        self.add_message(
            &format!("Replay speed: {}", self.speed.label()),
            MessageStyle::Info,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if !event::poll(TICK_RATE)? {
            app.tick();
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => app.should_quit = true,
                KeyCode::Tab => app.toggle_speed(),
                KeyCode::Char(c) => app.push_char(c),
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter => app.submit(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
