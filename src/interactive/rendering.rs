//! TUI rendering with ratatui
//!
//! Board grid with the live search path, found words and replay progress.

use super::app::{App, MessageStyle};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔠 BOGGLE SOLVER - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Board
            Constraint::Length(3), // Current path
            Constraint::Length(3), // Replay gauge
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_path(f, app, chunks[1]);
    render_replay_progress(f, app, chunks[2]);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(solved) = app.solved.as_ref() else {
        let paragraph = Paragraph::new("No board yet")
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let board = &solved.board;
    let head = app.replay.as_ref().and_then(|r| r.path().last().copied());

    let mut lines = Vec::with_capacity(board.rows());
    for row in 0..board.rows() {
        let mut spans = Vec::with_capacity(board.cols());
        for col in 0..board.cols() {
            let occupied = app
                .replay
                .as_ref()
                .is_some_and(|r| r.is_occupied(row, col));

            let style = if head == Some((row, col)) {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if occupied {
                Style::default().fg(Color::Black).bg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            };

            spans.push(Span::styled(
                format!(" {} ", board.letter_at(row, col)),
                style,
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, area);
}

fn render_path(f: &mut Frame, app: &App, area: Rect) {
    let spelled = match (app.solved.as_ref(), app.replay.as_ref()) {
        (Some(solved), Some(replay)) => replay.spelled(&solved.board),
        _ => String::new(),
    };

    let paragraph = Paragraph::new(Span::styled(
        spelled,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
    .block(Block::default().title(" Current Path ").borders(Borders::ALL));

    f.render_widget(paragraph, area);
}

fn render_replay_progress(f: &mut Frame, app: &App, area: Rect) {
    let (ratio, label) = match app.replay.as_ref() {
        Some(replay) => {
            let mut label = format!("{}/{} steps", replay.position(), replay.total());
            if replay.dropped() > 0 {
                label.push_str(&format!(" ({} not recorded)", replay.dropped()));
            }
            (replay.progress().clamp(0.0, 1.0), label)
        }
        None => (0.0, "idle".to_string()),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Search Replay ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio)
        .label(label);

    f.render_widget(gauge, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    render_words(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_words(f: &mut Frame, app: &App, area: Rect) {
    let (title, content) = match app.solved.as_ref() {
        Some(solved) => (
            format!(" Words: {} | Score: {} ", solved.words.len(), solved.score),
            solved.words.join(" "),
        ),
        None => (" Words ".to_string(), String::new()),
    };

    let paragraph = Paragraph::new(content)
        .style(Style::default().fg(Color::Green))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        " Board Letters ({}/{}) | Enter to solve ",
        app.input_buffer.len(),
        app.game.cell_count()
    );

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(25),
            Constraint::Percentage(40),
        ])
        .split(area);

    let stats_text = format!(
        "Boards: {} | Words: {} | Best: {}",
        app.stats.boards_solved, app.stats.total_words, app.stats.best_score
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let speed_text = format!("Speed: {}", app.speed.label());
    f.render_widget(
        Paragraph::new(speed_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help = Paragraph::new("Esc: Quit | Tab: Speed | Enter: Solve")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
