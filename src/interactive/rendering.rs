//! TUI rendering with ratatui
//!
//! Board, keyboard, and panels for the daily game interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::LetterStatus;
use crate::game::MAX_ATTEMPTS;
use crate::output::formatters::share_grid;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Board + info panel
            Constraint::Length(5),  // Keyboard
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Info panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("🎃 HORRORDLE — {}", app.session.date()))
        .style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Magenta)),
        );
    f.render_widget(header, area);
}

fn status_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        LetterStatus::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        LetterStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let attempts = app.session.attempts();
    let mut lines = vec![Line::from("")];

    for row in 0..MAX_ATTEMPTS {
        let line = if let Some(attempt) = attempts.get(row) {
            // Evaluated row
            let mut spans = Vec::with_capacity(9);
            for (i, &letter) in attempt.guess.letters().iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(
                    format!(" {} ", letter as char),
                    status_style(attempt.evaluation.status_at(i)),
                ));
            }
            Line::from(spans)
        } else if row == attempts.len() && !app.session.is_over() {
            // Input row being typed
            let mut spans = Vec::with_capacity(9);
            for i in 0..5 {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                let cell = app
                    .input_buffer
                    .chars()
                    .nth(i)
                    .map_or_else(|| " _ ".to_string(), |c| format!(" {c} "));
                spans.push(Span::styled(
                    cell,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            Line::from(spans)
        } else {
            // Untouched row
            let cells = vec![" · "; 5].join(" ");
            Line::from(Span::styled(cells, Style::default().fg(Color::DarkGray)))
        };

        lines.push(line.alignment(Alignment::Center));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),     // Messages
            Constraint::Length(10), // Hint / share grid
        ])
        .split(area);

    render_messages(f, app, chunks[0]);
    render_hint_panel(f, app, chunks[1]);
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

fn render_hint_panel(f: &mut Frame, app: &App, area: Rect) {
    let (title, content) = if app.session.is_over() {
        // Conclusion: show the spoiler-free share grid
        (" Share ", share_grid(&app.session))
    } else if app.session.hint_unlocked() {
        let hint = app.session.hint().unwrap_or_default();
        (" Hint ", format!("The word {hint}."))
    } else {
        (
            " Hint ",
            format!(
                "A hint surfaces after {} guesses.",
                crate::game::HINT_GATE
            ),
        )
    };

    let panel = Paragraph::new(content)
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(panel, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let statuses = app.keyboard_status();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for (i, letter) in row.chars().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                let slot = (letter as u8 - b'A') as usize;
                let style = match statuses[slot] {
                    Some(status) => status_style(status),
                    None => Style::default().fg(Color::White),
                };
                spans.push(Span::styled(letter.to_string(), style));
            }
            Line::from(spans).alignment(Alignment::Center)
        })
        .collect();

    let keyboard = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));

    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(35),
            Constraint::Percentage(35),
        ])
        .split(area);

    let attempts_text = format!(
        "Attempt {}/{MAX_ATTEMPTS}",
        app.session.attempts().len().min(MAX_ATTEMPTS)
    );
    let attempts = Paragraph::new(attempts_text).alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let stats_text = format!(
        "Played: {} | Win rate: {:.0}% | Streak: {}",
        app.stats.games_played,
        app.stats.win_rate(),
        app.stats.current_streak
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit",
        InputMode::Guessing => "Esc: Quit | Enter: Submit | Backspace: Erase",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
