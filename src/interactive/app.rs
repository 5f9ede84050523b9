//! TUI application state and logic

use crate::core::LetterStatus;
use crate::game::{AggregateStats, Session};
use crate::storage::{self, StateStore};
use crate::wordlists::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Input focus of the TUI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
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

/// Application state
pub struct App<'a> {
    pub session: Session,
    pub dictionary: &'a Dictionary,
    pub store: &'a mut dyn StateStore,
    pub stats: AggregateStats,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(
        session: Session,
        dictionary: &'a Dictionary,
        store: &'a mut dyn StateStore,
    ) -> Self {
        let stats = storage::load_stats(store);

        let mut app = Self {
            session,
            dictionary,
            store,
            stats,
            input_buffer: String::new(),
            messages: Vec::new(),
            input_mode: InputMode::Guessing,
            should_quit: false,
        };

        if app.session.is_over() {
            // A finished session resumed after a restart may still need its
            // outcome recorded
            app.conclude_now();
            app.input_mode = InputMode::GameOver;
            app.add_message("Today's game is already over.", MessageStyle::Info);
            app.add_message("Press 'q' to quit.", MessageStyle::Info);
        } else if app.session.attempts().is_empty() {
            app.add_message("A word waits in the dark.", MessageStyle::Info);
            app.add_message("Type a 5-letter word and press Enter.", MessageStyle::Info);
        } else {
            app.add_message("Welcome back. Your attempts were restored.", MessageStyle::Info);
        }

        app
    }

    /// Append a typed letter to the input buffer (up to 5)
    pub fn push_letter(&mut self, c: char) {
        if self.input_buffer.len() < 5 && c.is_ascii_alphabetic() {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    /// Remove the last typed letter
    pub fn pop_letter(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the current input buffer as a guess
    pub fn submit_current(&mut self) {
        let guess = self.input_buffer.clone();

        match self.session.submit(&guess, self.dictionary) {
            Ok(_) => {
                self.input_buffer.clear();
                self.persist_session();

                if self.session.is_over() {
                    self.finish_game();
                } else {
                    let remaining = self.session.attempts_remaining();
                    self.add_message(
                        &format!(
                            "{remaining} {} remaining",
                            if remaining == 1 { "guess" } else { "guesses" }
                        ),
                        MessageStyle::Info,
                    );

                    if self.session.hint_unlocked() {
                        self.add_message("🕯 A hint has surfaced below.", MessageStyle::Info);
                    }
                }
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn finish_game(&mut self) {
        self.conclude_now();
        self.input_mode = InputMode::GameOver;

        if self.session.is_won() {
            let celebration = match self.session.attempts().len() {
                1 => "🎯 FIRST GUESS! Unthinkable! 🌟",
                2 => "🔥 CHILLING! Two guesses! 🔥",
                3 => "✨ WICKED! Three guesses! ✨",
                4 => "👏 WELL HUNTED! Four guesses! 👏",
                5 => "🎉 A CLOSE CALL! Five guesses! 🎉",
                _ => "😅 ESCAPED BY A HAIR! 😅",
            };
            self.add_message(celebration, MessageStyle::Success);
        } else {
            self.add_message(
                &format!("💀 Out of guesses! The word was {}", self.session.target()),
                MessageStyle::Error,
            );
        }

        self.add_message("Press 'q' to quit.", MessageStyle::Info);
    }

    fn persist_session(&mut self) {
        if let Err(err) = storage::persist_session(self.store, &self.session) {
            self.add_message(&format!("Could not save progress: {err}"), MessageStyle::Error);
        }
    }

    fn conclude_now(&mut self) {
        if self.session.conclude(&mut self.stats).is_some() {
            if let Err(err) = storage::persist_stats(self.store, &self.stats) {
                self.add_message(&format!("Could not save stats: {err}"), MessageStyle::Error);
            }
            self.persist_session();
        }
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

    /// Best status seen per letter across all attempts, indexed `A..=Z`
    ///
    /// Drives the on-screen keyboard coloring; Correct outranks Present
    /// outranks Absent.
    #[must_use]
    pub fn keyboard_status(&self) -> [Option<LetterStatus>; 26] {
        let mut statuses = [None; 26];

        for attempt in self.session.attempts() {
            for (i, &letter) in attempt.guess.letters().iter().enumerate() {
                let slot = (letter - b'A') as usize;
                let status = attempt.evaluation.status_at(i);

                statuses[slot] = Some(match statuses[slot] {
                    Some(prev) => best_status(prev, status),
                    None => status,
                });
            }
        }

        statuses
    }
}

fn best_status(a: LetterStatus, b: LetterStatus) -> LetterStatus {
    let rank = |status: LetterStatus| match status {
        LetterStatus::Correct => 2,
        LetterStatus::Present => 1,
        LetterStatus::Absent => 0,
    };

    if rank(a) >= rank(b) { a } else { b }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
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

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    _ => {
                        // Board stays up until the player leaves
                    }
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) => {
                        app.push_letter(c);
                    }
                    KeyCode::Backspace => {
                        app.pop_letter();
                    }
                    KeyCode::Enter => {
                        app.submit_current();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::storage::MemoryStore;
    use crate::wordlists::loader::words_from_slice;

    fn fixture_dictionary() -> Dictionary {
        let words = words_from_slice(&["ghost", "crypt", "haunt"]);
        Dictionary::from_words(&words)
    }

    fn fixture_session() -> Session {
        Session::new("2026-08-07", Word::new("ghost").unwrap(), None)
    }

    #[test]
    fn input_buffer_caps_at_five_letters() {
        let dictionary = fixture_dictionary();
        let mut store = MemoryStore::default();
        let mut app = App::new(fixture_session(), &dictionary, &mut store);

        for c in "crypts".chars() {
            app.push_letter(c);
        }
        assert_eq!(app.input_buffer, "CRYPT");

        app.push_letter('7'); // non-letters ignored
        assert_eq!(app.input_buffer, "CRYPT");

        app.pop_letter();
        assert_eq!(app.input_buffer, "CRYP");
    }

    #[test]
    fn submit_clears_buffer_and_persists() {
        let dictionary = fixture_dictionary();
        let mut store = MemoryStore::default();
        let mut app = App::new(fixture_session(), &dictionary, &mut store);

        for c in "crypt".chars() {
            app.push_letter(c);
        }
        app.submit_current();

        assert_eq!(app.input_buffer, "");
        assert_eq!(app.session.attempts().len(), 1);
        assert_eq!(app.input_mode, InputMode::Guessing);

        drop(app);
        assert!(store.get(storage::SESSION_KEY).is_some());
    }

    #[test]
    fn rejected_submit_keeps_buffer() {
        let dictionary = fixture_dictionary();
        let mut store = MemoryStore::default();
        let mut app = App::new(fixture_session(), &dictionary, &mut store);

        for c in "zzzzz".chars() {
            app.push_letter(c);
        }
        app.submit_current();

        assert_eq!(app.input_buffer, "ZZZZZ");
        assert_eq!(app.session.attempts().len(), 0);
    }

    #[test]
    fn winning_submit_records_stats_and_ends_game() {
        let dictionary = fixture_dictionary();
        let mut store = MemoryStore::default();
        let mut app = App::new(fixture_session(), &dictionary, &mut store);

        for c in "ghost".chars() {
            app.push_letter(c);
        }
        app.submit_current();

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);

        drop(app);
        assert_eq!(storage::load_stats(&store).games_won, 1);
    }

    #[test]
    fn resumed_over_session_concludes_once() {
        let dictionary = fixture_dictionary();
        let mut store = MemoryStore::default();

        let mut session = fixture_session();
        session.submit("ghost", &dictionary).unwrap();
        storage::persist_session(&mut store, &session).unwrap();

        // First app run records the outcome
        {
            let resumed = storage::start_or_resume(&store, "2026-08-07", &daily_fixture());
            let app = App::new(resumed, &dictionary, &mut store);
            assert_eq!(app.input_mode, InputMode::GameOver);
        }

        // Second app run must not double-count
        let resumed = storage::start_or_resume(&store, "2026-08-07", &daily_fixture());
        let app = App::new(resumed, &dictionary, &mut store);
        assert_eq!(app.stats.games_played, 1);
    }

    fn daily_fixture() -> crate::daily::DailyWord {
        crate::daily::DailyWord {
            date: "2026-08-07".to_string(),
            target: Word::new("ghost").unwrap(),
            hint: None,
        }
    }

    #[test]
    fn keyboard_status_tracks_best_status() {
        let dictionary = fixture_dictionary();
        let mut store = MemoryStore::default();
        let mut app = App::new(fixture_session(), &dictionary, &mut store);

        for c in "haunt".chars() {
            app.push_letter(c);
        }
        app.submit_current();

        let statuses = app.keyboard_status();
        // HAUNT vs GHOST: H(present) A(absent) U(absent) N(absent) T(correct)
        assert_eq!(statuses[(b'H' - b'A') as usize], Some(LetterStatus::Present));
        assert_eq!(statuses[(b'A' - b'A') as usize], Some(LetterStatus::Absent));
        assert_eq!(statuses[(b'T' - b'A') as usize], Some(LetterStatus::Correct));
        assert_eq!(statuses[(b'Z' - b'A') as usize], None);
    }

    #[test]
    fn keyboard_status_upgrades_never_downgrades() {
        assert_eq!(
            best_status(LetterStatus::Present, LetterStatus::Correct),
            LetterStatus::Correct
        );
        assert_eq!(
            best_status(LetterStatus::Correct, LetterStatus::Absent),
            LetterStatus::Correct
        );
        assert_eq!(
            best_status(LetterStatus::Absent, LetterStatus::Present),
            LetterStatus::Present
        );
    }
}
