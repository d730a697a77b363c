//! TUI application state and logic

use crate::core::{Difficulty, Position, PuzzleError};
use crate::engine::{PuzzleSession, SelectOutcome};
use crate::wordlists::WordCatalog;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub session: PuzzleSession,
    pub difficulty: Difficulty,
    pub rng: StdRng,
    pub cursor: Position,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    Completed,
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
    pub games_started: usize,
    pub games_completed: usize,
    pub words_found: usize,
}

impl App {
    /// Create the app with a first puzzle already generated
    ///
    /// # Errors
    ///
    /// Returns an error if the first puzzle cannot be generated.
    pub fn new(
        catalog: WordCatalog,
        difficulty: Difficulty,
        mut rng: StdRng,
    ) -> Result<Self, PuzzleError> {
        let session = PuzzleSession::new(catalog, difficulty, &mut rng)?;

        let mut app = Self {
            session,
            difficulty,
            rng,
            cursor: Position::new(0, 0),
            messages: Vec::new(),
            stats: Statistics {
                games_started: 1,
                ..Statistics::default()
            },
            should_quit: false,
            input_mode: InputMode::Playing,
        };
        app.add_message(
            "Welcome! Move with the arrow keys and press Enter to pick a letter.",
            MessageStyle::Info,
        );
        app.add_message(
            "Every pick must share a row or column with your first pick.",
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Move the cursor, clamped to the board
    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let last = self.session.board_size().saturating_sub(1) as isize;
        let row = (self.cursor.row as isize + d_row).clamp(0, last);
        let col = (self.cursor.col as isize + d_col).clamp(0, last);
        self.cursor = Position::new(row as usize, col as usize);
    }

    pub fn select_at_cursor(&mut self) {
        if self.input_mode != InputMode::Playing {
            return;
        }

        match self.session.select_cell(self.cursor.row, self.cursor.col) {
            Ok(SelectOutcome::Appended) => {}
            Ok(SelectOutcome::Reset) => {
                self.add_message(
                    "Off the line of your first pick - selection cleared",
                    MessageStyle::Error,
                );
            }
            Ok(SelectOutcome::Found(word)) => {
                self.stats.words_found += 1;
                if self.session.is_complete() {
                    self.stats.games_completed += 1;
                    self.input_mode = InputMode::Completed;
                    self.add_message(
                        &format!("🎉 {word}! Every word found! 🎉"),
                        MessageStyle::Success,
                    );
                    self.add_message(
                        "Press 'n' for new game, 1/2/3 to change difficulty or 'q' to quit.",
                        MessageStyle::Info,
                    );
                } else {
                    self.add_message(
                        &format!("Found {word}! {} to go", self.session.remaining_count()),
                        MessageStyle::Success,
                    );
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn delete_last(&mut self) {
        self.session.delete_last();
    }

    pub fn clear_selection(&mut self) {
        self.session.clear_selection();
    }

    /// Start a new puzzle, optionally switching difficulty
    pub fn new_game(&mut self, difficulty: Option<Difficulty>) {
        let difficulty = difficulty.unwrap_or(self.difficulty);

        match self.session.initialize(difficulty, &mut self.rng) {
            Ok(()) => {
                self.difficulty = difficulty;
                self.cursor = Position::new(0, 0);
                self.input_mode = InputMode::Playing;
                self.stats.games_started += 1;
                self.messages.clear();
                self.add_message(
                    &format!("New {difficulty} puzzle started!"),
                    MessageStyle::Info,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
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

    /// Apply one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('n') => self.new_game(None),
            KeyCode::Char('1') => self.new_game(Some(Difficulty::Easy)),
            KeyCode::Char('2') => self.new_game(Some(Difficulty::Medium)),
            KeyCode::Char('3') => self.new_game(Some(Difficulty::Hard)),
            KeyCode::Up => self.move_cursor(-1, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Left => self.move_cursor(0, -1),
            KeyCode::Right => self.move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => self.select_at_cursor(),
            KeyCode::Backspace => self.delete_last(),
            KeyCode::Esc => self.clear_selection(),
            _ => {}
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
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
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

            app.handle_key(key.code, key.modifiers);
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
    use rand::SeedableRng;

    fn new_app() -> App {
        App::new(
            WordCatalog::builtin(),
            Difficulty::Easy,
            StdRng::seed_from_u64(21),
        )
        .unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(code, KeyModifiers::NONE);
    }

    #[test]
    fn cursor_is_clamped_to_board() {
        let mut app = new_app();
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.cursor, Position::new(0, 0));

        for _ in 0..40 {
            press(&mut app, KeyCode::Down);
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.cursor, Position::new(14, 14));
    }

    #[test]
    fn enter_backspace_escape() {
        let mut app = new_app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.selection_len(), 2);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.selection_len(), 1);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.session.selection_len(), 0);
    }

    #[test]
    fn spelling_every_word_completes_game() {
        let mut app = new_app();
        let words = app.session.remaining_words().to_vec();

        for word in &words {
            let placement = app.session.grid().locate(word).unwrap();
            for pos in placement.positions() {
                app.cursor = pos;
                press(&mut app, KeyCode::Enter);
            }
        }

        assert_eq!(app.input_mode, InputMode::Completed);
        assert_eq!(app.stats.words_found, 4);
        assert_eq!(app.stats.games_completed, 1);

        // Picks are ignored until a new game starts
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.selection_len(), 0);
    }

    #[test]
    fn number_keys_switch_difficulty() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.difficulty, Difficulty::Hard);
        assert_eq!(app.session.board_size(), 25);
        assert_eq!(app.stats.games_started, 2);
        assert_eq!(app.input_mode, InputMode::Playing);
    }

    #[test]
    fn quit_keys() {
        let mut app = new_app();
        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);

        let mut app = new_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = new_app();
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "message 9");
    }
}
