//! Simple interactive CLI mode
//!
//! Line-based play without the TUI

use crate::core::Difficulty;
use crate::engine::{PuzzleSession, SelectOutcome};
use crate::output::display::print_board;
use crate::wordlists::WordCatalog;
use rand::Rng;
use std::io::{self, Write};

/// A parsed line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Select { row: usize, col: usize },
    Delete,
    Clear,
    Show,
    New(Option<Difficulty>),
    Quit,
}

impl Command {
    /// Parse a line such as `3 7`, `del`, `new hard` or `quit`
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let mut parts = input.split_whitespace();
        let first = parts.next()?.to_ascii_lowercase();

        let command = match first.as_str() {
            "del" | "delete" | "d" | "backspace" => Self::Delete,
            "clear" | "c" => Self::Clear,
            "show" | "board" | "s" => Self::Show,
            "quit" | "q" | "exit" => Self::Quit,
            "new" | "n" => match parts.next() {
                Some(name) => Self::New(Some(Difficulty::from_name(name)?)),
                None => Self::New(None),
            },
            _ => {
                let row = first.parse().ok()?;
                let col = parts.next()?.parse().ok()?;
                Self::Select { row, col }
            }
        };

        // Trailing junk makes the whole line invalid
        parts.next().is_none().then_some(command)
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or a new
/// puzzle cannot be generated.
pub fn run_simple<R: Rng>(
    catalog: &WordCatalog,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Word Search - Simple Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Find every hidden word by picking its letters in order.");
    println!("All picks must share a row or column with the first pick.\n");
    println!("  - Enter '<row> <col>' to pick a cell (0-based)");
    println!("  - 'del' removes the last letter, 'clear' empties the selection");
    println!("  - 'show' reprints the board, 'new [easy|medium|hard]' starts over");
    println!("  - 'quit' to exit\n");

    let mut session =
        PuzzleSession::new(catalog.clone(), difficulty, rng).map_err(|e| e.to_string())?;
    print_session(&session);

    loop {
        let input = get_user_input(&format!("Selection [{}]", session.current_selection_text()))?;

        let Some(command) = Command::parse(&input) else {
            println!("❌ Unknown command! Try '3 7', 'del', 'clear', 'new' or 'quit'\n");
            continue;
        };

        match command {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::Show => print_session(&session),
            Command::Delete => session.delete_last(),
            Command::Clear => session.clear_selection(),
            Command::New(choice) => {
                let result = match choice {
                    Some(difficulty) => session.initialize(difficulty, rng),
                    None => session.restart(rng),
                };
                result.map_err(|e| e.to_string())?;
                println!("\n🔄 New puzzle started!\n");
                print_session(&session);
            }
            Command::Select { row, col } => match session.select_cell(row, col) {
                Err(e) => println!("❌ {e}\n"),
                Ok(SelectOutcome::Appended) => {}
                Ok(SelectOutcome::Reset) => {
                    println!("↺ That cell is off the line of your first pick, selection cleared\n");
                }
                Ok(SelectOutcome::Found(word)) => {
                    println!("✓ Found {word}! {} to go\n", session.remaining_count());
                    if session.is_complete() {
                        println!("🎉 All words found!\n");
                        if !play_again()? {
                            println!("👋 Thanks for playing!\n");
                            return Ok(());
                        }
                        session.restart(rng).map_err(|e| e.to_string())?;
                        print_session(&session);
                    }
                }
            },
        }
    }
}

fn print_session(session: &PuzzleSession) {
    print_board(session.grid(), session.selection());
    println!(
        "\nWords to find ({}): {}\n",
        session.remaining_count(),
        session.remaining_words().join(", ")
    );
}

fn play_again() -> Result<bool, String> {
    let answer = get_user_input("Play again? (yes/no)")?.to_lowercase();
    Ok(matches!(answer.as_str(), "yes" | "y"))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    // End of input behaves like 'quit'
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
