use std::io::{self, Write};

use crate::BoardDisplay;
use crate::game::Game;

/// Terminal-based board display.
///
/// Prints the grid from [`Game::state`] followed by the side to move.
#[derive(Debug, Default)]
pub struct TerminalDisplay;

impl TerminalDisplay {
    /// Create a new terminal display.
    pub fn new() -> Self {
        Self
    }
}

/// Error type for terminal display operations.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("failed to write to terminal: {0}")]
    Io(#[from] io::Error),
}

impl BoardDisplay for TerminalDisplay {
    type Error = DisplayError;

    fn show(&mut self, game: &Game) -> Result<(), Self::Error> {
        render_game(&mut io::stdout(), game)
    }
}

/// Render the game to any writer. Extracted for testability.
fn render_game(w: &mut impl Write, game: &Game) -> Result<(), DisplayError> {
    writeln!(w, "{}", game.state())?;
    writeln!(
        w,
        "{:?} to move (#{})",
        game.turn(),
        game.active_player().color().rgb_hex()
    )?;
    w.flush()?;
    Ok(())
}
