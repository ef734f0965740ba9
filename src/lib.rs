pub mod color;
pub mod error;
pub mod game;
pub mod piece;
pub mod player;
pub mod position;
pub mod script;
pub mod visualization;

pub use color::Color;
pub use error::{MoveError, Unimplemented, ValidationError};
pub use game::Game;
pub use piece::{Piece, PieceKind};
pub use player::{Direction, Player};
pub use position::Position;
pub use script::MoveScript;

/// Trait for showing the board to whoever is playing.
///
/// Abstracts over output targets so the game loop does not care whether
/// the board lands on a terminal or somewhere else.
pub trait BoardDisplay {
    /// Error type for display update failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Show the current state of the game.
    fn show(&mut self, game: &Game) -> Result<(), Self::Error>;
}
