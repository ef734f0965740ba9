use std::convert::Infallible;

use thiserror::Error;

use crate::piece::PieceKind;
use crate::position::Position;

/// Raised when a coordinate, color or roster is built from invalid input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// File letter outside `a`-`h`
    #[error("invalid file '{0}', expected one of a-h")]
    File(char),

    /// Rank outside 1-8
    #[error("invalid rank {0}, expected 1-8")]
    Rank(i64),

    /// Color channel outside 0-255
    #[error("invalid {channel} channel {value}, expected 0-255")]
    Channel { channel: &'static str, value: i64 },

    /// Move text that is not a file letter followed by a rank number
    #[error("invalid square notation: '{0}'")]
    Notation(String),

    /// Two pieces of one roster placed on the same square
    #[error("more than one piece on {0}")]
    Overlap(Position),
}

/// A piece kind whose movement rules do not exist yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0} pieces are not implemented yet")]
pub struct Unimplemented(pub PieceKind);

/// Why a move was rejected.
///
/// A rejected move never changes game state, so every variant is recoverable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The move text did not describe a square on the board
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A pawn tried to move straight onto an occupied square
    #[error("invalid move (pawn cannot capture vertically)")]
    VerticalCapture,

    /// The candidate pawn cannot reach the destination
    #[error("invalid move")]
    Invalid,

    /// No piece could make the move
    #[error("invalid or unhandled move")]
    Unhandled,

    /// The scan reached a piece kind without movement rules
    #[error(transparent)]
    NotImplemented(#[from] Unimplemented),
}

impl From<Infallible> for MoveError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
