use std::fmt;

use crate::error::Unimplemented;
use crate::position::Position;

/// Kind of a piece.
///
/// Only pawns have movement rules so far. The other kinds exist so that
/// rosters and the legality scan can name them, and every attempt to build or
/// move one fails with [`Unimplemented`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Material worth of this kind. The king is never traded, so it has none.
    pub const fn value(self) -> u32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight | PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }

    /// Returns true if movement rules exist for this kind.
    pub const fn is_implemented(self) -> bool {
        matches!(self, PieceKind::Pawn)
    }

    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single piece on the board.
///
/// `has_moved` starts out false and flips to true on the first successful
/// move. It never flips back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    position: Position,
    kind: PieceKind,
    has_moved: bool,
}

impl Piece {
    /// Create a piece at its spawn position.
    pub fn new(kind: PieceKind, spawn: Position) -> Result<Self, Unimplemented> {
        if !kind.is_implemented() {
            return Err(Unimplemented(kind));
        }
        Ok(Self {
            position: spawn,
            kind,
            has_moved: false,
        })
    }

    #[inline]
    pub fn pawn(spawn: Position) -> Self {
        Self {
            position: spawn,
            kind: PieceKind::Pawn,
            has_moved: false,
        }
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn value(&self) -> u32 {
        self.kind.value()
    }

    #[inline]
    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// Replace the position and mark the piece as moved, together.
    pub(crate) fn relocate(&mut self, to: Position) {
        self.position = to;
        self.has_moved = true;
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.position)
    }
}
