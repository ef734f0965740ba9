use shakmaty::{Bitboard, File, Rank, Square};

use crate::color::Color;
use crate::error::{MoveError, Unimplemented, ValidationError};
use crate::piece::{Piece, PieceKind};
use crate::position::Position;

/// Which way along the ranks counts as forward for a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards rank 8
    Up,
    /// Towards rank 1
    Down,
}

impl Direction {
    /// Number of ranks moved forward going from `from` to `to`.
    /// Negative when moving backwards.
    #[inline]
    pub const fn forward(self, from: Position, to: Position) -> i64 {
        match self {
            Direction::Up => to.rank_number() - from.rank_number(),
            Direction::Down => from.rank_number() - to.rank_number(),
        }
    }
}

/// One side of the game: a display color, a forward direction and a roster.
///
/// Players never see the rest of the board directly. Whoever asks a player to
/// move passes in the occupancy of the whole board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    color: Color,
    direction: Direction,
    pieces: Vec<Piece>,
}

impl Player {
    /// Create a player from its starting roster.
    ///
    /// Fails if two pieces start on the same square.
    pub fn new(
        color: Color,
        direction: Direction,
        pieces: Vec<Piece>,
    ) -> Result<Self, ValidationError> {
        let mut occupied = Bitboard::EMPTY;
        for piece in &pieces {
            let square = piece.position().square();
            if occupied.contains(square) {
                return Err(ValidationError::Overlap(piece.position()));
            }
            occupied.toggle(square);
        }

        Ok(Self {
            color,
            direction,
            pieces,
        })
    }

    /// A player with one unmoved pawn on every file of `rank`.
    pub fn pawn_row(color: Color, direction: Direction, rank: Rank) -> Self {
        let pieces = File::ALL
            .into_iter()
            .map(|file| Piece::pawn(Square::from_coords(file, rank).into()))
            .collect();
        Self {
            color,
            direction,
            pieces,
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Roster in setup order.
    #[inline]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Squares occupied by this player's pieces.
    pub fn occupied(&self) -> Bitboard {
        self.pieces.iter().map(|p| p.position().square()).collect()
    }

    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.position() == position)
    }

    /// Total material value of the roster.
    pub fn material(&self) -> u32 {
        self.pieces.iter().map(Piece::value).sum()
    }

    /// Try to move one of this player's pieces to `desired`.
    ///
    /// `desired` is either a [`Position`] or algebraic text such as `"e4"`.
    /// See [`Player::attempt_position`] for the rules.
    pub fn attempt_move<M>(&mut self, desired: M, occupied: Bitboard) -> Result<(), MoveError>
    where
        M: TryInto<Position>,
        MoveError: From<M::Error>,
    {
        let desired: Position = desired.try_into()?;
        self.attempt_position(desired, occupied)
    }

    /// Try to move one of this player's pieces to `desired`.
    ///
    /// `occupied` holds every occupied square on the board, both sides.
    ///
    /// The roster is scanned in order and the first pawn on the destination
    /// file decides the outcome:
    /// - A pawn that has moved may step exactly one rank forward, and only
    ///   onto an empty square of the whole board.
    /// - A pawn that has not moved may step one or two ranks forward. Only
    ///   this player's own pieces block it.
    /// - When the pawn cannot reach the destination, an [`Direction::Up`]
    ///   player keeps scanning, while a [`Direction::Down`] player rejects
    ///   the move at once.
    ///
    /// Any piece kind without rules met during the scan rejects the whole
    /// move. On error nothing changes; on success exactly one piece has been
    /// relocated.
    pub fn attempt_position(
        &mut self,
        desired: Position,
        occupied: Bitboard,
    ) -> Result<(), MoveError> {
        let direction = self.direction;
        let own = self.occupied();
        let board = occupied | own;

        for piece in &mut self.pieces {
            match piece.kind() {
                PieceKind::Pawn => {}
                kind @ (PieceKind::Knight
                | PieceKind::Bishop
                | PieceKind::Rook
                | PieceKind::Queen
                | PieceKind::King) => return Err(Unimplemented(kind).into()),
            }

            // Pawns only ever move along their own file.
            if piece.position().file() != desired.file() {
                continue;
            }

            let forward = direction.forward(piece.position(), desired);
            let (reachable, blockers) = if piece.has_moved() {
                (forward == 1, board)
            } else {
                ((1..=2).contains(&forward), own)
            };

            if !reachable {
                log::trace!("{piece} cannot reach {desired}");
                match direction {
                    Direction::Up => continue,
                    Direction::Down => return Err(MoveError::Invalid),
                }
            }

            if blockers.contains(desired.square()) {
                return Err(MoveError::VerticalCapture);
            }

            log::trace!("{piece} moves to {desired}");
            piece.relocate(desired);
            return Ok(());
        }

        Err(MoveError::Unhandled)
    }
}
