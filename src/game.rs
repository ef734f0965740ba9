use std::fmt;

use shakmaty::{Bitboard, ByColor, Rank};

use crate::color::{self, Color};
use crate::error::MoveError;
use crate::piece::Piece;
use crate::player::{Direction, Player};
use crate::position::Position;
use crate::visualization::board::render_board;

/// A two-player game: both rosters plus whose turn it is.
///
/// The side to move is a [`shakmaty::Color`], so it is always exactly one of
/// the two players. It flips after every accepted move and stays put after a
/// rejected one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    players: ByColor<Player>,
    turn: shakmaty::Color,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Starting position with the default colors, white to move.
    #[inline]
    pub fn new() -> Self {
        Self::with_colors(color::WHITE, color::BLACK)
    }

    /// Starting position with custom display colors, white to move.
    ///
    /// White's pawns start on rank 2 moving up, black's on rank 7 moving down.
    pub fn with_colors(white: Color, black: Color) -> Self {
        Self {
            players: ByColor {
                white: Player::pawn_row(white, Direction::Up, Rank::Second),
                black: Player::pawn_row(black, Direction::Down, Rank::Seventh),
            },
            turn: shakmaty::Color::White,
        }
    }

    #[inline]
    pub fn white(&self) -> &Player {
        &self.players.white
    }

    #[inline]
    pub fn black(&self) -> &Player {
        &self.players.black
    }

    #[inline]
    pub fn player(&self, side: shakmaty::Color) -> &Player {
        self.players.get(side)
    }

    /// Side whose move is awaited.
    #[inline]
    pub fn turn(&self) -> shakmaty::Color {
        self.turn
    }

    #[inline]
    pub fn active_player(&self) -> &Player {
        self.player(self.turn)
    }

    /// Every piece on the board: white's roster, then black's.
    pub fn all_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.white().pieces().iter().chain(self.black().pieces())
    }

    /// Squares occupied by either side.
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.white().occupied() | self.black().occupied()
    }

    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        self.all_pieces().find(|p| p.position() == position)
    }

    /// Text grid of the board, ranks 8 down to 1, with file labels below.
    ///
    /// Occupied squares show `p` whatever the piece; empty squares are blank.
    pub fn state(&self) -> String {
        self.to_string()
    }

    /// Submit a move for the side to move.
    ///
    /// `desired` is a [`Position`] or algebraic text such as `"e4"`. On
    /// success the turn passes to the other side. On failure the error is
    /// logged and returned as is, and the game is left exactly as it was.
    pub fn make_move<M>(&mut self, desired: M) -> Result<(), MoveError>
    where
        M: TryInto<Position>,
        MoveError: From<M::Error>,
    {
        let side = self.turn;
        let occupied = self.occupied();

        let result = desired
            .try_into()
            .map_err(MoveError::from)
            .and_then(|desired| {
                self.players
                    .get_mut(side)
                    .attempt_position(desired, occupied)
                    .map(|()| desired)
            });

        match result {
            Ok(desired) => {
                log::debug!("{side:?} moved to {desired}");
                self.turn = side.other();
                Ok(())
            }
            Err(e) => {
                log::warn!("{side:?} move rejected: {e}");
                Err(e)
            }
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_board(f, self.occupied())
    }
}
