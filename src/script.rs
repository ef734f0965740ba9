use std::collections::VecDeque;

use crate::error::{MoveError, ValidationError};
use crate::game::Game;
use crate::position::Position;

/// A queue of moves written as text, played against a [`Game`] in order.
///
/// New script can be appended at any time for interactive use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveScript {
    pending: VecDeque<Position>,
}

impl MoveScript {
    /// Create an empty script.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a script into a new queue.
    pub fn parse(script: &str) -> Result<Self, ValidationError> {
        let mut moves = Self::new();
        moves.push_script(script)?;
        Ok(moves)
    }

    /// Parse and queue additional moves.
    ///
    /// Format:
    /// - Moves are algebraic squares (e.g., "e4", "h6")
    /// - Whitespace and periods both separate moves
    ///
    /// Examples:
    /// - `"e4 e5 b4 h6"`
    /// - `"e4 e5. b4 h6."` - same moves, one pair per period
    ///
    /// On error nothing is queued.
    pub fn push_script(&mut self, script: &str) -> Result<(), ValidationError> {
        let moves = parse_script(script)?;
        self.pending.extend(moves);
        Ok(())
    }

    /// Pop the next queued move.
    #[inline]
    pub fn next_move(&mut self) -> Option<Position> {
        self.pending.pop_front()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Play queued moves until the queue is empty or a move is rejected.
    ///
    /// Returns how many moves were played. A rejected move is consumed, and
    /// the moves after it stay queued.
    pub fn play(&mut self, game: &mut Game) -> Result<usize, MoveError> {
        let mut played = 0;
        while let Some(desired) = self.next_move() {
            game.make_move(desired)?;
            played += 1;
        }
        Ok(played)
    }
}

/// Split a script into positions.
fn parse_script(script: &str) -> Result<Vec<Position>, ValidationError> {
    script
        .split(|c: char| c == '.' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse::<Position>)
        .collect()
}
