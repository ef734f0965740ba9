use std::fmt;
use std::str::FromStr;

use shakmaty::{File, Rank, Square};

use crate::error::ValidationError;

/// A square on the board, addressed by file letter and rank number.
///
/// Positions are plain values: a piece moves by having its position replaced,
/// never by editing one in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    file: File,
    rank: Rank,
}

impl Position {
    /// Build a position from a file letter (`a`-`h`) and a rank (1-8).
    pub fn new(file: char, rank: i64) -> Result<Self, ValidationError> {
        let file = File::from_char(file).ok_or(ValidationError::File(file))?;
        if !(1..=8).contains(&rank) {
            return Err(ValidationError::Rank(rank));
        }
        Ok(Self {
            file,
            rank: Rank::ALL[(rank - 1) as usize],
        })
    }

    #[inline]
    pub fn from_square(square: Square) -> Self {
        Self {
            file: square.file(),
            rank: square.rank(),
        }
    }

    #[inline]
    pub const fn file(self) -> File {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// Rank as printed on the board, 1-8.
    #[inline]
    pub const fn rank_number(self) -> i64 {
        self.rank as i64 + 1
    }

    #[inline]
    pub fn square(self) -> Square {
        Square::from_coords(self.file, self.rank)
    }
}

impl From<Square> for Position {
    fn from(square: Square) -> Self {
        Self::from_square(square)
    }
}

impl From<Position> for Square {
    fn from(position: Position) -> Self {
        position.square()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file.char(), self.rank.char())
    }
}

/// Parse algebraic notation like "e4".
///
/// The first character is the file and the remainder must be a whole number,
/// so "e10" is rejected as an out-of-range rank rather than read as "e1".
impl FromStr for Position {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let notation = || ValidationError::Notation(s.to_owned());

        let mut chars = s.chars();
        let file = chars.next().ok_or_else(notation)?;
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(notation());
        }
        let rank = digits.parse::<i64>().map_err(|_| notation())?;

        Self::new(file, rank)
    }
}

impl TryFrom<&str> for Position {
    type Error = ValidationError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_round_trip_all_squares() {
        for rank in 1..=8 {
            for file in 'a'..='h' {
                let notation = format!("{file}{rank}");
                let pos: Position = notation.parse().expect("square should be valid");

                assert_eq!(pos.to_string(), notation);
                assert_eq!(pos.rank_number(), rank);
            }
        }
    }

    #[test]
    fn test_new_matches_parse() {
        let pos = Position::new('e', 4).unwrap();
        assert_eq!(pos, "e4".parse::<Position>().unwrap());
        assert_eq!(pos.file(), File::E);
        assert_eq!(pos.rank(), Rank::Fourth);
        assert_eq!(pos.square(), Square::E4);
    }

    #[test]
    fn test_square_conversion() {
        let pos = Position::from(Square::H8);
        assert_eq!(pos.to_string(), "h8");
        assert_eq!(Square::from(pos), Square::H8);
    }

    #[test_case('i'; "i")]
    #[test_case('j'; "j")]
    #[test_case('k'; "k")]
    #[test_case('A'; "uppercase")]
    fn test_invalid_file(file: char) {
        assert_eq!(Position::new(file, 1), Err(ValidationError::File(file)));
    }

    #[test_case(0; "zero")]
    #[test_case(9; "nine")]
    #[test_case(10; "ten")]
    #[test_case(-1; "negative")]
    fn test_invalid_rank(rank: i64) {
        assert_eq!(Position::new('a', rank), Err(ValidationError::Rank(rank)));
    }

    #[test_case("e10", ValidationError::Rank(10); "multi digit rank")]
    #[test_case("e0", ValidationError::Rank(0); "rank zero")]
    #[test_case("z4", ValidationError::File('z'); "bad file")]
    #[test_case("", ValidationError::Notation(String::new()); "empty")]
    #[test_case("e", ValidationError::Notation("e".into()); "missing rank")]
    #[test_case("ex", ValidationError::Notation("ex".into()); "letter rank")]
    #[test_case("e-1", ValidationError::Notation("e-1".into()); "signed rank")]
    fn test_parse_error(notation: &str, expected: ValidationError) {
        assert_eq!(notation.parse::<Position>(), Err(expected));
    }
}
