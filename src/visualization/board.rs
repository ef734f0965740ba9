use std::fmt::{self, Write};

use shakmaty::{Bitboard, File, Rank, Square};

/// Glyph for an occupied square.
pub const PIECE_GLYPH: char = 'p';

/// Glyph for an empty square.
pub const EMPTY_GLYPH: char = ' ';

/// Footer with the file labels, aligned under the cells.
pub const FILE_LABELS: &str = "  a b c d e f g h";

/// Render occupancy as a text grid.
///
/// One line per rank from 8 down to 1: the rank label, then `|` and a glyph
/// for each file, then a closing `|`. The file label footer has no trailing
/// newline, so the full grid is always 169 bytes.
pub fn render_board(w: &mut impl Write, occupied: Bitboard) -> fmt::Result {
    for rank in Rank::ALL.iter().rev() {
        w.write_char(rank.char())?;
        for file in File::ALL {
            let square = Square::from_coords(file, *rank);
            let glyph = if occupied.contains(square) {
                PIECE_GLYPH
            } else {
                EMPTY_GLYPH
            };
            write!(w, "|{glyph}")?;
        }
        writeln!(w, "|")?;
    }
    w.write_str(FILE_LABELS)
}
