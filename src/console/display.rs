use std::io::{self, Write};

use crate::BoardDisplay;
use crate::game_logic::GameEngine;
use crate::game_state::{BOARD_SIZE, Board, Square};

/// Placeholder printed for an empty square.
pub const EMPTY_SYMBOL: char = '.';

/// Plain-text board display.
///
/// Renders the board as an 8×8 grid of piece symbols, rank 8 at the top,
/// followed by the side to move.
#[derive(Debug)]
pub struct TerminalDisplay<W = io::Stdout> {
    out: W,
}

impl TerminalDisplay {
    /// Create a display writing to standard output.
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalDisplay<W> {
    /// Create a display writing to any writer.
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    /// The underlying writer, for messages around the board.
    #[inline]
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Error type for terminal display operations.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("failed to write to terminal: {0}")]
    Io(#[from] io::Error),
}

impl<W: Write> BoardDisplay for TerminalDisplay<W> {
    type Error = DisplayError;

    fn show(&mut self, engine: &GameEngine) -> Result<(), Self::Error> {
        render_board(&mut self.out, engine.board())?;
        writeln!(self.out, "{} to move", engine.turn())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Render the board to any writer. Extracted for testability.
pub fn render_board(w: &mut impl Write, board: &Board) -> Result<(), DisplayError> {
    for rank in (0..BOARD_SIZE).rev() {
        write!(w, "{} ", rank + 1)?;
        for square in Square::all().filter(|square| square.rank() == rank) {
            write!(w, " {}", square_symbol(board, square))?;
        }
        writeln!(w)?;
    }
    writeln!(w, "   a b c d e f g h")?;
    Ok(())
}

/// Symbol of the piece on `square`, or [`EMPTY_SYMBOL`].
#[inline]
pub fn square_symbol(board: &Board, square: Square) -> char {
    board.piece_at(square).map_or(EMPTY_SYMBOL, |piece| piece.symbol())
}
