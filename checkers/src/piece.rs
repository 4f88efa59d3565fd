//! A single checker on the board.

use crate::types::Side;

/// Passive state holder for one piece. The owning [`Board`](crate::Board)
/// mutates these fields directly; the piece itself enforces nothing.
///
/// Construction is unchecked — placing pieces on legal squares is the board's
/// job at setup time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub side: Side,
    pub row: u8,
    pub col: u8,
    /// Monotonic: set when the piece lands on the far rank, never cleared.
    pub king: bool,
    /// Transient UI flag; at most one piece on a board has this set.
    pub selected: bool,
}

impl Piece {
    pub fn new(side: Side, row: u8, col: u8) -> Self {
        Self {
            side,
            row,
            col,
            king: false,
            selected: false,
        }
    }

    pub fn is_at(&self, row: u8, col: u8) -> bool {
        self.row == row && self.col == col
    }
}
