//! Board state and the rules engine.
//!
//! The board owns every piece, the side to move, and the current selection.
//! Click handling, move validation, capture, promotion, and win detection all
//! live here; rendering layers only read the state back out.

use crate::config::BoardConfig;
use crate::piece::Piece;
use crate::types::Side;

/// What a click did to the board. Illegal moves are reported as
/// [`ClickOutcome::Ignored`] rather than an error: the click simply has no
/// effect and the prior selection stays in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece of the side to move was (re)selected.
    Selected { row: u8, col: u8 },
    /// The selected piece moved; the turn has passed to the opponent.
    Moved {
        from: (u8, u8),
        to: (u8, u8),
        capture: bool,
        promoted: bool,
    },
    /// Nothing happened.
    Ignored,
}

/// Main game state. Lives for the duration of one game; there is no reset.
#[derive(Debug, Clone)]
pub struct Board {
    config: BoardConfig,
    pieces: Vec<Piece>,
    current_player: Side,
    /// Index into `pieces`, not a reference: captures remove elements, and an
    /// index is re-adjusted explicitly where a reference would dangle.
    selected: Option<usize>,
}

impl Board {
    /// Set up the initial position: dark squares only, Red on the first three
    /// rows, White on the last three, Red to move.
    pub fn new(config: BoardConfig) -> Self {
        let size = config.board_size();
        let mut pieces = Vec::with_capacity(usize::from(size) * 3);
        for row in 0..size {
            for col in 0..size {
                if (row + col) % 2 != 1 {
                    continue;
                }
                if row < 3 {
                    pieces.push(Piece::new(Side::Red, row, col));
                } else if row >= size - 3 {
                    pieces.push(Piece::new(Side::White, row, col));
                }
            }
        }
        Self {
            config,
            pieces,
            current_player: Side::Red,
            selected: None,
        }
    }

    /// Build a board from an arbitrary piece set, for mid-game positions.
    ///
    /// This is the one entry point that accepts external piece data, so it is
    /// the one place placement is validated: every piece must sit in bounds on
    /// a dark square, and no two pieces may share a square.
    pub fn with_pieces(
        config: BoardConfig,
        pieces: Vec<Piece>,
        side_to_move: Side,
    ) -> Result<Self, SetupError> {
        let size = config.board_size();
        for (i, piece) in pieces.iter().enumerate() {
            if piece.row >= size || piece.col >= size {
                return Err(SetupError::OutOfBounds {
                    row: piece.row,
                    col: piece.col,
                });
            }
            if (piece.row + piece.col) % 2 != 1 {
                return Err(SetupError::LightSquare {
                    row: piece.row,
                    col: piece.col,
                });
            }
            if pieces[..i].iter().any(|p| p.is_at(piece.row, piece.col)) {
                return Err(SetupError::Occupied {
                    row: piece.row,
                    col: piece.col,
                });
            }
        }
        let mut pieces = pieces;
        for piece in &mut pieces {
            piece.selected = false;
        }
        Ok(Self {
            config,
            pieces,
            current_player: side_to_move,
            selected: None,
        })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// All pieces, for the rendering layer to draw each frame.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn current_player(&self) -> Side {
        self.current_player
    }

    /// The currently selected piece, if any.
    pub fn selected(&self) -> Option<&Piece> {
        self.selected.map(|idx| &self.pieces[idx])
    }

    pub fn piece_at(&self, row: u8, col: u8) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.is_at(row, col))
    }

    fn index_at(&self, row: u8, col: u8) -> Option<usize> {
        self.pieces.iter().position(|p| p.is_at(row, col))
    }

    fn is_target_empty(&self, row: u8, col: u8) -> bool {
        self.index_at(row, col).is_none()
    }

    /// Handle a press at surface coordinates.
    ///
    /// Clicking a piece of the side to move (re)selects it. Otherwise, if a
    /// piece is already selected, the click is a move attempt at the clicked
    /// cell. Anything else is ignored.
    pub fn handle_click(&mut self, x: u16, y: u16) -> ClickOutcome {
        let (row, col) = self.config.cell_at(x, y);

        if let Some(idx) = self.index_at(row, col) {
            if self.pieces[idx].side == self.current_player {
                if let Some(prev) = self.selected {
                    self.pieces[prev].selected = false;
                }
                self.pieces[idx].selected = true;
                self.selected = Some(idx);
                return ClickOutcome::Selected { row, col };
            }
        }

        if self.selected.is_some() {
            return self.move_selected_to(row, col);
        }

        ClickOutcome::Ignored
    }

    /// Attempt to move the selected piece to the target cell.
    ///
    /// An invalid target changes nothing: the selection stays and the turn
    /// does not pass. A valid move removes the jumped piece (if any), updates
    /// the mover, promotes on the far rank, clears the selection, and flips
    /// the side to move.
    pub fn move_selected_to(&mut self, row: u8, col: u8) -> ClickOutcome {
        let Some(mut idx) = self.selected else {
            return ClickOutcome::Ignored;
        };
        let piece = self.pieces[idx];
        if !self.is_valid_move(&piece, row, col) {
            return ClickOutcome::Ignored;
        }

        let from = (piece.row, piece.col);
        let jump = piece.row.abs_diff(row) == 2;

        // Clear the selection before any removal so it can never dangle.
        self.pieces[idx].selected = false;
        self.selected = None;

        let mut capture = false;
        if jump {
            let mid_row = (piece.row + row) / 2;
            let mid_col = (piece.col + col) / 2;
            if let Some(jumped) = self.index_at(mid_row, mid_col) {
                self.pieces.remove(jumped);
                if jumped < idx {
                    idx -= 1;
                }
                capture = true;
            }
        }

        let size = self.config.board_size();
        let mover = &mut self.pieces[idx];
        mover.row = row;
        mover.col = col;
        let promoted = (row == 0 || row == size - 1) && !mover.king;
        if row == 0 || row == size - 1 {
            mover.king = true;
        }

        self.current_player = self.current_player.opponent();

        ClickOutcome::Moved {
            from,
            to: (row, col),
            capture,
            promoted,
        }
    }

    /// Whether `piece` may move to the target cell. Pure: no side effects.
    ///
    /// Legal moves are a one-square diagonal step onto an empty square, or a
    /// two-square diagonal jump over an opponent piece onto an empty square.
    /// Non-kings may only move toward the opponent's back rank.
    pub fn is_valid_move(&self, piece: &Piece, row: u8, col: u8) -> bool {
        let size = self.config.board_size();
        if row >= size || col >= size {
            return false;
        }

        let d_row = i16::from(row) - i16::from(piece.row);
        let d_col = i16::from(col) - i16::from(piece.col);
        let forward = piece.king || d_row * piece.side.forward() > 0;

        if d_row.abs() == 1 && d_col.abs() == 1 {
            return forward && self.is_target_empty(row, col);
        }

        if d_row.abs() == 2 && d_col.abs() == 2 {
            let mid_row = (piece.row + row) / 2;
            let mid_col = (piece.col + col) / 2;
            return match self.piece_at(mid_row, mid_col) {
                Some(jumped) => {
                    jumped.side != piece.side && forward && self.is_target_empty(row, col)
                }
                None => false,
            };
        }

        false
    }

    /// A side wins when the opponent has no pieces left. Polled by the game
    /// loop once per tick.
    pub fn winner(&self) -> Option<Side> {
        let red = self.pieces.iter().filter(|p| p.side == Side::Red).count();
        let white = self.pieces.iter().filter(|p| p.side == Side::White).count();

        if red == 0 {
            Some(Side::White)
        } else if white == 0 {
            Some(Side::Red)
        } else {
            None
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("piece at ({row}, {col}) is outside the board")]
    OutOfBounds { row: u8, col: u8 },
    #[error("piece at ({row}, {col}) is on a light square")]
    LightSquare { row: u8, col: u8 },
    #[error("two pieces share square ({row}, {col})")]
    Occupied { row: u8, col: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_board() -> Board {
        Board::new(BoardConfig::standard())
    }

    /// Config mapping one surface unit to one board cell, so tests can click
    /// cells directly.
    fn unit_config() -> BoardConfig {
        BoardConfig::new(8, 8, 8).unwrap()
    }

    fn board_with(pieces: Vec<Piece>, side_to_move: Side) -> Board {
        Board::with_pieces(unit_config(), pieces, side_to_move).unwrap()
    }

    #[test]
    fn test_setup_counts_and_placement() {
        let board = standard_board();
        let red = board.pieces().iter().filter(|p| p.side == Side::Red).count();
        let white = board
            .pieces()
            .iter()
            .filter(|p| p.side == Side::White)
            .count();
        assert_eq!(red, 12);
        assert_eq!(white, 12);

        for piece in board.pieces() {
            assert_eq!((piece.row + piece.col) % 2, 1, "piece on a light square");
            assert!(piece.row < 3 || piece.row >= 5, "piece in the empty middle");
            assert!(!piece.king);
            assert!(!piece.selected);
        }

        assert_eq!(board.current_player(), Side::Red);
        assert!(board.selected().is_none());
    }

    #[test]
    fn test_setup_leaves_the_side_to_move_a_legal_move() {
        // The smallest accepted board still has an empty band between the
        // camps, so the opening position can never be deadlocked.
        let board = Board::new(BoardConfig::new(8, 8, 8).unwrap());
        let size = board.config().board_size();
        let has_move = board.pieces().iter().any(|piece| {
            piece.side == board.current_player()
                && (0..size).any(|row| {
                    (0..size).any(|col| board.is_valid_move(piece, row, col))
                })
        });
        assert!(has_move, "fresh board has no legal move for the side to move");
    }

    #[test]
    fn test_click_selects_own_piece_only() {
        let mut board = standard_board();
        // (2, 1) holds a red piece at pixel (75..150, 150..225)
        assert_eq!(
            board.handle_click(80, 160),
            ClickOutcome::Selected { row: 2, col: 1 }
        );
        assert_eq!(board.selected().unwrap().row, 2);
        assert_eq!(board.selected().unwrap().col, 1);

        // Clicking a white piece with nothing useful selected: still red's
        // turn, and (5, 0) is not a legal target, so nothing changes.
        let before = board.pieces().to_vec();
        assert_eq!(board.handle_click(10, 5 * 75 + 10), ClickOutcome::Ignored);
        assert_eq!(board.pieces(), &before[..]);
        assert_eq!(board.current_player(), Side::Red);
    }

    #[test]
    fn test_click_empty_square_without_selection_is_noop() {
        let mut board = standard_board();
        assert_eq!(board.handle_click(300, 300), ClickOutcome::Ignored);
        assert!(board.selected().is_none());
        assert_eq!(board.current_player(), Side::Red);
    }

    #[test]
    fn test_reselect_moves_highlight() {
        let mut board = standard_board();
        board.handle_click(80, 160); // (2, 1)
        board.handle_click(230, 160); // (2, 3)
        let selected: Vec<_> = board.pieces().iter().filter(|p| p.selected).collect();
        assert_eq!(selected.len(), 1);
        assert!(selected[0].is_at(2, 3));
        assert_eq!(board.current_player(), Side::Red);
    }

    #[test]
    fn test_forward_step_legal_backward_illegal() {
        let mut board = board_with(vec![Piece::new(Side::Red, 2, 3)], Side::Red);
        board.handle_click(3, 2); // select (2, 3)

        // Backward for red
        assert_eq!(board.move_selected_to(1, 4), ClickOutcome::Ignored);
        assert_eq!(board.current_player(), Side::Red);
        assert!(board.selected().is_some(), "selection survives a rejection");

        // Forward diagonal onto an empty square
        assert_eq!(
            board.move_selected_to(3, 4),
            ClickOutcome::Moved {
                from: (2, 3),
                to: (3, 4),
                capture: false,
                promoted: false,
            }
        );
        assert!(board.piece_at(3, 4).is_some());
        assert!(board.selected().is_none());
        assert_eq!(board.current_player(), Side::White);
    }

    #[test]
    fn test_step_onto_occupied_square_rejected() {
        let mut board = board_with(
            vec![Piece::new(Side::Red, 2, 3), Piece::new(Side::White, 3, 4)],
            Side::Red,
        );
        board.handle_click(3, 2);
        assert_eq!(board.move_selected_to(3, 4), ClickOutcome::Ignored);
        assert_eq!(board.current_player(), Side::Red);
    }

    #[test]
    fn test_jump_captures_the_jumped_piece() {
        let mut board = board_with(
            vec![Piece::new(Side::Red, 2, 3), Piece::new(Side::White, 3, 4)],
            Side::Red,
        );
        board.handle_click(3, 2);
        assert_eq!(
            board.move_selected_to(4, 5),
            ClickOutcome::Moved {
                from: (2, 3),
                to: (4, 5),
                capture: true,
                promoted: false,
            }
        );
        assert_eq!(board.pieces().len(), 1);
        assert!(board.piece_at(4, 5).is_some());
        assert!(board.piece_at(3, 4).is_none());
        assert_eq!(board.current_player(), Side::White);
    }

    #[test]
    fn test_jump_needs_piece_on_midpoint() {
        let mut board = board_with(vec![Piece::new(Side::Red, 2, 3)], Side::Red);
        board.handle_click(3, 2);
        let before = board.pieces().to_vec();
        assert_eq!(board.move_selected_to(4, 5), ClickOutcome::Ignored);
        assert_eq!(board.pieces(), &before[..]);
        assert!(board.selected().is_some());
        assert_eq!(board.current_player(), Side::Red);
    }

    #[test]
    fn test_jump_over_own_piece_rejected() {
        let mut board = board_with(
            vec![Piece::new(Side::Red, 2, 3), Piece::new(Side::Red, 3, 4)],
            Side::Red,
        );
        board.handle_click(3, 2);
        assert_eq!(board.move_selected_to(4, 5), ClickOutcome::Ignored);
        assert_eq!(board.pieces().len(), 2);
    }

    #[test]
    fn test_jump_onto_occupied_target_rejected() {
        let mut board = board_with(
            vec![
                Piece::new(Side::Red, 2, 3),
                Piece::new(Side::White, 3, 4),
                Piece::new(Side::White, 4, 5),
            ],
            Side::Red,
        );
        board.handle_click(3, 2);
        assert_eq!(board.move_selected_to(4, 5), ClickOutcome::Ignored);
        assert_eq!(board.pieces().len(), 3);
    }

    #[test]
    fn test_king_steps_any_direction() {
        let mut king = Piece::new(Side::Red, 4, 3);
        king.king = true;
        let mut board = board_with(vec![king], Side::Red);
        board.handle_click(3, 4);
        assert!(matches!(
            board.move_selected_to(3, 2),
            ClickOutcome::Moved { .. }
        ));
        assert!(board.piece_at(3, 2).unwrap().king);
    }

    #[test]
    fn test_king_jumps_backward_over_opponent() {
        let mut king = Piece::new(Side::Red, 4, 3);
        king.king = true;
        let mut board = board_with(vec![king, Piece::new(Side::White, 3, 2)], Side::Red);
        board.handle_click(3, 4);
        assert!(matches!(
            board.move_selected_to(2, 1),
            ClickOutcome::Moved { capture: true, .. }
        ));
        assert_eq!(board.pieces().len(), 1);
        assert!(board.piece_at(2, 1).is_some());
    }

    #[test]
    fn test_king_cannot_jump_own_piece() {
        let mut king = Piece::new(Side::Red, 4, 3);
        king.king = true;
        let mut board = board_with(vec![king, Piece::new(Side::Red, 3, 2)], Side::Red);
        board.handle_click(3, 4);
        assert_eq!(board.move_selected_to(2, 1), ClickOutcome::Ignored);
        assert_eq!(board.pieces().len(), 2);
    }

    #[test]
    fn test_promotion_on_far_rank_is_monotonic() {
        let mut board = board_with(vec![Piece::new(Side::Red, 6, 1)], Side::Red);
        board.handle_click(1, 6);
        assert_eq!(
            board.move_selected_to(7, 2),
            ClickOutcome::Moved {
                from: (6, 1),
                to: (7, 2),
                capture: false,
                promoted: true,
            }
        );
        assert!(board.piece_at(7, 2).unwrap().king);

        // A later move by the same piece keeps the flag and does not report
        // a second promotion.
        let mut board = board_with(vec![board.piece_at(7, 2).copied().unwrap()], Side::Red);
        board.handle_click(2, 7);
        assert!(matches!(
            board.move_selected_to(6, 3),
            ClickOutcome::Moved {
                promoted: false,
                ..
            }
        ));
        assert!(board.piece_at(6, 3).unwrap().king);
    }

    #[test]
    fn test_knight_shaped_and_straight_deltas_illegal() {
        let mut board = board_with(vec![Piece::new(Side::Red, 2, 3)], Side::Red);
        board.handle_click(3, 2);
        for (row, col) in [(4u8, 4u8), (2, 5), (4, 3), (3, 3), (5, 6)] {
            assert_eq!(
                board.move_selected_to(row, col),
                ClickOutcome::Ignored,
                "delta to ({row}, {col}) should be illegal"
            );
        }
    }

    #[test]
    fn test_move_off_board_rejected() {
        let mut board = board_with(vec![Piece::new(Side::Red, 7, 0)], Side::Red);
        board.handle_click(0, 7);
        assert_eq!(board.move_selected_to(8, 1), ClickOutcome::Ignored);
    }

    #[test]
    fn test_winner_detection() {
        let board = board_with(vec![Piece::new(Side::Red, 2, 3)], Side::Red);
        assert_eq!(board.winner(), Some(Side::Red));

        let board = board_with(vec![Piece::new(Side::White, 5, 2)], Side::Red);
        assert_eq!(board.winner(), Some(Side::White));

        assert_eq!(standard_board().winner(), None);
    }

    #[test]
    fn test_capture_before_selected_index_keeps_mover_straight() {
        // The white piece sits before the red mover in the vector, so the
        // removal shifts the mover's index down by one.
        let mut board = board_with(
            vec![Piece::new(Side::White, 3, 4), Piece::new(Side::Red, 2, 3)],
            Side::Red,
        );
        board.handle_click(3, 2);
        assert!(matches!(
            board.move_selected_to(4, 5),
            ClickOutcome::Moved { capture: true, .. }
        ));
        let survivor = board.pieces()[0];
        assert_eq!(survivor.side, Side::Red);
        assert!(survivor.is_at(4, 5));
        assert!(!survivor.selected);
    }

    #[test]
    fn test_with_pieces_validates_placement() {
        let config = unit_config();
        assert!(matches!(
            Board::with_pieces(config, vec![Piece::new(Side::Red, 2, 2)], Side::Red),
            Err(SetupError::LightSquare { row: 2, col: 2 })
        ));
        assert!(matches!(
            Board::with_pieces(config, vec![Piece::new(Side::Red, 8, 1)], Side::Red),
            Err(SetupError::OutOfBounds { row: 8, col: 1 })
        ));
        assert!(matches!(
            Board::with_pieces(
                config,
                vec![Piece::new(Side::Red, 2, 3), Piece::new(Side::White, 2, 3)],
                Side::Red,
            ),
            Err(SetupError::Occupied { row: 2, col: 3 })
        ));
    }
}
