use checkers::{Board, BoardConfig, ClickOutcome, Side};

/// Main application state: the board plus UI-only bits.
pub struct AppState {
    pub board: Board,
    pub ui: UiState,
}

/// UI-specific state (not part of game state).
#[derive(Default)]
pub struct UiState {
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            board: Board::new(config),
            ui: UiState::default(),
        }
    }

    /// Forward a click at board-surface coordinates and translate the outcome
    /// into a status line.
    pub fn click(&mut self, x: u16, y: u16) -> ClickOutcome {
        let player = self.board.current_player();
        let outcome = self.board.handle_click(x, y);

        match outcome {
            ClickOutcome::Selected { row, col } => {
                tracing::debug!(%player, row, col, "piece selected");
                self.ui.status_message =
                    Some(format!("{player} selected {}", format_cell(row, col)));
            }
            ClickOutcome::Moved {
                from,
                to,
                capture,
                promoted,
            } => {
                tracing::info!(%player, ?from, ?to, capture, promoted, "move played");
                let mut msg = format!(
                    "{player}: {} to {}",
                    format_cell(from.0, from.1),
                    format_cell(to.0, to.1)
                );
                if capture {
                    msg.push_str(", capture");
                }
                if promoted {
                    msg.push_str(", crowned");
                }
                self.ui.status_message = Some(msg);
            }
            ClickOutcome::Ignored => {
                tracing::debug!(%player, x, y, "click ignored");
            }
        }

        outcome
    }

    pub fn winner(&self) -> Option<Side> {
        self.board.winner()
    }
}

/// Display a cell as file letter + row number, rows counted from the top.
pub fn format_cell(row: u8, col: u8) -> String {
    format!("{}{}", (b'a' + col) as char, row + 1)
}
