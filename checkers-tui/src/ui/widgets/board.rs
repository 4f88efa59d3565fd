use crate::state::AppState;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};

/// Terminal cells per board square. The click surface handed to the rules
/// engine is sized in these units, so rendering and hit-testing agree.
pub const SQUARE_WIDTH: u16 = 6;
pub const SQUARE_HEIGHT: u16 = 3;

pub struct BoardWidget<'a> {
    pub app_state: &'a AppState,
    pub theme: &'a Theme,
}

impl<'a> BoardWidget<'a> {
    pub fn new(app_state: &'a AppState, theme: &'a Theme) -> Self {
        Self { app_state, theme }
    }
}

/// The drawable region inside the board block's borders. The mouse handler
/// uses the same function to translate terminal positions to surface
/// coordinates.
pub fn board_inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let block = Block::default()
            .title("⛀ Checkers ⛀")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.board_border));
        let inner = block.inner(area);
        block.render(area, buf);

        let size = self.app_state.board.config().board_size();

        // Row labels down the left edge, over the border
        for row in 0..size {
            let y = inner.y + u16::from(row) * SQUARE_HEIGHT + 1;
            if y < inner.bottom() {
                buf.set_string(
                    inner.x.saturating_sub(1),
                    y,
                    format!("{}", row + 1),
                    Style::default().fg(theme.board_label),
                );
            }
        }

        // Column labels along the bottom
        for col in 0..size {
            let x = inner.x + u16::from(col) * SQUARE_WIDTH + 2;
            let y = inner.y + u16::from(size) * SQUARE_HEIGHT;
            if x < inner.right() && y < area.bottom().saturating_sub(1) {
                buf.set_string(
                    x,
                    y,
                    format!("{}", (b'a' + col) as char),
                    Style::default().fg(theme.board_label),
                );
            }
        }

        for row in 0..size {
            for col in 0..size {
                let x = inner.x + u16::from(col) * SQUARE_WIDTH;
                let y = inner.y + u16::from(row) * SQUARE_HEIGHT;

                let piece = self.app_state.board.piece_at(row, col);
                let is_selected = piece.is_some_and(|p| p.selected);

                let bg_color = if is_selected {
                    theme.selected_square
                } else if (row + col) % 2 == 0 {
                    theme.light_square
                } else {
                    theme.dark_square
                };

                render_square(buf, x, y, bg_color, inner);

                if let Some(piece) = piece {
                    render_piece(buf, x, y, piece, theme, bg_color, inner);
                }
            }
        }
    }
}

fn render_square(buf: &mut Buffer, x: u16, y: u16, bg_color: ratatui::style::Color, bounds: Rect) {
    let style = Style::default().bg(bg_color);

    for dy in 0..SQUARE_HEIGHT {
        for dx in 0..SQUARE_WIDTH {
            let px = x + dx;
            let py = y + dy;
            if px < bounds.right() && py < bounds.bottom() {
                buf[(px, py)].set_style(style);
            }
        }
    }
}

fn render_piece(
    buf: &mut Buffer,
    x: u16,
    y: u16,
    piece: &checkers::Piece,
    theme: &Theme,
    bg_color: ratatui::style::Color,
    bounds: Rect,
) {
    let fg_color = match piece.side {
        checkers::Side::Red => theme.red_piece,
        checkers::Side::White => theme.white_piece,
    };

    let style = Style::default()
        .bg(bg_color)
        .fg(fg_color)
        .add_modifier(Modifier::BOLD);

    // Three-line disc filling the square
    let disc = ["  ▄▄  ", " ████ ", "  ▀▀  "];
    for (dy, line) in disc.iter().enumerate() {
        let py = y + dy as u16;
        if x < bounds.right() && py < bounds.bottom() {
            buf.set_string(x, py, line, style);
        }
    }

    if piece.king {
        let king_style = Style::default()
            .bg(fg_color)
            .fg(theme.king_marker)
            .add_modifier(Modifier::BOLD);
        let py = y + 1;
        if x + 2 < bounds.right() && py < bounds.bottom() {
            buf.set_string(x + 2, py, "KK", king_style);
        }
    }
}
