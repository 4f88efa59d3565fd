use crate::state::AppState;
use crate::ui::theme::Theme;
use checkers::Side;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct GameInfoPanel<'a> {
    pub app_state: &'a AppState,
    pub theme: &'a Theme,
}

impl<'a> GameInfoPanel<'a> {
    pub fn new(app_state: &'a AppState, theme: &'a Theme) -> Self {
        Self { app_state, theme }
    }
}

impl Widget for GameInfoPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let block = Block::default()
            .title("⛀ Game Info ⛀")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.panel_border));

        let inner = block.inner(area);
        block.render(area, buf);

        let board = &self.app_state.board;
        let red = board.pieces().iter().filter(|p| p.side == Side::Red).count();
        let white = board
            .pieces()
            .iter()
            .filter(|p| p.side == Side::White)
            .count();

        let label_style = Style::default()
            .fg(theme.text_accent)
            .add_modifier(Modifier::BOLD);

        let mut lines = vec![];

        let turn = board.current_player();
        lines.push(Line::from(vec![
            Span::styled("Turn: ", label_style),
            Span::styled(
                format!("{turn} to move"),
                Style::default()
                    .fg(side_color(turn, theme))
                    .add_modifier(Modifier::BOLD),
            ),
        ]));

        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled("Red:   ", label_style),
            Span::raw(format!("{red} pieces")),
        ]));
        lines.push(Line::from(vec![
            Span::styled("White: ", label_style),
            Span::raw(format!("{white} pieces")),
        ]));

        if let Some(msg) = &self.app_state.ui.status_message {
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(
                msg.clone(),
                Style::default().fg(theme.text_primary),
            )));
        }

        if let Some(winner) = self.app_state.winner() {
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(
                format!("♛ {winner} wins! ♛"),
                Style::default()
                    .fg(theme.positive)
                    .add_modifier(Modifier::BOLD),
            )));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

fn side_color(side: Side, theme: &Theme) -> ratatui::style::Color {
    match side {
        Side::Red => theme.red_piece,
        Side::White => theme.white_piece,
    }
}
