use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct ControlsPanel<'a> {
    pub theme: &'a Theme,
}

impl<'a> ControlsPanel<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for ControlsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let block = Block::default()
            .title("⌨ Controls ⌨")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.panel_border));

        let inner = block.inner(area);
        block.render(area, buf);

        let key_style = Style::default()
            .fg(theme.positive)
            .add_modifier(Modifier::BOLD);

        let lines = vec![
            Line::from(vec![
                Span::styled("Click ", key_style),
                Span::raw("your piece to select it"),
            ]),
            Line::from(vec![
                Span::styled("Click ", key_style),
                Span::raw("a square to move there"),
            ]),
            Line::raw(""),
            Line::from(vec![Span::styled("q ", key_style), Span::raw("Quit")]),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}
