use ratatui::style::Color;

/// All colors used by the TUI, grouped by purpose.
/// Swap between presets (Dark / Light) to adapt to the terminal background.
#[derive(Debug, Clone)]
pub struct Theme {
    // Board
    pub light_square: Color,
    pub dark_square: Color,
    pub red_piece: Color,
    pub white_piece: Color,
    pub king_marker: Color,
    pub selected_square: Color,
    pub board_border: Color,
    pub board_label: Color,

    // Panel chrome
    pub panel_border: Color,

    // Text
    pub text_primary: Color,
    pub text_accent: Color,
    pub positive: Color,
    pub warning: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            light_square: Color::Rgb(240, 217, 181),
            dark_square: Color::Rgb(120, 80, 55),
            red_piece: Color::Rgb(190, 40, 30),
            white_piece: Color::Rgb(235, 235, 225),
            king_marker: Color::Yellow,
            selected_square: Color::Yellow,
            board_border: Color::Cyan,
            board_label: Color::Yellow,
            panel_border: Color::Cyan,
            text_primary: Color::White,
            text_accent: Color::Yellow,
            positive: Color::Green,
            warning: Color::Red,
        }
    }

    pub fn light() -> Self {
        Self {
            light_square: Color::Rgb(250, 240, 220),
            dark_square: Color::Rgb(150, 105, 70),
            red_piece: Color::Rgb(160, 25, 20),
            white_piece: Color::Rgb(90, 90, 90),
            king_marker: Color::Rgb(180, 130, 0),
            selected_square: Color::Rgb(200, 160, 0),
            board_border: Color::Blue,
            board_label: Color::Blue,
            panel_border: Color::Blue,
            text_primary: Color::Black,
            text_accent: Color::Blue,
            positive: Color::Green,
            warning: Color::Red,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
