pub mod board;
pub mod controls_panel;
pub mod game_info_panel;

pub use board::{board_inner, BoardWidget, SQUARE_HEIGHT, SQUARE_WIDTH};
pub use controls_panel::ControlsPanel;
pub use game_info_panel::GameInfoPanel;
