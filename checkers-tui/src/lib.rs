pub mod state;
pub mod ui;

pub use state::AppState;
pub use ui::theme::Theme;
