pub mod board;
pub mod config;
pub mod piece;
pub mod types;

pub use board::{Board, ClickOutcome, SetupError};
pub use config::{BoardConfig, ConfigError};
pub use piece::Piece;
pub use types::Side;
