//! Board and input-surface geometry.
//!
//! Centralises the dimensions that both the rules engine and the front end
//! need: the board size and the size of the rendered surface that click
//! coordinates are expressed in. Every front end passes its own surface
//! dimensions; the constructor validates them once so the click-to-cell
//! derivation can never divide by zero.

/// Default board dimension (squares per side).
pub const DEFAULT_BOARD_SIZE: u8 = 8;

/// Default surface size in pixels (600x600, 75px per square on an 8x8 board).
pub const DEFAULT_SURFACE: u16 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    board_size: u8,
    surface_width: u16,
    surface_height: u16,
}

impl BoardConfig {
    /// Build a config, validating the geometry.
    ///
    /// The board must be even-sided and large enough to hold three setup rows
    /// per side with a gap in between; the surface must be at least one input
    /// unit per square in both axes.
    pub fn new(board_size: u8, surface_width: u16, surface_height: u16) -> Result<Self, ConfigError> {
        // Three rows per camp plus at least one empty row between them. A
        // six-sided board packs every dark square at setup and deadlocks.
        if board_size < 8 {
            return Err(ConfigError::BoardTooSmall(board_size));
        }
        if board_size % 2 != 0 {
            return Err(ConfigError::OddBoard(board_size));
        }
        if surface_width < u16::from(board_size) || surface_height < u16::from(board_size) {
            return Err(ConfigError::SurfaceTooSmall {
                width: surface_width,
                height: surface_height,
                board_size,
            });
        }
        Ok(Self {
            board_size,
            surface_width,
            surface_height,
        })
    }

    /// The standard 8x8 board on a 600x600 surface.
    pub fn standard() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            surface_width: DEFAULT_SURFACE,
            surface_height: DEFAULT_SURFACE,
        }
    }

    pub fn board_size(&self) -> u8 {
        self.board_size
    }

    pub fn surface_width(&self) -> u16 {
        self.surface_width
    }

    pub fn surface_height(&self) -> u16 {
        self.surface_height
    }

    /// Convert surface coordinates to a board cell by truncating division.
    ///
    /// Callers are expected to clamp coordinates to the surface bounds; a
    /// coordinate at or past the edge of the surface can yield a cell outside
    /// the board, which move validation rejects. Quotients past `u8::MAX`
    /// saturate rather than wrap, so an unclamped coordinate can never land
    /// back on a valid cell.
    pub fn cell_at(&self, x: u16, y: u16) -> (u8, u8) {
        let col = x / (self.surface_width / u16::from(self.board_size));
        let row = y / (self.surface_height / u16::from(self.board_size));
        (
            u8::try_from(row).unwrap_or(u8::MAX),
            u8::try_from(col).unwrap_or(u8::MAX),
        )
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("board size {0} is too small for three setup rows per side and a gap")]
    BoardTooSmall(u8),
    #[error("board size {0} is odd; checkerboards have even dimensions")]
    OddBoard(u8),
    #[error("surface {width}x{height} is smaller than the {board_size}x{board_size} board")]
    SurfaceTooSmall {
        width: u16,
        height: u16,
        board_size: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_cell_derivation() {
        let config = BoardConfig::standard();
        // 75px per square on the default surface
        assert_eq!(config.cell_at(0, 0), (0, 0));
        assert_eq!(config.cell_at(74, 74), (0, 0));
        assert_eq!(config.cell_at(75, 0), (0, 1));
        assert_eq!(config.cell_at(0, 75), (1, 0));
        assert_eq!(config.cell_at(599, 599), (7, 7));
    }

    #[test]
    fn test_truncation_not_rounding() {
        let config = BoardConfig::standard();
        // 149 is closer to square 2, but truncation keeps it in square 1
        assert_eq!(config.cell_at(149, 0), (0, 1));
    }

    #[test]
    fn test_far_out_of_bounds_saturates_instead_of_wrapping() {
        let config = BoardConfig::standard();
        // 19350 / 75 = 258, which as a wrapped u8 would be cell 2; the
        // saturated result stays off the board.
        let (row, col) = config.cell_at(19350, 0);
        assert_eq!((row, col), (0, u8::MAX));
        assert!(col >= config.board_size());
    }

    #[test]
    fn test_terminal_sized_surface() {
        // 6x3 terminal cells per square
        let config = BoardConfig::new(8, 48, 24).unwrap();
        assert_eq!(config.cell_at(5, 2), (0, 0));
        assert_eq!(config.cell_at(6, 3), (1, 1));
        assert_eq!(config.cell_at(47, 23), (7, 7));
    }

    #[test]
    fn test_rejects_bad_geometry() {
        assert!(matches!(
            BoardConfig::new(4, 600, 600),
            Err(ConfigError::BoardTooSmall(4))
        ));
        // Six rows hold both camps with no empty row between: setup would
        // fill every dark square and leave neither side a legal move.
        assert!(matches!(
            BoardConfig::new(6, 600, 600),
            Err(ConfigError::BoardTooSmall(6))
        ));
        assert!(matches!(
            BoardConfig::new(9, 600, 600),
            Err(ConfigError::OddBoard(9))
        ));
        assert!(matches!(
            BoardConfig::new(8, 4, 600),
            Err(ConfigError::SurfaceTooSmall { .. })
        ));
    }
}
