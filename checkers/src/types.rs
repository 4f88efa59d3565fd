//! Canonical side identity for the game.

/// One of the two competing players.
///
/// Red sets up on the low rows and advances toward increasing row numbers;
/// White sets up on the high rows and advances the other way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Red,
    White,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Self::Red => Self::White,
            Self::White => Self::Red,
        }
    }

    /// Row delta of a forward move for a non-king piece.
    pub fn forward(self) -> i16 {
        match self {
            Self::Red => 1,
            Self::White => -1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::White => "white",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
