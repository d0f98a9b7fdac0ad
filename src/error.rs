use crate::maze::{CellKind, Point};

pub type Result<T> = std::result::Result<T, MazeError>;

#[derive(thiserror::Error, Debug)]
pub enum MazeError {
    #[error("configuration error: maze dimensions must be odd and at least 3, got {width}x{height}")]
    InvalidDimensions { width: u16, height: u16 },

    #[error("configuration error: maze dimensions must not exceed {max}, got {width}x{height}")]
    DimensionTooLarge { width: u16, height: u16, max: u16 },

    #[error("configuration error: invalid seed {0:?}, expected up to 8 hex digits")]
    InvalidSeed(String),

    #[error("invariant violation: no path from {start} to {end}")]
    Unsolvable { start: Point, end: Point },

    #[error("render error: cannot draw {kind:?} cell at {at}")]
    UnrenderableCell { at: Point, kind: CellKind },

    #[error("render error: unknown cell kind {0}")]
    UnknownCellKind(u8),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl MazeError {
    pub fn invalid_seed(seed: impl Into<String>) -> Self {
        Self::InvalidSeed(seed.into())
    }

    /// Configuration errors are raised before any maze state exists.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidDimensions { .. } | Self::DimensionTooLarge { .. } | Self::InvalidSeed(_)
        )
    }
}
