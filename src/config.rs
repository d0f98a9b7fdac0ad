use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{MazeError, Result};

pub const MIN_DIMENSION: u16 = 3;
/// Largest width or height accepted; native builds size their buffers for it.
pub const MAX_DIMENSION: u16 = 255;

/// What to build: grid dimensions and the seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeConfig {
    pub width: u16,
    pub height: u16,
    pub seed: u32,
}

impl MazeConfig {
    pub fn new(width: u16, height: u16, seed: u32) -> Result<Self> {
        let config = MazeConfig {
            width,
            height,
            seed,
        };
        config.validate()?;
        Ok(config)
    }

    /// Both dimensions must be odd and within `[MIN_DIMENSION, MAX_DIMENSION]`.
    pub fn validate(&self) -> Result<()> {
        let (width, height) = (self.width, self.height);
        if width < MIN_DIMENSION || height < MIN_DIMENSION || width % 2 == 0 || height % 2 == 0 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(MazeError::DimensionTooLarge {
                width,
                height,
                max: MAX_DIMENSION,
            });
        }
        Ok(())
    }
}

/// How the solve is animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationConfig {
    /// Duration of every timed command, and the amount the cursor advances per command.
    pub step: Duration,
    /// Animate the solver's walk (and draw passage tiles for it).
    pub animate_walk: bool,
    /// Animate the final solution highlight.
    pub animate_final: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            step: Duration::from_micros(8100),
            animate_walk: true,
            animate_final: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Extent {
    pub x: u32,
    pub y: u32,
}

impl Extent {
    pub const fn new(x: u32, y: u32) -> Self {
        Extent { x, y }
    }
}

/// Presentation settings for the SVG writer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Displayed size of the SVG element.
    pub image_size: Extent,
    pub cell_size: Extent,
    /// Inset of passage and solution tiles inside their cell.
    pub padding: Extent,
    /// Space around the whole maze.
    pub margin: Extent,
    /// Prefix for tile ids, so several mazes can share one document.
    pub id_prefix: String,
    pub background_color: String,
    pub wall_color: String,
    pub solution_color: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_size: Extent::new(300, 300),
            cell_size: Extent::new(100, 100),
            padding: Extent::new(0, 0),
            margin: Extent::new(0, 0),
            id_prefix: "rs".to_string(),
            background_color: "var(--bg)".to_string(),
            wall_color: "var(--wall)".to_string(),
            solution_color: "var(--solution)".to_string(),
        }
    }
}

/// Parses a seed written as up to eight hex digits, with an optional `0x` prefix.
pub fn parse_seed(text: &str) -> Result<u32> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if digits.is_empty() || digits.len() > 8 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(MazeError::invalid_seed(text));
    }
    u32::from_str_radix(digits, 16).map_err(|_| MazeError::invalid_seed(text))
}

/// The conventional 8-digit form of a seed.
pub fn format_seed(seed: u32) -> String {
    format!("{seed:08x}")
}
