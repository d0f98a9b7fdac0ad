use crossterm::style::{Color, Stylize};
use serde::Serialize;

use std::fmt;

use crate::error::MazeError;

/// State of a single grid cell.
///
/// The discriminants are the values exchanged with a host across a raw call
/// boundary, so they are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum CellKind {
    /// Carved and walkable.
    Passage = 1,
    /// Solid. Every cell starts here.
    Wall = 2,
    /// A room the random walk has not reached yet. Never survives generation.
    Unvisited = 4,
    /// A passage on the committed start-to-end path.
    Solution = 8,
}

impl CellKind {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;

    /// Whether the solver may step onto this cell.
    pub fn is_open(self) -> bool {
        !matches!(self, CellKind::Wall)
    }

    /// Single ASCII symbol, used for plain-text dumps.
    pub fn symbol(self) -> char {
        match self {
            CellKind::Passage => '.',
            CellKind::Wall => '#',
            CellKind::Unvisited => '?',
            CellKind::Solution => '*',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(CellKind::Passage),
            '#' => Some(CellKind::Wall),
            '?' => Some(CellKind::Unvisited),
            '*' => Some(CellKind::Solution),
            _ => None,
        }
    }
}

impl TryFrom<u8> for CellKind {
    type Error = MazeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(CellKind::Passage),
            2 => Ok(CellKind::Wall),
            4 => Ok(CellKind::Unvisited),
            8 => Ok(CellKind::Solution),
            other => Err(MazeError::UnknownCellKind(other)),
        }
    }
}

impl From<CellKind> for u8 {
    fn from(kind: CellKind) -> Self {
        kind as u8
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            CellKind::Passage => "  ".with(Color::Reset),
            CellKind::Wall => "⬜".with(Color::White),
            CellKind::Unvisited => "··".with(Color::DarkGrey),
            CellKind::Solution => "🟨".with(Color::Yellow),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                CellKind::CELL_WIDTH as usize,
                "Each cell must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}
