use std::io::Write;

use crossterm::{QueueableCommand, style};

use super::{CellKind, Point};

/// Row-major cell buffer of `width * height` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[CellKind]>,
    width: u16,
    height: u16,
}

impl Grid {
    /// Creates a grid with every cell set to [`CellKind::Wall`].
    pub fn new(width: u16, height: u16) -> Self {
        let data = vec![CellKind::Wall; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Checks that `at` lies inside `[0, width) x [0, height)`.
    pub fn contains(&self, at: Point) -> bool {
        at.x < self.width && at.y < self.height
    }

    fn ravel_index(&self, at: Point) -> usize {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        at.y as usize * self.width as usize + at.x as usize
    }

    /// Returns the cell at `at`, or `None` when it is out of bounds.
    pub fn get(&self, at: Point) -> Option<CellKind> {
        self.contains(at).then(|| self.data[self.ravel_index(at)])
    }

    /// Overwrites the cell at `at`.
    ///
    /// # Panics
    /// If `at` is out of bounds.
    pub fn set(&mut self, at: Point, kind: CellKind) {
        assert!(self.contains(at), "{at} is outside the {}x{} grid", self.width, self.height);
        let idx = self.ravel_index(at);
        self.data[idx] = kind;
    }

    /// All cells in row-major order (y outer, x inner).
    pub fn cells(&self) -> impl Iterator<Item = (Point, CellKind)> + '_ {
        let width = self.width as usize;
        self.data.iter().enumerate().map(move |(i, &kind)| {
            // Both quotient and remainder are bounded by the u16 dimensions.
            (Point::new((i % width) as u16, (i / width) as u16), kind)
        })
    }

    pub fn count(&self, kind: CellKind) -> usize {
        self.data.iter().filter(|&&cell| cell == kind).count()
    }

    /// Plain-text dump, one line per row.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for row in self.data.chunks(self.width as usize) {
            out.extend(row.iter().map(|kind| kind.symbol()));
            out.push('\n');
        }
        out
    }

    /// Parses the format produced by [`Grid::to_ascii`]. Returns `None` on ragged
    /// rows or unknown symbols.
    pub fn from_ascii(text: &str) -> Option<Self> {
        let rows: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let width = rows.first()?.chars().count();
        let data = rows
            .iter()
            .map(|row| {
                (row.chars().count() == width)
                    .then(|| row.chars().map(CellKind::from_symbol).collect::<Option<Vec<_>>>())
                    .flatten()
            })
            .collect::<Option<Vec<_>>>()?
            .concat();
        Some(Grid {
            data: data.into_boxed_slice(),
            width: u16::try_from(width).ok()?,
            height: u16::try_from(rows.len()).ok()?,
        })
    }

    /// Draws the grid with coloured cells, two columns per cell.
    pub fn display(&self, out: &mut impl Write) -> std::io::Result<()> {
        for row in self.data.chunks(self.width as usize) {
            for cell in row {
                out.queue(style::Print(cell))?;
            }
            out.queue(style::Print("\r\n"))?;
        }
        out.flush()
    }
}

impl std::ops::Index<Point> for Grid {
    type Output = CellKind;

    fn index(&self, index: Point) -> &Self::Output {
        &self.data[self.ravel_index(index)]
    }
}
