//! Drawing script produced from maze events.
//!
//! The builder appends exactly one [`DrawCommand`] per event it receives, in
//! receipt order. Static commands place tiles; timed commands fade a tile's
//! opacity over one step, starting at a cursor that advances one step per timed
//! command. The cursor counts steps, not wall-clock time.

mod svg;

use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::{
    config::AnimationConfig,
    error::{MazeError, Result},
    events::MazeObserver,
    maze::{CellKind, Point},
};

pub use svg::SvgDocument;

/// Opacity of a cell while the solver's walk is on it.
pub const WALK_OPACITY: f32 = 0.6;
/// Opacity of a committed solution cell.
pub const SOLUTION_OPACITY: f32 = 1.0;

fn as_secs<S: Serializer>(duration: &Duration, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tile {
    /// Full-cell block.
    Wall,
    /// Inset tile that the walk animation fades in and out.
    Passage,
    /// Inset tile on the solution path.
    Solution,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Static filled rectangle.
    Tile { at: Point, tile: Tile, opacity: f32 },
    /// Opacity transition of the inset tile at `at`.
    Fade {
        at: Point,
        from: f32,
        to: f32,
        #[serde(serialize_with = "as_secs")]
        begin: Duration,
        #[serde(serialize_with = "as_secs")]
        duration: Duration,
    },
}

impl DrawCommand {
    pub fn at(&self) -> Point {
        match self {
            DrawCommand::Tile { at, .. } | DrawCommand::Fade { at, .. } => *at,
        }
    }

    pub fn is_timed(&self) -> bool {
        matches!(self, DrawCommand::Fade { .. })
    }
}

/// Finished drawing script for one maze.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timeline {
    width: u16,
    height: u16,
    commands: Vec<DrawCommand>,
    #[serde(serialize_with = "as_secs")]
    total: Duration,
}

impl Timeline {
    /// Grid width in cells.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Total animated duration: the final cursor value.
    pub fn total(&self) -> Duration {
        self.total
    }

    pub fn timed_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_timed()).count()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Accumulates maze events into a [`Timeline`].
#[derive(Debug)]
pub struct TimelineBuilder {
    width: u16,
    height: u16,
    commands: Vec<DrawCommand>,
    step: Duration,
    ticks: u32,
    /// Solution tiles are drawn fully opaque when nothing will fade them in.
    solid_solution: bool,
}

impl TimelineBuilder {
    pub fn new(width: u16, height: u16, animation: &AnimationConfig) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
            step: animation.step,
            ticks: 0,
            solid_solution: !animation.animate_walk && !animation.animate_final,
        }
    }

    /// Start offset the next timed command will get.
    pub fn cursor(&self) -> Duration {
        self.step * self.ticks
    }

    fn fade(&mut self, at: Point, from: f32, to: f32) {
        self.commands.push(DrawCommand::Fade {
            at,
            from,
            to,
            begin: self.cursor(),
            duration: self.step,
        });
        self.ticks += 1;
    }

    fn tile(&mut self, at: Point, tile: Tile, opacity: f32) {
        self.commands.push(DrawCommand::Tile { at, tile, opacity });
    }

    pub fn finish(self) -> Timeline {
        let total = self.cursor();
        tracing::debug!(
            "[timeline] {} commands, {} timed, total {:?}",
            self.commands.len(),
            self.ticks,
            total
        );
        Timeline {
            width: self.width,
            height: self.height,
            commands: self.commands,
            total,
        }
    }
}

impl MazeObserver for TimelineBuilder {
    fn on_cell(&mut self, at: Point, kind: CellKind) -> Result<()> {
        match kind {
            CellKind::Wall => self.tile(at, Tile::Wall, 1.0),
            CellKind::Passage => self.tile(at, Tile::Passage, 0.0),
            CellKind::Solution => {
                let opacity = if self.solid_solution { SOLUTION_OPACITY } else { 0.0 };
                self.tile(at, Tile::Solution, opacity);
            }
            CellKind::Unvisited => return Err(MazeError::UnrenderableCell { at, kind }),
        }
        Ok(())
    }

    fn on_move_in(&mut self, at: Point) {
        self.fade(at, 0.0, WALK_OPACITY);
    }

    fn on_move_out(&mut self, at: Point) {
        self.fade(at, WALK_OPACITY, 0.0);
    }

    fn on_solution(&mut self, at: Point) {
        self.fade(at, WALK_OPACITY, SOLUTION_OPACITY);
    }
}
