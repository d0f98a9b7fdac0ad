//! Deterministic maze generation, solving and animation.
//!
//! A maze is a pure function of `(width, height, seed)`: a seeded xoshiro128**
//! stream drives an Aldous-Broder walk, a depth-first backtracking search finds the
//! unique entrance-to-exit path, and every step of the search is recorded on a
//! [`Timeline`] that can be written out as an animated SVG.
//!
//! ```
//! use mazewalk::{AnimationConfig, MazeConfig, RenderConfig, SvgDocument, generate_and_solve};
//!
//! let config = MazeConfig::new(15, 15, 0x2a).unwrap();
//! let solved = generate_and_solve(&config, &AnimationConfig::default()).unwrap();
//! let svg = SvgDocument::new(&solved.timeline, &RenderConfig::default()).to_string();
//! assert!(svg.ends_with("</svg>"));
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod generators;
pub mod maze;
pub mod rng;
pub mod solvers;
pub mod timeline;

pub use config::{AnimationConfig, MazeConfig, RenderConfig, format_seed, parse_seed};
pub use engine::{Solved, generate_and_solve};
pub use error::{MazeError, Result};
pub use events::{MazeEvent, MazeObserver};
pub use maze::{CellKind, Grid, Maze, Point};
pub use rng::RandomState;
pub use timeline::{DrawCommand, SvgDocument, Timeline, TimelineBuilder};
