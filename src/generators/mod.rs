mod aldous_broder;

pub use aldous_broder::aldous_broder;

use crate::{config::MazeConfig, error::Result, maze::Maze, rng::RandomState};

/// Validates `config`, seeds a fresh generator from it and carves the maze.
pub fn generate_maze(config: &MazeConfig) -> Result<Maze> {
    config.validate()?;
    let mut rng = RandomState::seed(config.seed);
    Ok(aldous_broder(config.width, config.height, &mut rng))
}
