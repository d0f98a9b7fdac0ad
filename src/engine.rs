use std::time::{Duration, Instant};

use crate::{
    config::{AnimationConfig, MazeConfig},
    error::Result,
    events::{AnimationGate, MazeObserver},
    generators::generate_maze,
    maze::{Maze, Point},
    solvers::solve_backtracking,
    timeline::{Timeline, TimelineBuilder},
};

/// Everything one invocation produces.
#[derive(Debug, Clone)]
pub struct Solved {
    pub timeline: Timeline,
    /// Wall time spent generating, solving and rendering.
    pub elapsed: Duration,
    /// The grid with the solution path marked.
    pub maze: Maze,
    pub path: Vec<Point>,
}

/// Reports every cell row-major. Filtering is up to the observer.
pub fn render_cells(maze: &Maze, observer: &mut impl MazeObserver) -> Result<()> {
    for (at, kind) in maze.grid().cells() {
        observer.on_cell(at, kind)?;
    }
    Ok(())
}

/// Generates the maze for `config`, solves it and builds the animation timeline.
///
/// Runs synchronously to completion. Invalid dimensions fail before any grid is
/// allocated; any later failure aborts the invocation and nothing partial is returned.
pub fn generate_and_solve(config: &MazeConfig, animation: &AnimationConfig) -> Result<Solved> {
    if let Err(err) = config.validate() {
        tracing::warn!("[engine] rejected configuration: {}", err);
        return Err(err);
    }

    let started = Instant::now();
    let mut maze = generate_maze(config)?;

    let mut builder = TimelineBuilder::new(config.width, config.height, animation);
    let path = {
        let mut gate = AnimationGate::new(&mut builder, animation);
        let path = solve_backtracking(&mut maze, &mut gate)?;
        render_cells(&maze, &mut gate)?;
        path
    };
    let elapsed = started.elapsed();
    let timeline = builder.finish();

    tracing::info!(
        "[engine] {}x{} maze, seed {:08x}: path {} cells, {} commands, {:?} elapsed",
        config.width,
        config.height,
        config.seed,
        path.len(),
        timeline.commands().len(),
        elapsed
    );

    Ok(Solved {
        timeline,
        elapsed,
        maze,
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::MazeError,
        maze::CellKind,
        timeline::{DrawCommand, Tile},
    };

    fn run(width: u16, height: u16, seed: u32) -> Solved {
        let config = MazeConfig::new(width, height, seed).unwrap();
        generate_and_solve(&config, &AnimationConfig::default()).unwrap()
    }

    fn begins(timeline: &Timeline) -> Vec<Duration> {
        timeline
            .commands()
            .iter()
            .filter_map(|c| match *c {
                DrawCommand::Fade { begin, .. } => Some(begin),
                DrawCommand::Tile { .. } => None,
            })
            .collect()
    }

    #[test]
    fn seed_one_five_by_five() {
        let solved = run(5, 5, 1);
        assert_eq!(solved.path.len(), 7);
        assert_eq!(solved.maze.solution_cells().count(), 7);

        let timeline = &solved.timeline;
        // 7 move-ins and 7 solution reveals, then a tile for each of the 25 cells.
        assert_eq!(timeline.timed_count(), 14);
        assert_eq!(timeline.commands().len(), 14 + 25);
        assert!(timeline.commands()[..14].iter().all(DrawCommand::is_timed));
        assert_eq!(timeline.total(), Duration::from_micros(8100) * 14);
    }

    #[test]
    fn repeated_runs_are_identical() {
        for seed in [0, 1, 0xdead_beef, u32::MAX] {
            let a = run(21, 15, seed);
            let b = run(21, 15, seed);
            assert_eq!(a.timeline, b.timeline);
            assert_eq!(a.maze, b.maze);
            assert_eq!(
                a.timeline.to_json().unwrap(),
                b.timeline.to_json().unwrap()
            );
        }
    }

    #[test]
    fn timed_offsets_are_evenly_spaced() {
        for seed in 0..20 {
            let solved = run(31, 21, seed);
            let begins = begins(&solved.timeline);
            assert!(begins.windows(2).all(|w| w[0] <= w[1]));
            let step = AnimationConfig::default().step;
            for (i, begin) in begins.iter().enumerate() {
                assert_eq!(*begin, step * i as u32);
            }
            assert_eq!(
                solved.timeline.total(),
                step * solved.timeline.timed_count() as u32
            );
        }
    }

    #[test]
    fn static_tiles_cover_the_final_grid() {
        let solved = run(9, 7, 3);
        let tiles: Vec<(Point, Tile)> = solved
            .timeline
            .commands()
            .iter()
            .filter_map(|c| match *c {
                DrawCommand::Tile { at, tile, .. } => Some((at, tile)),
                DrawCommand::Fade { .. } => None,
            })
            .collect();
        assert_eq!(tiles.len(), 9 * 7);
        for ((at, tile), (cell_at, kind)) in tiles.into_iter().zip(solved.maze.grid().cells()) {
            assert_eq!(at, cell_at);
            let expected = match kind {
                CellKind::Wall => Tile::Wall,
                CellKind::Passage => Tile::Passage,
                CellKind::Solution => Tile::Solution,
                CellKind::Unvisited => panic!("unvisited cell at {cell_at}"),
            };
            assert_eq!(tile, expected);
        }
    }

    #[test]
    fn without_animation_only_walls_and_solution_are_drawn() {
        let config = MazeConfig::new(15, 15, 7).unwrap();
        let animation = AnimationConfig {
            animate_walk: false,
            animate_final: false,
            ..AnimationConfig::default()
        };
        let solved = generate_and_solve(&config, &animation).unwrap();
        let timeline = &solved.timeline;
        assert_eq!(timeline.timed_count(), 0);
        assert_eq!(timeline.total(), Duration::ZERO);

        let grid = solved.maze.grid();
        let expected = grid.count(CellKind::Wall) + grid.count(CellKind::Solution);
        assert_eq!(timeline.commands().len(), expected);
        assert!(timeline.commands().iter().all(|c| match *c {
            DrawCommand::Tile {
                tile: Tile::Solution,
                opacity,
                ..
            } => opacity == 1.0,
            DrawCommand::Tile { tile, .. } => tile == Tile::Wall,
            DrawCommand::Fade { .. } => false,
        }));
    }

    #[test]
    fn final_only_animates_the_solution() {
        let config = MazeConfig::new(15, 15, 7).unwrap();
        let animation = AnimationConfig {
            animate_walk: false,
            ..AnimationConfig::default()
        };
        let solved = generate_and_solve(&config, &animation).unwrap();
        assert_eq!(solved.timeline.timed_count(), solved.path.len());
    }

    #[test]
    fn minimal_maze_solves() {
        let solved = run(3, 3, 1);
        assert_eq!(
            solved.path,
            vec![Point::new(1, 0), Point::new(1, 1), Point::new(1, 2)]
        );
        assert_eq!(solved.timeline.timed_count(), 6);
    }

    #[test]
    fn even_dimension_fails_before_generation() {
        let config = MazeConfig {
            width: 4,
            height: 63,
            seed: 1,
        };
        let err = generate_and_solve(&config, &AnimationConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            MazeError::InvalidDimensions {
                width: 4,
                height: 63
            }
        ));
    }
}
