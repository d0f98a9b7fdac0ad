use crate::{
    error::{MazeError, Result},
    events::MazeObserver,
    maze::{CellKind, Directions, Maze, Point},
};

/// One entry of the solver stack: a cell on the partial path and the directions
/// already attempted from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolvePathFrame {
    pub at: Point,
    pub tried: Directions,
}

/// Depth-first search with an explicit stack, trying directions in canonical order.
///
/// The stack is always the path from the start to the frontier. Each pushed frame
/// has the direction back to its parent pre-marked, so on a perfect maze no cell is
/// entered twice. When the top of the stack reaches the exit, every frame is
/// marked [`CellKind::Solution`] and reported bottom to top, and the path is returned.
///
/// Out-of-range neighbours are rejected with the same exclusive bound on both axes.
///
/// # Errors
/// [`MazeError::Unsolvable`] if the stack empties before reaching the exit, which
/// means the grid is not a connected maze.
pub fn solve_backtracking(maze: &mut Maze, observer: &mut impl MazeObserver) -> Result<Vec<Point>> {
    let (start, end) = (maze.start(), maze.end());
    let mut stack = vec![SolvePathFrame {
        at: start,
        tried: Directions::NONE,
    }];
    observer.on_move_in(start);

    let mut backtracks: usize = 0;
    loop {
        let Some(current) = stack.last_mut() else {
            tracing::error!("[solve] stack emptied before reaching {}", end);
            return Err(MazeError::Unsolvable { start, end });
        };

        if current.at == end {
            let path: Vec<Point> = stack.iter().map(|frame| frame.at).collect();
            let grid = maze.grid_mut();
            for &at in &path {
                grid.set(at, CellKind::Solution);
                observer.on_solution(at);
            }
            tracing::debug!(
                "[solve] path of {} cells found after {} backtracks",
                path.len(),
                backtracks
            );
            return Ok(path);
        }

        // Every direction has been tried: pop this cell off the stack
        let Some(direction) = current.tried.first_missing() else {
            observer.on_move_out(current.at);
            stack.pop();
            backtracks += 1;
            continue;
        };

        current.tried.insert(direction);
        let next = current
            .at
            .step(direction)
            .filter(|&next| maze.grid().get(next).is_some_and(CellKind::is_open));
        let Some(next) = next else {
            continue;
        };

        observer.on_move_in(next);
        stack.push(SolvePathFrame {
            at: next,
            tried: Directions::only(direction.opposite()),
        });
    }
}
