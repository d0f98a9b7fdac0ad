use crate::{
    maze::{CellKind, Direction, Grid, Maze, Point},
    rng::RandomState,
};

/// Odd coordinate of a uniformly chosen room along an axis with `rooms` rooms.
fn random_room(rng: &mut RandomState, rooms: u16) -> u16 {
    // The draw is reduced modulo `rooms`, so it fits back into u16.
    1 + rng.below(u32::from(rooms)) as u16 * 2
}

/// The wall cell and the room beyond it in `direction`, if the wall lies strictly
/// inside the outer border.
fn interior_step(grid: &Grid, from: Point, direction: Direction) -> Option<(Point, Point)> {
    let wall = from.step(direction)?;
    if wall.x < 1 || wall.x > grid.width() - 2 || wall.y < 1 || wall.y > grid.height() - 2 {
        return None;
    }
    Some((wall, wall.step(direction)?))
}

/// Carves a perfect maze with the Aldous-Broder random walk.
///
/// Rooms sit at odd coordinates. The walk starts in a random room and keeps
/// stepping two cells in a shuffled direction; whenever it lands in a room it
/// has never seen, the wall it crossed is knocked down. The entrance is a random
/// room column on the top edge and the exit one on the bottom edge.
///
/// `width` and `height` must be odd and at least 3. Termination is certain but
/// the number of steps is unbounded.
pub fn aldous_broder(width: u16, height: u16, rng: &mut RandomState) -> Maze {
    debug_assert!(width >= 3 && height >= 3 && width % 2 == 1 && height % 2 == 1);

    let mut grid = Grid::new(width, height);
    let (rooms_x, rooms_y) = (width / 2, height / 2);
    let mut remaining = u32::from(rooms_x) * u32::from(rooms_y);

    let start = Point::new(random_room(rng, rooms_x), 0);
    grid.set(start, CellKind::Passage);
    let end = Point::new(random_room(rng, rooms_x), height - 1);
    grid.set(end, CellKind::Passage);

    for y in (1..height).step_by(2) {
        for x in (1..width).step_by(2) {
            grid.set(Point::new(x, y), CellKind::Unvisited);
        }
    }

    let x = random_room(rng, rooms_x);
    let y = random_room(rng, rooms_y);
    let mut walker = Point::new(x, y);
    grid.set(walker, CellKind::Passage);
    remaining -= 1;

    let mut steps: u64 = 0;
    while remaining > 0 {
        let mut directions = Direction::ALL;
        rng.shuffle(&mut directions);

        for direction in directions {
            // Skip directions that would walk outside the maze
            let Some((wall, neighbor)) = interior_step(&grid, walker, direction) else {
                continue;
            };

            if grid[neighbor] == CellKind::Unvisited {
                grid.set(neighbor, CellKind::Passage);
                grid.set(wall, CellKind::Passage);
                remaining -= 1;
            }

            walker = neighbor;
            break;
        }
        steps += 1;
    }

    tracing::debug!(
        "[generate] carved {}x{} maze in {} walk steps, start {} end {}",
        width,
        height,
        steps,
        start,
        end
    );

    Maze::new(grid, start, end)
}
