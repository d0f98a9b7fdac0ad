//! Event reporting between the maze algorithms and whatever draws them.
//!
//! The generator, solver and render pass only ever talk to a [`MazeObserver`];
//! they never know whether the other side is a timeline, a recorder or a host
//! shim on the far side of a call boundary.

use crate::config::AnimationConfig;
use crate::error::Result;
use crate::maze::{CellKind, Point};

pub trait MazeObserver {
    /// A visually significant cell, reported once.
    fn on_cell(&mut self, at: Point, kind: CellKind) -> Result<()>;
    /// The solver's walk entered `at`.
    fn on_move_in(&mut self, at: Point);
    /// The solver backtracked out of `at`.
    fn on_move_out(&mut self, at: Point);
    /// `at` is on the committed solution path.
    fn on_solution(&mut self, at: Point);
}

/// Discards everything.
impl MazeObserver for () {
    fn on_cell(&mut self, _at: Point, _kind: CellKind) -> Result<()> {
        Ok(())
    }
    fn on_move_in(&mut self, _at: Point) {}
    fn on_move_out(&mut self, _at: Point) {}
    fn on_solution(&mut self, _at: Point) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeEvent {
    Cell { at: Point, kind: CellKind },
    MoveIn(Point),
    MoveOut(Point),
    Solution(Point),
}

/// Records events in receipt order.
impl MazeObserver for Vec<MazeEvent> {
    fn on_cell(&mut self, at: Point, kind: CellKind) -> Result<()> {
        self.push(MazeEvent::Cell { at, kind });
        Ok(())
    }

    fn on_move_in(&mut self, at: Point) {
        self.push(MazeEvent::MoveIn(at));
    }

    fn on_move_out(&mut self, at: Point) {
        self.push(MazeEvent::MoveOut(at));
    }

    fn on_solution(&mut self, at: Point) {
        self.push(MazeEvent::Solution(at));
    }
}

/// Forwards only the events an [`AnimationConfig`] asks to be drawn:
///
/// - walls and solution tiles always, passages only with walk animation;
/// - move-in and move-out only with walk animation;
/// - solution reveals with walk or final animation.
///
/// Unvisited cells are passed through so the receiver can reject them.
pub struct AnimationGate<'a, O: MazeObserver + ?Sized> {
    inner: &'a mut O,
    animate_walk: bool,
    animate_final: bool,
}

impl<'a, O: MazeObserver + ?Sized> AnimationGate<'a, O> {
    pub fn new(inner: &'a mut O, config: &AnimationConfig) -> Self {
        Self {
            inner,
            animate_walk: config.animate_walk,
            animate_final: config.animate_final,
        }
    }
}

impl<O: MazeObserver + ?Sized> MazeObserver for AnimationGate<'_, O> {
    fn on_cell(&mut self, at: Point, kind: CellKind) -> Result<()> {
        if kind == CellKind::Passage && !self.animate_walk {
            return Ok(());
        }
        self.inner.on_cell(at, kind)
    }

    fn on_move_in(&mut self, at: Point) {
        if self.animate_walk {
            self.inner.on_move_in(at);
        }
    }

    fn on_move_out(&mut self, at: Point) {
        if self.animate_walk {
            self.inner.on_move_out(at);
        }
    }

    fn on_solution(&mut self, at: Point) {
        if self.animate_walk || self.animate_final {
            self.inner.on_solution(at);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(observer: &mut impl MazeObserver) {
        let p = Point::new(1, 1);
        observer.on_cell(p, CellKind::Wall).unwrap();
        observer.on_cell(p, CellKind::Passage).unwrap();
        observer.on_cell(p, CellKind::Solution).unwrap();
        observer.on_move_in(p);
        observer.on_move_out(p);
        observer.on_solution(p);
    }

    fn gated(animate_walk: bool, animate_final: bool) -> Vec<MazeEvent> {
        let config = AnimationConfig {
            animate_walk,
            animate_final,
            ..AnimationConfig::default()
        };
        let mut events = Vec::new();
        feed(&mut AnimationGate::new(&mut events, &config));
        events
    }

    #[test]
    fn full_animation_forwards_everything() {
        assert_eq!(gated(true, false).len(), 6);
        assert_eq!(gated(true, true).len(), 6);
    }

    #[test]
    fn final_only_keeps_statics_and_solution() {
        let p = Point::new(1, 1);
        assert_eq!(
            gated(false, true),
            vec![
                MazeEvent::Cell {
                    at: p,
                    kind: CellKind::Wall
                },
                MazeEvent::Cell {
                    at: p,
                    kind: CellKind::Solution
                },
                MazeEvent::Solution(p),
            ]
        );
    }

    #[test]
    fn no_animation_keeps_only_statics() {
        let events = gated(false, false);
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| matches!(e, MazeEvent::Cell { .. })));
    }

    #[test]
    fn unvisited_cells_reach_the_receiver() {
        let mut events = Vec::new();
        let config = AnimationConfig::default();
        AnimationGate::new(&mut events, &config)
            .on_cell(Point::new(0, 0), CellKind::Unvisited)
            .unwrap();
        assert_eq!(events.len(), 1);
    }
}
