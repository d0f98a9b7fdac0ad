mod backtrack;

pub use backtrack::{SolvePathFrame, solve_backtracking};
