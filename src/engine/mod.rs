//! The two search policies built on the shared board model
//!
//! [`backtrack`] mutates a single grid and rolls placements back, stopping
//! at the first solution. [`enumerate`] snapshots the grid per placement,
//! records the whole walk in a [`SearchTree`] and collects every solution.
//! Constraint logic lives entirely on [`Grid`]; the policies only differ in
//! how they hold board state and when they stop.

pub(crate) mod backtrack;
pub(crate) mod enumerate;
mod tree;

pub use self::tree::{Node, NodeId, SearchTree};

use crate::board::Grid;
use std::fmt;
use std::time::Duration;

/// Outcome of an exhaustive search, as returned by [`Grid::solve_all`].
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// Every complete grid reached, in discovery order.
    pub solutions: Vec<Grid>,
    /// The explored placement tree, retained for statistics and traversal.
    pub tree: SearchTree,
    /// Wall-clock duration of the whole search.
    pub elapsed: Duration,
}

impl SearchReport {
    /// Returns the number of nodes created during the search, root included.
    pub fn nodes(&self) -> usize {
        self.tree.len()
    }
}

impl fmt::Display for SearchReport {
    /// Renders the statistics block: elapsed time, node count, solution count.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "solved in {} milliseconds.", self.elapsed.as_millis())?;
        writeln!(f, "computed states: {}", self.nodes())?;
        write!(f, "solutions: {}", self.solutions.len())
    }
}
