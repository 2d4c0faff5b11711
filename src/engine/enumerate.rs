//! All-solutions policy: snapshot search over an explicit tree
//!
//! Instead of undoing placements, every candidate placement copies the grid
//! into a fresh tree node. Completions are recorded and the walk continues
//! through the remaining siblings and ancestors, so every solution is found
//! exactly once. The tree is retained purely for statistics.

use super::tree::{NodeId, SearchTree};
use super::SearchReport;
use crate::board::Grid;
use log::debug;
use std::time::Instant;

/// Explores the whole search space below `grid`.
pub(crate) fn all_solutions(grid: Grid) -> SearchReport {
    let start = Instant::now();
    let mut tree = SearchTree::with_root(grid);
    let mut solutions = Vec::new();
    if grid.is_consistent() {
        let root = tree.root();
        explore(&mut tree, root, &mut solutions);
    }
    let elapsed = start.elapsed();
    debug!(
        "computed {} states, {} solutions in {:?}",
        tree.len(),
        solutions.len(),
        elapsed,
    );
    SearchReport {
        solutions,
        tree,
        elapsed,
    }
}

fn explore(tree: &mut SearchTree, node: NodeId, solutions: &mut Vec<Grid>) {
    let grid = *tree.get(node).grid();
    let cell = match grid.first_empty_cell() {
        Some(cell) => cell,
        None => {
            solutions.push(grid);
            return;
        }
    };

    for digit in grid.candidates(cell) {
        let child = tree.add_child(node, grid.with_placement(cell, digit));
        explore(tree, child, solutions);
    }
}
