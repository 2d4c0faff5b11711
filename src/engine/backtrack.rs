//! First-solution policy: in-place depth-first search with rollback
//!
//! The strategy mirrors classic pencil-and-paper backtracking:
//! collect the coordinates of the empty cells once, then assign them in
//! order. Each frame tries the candidates of its cell ascending; when a
//! deeper frame reports success the `true` return unwinds the whole stack,
//! when all candidates fail the frame clears its cell again and hands
//! control back to the previous one.

use crate::board::{Cell, Grid};
use log::debug;

/// Searches for the first solution, filling `grid` in on success.
/// On failure every originally empty cell is empty again.
pub(crate) fn first_solution(grid: &mut Grid) -> bool {
    if !grid.is_consistent() {
        return false;
    }
    let empty_cells: Vec<Cell> = Cell::all()
        .filter(|&cell| grid.get(cell).is_none())
        .collect();
    debug!("backtracking over {} empty cells", empty_cells.len());
    place_remaining(grid, &empty_cells)
}

// One recursion frame per empty cell, at most 81 deep.
// Candidates are recomputed from the live grid at every step.
fn place_remaining(grid: &mut Grid, empty_cells: &[Cell]) -> bool {
    let (&cell, rest) = match empty_cells.split_first() {
        Some(split) => split,
        // no empty cell left: the grid is complete
        None => return true,
    };

    for digit in grid.candidates(cell) {
        grid.place(cell, digit);
        if place_remaining(grid, rest) {
            return true;
        }
    }

    grid.clear(cell);
    false
}
