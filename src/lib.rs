#![warn(missing_docs)]
//! A backtracking sudoku solver
//!
//! ## Overview
//!
//! The crate revolves around [`Grid`], a 9x9 sudoku board, and two
//! depth-first search policies built on the same constraint logic:
//!
//! * [`Grid::solve`] / [`Grid::solve_one`] mutate a single grid in place,
//!   backtracking over its empty cells and stopping at the first solution.
//! * [`Grid::solve_all`] snapshots the grid at every placement, records the
//!   whole search in a [`SearchTree`] and enumerates every solution.
//!
//! ## Example
//!
//! ```
//! use doku::Grid;
//!
//! let puzzle_line =
//!     "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
//!
//! let grid = Grid::from_str_line(puzzle_line).unwrap();
//!
//! // Find one solution, print it boxed or as an 81 character line
//! if let Some(solution) = grid.solve_one() {
//!     println!("{}", solution);
//!     println!("{}", solution.to_str_line());
//!
//!     let cell_contents: [u8; 81] = solution.to_bytes();
//!     assert_eq!(cell_contents[0], 5);
//! }
//!
//! // Or walk the entire search space
//! let report = grid.solve_all();
//! assert_eq!(report.solutions.len(), 1);
//! ```

mod bitset;
mod board;
mod consts;
mod engine;
pub mod errors;

pub use crate::bitset::DigitSet;
pub use crate::board::{Block, Cell, Col, Digit, Grid, House, Row};
pub use crate::engine::{Node, NodeId, SearchReport, SearchTree};
