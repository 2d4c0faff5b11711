use crate::bitset::DigitSet;
use crate::board::{Cell, Digit, House};
use crate::consts::N_CELLS;
use crate::engine::{self, SearchReport};
use crate::errors::{FromBytesError, InvalidEntry, LineParseError};
use std::fmt;

/// A 9x9 sudoku grid, possibly partially filled.
///
/// Cells are stored in row-major order. The type is plain old data: copying
/// it is 81 bytes, which is what the snapshotting search policy leans on.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Grid([u8; N_CELLS]);

impl Grid {
    /// Creates a new grid from an 81 character line.
    ///
    /// `'1'..='9'` are entries, `'0'`, `'.'` and `'_'` mark empty cells.
    /// Anything else, or any other length after trailing whitespace is
    /// stripped, is rejected.
    pub fn from_str_line(s: &str) -> Result<Grid, LineParseError> {
        let mut grid = [0; N_CELLS];
        let mut n_cells = 0;
        for ch in s.trim_end().chars() {
            if n_cells == N_CELLS {
                return Err(LineParseError::TooManyCells);
            }
            grid[n_cells] = match ch {
                '1'..='9' => ch as u8 - b'0',
                '0' | '.' | '_' => 0,
                _ => {
                    return Err(LineParseError::InvalidEntry(InvalidEntry {
                        cell: n_cells as u8,
                        ch,
                    }))
                }
            };
            n_cells += 1;
        }
        if n_cells < N_CELLS {
            return Err(LineParseError::NotEnoughCells(n_cells as u8));
        }
        Ok(Grid(grid))
    }

    /// Creates a new grid from the first 81 characters of a line, mapping
    /// `'1'..='9'` to entries and every other character to an empty cell.
    ///
    /// Returns `None` for lines shorter than 81 characters. That is the
    /// designed skip signal for streamed puzzle collections, not an error.
    pub fn from_str_line_permissive(s: &str) -> Option<Grid> {
        let mut grid = [0; N_CELLS];
        let mut chars = s.chars();
        for slot in grid.iter_mut() {
            let ch = chars.next()?;
            if let '1'..='9' = ch {
                *slot = ch as u8 - b'0';
            }
        }
        Some(Grid(grid))
    }

    /// Creates a new grid from a byte array, `0` marking empty cells.
    pub fn from_bytes(bytes: [u8; N_CELLS]) -> Result<Grid, FromBytesError> {
        if bytes.iter().all(|&byte| byte <= 9) {
            Ok(Grid(bytes))
        } else {
            Err(FromBytesError(()))
        }
    }

    /// Returns the cell contents as a byte array, `0` marking empty cells.
    pub fn to_bytes(self) -> [u8; N_CELLS] {
        self.0
    }

    /// Returns the digit in `cell`, if any.
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<Digit> {
        Digit::new_checked(self.0[cell.as_index()])
    }

    /// Enters `digit` into `cell`, overwriting whatever was there.
    ///
    /// Together with [`clear`](Grid::clear) this is the write/undo pair of
    /// the in-place search policy.
    #[inline]
    pub fn place(&mut self, cell: Cell, digit: Digit) {
        self.0[cell.as_index()] = digit.get();
    }

    /// Empties `cell`.
    #[inline]
    pub fn clear(&mut self, cell: Cell) {
        self.0[cell.as_index()] = 0;
    }

    /// Returns a copy of this grid with `digit` entered into `cell`.
    /// The receiver is untouched.
    pub fn with_placement(&self, cell: Cell, digit: Digit) -> Grid {
        let mut grid = *self;
        grid.place(cell, digit);
        grid
    }

    /// Returns the first empty cell in row-major order, or `None` when the
    /// grid is full. `None` is the completion signal of the search engine.
    pub fn first_empty_cell(&self) -> Option<Cell> {
        self.0
            .iter()
            .position(|&value| value == 0)
            .map(|idx| Cell::new(idx as u8))
    }

    /// Checks whether every cell holds a digit.
    pub fn is_full(&self) -> bool {
        self.first_empty_cell().is_none()
    }

    /// Returns the number of filled cells.
    pub fn n_clues(&self) -> u8 {
        self.0.iter().filter(|&&value| value != 0).count() as u8
    }

    /// Checks whether `digit` could be entered into `cell` without
    /// duplicating it in the cell's row, column or block.
    pub fn is_legal(&self, cell: Cell, digit: Digit) -> bool {
        let value = digit.get();
        for house in [cell.row().house(), cell.col().house(), cell.block().house()] {
            for member in house.cells() {
                if self.0[member.as_index()] == value {
                    return false;
                }
            }
        }
        true
    }

    /// Checks that no row, column or block contains a duplicate digit.
    ///
    /// Both search policies verify this once before descending, so grids
    /// with conflicting givens come out as unsatisfiable instead of
    /// producing a board that merely fills the holes around the conflict.
    pub fn is_consistent(&self) -> bool {
        for house in House::all() {
            let mut seen = DigitSet::NONE;
            for cell in house.cells() {
                if let Some(digit) = self.get(cell) {
                    if seen.contains(digit) {
                        return false;
                    }
                    seen.insert(digit);
                }
            }
        }
        true
    }

    /// Computes the set of digits that could legally be entered into `cell`:
    /// all nine minus those present in its row, column and block.
    ///
    /// Iterating the result yields candidates in ascending order, which is
    /// the order the search engine tries them in.
    pub fn candidates(&self, cell: Cell) -> DigitSet {
        let mut used = DigitSet::NONE;
        for house in [cell.row().house(), cell.col().house(), cell.block().house()] {
            for member in house.cells() {
                if let Some(digit) = self.get(member) {
                    used.insert(digit);
                }
            }
        }
        DigitSet::ALL.without(used)
    }

    /// Checks whether the sudoku is solved: full, with every row, column
    /// and block holding each digit exactly once.
    pub fn is_solved(&self) -> bool {
        self.is_full() && self.is_consistent()
    }

    /// Tries to find a solution and fill it in. Returns `true` if one was
    /// found. If the puzzle is unsatisfiable the grid is left as it was.
    ///
    /// This is the in-place policy: it backtracks by clearing cells again
    /// and stops at the first solution.
    pub fn solve(&mut self) -> bool {
        engine::backtrack::first_solution(self)
    }

    /// Finds a solution, if one exists. If multiple solutions exist, this
    /// stops at the first in candidate order and will not notice the others.
    pub fn solve_one(self) -> Option<Grid> {
        let mut grid = self;
        if grid.solve() {
            Some(grid)
        } else {
            None
        }
    }

    /// Walks the entire search space and returns every solution together
    /// with the explored search tree and timing statistics.
    ///
    /// Each placement snapshots the grid, so this never mutates `self` and
    /// can be handed grids with any number of solutions, including zero.
    pub fn solve_all(self) -> SearchReport {
        engine::enumerate::all_solutions(self)
    }

    /// Returns the grid as an 81 character line with `.` for empty cells.
    pub fn to_str_line(&self) -> String {
        self.0
            .iter()
            .map(|&value| match value {
                0 => '.',
                _ => (b'0' + value) as char,
            })
            .collect()
    }
}

impl fmt::Display for Grid {
    /// Renders the boxed 9x9 layout: a dashed rule before every band and
    /// after the last row, `|` separators around every block of 3 cells,
    /// a single space for empty cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const RULE: &str = " -----------------------";
        for row in 0..9 {
            if row % 3 == 0 {
                writeln!(f, "{}", RULE)?;
            }
            for col in 0..9 {
                if col % 3 == 0 {
                    write!(f, "| ")?;
                }
                match self.0[row * 9 + col] {
                    0 => write!(f, "  ")?,
                    value => write!(f, "{} ", value)?,
                }
            }
            writeln!(f, "|")?;
        }
        write!(f, "{}", RULE)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid({})", self.to_str_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSIC: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

    #[test]
    fn parse_rejects_short_input() {
        assert_eq!(
            Grid::from_str_line(&CLASSIC[..80]),
            Err(LineParseError::NotEnoughCells(80)),
        );
    }

    #[test]
    fn parse_rejects_long_input() {
        let line = format!("{}5", CLASSIC);
        assert_eq!(Grid::from_str_line(&line), Err(LineParseError::TooManyCells));
    }

    #[test]
    fn parse_rejects_invalid_characters() {
        let line = format!("{}x{}", &CLASSIC[..17], &CLASSIC[18..]);
        let err = Grid::from_str_line(&line).unwrap_err();
        match err {
            LineParseError::InvalidEntry(entry) => {
                assert_eq!(entry.cell, 17);
                assert_eq!(entry.ch, 'x');
                assert_eq!(entry.row(), 1);
                assert_eq!(entry.col(), 8);
                assert_eq!(entry.block(), 2);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn parse_accepts_all_empty_markers() {
        let dots: String = CLASSIC
            .chars()
            .map(|ch| if ch == '0' { '.' } else { ch })
            .collect();
        let underscores: String = CLASSIC
            .chars()
            .map(|ch| if ch == '0' { '_' } else { ch })
            .collect();
        let grid = Grid::from_str_line(CLASSIC).unwrap();
        assert_eq!(Grid::from_str_line(&dots).unwrap(), grid);
        assert_eq!(Grid::from_str_line(&underscores).unwrap(), grid);
    }

    #[test]
    fn permissive_parse_skips_short_lines() {
        assert_eq!(Grid::from_str_line_permissive(""), None);
        assert_eq!(Grid::from_str_line_permissive(&CLASSIC[..80]), None);
    }

    #[test]
    fn permissive_parse_maps_junk_to_empty() {
        let junk: String = CLASSIC
            .chars()
            .map(|ch| if ch == '0' { '?' } else { ch })
            .collect();
        let grid = Grid::from_str_line_permissive(&junk).unwrap();
        assert_eq!(grid, Grid::from_str_line(CLASSIC).unwrap());
        // anything past the 81st character is ignored
        let long = format!("{} trailing comment", CLASSIC);
        assert_eq!(Grid::from_str_line_permissive(&long), Some(grid));
    }

    #[test]
    fn from_bytes_rejects_out_of_range_values() {
        let mut bytes = [0; N_CELLS];
        bytes[13] = 10;
        assert!(Grid::from_bytes(bytes).is_err());
    }

    #[test]
    fn candidates_exclude_row_col_and_block() {
        let grid = Grid::from_str_line(CLASSIC).unwrap();
        // cell 2: row has {5, 3, 7}, column has {8, 9}, block has {5, 3, 6, 9, 8}
        let candidates = grid.candidates(Cell::new(2));
        let digits: Vec<u8> = candidates.into_iter().map(Digit::get).collect();
        assert_eq!(digits, [1, 2, 4]);
    }

    #[test]
    fn legality_matches_candidates() {
        let grid = Grid::from_str_line(CLASSIC).unwrap();
        for cell in Cell::all() {
            if grid.get(cell).is_some() {
                continue;
            }
            let candidates = grid.candidates(cell);
            for digit in Digit::all() {
                assert_eq!(grid.is_legal(cell, digit), candidates.contains(digit));
            }
        }
    }

    #[test]
    fn consistency_detects_duplicates() {
        let grid = Grid::from_str_line(CLASSIC).unwrap();
        assert!(grid.is_consistent());

        let mut in_row = grid;
        in_row.place(Cell::new(1), Digit::new(5)); // 5 already in row 0
        assert!(!in_row.is_consistent());

        let mut in_col = grid;
        in_col.place(Cell::new(9), Digit::new(5)); // 5 already in column 0
        assert!(!in_col.is_consistent());
    }

    #[test]
    fn display_matches_boxed_layout() {
        let grid = Grid::from_str_line(CLASSIC).unwrap();
        let expected = "\
 -----------------------
| 5 3   |   7   |       |
| 6     | 1 9 5 |       |
|   9 8 |       |   6   |
 -----------------------
| 8     |   6   |     3 |
| 4     | 8   3 |     1 |
| 7     |   2   |     6 |
 -----------------------
|   6   |       | 2 8   |
|       | 4 1 9 |     5 |
|       |   8   |   7 9 |
 -----------------------";
        assert_eq!(grid.to_string(), expected);
    }

    #[test]
    fn rendering_is_idempotent() {
        let grid = Grid::from_str_line(CLASSIC).unwrap();
        assert_eq!(grid.to_string(), grid.to_string());
        assert_eq!(grid.to_str_line(), grid.to_str_line());
    }

    #[test]
    fn line_roundtrip() {
        let grid = Grid::from_str_line(CLASSIC).unwrap();
        let line = grid.to_str_line();
        assert_eq!(Grid::from_str_line(&line).unwrap(), grid);
        assert_eq!(grid.n_clues(), 30);
    }
}
