// Board dimensions. The engine is hardwired to classic 9x9 sudoku.
pub(crate) const N_CELLS: usize = 81;
pub(crate) const N_HOUSES: usize = 27;
pub(crate) const N_CELLS_PER_HOUSE: usize = 9;
