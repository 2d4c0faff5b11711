use crate::consts::*;

macro_rules! define_index_types(
    ($( $(#[$attr:meta])* $name:ident : $limit:expr ),* $(,)*) => {
        $(
            $(#[$attr])*
            #[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
            pub struct $name(pub(crate) u8);

            impl $name {
                /// Constructs a new index.
                ///
                /// # Panic
                /// Panics, if the index is out of range.
                pub fn new(idx: u8) -> Self {
                    debug_assert!(idx < $limit);
                    $name(idx)
                }

                /// Constructs a new index, if it is in range.
                pub fn new_checked(idx: u8) -> Option<Self> {
                    if idx < $limit {
                        Some($name(idx))
                    } else {
                        None
                    }
                }

                /// Returns the index contained within.
                pub fn get(self) -> u8 {
                    self.0
                }

                /// Returns the index as `usize` for array access.
                pub fn as_index(self) -> usize {
                    self.0 as _
                }

                /// Returns an iterator over all indices, in ascending order.
                pub fn all() -> impl Iterator<Item = Self> {
                    (0..$limit).map(Self::new)
                }
            }
        )*
    };
);

define_index_types!(
    /// One of the 81 cells, numbered 0..=80 in row-major order.
    Cell: 81,
    /// One of the 9 rows, topmost row is 0.
    Row: 9,
    /// One of the 9 columns, leftmost column is 0.
    Col: 9,
    /// One of the 9 non-overlapping 3x3 blocks, numbered left to right, top to bottom.
    Block: 9,
    /// A row, column or block. Rows are 0..=8, columns 9..=17, blocks 18..=26.
    House: 27,
);

impl Cell {
    /// Returns the row containing this cell.
    #[inline]
    pub fn row(self) -> Row {
        Row(self.0 / 9)
    }

    /// Returns the column containing this cell.
    #[inline]
    pub fn col(self) -> Col {
        Col(self.0 % 9)
    }

    /// Returns the block containing this cell.
    #[inline]
    pub fn block(self) -> Block {
        Block(BLOCK_OF_CELL[self.as_index()])
    }
}

impl Row {
    /// Returns this row as a house.
    pub fn house(self) -> House {
        House(self.0)
    }
}

impl Col {
    /// Returns this column as a house.
    pub fn house(self) -> House {
        House(self.0 + 9)
    }
}

impl Block {
    /// Returns this block as a house.
    pub fn house(self) -> House {
        House(self.0 + 18)
    }
}

impl House {
    /// Returns an iterator over the 9 member cells of this house, in ascending order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        CELLS_BY_HOUSE[self.as_index()].iter().map(|&cell| Cell(cell))
    }
}

// block membership follows from (row / 3, col / 3), tabulated once
#[rustfmt::skip]
static BLOCK_OF_CELL: [u8; N_CELLS] = [
    0, 0, 0, 1, 1, 1, 2, 2, 2,
    0, 0, 0, 1, 1, 1, 2, 2, 2,
    0, 0, 0, 1, 1, 1, 2, 2, 2,
    3, 3, 3, 4, 4, 4, 5, 5, 5,
    3, 3, 3, 4, 4, 4, 5, 5, 5,
    3, 3, 3, 4, 4, 4, 5, 5, 5,
    6, 6, 6, 7, 7, 7, 8, 8, 8,
    6, 6, 6, 7, 7, 7, 8, 8, 8,
    6, 6, 6, 7, 7, 7, 8, 8, 8,
];

// member cells of the 9 rows, then the 9 columns, then the 9 blocks
#[rustfmt::skip]
static CELLS_BY_HOUSE: [[u8; N_CELLS_PER_HOUSE]; N_HOUSES] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8],
    [9, 10, 11, 12, 13, 14, 15, 16, 17],
    [18, 19, 20, 21, 22, 23, 24, 25, 26],
    [27, 28, 29, 30, 31, 32, 33, 34, 35],
    [36, 37, 38, 39, 40, 41, 42, 43, 44],
    [45, 46, 47, 48, 49, 50, 51, 52, 53],
    [54, 55, 56, 57, 58, 59, 60, 61, 62],
    [63, 64, 65, 66, 67, 68, 69, 70, 71],
    [72, 73, 74, 75, 76, 77, 78, 79, 80],

    [0, 9, 18, 27, 36, 45, 54, 63, 72],
    [1, 10, 19, 28, 37, 46, 55, 64, 73],
    [2, 11, 20, 29, 38, 47, 56, 65, 74],
    [3, 12, 21, 30, 39, 48, 57, 66, 75],
    [4, 13, 22, 31, 40, 49, 58, 67, 76],
    [5, 14, 23, 32, 41, 50, 59, 68, 77],
    [6, 15, 24, 33, 42, 51, 60, 69, 78],
    [7, 16, 25, 34, 43, 52, 61, 70, 79],
    [8, 17, 26, 35, 44, 53, 62, 71, 80],

    [0, 1, 2, 9, 10, 11, 18, 19, 20],
    [3, 4, 5, 12, 13, 14, 21, 22, 23],
    [6, 7, 8, 15, 16, 17, 24, 25, 26],
    [27, 28, 29, 36, 37, 38, 45, 46, 47],
    [30, 31, 32, 39, 40, 41, 48, 49, 50],
    [33, 34, 35, 42, 43, 44, 51, 52, 53],
    [54, 55, 56, 63, 64, 65, 72, 73, 74],
    [57, 58, 59, 66, 67, 68, 75, 76, 77],
    [60, 61, 62, 69, 70, 71, 78, 79, 80],
];
