//! Types for cells, digits and the grid itself
mod digit;
mod grid;
mod positions;

pub use self::{
    digit::Digit,
    grid::Grid,
    positions::{Block, Cell, Col, House, Row},
};
