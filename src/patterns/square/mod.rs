//! Concentric square pattern
pub mod layout;
pub mod renderer;

pub use layout::{cell_value, reference_value, square_grid, Region};
pub use renderer::{region_rows, render_regions, ConcentricSquareRenderer};
