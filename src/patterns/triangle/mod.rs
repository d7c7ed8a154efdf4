//! Right triangle pattern
pub mod layout;
pub mod renderer;

pub use layout::{triangular, TriangleCell, TriangleCells};
pub use renderer::{triangle_lines, TriangleRenderer};
