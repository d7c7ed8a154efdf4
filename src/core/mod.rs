pub mod error;
pub mod options;
pub mod renderer;
pub mod size;
pub mod terminal;
