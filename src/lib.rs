pub mod cli;
pub mod core;
pub mod patterns;

// Re-export for convenience
pub use crate::core::error::{PatternError, PatternResult};
pub use crate::core::options::{OutputFormat, RenderOptions};
pub use crate::core::renderer::{PatternDocument, PatternRenderer};
pub use crate::core::size::Size;
pub use crate::core::terminal::TerminalContext;
