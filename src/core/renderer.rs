//! Pattern renderer trait the registry dispatches through
use serde::Serialize;

use crate::core::error::PatternResult;
use crate::core::options::RenderOptions;
use crate::core::size::Size;
use crate::core::terminal::TerminalContext;

/// Every pattern implements this - the registry macro wires it up
pub trait PatternRenderer {
    /// Write the text pattern for `size` into the context
    fn render(size: Size, opts: &RenderOptions, ctx: &mut TerminalContext<'_>) -> PatternResult<()>;

    /// Structured form of the same pattern, used for JSON output
    fn document(size: Size, opts: &RenderOptions) -> PatternDocument;
}

/// JSON document emitted by `--format json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "pattern", rename_all = "snake_case")]
pub enum PatternDocument {
    Triangle { n: Size, lines: Vec<String> },
    Square {
        n: Size,
        rows: Vec<Vec<u32>>,
        /// Region map rows, one `U`/`L` per cell, present with `--regions`
        #[serde(skip_serializing_if = "Option::is_none")]
        regions: Option<Vec<String>>,
    },
}
