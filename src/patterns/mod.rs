pub mod macros;
pub mod square;
pub mod triangle;

use std::io::Write;

use tracing::debug;

use crate::core::error::PatternResult;
use crate::core::options::{OutputFormat, RenderOptions};
use crate::core::renderer::PatternDocument;
use crate::core::size::Size;
use crate::core::terminal::TerminalContext;
use crate::register_patterns;

/// Metadata about a pattern
#[derive(Clone, Debug)]
pub struct PatternInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub type RenderFn = fn(Size, &RenderOptions, &mut TerminalContext<'_>) -> PatternResult<()>;
pub type DocumentFn = fn(Size, &RenderOptions) -> PatternDocument;

/// Registry entry containing metadata and entry points
#[derive(Clone)]
pub struct PatternEntry {
    pub info: PatternInfo,
    pub render: RenderFn,
    pub document: DocumentFn,
}

impl PatternEntry {
    /// Write the pattern for `size` in the requested format.
    pub fn write_to(&self, size: Size, opts: &RenderOptions, out: &mut dyn Write) -> PatternResult<()> {
        debug!(pattern = self.info.id, n = size.get(), format = ?opts.format, "writing pattern");
        match opts.format {
            OutputFormat::Text => {
                let mut ctx = TerminalContext::new(out, opts.color);
                (self.render)(size, opts, &mut ctx)?;
                ctx.flush()?;
            }
            OutputFormat::Json => {
                let document = (self.document)(size, opts);
                serde_json::to_writer(&mut *out, &document).map_err(std::io::Error::from)?;
                writeln!(out)?;
                out.flush()?;
            }
        }
        Ok(())
    }

    /// Validate raw `input` as the size, then write the pattern.
    ///
    /// Invalid input fails before anything is written.
    pub fn write_from_input(&self, input: &str, opts: &RenderOptions, out: &mut dyn Write) -> PatternResult<()> {
        let size: Size = input.parse()?;
        self.write_to(size, opts, out)
    }
}

/// Ids of every registered pattern, in registration order
pub fn pattern_ids() -> Vec<&'static str> {
    get_all_patterns().into_iter().map(|p| p.info.id).collect()
}

// Register all patterns here - a new pattern only needs a new entry
register_patterns! {
    triangle => {
        renderer: TriangleRenderer,
        id: "triangle",
        name: "Right triangle",
        description: "n rows of stars, row k holding k stars, drawn in a single pass over triangular numbers"
    },
    square => {
        renderer: ConcentricSquareRenderer,
        id: "square",
        name: "Concentric square",
        description: "(2n-1)x(2n-1) grid of ring values, computed by splitting the grid on its anti-diagonal"
    },
}
