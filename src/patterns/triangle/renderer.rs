//! Right triangle renderer
use tracing::{debug, trace};

use crate::core::error::PatternResult;
use crate::core::options::RenderOptions;
use crate::core::renderer::{PatternDocument, PatternRenderer};
use crate::core::size::Size;
use crate::core::terminal::{TerminalColor, TerminalContext};
use crate::patterns::triangle::layout::TriangleCells;

/// Symbol printed for every cell, trailing space included.
pub const SYMBOL: &str = "* ";

pub struct TriangleRenderer;

impl PatternRenderer for TriangleRenderer {
    fn render(size: Size, _opts: &RenderOptions, ctx: &mut TerminalContext<'_>) -> PatternResult<()> {
        let cells = TriangleCells::new(size);
        debug!(n = size.get(), total = cells.total(), "rendering triangle");

        for cell in cells {
            ctx.print_colored(SYMBOL, TerminalColor::cycle(cell.row))?;
            if cell.row_end {
                ctx.end_line()?;
                trace!(row = cell.row, "row complete");
            }
        }
        Ok(())
    }

    fn document(size: Size, _opts: &RenderOptions) -> PatternDocument {
        PatternDocument::Triangle {
            n: size,
            lines: triangle_lines(size),
        }
    }
}

/// Rendered lines without their terminating newline.
pub fn triangle_lines(size: Size) -> Vec<String> {
    let mut lines = Vec::with_capacity(size.get() as usize);
    let mut line = String::new();
    for cell in TriangleCells::new(size) {
        line.push_str(SYMBOL);
        if cell.row_end {
            lines.push(std::mem::take(&mut line));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_text(n: i64) -> String {
        let mut buf = Vec::new();
        let mut ctx = TerminalContext::new(&mut buf, false);
        TriangleRenderer::render(Size::new(n).unwrap(), &RenderOptions::default(), &mut ctx).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn height_four() {
        assert_eq!(render_text(4), "* \n* * \n* * * \n* * * * \n");
    }

    #[test]
    fn height_one() {
        assert_eq!(render_text(1), "* \n");
    }

    #[test]
    fn lines_agree_with_text() {
        for n in 1..=12 {
            let joined: String = triangle_lines(Size::new(n).unwrap())
                .into_iter()
                .map(|l| l + "\n")
                .collect();
            assert_eq!(joined, render_text(n));
        }
    }

    #[test]
    fn document_carries_lines() {
        let doc = TriangleRenderer::document(Size::new(2).unwrap(), &RenderOptions::default());
        assert_eq!(
            doc,
            PatternDocument::Triangle {
                n: Size::new(2).unwrap(),
                lines: vec!["* ".to_string(), "* * ".to_string()],
            }
        );
    }
}
