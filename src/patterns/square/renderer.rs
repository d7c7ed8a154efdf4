//! Concentric square renderer
use tracing::{debug, trace};

use crate::core::error::PatternResult;
use crate::core::options::RenderOptions;
use crate::core::renderer::{PatternDocument, PatternRenderer};
use crate::core::size::Size;
use crate::core::terminal::{TerminalColor, TerminalContext};
use crate::patterns::square::layout::{cell_value, square_grid, Region};

pub const REGIONS_HEADER: &str = "Region visualization (U = Upper-left, L = Lower-right):";

pub struct ConcentricSquareRenderer;

impl PatternRenderer for ConcentricSquareRenderer {
    fn render(size: Size, opts: &RenderOptions, ctx: &mut TerminalContext<'_>) -> PatternResult<()> {
        let m = size.grid_dim();
        debug!(n = size.get(), m, regions = opts.regions, "rendering concentric square");

        if opts.regions {
            render_regions(size, ctx)?;
        }

        for i in 0..m {
            for j in 0..m {
                let value = cell_value(size, i, j);
                ctx.print_colored(format_args!("{} ", value), TerminalColor::cycle(value.into()))?;
            }
            ctx.end_line()?;
            trace!(row = i, "row complete");
        }
        Ok(())
    }

    fn document(size: Size, opts: &RenderOptions) -> PatternDocument {
        PatternDocument::Square {
            n: size,
            rows: square_grid(size),
            regions: opts.regions.then(|| region_rows(size)),
        }
    }
}

/// Region map as strings, one symbol per cell.
pub fn region_rows(size: Size) -> Vec<String> {
    let m = size.grid_dim();
    (0..m)
        .map(|i| (0..m).map(|j| Region::classify(size, i, j).symbol()).collect())
        .collect()
}

/// Map of which diagonal region each cell is computed in, then a blank line.
pub fn render_regions(size: Size, ctx: &mut TerminalContext<'_>) -> PatternResult<()> {
    let m = size.grid_dim();
    ctx.print_line(REGIONS_HEADER)?;
    for i in 0..m {
        for j in 0..m {
            ctx.print(format_args!("{} ", Region::classify(size, i, j).symbol()))?;
        }
        ctx.end_line()?;
    }
    ctx.end_line()?;
    Ok(())
}
