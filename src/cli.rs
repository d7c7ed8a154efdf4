use std::io::{self, Write};

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use crate::core::error::PatternError;
use crate::core::options::{OutputFormat, RenderOptions};
use crate::patterns::{get_all_patterns, get_pattern, pattern_ids};

#[derive(Parser, Debug)]
#[command(name = "termpat")]
#[command(about = "Print console patterns computed from closed-form arithmetic")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a right triangle with n rows
    Triangle {
        #[command(flatten)]
        args: PatternArgs,
    },
    /// Print a concentric square of side 2n-1
    Square {
        #[command(flatten)]
        args: PatternArgs,

        /// Show which diagonal region each cell is computed in first
        #[arg(long)]
        regions: bool,
    },
    /// List available patterns
    List,
}

#[derive(Args, Debug)]
pub struct PatternArgs {
    /// Size parameter, a positive integer
    #[arg(allow_hyphen_values = true)]
    pub n: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Color rows and rings
    #[arg(long)]
    pub color: bool,
}

impl PatternArgs {
    fn options(&self, regions: bool) -> RenderOptions {
        RenderOptions {
            format: self.format,
            color: self.color,
            regions,
        }
    }
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(cli, &mut out)
}

/// Run a parsed command, writing everything it prints to `out`
///
/// A reader that closes the output early (`| head`) ends the run cleanly.
pub fn execute(cli: Cli, out: &mut dyn Write) -> Result<()> {
    match dispatch(cli, out) {
        Err(err) if is_broken_pipe(&err) => {
            debug!("output closed by reader");
            Ok(())
        }
        result => result,
    }
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.downcast_ref::<PatternError>().is_some_and(PatternError::is_broken_pipe)
        || err.downcast_ref::<io::Error>().is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
}

fn dispatch(cli: Cli, out: &mut dyn Write) -> Result<()> {
    match cli.command {
        Commands::Triangle { args } => render("triangle", &args.n, &args.options(false), out),
        Commands::Square { args, regions } => render("square", &args.n, &args.options(regions), out),
        Commands::List => {
            for info in get_all_patterns().into_iter().map(|p| p.info) {
                writeln!(out, "{}", info.id)?;
                writeln!(out, "   {}", info.name)?;
                writeln!(out, "   {}", info.description)?;
            }
            Ok(())
        }
    }
}

fn render(id: &str, input: &str, opts: &RenderOptions, out: &mut dyn Write) -> Result<()> {
    let entry = get_pattern(id).ok_or_else(|| {
        anyhow!("pattern '{}' not found, available: {}", id, pattern_ids().join(", "))
    })?;
    entry.write_from_input(input, opts, out)?;
    Ok(())
}
