use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain console pattern
    #[default]
    Text,
    /// One JSON document describing the pattern
    Json,
}

/// Flags the CLI hands down to the renderers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub color: bool,
    /// Print the square's diagonal region map before the pattern.
    pub regions: bool,
}
