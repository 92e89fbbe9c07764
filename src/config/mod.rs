pub mod cli;
pub mod toml_config;

use crate::core::guide::OutputFormat;
use crate::core::labels::Locale;
use clap::Parser;

pub use cli::{Commands, Settings};

#[derive(Debug, Clone, Parser)]
#[command(name = "monitoring-guide")]
#[command(
    about = "Educational reference for monitoring machine learning models in production",
    version
)]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Commands,

    /// Optional TOML settings file
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Label language for rendered documents
    #[arg(long, global = true, value_enum)]
    pub locale: Option<Locale>,

    /// Render as text/Markdown or JSON
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the document to this file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}
