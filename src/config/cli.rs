use crate::config::toml_config::TomlConfig;
use crate::config::CliConfig;
use crate::core::guide::{OutputFormat, Query};
use crate::core::labels::Locale;
use clap::Subcommand;

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Show a one-line summary per catalog
    Overview,
    /// Generate the complete Markdown guide
    Summary,
    /// Show details of a monitoring technique
    Technique {
        /// Technique name as listed (case-insensitive)
        name: String,
    },
    /// Explore symptoms, causes and mitigation of a production problem
    Problem {
        /// Problem name (case-insensitive)
        name: String,
    },
    /// Show details of a use case
    UseCase {
        /// Use case name (case-insensitive)
        name: String,
    },
    /// List every technique, problem and use case
    List,
}

impl From<&Commands> for Query {
    fn from(command: &Commands) -> Self {
        match command {
            Commands::Overview => Query::Overview,
            Commands::Summary => Query::Summary,
            Commands::Technique { name } => Query::Technique(name.clone()),
            Commands::Problem { name } => Query::Problem(name.clone()),
            Commands::UseCase { name } => Query::UseCase(name.clone()),
            Commands::List => Query::List,
        }
    }
}

/// Effective settings after applying command-line overrides on top of the settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub locale: Locale,
    pub format: OutputFormat,
    pub output: Option<String>,
    pub log_level: Option<String>,
    pub json_logs: bool,
    pub verbose: bool,
}

impl Settings {
    pub fn resolve(cli: &CliConfig, file: &TomlConfig) -> Self {
        Self {
            locale: cli.locale.unwrap_or_else(|| file.locale()),
            format: cli.format.unwrap_or_else(|| file.format()),
            output: cli.output.clone().or_else(|| file.output.path.clone()),
            log_level: file.logging.level.clone(),
            json_logs: file.json_logs(),
            verbose: cli.verbose,
        }
    }
}
