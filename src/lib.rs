pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::storage::LocalStorage;
pub use config::{toml_config::TomlConfig, CliConfig, Commands, Settings};
pub use crate::core::{
    catalog::Catalogs,
    guide::{Guide, OutputFormat, Query},
    labels::Locale,
};
pub use utils::error::{GuideError, Result};
