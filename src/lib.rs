pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig};
pub use crate::core::{
    launcher::{BestEffort, ShellRunner, StackLauncher},
    seed_engine::SeedEngine,
};
pub use domain::settings::{OutputFormat, OutputSettings, SeedSettings};
pub use utils::error::{Result, SeedError};
