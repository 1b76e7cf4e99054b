pub mod cli;
pub mod toml_config;

use crate::domain::settings::{CompressionSettings, OutputFormat, OutputSettings, SeedSettings};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use self::toml_config::TomlConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "ehotel-seed")]
#[command(about = "Generate SQL seed data for the e-hotel Address and Hotel tables")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "Number of addresses to generate [default: 50]")]
    pub addresses: Option<usize>,

    #[arg(long, help = "Addresses drawn per city [default: 2]")]
    pub min_addresses_per_city: Option<usize>,

    #[arg(long, help = "Number of hotel chains [default: 5]")]
    pub chains: Option<usize>,

    #[arg(long, help = "Hotels per chain [default: 8]")]
    pub hotels_per_chain: Option<usize>,

    #[arg(long, help = "Hotels of one chain clustered per city [default: 2]")]
    pub min_hotels_per_area: Option<usize>,

    #[arg(long, help = "Seed for a reproducible run")]
    pub seed: Option<u64>,

    #[arg(long, help = "Write files here instead of printing SQL to stdout")]
    pub output_path: Option<String>,

    #[arg(long, value_delimiter = ',', help = "Output formats: sql, csv, json")]
    pub formats: Vec<String>,

    #[arg(long, help = "Bundle the output files into this zip archive")]
    pub zip: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Validate and show the settings without generating")]
    pub dry_run: bool,
}

impl CliConfig {
    /// 預設值 < TOML < 命令列
    pub fn resolve(&self) -> Result<(SeedSettings, OutputSettings)> {
        let base = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        let mut settings = base.generator;
        let mut output = base.output;

        if let Some(v) = self.addresses {
            settings.address_count = v;
        }
        if let Some(v) = self.min_addresses_per_city {
            settings.min_addresses_per_city = v;
        }
        if let Some(v) = self.chains {
            settings.chain_count = v;
        }
        if let Some(v) = self.hotels_per_chain {
            settings.hotels_per_chain = v;
        }
        if let Some(v) = self.min_hotels_per_area {
            settings.min_hotels_per_area = v;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }

        if self.output_path.is_some() {
            output.output_path = self.output_path.clone();
        }
        if !self.formats.is_empty() {
            output.formats = self
                .formats
                .iter()
                .map(|f| f.parse::<OutputFormat>())
                .collect::<Result<Vec<_>>>()?;
        }
        if let Some(filename) = &self.zip {
            output.compression = Some(CompressionSettings {
                enabled: true,
                filename: filename.clone(),
            });
        }

        settings.validate()?;
        output.validate()?;

        Ok((settings, output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::SeedError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_flags() {
        let config = CliConfig::parse_from(["ehotel-seed"]);
        let (settings, output) = config.resolve().unwrap();
        assert_eq!(settings, SeedSettings::default());
        assert_eq!(output, OutputSettings::default());
    }

    #[test]
    fn test_flags_override_toml() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[generator]\nchain_count = 2\nhotels_per_chain = 3\nseed = 1\n")
            .unwrap();

        let config = CliConfig::parse_from([
            "ehotel-seed",
            "--config",
            file.path().to_str().unwrap(),
            "--chains",
            "4",
            "--formats",
            "sql,json",
            "--output-path",
            "./out",
        ]);
        let (settings, output) = config.resolve().unwrap();

        assert_eq!(settings.chain_count, 4);
        assert_eq!(settings.hotels_per_chain, 3);
        assert_eq!(settings.seed, Some(1));
        assert_eq!(output.formats, vec![OutputFormat::Sql, OutputFormat::Json]);
        assert_eq!(output.output_path.as_deref(), Some("./out"));
    }

    #[test]
    fn test_invalid_combination_is_rejected() {
        let config = CliConfig::parse_from(["ehotel-seed", "--addresses", "30"]);
        assert!(matches!(
            config.resolve(),
            Err(SeedError::AddressPoolTooSmall { .. })
        ));
    }

    #[test]
    fn test_file_formats_require_output_path() {
        let config = CliConfig::parse_from(["ehotel-seed", "--formats", "csv", "--seed", "1"]);
        assert!(matches!(
            config.resolve(),
            Err(SeedError::InvalidConfigValueError { field, .. }) if field == "output.formats"
        ));

        let config = CliConfig::parse_from(["ehotel-seed", "--zip", "x.zip"]);
        assert!(matches!(
            config.resolve(),
            Err(SeedError::InvalidConfigValueError { field, .. }) if field == "output.compression"
        ));

        let config = CliConfig::parse_from([
            "ehotel-seed",
            "--formats",
            "csv",
            "--zip",
            "x.zip",
            "--output-path",
            "./out",
        ]);
        let (_, output) = config.resolve().unwrap();
        assert!(output.compression_enabled());
    }

    #[test]
    fn test_unknown_format_flag() {
        let config = CliConfig::parse_from(["ehotel-seed", "--formats", "xml"]);
        assert!(matches!(
            config.resolve(),
            Err(SeedError::InvalidConfigValueError { .. })
        ));
    }
}
