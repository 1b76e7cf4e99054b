use crate::utils::error::{Result, SeedError};
use crate::utils::validation::{validate_path, validate_positive_number, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_ADDRESS_COUNT: usize = 50;
pub const DEFAULT_MIN_ADDRESSES_PER_CITY: usize = 2;
pub const DEFAULT_CHAIN_COUNT: usize = 5;
pub const DEFAULT_HOTELS_PER_CHAIN: usize = 8;
pub const DEFAULT_MIN_HOTELS_PER_AREA: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedSettings {
    pub address_count: usize,
    pub min_addresses_per_city: usize,
    pub chain_count: usize,
    pub hotels_per_chain: usize,
    pub min_hotels_per_area: usize,
    pub seed: Option<u64>,
}

impl Default for SeedSettings {
    fn default() -> Self {
        Self {
            address_count: DEFAULT_ADDRESS_COUNT,
            min_addresses_per_city: DEFAULT_MIN_ADDRESSES_PER_CITY,
            chain_count: DEFAULT_CHAIN_COUNT,
            hotels_per_chain: DEFAULT_HOTELS_PER_CHAIN,
            min_hotels_per_area: DEFAULT_MIN_HOTELS_PER_AREA,
            seed: None,
        }
    }
}

impl SeedSettings {
    pub fn total_hotels(&self) -> usize {
        self.chain_count * self.hotels_per_chain
    }
}

impl Validate for SeedSettings {
    fn validate(&self) -> Result<()> {
        validate_positive_number("generator.address_count", self.address_count, 1)?;
        validate_positive_number(
            "generator.min_addresses_per_city",
            self.min_addresses_per_city,
            1,
        )?;
        validate_positive_number("generator.chain_count", self.chain_count, 1)?;
        validate_positive_number("generator.hotels_per_chain", self.hotels_per_chain, 1)?;
        validate_positive_number("generator.min_hotels_per_area", self.min_hotels_per_area, 1)?;

        // address 必須比 hotel 多
        if self.address_count <= self.total_hotels() {
            return Err(SeedError::AddressPoolTooSmall {
                addresses: self.address_count,
                hotels: self.total_hotels(),
            });
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Sql,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sql" => Ok(OutputFormat::Sql),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(SeedError::InvalidConfigValueError {
                field: "output.formats".to_string(),
                value: other.to_string(),
                reason: "Unsupported format. Valid formats: sql, csv, json".to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Sql => "sql",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressionSettings {
    pub enabled: bool,
    #[serde(default = "default_archive_name")]
    pub filename: String,
}

fn default_archive_name() -> String {
    "seed_output.zip".to_string()
}

/// 沒有 output_path 時兩段 SQL 直接印到 stdout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub output_path: Option<String>,
    pub formats: Vec<OutputFormat>,
    pub compression: Option<CompressionSettings>,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            output_path: None,
            formats: vec![OutputFormat::Sql],
            compression: None,
        }
    }
}

impl OutputSettings {
    pub fn compression_enabled(&self) -> bool {
        self.compression.as_ref().map(|c| c.enabled).unwrap_or(false)
    }
}

impl Validate for OutputSettings {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.output_path {
            validate_path("output.output_path", path)?;
        }
        if self.formats.is_empty() {
            return Err(SeedError::InvalidConfigValueError {
                field: "output.formats".to_string(),
                value: "[]".to_string(),
                reason: "At least one output format is required".to_string(),
            });
        }
        if let Some(compression) = &self.compression {
            validate_path("output.compression.filename", &compression.filename)?;
        }

        // 沒有 output_path 時只能把 SQL 印到 stdout
        if self.output_path.is_none() {
            if let Some(format) = self.formats.iter().find(|f| **f != OutputFormat::Sql) {
                return Err(SeedError::InvalidConfigValueError {
                    field: "output.formats".to_string(),
                    value: format.to_string(),
                    reason: "Only sql can be printed to stdout; set output_path".to_string(),
                });
            }
            if self.compression_enabled() {
                return Err(SeedError::InvalidConfigValueError {
                    field: "output.compression".to_string(),
                    value: "enabled".to_string(),
                    reason: "Compression needs output_path".to_string(),
                });
            }
        }
        Ok(())
    }
}
