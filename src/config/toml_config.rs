use crate::domain::settings::{OutputSettings, SeedSettings};
use crate::utils::error::{Result, SeedError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub generator: SeedSettings,
    pub output: OutputSettings,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SeedError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SeedError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SEED})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SeedError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.generator.validate()?;
        self.output.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::settings::OutputFormat;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[generator]
address_count = 120
min_addresses_per_city = 3
chain_count = 4
hotels_per_chain = 10
min_hotels_per_area = 2
seed = 99

[output]
output_path = "./seed-output"
formats = ["sql", "csv"]

[output.compression]
enabled = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.generator.address_count, 120);
        assert_eq!(config.generator.seed, Some(99));
        assert_eq!(config.output.formats, vec![OutputFormat::Sql, OutputFormat::Csv]);
        assert!(config.output.compression_enabled());
        assert_eq!(
            config.output.compression.as_ref().unwrap().filename,
            "seed_output.zip"
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config = TomlConfig::from_toml_str("[generator]\nchain_count = 2\n").unwrap();
        assert_eq!(config.generator.chain_count, 2);
        assert_eq!(config.generator.address_count, 50);
        assert_eq!(config.output, OutputSettings::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("EHOTEL_SEED_OUTPUT_DIR", "/tmp/ehotel");

        let toml_content = r#"
[output]
output_path = "${EHOTEL_SEED_OUTPUT_DIR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output.output_path.as_deref(), Some("/tmp/ehotel"));

        std::env::remove_var("EHOTEL_SEED_OUTPUT_DIR");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[generator]
address_count = 10
chain_count = 5
hotels_per_chain = 8
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_format_is_a_parse_error() {
        let result = TomlConfig::from_toml_str("[output]\nformats = [\"xml\"]\n");
        assert!(matches!(result, Err(SeedError::ConfigError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[generator]\nhotels_per_chain = 6\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.generator.hotels_per_chain, 6);
    }
}
