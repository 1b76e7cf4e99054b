use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("City pool exhausted after {attempts} consecutive draws could not reach {min_per_city} addresses per city")]
    CityPoolExhausted { attempts: usize, min_per_city: usize },

    #[error("Address pool too small: {addresses} addresses cannot host {hotels} hotels")]
    AddressPoolTooSmall { addresses: usize, hotels: usize },

    #[error("No unused address left while filling chain {chain_id}")]
    AddressPoolExhausted { chain_id: u32 },

    #[error("Directory '{path}' not found")]
    MissingDirectory { path: String },

    #[error("Command '{command}' failed with exit code {exit_code}")]
    CommandFailed { command: String, exit_code: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Generation,
    Output,
    Process,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SeedError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SeedError::ConfigError { .. } | SeedError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            SeedError::ValidationError { .. }
            | SeedError::CityPoolExhausted { .. }
            | SeedError::AddressPoolTooSmall { .. }
            | SeedError::AddressPoolExhausted { .. } => ErrorCategory::Generation,
            SeedError::ZipError(_)
            | SeedError::CsvError(_)
            | SeedError::IoError(_)
            | SeedError::SerializationError(_) => ErrorCategory::Output,
            SeedError::MissingDirectory { .. } | SeedError::CommandFailed { .. } => {
                ErrorCategory::Process
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 重跑 (換 seed) 可能就會成功
            SeedError::CityPoolExhausted { .. } | SeedError::AddressPoolExhausted { .. } => {
                ErrorSeverity::Medium
            }
            SeedError::IoError(_) | SeedError::ZipError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// 程序結束碼。啟動器的致命錯誤一律為 1。
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Process => 1,
            _ => match self.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            },
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SeedError::ConfigError { .. } => {
                "Check the TOML file syntax and section names".to_string()
            }
            SeedError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and run again", field)
            }
            SeedError::ValidationError { .. } => {
                "Generated data did not match the schema; try another --seed".to_string()
            }
            SeedError::CityPoolExhausted { .. } => {
                "Lower --min-addresses-per-city or run again with another --seed".to_string()
            }
            SeedError::AddressPoolTooSmall { .. } => {
                "Raise --addresses or lower --chains / --hotels-per-chain".to_string()
            }
            SeedError::AddressPoolExhausted { .. } => "Raise --addresses".to_string(),
            SeedError::MissingDirectory { path } => {
                format!("Run from the project root that contains '{}'", path)
            }
            SeedError::CommandFailed { command, .. } => {
                format!("Run '{}' manually to see the full output", command)
            }
            SeedError::IoError(_) | SeedError::ZipError(_) => {
                "Check that the output path exists and is writable".to_string()
            }
            SeedError::CsvError(_) | SeedError::SerializationError(_) => {
                "Try the sql output format".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Generation => format!("Could not generate seed data: {}", self),
            ErrorCategory::Output => format!("Could not write output: {}", self),
            ErrorCategory::Process => format!("Error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SeedError>;
