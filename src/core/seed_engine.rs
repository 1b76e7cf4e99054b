use crate::core::faker::PHONE_MASK;
use crate::core::hotel;
use crate::domain::model::GeneratedSeed;
use crate::domain::ports::Storage;
use crate::domain::settings::{OutputFormat, OutputSettings, SeedSettings};
use crate::utils::error::{Result, SeedError};
use crate::utils::validation::{
    validate_email, validate_mask, validate_non_empty_string, validate_range,
    validate_sql_literal, Validate,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub const SQL_FILE: &str = "seed.sql";
pub const ADDRESS_CSV_FILE: &str = "addresses.csv";
pub const HOTEL_CSV_FILE: &str = "hotels.csv";
pub const JSON_FILE: &str = "seed.json";

#[derive(Debug, Clone)]
pub struct SeedRun {
    pub seed: GeneratedSeed,
    /// 寫入 storage 的檔名；印到 stdout 時為空
    pub written: Vec<String>,
}

pub struct SeedEngine<S: Storage> {
    storage: S,
    settings: SeedSettings,
    output: OutputSettings,
}

impl<S: Storage> SeedEngine<S> {
    pub fn new(storage: S, settings: SeedSettings, output: OutputSettings) -> Self {
        Self {
            storage,
            settings,
            output,
        }
    }

    pub async fn run(&self) -> Result<SeedRun> {
        self.output.validate()?;

        let seed = self.generate()?;
        check_rows(&seed)?;

        let written = if self.output.output_path.is_some() {
            self.load(&seed).await?
        } else {
            Vec::new()
        };

        Ok(SeedRun { seed, written })
    }

    pub fn generate(&self) -> Result<GeneratedSeed> {
        let seed = self
            .settings
            .seed
            .unwrap_or_else(|| rand::thread_rng().gen());
        tracing::info!("🎲 Using seed {}", seed);

        let mut rng = StdRng::seed_from_u64(seed);
        hotel::generate_hotels(&self.settings, seed, &mut rng)
    }

    /// 依輸出格式產生 (檔名, 內容)
    pub fn render(&self, seed: &GeneratedSeed) -> Result<Vec<(String, Vec<u8>)>> {
        let mut files = Vec::new();

        for format in &self.output.formats {
            match format {
                OutputFormat::Sql => {
                    files.push((SQL_FILE.to_string(), seed.sql_script().into_bytes()));
                }
                OutputFormat::Csv => {
                    files.push((ADDRESS_CSV_FILE.to_string(), to_csv(&seed.addresses)?));
                    files.push((HOTEL_CSV_FILE.to_string(), to_csv(&seed.hotels)?));
                }
                OutputFormat::Json => {
                    files.push((JSON_FILE.to_string(), serde_json::to_vec_pretty(seed)?));
                }
            }
        }

        Ok(files)
    }

    pub async fn load(&self, seed: &GeneratedSeed) -> Result<Vec<String>> {
        let files = self.render(seed)?;

        match self.output.compression.as_ref().filter(|c| c.enabled) {
            Some(compression) => {
                tracing::debug!("Creating ZIP file with {} files", files.len());

                let zip_data = {
                    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
                    for (name, data) in &files {
                        zip.start_file::<_, ()>(name.as_str(), FileOptions::default())?;
                        zip.write_all(data)?;
                    }
                    let cursor = zip.finish()?;
                    cursor.into_inner()
                };

                tracing::debug!("Writing ZIP file ({} bytes) to storage", zip_data.len());
                self.storage
                    .write_file(&compression.filename, &zip_data)
                    .await?;
                Ok(vec![compression.filename.clone()])
            }
            None => {
                let mut written = Vec::with_capacity(files.len());
                for (name, data) in files {
                    tracing::debug!("Writing {} ({} bytes)", name, data.len());
                    self.storage.write_file(&name, &data).await?;
                    written.push(name);
                }
                Ok(written)
            }
        }
    }
}

fn to_csv<T: serde::Serialize>(rows: &[T]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| SeedError::IoError(e.into_error()))
}

/// 產生的資料必須符合後端 schema，且能安全地包在單引號裡
pub fn check_rows(seed: &GeneratedSeed) -> Result<()> {
    for address in &seed.addresses {
        for (field, value) in [
            ("address.street_address", &address.street_address),
            ("address.city", &address.city),
            ("address.state", &address.state),
            ("address.postal_code", &address.postal_code),
        ] {
            validate_non_empty_string(field, value)?;
            validate_sql_literal(field, value)?;
        }
    }

    for hotel in &seed.hotels {
        validate_non_empty_string("hotel.name", &hotel.name)?;
        validate_sql_literal("hotel.name", &hotel.name)?;
        validate_sql_literal("hotel.email", &hotel.email)?;
        validate_email("hotel.email", &hotel.email)?;
        validate_mask("hotel.phone_number", &hotel.phone_number, PHONE_MASK)?;
        validate_range("hotel.category", hotel.category, 1, 5)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::settings::CompressionSettings;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                SeedError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    fn seeded() -> SeedSettings {
        SeedSettings {
            seed: Some(2024),
            ..SeedSettings::default()
        }
    }

    #[tokio::test]
    async fn test_stdout_mode_writes_nothing() {
        let storage = MockStorage::new();
        let engine = SeedEngine::new(storage.clone(), seeded(), OutputSettings::default());

        let run = engine.run().await.unwrap();

        assert!(run.written.is_empty());
        assert!(storage.files.lock().await.is_empty());
        assert!(run.seed.sql_script().contains("INSERT INTO Hotel"));
    }

    #[tokio::test]
    async fn test_writes_every_requested_format() {
        let storage = MockStorage::new();
        let output = OutputSettings {
            output_path: Some("./out".to_string()),
            formats: vec![OutputFormat::Sql, OutputFormat::Csv, OutputFormat::Json],
            compression: None,
        };
        let engine = SeedEngine::new(storage.clone(), seeded(), output);

        let run = engine.run().await.unwrap();

        assert_eq!(
            run.written,
            vec![SQL_FILE, ADDRESS_CSV_FILE, HOTEL_CSV_FILE, JSON_FILE]
        );

        let csv = String::from_utf8(storage.get_file(HOTEL_CSV_FILE).await.unwrap()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("chain_id,name,address_id,email,phone_number,category")
        );
        assert_eq!(lines.count(), 40);

        let json: serde_json::Value =
            serde_json::from_slice(&storage.read_file(JSON_FILE).await.unwrap()).unwrap();
        assert_eq!(json["seed"], 2024);
        assert_eq!(json["addresses"].as_array().unwrap().len(), 50);
        assert_eq!(json["hotels"].as_array().unwrap().len(), 40);
    }

    #[tokio::test]
    async fn test_compression_bundles_files() {
        let storage = MockStorage::new();
        let output = OutputSettings {
            output_path: Some("./out".to_string()),
            formats: vec![OutputFormat::Sql, OutputFormat::Json],
            compression: Some(CompressionSettings {
                enabled: true,
                filename: "bundle.zip".to_string(),
            }),
        };
        let engine = SeedEngine::new(storage.clone(), seeded(), output);

        let run = engine.run().await.unwrap();
        assert_eq!(run.written, vec!["bundle.zip"]);

        let zip_data = storage.get_file("bundle.zip").await.unwrap();
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(zip_data)).unwrap();
        assert_eq!(archive.len(), 2);
        assert!(archive.by_name(SQL_FILE).is_ok());
        assert!(archive.by_name(JSON_FILE).is_ok());
    }

    #[test]
    fn test_check_rows_rejects_quotes() {
        let engine = SeedEngine::new(MockStorage::new(), seeded(), OutputSettings::default());
        let mut seed = engine.generate().unwrap();
        assert!(check_rows(&seed).is_ok());

        seed.addresses[0].city = "O'Fallon".to_string();
        assert!(matches!(
            check_rows(&seed),
            Err(SeedError::ValidationError { .. })
        ));
    }
}
