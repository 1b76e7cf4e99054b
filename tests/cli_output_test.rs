use ehotel_seed::core::sql::{ADDRESS_INSERT_HEADER, HOTEL_INSERT_HEADER};
use ehotel_seed::{LocalStorage, OutputSettings, SeedEngine, SeedSettings};
use std::process::Command;
use tempfile::TempDir;

fn expected_script(seed: u64) -> String {
    let settings = SeedSettings {
        seed: Some(seed),
        ..SeedSettings::default()
    };
    let engine = SeedEngine::new(LocalStorage::new("."), settings, OutputSettings::default());
    engine.generate().unwrap().sql_script()
}

#[test]
fn test_stdout_carries_only_sql_even_when_verbose() {
    let temp_dir = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_ehotel-seed"))
        .args(["--seed", "5", "-v"])
        .current_dir(temp_dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, expected_script(5));

    // Address 先、Hotel 後
    assert!(stdout.starts_with(ADDRESS_INSERT_HEADER));
    let hotel_at = stdout.find(HOTEL_INSERT_HEADER).unwrap();
    assert!(hotel_at > ADDRESS_INSERT_HEADER.len());

    // 日誌只寫到 stderr
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Using seed 5"), "{}", stderr);
    assert!(!stdout.contains("Using seed"));

    // stdout 模式不落地任何檔案
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_file_formats_without_output_path_fail_before_printing() {
    let output = Command::new(env!("CARGO_BIN_EXE_ehotel-seed"))
        .args(["--seed", "5", "--formats", "csv"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("output.formats"), "{}", stderr);
}
