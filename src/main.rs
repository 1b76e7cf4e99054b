use clap::Parser;
use ehotel_seed::domain::settings::{OutputSettings, SeedSettings};
use ehotel_seed::utils::logger;
use ehotel_seed::{CliConfig, LocalStorage, SeedEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("🚀 Starting ehotel-seed");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 合併 TOML 與命令列並驗證
    let (settings, output) = match config.resolve() {
        Ok(resolved) => resolved,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    if config.dry_run {
        display_settings_summary(&settings, &output);
        return Ok(());
    }

    let storage = LocalStorage::new(output.output_path.clone().unwrap_or_else(|| ".".to_string()));
    let engine = SeedEngine::new(storage, settings, output);

    match engine.run().await {
        Ok(run) if run.written.is_empty() => {
            print!("{}", run.seed.sql_script());
        }
        Ok(run) => {
            tracing::info!("✅ Seed data written: {}", run.written.join(", "));
            eprintln!("✅ Seed data written: {}", run.written.join(", "));
        }
        Err(e) => {
            tracing::error!(
                "❌ Seed generation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_settings_summary(settings: &SeedSettings, output: &OutputSettings) {
    // stdout 只放 SQL，摘要寫到 stderr
    eprintln!("📋 Seed Settings:");
    eprintln!("  Addresses: {}", settings.address_count);
    eprintln!("  Min addresses per city: {}", settings.min_addresses_per_city);
    eprintln!(
        "  Chains: {} x {} hotels ({} total)",
        settings.chain_count,
        settings.hotels_per_chain,
        settings.total_hotels()
    );
    eprintln!("  Min hotels per area: {}", settings.min_hotels_per_area);
    match settings.seed {
        Some(seed) => eprintln!("  Seed: {}", seed),
        None => eprintln!("  Seed: random"),
    }
    match &output.output_path {
        Some(path) => {
            let formats: Vec<String> = output.formats.iter().map(|f| f.to_string()).collect();
            eprintln!("  Output: {} ({})", path, formats.join(", "));
            if let Some(compression) = &output.compression {
                if output.compression_enabled() {
                    eprintln!("  Compression: {} (ZIP)", compression.filename);
                }
            }
        }
        None => eprintln!("  Output: stdout (sql)"),
    }
    eprintln!("🔍 DRY RUN - nothing generated");
}
