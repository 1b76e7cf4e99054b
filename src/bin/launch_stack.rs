use anyhow::Context;
use clap::Parser;
use ehotel_seed::utils::logger;
use ehotel_seed::{SeedError, ShellRunner, StackLauncher};

#[derive(Parser)]
#[command(name = "launch-stack")]
#[command(version, about = "Install backend dependencies and restart the local docker-compose stack")]
struct Args {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    Args::parse();
    logger::init_cli_logger(false);

    let root = std::env::current_dir().context("cannot read the current directory")?;

    let launcher = match StackLauncher::new(ShellRunner, &root) {
        Ok(launcher) => launcher,
        Err(e) => exit_with(e),
    };

    match launcher.launch().await {
        Ok(report) => {
            for tolerated in &report.tolerated {
                tracing::warn!("⚠️ Ignored failure: {:?}", tolerated);
            }
            tracing::info!("✅ Stack is up ({} commands run)", report.executed.len());
            Ok(())
        }
        Err(e) => exit_with(e),
    }
}

fn exit_with(e: SeedError) -> ! {
    tracing::error!("💡 {}", e.recovery_suggestion());
    eprintln!("{}", e.user_friendly_message());
    // 任何致命錯誤都以 1 結束
    std::process::exit(1);
}
