use crate::domain::ports::CommandRunner;
use crate::utils::error::{Result, SeedError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub const BACKEND_DIR: &str = "backend";
pub const PG_VOLUME: &str = "e-hotel_pgdata";

pub const INSTALL_COMMAND: &str = "npm install";
pub const STACK_DOWN_COMMAND: &str = "docker-compose down";
pub const STACK_UP_COMMAND: &str = "docker-compose up --build";

pub fn volume_remove_command() -> String {
    format!("docker volume rm {}", PG_VOLUME)
}

/// 可容忍失敗的步驟結果，失敗只記錄不中斷
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BestEffort {
    Completed,
    Failed {
        command: String,
        /// `None` 代表連程序都沒能啟動
        exit_code: Option<i32>,
    },
}

impl BestEffort {
    pub fn is_completed(&self) -> bool {
        matches!(self, BestEffort::Completed)
    }
}

#[derive(Debug, Clone, Default)]
pub struct LaunchReport {
    pub executed: Vec<String>,
    pub tolerated: Vec<BestEffort>,
}

/// 透過系統 shell 執行，stdout/stderr 直接繼承
#[derive(Debug, Clone, Default)]
pub struct ShellRunner;

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, command: &str, working_dir: &Path) -> Result<i32> {
        let mut cmd = if cfg!(windows) {
            let mut cmd = tokio::process::Command::new("cmd");
            cmd.args(["/C", command]);
            cmd
        } else {
            let mut cmd = tokio::process::Command::new("sh");
            cmd.args(["-c", command]);
            cmd
        };

        let status = cmd.current_dir(working_dir).status().await?;
        // 被 signal 結束時沒有結束碼
        Ok(status.code().unwrap_or(-1))
    }
}

pub struct StackLauncher<R: CommandRunner> {
    runner: R,
    working_dir: PathBuf,
}

impl<R: CommandRunner> StackLauncher<R> {
    /// `root` 底下必須有 `backend/`，否則不執行任何指令
    pub fn new(runner: R, root: impl AsRef<Path>) -> Result<Self> {
        let working_dir = root.as_ref().join(BACKEND_DIR);
        if !working_dir.is_dir() {
            return Err(SeedError::MissingDirectory {
                path: BACKEND_DIR.to_string(),
            });
        }

        let working_dir = working_dir.canonicalize()?;
        tracing::info!("📂 Working directory: {}", working_dir.display());

        Ok(Self {
            runner,
            working_dir,
        })
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub async fn run_required(&self, command: &str) -> Result<()> {
        tracing::info!("▶️ Running: {}", command);
        let exit_code = self.runner.run(command, &self.working_dir).await?;

        if exit_code != 0 {
            tracing::error!("❌ Command '{}' failed with exit code {}", command, exit_code);
            return Err(SeedError::CommandFailed {
                command: command.to_string(),
                exit_code,
            });
        }
        Ok(())
    }

    pub async fn run_best_effort(&self, command: &str) -> BestEffort {
        tracing::info!("▶️ Running: {}", command);
        match self.runner.run(command, &self.working_dir).await {
            Ok(0) => BestEffort::Completed,
            Ok(exit_code) => {
                tracing::warn!(
                    "⚠️ Command '{}' failed with exit code {}, continuing",
                    command,
                    exit_code
                );
                BestEffort::Failed {
                    command: command.to_string(),
                    exit_code: Some(exit_code),
                }
            }
            Err(e) => {
                tracing::warn!("⚠️ Command '{}' could not start: {}, continuing", command, e);
                BestEffort::Failed {
                    command: command.to_string(),
                    exit_code: None,
                }
            }
        }
    }

    /// 安裝依賴、關掉舊的 stack、移除資料庫 volume，再重新 build 並啟動
    pub async fn launch(&self) -> Result<LaunchReport> {
        let mut report = LaunchReport::default();

        self.run_required(INSTALL_COMMAND).await?;
        report.executed.push(INSTALL_COMMAND.to_string());

        self.run_required(STACK_DOWN_COMMAND).await?;
        report.executed.push(STACK_DOWN_COMMAND.to_string());

        // volume 不存在時會失敗，可以忽略
        let volume_rm = volume_remove_command();
        let outcome = self.run_best_effort(&volume_rm).await;
        report.executed.push(volume_rm);
        if !outcome.is_completed() {
            report.tolerated.push(outcome);
        }

        self.run_required(STACK_UP_COMMAND).await?;
        report.executed.push(STACK_UP_COMMAND.to_string());

        Ok(report)
    }
}
