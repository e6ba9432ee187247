//! 运行日志与改名审计日志
//!
//! 日志级别含义：debug 无需处理，info 已做修改，warn 需要人工复核，error 无法继续运行。

use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// 本次运行的日志文件路径
pub fn run_log_path(config: &LoggingConfig, started_at: DateTime<Local>) -> PathBuf {
    Path::new(&config.log_dir).join(format!(
        "{}_{}.txt",
        config.file_prefix,
        started_at.format("%Y-%m-%dT%H_%M_%S")
    ))
}

/// 初始化日志，写入文件时返回日志文件路径
pub fn init_logging(
    config: &LoggingConfig,
    level_override: Option<&str>,
    to_stdout: bool,
) -> Result<Option<PathBuf>> {
    let level = level_override.unwrap_or(&config.level);
    let filter = EnvFilter::try_new(level).with_context(|| format!("Invalid log level: {}", level))?;

    if to_stdout {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {}", e))?;
        return Ok(None);
    }

    let path = run_log_path(config, Local::now());
    std::fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("Failed to create log directory {}", config.log_dir))?;
    let file = std::fs::File::create(&path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {}", e))?;

    Ok(Some(path))
}

/// 一条改名记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameRecord {
    pub old_label: String,
    pub new_label: String,
    pub date: NaiveDate,
}

impl RenameRecord {
    pub fn new(old_label: &str, new_label: &str, date: NaiveDate) -> Self {
        Self {
            old_label: old_label.to_string(),
            new_label: new_label.to_string(),
            date,
        }
    }

    /// 格式：旧标签:新标签:日期
    pub fn to_line(&self) -> String {
        format!("{}:{}:{}", self.old_label, self.new_label, self.date.format("%Y-%m-%d"))
    }

    /// 新标签和日期不含冒号，从右侧拆分
    pub fn parse_line(line: &str) -> Option<Self> {
        let (rest, date) = line.trim_end().rsplit_once(':')?;
        let (old_label, new_label) = rest.rsplit_once(':')?;
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
        Some(Self::new(old_label, new_label, date))
    }
}

/// 改名审计日志，只追加
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &LoggingConfig) -> Self {
        Self::new(Path::new(&config.log_dir).join(&config.audit_file))
    }

    /// 追加改名记录，返回写入条数
    pub async fn append(&self, records: &[RenameRecord]) -> Result<usize> {
        if records.is_empty() {
            debug!("No renames to record");
            return Ok(0);
        }

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .context("Failed to create audit log directory")?;
        }

        let mut content = String::new();
        for record in records {
            content.push_str(&record.to_line());
            content.push('\n');
        }

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .with_context(|| format!("Failed to open audit log {}", self.path.display()))?;
        file.write_all(content.as_bytes())
            .await
            .context("Failed to write audit log")?;
        file.flush().await.context("Failed to flush audit log")?;

        info!("Recorded {} renames in {}", records.len(), self.path.display());
        Ok(records.len())
    }

    /// 读取全部改名记录，跳过无法解析的行
    pub async fn read_all(&self) -> Result<Vec<RenameRecord>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e).context("Failed to read audit log"),
        };

        Ok(content.lines().filter_map(RenameRecord::parse_line).collect())
    }
}
