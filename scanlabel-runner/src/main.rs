//! 会话命名检查主程序

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use clap::{Parser, Subcommand};
use scanlabel_admin::{init_logging, AuditLog, ConfigManager, RenameRecord, ScanLabelConfig};
use scanlabel_core::SessionQuery;
use scanlabel_dicom::MetadataExtractor;
use scanlabel_integration::JsonCatalog;
use scanlabel_workflow::{LabelValidator, NamingEngine, StudyTagBackfill};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// 会话命名检查命令行参数
#[derive(Parser, Debug)]
#[command(name = "scanlabel-runner")]
#[command(about = "检查新采集会话的标签，按采集元数据重命名并打研究项目标签")]
struct Args {
    /// 配置文件路径
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// 会话目录文件，覆盖配置中的路径
    #[arg(long, global = true)]
    catalog: Option<String>,

    /// 日志级别，覆盖配置中的级别
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// 演练模式，不修改会话
    #[arg(long, global = true)]
    dry_run: bool,

    /// 日志输出到控制台而不是日志文件
    #[arg(long, global = true)]
    stdout_log: bool,

    /// 只处理该日期之后创建的会话，覆盖回溯天数
    #[arg(long, global = true)]
    since: Option<NaiveDate>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 检查并重命名最近创建的会话（默认）
    Rename,
    /// 为已规范命名的会话补打研究项目标签
    BackfillTags,
    /// 读取DICOM文件并输出提取到的元数据
    Inspect {
        /// DICOM文件路径
        file: PathBuf,
    },
    /// 写出默认配置文件
    InitConfig {
        /// 输出路径
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match &args.command {
        Some(Command::InitConfig { path }) => {
            ConfigManager::save_config(&ScanLabelConfig::default(), path).await?;
            println!("Default configuration written to {}", path.display());
            Ok(())
        }
        Some(Command::Inspect { file }) => inspect(file),
        Some(Command::BackfillTags) => {
            let config = load_config(&args)?;
            backfill_tags(&args, &config).await
        }
        Some(Command::Rename) | None => {
            let config = load_config(&args)?;
            rename_sessions(&args, &config).await
        }
    }
}

/// 加载配置并初始化日志
fn load_config(args: &Args) -> Result<ScanLabelConfig> {
    let manager = ConfigManager::new(args.config.as_deref())?;
    let mut config = manager.config().clone();
    if let Some(catalog) = &args.catalog {
        config.repository.catalog_path = catalog.clone();
    }
    config.dry_run |= args.dry_run;

    if let Some(path) = init_logging(&config.logging, args.log_level.as_deref(), args.stdout_log)? {
        println!("Logging to {}", path.display());
    }
    Ok(config)
}

fn validator_from(config: &ScanLabelConfig) -> LabelValidator {
    LabelValidator::new(
        config.naming.recognized_scan_types.iter().cloned(),
        config.naming.recognized_studies.iter().cloned(),
    )
}

fn session_query(args: &Args, lookback_days: Option<i64>) -> Result<SessionQuery> {
    if let Some(since) = args.since {
        let midnight = since
            .and_hms_opt(0, 0, 0)
            .context("Invalid --since date")?;
        return Ok(SessionQuery::created_after(Utc.from_utc_datetime(&midnight)));
    }
    Ok(match lookback_days {
        Some(days) => SessionQuery::created_after(Utc::now() - Duration::days(days)),
        None => SessionQuery::default(),
    })
}

async fn open_catalog(config: &ScanLabelConfig) -> Result<JsonCatalog> {
    let path = &config.repository.catalog_path;
    JsonCatalog::open(path).await.map_err(|e| {
        error!("Could not open session catalog {}: {}", path, e);
        anyhow::anyhow!("Failed to open session catalog {}: {}", path, e)
    })
}

async fn rename_sessions(args: &Args, config: &ScanLabelConfig) -> Result<()> {
    info!(
        "Checking new session names in project {} (last {} days, dry run: {})",
        config.repository.project, config.schedule.lookback_days, config.dry_run
    );

    let catalog = open_catalog(config).await?;
    let query = session_query(args, Some(config.schedule.lookback_days))?;
    let engine = NamingEngine::new(validator_from(config)).with_dry_run(config.dry_run);

    let report = match engine.run(&catalog, &catalog, &query).await {
        Ok(report) => report,
        Err(e) => {
            error!("Could not query sessions: {}", e);
            return Err(e.into());
        }
    };

    let records: Vec<RenameRecord> = report
        .applied_renames()
        .map(|(old_label, new_label)| RenameRecord::new(old_label, new_label, report.run_date))
        .collect();
    if let Err(e) = AuditLog::from_config(&config.logging).append(&records).await {
        error!("Could not record renames: {}", e);
    }

    if !config.dry_run {
        catalog.save().await?;
    }

    info!(
        "Processed {} sessions: {} already correct, {} renamed, {} incomplete, {} need review",
        report.sessions.len(),
        report.already_correct(),
        report.renamed(),
        report.incomplete(),
        report.needing_attention()
    );
    Ok(())
}

async fn backfill_tags(args: &Args, config: &ScanLabelConfig) -> Result<()> {
    info!(
        "Backfilling study tags in project {} (dry run: {})",
        config.repository.project, config.dry_run
    );

    let catalog = open_catalog(config).await?;
    let query = session_query(args, None)?;
    let backfill = StudyTagBackfill::new(validator_from(config), config.dry_run);
    let report = backfill.run(&catalog, &catalog, &query).await?;

    if !config.dry_run {
        catalog.save().await?;
    }

    info!(
        "Tagged {} sessions, skipped {}, failed {}",
        report.tagged(),
        report.skipped(),
        report.failed()
    );
    Ok(())
}

/// 输出单个DICOM文件的元数据记录
fn inspect(file: &Path) -> Result<()> {
    let record = MetadataExtractor::new().record_from_file(file)?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
