//! 配置管理
//!
//! 内置默认值，之后依次叠加TOML配置文件和 `SCANLABEL__` 前缀的环境变量

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use scanlabel_core::{ScanType, Study};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{error, info};

/// 环境变量前缀
pub const ENV_PREFIX: &str = "SCANLABEL";

/// 配置管理器
#[derive(Debug)]
pub struct ConfigManager {
    /// 配置数据
    config: ScanLabelConfig,
    /// 配置验证器
    validator: ConfigValidator,
}

/// 系统完整配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanLabelConfig {
    /// 演练模式，不修改会话
    pub dry_run: bool,
    /// 命名规则配置
    pub naming: NamingConfig,
    /// 会话仓库配置
    pub repository: RepositoryConfig,
    /// 运行周期配置
    pub schedule: ScheduleConfig,
    /// 日志配置
    pub logging: LoggingConfig,
}

/// 命名规则配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingConfig {
    /// 视为规范的扫描类型
    pub recognized_scan_types: Vec<String>,
    /// 视为规范的研究项目
    pub recognized_studies: Vec<String>,
}

/// 会话仓库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// 项目名称，仅用于日志
    pub project: String,
    /// 会话目录文件路径
    pub catalog_path: String,
}

/// 运行周期配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// 只处理最近多少天内创建的会话
    pub lookback_days: i64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: String,
    /// 日志目录
    pub log_dir: String,
    /// 运行日志文件名前缀
    pub file_prefix: String,
    /// 改名审计日志文件名
    pub audit_file: String,
}

/// 配置验证器
#[derive(Debug)]
pub struct ConfigValidator {
    /// 验证规则
    validation_rules: Vec<ValidationRule>,
}

/// 验证规则
#[derive(Debug)]
struct ValidationRule {
    /// 字段路径
    field_path: String,
    /// 验证函数
    validator: fn(&ScanLabelConfig) -> Result<()>,
    /// 错误消息
    error_message: String,
}

impl ConfigManager {
    /// 创建新的配置管理器
    pub fn new(config_path: Option<&str>) -> Result<Self> {
        let config = Self::load_config(config_path)?;
        let validator = ConfigValidator::new();
        validator.validate(&config)?;

        Ok(Self {
            config,
            validator,
        })
    }

    /// 加载配置
    fn load_config(config_path: Option<&str>) -> Result<ScanLabelConfig> {
        let defaults = Config::try_from(&ScanLabelConfig::default())
            .context("Failed to build default configuration")?;

        let mut builder = Config::builder().add_source(defaults);
        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path));
        }
        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("naming.recognized_scan_types")
                    .with_list_parse_key("naming.recognized_studies")
                    .try_parsing(true),
            )
            .build()?;

        let config: ScanLabelConfig = settings
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        match config_path {
            Some(path) => info!("Configuration loaded successfully from: {}", path),
            None => info!("Using built-in configuration defaults"),
        }
        Ok(config)
    }

    /// 获取配置
    pub fn config(&self) -> &ScanLabelConfig {
        &self.config
    }

    /// 验证配置
    pub fn validate_config(&self) -> Result<()> {
        self.validator.validate(&self.config)
    }

    /// 保存配置到文件
    pub async fn save_config(config: &ScanLabelConfig, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let config_str = toml::to_string_pretty(config)
            .context("Failed to serialize configuration")?;

        tokio::fs::write(path, config_str)
            .await
            .context("Failed to write configuration file")?;

        info!("Configuration saved to: {}", path.display());
        Ok(())
    }
}

impl ConfigValidator {
    /// 创建新的配置验证器
    pub fn new() -> Self {
        let validation_rules = vec![
            ValidationRule {
                field_path: "naming.recognized_scan_types".to_string(),
                validator: |config| {
                    let scan_types = &config.naming.recognized_scan_types;
                    if scan_types.is_empty() {
                        return Err(anyhow::anyhow!("Recognized scan types cannot be empty"));
                    }
                    for scan_type in scan_types {
                        scan_type.parse::<ScanType>()?;
                    }
                    Ok(())
                },
                error_message: "Invalid recognized scan types".to_string(),
            },
            ValidationRule {
                field_path: "naming.recognized_studies".to_string(),
                validator: |config| {
                    let studies = &config.naming.recognized_studies;
                    if studies.is_empty() {
                        return Err(anyhow::anyhow!("Recognized studies cannot be empty"));
                    }
                    for study in studies {
                        study.parse::<Study>()?;
                    }
                    Ok(())
                },
                error_message: "Invalid recognized studies".to_string(),
            },
            ValidationRule {
                field_path: "schedule.lookback_days".to_string(),
                validator: |config| {
                    if config.schedule.lookback_days <= 0 {
                        Err(anyhow::anyhow!("Lookback days must be positive"))
                    } else {
                        Ok(())
                    }
                },
                error_message: "Invalid lookback window".to_string(),
            },
            ValidationRule {
                field_path: "logging.audit_file".to_string(),
                validator: |config| {
                    if config.logging.audit_file.trim().is_empty() {
                        Err(anyhow::anyhow!("Audit file name cannot be empty"))
                    } else {
                        Ok(())
                    }
                },
                error_message: "Invalid audit log".to_string(),
            },
        ];

        Self { validation_rules }
    }

    /// 验证配置
    pub fn validate(&self, config: &ScanLabelConfig) -> Result<()> {
        for rule in &self.validation_rules {
            if let Err(e) = (rule.validator)(config) {
                error!("Configuration validation failed for {}: {}", rule.field_path, e);
                return Err(anyhow::anyhow!("{}: {}", rule.error_message, e));
            }
        }

        info!("Configuration validation passed");
        Ok(())
    }
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            recognized_scan_types: ["3T", "7T", "PI2620PET", "FBBPET", "AV1451PET", "FDGPET"]
                .map(str::to_string)
                .to_vec(),
            recognized_studies: ["ABC", "ABCD2", "VCID", "LEADS", "YMTL", "MPC"]
                .map(str::to_string)
                .to_vec(),
        }
    }
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            project: "NACC-SC".to_string(),
            catalog_path: "./data/sessions.json".to_string(),
        }
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self { lookback_days: 7 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
            log_dir: "./logs".to_string(),
            file_prefix: "log_check_new_session_names".to_string(),
            audit_file: "all_fw_session_renames.txt".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ScanLabelConfig::default();
        assert!(ConfigValidator::new().validate(&config).is_ok());
        assert_eq!(config.schedule.lookback_days, 7);
        assert!(!config.dry_run);
        assert!(config.naming.recognized_studies.contains(&"MPC".to_string()));
    }

    #[test]
    fn test_validator_rejects_unknown_names_and_bad_window() {
        let validator = ConfigValidator::new();

        let mut config = ScanLabelConfig::default();
        config.naming.recognized_studies.push("999".to_string());
        assert!(validator.validate(&config).is_err());

        let mut config = ScanLabelConfig::default();
        config.naming.recognized_scan_types.clear();
        assert!(validator.validate(&config).is_err());

        let mut config = ScanLabelConfig::default();
        config.schedule.lookback_days = 0;
        assert!(validator.validate(&config).is_err());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scanlabel.toml");
        std::fs::write(
            &path,
            r#"
dry_run = true

[schedule]
lookback_days = 30

[naming]
recognized_studies = ["ABC", "LEADS"]
"#,
        )
        .unwrap();

        let manager = ConfigManager::new(path.to_str()).unwrap();
        let config = manager.config();
        assert!(config.dry_run);
        assert_eq!(config.schedule.lookback_days, 30);
        assert_eq!(config.naming.recognized_studies, vec!["ABC", "LEADS"]);
        // 未覆盖的字段保持默认值
        assert_eq!(config.naming.recognized_scan_types.len(), 6);
        assert_eq!(config.logging.audit_file, "all_fw_session_renames.txt");
    }

    #[tokio::test]
    async fn test_saved_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.toml");

        let mut config = ScanLabelConfig::default();
        config.repository.catalog_path = "/data/export.json".to_string();
        ConfigManager::save_config(&config, &path).await.unwrap();

        let manager = ConfigManager::new(path.to_str()).unwrap();
        assert_eq!(manager.config().repository.catalog_path, "/data/export.json");
        assert!(manager.validate_config().is_ok());
    }
}
