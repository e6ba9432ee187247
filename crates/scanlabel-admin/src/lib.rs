//! # 会话命名管理模块
//!
//! 提供配置管理、运行日志和改名审计日志等运维功能

pub mod config;
pub mod logging;

pub use config::{ConfigManager, ScanLabelConfig};
pub use logging::{init_logging, run_log_path, AuditLog, RenameRecord};
