//! 错误定义模块

use thiserror::Error;

/// 会话命名系统统一错误类型
#[derive(Error, Debug)]
pub enum ScanLabelError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("仓库错误: {0}")]
    Repository(String),

    #[error("标签已存在: {0}")]
    DuplicateTag(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    #[error("DICOM处理错误: {0}")]
    Dicom(String),

    #[error("验证错误: {0}")]
    Validation(String),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("系统内部错误: {0}")]
    Internal(String),
}

/// 会话命名系统统一结果类型
pub type Result<T> = std::result::Result<T, ScanLabelError>;
