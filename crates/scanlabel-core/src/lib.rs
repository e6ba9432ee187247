//! # ScanLabel Core
//!
//! 影像会话命名系统的核心模块，提供基础数据结构、错误定义、仓库能力接口和通用工具。

pub mod error;
pub mod models;
pub mod repository;
pub mod utils;

pub use error::{Result, ScanLabelError};
pub use models::*;
pub use repository::{SessionQuery, SessionSource, SessionStore};
