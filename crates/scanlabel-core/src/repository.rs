//! 影像数据仓库能力接口
//!
//! 会话的检索与修改都由外部仓库负责，这里只定义引擎需要的能力。

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Acquisition, Session};

/// 会话查询条件
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionQuery {
    /// 创建时间下限（不含）
    pub created_after: Option<DateTime<Utc>>,
}

impl SessionQuery {
    pub fn created_after(bound: DateTime<Utc>) -> Self {
        Self {
            created_after: Some(bound),
        }
    }

    pub fn matches(&self, session: &Session) -> bool {
        match self.created_after {
            Some(bound) => session.created > bound,
            None => true,
        }
    }
}

/// 会话来源
#[async_trait]
pub trait SessionSource: Send + Sync {
    /// 按查询条件列出会话，保持仓库中的存储顺序
    async fn find_sessions(&self, query: &SessionQuery) -> Result<Vec<Session>>;
}

/// 会话修改能力
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// 重新获取采集的最新元数据
    async fn reload_acquisition(&self, session_id: &str, acquisition_id: &str) -> Result<Acquisition>;

    /// 更新会话标签
    async fn update_label(&self, session_id: &str, label: &str) -> Result<()>;

    /// 添加会话标签，标签已存在时返回 `ScanLabelError::DuplicateTag`
    async fn add_tag(&self, session_id: &str, tag: &str) -> Result<()>;
}
