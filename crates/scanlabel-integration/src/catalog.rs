//! JSON会话目录
//!
//! 从仓库导出的会话目录文件（JSON数组）加载会话，修改在内存中进行，
//! 调用 `save` 后写回磁盘。

use async_trait::async_trait;
use scanlabel_core::{Acquisition, Result, Session, SessionQuery, SessionSource, SessionStore};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::memory::MemoryRepository;

/// JSON会话目录
#[derive(Debug)]
pub struct JsonCatalog {
    path: PathBuf,
    repository: MemoryRepository,
}

impl JsonCatalog {
    /// 从文件加载会话目录
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = tokio::fs::read_to_string(&path).await?;
        let sessions: Vec<Session> = serde_json::from_str(&content)?;

        info!("Loaded {} sessions from catalog {}", sessions.len(), path.display());
        Ok(Self {
            path,
            repository: MemoryRepository::new(sessions),
        })
    }

    /// 写回磁盘，先写临时文件再替换
    pub async fn save(&self) -> Result<()> {
        let sessions = self.repository.snapshot().await;
        let content = serde_json::to_string_pretty(&sessions)?;

        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, content).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;

        info!("Saved {} sessions to catalog {}", sessions.len(), self.path.display());
        Ok(())
    }
}

#[async_trait]
impl SessionSource for JsonCatalog {
    async fn find_sessions(&self, query: &SessionQuery) -> Result<Vec<Session>> {
        self.repository.find_sessions(query).await
    }
}

#[async_trait]
impl SessionStore for JsonCatalog {
    async fn reload_acquisition(&self, session_id: &str, acquisition_id: &str) -> Result<Acquisition> {
        self.repository.reload_acquisition(session_id, acquisition_id).await
    }

    async fn update_label(&self, session_id: &str, label: &str) -> Result<()> {
        self.repository.update_label(session_id, label).await
    }

    async fn add_tag(&self, session_id: &str, tag: &str) -> Result<()> {
        self.repository.add_tag(session_id, tag).await
    }
}
