//! 内存会话仓库

use async_trait::async_trait;
use scanlabel_core::{
    Acquisition, Result, ScanLabelError, Session, SessionQuery, SessionSource, SessionStore,
};
use std::collections::HashSet;
use tokio::sync::RwLock;
use tracing::debug;

/// 内存会话仓库
///
/// 会话按插入顺序保存。可以为指定会话注入修改失败或重新加载失败。
#[derive(Debug, Default)]
pub struct MemoryRepository {
    sessions: RwLock<Vec<Session>>,
    failing_mutations: RwLock<HashSet<String>>,
    failing_reloads: RwLock<HashSet<String>>,
}

impl MemoryRepository {
    /// 创建新的内存仓库
    pub fn new(sessions: Vec<Session>) -> Self {
        Self {
            sessions: RwLock::new(sessions),
            failing_mutations: RwLock::new(HashSet::new()),
            failing_reloads: RwLock::new(HashSet::new()),
        }
    }

    /// 获取会话快照
    pub async fn get(&self, session_id: &str) -> Option<Session> {
        let sessions = self.sessions.read().await;
        sessions.iter().find(|s| s.id == session_id).cloned()
    }

    /// 所有会话快照
    pub async fn snapshot(&self) -> Vec<Session> {
        self.sessions.read().await.clone()
    }

    /// 替换会话中的采集数据，模拟仓库端元数据更新
    pub async fn put_acquisition(&self, session_id: &str, acquisition: Acquisition) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        let session = find_mut(&mut sessions, session_id)?;
        match session.acquisitions.iter_mut().find(|a| a.id == acquisition.id) {
            Some(existing) => *existing = acquisition,
            None => session.acquisitions.push(acquisition),
        }
        Ok(())
    }

    /// 之后对该会话的标签和标记修改都会失败
    pub async fn fail_mutations_for(&self, session_id: &str) {
        self.failing_mutations.write().await.insert(session_id.to_string());
    }

    /// 之后对该会话的采集重新加载都会失败
    pub async fn fail_reloads_for(&self, session_id: &str) {
        self.failing_reloads.write().await.insert(session_id.to_string());
    }

    async fn check_mutable(&self, session_id: &str) -> Result<()> {
        if self.failing_mutations.read().await.contains(session_id) {
            return Err(ScanLabelError::Repository(format!(
                "Session {} rejected the modification",
                session_id
            )));
        }
        Ok(())
    }
}

fn find_mut<'a>(sessions: &'a mut [Session], session_id: &str) -> Result<&'a mut Session> {
    sessions
        .iter_mut()
        .find(|s| s.id == session_id)
        .ok_or_else(|| ScanLabelError::NotFound(format!("Session {} not found", session_id)))
}

#[async_trait]
impl SessionSource for MemoryRepository {
    async fn find_sessions(&self, query: &SessionQuery) -> Result<Vec<Session>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.iter().filter(|s| query.matches(s)).cloned().collect())
    }
}

#[async_trait]
impl SessionStore for MemoryRepository {
    async fn reload_acquisition(&self, session_id: &str, acquisition_id: &str) -> Result<Acquisition> {
        if self.failing_reloads.read().await.contains(session_id) {
            return Err(ScanLabelError::Repository(format!(
                "Acquisition {} could not be reloaded",
                acquisition_id
            )));
        }

        let sessions = self.sessions.read().await;
        sessions
            .iter()
            .find(|s| s.id == session_id)
            .and_then(|s| s.acquisitions.iter().find(|a| a.id == acquisition_id))
            .cloned()
            .ok_or_else(|| {
                ScanLabelError::NotFound(format!(
                    "Acquisition {} not found in session {}",
                    acquisition_id, session_id
                ))
            })
    }

    async fn update_label(&self, session_id: &str, label: &str) -> Result<()> {
        self.check_mutable(session_id).await?;

        let mut sessions = self.sessions.write().await;
        let session = find_mut(&mut sessions, session_id)?;
        debug!("Session {} label {} -> {}", session_id, session.label, label);
        session.label = label.to_string();
        Ok(())
    }

    async fn add_tag(&self, session_id: &str, tag: &str) -> Result<()> {
        self.check_mutable(session_id).await?;

        let mut sessions = self.sessions.write().await;
        let session = find_mut(&mut sessions, session_id)?;
        if !session.tags.insert(tag.to_string()) {
            return Err(ScanLabelError::DuplicateTag(tag.to_string()));
        }
        Ok(())
    }
}
