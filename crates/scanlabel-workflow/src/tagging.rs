//! 研究项目标签
//!
//! 将分类得到的研究项目作为标签加到会话上。标签已存在视为成功。

use scanlabel_core::{ScanLabelError, Session, SessionStore, Study};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// 打标签结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TagOutcome {
    /// 新加上的标签
    Added,
    /// 会话已有该标签
    AlreadyTagged,
    /// 演练模式，未提交修改
    DryRun,
    /// 其他失败，不重试
    Failed(String),
}

impl TagOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, TagOutcome::Failed(_))
    }
}

/// 研究项目标签应用器
#[derive(Debug, Clone, Default)]
pub struct TagApplicator {
    dry_run: bool,
}

impl TagApplicator {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// 给会话加上研究项目标签
    pub async fn apply(&self, store: &dyn SessionStore, session: &Session, study: Study) -> TagOutcome {
        if self.dry_run {
            debug!("{}:{}:Dry run, study tag not added", session.label, study);
            return TagOutcome::DryRun;
        }

        match store.add_tag(&session.id, study.as_str()).await {
            Ok(()) => {
                info!("{}:{}:Study added as tag to session", session.label, study);
                TagOutcome::Added
            }
            Err(ScanLabelError::DuplicateTag(_)) => {
                debug!("{}:{}:Session already tagged with study", session.label, study);
                TagOutcome::AlreadyTagged
            }
            Err(e) => {
                warn!(
                    "{}:An error occurred when tagging with study {}: {}",
                    session.label, study, e
                );
                TagOutcome::Failed(e.to_string())
            }
        }
    }
}
