//! 会话命名引擎
//!
//! 协调元数据提取、规则分类、标签校验、规范标签生成和研究项目标签的核心引擎

use crate::{
    label::{is_incomplete_label, split_label, CanonicalLabel, LabelValidator},
    rules::{Classification, RuleEngine},
    tagging::{TagApplicator, TagOutcome},
};
use chrono::{Local, NaiveDate};
use scanlabel_core::{
    utils::{is_well_formed_subject, session_date},
    Result, Session, SessionQuery, SessionSource, SessionStore,
};
use scanlabel_dicom::MetadataExtractor;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// 单个会话的处理结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionOutcome {
    /// 标签已符合规范
    AlreadyCorrect,
    /// 已生成完整的规范标签
    Renamed { old_label: String, new_label: String },
    /// 信息不足，只生成了部分标签，需要人工处理
    RenamedIncomplete { old_label: String, new_label: String },
}

/// 标签更新状态
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MutationStatus {
    Applied,
    /// 新标签与现有标签相同，未提交
    Unchanged,
    DryRun,
    Failed(String),
}

/// 单个会话的处理报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    pub session_id: String,
    pub outcome: SessionOutcome,
    pub classification: Option<Classification>,
    pub tag: Option<TagOutcome>,
    pub label_update: Option<MutationStatus>,
    pub malformed_subject: bool,
}

impl SessionReport {
    /// 实际写入仓库的改名（旧标签，新标签）
    pub fn applied_rename(&self) -> Option<(&str, &str)> {
        match (&self.outcome, &self.label_update) {
            (
                SessionOutcome::Renamed { old_label, new_label }
                | SessionOutcome::RenamedIncomplete { old_label, new_label },
                Some(MutationStatus::Applied),
            ) => Some((old_label.as_str(), new_label.as_str())),
            _ => None,
        }
    }

    /// 是否需要人工复核
    pub fn needs_attention(&self) -> bool {
        self.malformed_subject
            || matches!(self.outcome, SessionOutcome::RenamedIncomplete { .. })
            || self
                .classification
                .as_ref()
                .map(|c| c.needs_review())
                .unwrap_or(false)
            || matches!(self.tag, Some(TagOutcome::Failed(_)))
            || matches!(self.label_update, Some(MutationStatus::Failed(_)))
    }
}

/// 一次运行的汇总
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_date: NaiveDate,
    pub sessions: Vec<SessionReport>,
}

impl RunReport {
    pub fn already_correct(&self) -> usize {
        self.count(|r| matches!(r.outcome, SessionOutcome::AlreadyCorrect))
    }

    pub fn renamed(&self) -> usize {
        self.count(|r| matches!(r.outcome, SessionOutcome::Renamed { .. }))
    }

    pub fn incomplete(&self) -> usize {
        self.count(|r| matches!(r.outcome, SessionOutcome::RenamedIncomplete { .. }))
    }

    pub fn needing_attention(&self) -> usize {
        self.count(SessionReport::needs_attention)
    }

    /// 实际写入的改名记录
    pub fn applied_renames(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sessions.iter().filter_map(SessionReport::applied_rename)
    }

    fn count(&self, predicate: impl Fn(&SessionReport) -> bool) -> usize {
        self.sessions.iter().filter(|r| predicate(*r)).count()
    }
}

/// 会话命名引擎
#[derive(Debug)]
pub struct NamingEngine {
    extractor: MetadataExtractor,
    rules: RuleEngine,
    validator: LabelValidator,
    tagger: TagApplicator,
    dry_run: bool,
    run_date: NaiveDate,
}

impl NamingEngine {
    /// 创建新的命名引擎
    pub fn new(validator: LabelValidator) -> Self {
        Self {
            extractor: MetadataExtractor::new(),
            rules: RuleEngine::new(),
            validator,
            tagger: TagApplicator::new(false),
            dry_run: false,
            run_date: Local::now().date_naive(),
        }
    }

    /// 演练模式：只分类和记录日志，不修改会话
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self.tagger = TagApplicator::new(dry_run);
        self
    }

    pub fn with_run_date(mut self, run_date: NaiveDate) -> Self {
        self.run_date = run_date;
        self
    }

    /// 分类会话，不访问仓库
    pub fn classify_session(&self, session: &Session) -> Classification {
        let metadata = self.extractor.extract_session(session);
        self.rules.classify(&session.label, &metadata)
    }

    /// 处理查询到的所有会话，单个会话的失败不影响后续会话
    pub async fn run(
        &self,
        source: &dyn SessionSource,
        store: &dyn SessionStore,
        query: &SessionQuery,
    ) -> Result<RunReport> {
        let sessions = source.find_sessions(query).await?;
        info!("Processing {} sessions", sessions.len());

        let mut reports = Vec::with_capacity(sessions.len());
        for session in &sessions {
            reports.push(self.process_session(store, session).await);
        }

        Ok(RunReport {
            run_date: self.run_date,
            sessions: reports,
        })
    }

    /// 处理单个会话
    pub async fn process_session(&self, store: &dyn SessionStore, session: &Session) -> SessionReport {
        let subject = session.subject.label.as_str();
        let malformed_subject = !is_well_formed_subject(subject);
        if malformed_subject {
            warn!("Subject label {} incorrect", subject);
        }

        let date = session_date(session.timestamp.as_ref());
        if date.is_empty() {
            warn!("{}: session has no timestamp, date unknown", session.label);
        }

        if self.validator.is_canonical(&split_label(&session.label), subject, &date) {
            debug!("Session label {} is correct", session.label);
            return SessionReport {
                session_id: session.id.clone(),
                outcome: SessionOutcome::AlreadyCorrect,
                classification: None,
                tag: None,
                label_update: None,
                malformed_subject,
            };
        }

        let refreshed = self.refresh_acquisitions(store, session).await;
        let classification = self.classify_session(&refreshed);

        let tag = match classification.result.study {
            Some(study) => Some(self.tagger.apply(store, session, study).await),
            None => None,
        };

        let canonical = CanonicalLabel::build(subject, &date, classification.result);
        let new_label = canonical.to_string();
        info!(
            "Session label renamed from:{}:{}: on date:{}",
            session.label,
            new_label,
            self.run_date.format("%Y-%m-%d")
        );
        // 分类不完整或缺少日期都需要人工处理
        let complete = canonical.is_complete() && !is_incomplete_label(&new_label);
        if !complete {
            warn!(
                "{}:{}; insufficient information for scantype and/or study",
                session.label, new_label
            );
        }

        let label_update = self.update_label(store, session, &new_label).await;

        let old_label = session.label.clone();
        let outcome = if complete {
            SessionOutcome::Renamed { old_label, new_label }
        } else {
            SessionOutcome::RenamedIncomplete { old_label, new_label }
        };

        SessionReport {
            session_id: session.id.clone(),
            outcome,
            classification: Some(classification),
            tag,
            label_update: Some(label_update),
            malformed_subject,
        }
    }

    /// 重新获取参与分类的采集，失败时沿用已有数据
    async fn refresh_acquisitions(&self, store: &dyn SessionStore, session: &Session) -> Session {
        let mut refreshed = session.clone();
        for acquisition in refreshed.acquisitions.iter_mut() {
            if !acquisition.modality.is_diagnostic() {
                continue;
            }
            match store.reload_acquisition(&session.id, &acquisition.id).await {
                Ok(fresh) => *acquisition = fresh,
                Err(e) => warn!(
                    "{}: could not reload acquisition {}, using cached metadata: {}",
                    session.label, acquisition.label, e
                ),
            }
        }
        refreshed
    }

    async fn update_label(&self, store: &dyn SessionStore, session: &Session, new_label: &str) -> MutationStatus {
        if self.dry_run {
            debug!("{}: dry run, label not updated", session.label);
            return MutationStatus::DryRun;
        }
        if new_label == session.label {
            debug!("{}: label unchanged, nothing to update", session.label);
            return MutationStatus::Unchanged;
        }

        match store.update_label(&session.id, new_label).await {
            Ok(()) => MutationStatus::Applied,
            Err(e) => {
                warn!("{}:{}: label update failed: {}", session.label, new_label, e);
                MutationStatus::Failed(e.to_string())
            }
        }
    }
}

impl Default for NamingEngine {
    fn default() -> Self {
        Self::new(LabelValidator::default())
    }
}
