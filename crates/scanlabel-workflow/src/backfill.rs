//! 历史会话研究项目标签补录
//!
//! 已经使用规范标签的会话，从标签最后一部分取出研究项目并补打标签。

use crate::label::{split_label, LabelValidator, LABEL_COMPONENTS};
use crate::tagging::{TagApplicator, TagOutcome};
use scanlabel_core::{Result, SessionQuery, SessionSource, SessionStore, Study};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// 单个会话的补录动作
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackfillAction {
    Tagged(Study),
    AlreadyTagged(Study),
    DryRun(Study),
    /// 最后一部分不是已知研究项目
    NotAStudy(String),
    /// 标签组成部分不足四个
    TooFewComponents,
    Failed(String),
}

/// 补录汇总
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackfillReport {
    pub entries: Vec<(String, BackfillAction)>,
}

impl BackfillReport {
    pub fn tagged(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, action)| matches!(action, BackfillAction::Tagged(_)))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, action)| {
                matches!(action, BackfillAction::NotAStudy(_) | BackfillAction::TooFewComponents)
            })
            .count()
    }

    pub fn failed(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, action)| matches!(action, BackfillAction::Failed(_)))
            .count()
    }
}

/// 研究项目标签补录器
#[derive(Debug, Clone)]
pub struct StudyTagBackfill {
    validator: LabelValidator,
    tagger: TagApplicator,
}

impl StudyTagBackfill {
    pub fn new(validator: LabelValidator, dry_run: bool) -> Self {
        Self {
            validator,
            tagger: TagApplicator::new(dry_run),
        }
    }

    /// 遍历会话并补打研究项目标签
    pub async fn run(
        &self,
        source: &dyn SessionSource,
        store: &dyn SessionStore,
        query: &SessionQuery,
    ) -> Result<BackfillReport> {
        let sessions = source.find_sessions(query).await?;
        info!("Backfilling study tags for {} sessions", sessions.len());

        let mut report = BackfillReport::default();
        for session in &sessions {
            let components = split_label(&session.label);
            let action = if components.len() != LABEL_COMPONENTS {
                debug!("{}:Not long enough for study tag", session.label);
                BackfillAction::TooFewComponents
            } else {
                let candidate = components[LABEL_COMPONENTS - 1];
                match self.recognized_study(candidate) {
                    Some(study) => match self.tagger.apply(store, session, study).await {
                        TagOutcome::Added => BackfillAction::Tagged(study),
                        TagOutcome::AlreadyTagged => BackfillAction::AlreadyTagged(study),
                        TagOutcome::DryRun => BackfillAction::DryRun(study),
                        TagOutcome::Failed(e) => BackfillAction::Failed(e),
                    },
                    None => {
                        debug!("{}:{}:Not a study", candidate, session.label);
                        BackfillAction::NotAStudy(candidate.to_string())
                    }
                }
            };
            report.entries.push((session.id.clone(), action));
        }

        if report.failed() > 0 {
            warn!("{} sessions could not be tagged", report.failed());
        }
        Ok(report)
    }

    fn recognized_study(&self, candidate: &str) -> Option<Study> {
        if !self.validator.is_recognized_study(candidate) {
            return None;
        }
        candidate.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use scanlabel_core::{Session, Subject};
    use scanlabel_integration::MemoryRepository;

    fn session(id: &str, label: &str) -> Session {
        Session {
            id: id.to_string(),
            label: label.to_string(),
            subject: Subject {
                id: String::new(),
                label: "1234".to_string(),
            },
            timestamp: None,
            created: Utc::now(),
            acquisitions: vec![],
            tags: Default::default(),
        }
    }

    #[tokio::test]
    async fn test_backfill_tags_recognized_studies_once() {
        let mut tagged = session("tagged", "1234x20200101x3TxLEADS");
        tagged.tags.insert("LEADS".to_string());
        let repo = MemoryRepository::new(vec![
            session("new", "1234x20230101x3TxABC"),
            tagged,
            session("odd", "1234x20230101x3Tx999"),
            session("short", "CAMRIS^Wolk"),
        ]);
        let backfill = StudyTagBackfill::new(LabelValidator::default(), false);

        let report = backfill.run(&repo, &repo, &SessionQuery::default()).await.unwrap();
        assert_eq!(
            report.entries,
            vec![
                ("new".to_string(), BackfillAction::Tagged(Study::Abc)),
                ("tagged".to_string(), BackfillAction::AlreadyTagged(Study::Leads)),
                ("odd".to_string(), BackfillAction::NotAStudy("999".to_string())),
                ("short".to_string(), BackfillAction::TooFewComponents),
            ]
        );
        assert_eq!(report.tagged(), 1);
        assert_eq!(report.skipped(), 2);
        assert!(repo.get("new").await.unwrap().tags.contains("ABC"));
    }

    #[tokio::test]
    async fn test_backfill_reports_failures_and_keeps_going() {
        let repo = MemoryRepository::new(vec![
            session("bad", "1234x20230101x3TxABC"),
            session("good", "5678x20230101x7TxYMTL"),
        ]);
        repo.fail_mutations_for("bad").await;
        let backfill = StudyTagBackfill::new(LabelValidator::default(), false);

        let report = backfill.run(&repo, &repo, &SessionQuery::default()).await.unwrap();
        assert_eq!(report.failed(), 1);
        assert_eq!(report.tagged(), 1);
        assert!(repo.get("good").await.unwrap().tags.contains("YMTL"));
    }
}
