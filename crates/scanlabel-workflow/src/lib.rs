//! # 会话命名工作流模块
//!
//! 提供完整的会话分类与命名功能，包括：
//! - 分类规则引擎：按采集元数据确定扫描类型和研究项目
//! - 标签校验：判断现有会话标签是否符合规范
//! - 规范标签生成：组装四段式会话标签
//! - 研究项目标签：幂等地给会话打标签
//! - 历史补录：为已规范命名的会话补打研究项目标签

pub mod backfill;
pub mod engine;
pub mod label;
pub mod rules;
pub mod tagging;

// 重新导出主要类型
pub use backfill::{BackfillAction, BackfillReport, StudyTagBackfill};
pub use engine::{MutationStatus, NamingEngine, RunReport, SessionOutcome, SessionReport};
pub use label::{is_incomplete_label, split_label, CanonicalLabel, LabelValidator, LABEL_SEPARATOR};
pub use rules::{Classification, ReviewFlag, RuleContext, RuleEngine, RuleVerdict};
pub use tagging::{TagApplicator, TagOutcome};
