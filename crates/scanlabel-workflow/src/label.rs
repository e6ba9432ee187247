//! 会话标签校验与规范标签生成
//!
//! 规范标签格式为 `受试者x日期x扫描类型x研究项目`，分隔符为小写字母 `x`。

use scanlabel_core::{ClassificationResult, ScanType, Study};
use std::collections::HashSet;
use std::fmt;

/// 标签分隔符
pub const LABEL_SEPARATOR: char = 'x';

/// 规范标签的组成部分数量
pub const LABEL_COMPONENTS: usize = 4;

/// 从右侧最多拆分三次，受试者中的 `x` 不会被拆开
pub fn split_label(label: &str) -> Vec<&str> {
    let mut components: Vec<&str> = label.rsplitn(LABEL_COMPONENTS, LABEL_SEPARATOR).collect();
    components.reverse();
    components
}

/// 组成部分不足四个或存在空的组成部分（例如以分隔符结尾、缺少日期），即信息不足
pub fn is_incomplete_label(label: &str) -> bool {
    let components = split_label(label);
    components.len() != LABEL_COMPONENTS || components.iter().any(|c| c.is_empty())
}

/// 标签校验器
#[derive(Debug, Clone)]
pub struct LabelValidator {
    scan_types: HashSet<String>,
    studies: HashSet<String>,
}

impl LabelValidator {
    /// 使用给定的已知扫描类型和研究项目集合创建校验器
    pub fn new<S, T>(scan_types: S, studies: T) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        Self {
            scan_types: scan_types.into_iter().map(Into::into).collect(),
            studies: studies.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_recognized_scan_type(&self, scan_type: &str) -> bool {
        self.scan_types.contains(scan_type)
    }

    pub fn is_recognized_study(&self, study: &str) -> bool {
        self.studies.contains(study)
    }

    /// 拆分后的标签是否符合规范，任何组成部分为空都不算规范
    pub fn is_canonical(&self, components: &[&str], subject: &str, date: &str) -> bool {
        if components.iter().any(|c| c.is_empty()) {
            return false;
        }
        match components {
            [label_subject, label_date, scan_type, study] => {
                *label_subject == subject
                    && *label_date == date
                    && self.is_recognized_scan_type(scan_type)
                    && self.is_recognized_study(study)
            }
            _ => false,
        }
    }

    /// 直接校验完整标签
    pub fn validate_label(&self, label: &str, subject: &str, date: &str) -> bool {
        self.is_canonical(&split_label(label), subject, date)
    }
}

impl Default for LabelValidator {
    /// Florbetapir扫描不在默认集合中，这类会话总会被重新检查
    fn default() -> Self {
        Self::new(
            ScanType::ALL
                .iter()
                .filter(|scan_type| **scan_type != ScanType::FlorbetapirPet)
                .map(|scan_type| scan_type.as_str()),
            Study::ALL.iter().map(|study| study.as_str()),
        )
    }
}

/// 规范会话标签
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalLabel {
    pub subject: String,
    pub date: String,
    pub result: ClassificationResult,
}

impl CanonicalLabel {
    /// 生成规范标签；分类不完整时仍生成部分标签
    pub fn build(subject: &str, date: &str, result: ClassificationResult) -> Self {
        Self {
            subject: subject.to_string(),
            date: date.to_string(),
            result,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.result.is_complete() && !self.subject.is_empty() && !self.date.is_empty()
    }
}

impl fmt::Display for CanonicalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{subject}{sep}{date}{sep}{scan_type}{sep}{study}",
            subject = self.subject,
            date = self.date,
            scan_type = self.result.scan_type_str(),
            study = self.result.study_str(),
            sep = LABEL_SEPARATOR
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_label_from_the_right() {
        assert_eq!(split_label("1234x20230101x3TxABC"), vec!["1234", "20230101", "3T", "ABC"]);
        assert_eq!(split_label("12x4x20230101x3TxABC"), vec!["12x4", "20230101", "3T", "ABC"]);
        assert_eq!(split_label("raw session"), vec!["raw session"]);
        assert_eq!(split_label("1234x20230101x3Tx"), vec!["1234", "20230101", "3T", ""]);
    }

    #[test]
    fn test_validator_accepts_canonical_label() {
        let validator = LabelValidator::default();
        assert!(validator.validate_label("1234x20230101x3TxABC", "1234", "20230101"));
        assert!(validator.validate_label("1234x20230101xFBBPETxABCD2", "1234", "20230101"));
    }

    #[test]
    fn test_validator_rejects_unknown_study() {
        let validator = LabelValidator::default();
        assert!(!validator.validate_label("1234x20230101x3Tx999", "1234", "20230101"));
    }

    #[test]
    fn test_validator_rejects_mismatches() {
        let validator = LabelValidator::default();
        // 受试者或日期不一致
        assert!(!validator.validate_label("9999x20230101x3TxABC", "1234", "20230101"));
        assert!(!validator.validate_label("1234x20230102x3TxABC", "1234", "20230101"));
        // 扫描类型未知
        assert!(!validator.validate_label("1234x20230101x1.5TxABC", "1234", "20230101"));
        assert!(!validator.validate_label("1234x20230101xFlorbetapirPETxABC", "1234", "20230101"));
        // 组成部分不足
        assert!(!validator.is_canonical(&["1234", "20230101", "3T"], "1234", "20230101"));
        assert!(!validator.validate_label("", "1234", "20230101"));
    }

    #[test]
    fn test_custom_recognized_sets() {
        let validator = LabelValidator::new(["3T"], ["ABC", "NEW"]);
        assert!(validator.validate_label("1234x20230101x3TxNEW", "1234", "20230101"));
        assert!(!validator.validate_label("1234x20230101x7TxABC", "1234", "20230101"));
    }

    #[test]
    fn test_built_label_round_trips_through_validator() {
        let validator = LabelValidator::default();
        for scan_type in ScanType::ALL {
            if scan_type == ScanType::FlorbetapirPet {
                continue;
            }
            for study in Study::ALL {
                let label =
                    CanonicalLabel::build("1234", "20230101", ClassificationResult::new(scan_type, study));
                assert!(label.is_complete());
                assert!(!is_incomplete_label(&label.to_string()));
                assert!(validator.validate_label(&label.to_string(), "1234", "20230101"));
            }
        }
    }

    #[test]
    fn test_incomplete_labels_end_with_separator() {
        let partial = CanonicalLabel::build("1234", "20230101", ClassificationResult::partial(ScanType::ThreeTesla));
        assert_eq!(partial.to_string(), "1234x20230101x3Tx");
        assert!(is_incomplete_label(&partial.to_string()));
        assert!(!partial.is_complete());

        let empty = CanonicalLabel::build("1234", "20230101", ClassificationResult::empty());
        assert_eq!(empty.to_string(), "1234x20230101xx");
        assert!(is_incomplete_label(&empty.to_string()));
    }

    #[test]
    fn test_missing_date_makes_label_incomplete() {
        let result = ClassificationResult::new(ScanType::FbbPet, Study::Abcd2);
        let label = CanonicalLabel::build("1234", "", result);
        assert_eq!(label.to_string(), "1234xxFBBPETxABCD2");
        assert!(!label.is_complete());
        assert!(is_incomplete_label(&label.to_string()));
        assert!(is_incomplete_label("raw session"));

        // 空日期不能与空的标签组成部分相互匹配
        let validator = LabelValidator::default();
        assert!(!validator.validate_label("1234xxFBBPETxABCD2", "1234", ""));
        assert!(!validator.is_canonical(&["", "20230101", "3T", "ABC"], "", "20230101"));
    }
}
