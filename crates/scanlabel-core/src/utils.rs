//! 通用工具函数

use chrono::{DateTime, Utc};

/// 受试者标签中不允许出现的字符
pub const FORBIDDEN_SUBJECT_CHARS: [char; 2] = ['.', '_'];

/// 会话日期，格式为 YYYYMMDD；没有时间戳时为空字符串
pub fn session_date(timestamp: Option<&DateTime<Utc>>) -> String {
    timestamp
        .map(|ts| ts.format("%Y%m%d").to_string())
        .unwrap_or_default()
}

/// 受试者标签是否符合命名约定
pub fn is_well_formed_subject(subject: &str) -> bool {
    !subject.contains(FORBIDDEN_SUBJECT_CHARS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_session_date() {
        let ts = Utc.with_ymd_and_hms(2023, 1, 1, 23, 59, 0).unwrap();
        assert_eq!(session_date(Some(&ts)), "20230101");
        assert_eq!(session_date(None), "");
    }

    #[test]
    fn test_is_well_formed_subject() {
        assert!(is_well_formed_subject("123456"));
        assert!(!is_well_formed_subject("1234.01"));
        assert!(!is_well_formed_subject("1234_01"));
    }
}
