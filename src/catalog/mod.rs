//! 전공·직무·직업정보 카탈로그
//!
//! 자격증 데이터와 별도 시트에서 읽어 드릴다운 조회에 쓴다.
//! 모든 키(자격증ID, jobdicSeq)는 앞뒤 공백을 제거한 문자열로 비교한다.

pub mod jobs;
pub mod majors;

pub use jobs::{JobDetail, JobIndex, JobInfoIndex, JobMetric, JobSection, RelatedJob};
pub use majors::MajorIndex;

/// 표시하지 않는 값 (빈 칸, "nan", "none")
pub(crate) fn is_blank_value(text: &str) -> bool {
    let t = text.trim();
    t.is_empty() || t.eq_ignore_ascii_case("nan") || t.eq_ignore_ascii_case("none")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank_value() {
        assert!(is_blank_value(""));
        assert!(is_blank_value(" NaN "));
        assert!(is_blank_value("None"));
        assert!(!is_blank_value("0"));
    }
}
