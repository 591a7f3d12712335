//! 등급코드 구간
//!
//! 등급코드를 100 단위로 반올림해 필터용 구간으로 쓴다.

use super::to_numeric;
use cert_difficulty_common::CellValue;

/// 필터에 노출하는 등급 구간
pub const GRADE_BUCKETS: [i64; 5] = [100, 200, 300, 400, 500];

/// 등급코드 → 100 단위 구간 (정확히 중간이면 짝수 쪽)
pub fn grade_bucket(code: &CellValue) -> Option<i64> {
    to_numeric(code).map(|c| ((c / 100.0).round_ties_even() * 100.0) as i64)
}

/// 구간 표시 이름
pub fn grade_label(bucket: i64) -> String {
    let name = match bucket {
        100 => "기술사",
        200 => "기능장",
        300 => "기사",
        400 => "산업기사",
        500 => "기능사",
        _ => return bucket.to_string(),
    };
    format!("{}({})", name, bucket)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_bucket() {
        assert_eq!(grade_bucket(&CellValue::Number(300.0)), Some(300));
        assert_eq!(grade_bucket(&CellValue::text("320")), Some(300));
        assert_eq!(grade_bucket(&CellValue::Number(260.0)), Some(300));
        assert_eq!(grade_bucket(&CellValue::Number(250.0)), Some(200));
        assert_eq!(grade_bucket(&CellValue::Empty), None);
    }

    #[test]
    fn test_grade_label() {
        assert_eq!(grade_label(100), "기술사(100)");
        assert_eq!(grade_label(400), "산업기사(400)");
        assert_eq!(grade_label(700), "700");
    }
}
