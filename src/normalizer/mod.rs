//! 텍스트·숫자 정규화 모듈
//!
//! 스프레드시트의 자유 텍스트 셀을 계산 가능한 숫자로 바꾼다.
//!
//! ## 규칙
//! 1. 빈 값·"nan" 표기는 결측(None)
//! 2. 검정 횟수의 관용 표현: 상시·연중 = 연 12회, 수시 = 연 6회
//! 3. 그 외 텍스트는 처음 나오는 숫자를 사용

pub mod structure;
pub mod grade;

use cert_difficulty_common::CellValue;
use regex::Regex;

/// 상시·연중 시행 자격증의 연간 검정 횟수
pub const CONTINUOUS_PER_YEAR: f64 = 12.0;
/// 수시 시행 자격증의 연간 검정 횟수
pub const AD_HOC_PER_YEAR: f64 = 6.0;

/// 결측으로 취급하는 텍스트인지 판정
pub fn is_missing_text(text: &str) -> bool {
    let t = text.trim();
    t.is_empty() || t.eq_ignore_ascii_case("nan")
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// 셀 값을 숫자로 변환
///
/// 텍스트는 앞뒤 공백을 제거한 뒤 그대로 파싱한다 ("1,200" 같은 표기는 결측).
pub fn to_numeric(value: &CellValue) -> Option<f64> {
    match value {
        CellValue::Empty => None,
        CellValue::Number(n) => finite(*n),
        CellValue::Text(s) => {
            if is_missing_text(s) {
                return None;
            }
            s.trim().parse::<f64>().ok().and_then(finite)
        }
    }
}

/// 검정 횟수를 연간 횟수로 변환
///
/// 키워드 우선순위: 상시 → 수시 → 연중 → 첫 정수.
pub fn frequency_to_numeric(value: &CellValue) -> Option<f64> {
    lazy_static::lazy_static! {
        static ref FIRST_INT_RE: Regex = Regex::new(r"([0-9]+)").unwrap();
    }

    let text = match value {
        CellValue::Empty => return None,
        CellValue::Number(n) => return finite(*n),
        CellValue::Text(s) => s.trim(),
    };

    if is_missing_text(text) {
        return None;
    }
    if text.contains("상시") {
        return Some(CONTINUOUS_PER_YEAR);
    }
    if text.contains("수시") {
        return Some(AD_HOC_PER_YEAR);
    }
    if text.contains("연중") {
        return Some(CONTINUOUS_PER_YEAR);
    }

    FIRST_INT_RE
        .captures(text)
        .and_then(|cap| cap[1].parse::<f64>().ok())
}

/// 텍스트에서 첫 번째 숫자(부호·소수 포함)를 추출
pub fn extract_first_number(text: &str) -> Option<f64> {
    lazy_static::lazy_static! {
        static ref NUMBER_RE: Regex = Regex::new(r"[-+]?[0-9]*\.?[0-9]+").unwrap();
    }

    NUMBER_RE
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_numeric() {
        assert_eq!(to_numeric(&CellValue::Number(42.5)), Some(42.5));
        assert_eq!(to_numeric(&CellValue::text(" 300 ")), Some(300.0));
        assert_eq!(to_numeric(&CellValue::text("12.5")), Some(12.5));
        assert_eq!(to_numeric(&CellValue::Empty), None);
        assert_eq!(to_numeric(&CellValue::text("")), None);
        assert_eq!(to_numeric(&CellValue::text("NaN")), None);
        assert_eq!(to_numeric(&CellValue::text("해당없음")), None);
        assert_eq!(to_numeric(&CellValue::text("1,200")), None);
    }

    #[test]
    fn test_to_numeric_non_finite() {
        assert_eq!(to_numeric(&CellValue::Number(f64::NAN)), None);
        assert_eq!(to_numeric(&CellValue::Number(f64::INFINITY)), None);
        assert_eq!(to_numeric(&CellValue::text("inf")), None);
    }

    #[test]
    fn test_frequency_keywords() {
        assert_eq!(frequency_to_numeric(&CellValue::text("상시")), Some(12.0));
        assert_eq!(frequency_to_numeric(&CellValue::text("수시")), Some(6.0));
        assert_eq!(frequency_to_numeric(&CellValue::text("연중")), Some(12.0));
        assert_eq!(frequency_to_numeric(&CellValue::text("상시 시행")), Some(12.0));
    }

    #[test]
    fn test_frequency_keyword_priority() {
        // 수시가 연중보다 먼저 검사된다
        assert_eq!(frequency_to_numeric(&CellValue::text("연중 수시")), Some(6.0));
        assert_eq!(frequency_to_numeric(&CellValue::text("상시/수시")), Some(12.0));
    }

    #[test]
    fn test_frequency_embedded_number() {
        assert_eq!(frequency_to_numeric(&CellValue::text("연 4회")), Some(4.0));
        assert_eq!(frequency_to_numeric(&CellValue::text("연2회(상반기)")), Some(2.0));
        assert_eq!(frequency_to_numeric(&CellValue::Number(3.0)), Some(3.0));
    }

    #[test]
    fn test_frequency_missing() {
        assert_eq!(frequency_to_numeric(&CellValue::text("")), None);
        assert_eq!(frequency_to_numeric(&CellValue::text("nan")), None);
        assert_eq!(frequency_to_numeric(&CellValue::text("미정")), None);
        assert_eq!(frequency_to_numeric(&CellValue::Empty), None);
    }

    #[test]
    fn test_extract_first_number() {
        assert_eq!(extract_first_number("보상 82점"), Some(82.0));
        assert_eq!(extract_first_number("-3.5 하락"), Some(-3.5));
        assert_eq!(extract_first_number("약 .5배"), Some(0.5));
        assert_eq!(extract_first_number("68.2 / 100"), Some(68.2));
        assert_eq!(extract_first_number("정보 없음"), None);
        assert_eq!(extract_first_number(""), None);
    }
}
