//! 시험 구조 플래그 추출
//!
//! 시험종류 텍스트의 키워드, 또는 필기·실기·면접 원본 열의 값(> 0)으로
//! 구성 요소의 유무를 판정한다.

use super::to_numeric;
use cert_difficulty_common::{CellValue, StructureFlags};

pub const WRITTEN_KEYWORD: &str = "필기";
pub const PRACTICAL_KEYWORD: &str = "실기";
pub const INTERVIEW_KEYWORD: &str = "면접";

fn is_positive(value: &CellValue) -> bool {
    to_numeric(value).is_some_and(|v| v > 0.0)
}

/// 시험 구조 플래그 도출
///
/// 라벨은 필기→실기→면접 순으로 "+"로 잇는다.
pub fn derive_structure_flags(
    structure_text: &str,
    written: &CellValue,
    practical: &CellValue,
    interview: &CellValue,
) -> StructureFlags {
    let has_written = structure_text.contains(WRITTEN_KEYWORD) || is_positive(written);
    let has_practical = structure_text.contains(PRACTICAL_KEYWORD) || is_positive(practical);
    let has_interview = structure_text.contains(INTERVIEW_KEYWORD) || is_positive(interview);

    let label = [
        (WRITTEN_KEYWORD, has_written),
        (PRACTICAL_KEYWORD, has_practical),
        (INTERVIEW_KEYWORD, has_interview),
    ]
    .iter()
    .filter(|(_, present)| *present)
    .map(|(keyword, _)| *keyword)
    .collect::<Vec<_>>()
    .join("+");

    StructureFlags {
        has_written,
        has_practical,
        has_interview,
        label,
    }
}
