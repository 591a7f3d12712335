//! 난이도 원점수 합성
//!
//! score = (100 - 전체 합격률)/100 × 신뢰가중 + 분류 + 등급 + 검정 횟수 + 구조
//! 전체 합격률이 결측이면 첫 항은 0.

use super::bonus::{class_bonus, frequency_bonus, grade_bonus, structure_bonus};
use super::population::PopulationStats;
use super::trust::trust_weight_with;
use crate::normalizer::to_numeric;
use cert_difficulty_common::{CertificationRecord, DerivedAttributes, ScoreBreakdown, ScoringWeights};

/// 역합격률 (100 - 합격률) / 100
pub fn inverse_pass_rate(overall_pass_rate: Option<f64>) -> Option<f64> {
    overall_pass_rate.map(|p| (100.0 - p) / 100.0)
}

/// 한 행의 원점수 계산
pub fn compose_score(
    record: &CertificationRecord,
    derived: &DerivedAttributes,
    population: &PopulationStats,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let inverse = inverse_pass_rate(derived.overall_pass_rate);
    let trust = trust_weight_with(derived.average_applicants, population.max_log_applicants, weights);

    let class = class_bonus(&record.category, weights);
    let grade = grade_bonus(to_numeric(&record.grade_code), weights);
    let frequency = frequency_bonus(derived.frequency_numeric, population.frequency_range, weights);
    let structure = structure_bonus(derived.structure.has_practical, derived.structure.has_interview, weights);

    let product = inverse.map_or(0.0, |inv| inv * trust);
    let total = product + class + grade + frequency + structure;

    ScoreBreakdown {
        inverse_pass_rate: inverse,
        trust_weight: trust,
        class_bonus: class,
        grade_bonus: grade,
        frequency_bonus: frequency,
        structure_bonus: structure,
        total,
    }
}
