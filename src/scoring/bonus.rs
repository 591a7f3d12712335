//! 가산점 계산
//!
//! 모든 가산점은 0 이상이며, 입력이 결측이면 0.0.

use cert_difficulty_common::ScoringWeights;
use serde::Serialize;

/// 분류 가산 (먼저 일치한 키워드 하나만 적용)
pub fn class_bonus(category: &str, weights: &ScoringWeights) -> f64 {
    if category.contains("전문") {
        weights.bonus_professional
    } else if category.contains("기술") {
        weights.bonus_technical
    } else if category.contains("민간") {
        weights.bonus_private
    } else {
        0.0
    }
}

/// 등급 가산: clamp01((500 - code) / 400) × max
pub fn grade_bonus(grade_code: Option<f64>, weights: &ScoringWeights) -> f64 {
    match grade_code {
        Some(code) if code.is_finite() => ((500.0 - code) / 400.0).clamp(0.0, 1.0) * weights.bonus_grade_max,
        _ => 0.0,
    }
}

/// 모집단의 검정 횟수 범위
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrequencyRange {
    pub min: f64,
    pub max: f64,
}

impl FrequencyRange {
    pub fn from_population<I>(population: I) -> Option<Self>
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        population
            .into_iter()
            .flatten()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<Self>, v| {
                Some(match acc {
                    None => Self { min: v, max: v },
                    Some(r) => Self { min: r.min.min(v), max: r.max.max(v) },
                })
            })
    }

    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }
}

/// 검정 횟수 가산 (횟수가 적을수록 큼)
pub fn frequency_bonus(frequency: Option<f64>, range: Option<FrequencyRange>, weights: &ScoringWeights) -> f64 {
    let (Some(f), Some(range)) = (frequency, range) else {
        return 0.0;
    };
    if !f.is_finite() || range.is_degenerate() {
        return 0.0;
    }
    ((range.max - f) / (range.max - range.min)) * weights.bonus_frequency_max
}

/// 시험 구조 가산 (실기·면접 각각 독립 가산)
pub fn structure_bonus(has_practical: bool, has_interview: bool, weights: &ScoringWeights) -> f64 {
    let mut bonus = 0.0;
    if has_practical {
        bonus += weights.bonus_practical;
    }
    if has_interview {
        bonus += weights.bonus_interview;
    }
    bonus
}
