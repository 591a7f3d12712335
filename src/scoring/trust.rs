//! 응시자 수 신뢰가중
//!
//! 응시자 수를 표본 크기의 대리 지표로 보고, 응시자가 적은 자격증의
//! 역합격률 신호를 중간값 쪽으로 감쇠한다.
//! weight = floor + span × log1p(응시자) / max(log1p(모집단 응시자))

use cert_difficulty_common::ScoringWeights;

fn usable(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// 모집단의 log1p(평균 응시자 수) 최댓값
pub fn max_log_applicants<I>(population: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    population
        .into_iter()
        .flatten()
        .filter(|v| usable(*v))
        .map(f64::ln_1p)
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))))
}

/// 모집단 최댓값이 미리 계산된 경우의 신뢰가중
///
/// 응시자 수 결측, 모집단에 쓸 값이 없음, 최댓값 0 → 1.0
pub fn trust_weight_with(avg_applicants: Option<f64>, max_log: Option<f64>, weights: &ScoringWeights) -> f64 {
    let (Some(avg), Some(max_log)) = (avg_applicants, max_log) else {
        return 1.0;
    };
    if !usable(avg) || max_log <= 0.0 {
        return 1.0;
    }

    let normalized = (avg.ln_1p() / max_log).clamp(0.0, 1.0);
    weights.trust_floor + weights.trust_span * normalized
}

/// 신뢰가중 (모집단 전체를 인자로 받는 형태)
pub fn trust_weight(avg_applicants: Option<f64>, population: &[Option<f64>], weights: &ScoringWeights) -> f64 {
    trust_weight_with(avg_applicants, max_log_applicants(population.iter().copied()), weights)
}
