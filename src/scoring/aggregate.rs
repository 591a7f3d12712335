//! 합격률·응시자 수 집계
//!
//! - 차수별 다년 평균 합격률
//! - 전체 합격률 = 차수별 평균의 평균
//! - 평균 응시자 수 = 모든 연도×차수 셀의 단일 평균

use crate::normalizer::to_numeric;
use cert_difficulty_common::{CertificationRecord, Phase, YearPhase};

/// 집계 결과
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Aggregates {
    pub pass_rate_by_phase: [Option<f64>; 3],
    pub overall_pass_rate: Option<f64>,
    pub average_applicants: Option<f64>,
}

/// 산술 평균 (값이 없으면 None)
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        sum += v;
        count += 1;
    }
    (count > 0).then(|| sum / count as f64)
}

/// 한 차수의 연도별 합격률 평균
///
/// 시트에 없는 열은 평균 대상에서 빠진다 (0으로 보지 않는다).
pub fn phase_pass_rate(record: &CertificationRecord, phase: Phase, years: &[u16]) -> Option<f64> {
    mean(years.iter().filter_map(|&year| {
        record
            .pass_rates
            .get(&YearPhase::new(year, phase))
            .and_then(to_numeric)
    }))
}

/// 연도×차수 전체 응시자 수 평균
pub fn average_applicants(record: &CertificationRecord, years: &[u16]) -> Option<f64> {
    mean(years.iter().flat_map(|&year| {
        Phase::ALL.iter().filter_map(move |&phase| {
            record
                .applicants
                .get(&YearPhase::new(year, phase))
                .and_then(to_numeric)
        })
    }))
}

/// 레코드 집계
pub fn aggregate(record: &CertificationRecord, years: &[u16]) -> Aggregates {
    let pass_rate_by_phase = Phase::ALL.map(|phase| phase_pass_rate(record, phase, years));
    let overall_pass_rate = mean(pass_rate_by_phase.iter().flatten().copied());

    Aggregates {
        pass_rate_by_phase,
        overall_pass_rate,
        average_applicants: average_applicants(record, years),
    }
}
