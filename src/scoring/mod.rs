//! 난이도 산정 모듈
//!
//! 원본 행 전체를 받아 파생값·원점수·등급을 한 번에 계산한다.
//!
//! ## 처리 흐름
//! 1. 행 단위 파생값 (집계, 시험 구조, 검정 횟수)
//! 2. 모집단 판정 후 모집단 통계 (최대 log 응시자 수, 검정 횟수 범위)
//! 3. 행 단위 원점수
//! 4. 모집단 점수로 등급 경계 계산, 등급 부여
//!
//! 결과(`ScoredDataset`)는 이후 변경되지 않는다.

pub mod aggregate;
pub mod binner;
pub mod bonus;
pub mod composer;
pub mod population;
pub mod trust;

pub use binner::{assign_tiers, TierCuts};
pub use population::PopulationStats;

use crate::normalizer::{frequency_to_numeric, structure::derive_structure_flags};
use cert_difficulty_common::{CertificationRecord, DerivedAttributes, ScoredRecord, ScoringWeights};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

/// 등급 산정 모집단
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TierPopulation {
    /// 전체 행
    #[default]
    All,
    /// 지정한 자격증ID를 제외 (합격률 자료 없음 목록 등)
    ExcludeIds(BTreeSet<String>),
    /// 전체 합격률이 있는 행만
    RequirePassRate,
}

impl TierPopulation {
    pub fn includes(&self, record: &CertificationRecord, derived: &DerivedAttributes) -> bool {
        match self {
            TierPopulation::All => true,
            TierPopulation::ExcludeIds(ids) => !ids.contains(record.id.trim()),
            TierPopulation::RequirePassRate => derived.overall_pass_rate.is_some(),
        }
    }
}

/// 산정 옵션
#[derive(Debug, Clone)]
pub struct ScoringOptions {
    /// 집계 대상 연도
    pub years: Vec<u16>,
    pub weights: ScoringWeights,
    pub population: TierPopulation,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            years: vec![2022, 2023, 2024],
            weights: ScoringWeights::default(),
            population: TierPopulation::All,
        }
    }
}

/// 산정 요약
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSummary {
    pub total_records: usize,
    pub scored_records: usize,
    pub population: PopulationStats,
    pub tier_cuts: TierCuts,
    /// 1~5등급별 건수
    pub tier_counts: [usize; 5],
}

/// 산정이 끝난 데이터셋 (읽기 전용)
#[derive(Debug, Clone)]
pub struct ScoredDataset {
    records: Vec<ScoredRecord>,
    summary: DatasetSummary,
}

impl ScoredDataset {
    pub fn records(&self) -> &[ScoredRecord] {
        &self.records
    }

    pub fn summary(&self) -> &DatasetSummary {
        &self.summary
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 자격증ID로 조회
    pub fn find(&self, id: &str) -> Option<&ScoredRecord> {
        let id = id.trim();
        self.records.iter().find(|r| r.record.id.trim() == id)
    }
}

/// 행 단위 파생값 계산
pub fn derive_attributes(record: &CertificationRecord, years: &[u16]) -> DerivedAttributes {
    let agg = aggregate::aggregate(record, years);
    DerivedAttributes {
        pass_rate_by_phase: agg.pass_rate_by_phase,
        overall_pass_rate: agg.overall_pass_rate,
        average_applicants: agg.average_applicants,
        structure: derive_structure_flags(
            &record.structure,
            &record.written,
            &record.practical,
            &record.interview,
        ),
        frequency_numeric: frequency_to_numeric(&record.frequency),
    }
}

/// 데이터셋 전체 산정
///
/// 모집단 밖의 행은 점수·등급이 결측이다.
pub fn score_dataset(records: Vec<CertificationRecord>, options: &ScoringOptions) -> ScoredDataset {
    let derived: Vec<DerivedAttributes> = records
        .iter()
        .map(|r| derive_attributes(r, &options.years))
        .collect();

    let membership: Vec<bool> = records
        .iter()
        .zip(&derived)
        .map(|(r, d)| options.population.includes(r, d))
        .collect();

    let members: Vec<&DerivedAttributes> = derived
        .iter()
        .zip(&membership)
        .filter(|(_, included)| **included)
        .map(|(d, _)| d)
        .collect();
    let population = PopulationStats::from_derived(members.iter().copied());
    debug!(
        total = records.len(),
        members = population.members,
        max_log_applicants = ?population.max_log_applicants,
        frequency_range = ?population.frequency_range,
        "모집단 통계 계산"
    );

    let breakdowns: Vec<_> = records
        .iter()
        .zip(&derived)
        .zip(&membership)
        .map(|((r, d), included)| {
            included.then(|| composer::compose_score(r, d, &population, &options.weights))
        })
        .collect();

    let scores: Vec<Option<f64>> = breakdowns.iter().map(|b| b.map(|b| b.total)).collect();
    let tier_cuts = TierCuts::from_scores(&scores);
    debug!(strategy = tier_cuts.strategy_name(), "등급 경계 계산");

    let mut tier_counts = [0usize; 5];
    let scored: Vec<ScoredRecord> = records
        .into_iter()
        .zip(derived)
        .zip(breakdowns)
        .map(|((record, derived), breakdown)| {
            let score = breakdown.map(|b| b.total);
            let tier = tier_cuts.tier_of(score);
            if let Some(t) = tier {
                tier_counts[(t - 1) as usize] += 1;
            }
            ScoredRecord {
                record,
                derived,
                breakdown,
                difficulty_score: score,
                difficulty_tier: tier,
            }
        })
        .collect();

    let summary = DatasetSummary {
        total_records: scored.len(),
        scored_records: scores.iter().filter(|s| s.is_some()).count(),
        population,
        tier_cuts,
        tier_counts,
    };

    ScoredDataset {
        records: scored,
        summary,
    }
}
