//! 난이도 등급(1~5) 구간화
//!
//! ## 전략
//! 1. 서로 다른 값이 5개 이상: 5분위 등빈도 구간 (선형 보간 분위수 경계,
//!    오른쪽 닫힌 구간, 첫 구간은 하한 포함)
//! 2. 값이 부족하거나 분위 경계가 겹치면: min/max 선형 밴드
//! 3. 모든 값이 같으면: 전부 3등급
//!
//! 결측 점수는 등급도 결측.

use serde::Serialize;

pub const TIER_COUNT: usize = 5;
const MIDDLE_TIER: u8 = 3;
/// 선형 밴드 분모 보정값
const BAND_EPSILON: f64 = 1e-12;

/// 등급 경계 (모집단에서 한 번 계산)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "strategy", rename_all = "camelCase")]
pub enum TierCuts {
    /// 유효 점수가 없음
    Empty,
    /// 모든 점수가 같음
    Constant,
    /// 선형 밴드
    Linear { min: f64, max: f64 },
    /// 5분위 경계 [q0, q20, q40, q60, q80, q100]
    Quantile { edges: [f64; TIER_COUNT + 1] },
}

/// 선형 보간 분위수 (정렬된 입력)
fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let t = pos - lo as f64;
    let (a, b) = (sorted[lo], sorted[hi]);
    let diff = b - a;
    // 보간 비율이 0.5 이상이면 위쪽 값 기준으로 계산해 반올림 오차를 줄인다
    if t >= 0.5 {
        b - diff * (1.0 - t)
    } else {
        a + diff * t
    }
}

/// 분위 경계 계산 (경계가 순증가하지 않으면 None)
fn quantile_edges(sorted: &[f64]) -> Option<[f64; TIER_COUNT + 1]> {
    let step = 1.0 / TIER_COUNT as f64;
    let mut edges = [0.0; TIER_COUNT + 1];
    for (i, edge) in edges.iter_mut().enumerate() {
        let q = if i == TIER_COUNT { 1.0 } else { i as f64 * step };
        *edge = quantile_sorted(sorted, q);
    }
    edges.windows(2).all(|w| w[0] < w[1]).then_some(edges)
}

impl TierCuts {
    /// 점수 모집단에서 경계 계산
    pub fn from_scores(scores: &[Option<f64>]) -> Self {
        let mut valid: Vec<f64> = scores.iter().flatten().copied().filter(|v| v.is_finite()).collect();
        if valid.is_empty() {
            return TierCuts::Empty;
        }
        valid.sort_by(f64::total_cmp);

        let mut distinct = valid.clone();
        distinct.dedup();
        if distinct.len() >= TIER_COUNT {
            if let Some(edges) = quantile_edges(&valid) {
                return TierCuts::Quantile { edges };
            }
        }

        let min = valid[0];
        let max = valid[valid.len() - 1];
        if max == min {
            TierCuts::Constant
        } else {
            TierCuts::Linear { min, max }
        }
    }

    /// 점수 하나의 등급
    pub fn tier_of(&self, score: Option<f64>) -> Option<u8> {
        let x = score.filter(|v| v.is_finite())?;
        match self {
            TierCuts::Empty => None,
            TierCuts::Constant => Some(MIDDLE_TIER),
            TierCuts::Linear { min, max } => {
                let r = (x - min) / (max - min + BAND_EPSILON);
                let band = (r * TIER_COUNT as f64).floor() + 1.0;
                Some(band.clamp(1.0, TIER_COUNT as f64) as u8)
            }
            TierCuts::Quantile { edges } => {
                if x == edges[0] {
                    return Some(1);
                }
                if x < edges[0] || x > edges[TIER_COUNT] {
                    return None;
                }
                // 경계 중 x보다 작은 것의 개수 = 오른쪽 닫힌 구간 번호
                let idx = edges.partition_point(|&e| e < x);
                Some(idx as u8)
            }
        }
    }

    pub fn strategy_name(&self) -> &'static str {
        match self {
            TierCuts::Empty => "empty",
            TierCuts::Constant => "constant",
            TierCuts::Linear { .. } => "linear",
            TierCuts::Quantile { .. } => "quantile",
        }
    }
}

/// 점수 열 전체에 등급 부여
pub fn assign_tiers(scores: &[Option<f64>]) -> Vec<Option<u8>> {
    let cuts = TierCuts::from_scores(scores);
    scores.iter().map(|s| cuts.tier_of(*s)).collect()
}
