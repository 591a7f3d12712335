//! 모집단 통계
//!
//! 행 단위 계산에 앞서 모집단 전체에서 한 번만 구하는 값.

use super::bonus::FrequencyRange;
use super::trust::max_log_applicants;
use cert_difficulty_common::DerivedAttributes;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulationStats {
    /// 모집단에 속한 행 수
    pub members: usize,
    pub max_log_applicants: Option<f64>,
    pub frequency_range: Option<FrequencyRange>,
}

impl PopulationStats {
    pub fn from_derived<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a DerivedAttributes>,
        I::IntoIter: Clone,
    {
        let rows = rows.into_iter();
        Self {
            members: rows.clone().count(),
            max_log_applicants: max_log_applicants(rows.clone().map(|d| d.average_applicants)),
            frequency_range: FrequencyRange::from_population(rows.map(|d| d.frequency_numeric)),
        }
    }
}
