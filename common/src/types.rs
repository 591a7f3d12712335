//! 자격증 데이터 타입 정의
//!
//! CLI와 라이브러리가 공유하는 타입:
//! - CellValue: 스프레드시트 원본 셀
//! - CertificationRecord: 자격증 1건의 원본 행
//! - DerivedAttributes: 행 단위 파생값 (합격률 평균, 시험 구조 등)
//! - ScoredRecord: 최종 출력 (원본 + 파생값 + 난이도)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 스프레드시트 셀 값
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Number(_) => false,
            CellValue::Text(s) => s.trim().is_empty(),
        }
    }

    /// 표시·키 비교용 문자열 (앞뒤 공백 제거)
    ///
    /// 정수값 실수는 소수점 없이 표기한다 (`1234.0` → `"1234"`).
    pub fn to_key_string(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                format!("{}", *n as i64)
            }
            CellValue::Number(n) => n.to_string(),
            CellValue::Text(s) => s.trim().to_string(),
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

/// 시험 차수 (1차/2차/3차)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Phase {
    First,
    Second,
    Third,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::First, Phase::Second, Phase::Third];

    /// 열 이름에 쓰이는 표기
    pub fn label(&self) -> &'static str {
        match self {
            Phase::First => "1차",
            Phase::Second => "2차",
            Phase::Third => "3차",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Phase::First => 0,
            Phase::Second => 1,
            Phase::Third => 2,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 연도 × 차수 열 좌표
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearPhase {
    pub year: u16,
    pub phase: Phase,
}

impl YearPhase {
    pub fn new(year: u16, phase: Phase) -> Self {
        Self { year, phase }
    }
}

/// 자격증 원본 행
///
/// 연도×차수 맵에는 입력 시트에 실제로 존재하는 열만 들어간다.
/// 열이 아예 없으면 키가 없고, 빈 셀이면 `CellValue::Empty`가 들어간다.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationRecord {
    pub id: String,
    pub name: String,

    pub category: String,          // 자격증_분류
    pub grade_code: CellValue,     // 자격증_등급_코드
    pub frequency: CellValue,      // 검정 횟수 (표시는 원문)
    #[serde(rename = "structureText")]
    pub structure: String,         // 시험종류

    #[serde(skip)]
    pub written: CellValue,
    #[serde(skip)]
    pub practical: CellValue,
    #[serde(skip)]
    pub interview: CellValue,

    #[serde(skip)]
    pub pass_rates: BTreeMap<YearPhase, CellValue>,
    #[serde(skip)]
    pub applicants: BTreeMap<YearPhase, CellValue>,
}

impl CertificationRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_pass_rate(mut self, year: u16, phase: Phase, value: impl Into<CellValue>) -> Self {
        self.pass_rates.insert(YearPhase::new(year, phase), value.into());
        self
    }

    pub fn with_applicants(mut self, year: u16, phase: Phase, value: impl Into<CellValue>) -> Self {
        self.applicants.insert(YearPhase::new(year, phase), value.into());
        self
    }
}

/// 시험 구조 플래그
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureFlags {
    pub has_written: bool,
    pub has_practical: bool,
    pub has_interview: bool,
    /// "필기+실기" 형태의 표기 (해당 없으면 빈 문자열)
    pub label: String,
}

/// 행 단위 파생값 (로드 직후 한 번만 계산)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedAttributes {
    /// 차수별 다년 평균 합격률 [1차, 2차, 3차]
    pub pass_rate_by_phase: [Option<f64>; 3],
    pub overall_pass_rate: Option<f64>,
    pub average_applicants: Option<f64>,
    pub structure: StructureFlags,
    pub frequency_numeric: Option<f64>,
}

/// 난이도 점수 구성 요소
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// (100 - 전체 합격률) / 100
    pub inverse_pass_rate: Option<f64>,
    pub trust_weight: f64,
    pub class_bonus: f64,
    pub grade_bonus: f64,
    pub frequency_bonus: f64,
    pub structure_bonus: f64,
    pub total: f64,
}

/// 난이도 산정 결과
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredRecord {
    #[serde(flatten)]
    pub record: CertificationRecord,
    #[serde(flatten)]
    pub derived: DerivedAttributes,
    pub breakdown: Option<ScoreBreakdown>,
    pub difficulty_score: Option<f64>,
    pub difficulty_tier: Option<u8>,
}

impl ScoredRecord {
    pub fn id(&self) -> &str {
        &self.record.id
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }
}

/// 난이도 가중치
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// 응시자수 신뢰가중 하한
    pub trust_floor: f64,
    /// 응시자수 신뢰가중 폭
    pub trust_span: f64,
    pub bonus_practical: f64,
    pub bonus_interview: f64,
    /// (500 - 등급코드) / 400 × max
    pub bonus_grade_max: f64,
    /// 검정 횟수가 적을수록 가산
    pub bonus_frequency_max: f64,
    pub bonus_professional: f64,
    pub bonus_technical: f64,
    pub bonus_private: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            trust_floor: 0.5,
            trust_span: 0.5,
            bonus_practical: 0.15,
            bonus_interview: 0.10,
            bonus_grade_max: 0.20,
            bonus_frequency_max: 0.10,
            bonus_professional: 0.20,
            bonus_technical: 0.10,
            bonus_private: 0.00,
        }
    }
}
