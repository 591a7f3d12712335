//! 스키마 매핑 모듈
//!
//! 스프레드시트 열 이름의 표기 차이를 흡수한다.
//! 정규 필드마다 허용되는 원본 열 이름 후보를 선언하고,
//! 로드 시점에 한 번만 열 인덱스로 확정한다.

use crate::error::{Error, Result};
use crate::types::{Phase, YearPhase};
use serde::{Deserialize, Serialize};

/// 연도×차수 열 이름 패턴의 자리표시자
pub const YEAR_PLACEHOLDER: &str = "{year}";
pub const PHASE_PLACEHOLDER: &str = "{phase}";

/// 스키마 매핑 정의
///
/// 각 필드는 후보 목록이며 앞쪽이 우선한다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaMapping {
    /// 집계 대상 연도
    pub years: Vec<u16>,
    pub id: Vec<String>,
    pub name: Vec<String>,
    pub category: Vec<String>,
    pub grade_code: Vec<String>,
    pub frequency: Vec<String>,
    pub structure: Vec<String>,
    pub written: Vec<String>,
    pub practical: Vec<String>,
    pub interview: Vec<String>,
    /// 합격률 열 패턴 (`{year}`, `{phase}` 치환)
    pub pass_rate: Vec<String>,
    /// 응시자 수 열 패턴
    pub applicants: Vec<String>,
}

/// 확정된 열 인덱스
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSchema {
    pub years: Vec<u16>,
    pub id: usize,
    pub name: usize,
    pub category: Option<usize>,
    pub grade_code: Option<usize>,
    pub frequency: Option<usize>,
    pub structure: Option<usize>,
    pub written: Option<usize>,
    pub practical: Option<usize>,
    pub interview: Option<usize>,
    pub pass_rates: Vec<(YearPhase, usize)>,
    pub applicants: Vec<(YearPhase, usize)>,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

impl SchemaMapping {
    /// 내장 프리셋 조회
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "korean" | "default" | "기본" => Some(Self::korean_preset()),
            _ => None,
        }
    }

    /// JSON 파일에서 읽기
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// JSON 문자열에서 읽기
    pub fn from_json(json: &str) -> Result<Self> {
        let mapping: Self = serde_json::from_str(json)?;
        Ok(mapping)
    }

    /// 자격증 통합 데이터 시트의 열 이름
    ///
    /// 응시자 수 열은 연도에 따라 "응시자 수"/"응시자수"가 섞여 있다.
    pub fn korean_preset() -> Self {
        Self {
            years: vec![2022, 2023, 2024],
            id: strings(&["자격증ID"]),
            name: strings(&["자격증명"]),
            category: strings(&["자격증_분류"]),
            grade_code: strings(&["자격증_등급_코드"]),
            frequency: strings(&["검정 횟수", "검정횟수"]),
            structure: strings(&["시험종류"]),
            written: strings(&["필기"]),
            practical: strings(&["실기"]),
            interview: strings(&["면접"]),
            pass_rate: strings(&["{year}년 {phase} 합격률"]),
            applicants: strings(&["{year}년 {phase} 응시자 수", "{year}년 {phase} 응시자수"]),
        }
    }

    /// 매핑 병합 (나중에 추가한 후보가 우선)
    pub fn merge(&mut self, other: &SchemaMapping) {
        fn prepend(target: &mut Vec<String>, front: &[String]) {
            let mut merged: Vec<String> = front.to_vec();
            merged.extend(target.drain(..).filter(|c| !front.contains(c)));
            *target = merged;
        }

        if !other.years.is_empty() {
            self.years = other.years.clone();
        }
        prepend(&mut self.id, &other.id);
        prepend(&mut self.name, &other.name);
        prepend(&mut self.category, &other.category);
        prepend(&mut self.grade_code, &other.grade_code);
        prepend(&mut self.frequency, &other.frequency);
        prepend(&mut self.structure, &other.structure);
        prepend(&mut self.written, &other.written);
        prepend(&mut self.practical, &other.practical);
        prepend(&mut self.interview, &other.interview);
        prepend(&mut self.pass_rate, &other.pass_rate);
        prepend(&mut self.applicants, &other.applicants);
    }

    /// 헤더 행에 대해 열 인덱스를 확정
    ///
    /// 자격증ID·자격증명 열은 필수, 나머지는 없으면 None.
    pub fn resolve(&self, headers: &[String]) -> Result<ResolvedSchema> {
        let require = |field: &str, candidates: &[String]| -> Result<usize> {
            find_column(headers, candidates).ok_or_else(|| {
                Error::Schema(format!("{} (후보: {})", field, candidates.join(", ")))
            })
        };

        Ok(ResolvedSchema {
            years: self.years.clone(),
            id: require("id", self.id.as_slice())?,
            name: require("name", self.name.as_slice())?,
            category: find_column(headers, &self.category),
            grade_code: find_column(headers, &self.grade_code),
            frequency: find_column(headers, &self.frequency),
            structure: find_column(headers, &self.structure),
            written: find_column(headers, &self.written),
            practical: find_column(headers, &self.practical),
            interview: find_column(headers, &self.interview),
            pass_rates: self.resolve_grid(headers, &self.pass_rate),
            applicants: self.resolve_grid(headers, &self.applicants),
        })
    }

    /// 연도×차수 열 중 존재하는 것만 모은다
    fn resolve_grid(&self, headers: &[String], patterns: &[String]) -> Vec<(YearPhase, usize)> {
        let mut cells = Vec::new();
        for &year in &self.years {
            for phase in Phase::ALL {
                let candidates: Vec<String> = patterns
                    .iter()
                    .map(|p| expand_pattern(p, year, phase))
                    .collect();
                if let Some(idx) = find_column(headers, &candidates) {
                    cells.push((YearPhase::new(year, phase), idx));
                }
            }
        }
        cells
    }
}

/// 후보 순서대로 처음 일치하는 열
fn find_column(headers: &[String], candidates: &[String]) -> Option<usize> {
    candidates
        .iter()
        .find_map(|c| headers.iter().position(|h| h.trim() == c.trim()))
}

/// 열 이름 패턴에 연도·차수를 채워 넣는다
pub fn expand_pattern(pattern: &str, year: u16, phase: Phase) -> String {
    pattern
        .replace(YEAR_PLACEHOLDER, &year.to_string())
        .replace(PHASE_PLACEHOLDER, phase.label())
}

/// 전공·직무·직업정보 시트의 열 이름
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogColumns {
    pub major_name: String,
    pub cert_id: String,
    pub job_seq: String,
    pub job_title: String,
}

impl Default for CatalogColumns {
    fn default() -> Self {
        Self {
            major_name: "학과명".into(),
            cert_id: "자격증ID".into(),
            job_seq: "jobdicSeq".into(),
            job_title: "직업명".into(),
        }
    }
}
