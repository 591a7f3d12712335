//! 자격증 → 관련 직무, 직업 상세 정보

use super::is_blank_value;
use crate::error::{CertError, Result};
use crate::loader::Table;
use crate::normalizer::extract_first_number;
use cert_difficulty_common::CatalogColumns;
use serde::Serialize;
use std::cmp::Ordering;

/// 직업명이 없을 때 표시
pub const UNKNOWN_JOB_TITLE: &str = "(직업명 미상)";

/// 상세 정보의 6개 지표
pub const METRIC_KEYS: [&str; 6] = ["보상", "고용안정", "발전가능성", "근무여건", "직업전문성", "고용평등"];

/// 상세 정보의 긴 텍스트 항목 (표시 순서)
pub const SECTION_KEYS: [&str; 11] = [
    "직업전망요약",
    "취업방법",
    "준비과정",
    "교육과정",
    "적성",
    "고용형태",
    "고용분류",
    "표준분류",
    "직무구분",
    "초임",
    "유사직업명",
];

/// 관련 직무 1건
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatedJob {
    pub seq: String,
    pub title: String,
    pub majors: Vec<String>,
}

impl RelatedJob {
    /// "학과A, 학과B"
    pub fn majors_label(&self) -> String {
        self.majors.join(", ")
    }
}

/// jobdicSeq 비교 (둘 다 숫자면 수치 비교)
fn compare_seq(a: &str, b: &str) -> Ordering {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.total_cmp(&y),
        _ => a.cmp(b),
    }
}

/// 자격증ID → 직무 매핑 시트
#[derive(Debug, Clone)]
pub struct JobIndex {
    table: Table,
    columns: CatalogColumns,
}

impl JobIndex {
    pub fn from_table(table: Table, columns: &CatalogColumns) -> Result<Self> {
        for required in [&columns.cert_id, &columns.job_seq] {
            if !table.has_column(required) {
                return Err(CertError::MissingColumn(required.clone()));
            }
        }
        Ok(Self {
            table,
            columns: columns.clone(),
        })
    }

    /// 자격증 하나의 관련 직무
    ///
    /// 학과명 열이 있으면 (jobdicSeq, 직업명)으로 묶어 학과명을 합친다.
    /// 이때 직업명이 빈 행은 묶음에서 빠진다.
    pub fn related_jobs(&self, cert_id: &str) -> Vec<RelatedJob> {
        let cert_id = cert_id.trim();
        let cols = &self.columns;
        let rows = self
            .table
            .rows
            .iter()
            .filter(|row| self.table.text(row, &cols.cert_id) == cert_id);

        if !self.table.has_column(&cols.major_name) {
            return rows
                .map(|row| {
                    let title = self.table.text(row, &cols.job_title);
                    RelatedJob {
                        seq: self.table.text(row, &cols.job_seq),
                        title: if is_blank_value(&title) { UNKNOWN_JOB_TITLE.to_string() } else { title },
                        majors: Vec::new(),
                    }
                })
                .collect();
        }

        let mut groups: Vec<RelatedJob> = Vec::new();
        for row in rows {
            let seq = self.table.text(row, &cols.job_seq);
            let title = self.table.text(row, &cols.job_title);
            if is_blank_value(&seq) || is_blank_value(&title) {
                continue;
            }
            let major = self.table.text(row, &cols.major_name);

            let idx = match groups.iter().position(|g| g.seq == seq && g.title == title) {
                Some(idx) => idx,
                None => {
                    groups.push(RelatedJob {
                        seq,
                        title,
                        majors: Vec::new(),
                    });
                    groups.len() - 1
                }
            };
            let majors = &mut groups[idx].majors;
            if !is_blank_value(&major) && !majors.contains(&major) {
                majors.push(major);
            }
        }

        groups.sort_by(|a, b| compare_seq(&a.seq, &b.seq).then_with(|| a.title.cmp(&b.title)));
        groups
    }
}

/// 수치 지표 (원문 + 추출값)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobMetric {
    pub name: String,
    pub raw: String,
    pub value: Option<f64>,
}

/// 긴 텍스트 항목
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobSection {
    pub name: String,
    pub text: String,
}

/// 직업 상세 정보
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobDetail {
    pub seq: String,
    pub title: String,
    pub metrics: Vec<JobMetric>,
    pub sections: Vec<JobSection>,
}

/// jobdicSeq → 직업정보 시트
#[derive(Debug, Clone)]
pub struct JobInfoIndex {
    table: Table,
    columns: CatalogColumns,
}

impl JobInfoIndex {
    pub fn from_table(table: Table, columns: &CatalogColumns) -> Result<Self> {
        if !table.has_column(&columns.job_seq) {
            return Err(CertError::MissingColumn(columns.job_seq.clone()));
        }
        Ok(Self {
            table,
            columns: columns.clone(),
        })
    }

    /// 첫 번째로 일치하는 행의 상세 정보
    ///
    /// `title`을 주면 시트의 직업명 대신 쓴다.
    pub fn detail(&self, seq: &str, title: Option<&str>) -> Option<JobDetail> {
        let seq = seq.trim();
        let row = self
            .table
            .rows
            .iter()
            .find(|row| self.table.text(row, &self.columns.job_seq) == seq)?;

        let metrics = METRIC_KEYS
            .iter()
            .filter_map(|&key| {
                let raw = self.table.text(row, key);
                (!is_blank_value(&raw)).then(|| JobMetric {
                    name: key.to_string(),
                    value: extract_first_number(&raw),
                    raw,
                })
            })
            .collect();

        let sections = SECTION_KEYS
            .iter()
            .filter_map(|&key| {
                let text = self.table.text(row, key);
                (!is_blank_value(&text)).then(|| JobSection {
                    name: key.to_string(),
                    text,
                })
            })
            .collect();

        let title = title
            .map(str::to_string)
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| self.table.text(row, &self.columns.job_title));

        Some(JobDetail {
            seq: seq.to_string(),
            title,
            metrics,
            sections,
        })
    }
}
