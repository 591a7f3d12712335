//! 전공(학과) → 자격증 매핑

use super::is_blank_value;
use crate::error::{CertError, Result};
use crate::loader::Table;
use cert_difficulty_common::CatalogColumns;
use std::collections::{BTreeMap, BTreeSet};

/// 학과명 → 자격증ID 목록
#[derive(Debug, Clone, Default)]
pub struct MajorIndex {
    /// 학과명 → 자격증ID (처음 나온 순서, 중복 제거)
    by_major: BTreeMap<String, Vec<String>>,
}

impl MajorIndex {
    pub fn from_table(table: &Table, columns: &CatalogColumns) -> Result<Self> {
        for required in [&columns.major_name, &columns.cert_id] {
            if !table.has_column(required) {
                return Err(CertError::MissingColumn(required.clone()));
            }
        }

        let mut by_major: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for row in &table.rows {
            let major = table.text(row, &columns.major_name);
            if is_blank_value(&major) {
                continue;
            }
            let id = table.text(row, &columns.cert_id);
            let ids = by_major.entry(major).or_default();
            if !id.is_empty() && !ids.contains(&id) {
                ids.push(id);
            }
        }
        Ok(Self { by_major })
    }

    /// 정렬된 학과명 전체
    pub fn majors(&self) -> Vec<&str> {
        self.by_major.keys().map(String::as_str).collect()
    }

    /// 학과명 부분 일치 검색 (대소문자 무시, 빈 검색어는 전체)
    pub fn search(&self, query: &str) -> Vec<&str> {
        let query = query.trim().to_lowercase();
        self.by_major
            .keys()
            .filter(|m| query.is_empty() || m.to_lowercase().contains(&query))
            .map(String::as_str)
            .collect()
    }

    /// 학과 하나의 자격증ID 목록 (학과가 없으면 빈 목록)
    pub fn cert_ids_for(&self, major: &str) -> &[String] {
        self.by_major
            .get(major.trim())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// 필터용 집합
    pub fn cert_id_set(&self, major: &str) -> BTreeSet<String> {
        self.cert_ids_for(major).iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.by_major.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_major.is_empty()
    }
}
