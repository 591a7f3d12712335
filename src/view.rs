//! 산정 결과 조회 (필터 + 정렬)
//!
//! `ScoredDataset`을 빌려 읽기만 한다.

use crate::normalizer::grade::{grade_bucket, GRADE_BUCKETS};
use crate::scoring::ScoredDataset;
use cert_difficulty_common::ScoredRecord;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// 조회 조건 (비어 있는 조건은 걸러내지 않는다)
#[derive(Debug, Clone, Default)]
pub struct Filter {
    /// 자격증명 부분 일치 (대소문자 무시)
    pub name_query: Option<String>,
    /// 허용 자격증ID (전공 선택 결과)
    pub cert_ids: Option<BTreeSet<String>>,
    /// 자격증_분류 (완전 일치)
    pub categories: Vec<String>,
    /// 등급 구간 (100~500)
    pub grade_buckets: Vec<i64>,
    pub require_written: bool,
    pub require_practical: bool,
    pub require_interview: bool,
    /// 난이도 등급 (지정하면 등급 결측 행은 제외)
    pub tiers: Vec<u8>,
}

impl Filter {
    pub fn matches(&self, row: &ScoredRecord) -> bool {
        if let Some(q) = self.name_query.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            if !row.record.name.to_lowercase().contains(&q.to_lowercase()) {
                return false;
            }
        }
        if let Some(ids) = &self.cert_ids {
            if !ids.contains(row.record.id.trim()) {
                return false;
            }
        }
        if !self.categories.is_empty() && !self.categories.iter().any(|c| c == &row.record.category) {
            return false;
        }
        if !self.grade_buckets.is_empty() {
            match grade_bucket(&row.record.grade_code) {
                Some(b) if self.grade_buckets.contains(&b) => {}
                _ => return false,
            }
        }

        let s = &row.derived.structure;
        if (self.require_written && !s.has_written)
            || (self.require_practical && !s.has_practical)
            || (self.require_interview && !s.has_interview)
        {
            return false;
        }

        if !self.tiers.is_empty() {
            match row.difficulty_tier {
                Some(t) if self.tiers.contains(&t) => {}
                _ => return false,
            }
        }
        true
    }

    /// 조건에 맞는 행을 난이도 순으로
    pub fn apply<'a>(&self, dataset: &'a ScoredDataset) -> Vec<&'a ScoredRecord> {
        let mut rows: Vec<&ScoredRecord> = dataset.records().iter().filter(|r| self.matches(r)).collect();
        sort_by_difficulty(&mut rows);
        rows
    }
}

/// 결측은 항상 뒤로
fn cmp_missing_last(a: Option<f64>, b: Option<f64>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => {
            if descending {
                y.total_cmp(&x)
            } else {
                x.total_cmp(&y)
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// 난이도 점수 내림차순, 같으면 전체 합격률 오름차순 (안정 정렬)
pub fn sort_by_difficulty(rows: &mut [&ScoredRecord]) {
    rows.sort_by(|a, b| {
        cmp_missing_last(a.difficulty_score, b.difficulty_score, true)
            .then_with(|| cmp_missing_last(a.derived.overall_pass_rate, b.derived.overall_pass_rate, false))
    });
}

/// 데이터셋에 있는 분류 (정렬, 빈 값 제외)
pub fn categories(dataset: &ScoredDataset) -> Vec<String> {
    dataset
        .records()
        .iter()
        .map(|r| r.record.category.trim())
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// 데이터셋에 있는 등급 구간 (100~500 중)
pub fn grade_buckets(dataset: &ScoredDataset) -> Vec<i64> {
    let present: BTreeSet<i64> = dataset
        .records()
        .iter()
        .filter_map(|r| grade_bucket(&r.record.grade_code))
        .collect();
    GRADE_BUCKETS.iter().copied().filter(|b| present.contains(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{score_dataset, ScoringOptions};
    use cert_difficulty_common::{CellValue, CertificationRecord, Phase};

    fn dataset() -> ScoredDataset {
        let make = |id: &str, name: &str, category: &str, grade: f64, structure: &str, pass: Option<f64>| {
            let mut r = CertificationRecord::new(id, name).with_applicants(2022, Phase::First, 100.0);
            if let Some(p) = pass {
                r = r.with_pass_rate(2022, Phase::First, p);
            }
            r.category = category.into();
            r.grade_code = CellValue::Number(grade);
            r.structure = structure.into();
            r
        };
        score_dataset(
            vec![
                make("1", "정보처리기사", "국가기술자격", 300.0, "필기+실기", Some(50.0)),
                make("2", "변리사", "국가전문자격", 100.0, "필기+실기+면접", Some(10.0)),
                make("3", "컴퓨터활용능력", "민간자격", 500.0, "필기", Some(80.0)),
                make("4", "정보보안기사", "국가기술자격", 300.0, "필기+실기", None),
            ],
            &ScoringOptions::default(),
        )
    }

    fn ids(rows: &[&ScoredRecord]) -> Vec<String> {
        rows.iter().map(|r| r.record.id.clone()).collect()
    }

    #[test]
    fn test_default_filter_sorts_all() {
        let ds = dataset();
        let rows = Filter::default().apply(&ds);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].record.id, "2");
        for pair in rows.windows(2) {
            assert!(pair[0].difficulty_score >= pair[1].difficulty_score);
        }
    }

    #[test]
    fn test_name_query_case_insensitive() {
        let ds = dataset();
        let filter = Filter {
            name_query: Some(" 기사 ".into()),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&ds)).len(), 2);
    }

    #[test]
    fn test_cert_ids_and_category() {
        let ds = dataset();
        let filter = Filter {
            cert_ids: Some(BTreeSet::from(["1".to_string(), "3".to_string()])),
            categories: vec!["국가기술자격".into()],
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&ds)), vec!["1"]);

        let none = Filter {
            cert_ids: Some(BTreeSet::new()),
            ..Default::default()
        };
        assert!(none.apply(&ds).is_empty());
    }

    #[test]
    fn test_structure_and_grade() {
        let ds = dataset();
        let filter = Filter {
            require_interview: true,
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&ds)), vec!["2"]);

        let filter = Filter {
            grade_buckets: vec![300],
            require_practical: true,
            ..Default::default()
        };
        assert_eq!(filter.apply(&ds).len(), 2);
    }

    #[test]
    fn test_tier_filter() {
        let ds = dataset();
        let top = ds.records().iter().find(|r| r.record.id == "2").unwrap();
        let filter = Filter {
            tiers: vec![top.difficulty_tier.unwrap()],
            ..Default::default()
        };
        assert!(ids(&filter.apply(&ds)).contains(&"2".to_string()));
    }

    #[test]
    fn test_missing_values_sort_last() {
        assert_eq!(cmp_missing_last(Some(1.0), None, true), Ordering::Less);
        assert_eq!(cmp_missing_last(None, Some(1.0), false), Ordering::Greater);
        assert_eq!(cmp_missing_last(Some(2.0), Some(1.0), true), Ordering::Less);
        assert_eq!(cmp_missing_last(Some(2.0), Some(1.0), false), Ordering::Greater);
    }

    #[test]
    fn test_categories_and_grade_buckets() {
        let ds = dataset();
        assert_eq!(categories(&ds), vec!["국가기술자격", "국가전문자격", "민간자격"]);
        assert_eq!(grade_buckets(&ds), vec![100, 300, 500]);
    }
}
