//! 로딩 → 산정 → 조회 통합 테스트

mod support;

use cert_difficulty::loader;
use cert_difficulty::scoring::{score_dataset, ScoredDataset, ScoringOptions, TierPopulation};
use cert_difficulty::view::{self, Filter};
use cert_difficulty_common::SchemaMapping;
use std::collections::BTreeSet;
use tempfile::tempdir;

fn scored_fixture(population: TierPopulation) -> ScoredDataset {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = support::write_cert_fixture(dir.path());
    let loaded = loader::load_certifications(&path, &SchemaMapping::korean_preset()).unwrap();
    let options = ScoringOptions {
        years: loaded.years.clone(),
        population,
        ..Default::default()
    };
    score_dataset(loaded.records, &options)
}

fn tier(dataset: &ScoredDataset, id: &str) -> Option<u8> {
    dataset.find(id).unwrap().difficulty_tier
}

#[test]
fn test_fixture_scores_and_tiers() {
    let dataset = scored_fixture(TierPopulation::All);
    assert_eq!(dataset.len(), 8);

    let it = dataset.find("1320").unwrap();
    assert_eq!(it.derived.pass_rate_by_phase[0], Some(55.0));
    assert_eq!(it.derived.pass_rate_by_phase[1], Some(40.0));
    assert_eq!(it.derived.overall_pass_rate, Some(47.5));
    assert_eq!(it.derived.average_applicants, Some(29000.0));
    assert_eq!(it.derived.frequency_numeric, Some(3.0));

    // 시험종류가 비어 있어도 필기·실기 열로 구조 판정
    let patent = dataset.find("2290").unwrap();
    assert_eq!(patent.derived.structure.label, "필기+실기");

    // 합격률·응시자 수가 모두 없으면 검정 횟수 가산만 남는다 (수시 = 6회)
    let unknown = dataset.find("9999").unwrap();
    assert_eq!(unknown.derived.overall_pass_rate, None);
    assert!((unknown.difficulty_score.unwrap() - 0.1 * 6.0 / 11.0).abs() < 1e-12);
    assert_eq!(unknown.breakdown.unwrap().trust_weight, 1.0);

    assert_eq!(tier(&dataset, "2290"), Some(5));
    assert_eq!(tier(&dataset, "0001"), Some(5));
    assert_eq!(tier(&dataset, "5001"), Some(4));
    assert_eq!(tier(&dataset, "1320"), Some(3));
    assert_eq!(tier(&dataset, "6110"), Some(3));
    assert_eq!(tier(&dataset, "7910"), Some(2));
    assert_eq!(tier(&dataset, "1430"), Some(1));
    assert_eq!(tier(&dataset, "9999"), Some(1));

    let summary = dataset.summary();
    assert_eq!(summary.tier_cuts.strategy_name(), "quantile");
    assert_eq!(summary.tier_counts, [2, 1, 2, 1, 2]);
}

#[test]
fn test_scoring_is_idempotent() {
    let first = scored_fixture(TierPopulation::All);
    let second = scored_fixture(TierPopulation::All);

    let a = serde_json::to_string(first.records()).unwrap();
    let b = serde_json::to_string(second.records()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_tiers_follow_score_order() {
    let dataset = scored_fixture(TierPopulation::All);
    let rows = dataset.records();
    for a in rows {
        for b in rows {
            if let (Some(sa), Some(sb)) = (a.difficulty_score, b.difficulty_score) {
                assert!((a.difficulty_tier.unwrap() as f64 - b.difficulty_tier.unwrap() as f64) * (sa - sb) >= 0.0);
            }
        }
    }
    assert!(rows.iter().all(|r| matches!(r.difficulty_tier, Some(1..=5))));
}

#[test]
fn test_population_without_pass_rate() {
    let dataset = scored_fixture(TierPopulation::RequirePassRate);

    let unknown = dataset.find("9999").unwrap();
    assert_eq!(unknown.difficulty_score, None);
    assert_eq!(unknown.difficulty_tier, None);
    assert_eq!(dataset.summary().scored_records, 7);
    assert_eq!(dataset.summary().tier_counts.iter().sum::<usize>(), 7);
    assert_eq!(tier(&dataset, "2290"), Some(5));
}

#[test]
fn test_population_excluding_ids() {
    let excluded = BTreeSet::from(["9999".to_string(), "1430".to_string()]);
    let dataset = scored_fixture(TierPopulation::ExcludeIds(excluded));

    assert_eq!(tier(&dataset, "9999"), None);
    assert_eq!(tier(&dataset, "1430"), None);
    assert_eq!(dataset.summary().population.members, 6);
}

#[test]
fn test_view_over_fixture() {
    let dataset = scored_fixture(TierPopulation::All);

    let rows = Filter::default().apply(&dataset);
    let order: Vec<&str> = rows.iter().map(|r| r.id()).collect();
    assert_eq!(order, vec!["2290", "0001", "5001", "6110", "1320", "7910", "1430", "9999"]);

    let hardest = Filter {
        tiers: vec![5],
        ..Default::default()
    };
    assert_eq!(hardest.apply(&dataset).len(), 2);

    let interview = Filter {
        require_interview: true,
        ..Default::default()
    };
    let ids: Vec<&str> = interview.apply(&dataset).iter().map(|r| r.id()).collect();
    assert_eq!(ids, vec!["0001"]);

    assert_eq!(view::grade_buckets(&dataset), vec![100, 200, 300, 500]);
    assert_eq!(view::categories(&dataset), vec!["국가기술자격", "국가전문자격", "민간자격"]);
}
