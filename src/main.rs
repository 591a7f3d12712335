use clap::Parser;
use cert_difficulty::{catalog, cli, config, error, export, loader, scoring, view};
use cert_difficulty_common::{SchemaMapping, ScoredRecord};
use cli::{Cli, Commands};
use config::Config;
use error::{CertError, Result};
use scoring::{ScoredDataset, ScoringOptions, TierPopulation};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::prelude::*;

/// 기본 프리셋 + 설정 파일의 매핑 + CLI 매핑
fn schema_mapping(config: &Config, schema: Option<&Path>) -> Result<SchemaMapping> {
    let mut mapping = SchemaMapping::korean_preset();
    for path in [config.schema.as_deref(), schema].into_iter().flatten() {
        mapping.merge(&SchemaMapping::from_file(path)?);
    }
    if !config.years.is_empty() {
        mapping.years = config.years.clone();
    }
    Ok(mapping)
}

fn tier_population(config: &Config, exclude_ids: Option<PathBuf>, require_pass_rate: bool) -> Result<TierPopulation> {
    match exclude_ids.or_else(|| config.data.exclude_ids.clone()) {
        Some(path) => {
            if require_pass_rate {
                warn!("제외 목록이 지정되어 --exclude-missing-pass-rate는 무시됨");
            }
            let ids = loader::load_id_list(&path)?;
            println!("✔ 제외 자격증ID {}건", ids.len());
            Ok(TierPopulation::ExcludeIds(ids))
        }
        None if require_pass_rate => Ok(TierPopulation::RequirePassRate),
        None => Ok(TierPopulation::All),
    }
}

fn load_and_score(
    config: &Config,
    input: Option<PathBuf>,
    schema: Option<&Path>,
    population: TierPopulation,
) -> Result<(loader::LoadedCertifications, ScoredDataset)> {
    let input = Config::resolve_path(input, &config.data.certifications, "자격증 데이터")?;
    let mapping = schema_mapping(config, schema)?;

    let loaded = loader::load_certifications(&input, &mapping)?;
    println!("✔ {}건 로딩: {}", loaded.records.len(), input.display());

    let options = ScoringOptions {
        years: loaded.years.clone(),
        weights: config.scoring,
        population,
    };
    let dataset = scoring::score_dataset(loaded.records.clone(), &options);
    info!(
        scored = dataset.summary().scored_records,
        strategy = dataset.summary().tier_cuts.strategy_name(),
        "난이도 산정 완료"
    );
    Ok((loaded, dataset))
}

fn format_opt(value: Option<f64>, digits: usize) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.*}", digits, v))
}

fn print_row(rank: usize, row: &ScoredRecord) {
    println!(
        "{:>4}. [{}] {} ({}) 점수 {} / 등급 {} / 합격률 {}% / {}",
        rank,
        row.record.id,
        row.record.name,
        row.record.category,
        format_opt(row.difficulty_score, 3),
        row.difficulty_tier.map_or_else(|| "-".to_string(), |t| t.to_string()),
        format_opt(row.derived.overall_pass_rate, 1),
        row.derived.structure.label,
    );
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = Config::load()?;

    match cli.command {
        Commands::Score { input, schema, exclude_ids, exclude_missing_pass_rate, format, output } => {
            println!("📊 cert-difficulty - 난이도 산정\n");

            println!("[1/3] 데이터 로딩 중...");
            let population = tier_population(&config, exclude_ids, exclude_missing_pass_rate)?;
            let (loaded, dataset) = load_and_score(&config, input, schema.as_deref(), population)?;

            println!("\n[2/3] 산정 결과");
            let summary = dataset.summary();
            println!("  전체: {}건 / 산정: {}건", summary.total_records, summary.scored_records);
            println!("  등급 구간: {}", summary.tier_cuts.strategy_name());
            for (i, count) in summary.tier_counts.iter().enumerate() {
                println!("  {}등급: {}건", i + 1, count);
            }

            println!("\n[3/3] 출력 중...");
            let output_dir = output.unwrap_or_else(|| PathBuf::from("."));
            export::export_dataset(&loaded, &dataset, format, &output_dir, "cert_difficulty")?;

            println!("\n✅ 완료");
        }

        Commands::List {
            input,
            schema,
            query,
            category,
            grade,
            written,
            practical,
            interview,
            tier,
            major,
            majors,
            limit,
        } => {
            let population = tier_population(&config, None, false)?;
            let (_, dataset) = load_and_score(&config, input, schema.as_deref(), population)?;

            let cert_ids = match major {
                Some(major) => {
                    let path = Config::resolve_path(majors, &config.data.majors, "전공")?;
                    let index = catalog::MajorIndex::from_table(&loader::load_table(&path)?, &config.catalog)?;
                    let ids = index.cert_id_set(&major);
                    if ids.is_empty() {
                        warn!(major = %major, "학과에 연결된 자격증이 없음");
                    }
                    Some(ids)
                }
                None => None,
            };

            let filter = view::Filter {
                name_query: query,
                cert_ids,
                categories: category,
                grade_buckets: grade,
                require_written: written,
                require_practical: practical,
                require_interview: interview,
                tiers: tier,
            };
            let rows = filter.apply(&dataset);

            println!("\n검색 결과: {}건\n", rows.len());
            for (i, row) in rows.iter().take(limit).enumerate() {
                print_row(i + 1, row);
            }
            if rows.len() > limit {
                println!("  ... 외 {}건", rows.len() - limit);
            }
        }

        Commands::Majors { majors, query } => {
            let path = Config::resolve_path(majors, &config.data.majors, "전공")?;
            let index = catalog::MajorIndex::from_table(&loader::load_table(&path)?, &config.catalog)?;

            let found = index.search(query.as_deref().unwrap_or(""));
            println!("학과: {}건\n", found.len());
            for major in found {
                println!("  {} (자격증 {}건)", major, index.cert_ids_for(major).len());
            }
        }

        Commands::Jobs { cert_id, jobs, job_info, seq } => {
            let path = Config::resolve_path(jobs, &config.data.jobs, "직무")?;
            let index = catalog::JobIndex::from_table(loader::load_table(&path)?, &config.catalog)?;

            let related = index.related_jobs(&cert_id);
            println!("관련 직무: {}건\n", related.len());
            if related.is_empty() {
                println!("  연결된 직무 데이터가 없습니다.");
            }
            for job in &related {
                println!("  [{}] {}", job.seq, job.title);
                if !job.majors.is_empty() {
                    println!("      관련 학과: {}", job.majors_label());
                }
            }

            if let Some(seq) = seq {
                let path = Config::resolve_path(job_info, &config.data.job_info, "직업정보")?;
                let info_index = catalog::JobInfoIndex::from_table(loader::load_table(&path)?, &config.catalog)?;
                let title = related.iter().find(|j| j.seq == seq.trim()).map(|j| j.title.as_str());

                let detail = info_index
                    .detail(&seq, title)
                    .ok_or_else(|| CertError::NoRecords(format!("jobdicSeq {}", seq)))?;

                println!("\n### {} [{}]", detail.title, detail.seq);
                for metric in &detail.metrics {
                    println!("  {}: {} ({})", metric.name, metric.raw, format_opt(metric.value, 1));
                }
                for section in &detail.sections {
                    println!("\n[{}]\n{}", section.name, section.text);
                }
            }
        }

        Commands::Config { show, init } => {
            if init {
                let path = Config::config_path()?;
                if path.exists() {
                    println!("설정 파일이 이미 있습니다: {}", path.display());
                } else {
                    let path = Config::default().save()?;
                    println!("✔ 기본 설정을 저장했습니다: {}", path.display());
                }
            }

            if show || !init {
                println!("설정 ({}):", Config::config_path()?.display());
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
        }
    }

    Ok(())
}
