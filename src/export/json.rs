//! JSON 보고서

use crate::error::Result;
use crate::loader::LoadedCertifications;
use crate::scoring::{DatasetSummary, ScoredDataset};
use cert_difficulty_common::ScoredRecord;
use serde::Serialize;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport<'a> {
    pub source: String,
    pub snapshot_sha256: &'a str,
    pub years: &'a [u16],
    pub summary: &'a DatasetSummary,
    pub records: &'a [&'a ScoredRecord],
}

impl<'a> ScoreReport<'a> {
    pub fn new(
        loaded: &'a LoadedCertifications,
        dataset: &'a ScoredDataset,
        rows: &'a [&'a ScoredRecord],
    ) -> Self {
        Self {
            source: loaded.source.display().to_string(),
            snapshot_sha256: &loaded.snapshot,
            years: &loaded.years,
            summary: dataset.summary(),
            records: rows,
        }
    }
}

pub fn write_report(report: &ScoreReport<'_>, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(report)?;
    std::fs::write(path, content)?;
    debug!(path = %path.display(), records = report.records.len(), "JSON 보고서 저장");
    Ok(())
}
