//! 입력 스프레드시트 로딩
//!
//! 파일 1개 = 데이터셋 1개. 입력 바이트의 SHA-256을 스냅샷 식별자로 기록한다.

pub mod records;
pub mod sheet;

pub use records::records_from_table;
pub use sheet::{parse_table, read_table, Table};

use crate::error::{CertError, Result};
use cert_difficulty_common::{CertificationRecord, SchemaMapping};
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::info;

/// 로딩 결과
#[derive(Debug, Clone)]
pub struct LoadedCertifications {
    pub source: PathBuf,
    /// 입력 파일의 SHA-256 (hex)
    pub snapshot: String,
    pub years: Vec<u16>,
    pub records: Vec<CertificationRecord>,
}

/// 바이트열의 SHA-256 (소문자 hex)
pub fn snapshot_digest(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// 자격증 통합 데이터 로딩
pub fn load_certifications(path: &Path, mapping: &SchemaMapping) -> Result<LoadedCertifications> {
    if !path.exists() {
        return Err(CertError::FileNotFound(path.display().to_string()));
    }
    let bytes = std::fs::read(path)?;
    let snapshot = snapshot_digest(&bytes);
    let source = path.display().to_string();

    let table = parse_table(bytes, &source)?;
    let schema = mapping.resolve(&table.headers).map_err(|e| match e {
        cert_difficulty_common::Error::Schema(msg) => CertError::MissingColumn(format!("{}: {}", source, msg)),
        other => other.into(),
    })?;

    let records = records_from_table(&table, &schema);
    if records.is_empty() {
        return Err(CertError::NoRecords(source));
    }

    info!(
        source = %source,
        records = records.len(),
        pass_rate_columns = schema.pass_rates.len(),
        applicant_columns = schema.applicants.len(),
        "자격증 데이터 로딩"
    );

    Ok(LoadedCertifications {
        source: path.to_path_buf(),
        snapshot,
        years: schema.years,
        records,
    })
}

/// 보조 시트 로딩 (전공·직무·직업정보)
pub fn load_table(path: &Path) -> Result<Table> {
    read_table(path)
}

/// 자격증ID 목록 파일 (한 줄에 하나, `#` 이후는 주석)
pub fn parse_id_list(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(|line| line.split('#').next().unwrap_or("").trim())
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn load_id_list(path: &Path) -> Result<BTreeSet<String>> {
    if !path.exists() {
        return Err(CertError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(parse_id_list(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_digest() {
        assert_eq!(
            snapshot_digest(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(snapshot_digest(b"abc").len(), 64);
    }

    #[test]
    fn test_parse_id_list() {
        let ids = parse_id_list("# 합격률 자료 없음\n1320\n\n 2290 # 폐지\n1320\n");
        assert_eq!(ids, BTreeSet::from(["1320".to_string(), "2290".to_string()]));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_certifications(Path::new("/nonexistent.xlsx"), &SchemaMapping::korean_preset());
        assert!(matches!(result, Err(CertError::FileNotFound(_))));
    }
}
