use crate::error::{CertError, Result};
use cert_difficulty_common::{CatalogColumns, ScoringWeights};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 입력 파일 경로 (CLI 인자가 없을 때 사용)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct DataPaths {
    /// 자격증 통합 데이터
    pub certifications: Option<PathBuf>,
    /// 전공 → 자격증 매핑
    pub majors: Option<PathBuf>,
    /// 자격증 → 직무 매핑
    pub jobs: Option<PathBuf>,
    /// 직업 상세 정보
    pub job_info: Option<PathBuf>,
    /// 합격률 자료가 없는 자격증ID 목록
    pub exclude_ids: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub data: DataPaths,
    /// 열 이름 매핑 JSON (기본 프리셋에 병합)
    pub schema: Option<PathBuf>,
    pub catalog: CatalogColumns,
    pub scoring: ScoringWeights,
    /// 집계 연도 (비어 있으면 스키마의 연도)
    pub years: Vec<u16>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CertError::Config("홈 디렉터리를 찾을 수 없습니다".into()))?;
        Ok(home.join(".config").join("cert-difficulty").join("config.json"))
    }

    /// CLI 인자 → 설정 파일 순으로 경로 결정
    pub fn resolve_path(arg: Option<PathBuf>, configured: &Option<PathBuf>, what: &str) -> Result<PathBuf> {
        arg.or_else(|| configured.clone())
            .ok_or_else(|| CertError::Config(format!("{} 파일 경로가 지정되지 않았습니다", what)))
    }
}
