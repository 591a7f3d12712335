pub mod excel;
pub mod json;

use crate::error::Result;
use crate::loader::LoadedCertifications;
use crate::scoring::ScoredDataset;
use crate::view::Filter;
use std::path::{Path, PathBuf};

/// 출력 형식
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Excel,
    #[default]
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("알 수 없는 형식: {}. json, excel, both 중 하나를 지정하세요", s)),
        }
    }
}

/// 디렉터리(또는 확장자 없는 경로)면 `<dir>/<stem>.<ext>`
pub fn output_path_for_format(output: &Path, stem: &str, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", stem, extension))
    } else {
        output.with_extension(extension)
    }
}

/// Both 형식일 때 JSON·Excel 경로 쌍
pub fn output_paths_for_both(output: &Path, stem: &str) -> (PathBuf, PathBuf) {
    if output.is_dir() || output.extension().is_none() {
        (output.join(format!("{}.json", stem)), output.join(format!("{}.xlsx", stem)))
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let file_stem = output.file_stem().and_then(|s| s.to_str()).unwrap_or(stem);
        (
            parent.join(format!("{}.json", file_stem)),
            parent.join(format!("{}.xlsx", file_stem)),
        )
    }
}

/// 산정 결과 출력 (행 순서는 난이도 순)
pub fn export_dataset(
    loaded: &LoadedCertifications,
    dataset: &ScoredDataset,
    format: ExportFormat,
    output: &Path,
    stem: &str,
) -> Result<Vec<PathBuf>> {
    let rows = Filter::default().apply(dataset);
    let mut written = Vec::new();

    let (json_path, excel_path) = match format {
        ExportFormat::Json => (Some(output_path_for_format(output, stem, "json")), None),
        ExportFormat::Excel => (None, Some(output_path_for_format(output, stem, "xlsx"))),
        ExportFormat::Both => {
            let (j, x) = output_paths_for_both(output, stem);
            (Some(j), Some(x))
        }
    };

    if let Some(path) = json_path {
        println!("- JSON 생성 중...");
        let report = json::ScoreReport::new(loaded, dataset, &rows);
        json::write_report(&report, &path)?;
        println!("✔ JSON 출력: {}", path.display());
        written.push(path);
    }

    if let Some(path) = excel_path {
        println!("- Excel 생성 중...");
        excel::write_workbook(&rows, &path)?;
        println!("✔ Excel 출력: {}", path.display());
        written.push(path);
    }

    Ok(written)
}
