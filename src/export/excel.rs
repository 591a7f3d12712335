//! Excel 출력 (CLI판)
//!
//! 워크북 생성은 common의 excel_core에 맡기고 파일 저장만 한다.

use crate::error::{CertError, Result};
use cert_difficulty_common::export::excel_core::generate_scored_workbook;
use cert_difficulty_common::ScoredRecord;
use std::path::Path;

pub const SHEET_NAME: &str = "난이도";

pub fn write_workbook(rows: &[&ScoredRecord], output_path: &Path) -> Result<()> {
    let buffer = generate_scored_workbook(rows, SHEET_NAME).map_err(CertError::ExcelGeneration)?;
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_path, buffer)?;
    Ok(())
}
