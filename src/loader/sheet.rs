//! 스프레드시트 → 헤더 + 셀 표
//!
//! 첫 번째 워크시트의 첫 행을 헤더로 본다.

use crate::error::{CertError, Result};
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use cert_difficulty_common::CellValue;
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

/// 헤더 + 데이터 행
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self { headers, rows }
    }

    /// 열 이름으로 인덱스 조회 (앞뒤 공백 무시)
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.headers.iter().position(|h| h.trim() == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// 셀 값 (행이 짧으면 Empty)
    pub fn cell<'a>(&'a self, row: &'a [CellValue], col: usize) -> &'a CellValue {
        const EMPTY: &CellValue = &CellValue::Empty;
        row.get(col).unwrap_or(EMPTY)
    }

    /// 열 이름으로 셀을 문자열 키로 읽기 (열이 없으면 빈 문자열)
    pub fn text(&self, row: &[CellValue], column: &str) -> String {
        self.column_index(column)
            .map(|col| self.cell(row, col).to_key_string())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn convert_cell(data: &Data) -> CellValue {
    match data {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Number(if *b { 1.0 } else { 0.0 }),
        Data::DateTime(_) => CellValue::Text(data.to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) | Data::Empty => CellValue::Empty,
    }
}

fn header_text(data: &Data) -> String {
    convert_cell(data).to_key_string()
}

/// 바이트열에서 첫 시트 읽기
pub fn parse_table(bytes: Vec<u8>, source: &str) -> Result<Table> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| CertError::SheetRead(format!("{}: {}", source, e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| CertError::EmptySheet(source.to_string()))?
        .map_err(|e| CertError::SheetRead(format!("{}: {}", source, e)))?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .ok_or_else(|| CertError::EmptySheet(source.to_string()))?
        .iter()
        .map(header_text)
        .collect();

    let rows: Vec<Vec<CellValue>> = rows
        .map(|row| row.iter().map(convert_cell).collect::<Vec<_>>())
        .filter(|row| !row.iter().all(CellValue::is_empty))
        .collect();

    debug!(source, columns = headers.len(), rows = rows.len(), "시트 읽기 완료");
    Ok(Table::new(headers, rows))
}

/// 파일에서 첫 시트 읽기
pub fn read_table(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(CertError::FileNotFound(path.display().to_string()));
    }
    let bytes = std::fs::read(path)?;
    parse_table(bytes, &path.display().to_string())
}
