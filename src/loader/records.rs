//! 표 → 자격증 행 변환

use super::sheet::Table;
use cert_difficulty_common::{CellValue, CertificationRecord, ResolvedSchema};
use tracing::warn;

fn text_at(table: &Table, row: &[CellValue], col: Option<usize>) -> String {
    col.map(|c| table.cell(row, c).to_key_string()).unwrap_or_default()
}

fn cell_at(table: &Table, row: &[CellValue], col: Option<usize>) -> CellValue {
    col.map(|c| table.cell(row, c).clone()).unwrap_or_default()
}

/// 확정된 열 인덱스로 행 변환
///
/// 자격증ID와 자격증명이 모두 비어 있는 행은 건너뛴다.
pub fn records_from_table(table: &Table, schema: &ResolvedSchema) -> Vec<CertificationRecord> {
    let mut records = Vec::with_capacity(table.len());
    let mut skipped = 0usize;

    for row in &table.rows {
        let id = text_at(table, row, Some(schema.id));
        let name = text_at(table, row, Some(schema.name));
        if id.is_empty() && name.is_empty() {
            skipped += 1;
            continue;
        }

        let mut record = CertificationRecord::new(id, name);
        record.category = text_at(table, row, schema.category);
        record.grade_code = cell_at(table, row, schema.grade_code);
        record.frequency = cell_at(table, row, schema.frequency);
        record.structure = text_at(table, row, schema.structure);
        record.written = cell_at(table, row, schema.written);
        record.practical = cell_at(table, row, schema.practical);
        record.interview = cell_at(table, row, schema.interview);

        for &(key, col) in &schema.pass_rates {
            record.pass_rates.insert(key, table.cell(row, col).clone());
        }
        for &(key, col) in &schema.applicants {
            record.applicants.insert(key, table.cell(row, col).clone());
        }
        records.push(record);
    }

    if skipped > 0 {
        warn!(skipped, "자격증ID·자격증명이 없는 행을 건너뜀");
    }
    records
}
