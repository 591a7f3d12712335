//! Excel 생성 (공통 라이브러리)
//!
//! 난이도 산정 결과를 한 장의 표 형태 시트로 만든다.

use crate::types::ScoredRecord;
use rust_xlsxwriter::*;

/// 시트 열 정의
pub struct SheetColumn {
    pub key: &'static str,
    pub label: &'static str,
    pub width: f64,
}

/// 출력 열 순서
pub const SHEET_COLUMNS: &[SheetColumn] = &[
    SheetColumn { key: "id", label: "자격증ID", width: 12.0 },
    SheetColumn { key: "name", label: "자격증명", width: 28.0 },
    SheetColumn { key: "category", label: "자격증_분류", width: 16.0 },
    SheetColumn { key: "gradeCode", label: "자격증_등급_코드", width: 10.0 },
    SheetColumn { key: "frequency", label: "검정 횟수", width: 12.0 },
    SheetColumn { key: "structure", label: "시험구조", width: 14.0 },
    SheetColumn { key: "pass1", label: "1차 합격률(평균)", width: 12.0 },
    SheetColumn { key: "pass2", label: "2차 합격률(평균)", width: 12.0 },
    SheetColumn { key: "pass3", label: "3차 합격률(평균)", width: 12.0 },
    SheetColumn { key: "overall", label: "전체 합격률(평균)", width: 12.0 },
    SheetColumn { key: "applicants", label: "평균 응시자수", width: 12.0 },
    SheetColumn { key: "score", label: "난이도 점수", width: 10.0 },
    SheetColumn { key: "tier", label: "난이도 등급(1-5)", width: 10.0 },
];

/// 셀에 쓸 값
enum SheetValue {
    Text(String),
    Number(f64),
    Blank,
}

fn number(value: Option<f64>) -> SheetValue {
    value.map(SheetValue::Number).unwrap_or(SheetValue::Blank)
}

/// 필드 값 조회
fn get_field_value(row: &ScoredRecord, key: &str) -> SheetValue {
    let record = &row.record;
    let derived = &row.derived;
    match key {
        "id" => SheetValue::Text(record.id.clone()),
        "name" => SheetValue::Text(record.name.clone()),
        "category" => SheetValue::Text(record.category.clone()),
        "gradeCode" => SheetValue::Text(record.grade_code.to_key_string()),
        "frequency" => SheetValue::Text(record.frequency.to_key_string()),
        "structure" => SheetValue::Text(derived.structure.label.clone()),
        "pass1" => number(derived.pass_rate_by_phase[0]),
        "pass2" => number(derived.pass_rate_by_phase[1]),
        "pass3" => number(derived.pass_rate_by_phase[2]),
        "overall" => number(derived.overall_pass_rate),
        "applicants" => number(derived.average_applicants),
        "score" => number(row.difficulty_score),
        "tier" => number(row.difficulty_tier.map(f64::from)),
        _ => SheetValue::Blank,
    }
}

/// 산정 결과 Excel을 버퍼로 생성
///
/// # Arguments
/// * `rows` - 출력할 행 (이미 정렬된 순서)
/// * `sheet_name` - 시트 이름
pub fn generate_scored_workbook(rows: &[&ScoredRecord], sheet_name: &str) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0x333333))
        .set_background_color(Color::RGB(0xF1F3F5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xCED4DA));
    let number_format = Format::new().set_num_format("0.0");
    let score_format = Format::new().set_num_format("0.000");

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)
        .map_err(|e| format!("시트 이름 설정 오류: {}", e))?;

    for (col, column) in SHEET_COLUMNS.iter().enumerate() {
        let col = col as u16;
        worksheet.set_column_width(col, column.width)
            .map_err(|e| format!("열 너비 설정 오류: {}", e))?;
        worksheet.write_string_with_format(0, col, column.label, &header_format)
            .map_err(|e| format!("헤더 쓰기 오류: {}", e))?;
    }
    worksheet.set_freeze_panes(1, 0)
        .map_err(|e| format!("틀 고정 오류: {}", e))?;

    for (idx, row) in rows.iter().enumerate() {
        let excel_row = (idx + 1) as u32;
        for (col, column) in SHEET_COLUMNS.iter().enumerate() {
            let col = col as u16;
            match get_field_value(row, column.key) {
                SheetValue::Text(text) => {
                    worksheet.write_string(excel_row, col, text)
                        .map_err(|e| format!("값 쓰기 오류: {}", e))?;
                }
                SheetValue::Number(value) => {
                    let format = if column.key == "score" { &score_format } else { &number_format };
                    worksheet.write_number_with_format(excel_row, col, value, format)
                        .map_err(|e| format!("값 쓰기 오류: {}", e))?;
                }
                SheetValue::Blank => {}
            }
        }
    }

    workbook.save_to_buffer()
        .map_err(|e| format!("Excel 저장 오류: {}", e))
}
