//! 통합 테스트용 워크북 생성

#![allow(dead_code)]

use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy)]
pub enum Cell {
    S(&'static str),
    N(f64),
    E,
}

use Cell::{E, N, S};

/// 첫 시트에 헤더 + 행을 쓴 워크북 저장
pub fn write_sheet(path: &Path, headers: &[&str], rows: &[Vec<Cell>]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(0, col as u16, *header).unwrap();
    }
    for (r, row) in rows.iter().enumerate() {
        for (col, cell) in row.iter().enumerate() {
            let (r, col) = ((r + 1) as u32, col as u16);
            match cell {
                S(text) => {
                    sheet.write_string(r, col, *text).unwrap();
                }
                N(value) => {
                    sheet.write_number(r, col, *value).unwrap();
                }
                E => {}
            }
        }
    }
    workbook.save(path).unwrap();
}

pub const CERT_HEADERS: [&str; 14] = [
    "자격증ID",
    "자격증명",
    "자격증_분류",
    "자격증_등급_코드",
    "검정 횟수",
    "시험종류",
    "필기",
    "실기",
    "면접",
    "2022년 1차 합격률",
    "2022년 2차 합격률",
    "2023년 1차 합격률",
    "2022년 1차 응시자 수",
    "2023년 1차 응시자수",
];

pub fn cert_rows() -> Vec<Vec<Cell>> {
    vec![
        vec![S("1320"), S("정보처리기사"), S("국가기술자격"), N(300.0), S("연 3회"), S("필기+실기"), E, E, E, N(50.0), N(40.0), N(60.0), N(30000.0), N(28000.0)],
        vec![S("2290"), S("변리사"), S("국가전문자격"), N(100.0), S("연 1회"), E, N(1.0), N(1.0), N(0.0), N(10.0), N(20.0), N(12.0), N(3000.0), N(3200.0)],
        vec![S("1430"), S("컴퓨터활용능력"), S("민간자격"), N(500.0), S("상시"), S("필기"), E, E, E, N(70.0), E, N(75.0), N(100000.0), N(90000.0)],
        vec![S("7910"), S("한식조리기능사"), S("국가기술자격"), N(500.0), S("상시"), S("필기+실기"), E, E, E, N(40.0), N(35.0), N(38.0), N(50000.0), N(48000.0)],
        vec![S("6110"), S("건축기사"), S("국가기술자격"), N(300.0), S("연 3회"), S("필기+실기"), E, E, E, N(30.0), N(25.0), N(28.0), N(20000.0), E],
        vec![S("0001"), S("감정평가사"), S("국가전문자격"), N(100.0), S("연 1회"), S("필기+면접"), E, E, E, N(15.0), E, E, N(4000.0), N(3800.0)],
        vec![S("9999"), S("신규자격"), S("민간자격"), E, S("수시"), E, E, E, E, E, E, E, E, E],
        vec![S("5001"), S("전기기능장"), S("국가기술자격"), N(200.0), S("연 2회"), S("필기+실기"), E, E, E, N(20.0), N(30.0), N(25.0), N(6000.0), N(5500.0)],
    ]
}

/// 자격증 통합 데이터 워크북
pub fn write_cert_fixture(dir: &Path) -> PathBuf {
    let path = dir.join("certs.xlsx");
    write_sheet(&path, &CERT_HEADERS, &cert_rows());
    path
}

/// 전공 → 자격증 워크북
pub fn write_majors_fixture(dir: &Path) -> PathBuf {
    let path = dir.join("majors.xlsx");
    write_sheet(
        &path,
        &["학과명", "자격증ID"],
        &[
            vec![S("컴퓨터공학과"), S("1320")],
            vec![S("컴퓨터공학과"), S("1430")],
            vec![S("건축학과"), S("6110")],
            vec![S("전기공학과"), N(5001.0)],
            vec![S("컴퓨터공학과"), S("1320")],
        ],
    );
    path
}

/// 자격증 → 직무 워크북
pub fn write_jobs_fixture(dir: &Path) -> PathBuf {
    let path = dir.join("jobs.xlsx");
    write_sheet(
        &path,
        &["자격증ID", "jobdicSeq", "직업명", "학과명"],
        &[
            vec![S("1320"), N(136.0), S("응용소프트웨어개발자"), S("컴퓨터공학과")],
            vec![S("1320"), N(136.0), S("응용소프트웨어개발자"), S("소프트웨어학과")],
            vec![S("1320"), N(12.0), S("시스템소프트웨어개발자"), S("컴퓨터공학과")],
            vec![S("6110"), N(50.0), S("건축설계기술자"), S("건축학과")],
        ],
    );
    path
}

/// 직업 상세 정보 워크북
pub fn write_job_info_fixture(dir: &Path) -> PathBuf {
    let path = dir.join("job_info.xlsx");
    write_sheet(
        &path,
        &["jobdicSeq", "직업명", "보상", "고용안정", "발전가능성", "직업전망요약", "취업방법", "초임"],
        &[
            vec![N(136.0), S("응용소프트웨어개발자"), S("81.5"), S("보통 60"), S("nan"), S("수요가 꾸준히 증가"), E, S("none")],
            vec![N(12.0), S("시스템소프트웨어개발자"), N(77.0), E, E, E, S("공개채용"), E],
        ],
    );
    path
}
