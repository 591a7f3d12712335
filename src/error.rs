use thiserror::Error;

#[derive(Error, Debug)]
pub enum CertError {
    #[error("설정 오류: {0}")]
    Config(String),

    #[error("파일을 찾을 수 없습니다: {0}")]
    FileNotFound(String),

    #[error("스프레드시트 읽기 오류: {0}")]
    SheetRead(String),

    #[error("시트에 데이터가 없습니다: {0}")]
    EmptySheet(String),

    #[error("필수 열이 없습니다: {0}")]
    MissingColumn(String),

    #[error("JSON 해석 오류: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO 오류: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel 생성 오류: {0}")]
    ExcelGeneration(String),

    #[error(transparent)]
    Common(#[from] cert_difficulty_common::Error),

    #[error("자격증 데이터가 없습니다: {0}")]
    NoRecords(String),
}

pub type Result<T> = std::result::Result<T, CertError>;
