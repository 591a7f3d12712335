//! Certification Difficulty Common Library
//!
//! CLI와 라이브러리 호출자가 공유하는 타입과 유틸리티

pub mod types;
pub mod schema;
pub mod error;
pub mod export;

pub use types::{
    CellValue, CertificationRecord, DerivedAttributes, Phase, ScoreBreakdown, ScoredRecord,
    ScoringWeights, StructureFlags, YearPhase,
};
pub use schema::{CatalogColumns, ResolvedSchema, SchemaMapping};
pub use error::{Error, Result};
