//! 자격증 난이도 산정 엔진
//!
//! 자격증 시험 통계(다년 합격률, 응시자 수, 시험 구조, 검정 횟수, 등급코드, 분류)를
//! 읽어 자격증별 난이도 점수와 1~5 등급을 계산한다.
//!
//! ```no_run
//! use cert_difficulty::{loader, scoring};
//! use cert_difficulty_common::SchemaMapping;
//! use std::path::Path;
//!
//! let loaded = loader::load_certifications(Path::new("certs.xlsx"), &SchemaMapping::korean_preset())?;
//! let dataset = scoring::score_dataset(loaded.records, &scoring::ScoringOptions::default());
//! println!("{} 건", dataset.len());
//! # Ok::<(), cert_difficulty::error::CertError>(())
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod loader;
pub mod normalizer;
pub mod scoring;
pub mod view;

pub use error::{CertError, Result};
pub use scoring::{score_dataset, ScoredDataset, ScoringOptions, TierPopulation};
pub use view::Filter;
