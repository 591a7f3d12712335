//! Export core modules shared by the CLI and library callers.

#[cfg(feature = "excel")]
pub mod excel_core;
