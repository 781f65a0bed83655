//! Roster ingestion entrypoints and implementations.
//!
//! Most callers should use [`ingest_from_path`] (from [`unified`]) which:
//!
//! - auto-detects format by file extension (or you can override via [`IngestionOptions`])
//! - loads the file into an in-memory [`crate::types::Roster`]
//! - optionally reports success/failure/alerts to an [`IngestionObserver`]
//!
//! Format-specific functions are also available under:
//! - [`csv`]
//! - [`json`]

pub mod csv;
pub mod json;
pub mod observability;
pub mod unified;

pub use observability::{
    CompositeObserver, FileObserver, IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats,
    StdErrObserver,
};
pub use unified::{ingest_from_path, IngestionFormat, IngestionOptions};

use crate::error::{ProcessingError, ProcessingResult};
use crate::types::PlayerField;

/// Parse an age given as text (source data stores ages as strings).
fn parse_age(row: usize, raw: &str) -> ProcessingResult<u32> {
    raw.trim().parse::<u32>().map_err(|e| ProcessingError::ParseError {
        row,
        column: PlayerField::Age.name().to_string(),
        raw: raw.to_string(),
        message: e.to_string(),
    })
}
