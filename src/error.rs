use thiserror::Error;

/// Convenience result type for roster ingestion and fallible processing.
pub type ProcessingResult<T> = Result<T, ProcessingError>;

/// Error type returned by ingestion functions and fallible aggregations.
///
/// This is a single error enum shared across CSV/JSON ingestion and [`crate::processing`].
#[derive(Debug, Error)]
pub enum ProcessingError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV ingestion error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON (de)serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input does not have the expected shape (missing columns, non-object rows, etc.).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A record is missing a required field (or the field is empty).
    #[error("row {row} missing required field '{field}'")]
    MissingField { row: usize, field: String },

    /// A value could not be parsed into the field's type.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },

    /// A key selector rejected a record during aggregation.
    ///
    /// `index` is the 0-based position of the record in the input.
    #[error("malformed record at index {index}: {message}")]
    MalformedRecord { index: usize, message: String },
}
