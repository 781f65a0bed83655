//! CSV roster ingestion.

use std::path::Path;

use crate::error::{ProcessingError, ProcessingResult};
use crate::types::{Player, PlayerField, Roster};

use super::parse_age;

/// Ingest a CSV file into a [`Roster`].
///
/// Rules:
///
/// - CSV must have headers.
/// - Headers must contain `name`, `age`, `club` and `nationality` (order can differ; extra
///   columns are ignored).
/// - Every field must be non-empty, and `age` must parse as a non-negative integer.
pub fn ingest_csv_from_path(path: impl AsRef<Path>) -> ProcessingResult<Roster> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    ingest_csv_from_reader(&mut rdr)
}

/// Ingest CSV data from an existing CSV reader.
pub fn ingest_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> ProcessingResult<Roster> {
    let headers = rdr.headers()?.clone();

    // Map fields -> CSV column indexes (allows re-ordered CSV columns).
    let mut col_idxs = [0usize; 4];
    for (slot, field) in col_idxs.iter_mut().zip(PlayerField::ALL) {
        *slot = headers
            .iter()
            .position(|h| h.trim() == field.name())
            .ok_or_else(|| ProcessingError::SchemaMismatch {
                message: format!(
                    "missing required column '{field}'. headers={:?}",
                    headers.iter().collect::<Vec<_>>()
                ),
            })?;
    }

    let mut players = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        let record = result?;
        // 1-based line where the record starts; quoted fields may span several lines.
        let user_row = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(row_idx0 + 2);

        let mut cells = [""; 4];
        for ((cell, field), &csv_idx) in cells.iter_mut().zip(PlayerField::ALL).zip(&col_idxs) {
            let raw = record.get(csv_idx).unwrap_or("").trim();
            if raw.is_empty() {
                return Err(ProcessingError::MissingField {
                    row: user_row,
                    field: field.name().to_string(),
                });
            }
            *cell = raw;
        }

        let [name, age, club, nationality] = cells;
        players.push(Player::new(name, parse_age(user_row, age)?, club, nationality));
    }

    Ok(Roster::new(players))
}
