//! JSON roster ingestion.
//!
//! Supported inputs:
//! - A JSON array of objects: `[{"name":"..."}, {"name":"..."}]`
//! - A single JSON object
//! - Newline-delimited JSON (NDJSON): `{"name":"..."}\n{"name":"..."}\n`
//!
//! `age` may be given either as a string (`"29"`) or as an integer (`29`).

use std::fs;
use std::path::Path;

use crate::error::{ProcessingError, ProcessingResult};
use crate::types::{Player, PlayerField, Roster};

use super::parse_age;

/// Ingest a JSON file into a [`Roster`].
pub fn ingest_json_from_path(path: impl AsRef<Path>) -> ProcessingResult<Roster> {
    let text = fs::read_to_string(path)?;
    ingest_json_from_str(&text)
}

/// Ingest JSON from an in-memory string into a [`Roster`].
pub fn ingest_json_from_str(input: &str) -> ProcessingResult<Roster> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ProcessingError::SchemaMismatch {
            message: "json input is empty".to_string(),
        });
    }

    // An array is never NDJSON; keep serde_json's line/column (relative to `input`) on failure.
    if trimmed.starts_with('[') {
        let items = serde_json::from_str::<Vec<serde_json::Value>>(input)?;
        return ingest_json_values(&items);
    }

    // Then try a single JSON object.
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(trimmed) {
        match v {
            serde_json::Value::Object(_) => ingest_json_values(std::slice::from_ref(&v)),
            _ => Err(ProcessingError::SchemaMismatch {
                message: "json must be an object, an array of objects, or NDJSON".to_string(),
            }),
        }
    } else {
        // Fall back to NDJSON.
        let mut values = Vec::new();
        for (i, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let v = serde_json::from_str::<serde_json::Value>(line).map_err(|e| {
                ProcessingError::SchemaMismatch {
                    message: format!("invalid ndjson at line {}: {}", i + 1, e),
                }
            })?;
            values.push(v);
        }
        ingest_json_values(&values)
    }
}

fn ingest_json_values(values: &[serde_json::Value]) -> ProcessingResult<Roster> {
    let mut players = Vec::with_capacity(values.len());

    for (idx0, v) in values.iter().enumerate() {
        let row = idx0 + 1;
        let obj = v.as_object().ok_or_else(|| ProcessingError::SchemaMismatch {
            message: format!("row {row} is not a json object"),
        })?;

        let name = string_field(row, obj, PlayerField::Name)?;
        let age = age_field(row, obj)?;
        let club = string_field(row, obj, PlayerField::Club)?;
        let nationality = string_field(row, obj, PlayerField::Nationality)?;
        players.push(Player::new(name, age, club, nationality));
    }

    Ok(Roster::new(players))
}

fn required<'a>(
    row: usize,
    obj: &'a serde_json::Map<String, serde_json::Value>,
    field: PlayerField,
) -> ProcessingResult<&'a serde_json::Value> {
    match obj.get(field.name()) {
        Some(v) if !v.is_null() => Ok(v),
        _ => Err(ProcessingError::MissingField {
            row,
            field: field.name().to_string(),
        }),
    }
}

fn string_field<'a>(
    row: usize,
    obj: &'a serde_json::Map<String, serde_json::Value>,
    field: PlayerField,
) -> ProcessingResult<&'a str> {
    let v = required(row, obj, field)?;
    let s = v.as_str().ok_or_else(|| ProcessingError::ParseError {
        row,
        column: field.name().to_string(),
        raw: v.to_string(),
        message: "expected string".to_string(),
    })?;
    if s.trim().is_empty() {
        return Err(ProcessingError::MissingField {
            row,
            field: field.name().to_string(),
        });
    }
    Ok(s)
}

fn age_field(row: usize, obj: &serde_json::Map<String, serde_json::Value>) -> ProcessingResult<u32> {
    let v = required(row, obj, PlayerField::Age)?;
    match v {
        serde_json::Value::String(s) => parse_age(row, s),
        serde_json::Value::Number(n) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| ProcessingError::ParseError {
                row,
                column: PlayerField::Age.name().to_string(),
                raw: v.to_string(),
                message: "expected non-negative integer".to_string(),
            }),
        _ => Err(ProcessingError::ParseError {
            row,
            column: PlayerField::Age.name().to_string(),
            raw: v.to_string(),
            message: "expected integer or numeric string".to_string(),
        }),
    }
}
