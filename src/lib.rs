//! `roster-processing` is a small library for filtering, mapping and reducing an in-memory
//! [`types::Roster`] of typed [`types::Player`] records.
//!
//! The central operation is [`processing::count_by`], which counts how many records share each
//! key returned by a key selector (e.g. players per club). Its counts always add up to the
//! input length.
//!
//! ## Quick example: players per club
//!
//! ```rust
//! use roster_processing::processing::count_by;
//! use roster_processing::samples::sample_players;
//!
//! let roster = sample_players();
//! let per_club = count_by(roster.players(), |p| p.club.clone());
//!
//! assert_eq!(per_club.get("psg"), 3);
//! assert_eq!(per_club.get("juventus"), 2);
//! assert_eq!(per_club.total(), roster.len());
//! ```
//!
//! ## Loading a roster from disk
//!
//! CSV and JSON files with `name`, `age`, `club` and `nationality` fields can be loaded with
//! [`ingestion::ingest_from_path`]. The format is inferred from the file extension.
//!
//! ```no_run
//! use roster_processing::ingestion::{ingest_from_path, IngestionOptions};
//!
//! # fn main() -> Result<(), roster_processing::ProcessingError> {
//! let roster = ingest_from_path("players.json", &IngestionOptions::default())?;
//! println!("players={}", roster.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Fallible aggregation
//!
//! When the key may be missing, [`processing::try_count_by`] fails fast on the first malformed
//! record and reports its index instead of returning a partial count.
//!
//! ```rust
//! use roster_processing::processing::try_count_by;
//! use roster_processing::ProcessingError;
//!
//! let clubs = [Some("psg"), None, Some("psg")];
//! let err = try_count_by(&clubs, |c| c.ok_or("missing club")).unwrap_err();
//! assert!(matches!(err, ProcessingError::MalformedRecord { index: 1, .. }));
//! ```
//!
//! ## Modules
//!
//! - [`types`]: player record, roster and field/value types
//! - [`processing`]: filter/map/reduce and key-count aggregation
//! - [`ingestion`]: CSV/JSON roster loading with observer hooks
//! - [`samples`]: the built-in sample roster and numeric sequences
//! - [`error`]: error types

pub mod error;
pub mod ingestion;
pub mod processing;
pub mod samples;
pub mod types;

pub use error::{ProcessingError, ProcessingResult};
