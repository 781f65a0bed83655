//! In-memory transformations.
//!
//! Everything here is a single left-to-right pass over a slice (or a
//! [`crate::types::Roster`]) and returns a fresh value; inputs are never mutated.
//!
//! Currently implemented:
//!
//! - [`filter()`]: keep items matching a predicate
//! - [`map()`]: transform every item
//! - [`reduce()`]: fold with an explicit initial accumulator, plus [`reduce_field`] for
//!   count/sum/min/max over a roster field
//! - [`count_by`]: count items per key (the club-count aggregation)
//!
//! [`filter_with_reduce`] and [`map_with_reduce`] show that both filter and map can be written
//! as a fold.
//!
//! ## Example: filter → map → count
//!
//! ```rust
//! use roster_processing::processing::{count_by, filter, map};
//! use roster_processing::samples::sample_players;
//!
//! let roster = sample_players();
//!
//! let argentina = filter(roster.players(), |p| p.nationality == "argentina");
//! assert_eq!(argentina.len(), 4);
//!
//! let names = map(&argentina, |p| p.name.clone());
//! assert_eq!(names[0], "paulo dybala");
//!
//! let clubs = count_by(roster.players(), |p| p.club.clone());
//! assert_eq!(clubs.get("psg"), 3);
//! assert_eq!(clubs.total(), roster.len());
//! ```

pub mod aggregate;
pub mod filter;
pub mod map;
pub mod reduce;

pub use aggregate::{count_by, try_count_by, Aggregate};
pub use filter::{filter, filter_with_reduce};
pub use map::{map, map_with_reduce};
pub use reduce::{reduce, reduce_field, sum, ReduceOp};
