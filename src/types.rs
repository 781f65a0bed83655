//! Core data model types.
//!
//! A [`Roster`] is an immutable, ordered list of typed [`Player`] records. Individual fields can
//! be addressed dynamically through [`PlayerField`], which yields a [`Value`].

use std::fmt;

use serde::Serialize;

use crate::processing::aggregate::{count_by, Aggregate};

/// Logical data type of a [`PlayerField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// 64-bit signed integer.
    Int64,
    /// UTF-8 string.
    Utf8,
}

/// Addressable fields of a [`Player`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerField {
    /// Player name.
    Name,
    /// Age in years.
    Age,
    /// Club the player belongs to.
    Club,
    /// Nationality.
    Nationality,
}

impl PlayerField {
    /// All fields, in column order.
    pub const ALL: [PlayerField; 4] = [
        PlayerField::Name,
        PlayerField::Age,
        PlayerField::Club,
        PlayerField::Nationality,
    ];

    /// Column/key name used by ingestion.
    pub fn name(self) -> &'static str {
        match self {
            PlayerField::Name => "name",
            PlayerField::Age => "age",
            PlayerField::Club => "club",
            PlayerField::Nationality => "nationality",
        }
    }

    /// Look up a field by its column name (exact match).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Data type of the field's values.
    pub fn data_type(self) -> DataType {
        match self {
            PlayerField::Age => DataType::Int64,
            _ => DataType::Utf8,
        }
    }
}

impl fmt::Display for PlayerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single dynamically typed value, as produced by [`Player::get`] or a reduction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Missing value (e.g. the minimum of an empty roster).
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// UTF-8 string.
    Utf8(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Int64(v) => write!(f, "{v}"),
            Value::Utf8(s) => f.write_str(s),
        }
    }
}

/// A single player record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Player {
    pub name: String,
    pub age: u32,
    pub club: String,
    pub nationality: String,
}

impl Player {
    /// Create a new player.
    pub fn new(
        name: impl Into<String>,
        age: u32,
        club: impl Into<String>,
        nationality: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            club: club.into(),
            nationality: nationality.into(),
        }
    }

    /// Returns the value of `field` for this player.
    pub fn get(&self, field: PlayerField) -> Value {
        match field {
            PlayerField::Name => Value::Utf8(self.name.clone()),
            PlayerField::Age => Value::Int64(i64::from(self.age)),
            PlayerField::Club => Value::Utf8(self.club.clone()),
            PlayerField::Nationality => Value::Utf8(self.nationality.clone()),
        }
    }
}

/// Immutable, ordered sequence of [`Player`]s.
///
/// Every transformation returns a new value; the roster itself is never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Create a roster from players, keeping their order.
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    /// Number of players in the roster.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Returns `true` if the roster has no players.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Borrow the players in order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Iterate players in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.players.iter()
    }

    /// Create a new roster containing only players that match `predicate`.
    pub fn filter_players<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Player) -> bool,
    {
        let players = self
            .players
            .iter()
            .filter(|&p| predicate(p))
            .cloned()
            .collect();
        Self { players }
    }

    /// Apply `mapper` to every player, in order.
    pub fn map_players<U, F>(&self, mapper: F) -> Vec<U>
    where
        F: FnMut(&Player) -> U,
    {
        self.players.iter().map(mapper).collect()
    }

    /// Reduce (fold) all players into an accumulator value.
    ///
    /// This is `Iterator::fold` over the roster, left to right.
    pub fn reduce_players<A, F>(&self, init: A, mut reducer: F) -> A
    where
        F: FnMut(A, &Player) -> A,
    {
        self.players.iter().fold(init, |acc, p| reducer(acc, p))
    }

    /// Count players per distinct value of `field`.
    ///
    /// Keys are the field values rendered as text (so ages become `"29"`, etc.).
    pub fn count_by_field(&self, field: PlayerField) -> Aggregate<String> {
        count_by(&self.players, |p| p.get(field).to_string())
    }
}

impl From<Vec<Player>> for Roster {
    fn from(players: Vec<Player>) -> Self {
        Self::new(players)
    }
}

impl FromIterator<Player> for Roster {
    fn from_iter<I: IntoIterator<Item = Player>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Player;
    type IntoIter = std::slice::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.players.iter()
    }
}
