//! Key-count aggregation.
//!
//! [`count_by`] walks a sequence once, left to right, and counts how many items share each key
//! returned by a key selector. The result is an [`Aggregate`], whose counts always sum to the
//! input length and never contain a zero.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use serde::Serialize;

use crate::error::{ProcessingError, ProcessingResult};

/// Mapping from key to the number of items that produced it.
///
/// Key order is unspecified. Use [`Aggregate::sorted`] for a deterministic view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Aggregate<K: Eq + Hash> {
    counts: HashMap<K, usize>,
}

impl<K: Eq + Hash> Aggregate<K> {
    fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    fn bump(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    /// Count for `key`, or `0` if it never occurred.
    pub fn get<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if no keys were counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts (equal to the number of aggregated items).
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate `(key, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.counts.iter().map(|(k, &n)| (k, n))
    }

    /// Key-ordered view of the counts.
    pub fn sorted(&self) -> BTreeMap<&K, usize>
    where
        K: Ord,
    {
        self.iter().collect()
    }

    /// Consume the aggregate and return the underlying map.
    pub fn into_inner(self) -> HashMap<K, usize> {
        self.counts
    }
}

/// Count items per key.
///
/// An empty input produces an empty [`Aggregate`].
pub fn count_by<T, K, F>(items: &[T], mut key: F) -> Aggregate<K>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    items.iter().fold(Aggregate::new(), |mut acc, item| {
        acc.bump(key(item));
        acc
    })
}

/// Count items per key, where extracting the key can fail.
///
/// Stops at the first item whose key selector returns `Err` and reports its 0-based index as
/// [`ProcessingError::MalformedRecord`]. No partial aggregate is returned.
pub fn try_count_by<T, K, E, F>(items: &[T], mut key: F) -> ProcessingResult<Aggregate<K>>
where
    K: Eq + Hash,
    E: ToString,
    F: FnMut(&T) -> Result<K, E>,
{
    let mut acc = Aggregate::new();
    for (index, item) in items.iter().enumerate() {
        let k = key(item).map_err(|e| ProcessingError::MalformedRecord {
            index,
            message: e.to_string(),
        })?;
        acc.bump(k);
    }
    Ok(acc)
}
