//! Reductions over slices and [`crate::types::Roster`] fields.

use std::iter::Sum;

use crate::types::{DataType, PlayerField, Roster, Value};

/// Fold `items` left to right.
///
/// The accumulator always starts from `init`, never from the first item.
pub fn reduce<T, A, F>(items: &[T], init: A, reducer: F) -> A
where
    F: FnMut(A, &T) -> A,
{
    items.iter().fold(init, reducer)
}

/// Sum all items, starting from zero.
pub fn sum<'a, T>(items: &'a [T]) -> T
where
    T: Sum<&'a T>,
{
    items.iter().sum()
}

/// Built-in reduction operations over a single roster field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceOp {
    /// Count all players.
    Count,
    /// Sum numeric values.
    Sum,
    /// Minimum numeric value.
    Min,
    /// Maximum numeric value.
    Max,
}

/// Reduce a roster field using a built-in [`ReduceOp`].
///
/// - For `Count`, always returns `Some(Value::Int64(len))`, whatever the field.
/// - For `Sum`/`Min`/`Max` on a text field, returns `None`.
/// - On an empty roster, `Sum` is `Int64(0)` and `Min`/`Max` are `Value::Null`.
pub fn reduce_field(roster: &Roster, field: PlayerField, op: ReduceOp) -> Option<Value> {
    match op {
        ReduceOp::Count => Some(Value::Int64(roster.len() as i64)),
        ReduceOp::Sum | ReduceOp::Min | ReduceOp::Max => match field.data_type() {
            DataType::Int64 => Some(reduce_numeric(roster, field, op)),
            DataType::Utf8 => None,
        },
    }
}

fn reduce_numeric(roster: &Roster, field: PlayerField, op: ReduceOp) -> Value {
    let init = match op {
        ReduceOp::Sum => Some(0),
        _ => None,
    };
    let acc = roster.reduce_players(init, |acc: Option<i64>, player| {
        let v = match player.get(field) {
            Value::Int64(v) => v,
            _ => return acc,
        };
        Some(match (op, acc) {
            (ReduceOp::Sum, Some(a)) => a + v,
            (ReduceOp::Min, Some(a)) => a.min(v),
            (ReduceOp::Max, Some(a)) => a.max(v),
            (_, None) => v,
            (ReduceOp::Count, Some(a)) => a,
        })
    });
    acc.map(Value::Int64).unwrap_or(Value::Null)
}
