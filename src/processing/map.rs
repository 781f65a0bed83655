//! Mapping for slices and [`crate::types::Roster`].

/// Returns a new `Vec` with `mapper` applied to every item, in order.
pub fn map<T, U, F>(items: &[T], mapper: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    items.iter().map(mapper).collect()
}

/// Same result as [`map`], expressed as a fold over an accumulator `Vec`.
pub fn map_with_reduce<T, U, F>(items: &[T], mut mapper: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    items
        .iter()
        .fold(Vec::with_capacity(items.len()), |mut acc, item| {
            acc.push(mapper(item));
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::{map, map_with_reduce};
    use crate::types::{Player, Roster};

    #[test]
    fn map_extracts_names_in_order() {
        let roster = Roster::new(vec![
            Player::new("cristiano ronaldo", 29, "juventus", "portugal"),
            Player::new("paulo dybala", 24, "juventus", "argentina"),
        ]);
        let names = map(roster.players(), |p| p.name.clone());
        assert_eq!(names, vec!["cristiano ronaldo", "paulo dybala"]);

        let split = roster.map_players(|p| p.name.split(' ').count());
        assert_eq!(split, vec![2, 2]);
    }

    #[test]
    fn map_with_reduce_matches_map() {
        let data = [10, 20, 30];
        let tripled = map(&data, |v| v * 3);
        assert_eq!(tripled, vec![30, 60, 90]);
        assert_eq!(map_with_reduce(&data, |v| v * 3), tripled);
    }

    #[test]
    fn map_of_empty_is_empty() {
        let data: [f64; 0] = [];
        assert!(map(&data, |t| t * 2.0).is_empty());
    }
}
