//! Filtering for slices and [`crate::types::Roster`].

/// Returns a new `Vec` containing only items for which `predicate` returns `true`.
///
/// Order is preserved and the input is left untouched.
pub fn filter<T, F>(items: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    items.iter().filter(|&item| predicate(item)).cloned().collect()
}

/// Same result as [`filter`], expressed as a fold over an accumulator `Vec`.
pub fn filter_with_reduce<T, F>(items: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    items.iter().fold(Vec::new(), |mut acc, item| {
        if predicate(item) {
            acc.push(item.clone());
        }
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::{filter, filter_with_reduce};
    use crate::types::{Player, Roster};

    fn sample_roster() -> Roster {
        Roster::new(vec![
            Player::new("a", 29, "juventus", "portugal"),
            Player::new("b", 24, "juventus", "argentina"),
            Player::new("c", 29, "barcelona", "argentina"),
        ])
    }

    #[test]
    fn filter_by_text_predicate() {
        let roster = sample_roster();
        let out = filter(roster.players(), |p| p.nationality == "argentina");

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].name, "b");
        assert_eq!(out[1].name, "c");
        // Original unchanged
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn filter_accepts_named_predicate() {
        fn is_over_25(p: &Player) -> bool {
            p.age > 25
        }
        let roster = sample_roster();
        let out = roster.filter_players(is_over_25);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn filter_can_return_empty() {
        let roster = sample_roster();
        assert!(filter(roster.players(), |_| false).is_empty());
    }

    #[test]
    fn filter_with_reduce_matches_filter() {
        let data: Vec<i32> = (1..=10).collect();
        let odd = filter(&data, |v| v % 2 == 1);
        assert_eq!(odd, vec![1, 3, 5, 7, 9]);
        assert_eq!(filter_with_reduce(&data, |v| v % 2 == 1), odd);
    }
}
