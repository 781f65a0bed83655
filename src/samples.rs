//! Built-in sample data.
//!
//! The 14-player roster plus the small numeric sequences used by the `roster-demo` binary.

use crate::types::{Player, Roster};

/// Celsius temperatures converted by the map demo.
pub const CELSIUS: [f64; 8] = [-15.0, -5.0, 0.0, 10.0, 16.0, 20.0, 24.0, 32.0];

/// Values summed by the reduce demo.
pub const VALUES: [i64; 6] = [11, 25, 26, 54, 87, 100];

/// Data tripled with both `map` and `map_with_reduce`.
pub const TRIPLE_DATA: [i64; 3] = [10, 20, 30];

/// Data filtered to odd numbers with both `filter` and `filter_with_reduce`.
pub const ODD_DATA: [i64; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

/// Convert a Celsius temperature to Fahrenheit.
pub fn celsius_to_fahrenheit(t: f64) -> f64 {
    t * 1.8 + 32.0
}

/// The sample roster, in its canonical order.
pub fn sample_players() -> Roster {
    Roster::new(vec![
        Player::new("cristiano ronaldo", 29, "juventus", "portugal"),
        Player::new("paulo dybala", 24, "juventus", "argentina"),
        Player::new("lionel messi", 29, "barcelona", "argentina"),
        Player::new("kylian mbappe", 22, "psg", "france"),
        Player::new("paul pogba", 27, "manchester united", "france"),
        Player::new("eden hazard", 29, "chelsea", "belgium"),
        Player::new("kun aguero", 28, "manchester city", "argentina"),
        Player::new("marcus rashford", 23, "manchester united", "england"),
        Player::new("mohammad salah", 26, "liverpool", "egypt"),
        Player::new("neymar jr", 28, "psg", "brazil"),
        Player::new("dele alli", 25, "tottenham", "england"),
        Player::new("angel di maria", 27, "psg", "argentina"),
        Player::new("ji sung park", 35, "manchester united", "south korea"),
        Player::new("wayne rooney", 33, "manchester united", "england"),
    ])
}

#[cfg(test)]
mod tests {
    use super::{celsius_to_fahrenheit, sample_players, CELSIUS};
    use crate::processing::{filter, map};
    use crate::types::PlayerField;

    #[test]
    fn sample_roster_has_fourteen_players() {
        assert_eq!(sample_players().len(), 14);
    }

    #[test]
    fn club_counts_match_literal_dataset() {
        let clubs = sample_players().count_by_field(PlayerField::Club);
        assert_eq!(clubs.get("manchester united"), 4);
        assert_eq!(clubs.get("psg"), 3);
        assert_eq!(clubs.get("juventus"), 2);
        assert_eq!(clubs.get("barcelona"), 1);
        assert_eq!(clubs.len(), 8);
        assert_eq!(clubs.total(), 14);
    }

    #[test]
    fn argentina_filter_yields_four_players() {
        let roster = sample_players();
        let names = map(
            &filter(roster.players(), |p| p.nationality == "argentina"),
            |p| p.name.clone(),
        );
        assert_eq!(
            names,
            vec!["paulo dybala", "lionel messi", "kun aguero", "angel di maria"]
        );
    }

    #[test]
    fn fahrenheit_conversion() {
        let expected = [5.0, 23.0, 32.0, 50.0, 60.8, 68.0, 75.2, 89.6];
        let got = map(&CELSIUS, |t| celsius_to_fahrenheit(*t));
        assert_eq!(got.len(), expected.len());
        for (g, e) in got.iter().zip(expected) {
            assert!((g - e).abs() < 1e-9, "got {g}, expected {e}");
        }
    }
}
