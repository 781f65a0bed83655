//! Walks through filter, map and reduce over the sample roster (or a roster file).
//!
//! Usage: `roster-demo [PATH]`, where PATH is an optional `.csv`, `.json` or `.ndjson` roster.

use std::process::ExitCode;
use std::sync::Arc;

use roster_processing::ingestion::{ingest_from_path, IngestionOptions, StdErrObserver};
use roster_processing::processing::{
    count_by, filter, filter_with_reduce, map, map_with_reduce, reduce, reduce_field, ReduceOp,
};
use roster_processing::samples::{
    celsius_to_fahrenheit, sample_players, CELSIUS, ODD_DATA, TRIPLE_DATA, VALUES,
};
use roster_processing::types::{Player, PlayerField, Roster};
use roster_processing::ProcessingResult;

fn main() -> ExitCode {
    match run(std::env::args().nth(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_roster(path: Option<String>) -> ProcessingResult<Roster> {
    match path {
        Some(path) => {
            let opts = IngestionOptions {
                observer: Some(Arc::new(StdErrObserver)),
                ..Default::default()
            };
            ingest_from_path(path, &opts)
        }
        None => Ok(sample_players()),
    }
}

fn is_argentinian(player: &Player) -> bool {
    player.nationality == "argentina"
}

fn run(path: Option<String>) -> ProcessingResult<()> {
    let roster = load_roster(path)?;

    println!("== filter ==");
    let argentina = filter(roster.players(), |p| p.nationality == "argentina");
    println!("argentina players: {}", serde_json::to_string(&argentina)?);
    let argentina2 = roster.filter_players(is_argentinian);
    println!("argentina players (named predicate): {}", argentina2.len());

    println!("== map ==");
    let names = roster.map_players(|p| p.name.clone());
    println!("player names: {names:?}");
    let fahrenheit = map(&CELSIUS, |t| celsius_to_fahrenheit(*t));
    println!("fahrenheit: {fahrenheit:?}");

    println!("== reduce ==");
    let sum = reduce(&VALUES, 0, |acc, v| acc + v);
    println!("sum of {VALUES:?}: {sum}");
    if let Some(total_age) = reduce_field(&roster, PlayerField::Age, ReduceOp::Sum) {
        println!("total age: {total_age}");
    }

    let tripled = map(&TRIPLE_DATA, |v| v * 3);
    let tripled_with_reduce = map_with_reduce(&TRIPLE_DATA, |v| v * 3);
    println!("tripled: {tripled:?} / with reduce: {tripled_with_reduce:?}");

    let odd = filter(&ODD_DATA, |v| v % 2 == 1);
    let odd_with_reduce = filter_with_reduce(&ODD_DATA, |v| v % 2 == 1);
    println!("odd: {odd:?} / with reduce: {odd_with_reduce:?}");

    println!("== players per club ==");
    let per_club = count_by(roster.players(), |p| p.club.clone());
    println!("{}", serde_json::to_string(&per_club.sorted())?);

    Ok(())
}
