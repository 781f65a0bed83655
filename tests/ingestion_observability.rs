use std::sync::{Arc, Mutex};

use roster_processing::ingestion::{
    ingest_from_path, CompositeObserver, FileObserver, IngestionContext, IngestionFormat, IngestionObserver,
    IngestionOptions, IngestionSeverity, IngestionStats,
};
use roster_processing::ProcessingError;

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<usize>>,
    warnings: Mutex<Vec<String>>,
    failures: Mutex<Vec<IngestionSeverity>>,
    alerts: Mutex<Vec<IngestionSeverity>>,
}

impl IngestionObserver for RecordingObserver {
    fn on_success(&self, _ctx: &IngestionContext, stats: IngestionStats) {
        self.successes.lock().unwrap().push(stats.players);
    }

    fn on_warning(&self, _ctx: &IngestionContext, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }

    fn on_failure(&self, _ctx: &IngestionContext, severity: IngestionSeverity, _error: &ProcessingError) {
        self.failures.lock().unwrap().push(severity);
    }

    fn on_alert(&self, _ctx: &IngestionContext, severity: IngestionSeverity, _error: &ProcessingError) {
        self.alerts.lock().unwrap().push(severity);
    }
}

#[test]
fn observer_receives_success_with_player_count() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = IngestionOptions {
        observer: Some(obs.clone()),
        ..Default::default()
    };

    let roster = ingest_from_path("tests/fixtures/players.json", &opts).unwrap();

    assert_eq!(roster.len(), 14);
    assert_eq!(*obs.successes.lock().unwrap(), vec![14]);
    assert!(obs.warnings.lock().unwrap().is_empty());
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn observer_receives_warning_for_empty_roster() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = IngestionOptions {
        observer: Some(obs.clone()),
        ..Default::default()
    };

    let roster = ingest_from_path("tests/fixtures/empty.csv", &opts).unwrap();

    assert!(roster.is_empty());
    assert_eq!(*obs.successes.lock().unwrap(), vec![0]);
    assert_eq!(*obs.warnings.lock().unwrap(), vec!["roster contains no players".to_string()]);
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn observer_receives_failure_and_alert_on_critical_io_error() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = IngestionOptions {
        format: Some(IngestionFormat::Csv),
        observer: Some(obs.clone()),
        alert_at_or_above: IngestionSeverity::Critical,
    };

    // Missing file -> Io error -> Critical
    let _ = ingest_from_path("tests/fixtures/does_not_exist.csv", &opts).unwrap_err();

    let failures = obs.failures.lock().unwrap().clone();
    let alerts = obs.alerts.lock().unwrap().clone();
    assert_eq!(failures, vec![IngestionSeverity::Critical]);
    assert_eq!(alerts, vec![IngestionSeverity::Critical]);
}

#[test]
fn observer_receives_failure_without_alert_for_non_critical_error() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = IngestionOptions {
        format: Some(IngestionFormat::Csv),
        observer: Some(obs.clone()),
        alert_at_or_above: IngestionSeverity::Critical,
    };

    // JSON parsed as CSV -> missing columns -> Error severity (not Critical) -> no alert
    let _ = ingest_from_path("tests/fixtures/players.json", &opts).unwrap_err();

    let failures = obs.failures.lock().unwrap().clone();
    assert_eq!(failures, vec![IngestionSeverity::Error]);
    assert!(obs.alerts.lock().unwrap().is_empty());
}

#[test]
fn unknown_extension_is_rejected_before_observers_run() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = IngestionOptions {
        observer: Some(obs.clone()),
        ..Default::default()
    };

    let err = ingest_from_path("tests/fixtures/players.parquet", &opts).unwrap_err();
    assert!(err.to_string().contains("cannot infer format from extension 'parquet'"));
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn composite_observer_fans_out_and_file_observer_appends() {
    let log_path = std::env::temp_dir().join(format!("roster-ingest-{}.log", std::process::id()));
    let _ = std::fs::remove_file(&log_path);

    let recorder = Arc::new(RecordingObserver::default());
    let observers: Vec<Arc<dyn IngestionObserver>> = vec![
        recorder.clone() as Arc<dyn IngestionObserver>,
        Arc::new(FileObserver::new(&log_path)) as Arc<dyn IngestionObserver>,
    ];
    let composite = CompositeObserver::new(observers);
    let opts = IngestionOptions {
        observer: Some(Arc::new(composite)),
        ..Default::default()
    };

    ingest_from_path("tests/fixtures/players.csv", &opts).unwrap();

    assert_eq!(*recorder.successes.lock().unwrap(), vec![14]);
    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("[roster][ok] format=Csv"));
    assert!(log.contains("players=14"));
    let _ = std::fs::remove_file(&log_path);
}
