mod common;

use common::dataset;
use supply_map::{
    MemoryLog, Pipeline, PipelineError, PointKind, Role,
    config::PipelineConfig,
    predicates::MissingMarkers,
};

fn run(headers: &[&str], rows: &[&[&str]]) -> Result<supply_map::PipelineOutcome, PipelineError> {
    Pipeline::default().run(&dataset(headers, rows), &MemoryLog::new())
}

fn latitudes(outcome: &supply_map::PipelineOutcome) -> Vec<f64> {
    outcome.cleaned.points().iter().map(|p| p.latitude).collect()
}

#[test]
fn valid_dataset_keeps_every_row_with_normalized_types() {
    let outcome = run(
        &["Lat", "lon", "Volume", "Type"],
        &[
            &["10.0", "-50.0", "100", "supply"],
            &["20.0", "40.0", "200", "demand"],
            &["30.0", "60.0", "300", "SUPPLY"],
        ],
    )
    .expect("valid dataset");
    assert_eq!(outcome.cleaned.len(), 3);
    assert_eq!(outcome.cleaned.headers(), vec!["Lat", "lon", "Volume", "Type"]);
    let kinds: Vec<PointKind> = outcome.cleaned.points().iter().map(|p| p.kind).collect();
    assert_eq!(kinds, vec![PointKind::Supply, PointKind::Demand, PointKind::Supply]);
    assert!(outcome.validations.iter().all(|v| v.is_valid()));
}

#[test]
fn out_of_range_latitude_drops_only_that_row() {
    let outcome = run(
        &["Latitude", "lon", "vol", "Type"],
        &[
            &["1000.0", "-50.0", "100", "supply"],
            &["20.0", "40.0", "200", "demand"],
            &["30.0", "60.0", "300", "SUPPLY"],
        ],
    )
    .expect("elision keeps the run alive");
    assert_eq!(latitudes(&outcome), vec![20.0, 30.0]);
    assert_eq!(outcome.report.invalid_rows, vec![0]);
}

#[test]
fn invalid_longitude_volume_and_type_rows_are_elided() {
    let lon = run(
        &["lat", "Longitude", "Volume", "Type"],
        &[&["10", "-190", "100", "supply"], &["20", "40", "200", "demand"]],
    )
    .unwrap();
    assert_eq!(latitudes(&lon), vec![20.0]);

    let volume = run(
        &["lat", "lon", "Volume", "Type"],
        &[
            &["10", "-50", "100", "supply"],
            &["20", "40", "INVALID", "demand"],
            &["30", "60", "-1", "SUPPLY"],
        ],
    )
    .unwrap();
    assert_eq!(latitudes(&volume), vec![10.0]);

    let kind = run(
        &["lat", "lon", "Volume", "Type"],
        &[
            &["10", "-50", "100", "supply"],
            &["20", "40", "200", "INVALID"],
            &["30", "60", "300", "SUPPLY"],
        ],
    )
    .unwrap();
    assert_eq!(latitudes(&kind), vec![10.0, 30.0]);
}

#[test]
fn missing_mandatory_column_fails_the_run() {
    let err = run(
        &["lat", "lon", "Type"],
        &[&["10", "-50", "supply"], &["20", "40", "demand"]],
    )
    .unwrap_err();
    match err {
        PipelineError::UnresolvedColumns(roles) => assert_eq!(roles, vec![Role::Volume]),
        other => panic!("expected unresolved columns, got {other:?}"),
    }
}

#[test]
fn missing_type_column_defaults_to_demand() {
    let outcome = run(
        &["lat", "lon", "Volume", "site"],
        &[&["10", "-50", "100", "a"], &["20", "40", "200", "b"]],
    )
    .expect("type is optional");
    assert_eq!(outcome.columns().kind, "type");
    assert!(outcome.cleaned.points().iter().all(|p| p.kind == PointKind::Demand));
    assert_eq!(outcome.cleaned.len(), 2);
}

#[test]
fn permissible_missing_values_are_dropped_not_coerced() {
    let outcome = run(
        &["lat", "lon", "Volume", "Type"],
        &[
            &["10", "-50", "100", "supply"],
            &["20", "40", "200", "NA"],
            &["30", "60", "300", "na"],
            &["", "70", "400", "demand"],
            &["nan", "80", "500", "demand"],
        ],
    )
    .unwrap();
    assert_eq!(latitudes(&outcome), vec![10.0]);
    assert_eq!(outcome.report.missing_rows, vec![1, 2, 3, 4]);
    assert!(outcome.report.invalid_rows.is_empty());
}

#[test]
fn mixed_missing_and_invalid_rows() {
    let outcome = run(
        &["lat", "lon", "Volume", "Type"],
        &[
            &["10", "-50", "100", "supply"],
            &["", "40", "200", "demand"],
            &["30", "INVALID", "300", "SUPPLY"],
        ],
    )
    .unwrap();
    assert_eq!(latitudes(&outcome), vec![10.0]);
    assert_eq!(outcome.report.missing_rows, vec![1]);
    assert_eq!(outcome.report.invalid_rows, vec![2]);
}

#[test]
fn missing_marker_in_extra_column_drops_the_row() {
    let outcome = run(
        &["lat", "lon", "Volume", "Type", "Extra_Column1"],
        &[&["10", "-50", "100", "supply", "A"], &["20", "40", "200", "demand", ""]],
    )
    .unwrap();
    assert_eq!(latitudes(&outcome), vec![10.0]);
    assert_eq!(outcome.cleaned.headers().len(), 4);
}

#[test]
fn slash_na_is_missing_only_with_extended_markers() {
    let data = dataset(
        &["lat", "lon", "Volume", "Type"],
        &[&["N/A", "-50", "100", "supply"], &["20", "40", "200", "demand"]],
    );

    let standard = Pipeline::default().run(&data, &MemoryLog::new()).unwrap();
    assert_eq!(standard.report.invalid_rows, vec![0]);
    assert!(standard.report.missing_rows.is_empty());

    let config = PipelineConfig {
        missing_markers: MissingMarkers::Extended,
        ..PipelineConfig::default()
    };
    let extended = Pipeline::new(config).run(&data, &MemoryLog::new()).unwrap();
    assert!(extended.report.invalid_rows.is_empty());
    assert_eq!(extended.report.missing_rows, vec![0]);
    assert_eq!(latitudes(&extended), vec![20.0]);
}

#[test]
fn fully_invalid_dataset_yields_an_empty_result() {
    let log = MemoryLog::new();
    let outcome = Pipeline::default()
        .run(
            &dataset(
                &["lat", "lon", "Volume", "Type"],
                &[&["100", "0", "1", "supply"], &["0", "0", "1", "other"]],
            ),
            &log,
        )
        .expect("empty result is not an error");
    assert!(outcome.cleaned.is_empty());
    assert_eq!(outcome.cleaned.headers().len(), 4);
    assert!(
        log.messages()
            .iter()
            .any(|m| m == "No valid records remain after cleaning.")
    );
}

#[test]
fn reruns_on_copies_are_identical() {
    let data = dataset(
        &["lat", "lon", "Volume", "Type"],
        &[
            &["10", "-50", "100", "supply"],
            &["1000", "40", "200", "demand"],
            &["30", "60", "", "SUPPLY"],
        ],
    );
    let copy = data.clone();
    let first = Pipeline::default().run(&data, &MemoryLog::new()).unwrap();
    let second = Pipeline::default().run(&copy, &MemoryLog::new()).unwrap();
    assert_eq!(first.cleaned, second.cleaned);
    assert_eq!(first.report, second.report);
    assert_eq!(data, copy);
}

#[test]
fn log_announces_source_and_detected_columns() {
    let log = MemoryLog::new();
    Pipeline::default()
        .run(
            &dataset(&["lat", "long", "Vol", "type"], &[&["1", "2", "3", "demand"]]),
            &log,
        )
        .unwrap();
    let messages = log.messages();
    assert!(messages.contains(&"Processing a new dataset: fixture.csv".to_string()));
    for expected in [
        "Using 'lat' as latitude column.",
        "Using 'long' as longitude column.",
        "Using 'Vol' as volume column.",
        "Using 'type' as type column.",
    ] {
        assert!(messages.contains(&expected.to_string()), "missing log line {expected}");
    }
}
