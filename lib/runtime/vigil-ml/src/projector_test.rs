use vigil_domain::EncodingVocabulary;
use vigil_domain::schema::{MACHINE_TYPE, PROCESS_TEMPERATURE};

use crate::projector::FeatureProjector;
use crate::test_support::telemetry_frame;

fn vocabulary() -> EncodingVocabulary {
    EncodingVocabulary::new(["L", "M", "H"])
}

#[test]
fn classifier_view_drops_identifiers_and_labels() {
    let vocabulary = vocabulary();
    let telemetry = telemetry_frame(&["L", "M", "H"], &[30.0, 30.0, 42.0]);
    let views = FeatureProjector::new(&vocabulary)
        .project(&telemetry)
        .expect("projection");

    assert_eq!(
        views.failure.columns(),
        [
            "machine_type",
            "air_temperature",
            "process_temperature",
            "rotational_speed"
        ]
    );
    assert_eq!(
        views.temperature.columns(),
        ["machine_type", "air_temperature", "rotational_speed"]
    );
}

#[test]
fn regressor_view_has_one_fewer_feature() {
    let vocabulary = vocabulary();
    let telemetry = telemetry_frame(&["L", "M"], &[30.0, 31.0]);
    let views = FeatureProjector::new(&vocabulary)
        .project(&telemetry)
        .expect("projection");

    assert_eq!(
        views.temperature.n_features() + 1,
        views.failure.n_features()
    );
    assert!(views.failure.column(PROCESS_TEMPERATURE).is_some());
    assert!(views.temperature.column(PROCESS_TEMPERATURE).is_none());
}

#[test]
fn rows_keep_count_and_order() {
    let vocabulary = vocabulary();
    let telemetry = telemetry_frame(&["H", "L", "M", "H"], &[30.0, 31.0, 32.0, 33.0]);
    let views = FeatureProjector::new(&vocabulary)
        .project(&telemetry)
        .expect("projection");

    assert_eq!(views.n_rows(), 4);
    assert_eq!(views.temperature.n_rows(), 4);
    assert_eq!(
        views.failure.column(PROCESS_TEMPERATURE).map(|c| c.to_vec()),
        Some(vec![30.0, 31.0, 32.0, 33.0])
    );
    assert_eq!(
        views.failure.column("air_temperature").map(|c| c.to_vec()),
        views.temperature.column("air_temperature").map(|c| c.to_vec())
    );
}

#[test]
fn machine_type_is_encoded_with_fallback() {
    let vocabulary = vocabulary();
    let telemetry = telemetry_frame(&["L", "M", "unknown"], &[30.0, 30.0, 42.0]);
    let views = FeatureProjector::new(&vocabulary)
        .project(&telemetry)
        .expect("projection");

    let expected = vec![0.0, 1.0, 0.0];
    assert_eq!(
        views.failure.column(MACHINE_TYPE).map(|c| c.to_vec()),
        Some(expected.clone())
    );
    assert_eq!(
        views.temperature.column(MACHINE_TYPE).map(|c| c.to_vec()),
        Some(expected)
    );
}

#[test]
fn text_feature_columns_are_rejected() {
    use polars::prelude::*;

    let vocabulary = vocabulary();
    let base = telemetry_frame(&["L"], &[30.0]);
    let mut frame = base.frame().clone();
    frame
        .with_column(Series::new("operator_note", ["check belt"]))
        .expect("extra column");
    let telemetry = crate::frame::TelemetryFrame::new(frame).expect("telemetry");

    let err = FeatureProjector::new(&vocabulary)
        .project(&telemetry)
        .unwrap_err();
    assert!(format!("{err:#}").contains("operator_note"));
}

#[test]
fn empty_batches_project_to_empty_views() {
    let vocabulary = vocabulary();
    let telemetry = telemetry_frame(&[], &[]);
    let views = FeatureProjector::new(&vocabulary)
        .project(&telemetry)
        .expect("projection");
    assert_eq!(views.n_rows(), 0);
    assert_eq!(views.failure.n_features(), 4);
    assert_eq!(views.temperature.n_features(), 3);
}
