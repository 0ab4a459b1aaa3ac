#![allow(dead_code)]

use std::fs;
use std::path::Path;

use vigil_domain::ModelsConfig;

/// Leaves are log-odds of 0.2, 0.6 and 0.9, split on air temperature.
pub const CLASSIFIER_JSON: &str = r#"{
    "feature_names": ["machine_type", "air_temperature", "process_temperature", "rotational_speed"],
    "base_score": 0.0,
    "aggregation": "sum",
    "link": "logistic",
    "trees": [
        {"nodes": [
            {"feature": 1, "threshold": 298.15, "left": 1, "right": 2},
            {"leaf": -1.3862943611198906},
            {"feature": 1, "threshold": 298.25, "left": 3, "right": 4},
            {"leaf": 0.4054651081081644},
            {"leaf": 2.1972245773362196}
        ]}
    ]
}"#;

/// Predicts 30.0, 31.5 and 40.0 for the three sample rows.
pub const REGRESSOR_JSON: &str = r#"{
    "feature_names": ["machine_type", "air_temperature", "rotational_speed"],
    "aggregation": "mean",
    "link": "identity",
    "trees": [
        {"nodes": [
            {"feature": 1, "threshold": 298.15, "left": 1, "right": 2},
            {"leaf": 29.0},
            {"feature": 1, "threshold": 298.25, "left": 3, "right": 4},
            {"leaf": 31.0},
            {"leaf": 39.0}
        ]},
        {"nodes": [
            {"feature": 1, "threshold": 298.15, "left": 1, "right": 2},
            {"leaf": 31.0},
            {"feature": 1, "threshold": 298.25, "left": 3, "right": 4},
            {"leaf": 32.0},
            {"leaf": 41.0}
        ]}
    ]
}"#;

pub const VOCABULARY_JSON: &str = r#"{"classes": ["L", "M", "H"]}"#;

/// The cleaned telemetry export the loader ingests.
pub const TELEMETRY_CSV: &str = "\
udi,product_id,timestamp_clean,machine_type,air_temperature,process_temperature,rotational_speed,machine_failure,operational_status
3,X3,2024-01-01 00:02:00,unknown,298.3,42.0,1498,1,0
1,L1,2024-01-01 00:00:00,L,298.1,30.0,1551,0,1
2,M2,2024-01-01 00:01:00,M,298.2,30.0,1408,0,1
";

pub fn write_models(dir: &Path) -> ModelsConfig {
    let config = ModelsConfig {
        classifier_path: dir.join("xgb_classifier.json"),
        regressor_path: dir.join("rf_regressor.json"),
        vocabulary_path: dir.join("label_encoder.json"),
    };
    fs::write(&config.classifier_path, CLASSIFIER_JSON).expect("write classifier");
    fs::write(&config.regressor_path, REGRESSOR_JSON).expect("write regressor");
    fs::write(&config.vocabulary_path, VOCABULARY_JSON).expect("write vocabulary");
    config
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
