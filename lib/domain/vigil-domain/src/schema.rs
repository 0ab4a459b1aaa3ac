//! Column names of the telemetry input and the prediction output tables.

pub const UDI: &str = "udi";
pub const PRODUCT_ID: &str = "product_id";
pub const TIMESTAMP_CLEAN: &str = "timestamp_clean";
pub const MACHINE_TYPE: &str = "machine_type";
pub const MACHINE_FAILURE: &str = "machine_failure";
pub const OPERATIONAL_STATUS: &str = "operational_status";
pub const PROCESS_TEMPERATURE: &str = "process_temperature";

pub const FAILURE_PROBABILITY: &str = "failure_probability";
pub const RISK_LABEL: &str = "risk_label";
pub const PREDICTED_PROCESS_TEMP: &str = "predicted_process_temp";
pub const ACTUAL_PROCESS_TEMP: &str = "actual_process_temp";
pub const TEMP_ANOMALY_SCORE: &str = "temp_anomaly_score";

/// Columns carried through to the output untouched.
pub const IDENTIFIER_COLUMNS: [&str; 3] = [UDI, PRODUCT_ID, TIMESTAMP_CLEAN];

/// Columns the failure classifier never sees.
pub const CLASSIFIER_EXCLUDED: [&str; 5] = [
    UDI,
    PRODUCT_ID,
    TIMESTAMP_CLEAN,
    MACHINE_FAILURE,
    OPERATIONAL_STATUS,
];

/// Columns the temperature regressor never sees. `process_temperature` is its target.
pub const REGRESSOR_EXCLUDED: [&str; 6] = [
    UDI,
    PRODUCT_ID,
    TIMESTAMP_CLEAN,
    MACHINE_FAILURE,
    OPERATIONAL_STATUS,
    PROCESS_TEMPERATURE,
];

/// Every column the scoring job requires from the source table.
pub const REQUIRED_INPUT_COLUMNS: [&str; 7] = [
    UDI,
    PRODUCT_ID,
    TIMESTAMP_CLEAN,
    MACHINE_TYPE,
    MACHINE_FAILURE,
    OPERATIONAL_STATUS,
    PROCESS_TEMPERATURE,
];

/// Output table columns, in write order.
pub const OUTPUT_COLUMNS: [&str; 8] = [
    UDI,
    PRODUCT_ID,
    TIMESTAMP_CLEAN,
    FAILURE_PROBABILITY,
    RISK_LABEL,
    PREDICTED_PROCESS_TEMP,
    ACTUAL_PROCESS_TEMP,
    TEMP_ANOMALY_SCORE,
];
