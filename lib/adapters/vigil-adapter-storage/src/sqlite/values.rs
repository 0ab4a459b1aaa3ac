//! Conversions between SQLite values and polars columns.

use anyhow::{Result, bail};
use polars::prelude::*;
use rusqlite::types::Value;

/// Storage class chosen for a fetched column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum ColumnKind {
    Empty,
    Integer,
    Real,
    Text,
}

impl ColumnKind {
    fn widen(self, value: &Value) -> Result<Self> {
        let seen = match value {
            Value::Null => Self::Empty,
            Value::Integer(_) => Self::Integer,
            Value::Real(_) => Self::Real,
            Value::Text(_) => Self::Text,
            Value::Blob(_) => bail!("blob values are not supported"),
        };
        Ok(self.max(seen))
    }
}

/// Builds a column from fetched values. Columns holding only nulls come out
/// as `Float64` so they can still feed a feature view.
pub(crate) fn column_from_values(name: &str, values: &[Value]) -> Result<Series> {
    let mut kind = ColumnKind::Empty;
    for value in values {
        kind = kind
            .widen(value)
            .map_err(|err| err.context(format!("column '{name}'")))?;
    }

    let series = match kind {
        ColumnKind::Integer => {
            let data: Vec<Option<i64>> = values
                .iter()
                .map(|value| match value {
                    Value::Integer(v) => Some(*v),
                    _ => None,
                })
                .collect();
            Series::new(name, data)
        }
        ColumnKind::Empty | ColumnKind::Real => {
            let data: Vec<Option<f64>> = values
                .iter()
                .map(|value| match value {
                    Value::Integer(v) => Some(*v as f64),
                    Value::Real(v) => Some(*v),
                    _ => None,
                })
                .collect();
            Series::new(name, data)
        }
        ColumnKind::Text => {
            let data: Vec<Option<String>> = values
                .iter()
                .map(|value| match value {
                    Value::Integer(v) => Some(v.to_string()),
                    Value::Real(v) => Some(v.to_string()),
                    Value::Text(v) => Some(v.clone()),
                    _ => None,
                })
                .collect();
            Series::new(name, data)
        }
    };
    Ok(series)
}

/// Declared SQLite type for a column of `dtype`.
pub(crate) fn sql_type(dtype: &DataType) -> &'static str {
    if matches!(dtype, DataType::Boolean) || dtype.is_integer() {
        "INTEGER"
    } else if dtype.is_float() {
        "REAL"
    } else {
        "TEXT"
    }
}

/// Converts one cell for binding. NaN is stored as NULL.
pub(crate) fn sql_value(value: AnyValue<'_>) -> Value {
    match value {
        AnyValue::Null => Value::Null,
        AnyValue::Boolean(v) => Value::Integer(i64::from(v)),
        AnyValue::Int32(v) => Value::Integer(i64::from(v)),
        AnyValue::Int64(v) => Value::Integer(v),
        AnyValue::UInt32(v) => Value::Integer(i64::from(v)),
        AnyValue::UInt64(v) => i64::try_from(v).map_or(Value::Real(v as f64), Value::Integer),
        AnyValue::Float32(v) if v.is_nan() => Value::Null,
        AnyValue::Float32(v) => Value::Real(f64::from(v)),
        AnyValue::Float64(v) if v.is_nan() => Value::Null,
        AnyValue::Float64(v) => Value::Real(v),
        AnyValue::String(v) => Value::Text(v.to_string()),
        AnyValue::StringOwned(v) => Value::Text(v.to_string()),
        other => {
            let dtype = other.dtype();
            if dtype.is_integer() {
                other.extract::<i64>().map_or(Value::Null, Value::Integer)
            } else if dtype.is_float() {
                other.extract::<f64>().map_or(Value::Null, Value::Real)
            } else {
                Value::Text(other.to_string())
            }
        }
    }
}
