//! Decodes one raw station record (a JSON object) into an [`Observation`].

use crate::observations::error::DecodeError;
use crate::types::observation::Observation;
use crate::types::timestamp_format::TimestampFormat;
use serde_json::{Map, Value};

const KEY_DATEUTC: &str = "dateutc";
const KEY_TEMPF: &str = "tempf";
const KEY_HUMIDITY: &str = "humidity";
const KEY_DEWPTF: &str = "dewptf";
const KEY_PRESSURE: &str = "pressure";
const KEY_WINDCHILLF: &str = "windchillf";
const KEY_WINDSPEEDMPH: &str = "windspeedmph";
const KEY_WINDDIR: &str = "winddir";
const KEY_RAININ: &str = "rainin";
const KEY_UV: &str = "UV";

/// Name of a JSON value's type, for error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Looks up a required key. `null` is treated the same as an absent key.
fn get_field<'a>(record: &'a Map<String, Value>, key: &'static str) -> Result<&'a Value, DecodeError> {
    match record.get(key) {
        None | Some(Value::Null) => Err(DecodeError::MissingField { field: key }),
        Some(value) => Ok(value),
    }
}

fn get_float(record: &Map<String, Value>, key: &'static str) -> Result<f64, DecodeError> {
    get_field(record, key)?
        .as_f64()
        .ok_or(DecodeError::WrongType {
            field: key,
            expected: "a number",
        })
}

/// Whole-number floats such as `180.0` are accepted; fractional or out-of-range values are not.
fn get_int(record: &Map<String, Value>, key: &'static str) -> Result<i32, DecodeError> {
    let value = get_field(record, key)?;
    value
        .as_i64()
        .or_else(|| {
            value
                .as_f64()
                .filter(|v| v.is_finite() && v.fract() == 0.0)
                .filter(|v| (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(v))
                .map(|v| v as i64)
        })
        .and_then(|value| i32::try_from(value).ok())
        .ok_or(DecodeError::WrongType {
            field: key,
            expected: "a 32-bit integer",
        })
}

fn get_timestamp(
    record: &Map<String, Value>,
    key: &'static str,
    format: TimestampFormat,
) -> Result<chrono::DateTime<chrono::Utc>, DecodeError> {
    let raw = get_field(record, key)?.as_str().ok_or(DecodeError::WrongType {
        field: key,
        expected: "a string",
    })?;
    format.parse(raw).ok_or_else(|| DecodeError::InvalidTimestamp {
        field: key,
        value: raw.to_string(),
        format,
    })
}

impl Observation {
    /// Decodes a single raw record.
    ///
    /// The record must be a JSON object carrying every station key: `dateutc`, `tempf`,
    /// `humidity`, `dewptf`, `pressure`, `windchillf`, `windspeedmph`, `winddir`, `rainin`
    /// and `UV`. Unknown keys are ignored.
    ///
    /// # Arguments
    ///
    /// * `record` - The raw JSON value of one record.
    /// * `format` - How the `dateutc` string is parsed. See [`TimestampFormat`] for the
    ///   precision caveat of the default date-only format.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] naming the first offending field if a key is missing, has
    /// the wrong JSON type, or if the timestamp does not match `format`. No partial
    /// observation is ever produced.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use weather_view::{DecodeError, Observation, TimestampFormat};
    ///
    /// let record = json!({
    ///     "dateutc": "2025-07-09", "tempf": 72.3, "humidity": 55, "dewptf": 54.1,
    ///     "pressure": 29.92, "windchillf": 72.3, "windspeedmph": 4.5, "winddir": 180,
    ///     "rainin": 0.0, "UV": 6
    /// });
    /// let obs = Observation::decode(&record, TimestampFormat::DateOnly).unwrap();
    /// assert_eq!(obs.wind_direction, 180);
    ///
    /// let broken = json!({ "dateutc": "2025-07-09" });
    /// let err = Observation::decode(&broken, TimestampFormat::DateOnly).unwrap_err();
    /// assert_eq!(err, DecodeError::MissingField { field: "tempf" });
    /// ```
    pub fn decode(record: &Value, format: TimestampFormat) -> Result<Observation, DecodeError> {
        let record = record.as_object().ok_or(DecodeError::NotAnObject {
            found: json_type_name(record),
        })?;

        Ok(Observation {
            timestamp: get_timestamp(record, KEY_DATEUTC, format)?,
            temperature: get_float(record, KEY_TEMPF)?,
            humidity: get_float(record, KEY_HUMIDITY)?,
            dew_point: get_float(record, KEY_DEWPTF)?,
            pressure: get_float(record, KEY_PRESSURE)?,
            wind_chill: get_float(record, KEY_WINDCHILLF)?,
            wind_speed: get_float(record, KEY_WINDSPEEDMPH)?,
            wind_direction: get_int(record, KEY_WINDDIR)?,
            rainfall_rate: get_float(record, KEY_RAININ)?,
            uv_index: get_int(record, KEY_UV)?,
        })
    }
}
