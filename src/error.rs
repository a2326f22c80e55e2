use crate::observations::error::{DecodeError, LoadError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherViewError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observations::data_store::{DataStore, LoadOptions};
    use crate::types::observation::Observation;
    use crate::types::timestamp_format::TimestampFormat;
    use serde_json::json;

    fn load(bytes: &[u8]) -> Result<DataStore, WeatherViewError> {
        Ok(DataStore::from_json_slice(bytes, &LoadOptions::default())?)
    }

    fn decode(record: serde_json::Value) -> Result<Observation, WeatherViewError> {
        Ok(Observation::decode(&record, TimestampFormat::DateOnly)?)
    }

    #[test]
    fn load_errors_convert_transparently() {
        let err = load(b"{}").unwrap_err();
        assert!(matches!(err, WeatherViewError::Load(LoadError::NotAnArray { .. })));
        assert_eq!(
            err.to_string(),
            "Observation data must be a JSON array of records, found an object"
        );
    }

    #[test]
    fn decode_errors_convert_transparently() {
        let err = decode(json!({})).unwrap_err();
        assert!(matches!(
            err,
            WeatherViewError::Decode(DecodeError::MissingField { field: "dateutc" })
        ));
    }
}
