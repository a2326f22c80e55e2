//! The `DataStore` owns the full, immutable observation set and serves range-filtered
//! subsets of it.

use crate::observations::decode::json_type_name;
use crate::observations::error::{DecodeError, LoadError};
use crate::types::observation::Observation;
use crate::types::time_range::TimeRange;
use crate::types::timestamp_format::TimestampFormat;
use bon::Builder;
use log::{debug, error, info, warn};
use serde_json::Value;
use std::path::Path;

/// Options controlling how raw records are decoded.
///
/// # Examples
///
/// ```
/// use weather_view::{LoadOptions, TimestampFormat};
///
/// // Default: date-only timestamps, as written by the station export.
/// let defaults = LoadOptions::default();
/// assert_eq!(defaults.timestamp_format, TimestampFormat::DateOnly);
///
/// // Full-precision sources must opt in explicitly.
/// let precise = LoadOptions::builder()
///     .timestamp_format(TimestampFormat::Rfc3339)
///     .build();
/// assert_eq!(precise.timestamp_format, TimestampFormat::Rfc3339);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Builder)]
pub struct LoadOptions {
    /// Format of the `dateutc` field. Defaults to [`TimestampFormat::DateOnly`], which
    /// truncates any time-of-day information.
    #[builder(default)]
    pub timestamp_format: TimestampFormat,
}

/// A raw record that failed to decode and was left out of the store.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    /// Position of the record in the source array.
    pub index: usize,
    pub error: DecodeError,
}

/// Holds every observation loaded from the source, in source order.
///
/// The set is written once, at construction, and never mutated afterwards. It is expected
/// to be ordered by ascending timestamp as delivered by the source; the store does not
/// re-sort it and logs a warning if it is not.
///
/// Records that fail to decode are skipped rather than aborting the load. How many were
/// skipped, and why, is available through [`DataStore::skipped`] and
/// [`DataStore::skipped_records`].
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    observations: Vec<Observation>,
    skipped: Vec<SkippedRecord>,
}

impl DataStore {
    /// An empty store. Every derived view handles this case.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wraps already-decoded observations. Nothing is skipped.
    pub fn from_observations(observations: Vec<Observation>) -> Self {
        warn_if_unordered(&observations);
        Self {
            observations,
            skipped: Vec::new(),
        }
    }

    /// Loads the observation file at `path`.
    ///
    /// The file must contain a JSON array of station records. Each record is decoded
    /// independently; malformed ones are logged, counted and skipped.
    ///
    /// # Arguments
    ///
    /// * `path` - Location of the JSON observation file.
    /// * `options` - Decoding options, see [`LoadOptions`].
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Read`] if the file cannot be read, [`LoadError::Parse`] if it is
    /// not valid JSON, and [`LoadError::NotAnArray`] if the top level is not an array.
    /// Per-record decode failures are never returned as errors.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use weather_view::{DataStore, LoadOptions};
    ///
    /// let store = DataStore::load("weather_data.json", &LoadOptions::default())?;
    /// println!("{} observations, {} skipped", store.len(), store.skipped());
    /// # Ok::<(), weather_view::LoadError>(())
    /// ```
    pub fn load(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self, LoadError> {
        let path = path.as_ref();
        info!("Loading observations from {}", path.display());

        let bytes = std::fs::read(path).map_err(|e| LoadError::Read(path.to_path_buf(), e))?;
        let store = Self::from_json_slice(&bytes, options)?;

        info!(
            "Loaded {} observations from {} ({} skipped)",
            store.len(),
            path.display(),
            store.skipped()
        );
        Ok(store)
    }

    /// Loads the observation file at `path`, falling back to an empty store on failure.
    ///
    /// A session without data cannot show anything meaningful, but it should still render
    /// an empty state instead of failing. The load error is logged.
    pub fn load_or_empty(path: impl AsRef<Path>, options: &LoadOptions) -> Self {
        let path = path.as_ref();
        match Self::load(path, options) {
            Ok(store) => store,
            Err(e) => {
                error!(
                    "Could not load observations from {}, continuing without data: {}",
                    path.display(),
                    e
                );
                Self::empty()
            }
        }
    }

    /// Parses a JSON array of records from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Parse`] or [`LoadError::NotAnArray`]; see [`DataStore::load`].
    pub fn from_json_slice(bytes: &[u8], options: &LoadOptions) -> Result<Self, LoadError> {
        match serde_json::from_slice::<Value>(bytes)? {
            Value::Array(records) => Ok(Self::from_values(&records, options)),
            other => Err(LoadError::NotAnArray {
                found: json_type_name(&other),
            }),
        }
    }

    /// Decodes already-parsed records, skipping and counting the ones that fail.
    pub fn from_values(records: &[Value], options: &LoadOptions) -> Self {
        let mut observations = Vec::with_capacity(records.len());
        let mut skipped = Vec::new();

        for (index, record) in records.iter().enumerate() {
            match Observation::decode(record, options.timestamp_format) {
                Ok(observation) => observations.push(observation),
                Err(error) => {
                    warn!("Skipping observation record {}: {}", index, error);
                    skipped.push(SkippedRecord { index, error });
                }
            }
        }

        debug!(
            "Decoded {} of {} records using {} timestamps",
            observations.len(),
            records.len(),
            options.timestamp_format
        );
        warn_if_unordered(&observations);

        Self {
            observations,
            skipped,
        }
    }

    /// Returns every observation with `range.start <= timestamp <= range.end`, in source order.
    ///
    /// An inverted range (`start > end`) yields an empty vector. The subset is recomputed on
    /// every call; nothing is cached.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use weather_view::{DataStore, TimeRange};
    ///
    /// let store = DataStore::empty();
    /// let now = Utc.with_ymd_and_hms(2025, 7, 9, 12, 0, 0).unwrap();
    /// assert!(store.filter(&TimeRange::at(now)).is_empty());
    /// ```
    pub fn filter(&self, range: &TimeRange) -> Vec<Observation> {
        if range.is_inverted() {
            return Vec::new();
        }
        self.observations
            .iter()
            .filter(|observation| range.contains(observation.timestamp))
            .copied()
            .collect()
    }

    /// The full observation set, in source order.
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn first(&self) -> Option<&Observation> {
        self.observations.first()
    }

    pub fn last(&self) -> Option<&Observation> {
        self.observations.last()
    }

    /// Number of source records that failed to decode.
    pub fn skipped(&self) -> usize {
        self.skipped.len()
    }

    /// The records that failed to decode, with their position and reason.
    pub fn skipped_records(&self) -> &[SkippedRecord] {
        &self.skipped
    }
}

/// Index of the first observation that is earlier than its predecessor.
fn first_inversion(observations: &[Observation]) -> Option<usize> {
    observations
        .windows(2)
        .position(|pair| pair[0].timestamp > pair[1].timestamp)
        .map(|position| position + 1)
}

fn warn_if_unordered(observations: &[Observation]) {
    if let Some(index) = first_inversion(observations) {
        warn!(
            "Observations are not in ascending timestamp order (first inversion at index {}); keeping source order",
            index
        );
    }
}
