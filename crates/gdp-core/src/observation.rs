//! GDP time-series types: wire format, parsed observations, validated series

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use thiserror::Error;

/// Validation failure while building a [`GdpSeries`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("observation {index}: unparseable date {date:?}")]
    InvalidDate { index: usize, date: String },
    #[error("observation {index}: invalid value {value}")]
    InvalidValue { index: usize, value: f64 },
    #[error("dataset contains no observations")]
    Empty,
}

// ============================================================================
// WIRE FORMAT
// ============================================================================

/// Dataset as served over HTTP: `{ "data": [["1947-01-01", 243.1], ...] }`.
/// Sibling fields in the payload are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct GdpDataset {
    pub data: Vec<(String, f64)>,
}

// ============================================================================
// PARSED TYPES
// ============================================================================

/// Single quarterly observation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub date: NaiveDate,
    pub value: f64,
}

impl Observation {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }

    /// Midnight-UTC epoch milliseconds, the unit the time scale runs on
    pub fn timestamp_ms(&self) -> i64 {
        self.date
            .and_time(NaiveTime::MIN)
            .and_utc()
            .timestamp_millis()
    }
}

/// Validated series ready for charting.
///
/// `observations` and `date_strings` are index-aligned: the display label for
/// `observations[i]` always comes from `date_strings[i]`. Fields are private
/// so the alignment cannot be broken after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GdpSeries {
    observations: Vec<Observation>,
    date_strings: Vec<String>,
}

impl GdpSeries {
    /// Parse and validate a raw dataset. Dates must be ISO `YYYY-MM-DD`;
    /// values must be finite and non-negative.
    pub fn from_dataset(dataset: GdpDataset) -> Result<Self, DataError> {
        let mut observations = Vec::with_capacity(dataset.data.len());
        let mut date_strings = Vec::with_capacity(dataset.data.len());

        for (index, (date_string, value)) in dataset.data.into_iter().enumerate() {
            let date = NaiveDate::parse_from_str(&date_string, "%Y-%m-%d").map_err(|_| {
                DataError::InvalidDate {
                    index,
                    date: date_string.clone(),
                }
            })?;

            if !value.is_finite() || value < 0.0 {
                return Err(DataError::InvalidValue { index, value });
            }

            observations.push(Observation::new(date, value));
            date_strings.push(date_string);
        }

        Ok(Self {
            observations,
            date_strings,
        })
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn date_strings(&self) -> &[String] {
        &self.date_strings
    }

    /// Observation plus its source date string, index-aligned
    pub fn get(&self, index: usize) -> Option<(&Observation, &str)> {
        Some((
            self.observations.get(index)?,
            self.date_strings.get(index)?.as_str(),
        ))
    }

    /// Largest observation value
    pub fn max_value(&self) -> Option<f64> {
        self.observations
            .iter()
            .map(|o| o.value)
            .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
    }

    /// (min value, max value) across the series
    pub fn value_range(&self) -> Option<(f64, f64)> {
        if self.observations.is_empty() {
            return None;
        }

        let mut min = f64::MAX;
        let mut max = f64::MIN;

        for obs in &self.observations {
            min = min.min(obs.value);
            max = max.max(obs.value);
        }

        Some((min, max))
    }

    /// (first date, last date); the source array is sorted ascending
    pub fn time_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.observations.first(), self.observations.last()) {
            (Some(first), Some(last)) => Some((first.date, last.date)),
            _ => None,
        }
    }

    /// Time range in epoch milliseconds
    pub fn time_range_ms(&self) -> Option<(i64, i64)> {
        match (self.observations.first(), self.observations.last()) {
            (Some(first), Some(last)) => Some((first.timestamp_ms(), last.timestamp_ms())),
            _ => None,
        }
    }

    /// "first - last" date-string span, e.g. `1947-01-01 - 2015-07-01`
    pub fn period_label(&self) -> Option<String> {
        match (self.date_strings.first(), self.date_strings.last()) {
            (Some(first), Some(last)) => Some(format!("{} - {}", first, last)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(pairs: &[(&str, f64)]) -> GdpDataset {
        GdpDataset {
            data: pairs
                .iter()
                .map(|(d, v)| (d.to_string(), *v))
                .collect(),
        }
    }

    #[test]
    fn test_series_alignment() {
        let series = GdpSeries::from_dataset(dataset(&[
            ("1947-01-01", 243.1),
            ("1947-04-01", 246.3),
            ("1947-07-01", 250.1),
        ]))
        .unwrap();

        assert_eq!(series.len(), 3);
        let (obs, date_string) = series.get(1).unwrap();
        assert_eq!(obs.value, 246.3);
        assert_eq!(date_string, "1947-04-01");
    }

    #[test]
    fn test_rejects_bad_date() {
        let err = GdpSeries::from_dataset(dataset(&[("1947-13-99", 243.1)])).unwrap_err();
        assert_eq!(
            err,
            DataError::InvalidDate {
                index: 0,
                date: "1947-13-99".to_string()
            }
        );
    }

    #[test]
    fn test_rejects_bad_value() {
        let err =
            GdpSeries::from_dataset(dataset(&[("1947-01-01", 243.1), ("1947-04-01", f64::NAN)]))
                .unwrap_err();
        assert!(matches!(err, DataError::InvalidValue { index: 1, .. }));

        let err = GdpSeries::from_dataset(dataset(&[("1947-01-01", -1.0)])).unwrap_err();
        assert!(matches!(err, DataError::InvalidValue { index: 0, .. }));
    }

    #[test]
    fn test_ranges() {
        let series = GdpSeries::from_dataset(dataset(&[
            ("1947-01-01", 243.1),
            ("2015-07-01", 18064.7),
        ]))
        .unwrap();

        assert_eq!(series.max_value(), Some(18064.7));
        assert_eq!(series.value_range(), Some((243.1, 18064.7)));
        assert_eq!(
            series.period_label().unwrap(),
            "1947-01-01 - 2015-07-01"
        );

        let (start_ms, end_ms) = series.time_range_ms().unwrap();
        assert!(start_ms < end_ms);
    }

    #[test]
    fn test_wire_format_ignores_extra_fields() {
        let json = r#"{
            "source_name": "BEA",
            "data": [["1947-01-01", 243.1], ["1947-04-01", 246.3]]
        }"#;
        let dataset: GdpDataset = serde_json::from_str(json).unwrap();
        assert_eq!(dataset.data.len(), 2);
        assert_eq!(dataset.data[0].0, "1947-01-01");
    }

    #[test]
    fn test_empty_series() {
        let series = GdpSeries::from_dataset(dataset(&[])).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.max_value(), None);
        assert_eq!(series.time_range(), None);
    }
}
