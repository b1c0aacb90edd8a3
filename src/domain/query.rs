// Query parameter domain model
use serde::Deserialize;
use std::fmt;

/// Time unit codes understood by the backend's relative-range parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum TimeUnit {
    #[serde(rename = "s")]
    Seconds,
    #[serde(rename = "m")]
    Minutes,
    #[serde(rename = "h")]
    Hours,
    #[serde(rename = "d")]
    Days,
    #[serde(rename = "mo")]
    Months,
}

impl TimeUnit {
    pub fn code(&self) -> &'static str {
        match self {
            TimeUnit::Seconds => "s",
            TimeUnit::Minutes => "m",
            TimeUnit::Hours => "h",
            TimeUnit::Days => "d",
            TimeUnit::Months => "mo",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Parameters for one relative time-range query: the named measurement plus a
/// duration (magnitude + unit) ending "now". The backend interprets the
/// duration; no absolute timestamps are computed on this side.
///
/// Magnitude is expected in 1..=12 and the measurement non-empty, but both are
/// constrained by the input widgets upstream, not validated here. Out-of-range
/// values pass through unchanged and the backend rejects the range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParameters {
    pub measurement: String,
    pub magnitude: u32,
    pub unit: TimeUnit,
}

impl QueryParameters {
    pub fn new(measurement: String, magnitude: u32, unit: TimeUnit) -> Self {
        Self {
            measurement,
            magnitude,
            unit,
        }
    }

    /// Project into the query-string pairs the backend expects.
    pub fn as_query_pairs(&self) -> [(&'static str, String); 3] {
        [
            ("measurement", self.measurement.clone()),
            ("timeValue", self.magnitude.to_string()),
            ("timeUnit", self.unit.code().to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_codes() {
        assert_eq!(TimeUnit::Seconds.code(), "s");
        assert_eq!(TimeUnit::Minutes.code(), "m");
        assert_eq!(TimeUnit::Hours.code(), "h");
        assert_eq!(TimeUnit::Days.code(), "d");
        assert_eq!(TimeUnit::Months.code(), "mo");
    }

    #[test]
    fn test_query_pairs() {
        let params = QueryParameters::new("mqtt_data".to_string(), 3, TimeUnit::Months);
        assert_eq!(
            params.as_query_pairs(),
            [
                ("measurement", "mqtt_data".to_string()),
                ("timeValue", "3".to_string()),
                ("timeUnit", "mo".to_string()),
            ]
        );
    }

    #[test]
    fn test_out_of_range_magnitude_passes_through() {
        // The widget layer keeps magnitude in 1..=12; the builder itself
        // fails open and forwards whatever it was given.
        let params = QueryParameters::new("mqtt_data".to_string(), 99, TimeUnit::Seconds);
        assert_eq!(params.as_query_pairs()[1], ("timeValue", "99".to_string()));
    }

    #[test]
    fn test_unit_deserializes_from_wire_code() {
        let unit: TimeUnit = serde_json::from_str("\"mo\"").unwrap();
        assert_eq!(unit, TimeUnit::Months);
    }
}
