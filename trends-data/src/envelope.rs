//! Response envelope for the trends proxy.
//!
//! The proxy forwards the provider's "interest over time" JSON unchanged:
//!
//! ```json
//! {
//!   "interest_over_time": {
//!     "timeline_data": [
//!       { "date": "2024-01-01", "values": [ { "extracted_value": 42 } ] }
//!     ]
//!   }
//! }
//! ```
//!
//! A body without `interest_over_time` is valid and means "nothing to chart".

use serde::{Deserialize, Serialize};

/// Full JSON body returned by the backend proxy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_over_time: Option<InterestOverTime>,
}

/// The `interest_over_time` section of the envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestOverTime {
    #[serde(default)]
    pub timeline_data: Vec<TimelinePoint>,
}

/// One dated sample in the provider's timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    /// Date label as the provider formats it (opaque to this client).
    pub date: String,
    /// One or more extracted values; only the first is charted.
    #[serde(default)]
    pub values: Vec<TimelineValue>,
}

/// A single numeric sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineValue {
    pub extracted_value: f64,
}

impl TimelinePoint {
    /// First extracted value for this point, if the provider sent any.
    pub fn first_value(&self) -> Option<f64> {
        self.values.first().map(|v| v.extracted_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_envelope() {
        let body = r#"{
            "interest_over_time": {
                "timeline_data": [
                    { "date": "2024-01-01", "values": [ { "extracted_value": 42 } ] },
                    { "date": "2024-01-08", "values": [ { "extracted_value": 57 } ] }
                ]
            }
        }"#;
        let envelope: ResponseEnvelope = serde_json::from_str(body).unwrap();
        let iot = envelope.interest_over_time.unwrap();
        assert_eq!(iot.timeline_data.len(), 2);
        assert_eq!(iot.timeline_data[0].date, "2024-01-01");
        assert_eq!(iot.timeline_data[0].first_value(), Some(42.0));
        assert_eq!(iot.timeline_data[1].first_value(), Some(57.0));
    }

    #[test]
    fn test_parse_envelope_without_interest_over_time() {
        let envelope: ResponseEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.interest_over_time.is_none());
    }

    #[test]
    fn test_parse_point_with_empty_values() {
        let body = r#"{ "date": "2024-02-01", "values": [] }"#;
        let point: TimelinePoint = serde_json::from_str(body).unwrap();
        assert_eq!(point.first_value(), None);
    }

    #[test]
    fn test_parse_point_defaults_missing_values() {
        let point: TimelinePoint = serde_json::from_str(r#"{ "date": "2024-02-01" }"#).unwrap();
        assert!(point.values.is_empty());
    }

    #[test]
    fn test_only_first_value_is_used() {
        let body = r#"{
            "date": "2024-03-01",
            "values": [ { "extracted_value": 10 }, { "extracted_value": 99 } ]
        }"#;
        let point: TimelinePoint = serde_json::from_str(body).unwrap();
        assert_eq!(point.first_value(), Some(10.0));
    }
}
