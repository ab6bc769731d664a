//! Envelope-to-series transform for charting.
//!
//! The series is a pure function of the latest envelope. Callers recompute it
//! whenever the envelope changes rather than caching it, so it can never go
//! stale relative to the response state.

use crate::envelope::ResponseEnvelope;
use serde::Serialize;

/// A single named line of index-aligned points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: String,
    pub points: Vec<f64>,
}

/// Chart-ready series: date labels plus one dataset, index-aligned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub dataset: Dataset,
}

impl ChartSeries {
    /// An empty series labelled for `term`.
    pub fn empty(term: &str) -> Self {
        Self {
            labels: Vec::new(),
            dataset: Dataset {
                label: dataset_label(term),
                points: Vec::new(),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Serialize to the `[{date, value}, ...]` array the JS bridge expects.
    pub fn to_chart_json(&self) -> String {
        let rows: Vec<serde_json::Value> = self
            .labels
            .iter()
            .zip(self.dataset.points.iter())
            .map(|(date, value)| serde_json::json!({ "date": date, "value": value }))
            .collect();
        serde_json::to_string(&rows).unwrap_or_default()
    }
}

fn dataset_label(term: &str) -> String {
    format!("Interest Over Time for \"{term}\"")
}

/// Derive the chart series from the latest envelope, preserving the
/// provider's ordering. Absent envelope or absent `interest_over_time`
/// yield the empty series. A timeline point with no values contributes
/// neither a label nor a point, keeping the two sequences index-aligned.
pub fn chart_series(envelope: Option<&ResponseEnvelope>, term: &str) -> ChartSeries {
    let mut series = ChartSeries::empty(term);

    let Some(iot) = envelope.and_then(|e| e.interest_over_time.as_ref()) else {
        return series;
    };

    for point in &iot.timeline_data {
        if let Some(value) = point.first_value() {
            series.labels.push(point.date.clone());
            series.dataset.points.push(value);
        }
    }

    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::{InterestOverTime, TimelinePoint, TimelineValue};

    fn point(date: &str, values: &[f64]) -> TimelinePoint {
        TimelinePoint {
            date: date.to_string(),
            values: values
                .iter()
                .map(|v| TimelineValue { extracted_value: *v })
                .collect(),
        }
    }

    fn envelope(points: Vec<TimelinePoint>) -> ResponseEnvelope {
        ResponseEnvelope {
            interest_over_time: Some(InterestOverTime {
                timeline_data: points,
            }),
        }
    }

    #[test]
    fn test_series_aligned_in_original_order() {
        let env = envelope(vec![
            point("2024-01-07", &[30.0]),
            point("2024-01-01", &[42.0]),
            point("2024-01-14", &[25.0]),
        ]);
        let series = chart_series(Some(&env), "python");
        // Order as received, never re-sorted
        assert_eq!(series.labels, vec!["2024-01-07", "2024-01-01", "2024-01-14"]);
        assert_eq!(series.dataset.points, vec![30.0, 42.0, 25.0]);
        assert_eq!(series.labels.len(), series.dataset.points.len());
    }

    #[test]
    fn test_series_uses_first_value_only() {
        let env = envelope(vec![point("2024-01-01", &[42.0, 99.0])]);
        let series = chart_series(Some(&env), "python");
        assert_eq!(series.dataset.points, vec![42.0]);
    }

    #[test]
    fn test_missing_interest_over_time_yields_empty_series() {
        let env = ResponseEnvelope {
            interest_over_time: None,
        };
        let series = chart_series(Some(&env), "python");
        assert!(series.is_empty());
        assert!(series.dataset.points.is_empty());
    }

    #[test]
    fn test_no_envelope_yields_empty_series() {
        let series = chart_series(None, "rust");
        assert!(series.is_empty());
        assert_eq!(series.dataset.label, "Interest Over Time for \"rust\"");
    }

    #[test]
    fn test_valueless_point_skipped_on_both_axes() {
        let env = envelope(vec![
            point("2024-01-01", &[42.0]),
            point("2024-01-08", &[]),
            point("2024-01-15", &[57.0]),
        ]);
        let series = chart_series(Some(&env), "python");
        assert_eq!(series.labels, vec!["2024-01-01", "2024-01-15"]);
        assert_eq!(series.dataset.points, vec![42.0, 57.0]);
    }

    #[test]
    fn test_single_point_envelope_from_json() {
        let body = r#"{"interest_over_time":{"timeline_data":[{"date":"2024-01-01","values":[{"extracted_value":42}]}]}}"#;
        let env: ResponseEnvelope = serde_json::from_str(body).unwrap();
        let series = chart_series(Some(&env), "python");
        assert_eq!(series.labels, vec!["2024-01-01"]);
        assert_eq!(series.dataset.points, vec![42.0]);
    }

    #[test]
    fn test_to_chart_json_rows() {
        let env = envelope(vec![point("2024-01-01", &[42.0])]);
        let series = chart_series(Some(&env), "python");
        let rows: serde_json::Value = serde_json::from_str(&series.to_chart_json()).unwrap();
        assert_eq!(rows[0]["date"], "2024-01-01");
        assert_eq!(rows[0]["value"], 42.0);
    }
}
