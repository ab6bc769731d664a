//! Data model and transforms for the trends chart app.
//!
//! This crate handles the proxy's response envelope and its translation
//! into a chart-friendly series. It has no browser dependencies so
//! everything here is testable on the host.

pub mod envelope;
pub mod query;
pub mod series;

pub use envelope::{InterestOverTime, ResponseEnvelope, TimelinePoint, TimelineValue};
pub use series::{chart_series, ChartSeries, Dataset};
