//! Reusable Dioxus RSX components for the trends chart app.

mod chart_container;
mod chart_header;
mod error_display;
mod loading_spinner;
mod query_controls;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use query_controls::QueryControls;
