//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use trends_data::envelope::ResponseEnvelope;
use trends_data::query::QueryState;

/// Shared application state for the trends chart app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Search term whose popularity trend is requested
    pub term: Signal<String>,
    /// Date-range expression, opaque to this client ("today 1-m", ...)
    pub date_range: Signal<String>,
    /// Latest successful response envelope (None until the first one lands)
    pub envelope: Signal<Option<ResponseEnvelope>>,
    /// Error message if the last fetch failed
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        let defaults = QueryState::default();
        Self {
            term: Signal::new(defaults.term),
            date_range: Signal::new(defaults.date_range),
            envelope: Signal::new(None),
            error_msg: Signal::new(None),
        }
    }
}
