//! Interest-over-time trends search chart.
//!
//! Lets the user enter a search term and a provider date-range expression,
//! fetches interest-over-time data from the local backend proxy, and renders
//! it as a D3.js line chart.
//!
//! Data flow:
//! 1. On mount: initialize the D3 chart scripts and run the first fetch with
//!    the default term/date-range.
//! 2. Whenever either input commits a new value (or the button is pressed):
//!    run the same fetch routine against the proxy.
//! 3. Whenever the stored envelope changes: derive the chart series and
//!    re-render via the JS bridge. The series is recomputed every time,
//!    never cached.

use dioxus::prelude::*;
use trends_chart_ui::api;
use trends_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, QueryControls,
};
use trends_chart_ui::js_bridge;
use trends_chart_ui::state::AppState;
use trends_data::query::FETCH_FAILED_MSG;
use trends_data::series::chart_series;

/// DOM id for the D3 chart container div.
const CHART_CONTAINER_ID: &str = "trends-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("trends-root"))
        .launch(App);
}

/// Run one fetch against the proxy and write the outcome back into state.
///
/// Success stores the envelope and clears any error; failure sets the fixed
/// message, logs the detail to the console, and leaves previously displayed
/// data untouched. Overlapping requests are not sequenced or cancelled, so
/// the last one to resolve wins.
async fn run_fetch(mut state: AppState, term: String, date_range: String) {
    match api::fetch_interest_over_time(&term, &date_range).await {
        Ok(envelope) => {
            state.envelope.set(Some(envelope));
            state.error_msg.set(None);
        }
        Err(err) => {
            log::error!("trends fetch failed for \"{term}\" ({date_range}): {err}");
            state.error_msg.set(Some(FETCH_FAILED_MSG.to_string()));
        }
    }
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);

    // ─── Effect 1: Initialize D3 chart scripts once on mount ───
    use_effect(move || {
        js_bridge::init_charts();
    });

    // ─── Effect 2: Fetch on mount and whenever term or date range change ───
    use_effect(move || {
        let term = (state.term)();
        let date_range = (state.date_range)();
        spawn(run_fetch(state, term, date_range));
    });

    // ─── Effect 3: Derive the series from the latest envelope and render ───
    use_effect(move || {
        let envelope = state.envelope.read().clone();
        let term = (state.term)();

        let Some(env) = envelope else {
            return;
        };

        let series = chart_series(Some(&env), &term);
        if series.is_empty() {
            // Provider had no data to chart; not an error
            js_bridge::destroy_chart(CHART_CONTAINER_ID);
            return;
        }

        let config_json = serde_json::json!({
            "title": series.dataset.label,
            "yAxisLabel": "Search interest",
            "color": "rgba(75, 192, 192, 1)",
        })
        .to_string();

        js_bridge::render_trends_chart(CHART_CONTAINER_ID, &series.to_chart_json(), &config_json);
    });

    let on_fetch_click = move |_| {
        let term = (state.term)();
        let date_range = (state.date_range)();
        spawn(run_fetch(state, term, date_range));
    };

    let term = (state.term)();
    let has_data = state.envelope.read().is_some();

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h1 {
                style: "font-size: 22px;",
                "Google Trend Search"
            }

            QueryControls {}

            button {
                style: "padding: 6px 16px; margin: 4px 0 8px 0;",
                onclick: on_fetch_click,
                "Fetch Trends"
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if has_data {
                ChartHeader {
                    title: format!("Google Trends Data for \"{term}\""),
                    subtitle: "Relative search interest over the selected window".to_string(),
                }

                ChartContainer {
                    id: CHART_CONTAINER_ID.to_string(),
                    min_height: 380,
                }
            } else {
                LoadingSpinner {}
            }
        }
    }
}
