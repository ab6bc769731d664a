//! Search term and date-range text inputs.

use crate::state::AppState;
use dioxus::prelude::*;

/// The two free-form inputs driving every fetch.
///
/// Both commit on `onchange` (focus loss or Enter), so the value only
/// updates when it actually changes rather than per keystroke. Neither
/// string is validated here; the date-range grammar belongs to the
/// trends provider.
#[component]
pub fn QueryControls() -> Element {
    let mut state = use_context::<AppState>();
    let term = (state.term)();
    let date_range = (state.date_range)();

    let on_term_change = move |evt: Event<FormData>| {
        state.term.set(evt.value());
    };

    let on_date_change = move |evt: Event<FormData>| {
        state.date_range.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center; flex-wrap: wrap;",
            input {
                r#type: "text",
                value: "{term}",
                placeholder: "Enter search query",
                onchange: on_term_change,
            }
            input {
                r#type: "text",
                value: "{date_range}",
                placeholder: "Enter date (e.g., today 1-m)",
                onchange: on_date_change,
            }
        }
    }
}
