//! Pre-first-response placeholder.

use dioxus::prelude::*;

/// Shown in place of the chart until the first envelope arrives.
///
/// A failed first fetch leaves it up alongside the error line; once any
/// fetch succeeds the chart takes its place for good.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        p {
            style: "padding: 24px 0; color: #666;",
            "Loading data..."
        }
    }
}
