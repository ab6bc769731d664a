//! Fetch-failure message line.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Red one-liner shown when the last fetch failed.
///
/// It stays up, with any previously fetched chart still visible below it,
/// until a later fetch succeeds and clears the error slot.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        p {
            style: "color: #C62828; margin: 8px 0; font-size: 14px;",
            "{props.message}"
        }
    }
}
