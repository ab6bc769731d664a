//! Container div the D3 bridge renders the trends chart into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id the JS bridge polls for before drawing
    pub id: String,
    /// Minimum height in pixels, reserved so the page doesn't jump
    /// when the chart lands
    #[props(default = 380)]
    pub min_height: u32,
}

/// Placeholder div for the interest-over-time chart.
///
/// Rendering happens outside the RSX tree: the bridge looks the div up by
/// id once D3 and the chart scripts are ready and draws into it directly.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    rsx! {
        div {
            id: "{props.id}",
            style: "min-height: {props.min_height}px; width: 100%;",
        }
    }
}
