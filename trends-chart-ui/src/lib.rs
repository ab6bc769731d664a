//! Shared Dioxus components, fetch helper and D3.js bridge for the trends
//! chart app.
//!
//! This crate provides:
//! - `api`: the `gloo-net` call to the backend trends proxy
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (inputs, containers, etc.)

pub mod api;
pub mod components;
pub mod js_bridge;
pub mod state;
