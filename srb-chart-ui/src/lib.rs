//! Shared Dioxus components and Chart.js bridge for the report page apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Chart.js renderer via `js_sys::eval()`
//! - `page`: readers for the page-embedded chart payload and attribute table
//! - `state`: reactive AppState with Dioxus Signals
//! - `components`: reusable RSX components (selectors, field controls, chart
//!   canvas, etc.)

pub mod components;
pub mod js_bridge;
pub mod page;
pub mod state;
