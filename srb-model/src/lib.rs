//! Core types and logic for the sales report browser UI.
//!
//! This crate is the DOM-free half of the report pages: it models the chart
//! payload embedded in the page, the attribute table keyed by entity name,
//! and the option lists the form controls are rebuilt from. Everything here
//! is plain data and pure functions so it can be unit tested off-browser;
//! the Dioxus/WASM layer lives in `srb-chart-ui`.
//!
//! # Modules
//!
//! - [`chart`]: `ChartPayload` and the chart-kind label mapping
//! - [`chart_config`]: Chart.js configuration JSON built from a payload
//! - [`attributes`]: `AttributeTable` and the two-entity field union
//! - [`fields`]: dropdown parameterization and sentinel-first option lists

pub mod attributes;
pub mod chart;
pub mod chart_config;
pub mod fields;

pub use attributes::AttributeTable;
pub use chart::{ChartKind, ChartPayload, PayloadError};
pub use chart_config::chart_config;
pub use fields::{DropdownSpec, SelectOption};
