//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use srb_model::{AttributeTable, ChartPayload};

/// Shared application state for the report page apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Attribute table read from the host page at mount
    pub attributes: Signal<AttributeTable>,
    /// First selected entity name
    pub entity_one: Signal<String>,
    /// Second selected entity name
    pub entity_two: Signal<String>,
    /// Parsed chart payload (None when the page embeds no chart data)
    pub chart: Signal<Option<ChartPayload>>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Chart kind label selected in the form ("Bar Chart", ...)
    pub graph_kind: Signal<String>,
    /// Region filter value; empty means all regions
    pub region: Signal<String>,
    /// Start date for the order-date filter
    pub start_date: Signal<String>,
    /// End date for the order-date filter
    pub end_date: Signal<String>,
    /// Sort direction ("asc" or "desc")
    pub sort_order: Signal<String>,
    /// Aggregate function ("sum", "avg", "count"); empty means none
    pub aggregate: Signal<String>,
    /// Whether the report should return distinct rows only
    pub distinct: Signal<bool>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            attributes: Signal::new(AttributeTable::new()),
            entity_one: Signal::new(String::new()),
            entity_two: Signal::new(String::new()),
            chart: Signal::new(None),
            error_msg: Signal::new(None),
            graph_kind: Signal::new("Bar Chart".to_string()),
            region: Signal::new(String::new()),
            start_date: Signal::new(String::new()),
            end_date: Signal::new(String::new()),
            sort_order: Signal::new("asc".to_string()),
            aggregate: Signal::new(String::new()),
            distinct: Signal::new(false),
        }
    }
}
