//! Sales Report Builder — base page
//!
//! Renders the report chart from the JSON payload the server embeds in the
//! page, and keeps the field picker in sync with the two selected tables:
//! - Chart: `#chart-data` element -> `ChartPayload` -> Chart.js config ->
//!   `js_bridge::render_report_chart`. No embedded element means no chart.
//! - Fields: `window.availableAttributes` -> `AttributeTable`; whenever
//!   either table selection changes, the checkbox list and the sort-field
//!   dropdown are rebuilt from the deduplicated union of the pair's fields.
//!
//! The host page owns the surrounding `<form>`; every control here carries
//! a `name=` attribute so a normal form post still works.

use dioxus::prelude::*;
use srb_chart_ui::components::{
    ChartCanvas, ChartHeader, DateRangePicker, EntitySelector, EntitySlot, ErrorDisplay,
    FieldControls, GraphKindSelector, RegionSelector, SortOrderSelector,
};
use srb_chart_ui::js_bridge;
use srb_chart_ui::page;
use srb_chart_ui::state::AppState;
use srb_model::{chart_config, DropdownSpec};

/// DOM id of the element embedding the chart payload JSON.
const CHART_DATA_ID: &str = "chart-data";
/// DOM id of the canvas Chart.js renders into.
const CHART_CANVAS_ID: &str = "report-chart";
/// Window global holding the entity -> field-name table.
const ATTRIBUTES_GLOBAL: &str = "availableAttributes";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("report-basic-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Read page-embedded state once on mount ───
    use_effect(move || {
        let attributes = page::global_attribute_table(ATTRIBUTES_GLOBAL);
        if let Some(first) = attributes.first_entity() {
            state.entity_one.set(first.to_string());
            state.entity_two.set(first.to_string());
        }
        state.attributes.set(attributes);

        match page::embedded_chart_payload(CHART_DATA_ID) {
            Ok(Some(payload)) => {
                state.graph_kind.set(payload.graph_type.clone());
                state.chart.set(Some(payload));
            }
            Ok(None) => log::info!("No chart data embedded in page; skipping chart"),
            Err(e) => {
                log::error!("Chart payload unreadable: {}", e);
                state.error_msg.set(Some(e.to_string()));
            }
        }

        js_bridge::init_charts();
    });

    // ─── Effect 2: Construct the chart once the payload is in state ───
    use_effect(move || {
        if let Some(payload) = &*state.chart.read() {
            let config = chart_config(payload);
            js_bridge::render_report_chart(CHART_CANVAS_ID, &config.to_string());
        }
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Sales Report Builder".to_string(),
                subtitle: "Pick two tables, choose fields, and chart the result.".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            }

            if (state.chart)().is_some() {
                ChartCanvas {
                    id: CHART_CANVAS_ID.to_string(),
                    min_height: 350,
                }
            }

            div {
                style: "margin-top: 16px; max-width: 480px;",

                GraphKindSelector {}
                RegionSelector {}
                DateRangePicker {}

                EntitySelector {
                    id: "table1".to_string(),
                    label: "Table 1:".to_string(),
                    slot: EntitySlot::Primary,
                }
                EntitySelector {
                    id: "table2".to_string(),
                    label: "Table 2:".to_string(),
                    slot: EntitySlot::Secondary,
                }

                FieldControls {
                    dropdowns: vec![DropdownSpec::new(
                        "sort_field",
                        "sort_field",
                        "Sort by:",
                        "-- No Sorting --",
                    )],
                }
                SortOrderSelector {}

                label {
                    style: "display: block; margin: 8px 0;",
                    input {
                        r#type: "checkbox",
                        name: "distinct",
                        checked: (state.distinct)(),
                        onchange: move |evt: Event<FormData>| state.distinct.set(evt.checked()),
                    }
                    " Distinct rows only"
                }
            }
        }
    }
}
