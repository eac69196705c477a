//! Sales Report Builder — grouped/aggregated page
//!
//! The extended variant of the report page: everything the base page does,
//! plus group-by and aggregate-field dropdowns in the synchronizer's
//! rebuild list and an aggregate-function select. All three dependent
//! dropdowns are rebuilt together from the same field union whenever
//! either table selection changes.

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
        .with_cfg(dioxus::web::Config::new().rootname("report-aggregate-root"))
        .launch(App);
}

/// The dependent dropdowns this page rebuilds from the field union.
fn dependent_dropdowns() -> Vec<DropdownSpec> {
    vec![
        DropdownSpec::new("sort_field", "sort_field", "Sort by:", "-- No Sorting --"),
        DropdownSpec::new("group_by", "group_by", "Group by:", "-- No Grouping --"),
        DropdownSpec::new(
            "aggregate_field",
            "aggregate_field",
            "Aggregate field:",
            "-- Select Field --",
        ),
    ]
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
                subtitle: "Group, aggregate, and chart fields from two tables.".to_string(),
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

                FieldControls { dropdowns: dependent_dropdowns() }

                div {
                    style: "margin: 8px 0;",
                    label {
                        style: "font-weight: bold;",
                        "Aggregate: "
                        select {
                            name: "aggregate",
                            onchange: move |evt: Event<FormData>| state.aggregate.set(evt.value()),
                            option { value: "", selected: (state.aggregate)().is_empty(), "-- No Aggregate --" }
                            option { value: "sum", selected: (state.aggregate)() == "sum", "Sum" }
                            option { value: "avg", selected: (state.aggregate)() == "avg", "Average" }
                            option { value: "count", selected: (state.aggregate)() == "count", "Count" }
                        }
                    }
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
