//! Chart kind selector over the fixed report vocabulary.

use crate::state::AppState;
use dioxus::prelude::*;
use srb_model::ChartKind;

/// Dropdown selector for the chart kind ("Bar Chart", "Line Chart", ...).
#[component]
pub fn GraphKindSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current_kind = (state.graph_kind)();

    let on_change = move |evt: Event<FormData>| {
        state.graph_kind.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                style: "font-weight: bold;",
                "Graph type: "
                select {
                    name: "graph_type",
                    onchange: on_change,
                    for label in ChartKind::LABELS.iter() {
                        option {
                            value: "{label}",
                            selected: *label == current_kind,
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
