//! Sort direction selector.

use crate::state::AppState;
use dioxus::prelude::*;

/// Dropdown selector for the sort direction applied to the sort field.
#[component]
pub fn SortOrderSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current_order = (state.sort_order)();

    let on_change = move |evt: Event<FormData>| {
        state.sort_order.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                style: "font-weight: bold;",
                "Order: "
                select {
                    name: "sort_order",
                    onchange: on_change,
                    option {
                        value: "asc",
                        selected: current_order == "asc",
                        "Ascending"
                    }
                    option {
                        value: "desc",
                        selected: current_order == "desc",
                        "Descending"
                    }
                }
            }
        }
    }
}
