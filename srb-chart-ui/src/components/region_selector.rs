//! Region filter selector.

use crate::state::AppState;
use dioxus::prelude::*;

/// Sales regions offered by the report filter.
const REGIONS: [&str; 4] = ["North", "South", "East", "West"];

/// Dropdown selector for the region filter; the empty leading option
/// means no region filtering.
#[component]
pub fn RegionSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current_region = (state.region)();

    let on_change = move |evt: Event<FormData>| {
        state.region.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                style: "font-weight: bold;",
                "Region: "
                select {
                    name: "region",
                    onchange: on_change,
                    option {
                        value: "",
                        selected: current_region.is_empty(),
                        "-- All Regions --"
                    }
                    for region in REGIONS.iter() {
                        option {
                            value: "{region}",
                            selected: *region == current_region,
                            "{region}"
                        }
                    }
                }
            }
        }
    }
}
