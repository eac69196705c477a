//! Chart.js configuration built from a chart payload.
//!
//! The full `new Chart(ctx, config)` argument is assembled here as JSON and
//! handed across the JS bridge as a string. Styling is fixed: the report
//! page always uses the same four-color palette, legend, tooltip, and axis
//! treatment regardless of chart kind.

use crate::chart::ChartPayload;
use serde_json::{json, Value};

/// Semi-transparent fill colors, cycled across data points by Chart.js.
const BACKGROUND_COLORS: [&str; 4] = [
    "rgba(255, 99, 132, 0.7)",
    "rgba(54, 162, 235, 0.7)",
    "rgba(255, 206, 86, 0.7)",
    "rgba(75, 192, 192, 0.7)",
];

/// Opaque border colors matching `BACKGROUND_COLORS`.
const BORDER_COLORS: [&str; 4] = [
    "rgba(255, 99, 132, 1)",
    "rgba(54, 162, 235, 1)",
    "rgba(255, 206, 86, 1)",
    "rgba(75, 192, 192, 1)",
];

/// Build the complete Chart.js configuration for a payload.
pub fn chart_config(payload: &ChartPayload) -> Value {
    json!({
        "type": payload.kind().js_type(),
        "data": {
            "labels": payload.labels,
            "datasets": [{
                "label": payload.label,
                "data": payload.values,
                "backgroundColor": BACKGROUND_COLORS,
                "borderColor": BORDER_COLORS,
                "borderWidth": 2,
                "borderRadius": 8,
                "barPercentage": 0.7,
                "categoryPercentage": 0.6,
            }],
        },
        "options": {
            "responsive": true,
            "plugins": {
                "legend": {
                    "display": true,
                    "labels": {
                        "color": "#333",
                        "font": { "size": 14, "weight": "bold" },
                    },
                },
                "tooltip": {
                    "backgroundColor": "#f0f0f0",
                    "titleColor": "#333",
                    "bodyColor": "#333",
                    "borderColor": "#ccc",
                    "borderWidth": 1,
                },
            },
            "scales": {
                "x": {
                    "ticks": { "color": "#333", "font": { "size": 12 } },
                    "grid": { "color": "rgba(200,200,200,0.2)" },
                },
                "y": {
                    "ticks": { "color": "#333", "font": { "size": 12 } },
                    "grid": { "color": "rgba(200,200,200,0.2)" },
                },
            },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_payload(graph_type: &str) -> ChartPayload {
        ChartPayload {
            graph_type: graph_type.to_string(),
            label: "total_amount".to_string(),
            labels: vec!["Widget A".to_string(), "Widget B".to_string()],
            values: vec![420.0, 365.0],
        }
    }

    #[test]
    fn pie_payload_builds_pie_config() {
        let config = chart_config(&sample_payload("Pie Chart"));
        assert_eq!(config["type"], "pie");
    }

    #[test]
    fn unknown_graph_type_builds_bar_config() {
        let config = chart_config(&sample_payload("Radar"));
        assert_eq!(config["type"], "bar");
    }

    #[test]
    fn config_carries_payload_data() {
        let config = chart_config(&sample_payload("Line Chart"));
        assert_eq!(config["data"]["labels"][0], "Widget A");
        let dataset = &config["data"]["datasets"][0];
        assert_eq!(dataset["label"], "total_amount");
        assert_eq!(dataset["data"][1], 365.0);
    }

    #[test]
    fn config_carries_fixed_styling() {
        let config = chart_config(&sample_payload("Bar Chart"));
        let dataset = &config["data"]["datasets"][0];
        assert_eq!(dataset["backgroundColor"][0], "rgba(255, 99, 132, 0.7)");
        assert_eq!(dataset["borderColor"][3], "rgba(75, 192, 192, 1)");
        assert_eq!(dataset["borderWidth"], 2);
        assert_eq!(dataset["borderRadius"], 8);
        assert_eq!(config["options"]["responsive"], true);
        assert_eq!(
            config["options"]["plugins"]["legend"]["labels"]["color"],
            "#333"
        );
        assert_eq!(
            config["options"]["scales"]["y"]["grid"]["color"],
            "rgba(200,200,200,0.2)"
        );
    }
}
