//! Chart payload model and chart-kind mapping.
//!
//! The report page embeds a JSON blob describing what to plot. This module
//! parses that blob into [`ChartPayload`] and maps the human-readable
//! `graph_type` labels the server emits ("Bar Chart", "Pie Chart", ...) to
//! the type identifiers Chart.js expects.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for chart payload parsing.
#[derive(Error, Debug)]
pub enum PayloadError {
    /// The embedded element's text was not valid payload JSON
    #[error("Failed to parse chart payload: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The chart kinds the report builder offers.
///
/// The server-side form presents these as human-readable labels; Chart.js
/// wants short type identifiers. Unrecognized labels fall back to `Bar`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Scatter,
}

impl ChartKind {
    /// Human-readable labels in the order the form offers them.
    pub const LABELS: [&'static str; 4] =
        ["Bar Chart", "Line Chart", "Pie Chart", "Scatter Plot"];

    /// Map a human-readable label to a chart kind.
    /// Anything outside the fixed vocabulary renders as a bar chart.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Bar Chart" => ChartKind::Bar,
            "Line Chart" => ChartKind::Line,
            "Pie Chart" => ChartKind::Pie,
            "Scatter Plot" => ChartKind::Scatter,
            _ => ChartKind::Bar,
        }
    }

    /// The Chart.js type identifier for this kind.
    pub fn js_type(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
            ChartKind::Scatter => "scatter",
        }
    }
}

/// The chart payload embedded in the report page.
///
/// `labels` and `values` are parallel sequences; a length mismatch is
/// tolerated (Chart.js renders the pairs it has), so parsing only warns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartPayload {
    /// Human-readable chart kind label, e.g. "Bar Chart".
    pub graph_type: String,
    /// Dataset label shown in the legend.
    pub label: String,
    /// X-axis category labels.
    pub labels: Vec<String>,
    /// Y-axis values, parallel to `labels`.
    pub values: Vec<f64>,
}

impl ChartPayload {
    /// Parse a payload from the embedded element's JSON text.
    pub fn from_json(text: &str) -> Result<Self, PayloadError> {
        let payload: ChartPayload = serde_json::from_str(text)?;
        if payload.labels.len() != payload.values.len() {
            log::warn!(
                "Chart payload has {} labels but {} values; extra entries render blank",
                payload.labels.len(),
                payload.values.len()
            );
        }
        Ok(payload)
    }

    /// The chart kind for this payload (bar fallback for unknown labels).
    pub fn kind(&self) -> ChartKind {
        ChartKind::from_label(&self.graph_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_mapping_covers_fixed_vocabulary() {
        assert_eq!(ChartKind::from_label("Bar Chart"), ChartKind::Bar);
        assert_eq!(ChartKind::from_label("Line Chart"), ChartKind::Line);
        assert_eq!(ChartKind::from_label("Pie Chart"), ChartKind::Pie);
        assert_eq!(ChartKind::from_label("Scatter Plot"), ChartKind::Scatter);
    }

    #[test]
    fn unknown_label_falls_back_to_bar() {
        assert_eq!(ChartKind::from_label("Radar"), ChartKind::Bar);
        assert_eq!(ChartKind::from_label(""), ChartKind::Bar);
        assert_eq!(ChartKind::from_label("bar chart"), ChartKind::Bar);
    }

    #[test]
    fn js_type_identifiers() {
        assert_eq!(ChartKind::Pie.js_type(), "pie");
        assert_eq!(ChartKind::Scatter.js_type(), "scatter");
    }

    #[test]
    fn parse_valid_payload() {
        let json = r#"{
            "graph_type": "Pie Chart",
            "label": "total_amount",
            "labels": ["North", "South"],
            "values": [1250.0, 980.5]
        }"#;
        let payload = ChartPayload::from_json(json).unwrap();
        assert_eq!(payload.kind(), ChartKind::Pie);
        assert_eq!(payload.label, "total_amount");
        assert_eq!(payload.labels, vec!["North", "South"]);
        assert_eq!(payload.values, vec![1250.0, 980.5]);
    }

    #[test]
    fn parse_tolerates_length_mismatch() {
        let json = r#"{
            "graph_type": "Bar Chart",
            "label": "amount",
            "labels": ["a", "b", "c"],
            "values": [1.0]
        }"#;
        let payload = ChartPayload::from_json(json).unwrap();
        assert_eq!(payload.labels.len(), 3);
        assert_eq!(payload.values.len(), 1);
    }

    #[test]
    fn parse_rejects_malformed_json() {
        assert!(ChartPayload::from_json("not json").is_err());
        assert!(ChartPayload::from_json(r#"{"graph_type": "Bar Chart"}"#).is_err());
    }
}
