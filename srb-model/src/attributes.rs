//! Attribute table: entity name -> ordered field names.
//!
//! The host page exposes one table per page load (`window.availableAttributes`
//! in the original markup). The field synchronizer looks up the two selected
//! entities here and rebuilds every dependent control from the union of their
//! field lists. Field names are opaque strings; insertion order is preserved
//! so the selectors and option lists come out in a stable order.

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

/// Error type for attribute table parsing.
#[derive(Error, Debug)]
pub enum AttributeError {
    /// The global's JSON form was not an object of string arrays
    #[error("Failed to parse attribute table: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ordered mapping from entity name to that entity's field names.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct AttributeTable(IndexMap<String, Vec<String>>);

impl AttributeTable {
    /// An empty table (the fallback when the page global is absent).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from its JSON object form.
    pub fn from_json(text: &str) -> Result<Self, AttributeError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Field names for one entity. Unknown entities yield an empty slice.
    pub fn fields_for(&self, entity: &str) -> &[String] {
        self.0.get(entity).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Entity names in insertion order.
    pub fn entities(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// The first entity name, used as the default selection on page load.
    pub fn first_entity(&self) -> Option<&str> {
        self.0.keys().next().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Union of two entities' field lists, deduplicated by value equality,
    /// first-seen order preserved.
    pub fn field_union(&self, entity_one: &str, entity_two: &str) -> Vec<String> {
        let mut union: Vec<String> = Vec::new();
        for field in self
            .fields_for(entity_one)
            .iter()
            .chain(self.fields_for(entity_two))
        {
            if !union.contains(field) {
                union.push(field.clone());
            }
        }
        union
    }
}

impl FromIterator<(String, Vec<String>)> for AttributeTable {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> AttributeTable {
        AttributeTable::from_iter([
            (
                "sales".to_string(),
                vec![
                    "id".to_string(),
                    "customer_name".to_string(),
                    "product".to_string(),
                    "amount".to_string(),
                ],
            ),
            (
                "customers".to_string(),
                vec![
                    "customer_id".to_string(),
                    "customer_name".to_string(),
                    "region".to_string(),
                ],
            ),
        ])
    }

    #[test]
    fn parse_from_json_object() {
        let table = AttributeTable::from_json(
            r#"{"sales": ["id", "amount"], "customers": ["customer_id"]}"#,
        )
        .unwrap();
        assert_eq!(table.fields_for("sales"), ["id", "amount"]);
        assert_eq!(table.entities().collect::<Vec<_>>(), ["sales", "customers"]);
    }

    #[test]
    fn parse_rejects_non_object() {
        assert!(AttributeTable::from_json(r#"["sales"]"#).is_err());
        assert!(AttributeTable::from_json("nope").is_err());
    }

    #[test]
    fn unknown_entity_yields_empty_fields() {
        let table = sample_table();
        assert!(table.fields_for("inventory").is_empty());
    }

    #[test]
    fn union_deduplicates_in_first_seen_order() {
        let table = AttributeTable::from_iter([
            ("a".to_string(), vec!["x".to_string(), "y".to_string()]),
            ("b".to_string(), vec!["y".to_string(), "z".to_string()]),
        ]);
        assert_eq!(table.field_union("a", "b"), ["x", "y", "z"]);
    }

    #[test]
    fn union_with_shared_customer_name() {
        let table = sample_table();
        let union = table.field_union("sales", "customers");
        assert_eq!(
            union,
            [
                "id",
                "customer_name",
                "product",
                "amount",
                "customer_id",
                "region"
            ]
        );
    }

    #[test]
    fn union_with_missing_entity_is_one_sided() {
        let table = sample_table();
        assert_eq!(
            table.field_union("customers", "inventory"),
            ["customer_id", "customer_name", "region"]
        );
        assert!(table.field_union("nope", "also-nope").is_empty());
    }

    #[test]
    fn same_entity_twice_yields_its_fields_once() {
        let table = sample_table();
        assert_eq!(
            table.field_union("customers", "customers"),
            ["customer_id", "customer_name", "region"]
        );
    }

    #[test]
    fn first_entity_is_default_selection() {
        assert_eq!(sample_table().first_entity(), Some("sales"));
        assert_eq!(AttributeTable::new().first_entity(), None);
    }
}
