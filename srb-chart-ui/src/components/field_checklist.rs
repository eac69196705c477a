//! Checkbox list of selectable report fields.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct FieldChecklistProps {
    /// DOM id of the container div.
    pub id: String,
    /// Fields in display order (the deduplicated union).
    pub fields: Vec<String>,
}

/// One labeled checkbox per field, `name="fields"` so the host page's form
/// submits the checked set.
#[component]
pub fn FieldChecklist(props: FieldChecklistProps) -> Element {
    rsx! {
        div {
            id: "{props.id}",
            style: "margin: 8px 0; display: flex; flex-direction: column; gap: 4px;",
            for field in props.fields.iter() {
                div {
                    input {
                        r#type: "checkbox",
                        name: "fields",
                        value: "{field}",
                        id: "field_{field}",
                    }
                    label {
                        r#for: "field_{field}",
                        style: "margin-left: 4px;",
                        "{field}"
                    }
                }
            }
        }
    }
}
