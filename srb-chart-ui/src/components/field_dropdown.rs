//! Single-select dropdown rebuilt from the field union.

use dioxus::prelude::*;
use srb_model::fields::{select_options, DropdownSpec};

#[derive(Props, Clone, PartialEq)]
pub struct FieldDropdownProps {
    /// Which control this is (id, form name, label, sentinel text).
    pub spec: DropdownSpec,
    /// Fields in display order (the deduplicated union).
    pub fields: Vec<String>,
}

/// A dependent dropdown: the "none selected" sentinel first, then one
/// option per field. Uncontrolled; the host page's form reads its value.
#[component]
pub fn FieldDropdown(props: FieldDropdownProps) -> Element {
    let options = select_options(&props.spec, &props.fields);

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "{props.spec.id}",
                style: "font-weight: bold; margin-right: 8px;",
                "{props.spec.label} "
            }
            select {
                id: "{props.spec.id}",
                name: "{props.spec.name}",
                for opt in options.iter() {
                    option {
                        value: "{opt.value}",
                        "{opt.text}"
                    }
                }
            }
        }
    }
}
