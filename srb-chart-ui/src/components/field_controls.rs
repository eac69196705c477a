//! The field synchronizer: rebuilds every dependent control from the
//! currently selected entity pair.
//!
//! Both report pages use this one component; they differ only in the list
//! of dependent dropdowns passed in. Whenever either entity selection
//! changes (and once at initial load), the union of the two entities' field
//! names is recomputed and the checkbox list plus every dropdown is
//! rebuilt from it.

use crate::components::{FieldChecklist, FieldDropdown};
use crate::state::AppState;
use dioxus::prelude::*;
use srb_model::DropdownSpec;

#[derive(Props, Clone, PartialEq)]
pub struct FieldControlsProps {
    /// DOM id of the checkbox container.
    #[props(default = "field-container".to_string())]
    pub checklist_id: String,
    /// Dependent dropdowns to rebuild, in display order.
    pub dropdowns: Vec<DropdownSpec>,
}

#[component]
pub fn FieldControls(props: FieldControlsProps) -> Element {
    let state = use_context::<AppState>();
    let entity_one = (state.entity_one)();
    let entity_two = (state.entity_two)();
    let fields = state
        .attributes
        .read()
        .field_union(&entity_one, &entity_two);

    rsx! {
        // Keyed on the entity pair: changing either selection replaces the
        // whole subtree, so checked boxes and prior dropdown selections are
        // discarded rather than carried across the rebuild.
        div {
            key: "{entity_one}|{entity_two}",
            FieldChecklist {
                id: props.checklist_id.clone(),
                fields: fields.clone(),
            }
            for spec in props.dropdowns.iter() {
                FieldDropdown {
                    spec: spec.clone(),
                    fields: fields.clone(),
                }
            }
        }
    }
}
