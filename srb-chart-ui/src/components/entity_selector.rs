//! Dropdown selector for choosing a report entity.

use crate::state::AppState;
use dioxus::prelude::*;

/// Which half of the entity pair a selector drives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntitySlot {
    Primary,
    Secondary,
}

#[derive(Props, Clone, PartialEq)]
pub struct EntitySelectorProps {
    /// DOM id and form name of the select element.
    pub id: String,
    /// Visible label text.
    pub label: String,
    /// Which entity signal this selector fills.
    pub slot: EntitySlot,
}

/// Entity dropdown selector.
/// Reads entity names from the attribute table and updates the selected
/// entity signal on change, which retriggers the field synchronizer.
#[component]
pub fn EntitySelector(props: EntitySelectorProps) -> Element {
    let mut state = use_context::<AppState>();
    let entities: Vec<String> = state
        .attributes
        .read()
        .entities()
        .map(str::to_string)
        .collect();
    let selected = match props.slot {
        EntitySlot::Primary => (state.entity_one)(),
        EntitySlot::Secondary => (state.entity_two)(),
    };

    let slot = props.slot;
    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        match slot {
            EntitySlot::Primary => state.entity_one.set(value),
            EntitySlot::Secondary => state.entity_two.set(value),
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "{props.id}",
                style: "font-weight: bold; margin-right: 8px;",
                "{props.label} "
            }
            select {
                id: "{props.id}",
                name: "{props.id}",
                onchange: on_change,
                for entity in entities.iter() {
                    option {
                        value: "{entity}",
                        selected: *entity == selected,
                        "{entity}"
                    }
                }
            }
        }
    }
}
