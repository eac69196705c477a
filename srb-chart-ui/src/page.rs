//! Readers for page-embedded state.
//!
//! The host page carries two inputs for the WASM app: a JSON payload in a
//! `<script type="application/json">` element describing the chart, and a
//! `window.availableAttributes` global mapping entity names to field names.
//! Both are read once at mount and passed on as explicit values; nothing
//! else touches the globals afterwards.

use anyhow::{anyhow, Result};
use srb_model::{AttributeTable, ChartPayload, PayloadError};
use wasm_bindgen::JsValue;

/// Text content of a DOM element, or None if the element is absent.
pub fn element_text(element_id: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(element_id)?;
    element.text_content()
}

/// Read and parse the embedded chart payload.
///
/// Returns `Ok(None)` when the page embeds no data element (no chart is
/// rendered, no error surfaced); `Err` when the element exists but its text
/// is not valid payload JSON.
pub fn embedded_chart_payload(element_id: &str) -> Result<Option<ChartPayload>, PayloadError> {
    match element_text(element_id) {
        Some(text) => ChartPayload::from_json(&text).map(Some),
        None => Ok(None),
    }
}

/// Read the attribute table from a window global.
///
/// An absent or malformed global yields an empty table (field lists come
/// out empty) with a logged warning rather than an error.
pub fn global_attribute_table(global_name: &str) -> AttributeTable {
    match read_global_json(global_name) {
        Ok(Some(json)) => match AttributeTable::from_json(&json) {
            Ok(table) => table,
            Err(e) => {
                log::warn!("window.{} is not an attribute table: {}", global_name, e);
                AttributeTable::new()
            }
        },
        Ok(None) => {
            log::warn!("window.{} is not set; field lists will be empty", global_name);
            AttributeTable::new()
        }
        Err(e) => {
            log::warn!("Failed to read window.{}: {}", global_name, e);
            AttributeTable::new()
        }
    }
}

/// Fetch a window global and return its JSON string form, or None when the
/// global is unset.
fn read_global_json(global_name: &str) -> Result<Option<String>> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window object"))?;
    let value = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str(global_name))
        .map_err(|_| anyhow!("property access threw"))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    let json = js_sys::JSON::stringify(&value).map_err(|_| anyhow!("not JSON-serializable"))?;
    Ok(json.as_string())
}
