//! Dropdown parameterization for the field synchronizer.
//!
//! The two report pages rebuild different sets of single-select controls
//! from the same field union (the base page has a sort dropdown; the
//! aggregate page adds group-by and aggregate-field). Each dependent control
//! is described by a [`DropdownSpec`] and rebuilt from the option list
//! [`select_options`] produces: the "none selected" sentinel first, then one
//! option per field in union order.

/// Description of one dependent single-select control.
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownSpec {
    /// DOM id of the select element.
    pub id: String,
    /// Form field name submitted by the host page's form.
    pub name: String,
    /// Visible label text next to the control.
    pub label: String,
    /// Text of the leading empty-value sentinel option.
    pub placeholder: String,
}

impl DropdownSpec {
    pub fn new(id: &str, name: &str, label: &str, placeholder: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
        }
    }
}

/// One `<option>` in a rebuilt dropdown.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    /// Submitted value; empty for the sentinel.
    pub value: String,
    /// Visible option text.
    pub text: String,
}

/// Option list for one dropdown: sentinel first, then the fields in order.
pub fn select_options(spec: &DropdownSpec, fields: &[String]) -> Vec<SelectOption> {
    let mut options = Vec::with_capacity(fields.len() + 1);
    options.push(SelectOption {
        value: String::new(),
        text: spec.placeholder.clone(),
    });
    for field in fields {
        options.push(SelectOption {
            value: field.clone(),
            text: field.clone(),
        });
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sort_spec() -> DropdownSpec {
        DropdownSpec::new("sort_field", "sort_field", "Sort by", "-- No Sorting --")
    }

    #[test]
    fn first_option_is_always_the_sentinel() {
        let fields = vec!["amount".to_string(), "region".to_string()];
        let options = select_options(&sort_spec(), &fields);
        assert_eq!(options[0].value, "");
        assert_eq!(options[0].text, "-- No Sorting --");
    }

    #[test]
    fn options_follow_field_order() {
        let fields = vec!["x".to_string(), "y".to_string(), "z".to_string()];
        let options = select_options(&sort_spec(), &fields);
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["", "x", "y", "z"]);
        assert_eq!(options[2].text, "y");
    }

    #[test]
    fn empty_field_set_leaves_only_the_sentinel() {
        let options = select_options(&sort_spec(), &[]);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].value, "");
    }
}
