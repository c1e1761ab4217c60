//! Single-line element titles: name, type, enum marker, requiredness, example.

use serde_json::Value;

/// `{prefix}**{name}** (`type`, enum, required) (example: `…`)`
///
/// Every segment is optional; anonymous nodes (union branches, array items)
/// drop the bold name and keep whatever qualifiers apply.
pub fn element_title(
    prefix: &str,
    name: Option<&str>,
    type_name: Option<&str>,
    is_required: bool,
    enum_values: Option<&[Value]>,
    example: Option<&Value>,
) -> String {
    let mut line = String::from(prefix);
    if let Some(name) = name {
        line.push_str(&format!("**{name}**"));
    }

    let mut qualifiers = Vec::new();
    if let Some(type_name) = type_name {
        qualifiers.push(format!("`{type_name}`"));
    }
    if enum_values.is_some_and(|values| !values.is_empty()) {
        qualifiers.push("enum".to_string());
    }
    if is_required {
        qualifiers.push("required".to_string());
    }
    if !qualifiers.is_empty() {
        if name.is_some() {
            line.push(' ');
        }
        line.push_str(&format!("({})", qualifiers.join(", ")));
    }

    if let Some(example) = example {
        // compact JSON, so string examples keep their quotes
        line.push_str(&format!(" (example: `{example}`)"));
    }

    line
}
