//! Textual rendering of validation keywords (minimum, pattern, minItems, …).

use serde_json::Value;

use crate::schema::SchemaNode;

/// One bullet per present keyword, newline-joined; `None` when the node
/// carries no validation keywords at all. Keyword order is fixed.
pub fn property_restrictions(schema: &SchemaNode) -> Option<String> {
    let mut lines = Vec::new();
    push_value(&mut lines, "Minimum", schema.minimum.as_ref());
    push_value(&mut lines, "Maximum", schema.maximum.as_ref());
    push_value(&mut lines, "Exclusive minimum", schema.exclusive_minimum.as_ref());
    push_value(&mut lines, "Exclusive maximum", schema.exclusive_maximum.as_ref());
    push_value(&mut lines, "Multiple of", schema.multiple_of.as_ref());
    push_text(&mut lines, "Regex pattern", schema.pattern.as_deref());
    push_text(&mut lines, "Format", schema.format.as_deref());
    push_count(&mut lines, "Minimum length", schema.min_length);
    push_count(&mut lines, "Maximum length", schema.max_length);
    push_count(&mut lines, "Minimum items", schema.min_items);
    push_count(&mut lines, "Maximum items", schema.max_items);
    if let Some(unique) = schema.unique_items {
        lines.push(format!("* Unique items: `{unique}`"));
    }

    if lines.is_empty() { None } else { Some(lines.join("\n")) }
}

fn push_value(lines: &mut Vec<String>, label: &str, value: Option<&Value>) {
    if let Some(value) = value {
        lines.push(format!("* {label}: `{value}`"));
    }
}

fn push_text(lines: &mut Vec<String>, label: &str, value: Option<&str>) {
    if let Some(value) = value {
        lines.push(format!("* {label}: `{value}`"));
    }
}

fn push_count(lines: &mut Vec<String>, label: &str, value: Option<u64>) {
    if let Some(value) = value {
        lines.push(format!("* {label}: `{value}`"));
    }
}
