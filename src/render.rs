//! Recursive schema-to-text rendering.
//!
//! Walk a schema node and emit an ordered sequence of text blocks describing
//! it: one title line per element, then description, nested properties, array
//! items, union branches, enum values, defaults, restrictions.
//!
//! Design goals:
//! - Pure walk: (node, depth, table) → blocks; inputs are never mutated.
//! - Every sub-routine returns its own owned block sequence; callers
//!   concatenate, nothing appends into shared state.
//! - Permissive on incomplete shapes: a block whose inputs are missing is
//!   omitted, not an error. The one fatal case is an array node with no
//!   `items` at all, which is a caller contract violation.

use serde_json::Value;

use crate::resolve::actual_type;
use crate::restrictions::property_restrictions;
use crate::schema::{SchemaNode, Shape, SubSchemas};
use crate::title::element_title;

/// One unit of rendered output. May span lines (bullet list, code fence).
pub type Block = String;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The resolved type mandates a field the node does not carry.
    #[error("invalid schema: array node `{name}` has no `items` definition")]
    InvalidSchema { name: String },
}

/// Public entry point: render one schema node into its ordered block
/// sequence. Joining the blocks (e.g. with blank lines) is the caller's job.
pub fn render_schema_section(
    depth: usize,
    schema: &SchemaNode,
    sub_schemas: &SubSchemas,
) -> Result<Vec<Block>, RenderError> {
    let groups = render_property_sections(depth, schema, sub_schemas)?;
    Ok(groups.into_iter().flatten().collect())
}

/// Property enumerator: one block group per named property, in declared
/// order. A property-less node with a `oneOf` gets a single group listing the
/// alternatives; anything else enumerates to nothing.
pub fn render_property_sections(
    depth: usize,
    schema: &SchemaNode,
    sub_schemas: &SubSchemas,
) -> Result<Vec<Vec<Block>>, RenderError> {
    if let Some(properties) = &schema.properties {
        let prefix = format!("{}- ", indent(depth));
        let mut groups = Vec::with_capacity(properties.len());
        for (property_key, child) in properties {
            groups.push(render_node(
                depth + 1,
                &prefix,
                Some(property_key),
                schema.requires(property_key),
                child,
                sub_schemas,
            )?);
        }
        return Ok(groups);
    }

    if let Some(alternatives) = &schema.one_of {
        let listing = alternatives
            .iter()
            .filter_map(|alternative| actual_type(alternative, sub_schemas))
            .map(|type_name| format!("* `{type_name}`"))
            .collect::<Vec<_>>()
            .join("\n");
        return Ok(vec![vec![
            "This property must be one of the following types:".to_string(),
            listing,
        ]]);
    }

    Ok(Vec::new())
}

/// Node renderer: the full block sequence for one element (a property, an
/// array item, or a union branch).
///
/// Indentation is driven by `depth` alone; the enumerator re-derives the
/// bullet prefix from the depth it is handed, the node's own `prefix` is
/// never pushed down into child objects.
pub fn render_node(
    depth: usize,
    prefix: &str,
    name: Option<&str>,
    is_required: bool,
    schema: &SchemaNode,
    sub_schemas: &SubSchemas,
) -> Result<Vec<Block>, RenderError> {
    let type_name = actual_type(schema, sub_schemas);

    let mut text = vec![element_title(
        prefix,
        name,
        type_name.as_deref(),
        is_required,
        schema.enum_.as_deref(),
        schema.example.as_ref(),
    )];
    if let Some(description) = &schema.description {
        text.push(description.clone());
    }

    match schema.classify(type_name.as_deref()) {
        Shape::Object => {
            if schema.properties.is_some() {
                text.push(match name {
                    Some(name) => format!("Properties of the `{name}` object:"),
                    None => "Properties of the object:".to_string(),
                });
                for group in render_property_sections(depth + 1, schema, sub_schemas)? {
                    text.extend(group);
                }
            }
        }
        Shape::Array => {
            let Some(items) = schema.items.as_deref() else {
                return Err(RenderError::InvalidSchema {
                    name: name.unwrap_or("<anonymous>").to_string(),
                });
            };
            // `type` on the items themselves wins; else follow their `$ref`.
            let items_type = actual_type(items, sub_schemas);

            match (&items_type, name) {
                (Some(items_type), Some(_)) => {
                    text.push(format!(
                        "The object is an array with all elements of the type `{items_type}`."
                    ));
                }
                (Some(items_type), None) => {
                    text.push(format!(
                        "The schema defines an array with all elements of the type `{items_type}`."
                    ));
                }
                (None, _) => {
                    // items defined by a combining keyword instead of a type;
                    // nothing at all is a recoverable gap, not an error
                    if let Some((kind, branches)) = items.union_construct() {
                        text.push(kind.array_heading().to_string());
                        for branch in branches {
                            text.extend(render_node(
                                depth + 1,
                                prefix,
                                None,
                                false,
                                branch,
                                sub_schemas,
                            )?);
                        }
                    }
                }
            }

            if items_type.as_deref() == Some("object") {
                text.push("The array object has the following properties:".to_string());
                for group in render_property_sections(depth + 1, items, sub_schemas)? {
                    text.extend(group);
                }
            }
        }
        Shape::UnionOfRefs => {
            text.push("The object must be one of the following types:".to_string());
            let alternatives = schema.one_of.as_deref().unwrap_or_default();
            let listing = alternatives
                .iter()
                .filter_map(|alternative| alternative.reference.as_ref())
                .filter_map(|key| sub_schemas.get(key))
                .map(|type_name| format!("* `{type_name}`"))
                .collect::<Vec<_>>()
                .join("\n");
            text.push(listing);
        }
        Shape::Leaf => {}
    }

    if let Some(enum_values) = &schema.enum_ {
        text.push("This element must be one of the following enum values:".to_string());
        let listing = enum_values
            .iter()
            .map(|value| format!("* `{}`", literal_text(value)))
            .collect::<Vec<_>>()
            .join("\n");
        text.push(listing);
    }

    if let Some(default) = &schema.default {
        if is_primitive(default) {
            text.push(format!("Default: `{default}`"));
        } else {
            text.push("Default:".to_string());
            text.push(format!("```\n{default:#}\n```"));
        }
    }

    if let Some(restrictions) = property_restrictions(schema) {
        text.push("Additional restrictions:".to_string());
        text.push(restrictions);
    }

    Ok(text)
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

/// Enum literals print bare when they are strings, as compact JSON otherwise.
fn literal_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn is_primitive(value: &Value) -> bool {
    matches!(
        value,
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(value: serde_json::Value) -> SchemaNode {
        serde_json::from_value(value).unwrap()
    }

    fn no_refs() -> SubSchemas {
        SubSchemas::new()
    }

    #[test]
    fn object_properties_mark_required_members_only() {
        let schema = node(json!({
            "type": "object",
            "required": ["id"],
            "properties": {
                "id": { "type": "string" },
                "name": { "type": "string" }
            }
        }));
        let blocks = render_schema_section(0, &schema, &no_refs()).unwrap();
        assert_eq!(
            blocks,
            ["- **id** (`string`, required)", "- **name** (`string`)"]
        );
    }

    #[test]
    fn object_without_properties_emits_no_properties_header() {
        let schema = node(json!({ "type": "object" }));
        let blocks = render_node(0, "- ", Some("thing"), false, &schema, &no_refs()).unwrap();
        assert_eq!(blocks, ["- **thing** (`object`)"]);
        assert!(render_schema_section(0, &schema, &no_refs()).unwrap().is_empty());
    }

    #[test]
    fn nested_object_properties_indent_by_depth() {
        let schema = node(json!({
            "type": "object",
            "properties": {
                "outer": {
                    "type": "object",
                    "properties": { "inner": { "type": "boolean" } }
                }
            }
        }));
        let blocks = render_schema_section(0, &schema, &no_refs()).unwrap();
        assert_eq!(
            blocks,
            [
                "- **outer** (`object`)",
                "Properties of the `outer` object:",
                "    - **inner** (`boolean`)"
            ]
        );
    }

    #[test]
    fn description_sits_between_title_and_expansion() {
        let schema = node(json!({
            "type": "object",
            "description": "A bag of settings.",
            "properties": { "x": { "type": "number" } }
        }));
        let blocks = render_node(0, "", Some("bag"), false, &schema, &no_refs()).unwrap();
        assert_eq!(
            blocks,
            [
                "**bag** (`object`)",
                "A bag of settings.",
                "Properties of the `bag` object:",
                "  - **x** (`number`)"
            ]
        );
    }

    #[test]
    fn typed_array_names_the_element_type_exactly_once() {
        let schema = node(json!({ "type": "array", "items": { "type": "string" } }));
        let blocks = render_node(0, "- ", Some("tags"), false, &schema, &no_refs()).unwrap();
        let sentence = "The object is an array with all elements of the type `string`.";
        assert_eq!(blocks.iter().filter(|b| b.contains("array with all elements")).count(), 1);
        assert!(blocks.contains(&sentence.to_string()));
    }

    #[test]
    fn anonymous_typed_array_uses_the_schema_wording() {
        let schema = node(json!({ "type": "array", "items": { "type": "number" } }));
        let blocks = render_node(1, "", None, false, &schema, &no_refs()).unwrap();
        assert!(blocks.contains(
            &"The schema defines an array with all elements of the type `number`.".to_string()
        ));
    }

    #[test]
    fn array_items_type_can_come_from_the_table() {
        let table = SubSchemas::from([("#/definitions/tag".to_string(), "tag".to_string())]);
        let schema = node(json!({
            "type": "array",
            "items": { "$ref": "#/definitions/tag" }
        }));
        let blocks = render_node(0, "- ", Some("tags"), false, &schema, &table).unwrap();
        assert!(blocks.contains(
            &"The object is an array with all elements of the type `tag`.".to_string()
        ));
    }

    #[test]
    fn array_of_objects_enumerates_the_item_properties() {
        let schema = node(json!({
            "type": "array",
            "items": {
                "type": "object",
                "required": ["key"],
                "properties": {
                    "key": { "type": "string" },
                    "value": { "type": "string" }
                }
            }
        }));
        let blocks = render_node(0, "- ", Some("entries"), false, &schema, &no_refs()).unwrap();
        assert_eq!(
            blocks,
            [
                "- **entries** (`array`)",
                "The object is an array with all elements of the type `object`.",
                "The array object has the following properties:",
                "  - **key** (`string`, required)",
                "  - **value** (`string`)"
            ]
        );
    }

    #[test]
    fn untyped_array_items_fall_back_to_the_union_construct() {
        let schema = node(json!({
            "type": "array",
            "items": { "oneOf": [{ "type": "string" }, { "type": "number" }] }
        }));
        let blocks = render_node(0, "", None, false, &schema, &no_refs()).unwrap();
        assert_eq!(
            blocks,
            [
                "(`array`)",
                "The elements of the array must match *exactly one* of the following properties:",
                "(`string`)",
                "(`number`)"
            ]
        );
    }

    #[test]
    fn all_of_and_not_use_their_own_headings() {
        let all = node(json!({
            "type": "array",
            "items": { "allOf": [{ "type": "string" }] }
        }));
        let blocks = render_node(0, "", None, false, &all, &no_refs()).unwrap();
        assert!(blocks.contains(
            &"The elements of the array must match *all* of the following properties:".to_string()
        ));

        let not = node(json!({
            "type": "array",
            "items": { "not": [{ "type": "null" }] }
        }));
        let blocks = render_node(0, "", None, false, &not, &no_refs()).unwrap();
        assert!(blocks.contains(
            &"The elements of the array must *not* match the following properties:".to_string()
        ));
    }

    #[test]
    fn array_items_with_nothing_resolvable_degrade_to_title_only() {
        let schema = node(json!({ "type": "array", "items": {} }));
        let blocks = render_node(0, "- ", Some("stuff"), false, &schema, &no_refs()).unwrap();
        assert_eq!(blocks, ["- **stuff** (`array`)"]);
    }

    #[test]
    fn array_without_items_is_a_contract_violation() {
        let schema = node(json!({ "type": "array" }));
        let error = render_node(0, "- ", Some("broken"), false, &schema, &no_refs()).unwrap_err();
        assert!(matches!(error, RenderError::InvalidSchema { ref name } if name == "broken"));
    }

    #[test]
    fn leaf_one_of_lists_referenced_type_names() {
        let table = SubSchemas::from([
            ("#/definitions/a".to_string(), "apple".to_string()),
            ("#/definitions/b".to_string(), "banana".to_string()),
        ]);
        let schema = node(json!({
            "oneOf": [{ "$ref": "#/definitions/a" }, { "$ref": "#/definitions/b" }]
        }));
        let blocks = render_node(0, "- ", Some("fruit"), false, &schema, &table).unwrap();
        assert_eq!(
            blocks,
            [
                "- **fruit**",
                "The object must be one of the following types:",
                "* `apple`\n* `banana`"
            ]
        );
    }

    #[test]
    fn property_less_one_of_enumerates_alternative_types() {
        let table = SubSchemas::from([("#/definitions/c".to_string(), "custom".to_string())]);
        let schema = node(json!({
            "oneOf": [{ "type": "string" }, { "$ref": "#/definitions/c" }]
        }));
        let blocks = render_schema_section(0, &schema, &table).unwrap();
        assert_eq!(
            blocks,
            [
                "This property must be one of the following types:",
                "* `string`\n* `custom`"
            ]
        );
    }

    #[test]
    fn enum_values_keep_declared_order_and_render_once() {
        let schema = node(json!({
            "type": "string",
            "enum": ["zebra", "apple", 3, null]
        }));
        let blocks = render_node(2, "", Some("kind"), false, &schema, &no_refs()).unwrap();
        assert_eq!(
            blocks,
            [
                "**kind** (`string`, enum)",
                "This element must be one of the following enum values:",
                "* `zebra`\n* `apple`\n* `3`\n* `null`"
            ]
        );
    }

    #[test]
    fn primitive_default_renders_inline() {
        let schema = node(json!({ "type": "integer", "default": 0 }));
        let blocks = render_node(0, "- ", Some("count"), false, &schema, &no_refs()).unwrap();
        assert_eq!(blocks, ["- **count** (`integer`)", "Default: `0`"]);
    }

    #[test]
    fn explicit_null_default_still_renders() {
        let schema = node(json!({ "type": "string", "default": null }));
        let blocks = render_node(0, "- ", Some("note"), false, &schema, &no_refs()).unwrap();
        assert!(blocks.contains(&"Default: `null`".to_string()));
    }

    #[test]
    fn structured_default_is_fenced_json_that_round_trips() {
        let default = json!({ "retries": 3, "backoff": [1, 2, 4] });
        let schema = node(json!({ "type": "object", "default": default }));
        let blocks = render_node(0, "- ", Some("policy"), false, &schema, &no_refs()).unwrap();

        assert_eq!(blocks[1], "Default:");
        let fenced = &blocks[2];
        let body = fenced
            .strip_prefix("```\n")
            .and_then(|rest| rest.strip_suffix("\n```"))
            .unwrap();
        assert!(body.contains("  \"retries\": 3"));
        let parsed: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(parsed, default);
    }

    #[test]
    fn restrictions_close_the_property_block() {
        let schema = node(json!({
            "type": "object",
            "properties": { "x": { "type": "number", "minimum": 0 } }
        }));
        let blocks = render_schema_section(0, &schema, &no_refs()).unwrap();
        assert_eq!(
            blocks,
            [
                "- **x** (`number`)",
                "Additional restrictions:",
                "* Minimum: `0`"
            ]
        );
    }

    #[test]
    fn rendering_is_idempotent() {
        let schema = node(json!({
            "type": "object",
            "required": ["a"],
            "properties": {
                "a": { "type": "array", "items": { "type": "string" }, "minItems": 1 },
                "b": { "type": "string", "enum": ["x", "y"], "default": "x" }
            }
        }));
        let first = render_schema_section(0, &schema, &no_refs()).unwrap();
        let second = render_schema_section(0, &schema, &no_refs()).unwrap();
        assert_eq!(first, second);
    }
}
