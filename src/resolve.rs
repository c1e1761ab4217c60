//! Effective-type resolution: a node's own `type`, else the display name its
//! `$ref` maps to in the sub-schema table.

use crate::schema::{SchemaNode, SubSchemas};

pub fn actual_type(schema: &SchemaNode, sub_schemas: &SubSchemas) -> Option<String> {
    if let Some(type_name) = &schema.type_ {
        return Some(type_name.clone());
    }
    schema
        .reference
        .as_ref()
        .and_then(|key| sub_schemas.get(key))
        .cloned()
}
