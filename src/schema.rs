//! Schema node data model.
//!
//! Every field is optional; a node is whatever subset of keywords the source
//! document carries. Presence matters: `default: null` and "no default" are
//! different documents and must stay different here.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Maps a `$ref` key to a human-readable type name. Lookup-only; resolution
/// never yields another schema node, so reference cycles cannot recurse.
pub type SubSchemas = BTreeMap<String, String>;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchemaNode {
    #[serde(rename = "type")]
    pub type_: Option<String>,
    #[serde(rename = "$ref")]
    pub reference: Option<String>,
    pub description: Option<String>,
    pub example: Option<Value>,

    /// Insertion order = declared order; iteration drives output order.
    pub properties: Option<IndexMap<String, SchemaNode>>,
    /// Only affects direct children of this node.
    pub required: Option<Vec<String>>,
    pub items: Option<Box<SchemaNode>>,

    pub one_of: Option<Vec<SchemaNode>>,
    pub any_of: Option<Vec<SchemaNode>>,
    pub all_of: Option<Vec<SchemaNode>>,
    pub not: Option<Vec<SchemaNode>>,

    #[serde(rename = "enum")]
    pub enum_: Option<Vec<Value>>,
    /// Explicit JSON `null` stays `Some(Value::Null)`; only a missing key
    /// deserializes to `None`.
    #[serde(deserialize_with = "some_value")]
    pub default: Option<Value>,

    // validation keywords surfaced by the restriction formatter
    pub minimum: Option<Value>,
    pub maximum: Option<Value>,
    pub exclusive_minimum: Option<Value>,
    pub exclusive_maximum: Option<Value>,
    pub multiple_of: Option<Value>,
    pub pattern: Option<String>,
    pub format: Option<String>,
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub min_items: Option<u64>,
    pub max_items: Option<u64>,
    pub unique_items: Option<bool>,
}

/// How a node renders once its effective type is known. Classified once,
/// matched exhaustively; no repeated presence sniffing in the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Object,
    Array,
    /// Not an object/array, but carries a `oneOf` of referenced types.
    UnionOfRefs,
    Leaf,
}

/// The four combining keywords, in the order they are checked on array items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnionKind {
    AllOf,
    AnyOf,
    OneOf,
    Not,
}

impl UnionKind {
    pub fn array_heading(self) -> &'static str {
        match self {
            UnionKind::AllOf => {
                "The elements of the array must match *all* of the following properties:"
            }
            UnionKind::AnyOf => {
                "The elements of the array must match *at least one* of the following properties:"
            }
            UnionKind::OneOf => {
                "The elements of the array must match *exactly one* of the following properties:"
            }
            UnionKind::Not => {
                "The elements of the array must *not* match the following properties:"
            }
        }
    }
}

impl SchemaNode {
    pub fn classify(&self, type_name: Option<&str>) -> Shape {
        match type_name {
            Some("object") => Shape::Object,
            Some("array") => Shape::Array,
            _ if self.one_of.is_some() => Shape::UnionOfRefs,
            _ => Shape::Leaf,
        }
    }

    /// First combining keyword present, checked allOf → anyOf → oneOf → not.
    pub fn union_construct(&self) -> Option<(UnionKind, &[SchemaNode])> {
        if let Some(branches) = &self.all_of {
            return Some((UnionKind::AllOf, branches));
        }
        if let Some(branches) = &self.any_of {
            return Some((UnionKind::AnyOf, branches));
        }
        if let Some(branches) = &self.one_of {
            return Some((UnionKind::OneOf, branches));
        }
        if let Some(branches) = &self.not {
            return Some((UnionKind::Not, branches));
        }
        None
    }

    pub fn requires(&self, property_key: &str) -> bool {
        self.required
            .as_ref()
            .is_some_and(|names| names.iter().any(|name| name == property_key))
    }
}

/// `Option<Value>` would fold an explicit `null` into `None`; this keeps it.
fn some_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
