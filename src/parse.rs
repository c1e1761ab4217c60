//! Document parsing with JSON-path context in error messages.

use serde::de::DeserializeOwned;

use crate::schema::{SchemaNode, SubSchemas};

pub fn schema_from_str(source: &str) -> anyhow::Result<SchemaNode> {
    from_str_with_path(source)
}

/// The sub-schema table is a flat JSON object: `$ref` key → display name.
pub fn sub_schemas_from_str(source: &str) -> anyhow::Result<SubSchemas> {
    from_str_with_path(source)
}

fn from_str_with_path<T: DeserializeOwned>(source: &str) -> anyhow::Result<T> {
    let deserializer = &mut serde_json::Deserializer::from_str(source);
    match serde_path_to_error::deserialize::<_, T>(deserializer) {
        Ok(value) => Ok(value),
        Err(error) => {
            let path = error.path().to_string();
            Err(anyhow::anyhow!("at JSON path {path}: {}", error.into_inner()))
        }
    }
}
