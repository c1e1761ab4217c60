//! Render JSON Schema documents into ordered, human-readable text blocks.
//!
//! Walk a schema node tree and emit one block per element: title line,
//! description, nested properties, array items, union branches, enum values,
//! defaults, restrictions. The caller joins the blocks into final markdown.
//!
//! Design goals:
//! - Pure rendering: (node, depth, table) → blocks; nothing is mutated.
//! - Declared order everywhere: properties, enum values, and union branches
//!   render in the order the source document states them.
//! - Permissive by default: an incomplete shape drops its block instead of
//!   failing; only a broken caller contract (array with no `items`) errors.

pub mod cli;
pub mod parse;
pub mod render;
pub mod resolve;
pub mod restrictions;
pub mod schema;
pub mod title;

pub use render::{Block, RenderError, render_node, render_schema_section};
pub use schema::{SchemaNode, SubSchemas};
