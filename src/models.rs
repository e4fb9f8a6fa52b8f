//! Data models for the live visualization service.
//!
//! All entities are owned by the server; these types only describe what
//! goes over the wire. Request bodies serialize to the exact JSON objects
//! the `/api/live` endpoints expect.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Server-assigned node identifier.
///
/// Unique within its owning structure only. The client never allocates
/// these; they come back from `add_node` or from a structure query.
pub type NodeId = u64;

/// Per-node metadata sent with add/update calls.
///
/// Only the keys supplied are sent; the server merges them into whatever
/// it already holds for the node.
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// Declared kind of a structure.
///
/// Serialized as the snake_case names the service expects.
/// Includes `Unknown` for forward-compatibility with kinds added server-side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureKind {
    #[default]
    LinkedList,
    Array,
    Tree,
    Graph,
    /// Forward-compatible fallback for unknown kinds
    #[serde(other)]
    Unknown,
}

impl StructureKind {
    /// All kinds a client may create.
    pub const ALL: [StructureKind; 4] = [
        StructureKind::LinkedList,
        StructureKind::Array,
        StructureKind::Tree,
        StructureKind::Graph,
    ];

    /// Wire name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            StructureKind::LinkedList => "linked_list",
            StructureKind::Array => "array",
            StructureKind::Tree => "tree",
            StructureKind::Graph => "graph",
            StructureKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognised structure kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown structure kind '{0}' (expected linked_list, array, tree or graph)")]
pub struct ParseKindError(pub String);

impl FromStr for StructureKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        StructureKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| ParseKindError(s.to_string()))
    }
}

/// Body of `POST /api/live/structure`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateStructureBody<'a> {
    pub name: &'a str,
    #[serde(rename = "type")]
    pub kind: StructureKind,
    pub depth: u32,
    #[serde(rename = "initialSize")]
    pub initial_size: u32,
}

/// Body of `POST /api/live/structure/{name}/node`.
///
/// `metadata` is always present (an empty object when the caller gave
/// none); `index` is only present when supplied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddNodeBody<'a> {
    pub value: &'a serde_json::Value,
    pub metadata: &'a Metadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u64>,
}

/// Body of `PUT /api/live/structure/{name}/node/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateNodeBody<'a> {
    pub value: &'a serde_json::Value,
    pub metadata: &'a Metadata,
}
