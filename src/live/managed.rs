//! Scope-bound structure handle.
//!
//! `ManagedStructure` creates its structure when constructed and deletes it
//! when dropped, so the remote structure lives exactly as long as the local
//! value. Node operations forward to the client with the bound name.

use serde_json::Value;

use crate::live::client::VisualizerClient;
use crate::models::{Metadata, NodeId, StructureKind};
use crate::transport::{HttpTransport, Transport};

/// A structure whose remote lifetime follows a local scope.
///
/// Construction issues `create_structure` without checking the result; if
/// creation failed, later node operations report their own failures.
/// Dropping always issues exactly one `delete_structure` for the bound name,
/// on every exit path (normal return, `?` propagation, unwinding).
///
/// The handle borrows the client mutably for its whole lifetime.
///
/// # Example
///
/// ```ignore
/// let mut client = VisualizerClient::new("http://localhost:5000")?;
/// {
///     let mut list = ManagedStructure::new(&mut client, "queue", StructureKind::LinkedList, 1);
///     let id = list.add_node(&json!(1), None, &Metadata::new());
/// } // structure deleted here
/// ```
pub struct ManagedStructure<'a, T: Transport = HttpTransport> {
    client: &'a mut VisualizerClient<T>,
    name: String,
}

impl<'a, T: Transport> ManagedStructure<'a, T> {
    /// Create the remote structure and bind it to this handle.
    pub fn new(
        client: &'a mut VisualizerClient<T>,
        name: impl Into<String>,
        kind: StructureKind,
        depth: u32,
    ) -> Self {
        let name = name.into();
        if !client.create_structure(&name, kind, depth, 0) {
            tracing::debug!(structure = %name, "managed structure created without confirmation");
        }
        Self { client, name }
    }

    /// The bound structure name. Fixed for the lifetime of the handle.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn client(&self) -> &VisualizerClient<T> {
        &*self.client
    }

    pub fn add_node(
        &mut self,
        value: &Value,
        index: Option<u64>,
        metadata: &Metadata,
    ) -> Option<NodeId> {
        self.client.add_node(&self.name, value, index, metadata)
    }

    pub fn remove_node(&mut self, node_id: NodeId) -> bool {
        self.client.remove_node(&self.name, node_id)
    }

    pub fn update_node(&mut self, node_id: NodeId, value: &Value, metadata: &Metadata) -> bool {
        self.client.update_node(&self.name, node_id, value, metadata)
    }

    pub fn get_structure(&mut self) -> Value {
        self.client.get_structure(&self.name)
    }
}

impl<T: Transport> Drop for ManagedStructure<'_, T> {
    fn drop(&mut self) {
        if !self.client.delete_structure(&self.name) {
            tracing::debug!(structure = %self.name, "managed structure delete not confirmed");
        }
    }
}
