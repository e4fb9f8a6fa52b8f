//! LiveViz client library
//!
//! Lets an instrumented application narrate its own data-structure
//! operations to a live visualization service:
//!
//! - `live` - `VisualizerClient` and the scope-bound `ManagedStructure`
//! - `transport` - the blocking HTTP seam (`Transport`, `HttpTransport`)
//! - `models` - structure kinds, node ids and request bodies
//! - `config` - base URL, verbosity and timeouts from file/environment
//!
//! # Failure model
//!
//! Operations never panic and never return errors to the caller: failures
//! collapse to `false`, `None`, `Value::Null` or an empty `Vec`, so a
//! missing or misbehaving service cannot break the host application. The
//! `try_*` operations expose the classified `LiveError` when needed.
//!
//! ```ignore
//! use liveviz_client::{ManagedStructure, Metadata, StructureKind, VisualizerClient};
//! use serde_json::json;
//!
//! let mut client = VisualizerClient::new("http://localhost:5000")?;
//! let mut list = ManagedStructure::new(&mut client, "list1", StructureKind::LinkedList, 1);
//! if let Some(id) = list.add_node(&json!(42), None, &Metadata::new()) {
//!     list.update_node(id, &json!(99), &Metadata::new());
//! }
//! ```

pub mod config;
pub mod live;
pub mod models;
pub mod transport;

pub use config::ClientConfig;
pub use live::{LiveError, ManagedStructure, VisualizerClient};
pub use models::{Metadata, NodeId, StructureKind};
pub use transport::{HttpTransport, Transport, TransportError};
