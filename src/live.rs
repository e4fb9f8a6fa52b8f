//! Client side of the live visualization protocol.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐   one exchange per call   ┌───────────────────────┐
//! │ ManagedStructure │ ─► VisualizerClient ─────►│ visualization service │
//! │ (scope-bound)    │    (blocking, JSON/HTTP)  │   /api/live/...       │
//! └──────────────────┘                           └───────────────────────┘
//! ```
//!
//! # Endpoints
//!
//! | Verb   | Path                                   | Operation          |
//! |--------|----------------------------------------|--------------------|
//! | POST   | `/api/live/structure`                  | `create_structure` |
//! | POST   | `/api/live/structure/{name}/node`      | `add_node`         |
//! | DELETE | `/api/live/structure/{name}/node/{id}` | `remove_node`      |
//! | PUT    | `/api/live/structure/{name}/node/{id}` | `update_node`      |
//! | GET    | `/api/live/structure/{name}`           | `get_structure`    |
//! | GET    | `/api/live/structures`                 | `get_all_structures`, `is_connected` |
//! | GET    | `/api/live/matrix`                     | `get_matrix`       |
//! | DELETE | `/api/live/structure/{name}`           | `delete_structure` |
//!
//! Every request carries `Content-Type: application/json`.

mod classify;
mod client;
mod endpoint;
mod managed;

pub use classify::{classify, Exchange};
pub use client::{LiveError, VisualizerClient, DEFAULT_BASE_URL, DEFAULT_DEPTH};
pub use endpoint::Endpoint;
pub use managed::ManagedStructure;
