//! Blocking client for the live visualization REST API.
//!
//! This module provides `VisualizerClient`, which maps each logical
//! operation onto exactly one HTTP exchange and folds the response back
//! into a plain value. The caller-facing operations never fail: every
//! failure collapses to `false`, `None`, `Value::Null` or an empty `Vec`.
//! The `try_*` variants expose the classified [`LiveError`] instead.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::config::ClientConfig;
use crate::live::classify::{classify, Exchange};
use crate::live::endpoint::Endpoint;
use crate::models::{
    AddNodeBody, CreateStructureBody, Metadata, NodeId, StructureKind, UpdateNodeBody,
};
use crate::transport::{
    HttpTransport, Method, Transport, TransportError, TransportRequest, TransportResponse,
};

/// Default service address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Default nesting depth for new structures.
pub const DEFAULT_DEPTH: u32 = 1;

const CONTENT_TYPE: &str = "application/json";

/// Classified reason an operation did not succeed.
///
/// The caller-facing API reduces all of these to the same neutral result;
/// they exist for the `try_*` operations and for verbose diagnostics.
#[derive(Debug, Error)]
pub enum LiveError {
    /// The configured base address is unusable.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// A structure name was empty.
    #[error("Structure name must not be empty")]
    EmptyName,

    /// The structure kind is outside linked_list/array/tree/graph.
    #[error("Unsupported structure kind '{0}'")]
    UnsupportedKind(StructureKind),

    /// The exchange could not be completed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The request body could not be serialized.
    #[error("Failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response body was not valid JSON.
    #[error("Failed to parse response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The server answered with an empty body.
    #[error("Empty response (HTTP {status})")]
    EmptyResponse { status: u16 },

    /// The server reported an error in the response body.
    #[error("Server rejected request (HTTP {status}): {body}")]
    Rejected { status: u16, body: String },

    /// A well-formed response lacked a required field.
    #[error("Response missing field '{0}'")]
    MissingField(&'static str),

    /// A well-formed response had the wrong overall shape.
    #[error("Unexpected response shape: expected {0}")]
    UnexpectedShape(&'static str),
}

/// Client for the live visualization service.
///
/// Owns the base address, a verbosity flag and one transport handle that
/// is reused for every exchange. All operations take `&mut self` and block
/// until the exchange completes; a client must not be shared between
/// threads, so give each concurrent caller its own instance.
///
/// # Example
///
/// ```ignore
/// use liveviz_client::{VisualizerClient, StructureKind, Metadata};
/// use serde_json::json;
///
/// let mut client = VisualizerClient::new("http://localhost:5000")?;
/// client.create_structure("list1", StructureKind::LinkedList, 1, 0);
/// if let Some(id) = client.add_node("list1", &json!(42), None, &Metadata::new()) {
///     client.update_node("list1", id, &json!(99), &Metadata::new());
///     client.remove_node("list1", id);
/// }
/// client.delete_structure("list1");
/// ```
#[derive(Debug)]
pub struct VisualizerClient<T: Transport = HttpTransport> {
    base_url: Url,
    transport: T,
    verbose: bool,
}

impl VisualizerClient<HttpTransport> {
    /// Create a client for `base_url` with the default timeouts.
    pub fn new(base_url: &str) -> Result<Self, LiveError> {
        let transport = HttpTransport::new()?;
        Self::with_transport(base_url, transport)
    }

    /// Create a client from a loaded [`ClientConfig`].
    pub fn from_config(config: &ClientConfig) -> Result<Self, LiveError> {
        let transport =
            HttpTransport::with_timeouts(config.connect_timeout, config.request_timeout)?;
        let mut client = Self::with_transport(&config.base_url, transport)?;
        client.set_verbose(config.verbose);
        Ok(client)
    }
}

impl<T: Transport> VisualizerClient<T> {
    /// Create a client over an arbitrary transport.
    ///
    /// # Errors
    ///
    /// Returns `LiveError::InvalidBaseUrl` if `base_url` does not parse or
    /// cannot carry a path (e.g. `mailto:` URLs).
    pub fn with_transport(base_url: &str, transport: T) -> Result<Self, LiveError> {
        let parsed = Url::parse(base_url).map_err(|e| LiveError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        if parsed.cannot_be_a_base() {
            return Err(LiveError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "URL cannot carry a path".to_string(),
            });
        }

        Ok(Self {
            base_url: parsed,
            transport,
            verbose: false,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Enable or disable failure diagnostics on the `tracing` warn level.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    // =========================================================================
    // Caller-facing operations
    // =========================================================================

    /// Create a structure. True once the server confirms creation.
    pub fn create_structure(
        &mut self,
        name: &str,
        kind: StructureKind,
        depth: u32,
        initial_size: u32,
    ) -> bool {
        let result = self.try_create_structure(name, kind, depth, initial_size);
        self.report("create_structure", result).is_some()
    }

    /// Create a linked list with depth 1 and no initial nodes.
    pub fn create_default_structure(&mut self, name: &str) -> bool {
        self.create_structure(name, StructureKind::default(), DEFAULT_DEPTH, 0)
    }

    /// Add a node. Returns the server-assigned id, or `None` if not created.
    ///
    /// `index` is an advisory position; `metadata` is always sent, as an
    /// empty object when it has no entries.
    pub fn add_node(
        &mut self,
        structure: &str,
        value: &Value,
        index: Option<u64>,
        metadata: &Metadata,
    ) -> Option<NodeId> {
        let result = self.try_add_node(structure, value, index, metadata);
        self.report("add_node", result)
    }

    /// Mark a node as removed. The server keeps it in history.
    pub fn remove_node(&mut self, structure: &str, node_id: NodeId) -> bool {
        let result = self.try_remove_node(structure, node_id);
        self.report("remove_node", result).is_some()
    }

    /// Replace a node's value and merge the supplied metadata keys.
    ///
    /// Idempotent: repeating the call with the same arguments is safe.
    pub fn update_node(
        &mut self,
        structure: &str,
        node_id: NodeId,
        value: &Value,
        metadata: &Metadata,
    ) -> bool {
        let result = self.try_update_node(structure, node_id, value, metadata);
        self.report("update_node", result).is_some()
    }

    /// Fetch one structure, or `Value::Null` on failure.
    pub fn get_structure(&mut self, name: &str) -> Value {
        let result = self.try_get_structure(name);
        self.report("get_structure", result).unwrap_or(Value::Null)
    }

    /// Fetch every structure in server order, or an empty list on failure.
    pub fn get_all_structures(&mut self) -> Vec<Value> {
        let result = self.try_get_all_structures();
        self.report("get_all_structures", result).unwrap_or_default()
    }

    /// Fetch the aggregate matrix view, or `Value::Null` on failure.
    pub fn get_matrix(&mut self) -> Value {
        let result = self.try_get_matrix();
        self.report("get_matrix", result).unwrap_or(Value::Null)
    }

    /// Delete a structure and, implicitly, all of its nodes.
    pub fn delete_structure(&mut self, name: &str) -> bool {
        let result = self.try_delete_structure(name);
        self.report("delete_structure", result).is_some()
    }

    /// Liveness check: true iff the structure listing returns any body.
    ///
    /// The body is not parsed; this checks reachability, not schema.
    pub fn is_connected(&mut self) -> bool {
        let result = self.exchange(Method::Get, Endpoint::Structures, None);
        self.report("is_connected", result)
            .is_some_and(|response| !response.body.is_empty())
    }

    // =========================================================================
    // Strict operations
    // =========================================================================

    pub fn try_create_structure(
        &mut self,
        name: &str,
        kind: StructureKind,
        depth: u32,
        initial_size: u32,
    ) -> Result<(), LiveError> {
        if name.is_empty() {
            return Err(LiveError::EmptyName);
        }
        if kind == StructureKind::Unknown {
            return Err(LiveError::UnsupportedKind(kind));
        }

        let body = encode(&CreateStructureBody {
            name,
            kind,
            depth,
            initial_size,
        })?;
        let response = self.exchange(Method::Post, Endpoint::CreateStructure, Some(body))?;
        classify(Exchange::Creation, &response)
    }

    pub fn try_add_node(
        &mut self,
        structure: &str,
        value: &Value,
        index: Option<u64>,
        metadata: &Metadata,
    ) -> Result<NodeId, LiveError> {
        let body = encode(&AddNodeBody {
            value,
            metadata,
            index,
        })?;
        let response = self.exchange(Method::Post, Endpoint::Nodes(structure), Some(body))?;
        let parsed = decode(&response)?;

        parsed
            .get("node")
            .and_then(|node| node.get("id"))
            .and_then(node_id)
            .ok_or(LiveError::MissingField("node.id"))
    }

    pub fn try_remove_node(&mut self, structure: &str, node_id: NodeId) -> Result<(), LiveError> {
        let response = self.exchange(Method::Delete, Endpoint::Node(structure, node_id), None)?;
        classify(Exchange::Mutation, &response)
    }

    pub fn try_update_node(
        &mut self,
        structure: &str,
        node_id: NodeId,
        value: &Value,
        metadata: &Metadata,
    ) -> Result<(), LiveError> {
        let body = encode(&UpdateNodeBody { value, metadata })?;
        let response =
            self.exchange(Method::Put, Endpoint::Node(structure, node_id), Some(body))?;
        classify(Exchange::Mutation, &response)
    }

    pub fn try_get_structure(&mut self, name: &str) -> Result<Value, LiveError> {
        let response = self.exchange(Method::Get, Endpoint::Structure(name), None)?;
        decode(&response)
    }

    pub fn try_get_all_structures(&mut self) -> Result<Vec<Value>, LiveError> {
        let response = self.exchange(Method::Get, Endpoint::Structures, None)?;
        match decode(&response)? {
            Value::Array(structures) => Ok(structures),
            _ => Err(LiveError::UnexpectedShape("array of structures")),
        }
    }

    pub fn try_get_matrix(&mut self) -> Result<Value, LiveError> {
        let response = self.exchange(Method::Get, Endpoint::Matrix, None)?;
        decode(&response)
    }

    pub fn try_delete_structure(&mut self, name: &str) -> Result<(), LiveError> {
        let response = self.exchange(Method::Delete, Endpoint::Structure(name), None)?;
        classify(Exchange::Mutation, &response)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Perform one exchange against `endpoint`.
    fn exchange(
        &mut self,
        method: Method,
        endpoint: Endpoint<'_>,
        body: Option<String>,
    ) -> Result<TransportResponse, LiveError> {
        let url = endpoint
            .url(&self.base_url)
            .ok_or_else(|| LiveError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot carry a path".to_string(),
            })?;

        let request = TransportRequest {
            method,
            url,
            headers: vec![("Content-Type".to_string(), CONTENT_TYPE.to_string())],
            body,
        };

        let response = self.transport.perform(&request)?;
        tracing::debug!(
            method = %request.method,
            url = %request.url,
            status = response.status,
            "live API exchange"
        );
        Ok(response)
    }

    /// Collapse a strict result, logging the failure when verbose.
    fn report<V>(&self, operation: &str, result: Result<V, LiveError>) -> Option<V> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                if self.verbose {
                    tracing::warn!("{} failed: {}", operation, e);
                }
                None
            }
        }
    }
}

fn encode<B: Serialize>(body: &B) -> Result<String, LiveError> {
    serde_json::to_string(body).map_err(LiveError::Encode)
}

/// Read a node id, accepting integral floats such as `7.0`.
fn node_id(value: &Value) -> Option<NodeId> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
            .map(|f| f as NodeId)
    })
}

fn decode(response: &TransportResponse) -> Result<Value, LiveError> {
    serde_json::from_str(&response.body).map_err(LiveError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    // Mock transport: replays canned responses and records requests.
    #[derive(Debug, Default)]
    struct MockTransport {
        requests: Arc<Mutex<Vec<TransportRequest>>>,
        responses: VecDeque<Result<TransportResponse, TransportError>>,
    }

    impl MockTransport {
        fn replying(bodies: &[&str]) -> Self {
            Self {
                requests: Arc::new(Mutex::new(Vec::new())),
                responses: bodies
                    .iter()
                    .map(|body| Ok(TransportResponse::ok(*body)))
                    .collect(),
            }
        }

        fn failing(err: TransportError) -> Self {
            let mut mock = Self::default();
            mock.responses.push_back(Err(err));
            mock
        }
    }

    impl Transport for MockTransport {
        fn perform(
            &mut self,
            request: &TransportRequest,
        ) -> Result<TransportResponse, TransportError> {
            self.requests.lock().unwrap().push(request.clone());
            self.responses
                .pop_front()
                .unwrap_or_else(|| Ok(TransportResponse::ok("")))
        }
    }

    fn client(mock: MockTransport) -> VisualizerClient<MockTransport> {
        VisualizerClient::with_transport(DEFAULT_BASE_URL, mock).unwrap()
    }

    fn last_request(client: &VisualizerClient<MockTransport>) -> TransportRequest {
        client
            .transport()
            .requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("a request should have been issued")
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = VisualizerClient::with_transport("not a url", MockTransport::default())
            .unwrap_err();
        assert!(matches!(err, LiveError::InvalidBaseUrl { .. }));

        let err = VisualizerClient::with_transport("mailto:a@b.c", MockTransport::default())
            .unwrap_err();
        assert!(matches!(err, LiveError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_create_structure_request_shape() {
        let mut client = client(MockTransport::replying(&[r#"{"id":"list1"}"#]));

        assert!(client.create_structure("list1", StructureKind::Tree, 2, 8));

        let request = last_request(&client);
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url.as_str(), "http://localhost:5000/api/live/structure");
        assert_eq!(request.header("Content-Type"), Some("application/json"));
        let body: Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({"name": "list1", "type": "tree", "depth": 2, "initialSize": 8})
        );
    }

    #[test]
    fn test_create_structure_false_without_id() {
        let mut client = client(MockTransport::replying(&[r#"{"name":"list1"}"#, ""]));
        assert!(!client.create_structure("list1", StructureKind::Array, 1, 0));
        assert!(!client.create_structure("list1", StructureKind::Array, 1, 0));
    }

    #[test]
    fn test_create_structure_empty_name_issues_no_request() {
        let mut client = client(MockTransport::default());
        assert!(matches!(
            client.try_create_structure("", StructureKind::Graph, 1, 0),
            Err(LiveError::EmptyName)
        ));
        assert!(client.transport().requests.lock().unwrap().is_empty());
    }

    #[test]
    fn test_create_structure_unknown_kind_issues_no_request() {
        let mut client = client(MockTransport::replying(&[r#"{"id":"x"}"#]));
        assert!(matches!(
            client.try_create_structure("x", StructureKind::Unknown, 1, 0),
            Err(LiveError::UnsupportedKind(StructureKind::Unknown))
        ));
        assert!(!client.create_structure("x", StructureKind::Unknown, 1, 0));
        assert!(client.transport().requests.lock().unwrap().is_empty());
    }

    #[test]
    fn test_create_default_structure_uses_linked_list_depth_one() {
        let mut client = client(MockTransport::replying(&[r#"{"id":1}"#]));
        assert!(client.create_default_structure("q"));

        let body: Value =
            serde_json::from_str(last_request(&client).body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({"name": "q", "type": "linked_list", "depth": 1, "initialSize": 0})
        );
    }

    #[test]
    fn test_add_node_returns_nested_id() {
        let mut client = client(MockTransport::replying(&[
            r#"{"node":{"id":7,"value":42}}"#,
        ]));
        assert_eq!(
            client.add_node("list1", &json!(42), None, &Metadata::new()),
            Some(7)
        );

        let request = last_request(&client);
        assert_eq!(request.url.path(), "/api/live/structure/list1/node");
        let body: Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"value": 42, "metadata": {}}));
    }

    #[test]
    fn test_add_node_sends_index_when_given() {
        let mut client = client(MockTransport::replying(&[r#"{"node":{"id":0}}"#]));
        assert_eq!(
            client.add_node("arr", &json!("x"), Some(2), &Metadata::new()),
            Some(0)
        );

        let body: Value =
            serde_json::from_str(last_request(&client).body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"value": "x", "metadata": {}, "index": 2}));
    }

    #[test]
    fn test_add_node_not_created_cases() {
        let mut client = client(MockTransport::replying(&[
            r#"{"id":7}"#,
            r#"{"node":{}}"#,
            r#"{"node":{"id":-3}}"#,
            "not json",
            "",
        ]));

        for _ in 0..5 {
            assert_eq!(
                client.add_node("list1", &json!(1), None, &Metadata::new()),
                None
            );
        }
    }

    #[test]
    fn test_add_node_accepts_integral_float_id() {
        let mut client = client(MockTransport::replying(&[
            r#"{"node":{"id":7.0}}"#,
            r#"{"node":{"id":7.5}}"#,
            r#"{"node":{"id":-1.0}}"#,
            r#"{"node":{"id":"7"}}"#,
        ]));

        assert_eq!(
            client.add_node("list1", &json!(1), None, &Metadata::new()),
            Some(7)
        );
        for _ in 0..3 {
            assert_eq!(
                client.add_node("list1", &json!(1), None, &Metadata::new()),
                None
            );
        }
    }

    #[test]
    fn test_add_node_strict_errors_are_classified() {
        let mut client = client(MockTransport::replying(&[r#"{"error":"nope"}"#, "{"]));

        assert!(matches!(
            client.try_add_node("x", &json!(1), None, &Metadata::new()),
            Err(LiveError::MissingField("node.id"))
        ));
        assert!(matches!(
            client.try_add_node("x", &json!(1), None, &Metadata::new()),
            Err(LiveError::Decode(_))
        ));
    }

    #[test]
    fn test_remove_node_uses_delete_on_node_path() {
        let mut client = client(MockTransport::replying(&[r#"{"success":true}"#]));
        assert!(client.remove_node("list1", 7));

        let request = last_request(&client);
        assert_eq!(request.method, Method::Delete);
        assert_eq!(request.url.path(), "/api/live/structure/list1/node/7");
        assert_eq!(request.body, None);
        assert_eq!(request.header("Content-Type"), Some("application/json"));
    }

    #[test]
    fn test_update_node_sends_supplied_metadata_only() {
        let mut client = client(MockTransport::replying(&[r#"{"node":{"id":7}}"#]));
        let mut metadata = Metadata::new();
        metadata.insert("color".to_string(), json!("red"));

        assert!(client.update_node("list1", 7, &json!(99), &metadata));

        let request = last_request(&client);
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.url.path(), "/api/live/structure/list1/node/7");
        let body: Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"value": 99, "metadata": {"color": "red"}}));
    }

    #[test]
    fn test_mutations_false_on_error_substring() {
        let mut client = client(MockTransport::replying(&[
            r#"{"error":"Node not found"}"#,
            r#"{"error":"Node not found"}"#,
            r#"{"error":"Structure not found"}"#,
        ]));

        assert!(!client.remove_node("list1", 99));
        assert!(!client.update_node("list1", 99, &json!(1), &Metadata::new()));
        assert!(!client.delete_structure("list1"));
    }

    #[test]
    fn test_transport_failure_collapses_everywhere() {
        let refused = || TransportError::Connect("connection refused".to_string());

        let mut c = client(MockTransport::failing(refused()));
        assert!(!c.create_structure("a", StructureKind::Array, 1, 0));
        let mut c = client(MockTransport::failing(refused()));
        assert_eq!(c.add_node("a", &json!(1), None, &Metadata::new()), None);
        let mut c = client(MockTransport::failing(refused()));
        assert!(!c.remove_node("a", 1));
        let mut c = client(MockTransport::failing(refused()));
        assert!(!c.update_node("a", 1, &json!(1), &Metadata::new()));
        let mut c = client(MockTransport::failing(refused()));
        assert_eq!(c.get_structure("a"), Value::Null);
        let mut c = client(MockTransport::failing(refused()));
        assert!(c.get_all_structures().is_empty());
        let mut c = client(MockTransport::failing(refused()));
        assert_eq!(c.get_matrix(), Value::Null);
        let mut c = client(MockTransport::failing(refused()));
        assert!(!c.delete_structure("a"));
        let mut c = client(MockTransport::failing(refused()));
        assert!(!c.is_connected());
    }

    #[test]
    fn test_transport_error_kept_in_strict_result() {
        let mut c = client(MockTransport::failing(TransportError::Timeout(
            "10s".to_string(),
        )));
        assert!(matches!(
            c.try_get_matrix(),
            Err(LiveError::Transport(TransportError::Timeout(_)))
        ));
    }

    #[test]
    fn test_get_structure_decodes_or_null() {
        let mut client = client(MockTransport::replying(&[
            r#"{"name":"list1","nodes":[]}"#,
            "<html>oops</html>",
        ]));

        assert_eq!(
            client.get_structure("list1"),
            json!({"name": "list1", "nodes": []})
        );
        assert_eq!(last_request(&client).url.path(), "/api/live/structure/list1");
        assert_eq!(client.get_structure("list1"), Value::Null);
    }

    #[test]
    fn test_get_all_structures_keeps_server_order() {
        let mut client = client(MockTransport::replying(&[
            r#"[{"name":"b"},{"name":"a"}]"#,
            r#"{"structures":[]}"#,
        ]));

        assert_eq!(
            client.get_all_structures(),
            vec![json!({"name": "b"}), json!({"name": "a"})]
        );
        assert!(client.get_all_structures().is_empty());
    }

    #[test]
    fn test_get_matrix_path() {
        let mut client = client(MockTransport::replying(&[r#"{"rows":[]}"#]));
        assert_eq!(client.get_matrix(), json!({"rows": []}));

        let request = last_request(&client);
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url.path(), "/api/live/matrix");
    }

    #[test]
    fn test_is_connected_ignores_content() {
        let mut client = client(MockTransport::replying(&["not even json", ""]));
        assert!(client.is_connected());
        assert!(!client.is_connected());
        assert_eq!(last_request(&client).url.path(), "/api/live/structures");
    }

    #[test]
    fn test_verbose_flag() {
        let mut client = client(MockTransport::default());
        assert!(!client.is_verbose());
        client.set_verbose(true);
        assert!(client.is_verbose());
        // Failures still collapse when verbose.
        assert!(!client.delete_structure("missing"));
    }

    #[test]
    fn test_live_error_display() {
        assert_eq!(
            LiveError::MissingField("node.id").to_string(),
            "Response missing field 'node.id'"
        );
        assert_eq!(
            LiveError::EmptyResponse { status: 204 }.to_string(),
            "Empty response (HTTP 204)"
        );
        assert_eq!(
            LiveError::Transport(TransportError::Connect("refused".to_string())).to_string(),
            "Connection failed: refused"
        );
    }
}
