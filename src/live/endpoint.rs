//! Fixed REST layout of the live API.

use url::Url;

use crate::models::NodeId;

/// Literal prefix shared by every endpoint.
const API_PREFIX: [&str; 2] = ["api", "live"];

/// One route of the `/api/live` surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// `/api/live/structure`
    CreateStructure,
    /// `/api/live/structure/{name}`
    Structure(&'a str),
    /// `/api/live/structure/{name}/node`
    Nodes(&'a str),
    /// `/api/live/structure/{name}/node/{id}`
    Node(&'a str, NodeId),
    /// `/api/live/structures`
    Structures,
    /// `/api/live/matrix`
    Matrix,
}

impl Endpoint<'_> {
    /// Path segments after the API prefix, unencoded.
    fn segments(&self) -> Vec<String> {
        match *self {
            Endpoint::CreateStructure => vec!["structure".into()],
            Endpoint::Structure(name) => vec!["structure".into(), name.into()],
            Endpoint::Nodes(name) => vec!["structure".into(), name.into(), "node".into()],
            Endpoint::Node(name, id) => vec![
                "structure".into(),
                name.into(),
                "node".into(),
                id.to_string(),
            ],
            Endpoint::Structures => vec!["structures".into()],
            Endpoint::Matrix => vec!["matrix".into()],
        }
    }

    /// Resolve against the service base address.
    ///
    /// Each structure name becomes exactly one percent-encoded segment, so
    /// a `/` or `?` inside a name cannot change the route. Any path already
    /// present on `base` is kept as a prefix. Returns `None` only for bases
    /// that cannot carry a path, which the client rejects at construction.
    pub fn url(&self, base: &Url) -> Option<Url> {
        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);
        {
            let mut path = url.path_segments_mut().ok()?;
            path.pop_if_empty();
            path.extend(API_PREFIX);
            path.extend(self.segments());
        }
        Some(url)
    }
}
