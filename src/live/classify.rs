//! Success inference for mutating calls.
//!
//! The service does not report failures through status codes consistently,
//! so success is read from the response text: creation succeeds when the
//! body mentions an `"id"` key, every other mutation succeeds unless the
//! body contains the substring `error` anywhere (including inside a node
//! value). The status code is carried along for diagnostics only.
//!
//! This is the only place that policy lives.

use crate::live::client::LiveError;
use crate::transport::TransportResponse;

/// Which success rule applies to a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exchange {
    /// Structure creation: body must carry an `"id"` key.
    Creation,
    /// Node update/removal and structure deletion: body must not mention `error`.
    Mutation,
}

/// Classify a completed exchange as accepted or rejected.
pub fn classify(exchange: Exchange, response: &TransportResponse) -> Result<(), LiveError> {
    if response.body.is_empty() {
        return Err(LiveError::EmptyResponse {
            status: response.status,
        });
    }

    let accepted = match exchange {
        Exchange::Creation => response.body.contains("\"id\""),
        Exchange::Mutation => !response.body.contains("error"),
    };

    if accepted {
        Ok(())
    } else {
        Err(LiveError::Rejected {
            status: response.status,
            body: response.body.clone(),
        })
    }
}
