//! Decoding of search responses

use openprs_core::SearchResponse;
use tracing::{debug, warn};

use crate::Result;

/// Decode a raw GraphQL response body
///
/// Only invalid JSON or mismatched types fail. A bare `null` body is an empty
/// response. GraphQL `errors` are logged and otherwise ignored; the caller
/// sees whatever data came with them, which is usually nothing.
pub fn decode(body: &[u8]) -> Result<SearchResponse> {
    let response = serde_json::from_slice::<Option<SearchResponse>>(body)?.unwrap_or_default();

    for error in &response.errors {
        warn!(message = %error.message, "GitHub reported a GraphQL error");
    }

    debug!(edges = response.edge_count(), "Decoded search response");

    Ok(response)
}
