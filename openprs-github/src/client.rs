//! GitHub GraphQL client

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tracing::{debug, info, warn};
use url::Url;

use crate::graphql::{GraphQLRequest, GITHUB_GRAPHQL_URL};
use crate::Result;

/// User-Agent sent with every request; GitHub rejects requests without one
pub const USER_AGENT: &str = concat!("openprs/", env!("CARGO_PKG_VERSION"));

/// GitHub GraphQL client authenticated with a static bearer token
pub struct GitHubClient {
    http: reqwest::Client,
    endpoint: Url,
    token: String,
}

impl GitHubClient {
    /// Create a client for the public GitHub API
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_endpoint(token, Url::parse(GITHUB_GRAPHQL_URL)?)
    }

    /// Create a client for a specific GraphQL endpoint
    pub fn with_endpoint(token: impl Into<String>, endpoint: Url) -> Result<Self> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        debug!(endpoint = %endpoint, "Created GitHub client");

        Ok(Self {
            http,
            endpoint,
            token: token.into(),
        })
    }

    /// Get the GraphQL endpoint
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Search for open pull requests in `organization` and return the raw body
    ///
    /// Sends exactly one request. The HTTP status is not inspected beyond a
    /// warning: error bodies are returned for the decoder like any other.
    pub async fn fetch_open_pull_requests(&self, organization: &str) -> Result<Vec<u8>> {
        debug!(organization, endpoint = %self.endpoint, "Searching open pull requests");

        let request = GraphQLRequest::open_pull_requests(organization);

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(AUTHORIZATION, format!("bearer {}", self.token))
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "GitHub returned a non-success status, decoding body anyway");
        }

        let body = response.bytes().await?;

        info!(status = %status, bytes = body.len(), "Fetched search response");

        Ok(body.to_vec())
    }
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("endpoint", &self.endpoint.as_str())
            .finish_non_exhaustive()
    }
}
