//! GraphQL search query for open pull requests
//!
//! The organization is passed through the `variables` map, never spliced into
//! the query text.

use serde::Serialize;

/// Default GitHub GraphQL endpoint
pub const GITHUB_GRAPHQL_URL: &str = "https://api.github.com/graphql";

/// Search for the last 100 issues matching `$searchQuery`, selecting pull request fields
pub const OPEN_PULL_REQUESTS_QUERY: &str = r#"
    query($searchQuery: String!) {
        search(query: $searchQuery, type: ISSUE, last: 100) {
            edges {
                node {
                    ... on PullRequest {
                        url
                        title
                        createdAt
                        repository {
                            name
                        }
                    }
                }
            }
        }
    }
"#;

/// GraphQL request body
#[derive(Debug, Serialize)]
pub struct GraphQLRequest {
    pub query: &'static str,
    pub variables: SearchVariables,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchVariables {
    pub search_query: String,
}

impl GraphQLRequest {
    /// Request for every open pull request in `organization`
    pub fn open_pull_requests(organization: &str) -> Self {
        GraphQLRequest {
            query: OPEN_PULL_REQUESTS_QUERY,
            variables: SearchVariables {
                search_query: search_query(organization),
            },
        }
    }
}

/// Search string selecting open pull requests in an organization
pub fn search_query(organization: &str) -> String {
    format!("org:{} is:pr is:open", organization)
}
