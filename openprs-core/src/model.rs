//! Search response data model
//!
//! Mirrors `{data: {search: {edges: [{node: PullRequest}]}}}`. Every field is
//! optional: absent or `null` values become their empty/zero equivalent and
//! unknown fields are ignored, so schema drift degrades into an empty list
//! rather than a decode failure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Top-level GraphQL search response
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    #[serde(deserialize_with = "nullable")]
    pub data: SearchData,

    /// GraphQL-level errors reported alongside (or instead of) data
    #[serde(deserialize_with = "nullable")]
    pub errors: Vec<GraphQLError>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchData {
    #[serde(deserialize_with = "nullable")]
    pub search: Search,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Search {
    #[serde(deserialize_with = "nullable")]
    pub edges: Vec<Edge>,
}

/// One search result entry wrapping a single node
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Edge {
    #[serde(deserialize_with = "nullable")]
    pub node: PullRequest,
}

/// An open pull request as returned by the search
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PullRequest {
    /// Web URL, used as the item's action payload
    #[serde(deserialize_with = "nullable")]
    pub url: String,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    /// Creation time; the Unix epoch when absent
    #[serde(deserialize_with = "nullable")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "nullable")]
    pub repository: Repository,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Repository {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
}

/// GraphQL error entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GraphQLError {
    #[serde(deserialize_with = "nullable")]
    pub message: String,
}

impl SearchResponse {
    /// Number of edges in the response
    pub fn edge_count(&self) -> usize {
        self.data.search.edges.len()
    }

    /// Pull requests in response order
    pub fn pull_requests(&self) -> impl Iterator<Item = &PullRequest> {
        self.data.search.edges.iter().map(|edge| &edge.node)
    }
}

/// Treat an explicit `null` the same as a missing field
fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_full_edge() {
        let json = r#"{
            "data": {"search": {"edges": [
                {"node": {
                    "url": "https://github.com/acme/core/pull/7",
                    "title": "Fix the widget",
                    "createdAt": "2023-05-01T14:30:00Z",
                    "repository": {"name": "core"}
                }}
            ]}}
        }"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.edge_count(), 1);

        let pr = response.pull_requests().next().unwrap();
        assert_eq!(pr.url, "https://github.com/acme/core/pull/7");
        assert_eq!(pr.title, "Fix the widget");
        assert_eq!(
            pr.created_at,
            Utc.with_ymd_and_hms(2023, 5, 1, 14, 30, 0).unwrap()
        );
        assert_eq!(pr.repository.name, "core");
    }

    #[test]
    fn test_missing_data_is_empty() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.edge_count(), 0);
        assert!(response.errors.is_empty());
    }

    #[test]
    fn test_null_fields_become_defaults() {
        let json = r#"{"data": {"search": {"edges": [
            {"node": {"url": null, "title": null, "createdAt": null, "repository": null}},
            {"node": null},
            {}
        ]}}}"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.edge_count(), 3);
        for pr in response.pull_requests() {
            assert_eq!(pr, &PullRequest::default());
        }
    }

    #[test]
    fn test_null_data_with_errors() {
        let json = r#"{"data": null, "errors": [{"message": "Bad credentials", "type": "UNAUTHORIZED"}]}"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.edge_count(), 0);
        assert_eq!(response.errors.len(), 1);
        assert_eq!(response.errors[0].message, "Bad credentials");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = r#"{"data": {"search": {"issueCount": 1, "edges": [
            {"cursor": "abc", "node": {"title": "Hi", "number": 3}}
        ]}}}"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.pull_requests().next().unwrap().title, "Hi");
    }

    #[test]
    fn test_type_mismatch_fails() {
        let json = r#"{"data": {"search": {"edges": "nope"}}}"#;
        assert!(serde_json::from_str::<SearchResponse>(json).is_err());
    }

    #[test]
    fn test_bad_timestamp_fails() {
        let json = r#"{"data": {"search": {"edges": [{"node": {"createdAt": "yesterday"}}]}}}"#;
        assert!(serde_json::from_str::<SearchResponse>(json).is_err());
    }
}
