//! Turns a search response into ordered display items

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::{PullRequest, SearchResponse};

/// Timestamp layout used in item details
pub const DETAIL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A rendered pull request, ready for the host UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Pull request title
    pub label: String,
    /// `"<YYYY-MM-DD HH:MM>, <repository>"`
    pub detail: String,
    /// Pull request URL
    pub action_payload: String,
    pub selectable: bool,
}

impl From<&PullRequest> for DisplayItem {
    fn from(pr: &PullRequest) -> Self {
        DisplayItem {
            label: pr.title.clone(),
            detail: format_detail(&pr.created_at, &pr.repository.name),
            action_payload: pr.url.clone(),
            selectable: true,
        }
    }
}

/// Flatten, sort oldest first, and format every pull request in the response
///
/// An empty result is returned as an empty list; showing the placeholder is
/// the workflow's job.
pub fn present(response: &SearchResponse) -> Vec<DisplayItem> {
    let mut pull_requests: Vec<&PullRequest> = response.pull_requests().collect();
    sort_oldest_first(&mut pull_requests);

    debug!(count = pull_requests.len(), "Presenting pull requests");

    pull_requests.into_iter().map(DisplayItem::from).collect()
}

/// Stable ascending sort on creation time
pub fn sort_oldest_first(pull_requests: &mut [&PullRequest]) {
    pull_requests.sort_by(|a, b| a.created_at.cmp(&b.created_at));
}

/// Format the detail line shown under the title
pub fn format_detail(created_at: &DateTime<Utc>, repository: &str) -> String {
    format!("{}, {}", created_at.format(DETAIL_TIME_FORMAT), repository)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Edge, Repository};
    use chrono::TimeZone;

    fn pr(title: &str, created_at: DateTime<Utc>, repo: &str) -> PullRequest {
        PullRequest {
            url: format!("https://github.com/acme/{}/pull/1", repo),
            title: title.to_string(),
            created_at,
            repository: Repository {
                name: repo.to_string(),
            },
        }
    }

    fn response(prs: Vec<PullRequest>) -> SearchResponse {
        let mut response = SearchResponse::default();
        response.data.search.edges = prs.into_iter().map(|node| Edge { node }).collect();
        response
    }

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 5, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_format_detail() {
        let created_at = Utc.with_ymd_and_hms(2023, 5, 1, 14, 30, 0).unwrap();
        assert_eq!(format_detail(&created_at, "core"), "2023-05-01 14:30, core");
    }

    #[test]
    fn test_item_fields() {
        let items = present(&response(vec![pr("Add thing", at(1, 14), "core")]));
        assert_eq!(
            items,
            vec![DisplayItem {
                label: "Add thing".to_string(),
                detail: "2023-05-01 14:00, core".to_string(),
                action_payload: "https://github.com/acme/core/pull/1".to_string(),
                selectable: true,
            }]
        );
    }

    #[test]
    fn test_sorted_oldest_first() {
        let items = present(&response(vec![
            pr("third", at(3, 9), "a"),
            pr("first", at(1, 9), "b"),
            pr("fourth", at(3, 10), "c"),
            pr("second", at(2, 23), "d"),
        ]));
        let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["first", "second", "third", "fourth"]);
    }

    #[test]
    fn test_equal_timestamps_keep_response_order() {
        let items = present(&response(vec![
            pr("b", at(2, 0), "x"),
            pr("a", at(1, 0), "x"),
            pr("c", at(2, 0), "x"),
        ]));
        let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_one_item_per_edge() {
        let prs: Vec<PullRequest> = (1..=25)
            .rev()
            .map(|day| pr(&format!("pr {}", day), at(day, 12), "core"))
            .collect();
        let items = present(&response(prs));
        assert_eq!(items.len(), 25);
        assert_eq!(items[0].label, "pr 1");
        assert_eq!(items[24].label, "pr 25");
    }

    #[test]
    fn test_present_is_idempotent() {
        let response = response(vec![pr("b", at(2, 0), "x"), pr("a", at(1, 0), "y")]);
        assert_eq!(present(&response), present(&response));
    }

    #[test]
    fn test_empty_response() {
        assert!(present(&SearchResponse::default()).is_empty());
    }

    #[test]
    fn test_missing_timestamp_sorts_first() {
        let mut undated = pr("undated", at(1, 0), "x");
        undated.created_at = DateTime::<Utc>::default();
        let items = present(&response(vec![pr("dated", at(1, 0), "x"), undated]));
        assert_eq!(items[0].label, "undated");
        assert_eq!(items[0].detail, "1970-01-01 00:00, x");
    }
}
