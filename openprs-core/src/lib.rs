//! openprs Core - options, data model and presentation for openprs
//!
//! This crate holds everything between the GitHub response and the Alfred
//! Script Filter output: the decoded search model, ordering and formatting of
//! pull requests, and the workflow context that sends feedback.

pub mod config;
pub mod error;
pub mod feedback;
pub mod model;
pub mod present;
pub mod workflow;

pub use config::{Options, ORGANIZATION_VAR, TOKEN_VAR};
pub use error::{Error, Result};
pub use feedback::{Feedback, Icon, Item};
pub use model::{Edge, GraphQLError, PullRequest, Repository, Search, SearchData, SearchResponse};
pub use present::{format_detail, present, DisplayItem};
pub use workflow::{OutputSink, ScriptFilterSink, Workflow, EMPTY_SUBTITLE, EMPTY_TITLE};
