//! openprs GitHub - GitHub GraphQL access for openprs
//!
//! This crate builds the open pull request search, sends it to the GraphQL
//! API, and decodes the response into the core data model.

mod client;
mod decode;
mod error;
pub mod graphql;

pub use client::{GitHubClient, USER_AGENT};
pub use decode::decode;
pub use error::{Error, Result};
pub use graphql::{GraphQLRequest, GITHUB_GRAPHQL_URL};
