//! Options for a single openprs run
//!
//! Values are resolved with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (GITHUB_TOKEN, GITHUB_ORGANIZATION)
//!
//! Both values are required. There is no config file.

use tracing::debug;

use crate::{Error, Result};

/// Environment variable holding the bearer token
pub const TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Environment variable holding the organization to search
pub const ORGANIZATION_VAR: &str = "GITHUB_ORGANIZATION";

/// Resolved options, immutable once loaded
#[derive(Clone, PartialEq, Eq)]
pub struct Options {
    /// GitHub token sent as `Authorization: bearer <token>`
    pub token: String,

    /// Organization whose open pull requests are listed
    pub organization: String,
}

impl Options {
    /// Load options from the process environment
    pub fn load() -> Result<Self> {
        Self::load_with_overrides(None, None)
    }

    /// Load options from the process environment with CLI overrides applied
    ///
    /// Priority: CLI > env
    pub fn load_with_overrides(
        token: Option<String>,
        organization: Option<String>,
    ) -> Result<Self> {
        Self::load_from(|name| std::env::var(name).ok(), token, organization)
    }

    /// Load options through an arbitrary variable lookup
    ///
    /// Fails if either value is absent, or empty after trimming.
    pub fn load_from<F>(
        lookup: F,
        token: Option<String>,
        organization: Option<String>,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = required(TOKEN_VAR, token.or_else(|| lookup(TOKEN_VAR)))?;
        let organization = required(
            ORGANIZATION_VAR,
            organization.or_else(|| lookup(ORGANIZATION_VAR)),
        )?;

        debug!(organization = %organization, "Options loaded");

        Ok(Self { token, organization })
    }

    /// Token with everything but the last four characters masked
    pub fn redacted_token(&self) -> String {
        let chars: Vec<char> = self.token.chars().collect();
        if chars.len() <= 4 {
            return "*".repeat(chars.len());
        }
        let visible: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{}", "*".repeat(chars.len() - 4), visible)
    }
}

impl std::fmt::Debug for Options {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Options")
            .field("token", &self.redacted_token())
            .field("organization", &self.organization)
            .finish()
    }
}

fn required(name: &str, value: Option<String>) -> Result<String> {
    let value = value.ok_or_else(|| Error::MissingEnv(name.to_string()))?;
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::Config(format!("{} is set but empty", name)));
    }
    Ok(value.to_string())
}
