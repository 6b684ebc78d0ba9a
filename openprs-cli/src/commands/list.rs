//! List command - search, sort and render open pull requests for Alfred

use anyhow::Context;
use clap::Args;
use openprs_core::{present, Options, OutputSink, Workflow};
use openprs_github::{decode, GitHubClient, GITHUB_GRAPHQL_URL};
use tracing::info;
use url::Url;

/// Options overrides and endpoint, shared by every command
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// GitHub token (overrides GITHUB_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Organization to search (overrides GITHUB_ORGANIZATION)
    #[arg(long, global = true)]
    pub organization: Option<String>,

    /// GraphQL endpoint
    #[arg(long, global = true, env = "GITHUB_GRAPHQL_URL", default_value = GITHUB_GRAPHQL_URL)]
    pub endpoint: Url,
}

impl ListArgs {
    /// Run the pipeline against the process environment
    pub async fn execute<S: OutputSink>(&self, workflow: &mut Workflow<S>) -> anyhow::Result<()> {
        let options = Options::load_with_overrides(self.token.clone(), self.organization.clone());
        self.run(workflow, options).await
    }

    /// Run the pipeline with already resolved options
    ///
    /// Stops at the first failing stage, starting with `options` itself;
    /// nothing is sent to the workflow in that case.
    pub async fn run<S: OutputSink>(
        &self,
        workflow: &mut Workflow<S>,
        options: openprs_core::Result<Options>,
    ) -> anyhow::Result<()> {
        let options = options.context("Cannot get options from environment variables")?;

        let client = GitHubClient::with_endpoint(&options.token, self.endpoint.clone())
            .context("Cannot fetch pull requests")?;
        let body = client
            .fetch_open_pull_requests(&options.organization)
            .await
            .context("Cannot fetch pull requests")?;

        let response = decode(&body).context("Cannot parse github response")?;
        let items = present(&response);

        info!(
            organization = %options.organization,
            endpoint = %client.endpoint(),
            count = items.len(),
            "Listing open pull requests"
        );

        workflow
            .show_pull_requests(items)
            .context("Cannot send feedback")?;

        Ok(())
    }
}

/// Report a failed run to the user
///
/// Returns whether the run succeeded.
pub fn finish<S: OutputSink>(workflow: &mut Workflow<S>, result: anyhow::Result<()>) -> bool {
    let Err(err) = result else {
        return true;
    };

    if let Err(send_err) = workflow.fatal_error(format!("{:#}", err)) {
        eprintln!("Error: {:#}", err);
        eprintln!("Failed to report error to Alfred: {}", send_err);
    }

    false
}
