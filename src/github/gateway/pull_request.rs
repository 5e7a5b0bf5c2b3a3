//! Octocrab implementation of the pull request gateway.

use async_trait::async_trait;
use octocrab::Octocrab;
use url::Url;

use crate::github::error::IntakeError;
use crate::github::locator::{PersonalAccessToken, PullRequestLocator};
use crate::github::models::{
    ApiChangedFile, ApiComment, ApiCommit, ApiPullRequest, ChangedFile, Comment, Commit,
    PullRequestMetadata,
};

use super::PullRequestGateway;
use super::client::build_octocrab_client;
use super::error_mapping::map_octocrab_error;
use super::paginated::fetch_all_pages;

/// Octocrab-backed gateway.
///
/// Implements [`PullRequestGateway`], [`super::IssueGateway`] and
/// [`super::ContentGateway`] over one authenticated client.
pub struct OctocrabGateway {
    pub(super) client: Octocrab,
}

impl OctocrabGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an Octocrab client for the given token and pull request locator.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::InvalidUrl` when the base URI cannot be parsed or
    /// `IntakeError::Api` when Octocrab fails to construct a client.
    pub fn for_token(
        token: &PersonalAccessToken,
        locator: &PullRequestLocator,
    ) -> Result<Self, IntakeError> {
        Self::for_api_base(token, locator.api_base())
    }

    /// Builds a gateway rooted at an explicit API base URL.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::InvalidUrl` when the base URI cannot be parsed or
    /// `IntakeError::Api` when Octocrab fails to construct a client.
    pub fn for_api_base(token: &PersonalAccessToken, api_base: &Url) -> Result<Self, IntakeError> {
        let octocrab = build_octocrab_client(token, api_base)?;
        Ok(Self::new(octocrab))
    }
}

#[async_trait]
impl PullRequestGateway for OctocrabGateway {
    async fn pull_request(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<PullRequestMetadata, IntakeError> {
        self.client
            .get::<ApiPullRequest, _, _>(locator.pull_request_path(), None::<&()>)
            .await
            .map(ApiPullRequest::into)
            .map_err(|error| map_octocrab_error("pull request", &error))
    }

    async fn pull_request_comments(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<Vec<Comment>, IntakeError> {
        fetch_all_pages::<ApiComment, Comment>(
            &self.client,
            locator.comments_path(),
            "issue comments",
        )
        .await
    }

    async fn pull_request_commits(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<Vec<Commit>, IntakeError> {
        fetch_all_pages::<ApiCommit, Commit>(
            &self.client,
            locator.commits_path(),
            "pull request commits",
        )
        .await
    }

    async fn pull_request_files(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<Vec<ChangedFile>, IntakeError> {
        fetch_all_pages::<ApiChangedFile, ChangedFile>(
            &self.client,
            locator.files_path(),
            "pull request files",
        )
        .await
    }
}
