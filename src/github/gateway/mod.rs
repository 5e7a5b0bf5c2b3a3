//! Gateways for loading pull requests, issues, and file contents through
//! Octocrab.
//!
//! This module provides trait-based gateways for communicating with the GitHub
//! API. The trait-based design enables mocking in tests while the Octocrab
//! implementation handles real HTTP requests.

mod client;
mod contents;
mod error_mapping;
mod issue;
mod paginated;
mod pull_request;

pub use pull_request::OctocrabGateway;

use async_trait::async_trait;

use crate::github::error::IntakeError;
use crate::github::locator::{IssueLocator, PullRequestLocator};
use crate::github::models::{
    ChangedFile, Comment, Commit, FileContent, IssueMetadata, PullRequestMetadata,
};

/// Gateway that can load pull request data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PullRequestGateway: Send + Sync {
    /// Fetch the pull request metadata.
    async fn pull_request(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<PullRequestMetadata, IntakeError>;

    /// Fetch all issue comments for the pull request.
    async fn pull_request_comments(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<Vec<Comment>, IntakeError>;

    /// Fetch all commits in the pull request.
    async fn pull_request_commits(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<Vec<Commit>, IntakeError>;

    /// Fetch all files changed by the pull request.
    async fn pull_request_files(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<Vec<ChangedFile>, IntakeError>;
}

/// Gateway that resolves referenced issues and pull requests.
///
/// A reference that does not exist, or that the token cannot see, is reported
/// as [`IntakeError::NotFound`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IssueGateway: Send + Sync {
    /// Fetch the issue metadata.
    async fn issue(&self, locator: &IssueLocator) -> Result<IssueMetadata, IntakeError>;

    /// Fetch all comments on the issue.
    async fn issue_comments(&self, locator: &IssueLocator) -> Result<Vec<Comment>, IntakeError>;
}

/// Gateway that reads repository file contents at a given revision.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentGateway: Send + Sync {
    /// Fetch the content of `path` at `revision` in the pull request's
    /// repository.
    async fn file_content(
        &self,
        locator: &PullRequestLocator,
        path: &str,
        revision: &str,
    ) -> Result<FileContent, IntakeError>;
}
