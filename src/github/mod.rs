//! GitHub pull request and issue intake.
//!
//! This module wraps Octocrab to parse pull request references, validate
//! personal access tokens, and retrieve pull requests, referenced issues, and
//! file contents. Errors are mapped into user-friendly variants so that callers
//! can surface precise failures without exposing Octocrab internals.

pub mod error;
pub mod gateway;
pub mod intake;
pub mod locator;
pub mod models;

pub use error::IntakeError;
pub use gateway::{ContentGateway, IssueGateway, OctocrabGateway, PullRequestGateway};
pub use intake::{FileContentIntake, PullRequestIntake};
pub use locator::{
    IssueLocator, PersonalAccessToken, PullRequestLocator, PullRequestNumber, RepositoryName,
    RepositoryOwner, RepositorySlug,
};
pub use models::{
    ChangedFile, Comment, Commit, FileContent, IssueDetails, IssueMetadata, PullRequestDetails,
    PullRequestMetadata,
};

#[cfg(test)]
pub use gateway::{MockContentGateway, MockIssueGateway, MockPullRequestGateway};

#[cfg(test)]
mod tests;
