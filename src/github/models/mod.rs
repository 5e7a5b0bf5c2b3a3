//! Data models representing pull requests, issues, and their discussion.
//!
//! This module contains domain models for data returned by the GitHub API.
//! Types prefixed with `Api` are internal deserialisation targets that convert
//! into public domain types.

use serde::Deserialize;

use super::locator::RepositorySlug;

/// Pull request metadata used to build the review prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestMetadata {
    /// Pull request number.
    pub number: u64,
    /// Title of the pull request.
    pub title: Option<String>,
    /// Description (body) of the pull request.
    pub body: Option<String>,
    /// State (e.g. open, closed).
    pub state: Option<String>,
    /// HTML URL for displaying to a user.
    pub html_url: Option<String>,
    /// Author login if present.
    pub author: Option<String>,
    /// Commit SHA at the head of the pull request branch.
    pub head_sha: Option<String>,
    /// Creation timestamp (ISO 8601 format).
    pub created_at: Option<String>,
    /// Last update timestamp (ISO 8601 format).
    pub updated_at: Option<String>,
}

/// Issue comment details, shared by pull requests and issues.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comment {
    /// Comment identifier.
    pub id: u64,
    /// Comment body.
    pub body: Option<String>,
    /// Author login.
    pub author: Option<String>,
    /// Creation timestamp (ISO 8601 format).
    pub created_at: Option<String>,
}

/// A commit included in a pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Commit {
    /// Commit SHA.
    pub sha: String,
    /// Full commit message.
    pub message: String,
    /// Author login, falling back to the git author name.
    pub author: Option<String>,
}

/// Content of a changed file at the pull request head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// UTF-8 (or lossily decoded) text.
    Text(String),
    /// Content that contains NUL bytes and is not rendered.
    Binary,
}

impl FileContent {
    /// Classifies decoded bytes as text or binary.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        if bytes.contains(&0) {
            Self::Binary
        } else {
            Self::Text(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}

/// A file changed by a pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangedFile {
    /// Path of the file in the repository.
    pub filename: String,
    /// Change status (added, modified, removed, renamed).
    pub status: Option<String>,
    /// Unified diff for the file, absent for binary or very large changes.
    pub patch: Option<String>,
    /// File content at the head commit when it was requested and found.
    pub content: Option<FileContent>,
}

/// Combined pull request details.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestDetails {
    /// PR metadata.
    pub metadata: PullRequestMetadata,
    /// All issue comments attached to the PR.
    pub comments: Vec<Comment>,
    /// Commits in the order GitHub lists them.
    pub commits: Vec<Commit>,
    /// Changed files.
    pub files: Vec<ChangedFile>,
}

impl PullRequestDetails {
    /// Description followed by every comment body, one per line.
    ///
    /// This is the text scanned for references to other issues.
    #[must_use]
    pub fn reference_text(&self) -> String {
        join_reference_text(self.metadata.body.as_deref(), &self.comments)
    }
}

/// Issue metadata. Pull requests fetched through the issues API also use it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueMetadata {
    /// Issue number.
    pub number: u64,
    /// Title of the issue.
    pub title: Option<String>,
    /// Description (body) of the issue.
    pub body: Option<String>,
    /// State (e.g. open, closed).
    pub state: Option<String>,
    /// HTML URL for displaying to a user.
    pub html_url: Option<String>,
    /// Author login if present.
    pub author: Option<String>,
    /// Creation timestamp (ISO 8601 format).
    pub created_at: Option<String>,
    /// Last update timestamp (ISO 8601 format).
    pub updated_at: Option<String>,
    /// Whether the issue is actually a pull request.
    pub is_pull_request: bool,
}

/// A resolved issue together with its repository and comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueDetails {
    /// Repository the issue belongs to.
    pub repository: RepositorySlug,
    /// Issue metadata.
    pub metadata: IssueMetadata,
    /// All comments on the issue.
    pub comments: Vec<Comment>,
}

impl IssueDetails {
    /// Description followed by every comment body, one per line.
    #[must_use]
    pub fn reference_text(&self) -> String {
        join_reference_text(self.metadata.body.as_deref(), &self.comments)
    }
}

fn join_reference_text(body: Option<&str>, comments: &[Comment]) -> String {
    std::iter::once(body.unwrap_or_default())
        .chain(
            comments
                .iter()
                .map(|comment| comment.body.as_deref().unwrap_or_default()),
        )
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiPullRequest {
    pub(super) number: u64,
    pub(super) title: Option<String>,
    pub(super) body: Option<String>,
    pub(super) state: Option<String>,
    pub(super) html_url: Option<String>,
    pub(super) user: Option<ApiUser>,
    pub(super) head: Option<ApiBranch>,
    pub(super) created_at: Option<String>,
    pub(super) updated_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiBranch {
    pub(super) sha: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiComment {
    pub(super) id: u64,
    pub(super) body: Option<String>,
    pub(super) user: Option<ApiUser>,
    pub(super) created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiUser {
    pub(super) login: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiCommit {
    pub(super) sha: String,
    pub(super) commit: ApiCommitDetail,
    pub(super) author: Option<ApiUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiCommitDetail {
    #[serde(default)]
    pub(super) message: String,
    pub(super) author: Option<ApiGitAuthor>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiGitAuthor {
    pub(super) name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiChangedFile {
    pub(super) filename: String,
    pub(super) status: Option<String>,
    pub(super) patch: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiIssue {
    pub(super) number: u64,
    pub(super) title: Option<String>,
    pub(super) body: Option<String>,
    pub(super) state: Option<String>,
    pub(super) html_url: Option<String>,
    pub(super) user: Option<ApiUser>,
    pub(super) created_at: Option<String>,
    pub(super) updated_at: Option<String>,
    pub(super) pull_request: Option<serde_json::Value>,
}

/// Contents API response for a single file.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiContent {
    pub(super) content: Option<String>,
    pub(super) encoding: Option<String>,
}

impl From<ApiPullRequest> for PullRequestMetadata {
    fn from(value: ApiPullRequest) -> Self {
        Self {
            number: value.number,
            title: value.title,
            body: value.body,
            state: value.state,
            html_url: value.html_url,
            author: value.user.and_then(|user| user.login),
            head_sha: value.head.and_then(|head| head.sha),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<ApiComment> for Comment {
    fn from(value: ApiComment) -> Self {
        Self {
            id: value.id,
            body: value.body,
            author: value.user.and_then(|user| user.login),
            created_at: value.created_at,
        }
    }
}

impl From<ApiCommit> for Commit {
    fn from(value: ApiCommit) -> Self {
        let git_author = value.commit.author.and_then(|author| author.name);
        Self {
            sha: value.sha,
            message: value.commit.message,
            author: value.author.and_then(|user| user.login).or(git_author),
        }
    }
}

impl From<ApiChangedFile> for ChangedFile {
    fn from(value: ApiChangedFile) -> Self {
        Self {
            filename: value.filename,
            status: value.status,
            patch: value.patch,
            content: None,
        }
    }
}

impl From<ApiIssue> for IssueMetadata {
    fn from(value: ApiIssue) -> Self {
        Self {
            number: value.number,
            title: value.title,
            body: value.body,
            state: value.state,
            html_url: value.html_url,
            author: value.user.and_then(|user| user.login),
            created_at: value.created_at,
            updated_at: value.updated_at,
            is_pull_request: value.pull_request.is_some(),
        }
    }
}
