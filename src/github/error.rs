//! Error types exposed by the GitHub intake layer.

use thiserror::Error;

/// Errors surfaced while parsing input, reading local context, or
/// communicating with GitHub.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntakeError {
    /// The CLI did not include a pull request reference.
    #[error("pull request URL is required (use --pr-url or -u)")]
    MissingPullRequestUrl,

    /// The provided URL could not be parsed.
    #[error("pull request URL is invalid: {0}")]
    InvalidUrl(String),

    /// The pull request path is incomplete.
    #[error("pull request must be given as https://<host>/owner/repo/pull/<number> or owner/repo#<number>")]
    MissingPathSegments,

    /// The pull request number is not a valid integer.
    #[error("pull request number must be a positive integer")]
    InvalidPullRequestNumber,

    /// The authentication token was missing.
    #[error("personal access token is required (set GITHUB_TOKEN or use --token)")]
    MissingToken,

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// The requested issue, pull request, or file does not exist or is not
    /// visible to the token.
    #[error("not found: {resource}")]
    NotFound {
        /// Description of the missing resource.
        resource: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body from GitHub describing the failure.
        message: String,
    },

    /// Rate limit exceeded - the API returned 403/429 with a rate limit
    /// message.
    #[error("GitHub API rate limit exceeded: {message}")]
    RateLimitExceeded {
        /// Error message from GitHub.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// A local context file could not be read.
    #[error("context file {path}: {message}")]
    ContextFile {
        /// Path as supplied on the command line.
        path: String,
        /// Why the file could not be read.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}

impl IntakeError {
    /// Returns true when a failure to resolve one linked issue should be
    /// skipped rather than abort the whole run.
    ///
    /// Missing or inaccessible issues and generic API failures only affect the
    /// reference that triggered them. Credential, rate limit, transport and
    /// local failures are fatal.
    #[must_use]
    pub const fn is_soft_resolution_failure(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Api { .. })
    }
}
