//! High-level intake facades used by the CLI.

use tracing::{debug, info, warn};

use super::error::IntakeError;
use super::gateway::{ContentGateway, PullRequestGateway};
use super::locator::PullRequestLocator;
use super::models::{ChangedFile, PullRequestDetails};

/// Aggregates pull request metadata, comments, commits, and changed files
/// using a gateway.
pub struct PullRequestIntake<'client, Gateway>
where
    Gateway: PullRequestGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> PullRequestIntake<'client, Gateway>
where
    Gateway: PullRequestGateway,
{
    /// Create a new intake facade using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Load everything the review prompt needs about the target pull request.
    ///
    /// File contents are not loaded here; see [`FileContentIntake`].
    ///
    /// # Errors
    ///
    /// Propagates any failure from the underlying gateway, including GitHub
    /// authentication errors or network problems.
    pub async fn load(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<PullRequestDetails, IntakeError> {
        info!(
            "fetching PR #{} for {}",
            locator.number().get(),
            locator.slug()
        );

        let metadata = self.client.pull_request(locator).await?;
        let comments = self.client.pull_request_comments(locator).await?;
        let commits = self.client.pull_request_commits(locator).await?;
        let files = self.client.pull_request_files(locator).await?;

        debug!(
            comments = comments.len(),
            commits = commits.len(),
            files = files.len(),
            "loaded pull request"
        );

        Ok(PullRequestDetails {
            metadata,
            comments,
            commits,
            files,
        })
    }
}

/// Fills in changed file contents at the pull request head.
pub struct FileContentIntake<'client, Gateway>
where
    Gateway: ContentGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> FileContentIntake<'client, Gateway>
where
    Gateway: ContentGateway,
{
    /// Create a new content loader using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Loads the content of every file in `details` that still exists at the
    /// head commit.
    ///
    /// Removed files are skipped. Files whose content cannot be found are left
    /// without content, as are files that fail with a non-fatal API error.
    ///
    /// # Errors
    ///
    /// Propagates authentication, rate limit, and network failures.
    pub async fn attach(
        &self,
        locator: &PullRequestLocator,
        details: &mut PullRequestDetails,
    ) -> Result<(), IntakeError> {
        let Some(head_sha) = details.metadata.head_sha.clone() else {
            warn!("pull request has no head commit; file contents skipped");
            return Ok(());
        };

        for file in &mut details.files {
            if is_removed(file) {
                continue;
            }

            info!("fetching {}", file.filename);
            match self
                .client
                .file_content(locator, &file.filename, &head_sha)
                .await
            {
                Ok(content) => file.content = Some(content),
                Err(error) if error.is_soft_resolution_failure() => {
                    warn!("content of {} unavailable: {error}", file.filename);
                }
                Err(error) => return Err(error),
            }
        }

        Ok(())
    }
}

fn is_removed(file: &ChangedFile) -> bool {
    file.status.as_deref() == Some("removed")
}
