//! Octocrab implementation of the issue gateway used to resolve references.

use async_trait::async_trait;

use crate::github::error::IntakeError;
use crate::github::locator::IssueLocator;
use crate::github::models::{ApiComment, ApiIssue, Comment, IssueMetadata};

use super::error_mapping::map_octocrab_error;
use super::paginated::fetch_all_pages;
use super::{IssueGateway, OctocrabGateway};

#[async_trait]
impl IssueGateway for OctocrabGateway {
    async fn issue(&self, locator: &IssueLocator) -> Result<IssueMetadata, IntakeError> {
        self.client
            .get::<ApiIssue, _, _>(locator.issue_path(), None::<&()>)
            .await
            .map(ApiIssue::into)
            .map_err(|error| map_octocrab_error(&format!("issue {locator}"), &error))
    }

    async fn issue_comments(&self, locator: &IssueLocator) -> Result<Vec<Comment>, IntakeError> {
        fetch_all_pages::<ApiComment, Comment>(
            &self.client,
            locator.comments_path(),
            &format!("comments of issue {locator}"),
        )
        .await
    }
}
