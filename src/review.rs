//! End-to-end construction of a review prompt for one pull request.

use tracing::info;

use crate::context_files::ContextFile;
use crate::github::{
    ContentGateway, FileContentIntake, IntakeError, IssueGateway, PullRequestGateway,
    PullRequestIntake, PullRequestLocator,
};
use crate::prompt::{AssemblyOptions, ContentFilter, Document, PromptInput, assemble};
use crate::references::{LinkedIssueTraversal, ReferenceExtractor, ReferenceKey};

/// Settings that shape a review prompt.
#[derive(Debug, Clone, Copy)]
pub struct ReviewRequest<'request> {
    /// Task placed at the start and end of the prompt.
    pub task: &'request str,
    /// Embed changed file contents at the head commit.
    pub include_content: bool,
    /// Maximum number of linked issues to resolve.
    pub limit: usize,
    /// Local files appended as extra context.
    pub context_files: &'request [ContextFile],
}

/// Loads the pull request at `locator`, resolves the issues it links to,
/// and assembles the prompt document.
///
/// # Errors
///
/// Returns any fatal intake failure. Linked issues that cannot be found are
/// skipped rather than reported.
pub async fn build_review_prompt<Gateway>(
    gateway: &Gateway,
    locator: &PullRequestLocator,
    request: &ReviewRequest<'_>,
) -> Result<Document, IntakeError>
where
    Gateway: PullRequestGateway + IssueGateway + ContentGateway,
{
    let mut details = PullRequestIntake::new(gateway).load(locator).await?;
    if request.include_content {
        FileContentIntake::new(gateway)
            .attach(locator, &mut details)
            .await?;
    }

    let extractor = ReferenceExtractor::for_host(locator.web_host())?;
    let root_key = ReferenceKey::new(locator.slug(), locator.number().get());
    let linked_issues = LinkedIssueTraversal::new(gateway, &extractor, locator, request.limit)
        .traverse(&root_key, &details.reference_text())
        .await?;
    if !linked_issues.skipped.is_empty() {
        info!("skipped {} unresolvable references", linked_issues.skipped.len());
    }

    let input = PromptInput {
        task: request.task,
        pull_request: &details,
        linked_issues: &linked_issues,
        context_files: request.context_files,
    };
    let options = AssemblyOptions {
        include_content: request.include_content,
        filter: ContentFilter::default(),
    };
    Ok(assemble(&input, &options))
}
