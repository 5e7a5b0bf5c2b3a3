//! Review prompt generation for a single pull request.

use prreview::{
    IntakeError, OctocrabGateway, PersonalAccessToken, PrreviewConfig, PullRequestLocator,
    ReviewRequest, build_review_prompt, load_context_files,
};

use super::output::write_document;

/// Builds the review prompt described by `config` and writes it out.
///
/// Context files are read before any network request so that a bad path
/// fails fast.
///
/// # Errors
///
/// Returns [`IntakeError::MissingPullRequestUrl`] or
/// [`IntakeError::MissingToken`] when required configuration is absent, and
/// propagates parsing, file, and GitHub failures.
pub async fn run(config: &PrreviewConfig) -> Result<(), IntakeError> {
    let pr_url = config.require_pr_url()?;
    let locator = PullRequestLocator::parse(pr_url)?;
    let token = PersonalAccessToken::new(config.resolve_token()?)?;
    let context_files = load_context_files(&config.context_file_paths())?;

    let gateway = OctocrabGateway::for_token(&token, &locator)?;
    let request = ReviewRequest {
        task: config.task_prompt(),
        include_content: config.all_content,
        limit: config.limit,
        context_files: &context_files,
    };
    let document = build_review_prompt(&gateway, &locator, &request).await?;

    write_document(&document, config.output_path())
}
