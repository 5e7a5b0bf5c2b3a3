//! Bounded breadth-first resolution of linked issues.

use std::collections::{HashSet, VecDeque};

use tracing::{info, warn};

use super::extractor::{Reference, ReferenceExtractor, ReferenceKey};
use crate::github::{IntakeError, IssueDetails, IssueGateway, PullRequestLocator};

/// Issues reached from the root pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkedIssues {
    /// Resolved issues in resolution order.
    pub issues: Vec<IssueDetails>,
    /// References that could not be resolved and were skipped.
    pub skipped: Vec<ReferenceKey>,
}

/// Walks references outward from the root pull request.
///
/// References found in the root are queued first; references found in each
/// resolved issue are appended behind them. Every key is resolved at most
/// once and the walk stops after `limit` issues have been collected.
pub struct LinkedIssueTraversal<'client, Gateway>
where
    Gateway: IssueGateway,
{
    gateway: &'client Gateway,
    extractor: &'client ReferenceExtractor,
    origin: &'client PullRequestLocator,
    limit: usize,
}

impl<'client, Gateway> LinkedIssueTraversal<'client, Gateway>
where
    Gateway: IssueGateway,
{
    /// Creates a traversal rooted at `origin`.
    #[must_use]
    pub const fn new(
        gateway: &'client Gateway,
        extractor: &'client ReferenceExtractor,
        origin: &'client PullRequestLocator,
        limit: usize,
    ) -> Self {
        Self {
            gateway,
            extractor,
            origin,
            limit,
        }
    }

    /// Resolves issues referenced from `root_text`, transitively.
    ///
    /// `root_key` is treated as already visited so that the pull request is
    /// never fetched as its own linked issue.
    ///
    /// # Errors
    ///
    /// Returns authentication, rate limit, network, and configuration
    /// failures. Missing or inaccessible issues are skipped instead.
    pub async fn traverse(
        &self,
        root_key: &ReferenceKey,
        root_text: &str,
    ) -> Result<LinkedIssues, IntakeError> {
        let defaults = self.origin.slug();
        let mut seen = HashSet::from([root_key.clone()]);
        let mut worklist: VecDeque<Reference> =
            self.extractor.extract(root_text, defaults).into();
        let mut linked = LinkedIssues::default();

        while linked.issues.len() < self.limit {
            let Some(reference) = worklist.pop_front() else {
                break;
            };
            if !seen.insert(reference.key().clone()) {
                continue;
            }

            match self.resolve(&reference).await {
                Ok(issue) => {
                    let discovered = self.extractor.extract(&issue.reference_text(), defaults);
                    worklist.extend(
                        discovered
                            .into_iter()
                            .filter(|candidate| !seen.contains(candidate.key())),
                    );
                    linked.issues.push(issue);
                }
                Err(error) if error.is_soft_resolution_failure() => {
                    warn!("skipping {}: {error}", reference.key());
                    linked.skipped.push(reference.key().clone());
                }
                Err(error) => return Err(error),
            }
        }

        info!(
            "fetched {} linked issues (limit: {})",
            linked.issues.len(),
            self.limit
        );
        Ok(linked)
    }

    async fn resolve(&self, reference: &Reference) -> Result<IssueDetails, IntakeError> {
        let locator = self
            .origin
            .sibling_issue(reference.slug(), reference.number());
        info!("fetching linked issue {locator}");

        let metadata = self.gateway.issue(&locator).await?;
        let comments = self.gateway.issue_comments(&locator).await?;

        Ok(IssueDetails {
            repository: reference.slug().clone(),
            metadata,
            comments,
        })
    }
}
