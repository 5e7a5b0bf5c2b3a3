//! Prreview library crate: builds AI review prompts for GitHub pull requests.
//!
//! The library parses a pull request reference, loads the pull request and
//! the issues it links to (transitively, up to a limit), and assembles
//! everything into a structured XML prompt.

pub mod config;
pub mod context_files;
pub mod github;
pub mod prompt;
pub mod references;
pub mod review;

pub use config::PrreviewConfig;
pub use context_files::{ContextFile, load_context_files};
pub use github::{
    FileContentIntake, IntakeError, OctocrabGateway, PersonalAccessToken, PullRequestDetails,
    PullRequestIntake, PullRequestLocator,
};
pub use prompt::{AssemblyOptions, Document, PromptInput, assemble, to_xml};
pub use references::{LinkedIssueTraversal, LinkedIssues, ReferenceExtractor, ReferenceKey};
pub use review::{ReviewRequest, build_review_prompt};
