//! Cross-reference discovery and linked issue resolution.
//!
//! The extractor turns pull request and issue text into references; the
//! traversal resolves them breadth-first through an [`IssueGateway`],
//! feeding references found in each resolved issue back into the worklist.
//!
//! [`IssueGateway`]: crate::github::IssueGateway

pub mod extractor;
pub mod traversal;

pub use extractor::{
    GITHUB_HOST, Reference, ReferenceExtractor, ReferenceKey, extract_references,
};
pub use traversal::{LinkedIssueTraversal, LinkedIssues};
