//! Builds the review prompt document from loaded pull request data.

use camino::Utf8Path;

use super::document::{Document, Node};
use crate::context_files::ContextFile;
use crate::github::{ChangedFile, FileContent, IssueDetails, PullRequestDetails};
use crate::references::LinkedIssues;

/// Task text used when none is configured.
pub const DEFAULT_TASK: &str =
    "Your task is to review this pull request. Do you see any problems there?";

const NO_PATCH: &str = "(no patch data)";

/// Everything the prompt is built from.
#[derive(Debug, Clone, Copy)]
pub struct PromptInput<'input> {
    /// Instruction placed at the start and end of the prompt.
    pub task: &'input str,
    /// The pull request under review.
    pub pull_request: &'input PullRequestDetails,
    /// Issues reached from the pull request.
    pub linked_issues: &'input LinkedIssues,
    /// Local files supplied by the user.
    pub context_files: &'input [ContextFile],
}

/// Decides which changed files have their content embedded.
///
/// Binary content is never embedded. Files whose extension appears in the
/// skip list are also left out; the default list holds `svg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentFilter {
    skipped_extensions: Vec<String>,
}

impl ContentFilter {
    /// Filter skipping files with any of `extensions` (case-insensitive,
    /// without the leading dot).
    #[must_use]
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            skipped_extensions: extensions
                .into_iter()
                .map(|extension| extension.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    /// Whether `filename` is excluded by extension.
    #[must_use]
    pub fn skips(&self, filename: &str) -> bool {
        Utf8Path::new(filename).extension().is_some_and(|extension| {
            self.skipped_extensions
                .iter()
                .any(|skipped| skipped.eq_ignore_ascii_case(extension))
        })
    }

    fn embeddable_text<'file>(&self, file: &'file ChangedFile) -> Option<&'file str> {
        match &file.content {
            Some(FileContent::Text(text)) if !self.skips(&file.filename) => Some(text.as_str()),
            _ => None,
        }
    }
}

impl Default for ContentFilter {
    fn default() -> Self {
        Self::new(["svg"])
    }
}

/// Rendering switches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssemblyOptions {
    /// Embed the content of changed files.
    pub include_content: bool,
    /// Per-file content filter.
    pub filter: ContentFilter,
}

/// Builds the prompt document.
///
/// The task appears first and last. Linked issues keep their resolution
/// order, and the local context section is only present when files were
/// supplied.
#[must_use]
pub fn assemble(input: &PromptInput<'_>, options: &AssemblyOptions) -> Document {
    let mut sections = vec![
        Node::text("task", input.task),
        pull_request_node(input.pull_request, options),
    ];
    sections.extend(input.linked_issues.issues.iter().map(linked_issue_node));
    if !input.context_files.is_empty() {
        sections.push(Node::element(
            "local_context_files",
            input.context_files.iter().map(context_file_node).collect(),
        ));
    }
    sections.push(Node::text("task", input.task));

    Document::new(Node::element("prompt", sections))
}

fn pull_request_node(details: &PullRequestDetails, options: &AssemblyOptions) -> Node {
    let metadata = &details.metadata;
    let mut children = vec![
        Node::text("number", metadata.number.to_string()),
        Node::text("title", metadata.title.clone().unwrap_or_default()),
        Node::text("description", metadata.body.clone().unwrap_or_default()),
    ];
    children.extend(
        details
            .comments
            .iter()
            .map(|comment| Node::text("comment", comment.body.clone().unwrap_or_default())),
    );
    children.extend(
        details
            .commits
            .iter()
            .map(|commit| Node::text("commit", commit.message.clone())),
    );
    children.extend(details.files.iter().map(|file| file_node(file, options)));
    Node::element("pull_request", children)
}

fn file_node(file: &ChangedFile, options: &AssemblyOptions) -> Node {
    let mut children = vec![Node::text("filename", file.filename.clone())];
    if options.include_content
        && let Some(text) = options.filter.embeddable_text(file)
    {
        children.push(Node::text("content", text));
    }
    children.push(Node::text(
        "patch",
        file.patch.clone().unwrap_or_else(|| NO_PATCH.to_owned()),
    ));
    Node::element("file", children)
}

fn linked_issue_node(issue: &IssueDetails) -> Node {
    let metadata = &issue.metadata;
    let mut children = vec![
        Node::text("repo", issue.repository.to_string()),
        Node::text("number", metadata.number.to_string()),
        Node::text("title", metadata.title.clone().unwrap_or_default()),
        Node::text("description", metadata.body.clone().unwrap_or_default()),
    ];
    children.extend(
        issue
            .comments
            .iter()
            .map(|comment| Node::text("comment", comment.body.clone().unwrap_or_default())),
    );
    Node::element("linked_issue", children)
}

fn context_file_node(file: &ContextFile) -> Node {
    Node::element(
        "file",
        vec![
            Node::text("filename", file.path.as_str()),
            Node::text("content", file.content.as_str()),
        ],
    )
}

#[cfg(test)]
#[path = "assembler_tests.rs"]
mod tests;
