//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.prreview.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `PRREVIEW_PR_URL`, `PRREVIEW_TOKEN`, or
//!    `GITHUB_TOKEN`
//! 4. **Command-line arguments** – `--pr-url`/`-u`, `--token`/`-t`, and so on
//!
//! # Configuration File
//!
//! ```toml
//! pr_url = "https://github.com/owner/repo/pull/123"
//! token = "ghp_example"
//! prompt = "Focus on error handling."
//! all_content = true
//! limit = 10
//! context_files = "docs/architecture.md,CONTRIBUTING.md"
//! output = "prompt.xml"
//! ```

use std::env;

use camino::{Utf8Path, Utf8PathBuf};
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::error::IntakeError;
use crate::prompt::DEFAULT_TASK;

/// Number of linked issues resolved when no limit is configured.
pub const DEFAULT_LINKED_ISSUE_LIMIT: usize = 5;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use prreview::PrreviewConfig;
///
/// let config = PrreviewConfig::load().expect("failed to load configuration");
/// let pr_url = config.require_pr_url().expect("PR URL required");
/// let token = config.resolve_token().expect("token required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "PRREVIEW",
    discovery(
        dotfile_name = ".prreview.toml",
        config_file_name = "prreview.toml",
        app_name = "prreview"
    )
)]
pub struct PrreviewConfig {
    /// Pull request to review, as a URL or `owner/repo#number`.
    ///
    /// Can be provided via:
    /// - CLI: `--pr-url <URL>` or `-u <URL>`
    /// - Environment: `PRREVIEW_PR_URL`
    /// - Config file: `pr_url = "..."`
    #[ortho_config(cli_short = 'u')]
    pub pr_url: Option<String>,

    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `PRREVIEW_TOKEN` or `GITHUB_TOKEN`
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Task placed at the start and end of the prompt.
    #[ortho_config(cli_short = 'p')]
    pub prompt: Option<String>,

    /// Embeds the content of every changed file at the head commit.
    ///
    /// Note: `ortho_config` does not load boolean values from the
    /// environment, so use the CLI flag or the config file.
    #[ortho_config(cli_short = 'a')]
    pub all_content: bool,

    /// Maximum number of linked issues to resolve. Defaults to 5.
    #[ortho_config(cli_short = 'l')]
    pub limit: usize,

    /// Comma-separated local files to append as extra context.
    #[ortho_config(cli_short = 'c')]
    pub context_files: Option<String>,

    /// File to write the prompt to instead of standard output.
    #[ortho_config(cli_short = 'o')]
    pub output: Option<String>,
}

impl Default for PrreviewConfig {
    fn default() -> Self {
        Self {
            pr_url: None,
            token: None,
            prompt: None,
            all_content: false,
            limit: DEFAULT_LINKED_ISSUE_LIMIT,
            context_files: None,
            output: None,
        }
    }
}

impl PrreviewConfig {
    /// Resolves the token from configuration or the `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::MissingToken`] when no token source provides a
    /// value.
    pub fn resolve_token(&self) -> Result<String, IntakeError> {
        self.token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .ok_or(IntakeError::MissingToken)
    }

    /// Returns the pull request reference or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::MissingPullRequestUrl`] when no reference is
    /// configured.
    pub fn require_pr_url(&self) -> Result<&str, IntakeError> {
        self.pr_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(IntakeError::MissingPullRequestUrl)
    }

    /// Task text, falling back to the default review request.
    #[must_use]
    pub fn task_prompt(&self) -> &str {
        self.prompt
            .as_deref()
            .filter(|prompt| !prompt.trim().is_empty())
            .unwrap_or(DEFAULT_TASK)
    }

    /// Context file paths in the order given, with blank entries dropped.
    #[must_use]
    pub fn context_file_paths(&self) -> Vec<Utf8PathBuf> {
        self.context_files
            .as_deref()
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|path| !path.is_empty())
                    .map(Utf8PathBuf::from)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Output file, if one is configured.
    #[must_use]
    pub fn output_path(&self) -> Option<&Utf8Path> {
        self.output
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .map(Utf8Path::new)
    }
}

#[cfg(test)]
mod tests;
