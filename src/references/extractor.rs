//! Finds pull request and issue references in free-form text.
//!
//! Three surface forms are recognised, tried in this order at each position:
//! a web URL (`https://github.com/owner/repo/pull/12` or `/issues/12`), a
//! qualified reference (`owner/repo#12`), and a bare reference (`#12`).
//! Forms that do not name a repository fall back to the caller's defaults.

use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::github::{IntakeError, RepositorySlug};

/// Host whose web URLs are recognised when no other host is configured.
pub const GITHUB_HOST: &str = "github.com";

const SEGMENT: &str = "[A-Za-z0-9_.-]+";

static GITHUB_EXTRACTOR: LazyLock<Result<ReferenceExtractor, IntakeError>> =
    LazyLock::new(|| ReferenceExtractor::for_host(GITHUB_HOST));

/// Canonical identity of a reference: `owner/repo#number`.
///
/// Two references with equal keys denote the same issue or pull request no
/// matter which surface form produced them. Owner and repository are
/// lowercased, as GitHub treats them case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReferenceKey(String);

impl ReferenceKey {
    /// Key for issue `number` in `slug`.
    #[must_use]
    pub fn new(slug: &RepositorySlug, number: u64) -> Self {
        Self(format!(
            "{}/{}#{number}",
            slug.owner().as_str().to_ascii_lowercase(),
            slug.repository().as_str().to_ascii_lowercase()
        ))
    }

    /// Borrow the key text.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ReferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A parsed pointer to an issue or pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    slug: RepositorySlug,
    number: u64,
    key: ReferenceKey,
}

impl Reference {
    /// Creates a reference and computes its key.
    #[must_use]
    pub fn new(slug: RepositorySlug, number: u64) -> Self {
        let key = ReferenceKey::new(&slug, number);
        Self { slug, number, key }
    }

    /// Repository the reference points into.
    #[must_use]
    pub const fn slug(&self) -> &RepositorySlug {
        &self.slug
    }

    /// Issue or pull request number.
    #[must_use]
    pub const fn number(&self) -> u64 {
        self.number
    }

    /// Canonical key.
    #[must_use]
    pub const fn key(&self) -> &ReferenceKey {
        &self.key
    }
}

/// Scans text for references.
#[derive(Debug, Clone)]
pub struct ReferenceExtractor {
    pattern: Regex,
}

impl ReferenceExtractor {
    /// Builds an extractor whose URL form matches links on `host`.
    ///
    /// `host` may carry a port, e.g. `ghe.example.com:8443`.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::Configuration` when the host cannot be turned
    /// into a pattern.
    pub fn for_host(host: &str) -> Result<Self, IntakeError> {
        let escaped_host = regex::escape(host);
        let pattern = format!(
            "https?://(?i:{escaped_host})/(?P<url_owner>{SEGMENT})/(?P<url_repo>{SEGMENT})/(?:pull|issues)/(?P<url_number>[0-9]+)\
             |(?:(?P<owner>{SEGMENT})/(?P<repo>{SEGMENT}))?#(?P<number>[0-9]+)"
        );
        let compiled = Regex::new(&pattern).map_err(|error| IntakeError::Configuration {
            message: format!("invalid reference pattern for host {host}: {error}"),
        })?;
        Ok(Self { pattern: compiled })
    }

    /// Returns every reference in `text`, in match order.
    ///
    /// Bare `#N` references resolve against `defaults`. Matches whose number
    /// is zero or does not fit in a `u64` are dropped.
    #[must_use]
    pub fn extract(&self, text: &str, defaults: &RepositorySlug) -> Vec<Reference> {
        self.pattern
            .captures_iter(text)
            .filter_map(|captures| reference_from(&captures, defaults))
            .collect()
    }
}

fn reference_from(captures: &Captures<'_>, defaults: &RepositorySlug) -> Option<Reference> {
    let (owner, repo, digits) =
        url_parts(captures).or_else(|| reference_parts(captures, defaults))?;
    let number = digits.parse::<u64>().ok().filter(|value| *value > 0)?;
    let slug = RepositorySlug::new(owner, repo).ok()?;
    Some(Reference::new(slug, number))
}

fn url_parts<'text>(captures: &Captures<'text>) -> Option<(&'text str, &'text str, &'text str)> {
    Some((
        captures.name("url_owner")?.as_str(),
        captures.name("url_repo")?.as_str(),
        captures.name("url_number")?.as_str(),
    ))
}

fn reference_parts<'text>(
    captures: &Captures<'text>,
    defaults: &'text RepositorySlug,
) -> Option<(&'text str, &'text str, &'text str)> {
    let digits = captures.name("number")?.as_str();
    match (captures.name("owner"), captures.name("repo")) {
        (Some(owner), Some(repo)) => Some((owner.as_str(), repo.as_str(), digits)),
        _ => Some((
            defaults.owner().as_str(),
            defaults.repository().as_str(),
            digits,
        )),
    }
}

/// Extracts `github.com` references, defaulting to `default_owner/default_repo`.
///
/// Returns an empty vector when the defaults are blank.
#[must_use]
pub fn extract_references(text: &str, default_owner: &str, default_repo: &str) -> Vec<Reference> {
    let (Ok(extractor), Ok(defaults)) = (
        GITHUB_EXTRACTOR.as_ref(),
        RepositorySlug::new(default_owner, default_repo),
    ) else {
        return Vec::new();
    };
    extractor.extract(text, &defaults)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn keys(references: &[Reference]) -> Vec<&str> {
        references
            .iter()
            .map(|reference| reference.key().as_str())
            .collect()
    }

    #[rstest]
    #[case::bare("see #5", "acme/widgets#5")]
    #[case::qualified("see acme/widgets#5", "acme/widgets#5")]
    #[case::pull_url("see https://github.com/acme/widgets/pull/5", "acme/widgets#5")]
    #[case::issue_url("see http://github.com/acme/widgets/issues/5", "acme/widgets#5")]
    #[case::other_repository("blocked by rust-lang/rust.vim#77", "rust-lang/rust.vim#77")]
    fn recognises_each_surface_form(#[case] text: &str, #[case] expected: &str) {
        let references = extract_references(text, "acme", "widgets");
        assert_eq!(keys(&references), vec![expected]);
    }

    #[rstest]
    fn three_forms_of_the_same_issue_share_a_key() {
        let references = extract_references(
            "#7 and acme/widgets#7 and https://github.com/acme/widgets/issues/7",
            "acme",
            "widgets",
        );
        assert_eq!(references.len(), 3);
        assert!(
            references
                .windows(2)
                .all(|pair| matches!(pair, [a, b] if a.key() == b.key()))
        );
    }

    #[rstest]
    fn keys_ignore_repository_case() {
        let references = extract_references(
            "#7 and Acme/Widgets#7 and https://github.com/ACME/widgets/issues/7",
            "acme",
            "widgets",
        );
        assert_eq!(keys(&references), vec!["acme/widgets#7"; 3]);
        assert_eq!(
            references
                .get(1)
                .map(|reference| reference.slug().to_string()),
            Some(String::from("Acme/Widgets")),
            "slug should keep the casing it was written with"
        );
    }

    #[rstest]
    fn references_are_returned_in_match_order() {
        let references = extract_references(
            "Fixes #3, see other/lib#9 and https://github.com/x/y/pull/1",
            "acme",
            "widgets",
        );
        assert_eq!(
            keys(&references),
            vec!["acme/widgets#3", "other/lib#9", "x/y#1"]
        );
    }

    #[rstest]
    #[case::empty("")]
    #[case::hash_without_digits("# heading and #abc")]
    #[case::zero("#0")]
    #[case::overflow("#99999999999999999999999")]
    #[case::other_host_without_hash("https://gitlab.com/acme/widgets/issues/5")]
    #[case::unicode_digits("#\u{0663}")]
    fn yields_nothing_for_text_without_references(#[case] text: &str) {
        assert!(extract_references(text, "acme", "widgets").is_empty());
    }

    #[rstest]
    fn url_fragment_does_not_produce_extra_reference() {
        let references = extract_references(
            "https://github.com/acme/widgets/pull/12#issuecomment-34",
            "acme",
            "widgets",
        );
        assert_eq!(keys(&references), vec!["acme/widgets#12"]);
    }

    #[rstest]
    fn enterprise_host_urls_are_recognised() {
        let extractor =
            ReferenceExtractor::for_host("ghe.example.com:8443").expect("pattern should build");
        let defaults = RepositorySlug::new("acme", "widgets").expect("slug should build");

        let references = extractor.extract(
            "https://ghe.example.com:8443/team/api/issues/4 and https://github.com/a/b/pull/1",
            &defaults,
        );

        assert_eq!(keys(&references), vec!["team/api#4"]);
    }

    #[rstest]
    fn blank_defaults_yield_nothing() {
        assert!(extract_references("#5", "", "widgets").is_empty());
    }

    #[rstest]
    fn arbitrary_punctuation_does_not_panic() {
        let text = "##//#/#\u{0}#\u{fffd}/#1/#2//https://github.com//pull/#";
        let references = extract_references(text, "acme", "widgets");
        assert!(references.iter().all(|reference| reference.number() > 0));
    }
}
