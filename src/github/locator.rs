//! URL parsing and identity wrappers for pull request and issue intake.

use std::fmt;

use url::Url;

use super::error::IntakeError;

const GITHUB_COM: &str = "github.com";
const GITHUB_API: &str = "https://api.github.com";

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    pub(crate) fn new(value: &str) -> Result<Self, IntakeError> {
        if value.is_empty() {
            return Err(IntakeError::MissingPathSegments);
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryName(String);

impl RepositoryName {
    pub(crate) fn new(value: &str) -> Result<Self, IntakeError> {
        if value.is_empty() {
            return Err(IntakeError::MissingPathSegments);
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// An `owner/repo` pair.
///
/// Used as the default repository when a reference such as `#12` does not
/// name one explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositorySlug {
    owner: RepositoryOwner,
    repository: RepositoryName,
}

impl RepositorySlug {
    /// Creates a slug from owner and repository strings.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::MissingPathSegments` when either part is empty.
    pub fn new(owner: &str, repository: &str) -> Result<Self, IntakeError> {
        Ok(Self {
            owner: RepositoryOwner::new(owner)?,
            repository: RepositoryName::new(repository)?,
        })
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }
}

impl fmt::Display for RepositorySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner.as_str(), self.repository.as_str())
    }
}

/// Pull request number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PullRequestNumber(u64);

impl PullRequestNumber {
    pub(crate) const fn new(value: u64) -> Result<Self, IntakeError> {
        if value == 0 {
            return Err(IntakeError::InvalidPullRequestNumber);
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, IntakeError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(IntakeError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

/// Derives the GitHub API base URL from a host string.
fn derive_api_base_from_host(
    scheme: &str,
    host: &str,
    port: Option<u16>,
) -> Result<Url, IntakeError> {
    if host.eq_ignore_ascii_case(GITHUB_COM) {
        Url::parse(GITHUB_API).map_err(|error| IntakeError::InvalidUrl(error.to_string()))
    } else {
        let authority = if host.contains(':') {
            format!("[{host}]")
        } else {
            host.to_owned()
        };
        let mut api_url = Url::parse(&format!("{scheme}://{authority}"))
            .map_err(|error| IntakeError::InvalidUrl(error.to_string()))?;

        api_url
            .set_port(port)
            .map_err(|()| IntakeError::InvalidUrl("invalid port".to_owned()))?;
        api_url.set_path("api/v3");
        Ok(api_url)
    }
}

/// Host (and port, when not the default) that web URLs for this repository
/// use, e.g. `github.com` or `ghe.example.com:8443`.
fn web_host(parsed: &Url, host: &str) -> String {
    parsed
        .port()
        .map_or_else(|| host.to_owned(), |port| format!("{host}:{port}"))
}

/// Parsed pull request reference and derived API base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestLocator {
    api_base: Url,
    web_host: String,
    slug: RepositorySlug,
    number: PullRequestNumber,
}

impl PullRequestLocator {
    /// Parses a pull request reference.
    ///
    /// Accepts either a web URL in the form
    /// `https://<host>/<owner>/<repo>/pull/<number>` or the shorthand
    /// `<owner>/<repo>#<number>`, which always targets `github.com`.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::InvalidUrl` when URL parsing fails,
    /// `MissingPathSegments` when the path is not `/owner/repo/pull/<number>`
    /// (or the shorthand lacks owner or repository), and
    /// `InvalidPullRequestNumber` when the number is not a positive integer.
    pub fn parse(input: &str) -> Result<Self, IntakeError> {
        let trimmed = input.trim();
        if !trimmed.contains("://")
            && let Some((slug, number)) = trimmed.split_once('#')
        {
            return Self::parse_shorthand(slug, number);
        }

        Self::parse_url(trimmed)
    }

    fn parse_shorthand(slug: &str, number: &str) -> Result<Self, IntakeError> {
        let (owner, repository) = slug
            .split_once('/')
            .ok_or(IntakeError::MissingPathSegments)?;

        Ok(Self {
            api_base: Url::parse(GITHUB_API)
                .map_err(|error| IntakeError::InvalidUrl(error.to_string()))?,
            web_host: GITHUB_COM.to_owned(),
            slug: RepositorySlug::new(owner, repository)?,
            number: parse_number(number)?,
        })
    }

    fn parse_url(input: &str) -> Result<Self, IntakeError> {
        let parsed =
            Url::parse(input).map_err(|error| IntakeError::InvalidUrl(error.to_string()))?;

        let mut segments = parsed
            .path_segments()
            .ok_or(IntakeError::MissingPathSegments)?;

        let owner_segment = segments.next().ok_or(IntakeError::MissingPathSegments)?;
        let repository_segment = segments.next().ok_or(IntakeError::MissingPathSegments)?;
        let marker = segments.next().ok_or(IntakeError::MissingPathSegments)?;
        let number_segment = segments.next().ok_or(IntakeError::MissingPathSegments)?;

        if marker != "pull" {
            return Err(IntakeError::MissingPathSegments);
        }

        if number_segment.is_empty() {
            return Err(IntakeError::MissingPathSegments);
        }

        let slug = RepositorySlug::new(owner_segment, repository_segment)?;
        let number = parse_number(number_segment)?;

        let host = parsed
            .host_str()
            .ok_or_else(|| IntakeError::InvalidUrl("URL must include a host".to_owned()))?;
        let api_base = derive_api_base_from_host(parsed.scheme(), host, parsed.port())?;

        Ok(Self {
            api_base,
            web_host: web_host(&parsed, host),
            slug,
            number,
        })
    }

    /// API base URL derived from the pull request host.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Host that web links into this repository use.
    #[must_use]
    pub fn web_host(&self) -> &str {
        &self.web_host
    }

    /// Repository the pull request belongs to.
    #[must_use]
    pub const fn slug(&self) -> &RepositorySlug {
        &self.slug
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        self.slug.owner()
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        self.slug.repository()
    }

    /// Pull request number.
    #[must_use]
    pub const fn number(&self) -> PullRequestNumber {
        self.number
    }

    /// Locator for another issue or pull request served by the same API.
    #[must_use]
    pub fn sibling_issue(&self, slug: &RepositorySlug, number: u64) -> IssueLocator {
        IssueLocator {
            api_base: self.api_base.clone(),
            slug: slug.clone(),
            number,
        }
    }

    pub(crate) fn pull_request_path(&self) -> String {
        format!("/repos/{}/pulls/{}", self.slug, self.number.get())
    }

    pub(crate) fn comments_path(&self) -> String {
        format!("/repos/{}/issues/{}/comments", self.slug, self.number.get())
    }

    pub(crate) fn commits_path(&self) -> String {
        format!("/repos/{}/pulls/{}/commits", self.slug, self.number.get())
    }

    pub(crate) fn files_path(&self) -> String {
        format!("/repos/{}/pulls/{}/files", self.slug, self.number.get())
    }

    /// Contents API path for a file, with each path segment percent-encoded.
    pub(crate) fn contents_path(&self, file_path: &str) -> Result<String, IntakeError> {
        let mut scratch = Url::parse("http://localhost/")
            .map_err(|error| IntakeError::InvalidUrl(error.to_string()))?;
        scratch
            .path_segments_mut()
            .map_err(|()| IntakeError::InvalidUrl(format!("cannot encode path {file_path}")))?
            .pop_if_empty()
            .extend([
                "repos",
                self.slug.owner().as_str(),
                self.slug.repository().as_str(),
                "contents",
            ])
            .extend(file_path.split('/').filter(|segment| !segment.is_empty()));
        Ok(scratch.path().to_owned())
    }
}

fn parse_number(segment: &str) -> Result<PullRequestNumber, IntakeError> {
    segment
        .parse::<u64>()
        .map_err(|_| IntakeError::InvalidPullRequestNumber)
        .and_then(PullRequestNumber::new)
}

/// Address of an issue (or pull request viewed as an issue).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueLocator {
    api_base: Url,
    slug: RepositorySlug,
    number: u64,
}

impl IssueLocator {
    /// API base URL used for requests.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Repository the issue belongs to.
    #[must_use]
    pub const fn slug(&self) -> &RepositorySlug {
        &self.slug
    }

    /// Issue number.
    #[must_use]
    pub const fn number(&self) -> u64 {
        self.number
    }

    pub(crate) fn issue_path(&self) -> String {
        format!("/repos/{}/issues/{}", self.slug, self.number)
    }

    pub(crate) fn comments_path(&self) -> String {
        format!("/repos/{}/issues/{}/comments", self.slug, self.number)
    }
}

impl fmt::Display for IssueLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.slug, self.number)
    }
}
