//! Unit tests for the GitHub intake module.

use mockall::predicate::{always, eq};
use rstest::rstest;

use super::{
    ChangedFile, Comment, Commit, FileContent, FileContentIntake, IntakeError,
    MockContentGateway, MockPullRequestGateway, PersonalAccessToken, PullRequestDetails,
    PullRequestIntake, PullRequestLocator, PullRequestMetadata,
};

fn sample_locator() -> PullRequestLocator {
    PullRequestLocator::parse("https://github.com/octo/repo/pull/4")
        .expect("sample locator should parse")
}

#[rstest]
fn parses_standard_github_url_segments() {
    let locator = PullRequestLocator::parse("https://github.com/octo/repo/pull/12/files")
        .expect("should parse standard GitHub URL");
    assert_eq!(locator.owner().as_str(), "octo", "owner mismatch");
    assert_eq!(locator.repository().as_str(), "repo", "repository mismatch");
    assert_eq!(locator.number().get(), 12_u64, "number mismatch");
    assert_eq!(locator.web_host(), "github.com", "web host mismatch");
    assert_eq!(
        locator.api_base().as_str(),
        "https://api.github.com/",
        "api base mismatch"
    );
}

#[rstest]
fn parses_enterprise_url() {
    let locator = PullRequestLocator::parse("https://ghe.example.com:8443/foo/bar/pull/7")
        .expect("should parse enterprise URL");
    assert_eq!(
        locator.api_base().as_str(),
        "https://ghe.example.com:8443/api/v3",
        "enterprise api base mismatch"
    );
    assert_eq!(locator.web_host(), "ghe.example.com:8443");
}

#[rstest]
fn parses_owner_repo_shorthand() {
    let locator =
        PullRequestLocator::parse("acme/widgets#17").expect("should parse shorthand reference");
    assert_eq!(locator.slug().to_string(), "acme/widgets");
    assert_eq!(locator.number().get(), 17);
    assert_eq!(locator.api_base().as_str(), "https://api.github.com/");
}

#[rstest]
#[case::missing_number("https://github.com/octo/repo/pull/", IntakeError::MissingPathSegments)]
#[case::non_numeric(
    "https://github.com/octo/repo/pull/not-a-number",
    IntakeError::InvalidPullRequestNumber
)]
#[case::zero("https://github.com/octo/repo/pull/0", IntakeError::InvalidPullRequestNumber)]
#[case::issues_path("https://github.com/octo/repo/issues/4", IntakeError::MissingPathSegments)]
#[case::pulls_collection("https://github.com/octo/repo/pulls/4", IntakeError::MissingPathSegments)]
#[case::bare_number("#4", IntakeError::MissingPathSegments)]
#[case::shorthand_without_number("acme/widgets#", IntakeError::InvalidPullRequestNumber)]
fn rejects_malformed_pull_request_references(#[case] input: &str, #[case] expected: IntakeError) {
    let result = PullRequestLocator::parse(input);
    assert_eq!(result.err(), Some(expected), "unexpected result for {input}");
}

#[rstest]
fn rejects_invalid_url() {
    let result = PullRequestLocator::parse("octo/repo/pull/4");
    assert!(
        matches!(result, Err(IntakeError::InvalidUrl(_))),
        "expected InvalidUrl for malformed URL, got {result:?}"
    );
}

#[rstest]
fn rejects_empty_token() {
    let result = PersonalAccessToken::new(String::new());
    assert!(
        matches!(result, Err(IntakeError::MissingToken)),
        "expected MissingToken, got {result:?}"
    );
}

#[rstest]
fn contents_path_encodes_each_segment() {
    let locator = sample_locator();
    assert_eq!(
        locator
            .contents_path("docs/a file#1.md")
            .expect("path should encode"),
        "/repos/octo/repo/contents/docs/a%20file%231.md"
    );
}

/// Sets up a mock gateway for pull request intake tests.
fn setup_pull_request_gateway() -> MockPullRequestGateway {
    let mut gateway = MockPullRequestGateway::new();

    gateway
        .expect_pull_request()
        .with(always())
        .times(1)
        .returning(|_| {
            Ok(PullRequestMetadata {
                number: 4,
                title: Some(String::from("demo")),
                body: Some(String::from("fixes #5")),
                head_sha: Some(String::from("abc123")),
                ..Default::default()
            })
        });

    gateway
        .expect_pull_request_comments()
        .with(always())
        .times(1)
        .returning(|_| {
            Ok(vec![
                Comment {
                    id: 1,
                    body: Some(String::from("first")),
                    author: Some(String::from("a")),
                    ..Default::default()
                },
                Comment {
                    id: 2,
                    body: Some(String::from("second")),
                    author: Some(String::from("b")),
                    ..Default::default()
                },
            ])
        });

    gateway
        .expect_pull_request_commits()
        .with(always())
        .times(1)
        .returning(|_| {
            Ok(vec![Commit {
                sha: String::from("abc123"),
                message: String::from("Add demo"),
                author: None,
            }])
        });

    gateway
        .expect_pull_request_files()
        .with(always())
        .times(1)
        .returning(|_| {
            Ok(vec![ChangedFile {
                filename: String::from("src/lib.rs"),
                patch: Some(String::from("@@ -1 +1 @@")),
                ..Default::default()
            }])
        });

    gateway
}

#[tokio::test]
async fn aggregates_pull_request_from_gateway() {
    let locator = sample_locator();
    let gateway = setup_pull_request_gateway();

    let intake = PullRequestIntake::new(&gateway);
    let PullRequestDetails {
        metadata,
        comments,
        commits,
        files,
    } = intake.load(&locator).await.expect("intake should succeed");

    assert_eq!(metadata.number, 4, "number mismatch");
    assert_eq!(metadata.title, Some(String::from("demo")), "title mismatch");
    assert_eq!(comments.len(), 2, "comment count mismatch");
    assert_eq!(
        comments.get(1).and_then(|c| c.body.clone()),
        Some(String::from("second")),
        "second comment body mismatch"
    );
    assert_eq!(commits.len(), 1, "commit count mismatch");
    assert_eq!(files.len(), 1, "file count mismatch");
}

#[tokio::test]
async fn intake_stops_on_authentication_failure() {
    let locator = sample_locator();
    let mut gateway = MockPullRequestGateway::new();
    gateway.expect_pull_request().times(1).returning(|_| {
        Err(IntakeError::Authentication {
            message: String::from("Bad credentials"),
        })
    });
    gateway.expect_pull_request_comments().times(0);

    let result = PullRequestIntake::new(&gateway).load(&locator).await;

    assert!(
        matches!(result, Err(IntakeError::Authentication { .. })),
        "expected Authentication, got {result:?}"
    );
}

fn details_with_files(files: Vec<ChangedFile>) -> PullRequestDetails {
    PullRequestDetails {
        metadata: PullRequestMetadata {
            number: 4,
            head_sha: Some(String::from("abc123")),
            ..Default::default()
        },
        files,
        ..Default::default()
    }
}

fn changed_file(filename: &str, status: &str) -> ChangedFile {
    ChangedFile {
        filename: filename.to_owned(),
        status: Some(status.to_owned()),
        ..Default::default()
    }
}

#[tokio::test]
async fn attaches_contents_and_skips_removed_files() {
    let locator = sample_locator();
    let mut gateway = MockContentGateway::new();
    gateway
        .expect_file_content()
        .with(always(), eq("src/lib.rs"), eq("abc123"))
        .times(1)
        .returning(|_, _, _| Ok(FileContent::Text(String::from("pub fn demo() {}"))));
    gateway
        .expect_file_content()
        .with(always(), eq("gone.rs"), always())
        .times(0);
    let mut details = details_with_files(vec![
        changed_file("src/lib.rs", "modified"),
        changed_file("gone.rs", "removed"),
    ]);

    FileContentIntake::new(&gateway)
        .attach(&locator, &mut details)
        .await
        .expect("contents should attach");

    assert_eq!(
        details.files.first().and_then(|file| file.content.clone()),
        Some(FileContent::Text(String::from("pub fn demo() {}")))
    );
    assert!(details.files.get(1).is_some_and(|file| file.content.is_none()));
}

#[tokio::test]
async fn missing_content_is_left_empty() {
    let locator = sample_locator();
    let mut gateway = MockContentGateway::new();
    gateway.expect_file_content().times(1).returning(|_, path, _| {
        Err(IntakeError::NotFound {
            resource: path.to_owned(),
        })
    });
    let mut details = details_with_files(vec![changed_file("src/new.rs", "added")]);

    FileContentIntake::new(&gateway)
        .attach(&locator, &mut details)
        .await
        .expect("missing content should not fail the run");

    assert!(details.files.first().is_some_and(|file| file.content.is_none()));
}

#[tokio::test]
async fn content_network_failure_is_fatal() {
    let locator = sample_locator();
    let mut gateway = MockContentGateway::new();
    gateway.expect_file_content().times(1).returning(|_, _, _| {
        Err(IntakeError::Network {
            message: String::from("connection reset"),
        })
    });
    let mut details = details_with_files(vec![changed_file("src/lib.rs", "modified")]);

    let result = FileContentIntake::new(&gateway)
        .attach(&locator, &mut details)
        .await;

    assert!(
        matches!(result, Err(IntakeError::Network { .. })),
        "expected Network, got {result:?}"
    );
}
