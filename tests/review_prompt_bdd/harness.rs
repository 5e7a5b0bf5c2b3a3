//! Mock GitHub endpoints for the review prompt BDD tests.
//!
//! Every pull request lives in `owner/repo` at head revision `abc123`.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use prreview::IntakeError;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::state::{ReviewState, ensure_runtime_and_server};

const API_REPO: &str = "/api/v3/repos/owner/repo";
const HEAD_SHA: &str = "abc123";

fn mount_all(review_state: &ReviewState, mocks: Vec<Mock>) -> Result<(), IntakeError> {
    let runtime = ensure_runtime_and_server(review_state)?;
    review_state
        .server
        .with_ref(|server: &MockServer| {
            for mock in mocks {
                runtime.block_on(mock.mount(server));
            }
        })
        .ok_or_else(|| IntakeError::Api {
            message: "mock server not initialised".to_owned(),
        })
}

fn get_json(route: String, status: u16, body: &Value) -> Mock {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
}

/// Mounts pull request `pr` with one commit, two changed files, and no
/// comments.
pub(crate) fn mount_pull_request(
    review_state: &ReviewState,
    pr: u64,
    description: &str,
) -> Result<(), IntakeError> {
    let pull_request = json!({
        "number": pr,
        "title": "Add answer",
        "body": description,
        "state": "open",
        "user": { "login": "octocat" },
        "head": { "sha": HEAD_SHA }
    });
    let commits = json!([
        { "sha": HEAD_SHA, "commit": { "message": "Add answer" }, "author": { "login": "octocat" } }
    ]);
    let files = json!([
        {
            "filename": "src/lib.rs",
            "status": "added",
            "patch": "@@ -0,0 +1 @@\n+pub fn answer() -> u8 { 42 }"
        },
        {
            "filename": "assets/logo.svg",
            "status": "added",
            "patch": "@@ -0,0 +1 @@\n+<svg/>"
        }
    ]);

    mount_all(
        review_state,
        vec![
            get_json(format!("{API_REPO}/pulls/{pr}"), 200, &pull_request),
            get_json(format!("{API_REPO}/issues/{pr}/comments"), 200, &json!([])),
            get_json(format!("{API_REPO}/pulls/{pr}/commits"), 200, &commits),
            get_json(format!("{API_REPO}/pulls/{pr}/files"), 200, &files),
        ],
    )
}

/// Mounts issue `number` with `description` and no comments.
pub(crate) fn mount_issue(
    review_state: &ReviewState,
    number: u64,
    description: &str,
) -> Result<(), IntakeError> {
    let issue = json!({
        "number": number,
        "title": format!("Issue {number}"),
        "body": description,
        "state": "open"
    });
    mount_all(
        review_state,
        vec![
            get_json(format!("{API_REPO}/issues/{number}"), 200, &issue),
            get_json(format!("{API_REPO}/issues/{number}/comments"), 200, &json!([])),
        ],
    )
}

/// Makes issue `number` answer 404.
pub(crate) fn mount_missing_issue(
    review_state: &ReviewState,
    number: u64,
) -> Result<(), IntakeError> {
    mount_all(
        review_state,
        vec![get_json(
            format!("{API_REPO}/issues/{number}"),
            404,
            &json!({ "message": "Not Found" }),
        )],
    )
}

/// Serves `content` for `file_path` at the head revision.
pub(crate) fn mount_content(
    review_state: &ReviewState,
    file_path: &str,
    content: &str,
) -> Result<(), IntakeError> {
    let body = json!({
        "type": "file",
        "encoding": "base64",
        "content": STANDARD.encode(content)
    });
    let mock = Mock::given(method("GET"))
        .and(path(format!("{API_REPO}/contents/{file_path}")))
        .and(query_param("ref", HEAD_SHA))
        .respond_with(ResponseTemplate::new(200).set_body_json(body));
    mount_all(review_state, vec![mock])
}

/// Rejects the token for pull request `pr`.
pub(crate) fn mount_rejection(review_state: &ReviewState, pr: u64) -> Result<(), IntakeError> {
    mount_all(
        review_state,
        vec![get_json(
            format!("{API_REPO}/pulls/{pr}"),
            401,
            &json!({ "message": "Bad credentials" }),
        )],
    )
}
