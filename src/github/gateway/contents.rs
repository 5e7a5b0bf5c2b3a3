//! Octocrab implementation of the file content gateway.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;

use crate::github::error::IntakeError;
use crate::github::locator::PullRequestLocator;
use crate::github::models::{ApiContent, FileContent};

use super::error_mapping::map_octocrab_error;
use super::{ContentGateway, OctocrabGateway};

#[derive(Serialize)]
struct RevisionQuery<'a> {
    #[serde(rename = "ref")]
    revision: &'a str,
}

/// Decodes the base64 payload GitHub returns for a file.
///
/// GitHub wraps the encoded content at 60 columns, so whitespace is dropped
/// before decoding.
pub(super) fn decode_content(path: &str, content: &ApiContent) -> Result<FileContent, IntakeError> {
    match content.encoding.as_deref() {
        Some("base64") => {}
        other => {
            return Err(IntakeError::Api {
                message: format!(
                    "contents of {path} use unsupported encoding {}",
                    other.unwrap_or("(none)")
                ),
            });
        }
    }

    let compact: String = content
        .content
        .as_deref()
        .unwrap_or_default()
        .chars()
        .filter(|ch| !ch.is_ascii_whitespace())
        .collect();

    STANDARD
        .decode(compact)
        .map(|bytes| FileContent::from_bytes(&bytes))
        .map_err(|error| IntakeError::Api {
            message: format!("contents of {path} are not valid base64: {error}"),
        })
}

#[async_trait]
impl ContentGateway for OctocrabGateway {
    async fn file_content(
        &self,
        locator: &PullRequestLocator,
        path: &str,
        revision: &str,
    ) -> Result<FileContent, IntakeError> {
        let route = locator.contents_path(path)?;
        let operation = format!("contents of {path}");
        let content = self
            .client
            .get::<ApiContent, _, _>(route, Some(&RevisionQuery { revision }))
            .await
            .map_err(|error| map_octocrab_error(&operation, &error))?;

        decode_content(path, &content)
    }
}
