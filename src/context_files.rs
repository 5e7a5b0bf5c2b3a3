//! Local files supplied alongside the pull request as extra context.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use tracing::debug;

use crate::github::IntakeError;

/// A local file and its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextFile {
    /// Path as supplied by the user.
    pub path: Utf8PathBuf,
    /// UTF-8 file content.
    pub content: String,
}

/// Reads every file in `paths`, preserving order.
///
/// # Errors
///
/// Returns [`IntakeError::ContextFile`] for the first path that is missing,
/// unreadable, or not valid UTF-8.
pub fn load_context_files<P>(paths: &[P]) -> Result<Vec<ContextFile>, IntakeError>
where
    P: AsRef<Utf8Path>,
{
    paths
        .iter()
        .map(|path| load_context_file(path.as_ref()))
        .collect()
}

fn load_context_file(path: &Utf8Path) -> Result<ContextFile, IntakeError> {
    let context_error = |message: String| IntakeError::ContextFile {
        path: path.to_string(),
        message,
    };

    let file_name = path
        .file_name()
        .ok_or_else(|| context_error("path has no file name".to_owned()))?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));

    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|error| context_error(error.to_string()))?;
    let content = dir
        .read_to_string(file_name)
        .map_err(|error| context_error(error.to_string()))?;

    debug!(path = %path, bytes = content.len(), "loaded context file");
    Ok(ContextFile {
        path: path.to_owned(),
        content,
    })
}
