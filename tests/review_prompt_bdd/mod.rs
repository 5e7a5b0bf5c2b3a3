//! Support modules for the review prompt BDD tests.

pub(crate) mod harness;
pub(crate) mod state;

pub(crate) use harness::{
    mount_content, mount_issue, mount_missing_issue, mount_pull_request, mount_rejection,
};
pub(crate) use state::{ReviewState, ensure_runtime_and_server};
