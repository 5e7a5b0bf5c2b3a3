//! CLI operation handlers.
//!
//! - [`review_prompt`]: Build the review prompt for a single pull request
//!
//! Output destinations are handled in [`output`].

pub mod output;
pub mod review_prompt;
