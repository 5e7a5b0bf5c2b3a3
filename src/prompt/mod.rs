//! Review prompt construction.
//!
//! [`assemble`] turns the loaded pull request, its linked issues, and any
//! local context files into a [`Document`]; [`to_xml`] and [`write_xml`]
//! serialise it.

pub mod assembler;
pub mod document;
pub mod xml;

pub use assembler::{AssemblyOptions, ContentFilter, DEFAULT_TASK, PromptInput, assemble};
pub use document::{Document, Node, NodeContent};
pub use xml::{to_xml, write_xml};
