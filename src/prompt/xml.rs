//! XML serialisation of prompt documents.
//!
//! Output is indented by two spaces per level. Text is escaped, carriage
//! returns are written as `&#13;` so parsers do not fold them, and any
//! character XML 1.0 cannot carry is replaced with U+FFFD, so every document
//! serialises to well-formed XML.

use std::io::Write;

use super::document::{Document, Node, NodeContent};
use crate::github::IntakeError;

const DECLARATION: &str = "<?xml version=\"1.0\"?>\n";
const INDENT: &str = "  ";

/// Serialises `document` to an XML string.
#[must_use]
pub fn to_xml(document: &Document) -> String {
    let mut out = String::from(DECLARATION);
    render(document.root(), 0, &mut out);
    out
}

/// Writes `document` as XML to `writer`.
///
/// # Errors
///
/// Returns [`IntakeError::Io`] if writing fails.
pub fn write_xml<W: Write>(writer: &mut W, document: &Document) -> Result<(), IntakeError> {
    writer
        .write_all(to_xml(document).as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|error| IntakeError::Io {
            message: error.to_string(),
        })
}

fn render(node: &Node, depth: usize, out: &mut String) {
    let label = node.label();
    push_indent(depth, out);
    match node.content() {
        NodeContent::Text(text) if !text.is_empty() => {
            open_tag(label, out);
            escape_into(text, out);
            close_tag(label, out);
        }
        NodeContent::Children(children) if !children.is_empty() => {
            open_tag(label, out);
            out.push('\n');
            for child in children {
                render(child, depth + 1, out);
            }
            push_indent(depth, out);
            close_tag(label, out);
        }
        NodeContent::Text(_) | NodeContent::Children(_) => {
            out.push('<');
            out.push_str(label);
            out.push_str("/>");
        }
    }
    out.push('\n');
}

fn push_indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn open_tag(label: &str, out: &mut String) {
    out.push('<');
    out.push_str(label);
    out.push('>');
}

fn close_tag(label: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(label);
    out.push('>');
}

fn escape_into(text: &str, out: &mut String) {
    for character in text.chars() {
        match character {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\r' => out.push_str("&#13;"),
            other if is_xml_char(other) => out.push(other),
            _ => out.push(char::REPLACEMENT_CHARACTER),
        }
    }
}

/// `Char` production of XML 1.0. Surrogates cannot occur in a `char`.
const fn is_xml_char(character: char) -> bool {
    matches!(
        character,
        '\t' | '\n'
            | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

#[cfg(test)]
#[path = "xml_tests.rs"]
mod tests;
