//! Output destinations for the generated prompt.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use camino::Utf8Path;
use prreview::prompt::write_xml;
use prreview::{Document, IntakeError};

/// Writes `document` as XML to `path`, or to stdout when no path is given.
///
/// # Errors
///
/// Returns [`IntakeError::Io`] when the file cannot be created or written.
pub fn write_document(document: &Document, path: Option<&Utf8Path>) -> Result<(), IntakeError> {
    if let Some(output_path) = path {
        let file = File::create(output_path).map_err(|e| IntakeError::Io {
            message: format!("failed to create output file '{output_path}': {e}"),
        })?;
        let mut writer = BufWriter::new(file);
        write_document_to(&mut writer, document)?;
        tracing::info!("prompt written to {output_path}");
        Ok(())
    } else {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        write_document_to(&mut writer, document)
    }
}

/// Writes `document` as XML to the given writer.
///
/// # Errors
///
/// Returns [`IntakeError::Io`] if writing fails.
pub fn write_document_to<W: Write>(writer: &mut W, document: &Document) -> Result<(), IntakeError> {
    write_xml(writer, document)
}
