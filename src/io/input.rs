use std::path::Path;

use super::DocumentError;

/// Read a transcript document into its ordered paragraph sequence.
///
/// The plain-text container maps one line to one paragraph. Carriage
/// returns are stripped, nothing else is trimmed, and no paragraph is
/// skipped; a trailing newline yields a final empty paragraph, which the
/// noise filter removes downstream.
pub fn read_document_file(path: &Path) -> Result<Vec<String>, DocumentError> {
    let bytes = std::fs::read(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| DocumentError::Malformed {
        path: path.to_path_buf(),
    })?;
    Ok(split_paragraphs(&text))
}

/// Split document text into ordered paragraphs, one per line.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}
