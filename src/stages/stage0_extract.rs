use unicode_normalization::UnicodeNormalization;

/// Extract the line sequence from a document's paragraphs.
///
/// Each paragraph becomes exactly one line, Unicode-normalized to NFKD so
/// that compatibility characters (ligatures, non-breaking spaces, fullwidth
/// forms) compare equal to their plain counterparts in later stages.
/// Paragraph order is preserved and nothing is skipped; empty paragraphs
/// pass through here and are removed by the noise filter.
pub fn extract_lines(paragraphs: &[String]) -> Vec<String> {
    paragraphs
        .iter()
        .map(|paragraph| paragraph.nfkd().collect())
        .collect()
}
