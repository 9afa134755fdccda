pub mod stage0_extract;
pub mod stage1_filter;
pub mod stage2_speakers;
pub mod stage3_reconstruct;
pub mod stage4_render;

pub use stage0_extract::*;
pub use stage1_filter::*;
pub use stage2_speakers::*;
pub use stage3_reconstruct::*;
pub use stage4_render::*;

use serde::Serialize;

use crate::models::{RenderedDocument, Segment, SpeakerRoster};

/// Configuration for a full cleanup run.
///
/// Every knob is an explicit value passed per call; there is no module-level
/// mutable configuration. The default reproduces the standard cleanup
/// behavior: the stock filler lexicon and a two-speaker roster.
#[derive(Debug, Clone, Default)]
pub struct CleanConfig {
    /// Noise filter settings.
    pub filter: FilterConfig,
    /// Speaker identification settings.
    pub speakers: SpeakerConfig,
}

/// Counters describing what a cleanup run did.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CleanStats {
    /// Paragraphs read from the source document.
    pub paragraphs_in: usize,
    /// Lines dropped for containing a timestamp marker.
    pub timestamp_lines_dropped: usize,
    /// Lines dropped for exactly matching a filler phrase.
    pub filler_lines_dropped: usize,
    /// Lines surviving the noise filter.
    pub lines_kept: usize,
    /// Reconstructed turns (one per label segment).
    pub turns: usize,
    /// Paragraphs in the rendered output.
    pub paragraphs_out: usize,
}

/// Result of a full cleanup run.
#[derive(Debug, Clone)]
pub struct CleanResult {
    /// Identified speaker labels, rank order.
    pub roster: SpeakerRoster,
    /// Reconstructed turn segments.
    pub segments: Vec<Segment>,
    /// Rendered output document.
    pub document: RenderedDocument,
    /// Run counters.
    pub stats: CleanStats,
}

/// Run the whole cleanup pipeline over a document's paragraphs.
///
/// Stages run in order: line extraction (NFKD), noise filtering, speaker
/// identification, turn reconstruction, rendering. The pipeline is pure and
/// synchronous; a document that is all noise produces an empty result
/// rather than an error.
pub fn clean_transcript(paragraphs: &[String], config: &CleanConfig) -> CleanResult {
    let lines = extract_lines(paragraphs);
    let filtered = filter_noise(&lines, &config.filter);
    let roster = identify_speakers(&filtered.lines, &config.speakers);
    let segments = reconstruct_turns(&filtered.lines, &roster);
    let document = render_document(&segments);

    let stats = CleanStats {
        paragraphs_in: paragraphs.len(),
        timestamp_lines_dropped: filtered.timestamp_lines_dropped,
        filler_lines_dropped: filtered.filler_lines_dropped,
        lines_kept: filtered.lines.len(),
        turns: segments.iter().filter(|s| s.is_label()).count(),
        paragraphs_out: document.len(),
    };

    CleanResult {
        roster,
        segments,
        document,
        stats,
    }
}
