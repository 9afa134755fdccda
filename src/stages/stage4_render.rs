use crate::models::{Paragraph, RenderedDocument, Run, Segment};

/// Renderer state: whether a paragraph is open to receive utterance runs.
enum RenderState {
    NoActiveParagraph,
    ActiveParagraph,
}

/// Map the reconstructed segment sequence onto output paragraphs.
///
/// Each label starts a new paragraph with a bold `"{label}: "` run; every
/// following utterance appends a plain `"{text} "` run to that paragraph
/// until the next label. An utterance arriving before any label opens an
/// implicit unlabeled paragraph. No segment is dropped or reordered;
/// fragments within a turn are joined by the runs' trailing spaces, never
/// by line breaks.
pub fn render_document(segments: &[Segment]) -> RenderedDocument {
    let mut paragraphs: Vec<Paragraph> = Vec::new();
    let mut state = RenderState::NoActiveParagraph;

    for segment in segments {
        match segment {
            Segment::Label(label) => {
                paragraphs.push(Paragraph {
                    runs: vec![Run::bold(format!("{label}: "))],
                });
                state = RenderState::ActiveParagraph;
            }
            Segment::Utterance(text) => {
                if let RenderState::NoActiveParagraph = state {
                    paragraphs.push(Paragraph::default());
                    state = RenderState::ActiveParagraph;
                }
                if let Some(current) = paragraphs.last_mut() {
                    current.runs.push(Run::plain(format!("{text} ")));
                }
            }
        }
    }

    RenderedDocument { paragraphs }
}
