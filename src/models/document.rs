use serde::{Deserialize, Serialize};

/// A single formatting run inside an output paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    /// Whether the run is rendered in bold emphasis.
    pub bold: bool,
    /// Run text, including any trailing separator space.
    pub text: String,
}

impl Run {
    /// A bold run, used for speaker labels.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            bold: true,
            text: text.into(),
        }
    }

    /// A plain run, used for utterance content.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            bold: false,
            text: text.into(),
        }
    }
}

/// One output paragraph: an ordered list of runs.
///
/// A labeled paragraph starts with exactly one bold run; an unlabeled
/// paragraph (utterance content that arrived before any label) has none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// The label text of this paragraph, if it has a bold lead run.
    pub fn label(&self) -> Option<&str> {
        match self.runs.first() {
            Some(run) if run.bold => Some(run.text.as_str()),
            _ => None,
        }
    }

    /// Concatenated plain-run content of this paragraph.
    pub fn body(&self) -> String {
        self.runs
            .iter()
            .filter(|run| !run.bold)
            .map(|run| run.text.as_str())
            .collect()
    }
}

/// The cleaned transcript in document-writer form: ordered paragraphs of
/// bold/plain runs, ready to be persisted by an output backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedDocument {
    pub paragraphs: Vec<Paragraph>,
}

impl RenderedDocument {
    /// Number of paragraphs.
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    /// Whether the document has no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}
