use serde::{Deserialize, Serialize};

/// One element of a reconstructed transcript: either a speaker label or a
/// line of utterance content attributed to the most recent label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Segment {
    /// A line identified as a participant identifier.
    Label(String),
    /// A line of spoken content.
    Utterance(String),
}

impl Segment {
    /// The underlying line text, regardless of variant.
    pub fn text(&self) -> &str {
        match self {
            Segment::Label(text) | Segment::Utterance(text) => text,
        }
    }

    /// Whether this segment is a speaker label.
    pub fn is_label(&self) -> bool {
        matches!(self, Segment::Label(_))
    }
}
