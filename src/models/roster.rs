use serde::{Deserialize, Serialize};

/// Ranked list of speaker labels inferred from line frequencies.
///
/// Rank order is occurrence count descending, ties broken by first
/// appearance in the filtered line sequence. Membership is exact string
/// equality; labels are never trimmed or case-folded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerRoster {
    labels: Vec<String>,
}

impl SpeakerRoster {
    /// Create a roster from labels already in rank order.
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Whether the given line is one of the speaker labels.
    pub fn contains(&self, line: &str) -> bool {
        self.labels.iter().any(|label| label == line)
    }

    /// Labels in rank order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of labels in the roster.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether no labels were identified.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
