use std::collections::HashMap;

use crate::models::SpeakerRoster;

/// Configuration for speaker identification.
#[derive(Debug, Clone)]
pub struct SpeakerConfig {
    /// Maximum number of speaker labels to infer.
    pub max_speakers: usize,
}

impl Default for SpeakerConfig {
    fn default() -> Self {
        Self { max_speakers: 2 }
    }
}

/// Infer the speaker roster from line frequencies.
///
/// Speaker labels repeat once per turn, so they dominate the frequency table
/// of the filtered sequence. The top `max_speakers` distinct lines by
/// occurrence count become the roster; ties are broken by first appearance
/// (earliest line wins the higher rank). Fewer distinct lines than
/// `max_speakers` yields a smaller roster, never an error.
pub fn identify_speakers(lines: &[String], config: &SpeakerConfig) -> SpeakerRoster {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (index, line) in lines.iter().enumerate() {
        counts.entry(line.as_str()).or_insert((0, index)).0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(line, (count, first_seen))| (line, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    let labels = ranked
        .into_iter()
        .take(config.max_speakers)
        .map(|(line, _, _)| line.to_string())
        .collect();

    SpeakerRoster::new(labels)
}
