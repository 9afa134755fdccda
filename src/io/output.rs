use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::RenderedDocument;
use crate::stages::{CleanResult, CleanStats};

/// Machine-readable cleanup output.
#[derive(Debug, Clone, Serialize)]
pub struct MachineDocument {
    /// Speaker labels in rank order.
    pub speakers: Vec<String>,
    /// Rendered paragraphs with their bold/plain runs.
    pub document: RenderedDocument,
    /// Pipeline counters.
    pub stats: CleanStats,
    /// Wall time spent cleaning this document, in milliseconds.
    pub elapsed_ms: u64,
}

impl MachineDocument {
    /// Build the machine view of a cleanup result.
    pub fn from_result(result: &CleanResult, elapsed_ms: u64) -> Self {
        Self {
            speakers: result.roster.labels().to_vec(),
            document: result.document.clone(),
            stats: result.stats.clone(),
            elapsed_ms,
        }
    }

    /// Write to a JSON file.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write JSON")?;
        Ok(())
    }
}

/// Human-readable rendering of a cleaned transcript.
///
/// Each output paragraph becomes one text paragraph; bold label runs keep
/// their emphasis as `**…**` markers so the bold/plain distinction survives
/// the plain-text container.
pub struct HumanDocument<'a> {
    document: &'a RenderedDocument,
}

impl<'a> HumanDocument<'a> {
    pub fn new(document: &'a RenderedDocument) -> Self {
        Self { document }
    }

    /// Format the document as text.
    pub fn format(&self) -> String {
        let mut output = String::new();

        for paragraph in &self.document.paragraphs {
            let mut line = String::new();
            for run in &paragraph.runs {
                if run.bold {
                    line.push_str("**");
                    line.push_str(run.text.trim_end());
                    line.push_str("** ");
                } else {
                    line.push_str(&run.text);
                }
            }
            output.push_str(line.trim_end());
            output.push_str("\n\n");
        }

        output
    }

    /// Write to a text file.
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        write!(file, "{}", self.format())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Paragraph, Run};

    fn sample_document() -> RenderedDocument {
        RenderedDocument {
            paragraphs: vec![
                Paragraph {
                    runs: vec![
                        Run::bold("Alice: "),
                        Run::plain("Hello. "),
                        Run::plain("How are you? "),
                    ],
                },
                Paragraph {
                    runs: vec![Run::bold("Bob: "), Run::plain("Fine. ")],
                },
            ],
        }
    }

    #[test]
    fn test_human_format() {
        let document = sample_document();
        let text = HumanDocument::new(&document).format();

        assert_eq!(text, "**Alice:** Hello. How are you?\n\n**Bob:** Fine.\n\n");
    }

    #[test]
    fn test_human_format_unlabeled_paragraph() {
        let document = RenderedDocument {
            paragraphs: vec![Paragraph {
                runs: vec![Run::plain("Stray content. ")],
            }],
        };
        let text = HumanDocument::new(&document).format();

        assert_eq!(text, "Stray content.\n\n");
    }

    #[test]
    fn test_write_json_round_trips() {
        let result = crate::stages::clean_transcript(
            &[
                "Alice".to_string(),
                "Hello.".to_string(),
                "Alice".to_string(),
                "How are you?".to_string(),
                "Bob".to_string(),
                "Hi.".to_string(),
                "Bob".to_string(),
                "Bye.".to_string(),
            ],
            &crate::stages::CleanConfig::default(),
        );
        let machine = MachineDocument::from_result(&result, 3);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        machine.write_json(&path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["speakers"][0], "Alice");
        assert_eq!(value["speakers"][1], "Bob");
        assert_eq!(value["elapsed_ms"], 3);
        assert_eq!(value["stats"]["turns"], 2);
        assert!(value["document"]["paragraphs"].is_array());
    }

    #[test]
    fn test_write_human_file() {
        let document = sample_document();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.md");

        HumanDocument::new(&document).write_file(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("**Alice:** Hello."));
    }
}
