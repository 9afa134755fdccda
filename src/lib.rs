pub mod io;
pub mod models;
pub mod stages;

pub use io::{
    DocumentError, HumanDocument, MachineDocument, read_document_file, split_paragraphs,
};
pub use models::{Paragraph, RenderedDocument, Run, Segment, SpeakerRoster};
pub use stages::{
    CleanConfig, CleanResult, CleanStats, FilterConfig, SpeakerConfig, clean_transcript,
    extract_lines, filter_noise, identify_speakers, reconstruct_turns, render_document,
};
