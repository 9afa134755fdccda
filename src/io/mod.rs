pub mod input;
pub mod output;

pub use input::*;
pub use output::*;

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the document reader collaborator.
///
/// These propagate to the caller unchanged; the pipeline performs no retries
/// and never substitutes default content for an unreadable document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The source file could not be read.
    #[error("failed to read document {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source file is not valid UTF-8 text.
    #[error("document {path:?} is not valid UTF-8 text")]
    Malformed { path: PathBuf },
}
