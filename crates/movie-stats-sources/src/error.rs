use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a review source.
///
/// Once a source exists, reading from it cannot fail.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The review file could not be read
    #[error("Failed to read reviews from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The review data is not a valid JSON review array
    #[error("Failed to parse reviews: {0}")]
    Parse(#[from] serde_json::Error),
}
