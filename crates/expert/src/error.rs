#![forbid(unsafe_code)]

use std::io;
use std::path::PathBuf;

/// Error type for knowledge persistence and console I/O.
///
/// Reading and saving are separate variants so the user can tell whether a
/// freshly taught response reached the disk.
#[derive(Debug, thiserror::Error)]
pub enum ExpertError {
    /// The knowledge file exists but could not be read.
    #[error("could not read knowledge base at {}: {source}", path.display())]
    LoadKnowledge {
        /// file that failed
        path: PathBuf,
        /// underlying I/O failure
        source: io::Error,
    },
    /// The knowledge file was read but is not a valid knowledge document.
    #[error("knowledge base at {} is malformed: {source}", path.display())]
    ParseKnowledge {
        /// file that failed
        path: PathBuf,
        /// decoder failure
        source: serde_json::Error,
    },
    /// The knowledge base could not be written back.
    #[error("could not save knowledge base to {}: {source}", path.display())]
    SaveKnowledge {
        /// file that failed
        path: PathBuf,
        /// underlying I/O (or encoding) failure
        source: io::Error,
    },
    /// Reading from the user or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Console(#[from] io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ExpertError>;
