//! Defines custom error types for the library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
/// Error type returned when splitting or merging fails.
pub enum SplitError {
    #[error("Path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to list directory {}", .path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create splits directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No content found in the file: nothing to split")]
    NoSections,

    #[error("Found {count} H2 sections, but at most 99 can be numbered")]
    TooManySections { count: usize },

    #[error("No markdown files found in splits directory: {}", .0.display())]
    NoFiles(PathBuf),

    #[error(
        "No properly numbered split files found in {} (expecting files named 00-*, 01-*, 02-*, etc.)",
        .0.display()
    )]
    NoNumberedFiles(PathBuf),
}

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, SplitError>;
