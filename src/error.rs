// SPDX-License-Identifier: MIT OR Apache-2.0

//! Construction errors.
//!
//! Creating a channel touches the filesystem and fails fast with a descriptive
//! error.  The steady-state write path is deliberately infallible; its first
//! I/O failure is reported to stderr once per channel and later ones are
//! dropped (see [`LogChannel`](crate::LogChannel)).

use std::path::PathBuf;

/// Errors surfaced while creating a log channel.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The creator name doubles as a directory and file name component.
    #[error("creator name may not be empty")]
    EmptyCreatorName,

    /// The per-creator log directory could not be created.
    #[error("failed to create log directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The log file could not be created or opened for append.
    #[error("failed to open log file {}", .path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The header lines could not be written to a freshly opened log file.
    #[error("failed to write log header to {}", .path.display())]
    WriteHeader {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
