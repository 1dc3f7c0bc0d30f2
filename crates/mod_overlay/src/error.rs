//! Error types for overlay operations.
//!
//! All fallible functions in this crate return [`Result<T>`], which uses [`Error`]
//! as the error type. Every filesystem failure is fatal for the operation that hit
//! it and carries the path involved, so callers can point the user at the exact
//! file that needs manual attention.

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while applying or reverting an overlay.
#[derive(Error, Debug)]
pub enum Error {
    /// The configured mod root does not exist or is not a directory.
    #[error("Mod folder not found: {0}")]
    ModRootMissing(Utf8PathBuf),

    /// A file could not be opened or read while computing its digest.
    #[error("Failed to read '{path}'")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Copying a file failed (mod -> game, game -> backup, or backup -> game).
    #[error("Failed to copy '{from}' to '{to}'")]
    Copy {
        from: Utf8PathBuf,
        to: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directory (or one of its ancestors) could not be created.
    #[error("Failed to create folder '{path}'")]
    CreateDir {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file could not be deleted.
    #[error("Failed to remove '{path}'")]
    Remove {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest could not be created or appended to.
    #[error("Failed to write manifest '{path}'")]
    Manifest {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Listing a directory of the mod tree failed.
    #[error("Failed to walk mod folder at '{path}'")]
    Walk {
        path: Utf8PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl Error {
    /// The path the failing operation was working on.
    ///
    /// For copies this is the destination, since that is where the tree is left
    /// in an unexpected state.
    pub fn path(&self) -> &Utf8Path {
        match self {
            Error::ModRootMissing(path) => path,
            Error::Read { path, .. }
            | Error::CreateDir { path, .. }
            | Error::Remove { path, .. }
            | Error::Manifest { path, .. }
            | Error::Walk { path, .. } => path,
            Error::Copy { to, .. } => to,
        }
    }
}
