//! Manifest marker handling.
//!
//! The manifest is a plain text file inside the game folder. Its existence is
//! the only signal that an overlay is currently applied; its content is a
//! human-readable log of the apply run and is never parsed back.
//!
//! Lines are terminated with `\r\n` and written straight through to disk as
//! they happen, so an apply that dies half way still leaves an accurate trail.

use crate::action::Action;
use crate::config::OverlayConfig;
use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs::File;
use std::io::Write;

const LINE_ENDING: &str = "\r\n";

/// The two operations guarded by the manifest marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Apply,
    Revert,
}

/// Whether the user has to confirm before `op` runs.
///
/// Applying over an existing manifest means a previous overlay was never
/// reverted; reverting without one means there is probably nothing to undo.
pub fn needs_confirmation(manifest_exists: bool, op: Operation) -> bool {
    match op {
        Operation::Apply => manifest_exists,
        Operation::Revert => !manifest_exists,
    }
}

/// Whether the overlay described by `config` is currently applied.
pub fn is_applied(config: &OverlayConfig) -> bool {
    config.manifest_path().as_std_path().exists()
}

/// Open handle on the manifest for the duration of an apply.
pub struct ManifestWriter {
    path: Utf8PathBuf,
    file: File,
}

impl ManifestWriter {
    /// Create (or truncate) the manifest.
    pub fn create(path: &Utf8Path) -> Result<Self> {
        let file = File::create(path.as_std_path()).map_err(|source| Error::Manifest {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Append one action as a line.
    pub fn record(&mut self, action: &Action) -> Result<()> {
        let line = format!("{action}{LINE_ENDING}");
        self.file
            .write_all(line.as_bytes())
            .and_then(|_| self.file.flush())
            .map_err(|source| Error::Manifest {
                path: self.path.clone(),
                source,
            })
    }
}
