//! Overlay status inspection.

use crate::config::OverlayConfig;
use crate::error::{Error, Result};
use crate::manifest::is_applied;
use camino::Utf8PathBuf;
use walkdir::WalkDir;

/// Snapshot of the overlay state on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayStatus {
    /// Whether the manifest marker exists.
    pub applied: bool,
    pub manifest_path: Utf8PathBuf,
    /// Number of displaced game files currently held in the backup folder.
    pub backed_up_files: usize,
}

/// Read the overlay state without modifying anything.
pub fn status(config: &OverlayConfig) -> Result<OverlayStatus> {
    let mut backed_up_files = 0;
    if config.backup_root.as_std_path().is_dir() {
        for entry in WalkDir::new(config.backup_root.as_std_path()).min_depth(1) {
            let entry = entry.map_err(|source| Error::Walk {
                path: config.backup_root.clone(),
                source,
            })?;
            if !entry.file_type().is_dir() {
                backed_up_files += 1;
            }
        }
    }

    Ok(OverlayStatus {
        applied: is_applied(config),
        manifest_path: config.manifest_path(),
        backed_up_files,
    })
}
