//! Overlay configuration.
//!
//! The three base folders and the manifest name are fixed for a run. They are
//! gathered into an [`OverlayConfig`] once at startup and passed by reference
//! into [`apply`](crate::apply) and [`revert`](crate::revert).

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

/// Default manifest file name, written inside the game folder.
pub const DEFAULT_MANIFEST_NAME: &str = "ModCommand_Log.txt";

/// Locations used by an overlay run.
///
/// # TOML format
///
/// ```toml
/// mod_root = "mods"
/// target_root = "C:/Games/MyGame"
/// backup_root = "backup"
/// manifest_name = "ModCommand_Log.txt"
/// ```
///
/// Every field is optional when deserializing; missing fields take the
/// [`Default`] values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Folder holding the mod files, laid out as if it were the game folder.
    pub mod_root: Utf8PathBuf,
    /// The game installation the mod files are copied into.
    pub target_root: Utf8PathBuf,
    /// Folder receiving the game files displaced by the overlay.
    pub backup_root: Utf8PathBuf,
    /// File name of the manifest inside `target_root`.
    pub manifest_name: String,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            mod_root: Utf8PathBuf::from("mods"),
            target_root: Utf8PathBuf::from("."),
            backup_root: Utf8PathBuf::from("backup"),
            manifest_name: DEFAULT_MANIFEST_NAME.to_string(),
        }
    }
}

impl OverlayConfig {
    pub fn new(
        mod_root: impl Into<Utf8PathBuf>,
        target_root: impl Into<Utf8PathBuf>,
        backup_root: impl Into<Utf8PathBuf>,
    ) -> Self {
        Self {
            mod_root: mod_root.into(),
            target_root: target_root.into(),
            backup_root: backup_root.into(),
            manifest_name: DEFAULT_MANIFEST_NAME.to_string(),
        }
    }

    pub fn with_manifest_name(mut self, manifest_name: impl Into<String>) -> Self {
        self.manifest_name = manifest_name.into();
        self
    }

    /// Full path of the manifest marker.
    pub fn manifest_path(&self) -> Utf8PathBuf {
        self.target_root.join(&self.manifest_name)
    }

    /// Destination of a mod-relative path inside the game folder.
    pub fn target_path(&self, rel_path: &Utf8Path) -> Utf8PathBuf {
        self.target_root.join(rel_path)
    }

    /// Backup location of a mod-relative path.
    pub fn backup_path(&self, rel_path: &Utf8Path) -> Utf8PathBuf {
        self.backup_root.join(rel_path)
    }

    /// Source of a mod-relative path inside the mod folder.
    pub fn mod_path(&self, rel_path: &Utf8Path) -> Utf8PathBuf {
        self.mod_root.join(rel_path)
    }
}
