//! Actions taken during apply and revert.
//!
//! Each [`Action`] renders to the exact line written to the manifest (for apply)
//! or shown to the user (for revert). The [`ActionLog`] collected by an
//! operation is returned to the caller so it can decide how to present it.

use camino::Utf8PathBuf;
use std::fmt;

/// A single step performed on the game or backup folder.
///
/// Paths tagged `rel_path` are relative to the mod root; the others are full
/// paths as they appear on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Game file already matches the mod file; nothing was done.
    Skipped { target: Utf8PathBuf },
    /// Game file differs from the mod file and was copied to the backup folder.
    BackedUp {
        target: Utf8PathBuf,
        backup: Utf8PathBuf,
    },
    /// Mod file was copied into the game folder.
    Injected { rel_path: Utf8PathBuf },
    /// Folder was created in the game folder to host mod files.
    CreatedDir { rel_path: Utf8PathBuf },

    /// Mod file was deleted from the game folder.
    RemovedFile { rel_path: Utf8PathBuf },
    /// Original game file was copied back from the backup folder.
    Restored { rel_path: Utf8PathBuf },
    /// Mod-only folder was deleted from the game folder.
    RemovedDir { rel_path: Utf8PathBuf },
    /// Mod-only folder still holds other files and was left in place.
    LeftDir { rel_path: Utf8PathBuf },
    /// Folder has a backup counterpart, so it predates the overlay and was kept.
    KeptDir { rel_path: Utf8PathBuf },
    /// The manifest marker was deleted.
    RemovedManifest { path: Utf8PathBuf },
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Skipped { target } => {
                write!(f, "File {target} already exists and matches mod file. Ignoring")
            }
            Action::BackedUp { target, backup } => {
                write!(f, "File {target} already exists, backing up to {backup}")
            }
            Action::Injected { rel_path } => write!(f, "Injecting mod file {rel_path}"),
            Action::CreatedDir { rel_path } => write!(f, "Creating mod folder {rel_path}"),
            Action::RemovedFile { rel_path } => write!(f, "Removing mod file {rel_path}"),
            Action::Restored { rel_path } => {
                write!(f, "Replacing mod file {rel_path} with game backup")
            }
            Action::RemovedDir { rel_path } => write!(f, "Removing mod folder {rel_path}"),
            Action::LeftDir { rel_path } => write!(f, "Leaving folder {rel_path}"),
            Action::KeptDir { rel_path } => {
                write!(f, "Keeping folder {rel_path}, backup present")
            }
            Action::RemovedManifest { path } => write!(f, "Removing manifest {path}"),
        }
    }
}

/// Ordered record of everything an operation did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionLog {
    actions: Vec<Action>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.actions.iter()
    }

    /// Tally actions by kind for a one-line summary.
    pub fn summary(&self) -> ActionSummary {
        let mut summary = ActionSummary::default();
        for action in &self.actions {
            match action {
                Action::Skipped { .. } => summary.skipped += 1,
                Action::BackedUp { .. } => summary.backed_up += 1,
                Action::Injected { .. } => summary.injected += 1,
                Action::CreatedDir { .. } => summary.created_dirs += 1,
                Action::RemovedFile { .. } => summary.removed_files += 1,
                Action::Restored { .. } => summary.restored += 1,
                Action::RemovedDir { .. } => summary.removed_dirs += 1,
                Action::LeftDir { .. } | Action::KeptDir { .. } => summary.kept_dirs += 1,
                Action::RemovedManifest { .. } => {}
            }
        }
        summary
    }
}

impl<'a> IntoIterator for &'a ActionLog {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}

/// Per-kind action counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionSummary {
    pub skipped: usize,
    pub backed_up: usize,
    pub injected: usize,
    pub created_dirs: usize,
    pub removed_files: usize,
    pub restored: usize,
    pub removed_dirs: usize,
    pub kept_dirs: usize,
}
