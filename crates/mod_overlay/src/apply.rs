//! Overlay apply.
//!
//! # Algorithm
//!
//! 1. Create the manifest marker in the game folder before touching anything
//!    else, so a failed run still leaves evidence behind.
//! 2. Walk the mod tree top-down (files of a folder before its subfolders).
//! 3. For every mod file at relative path `p`:
//!    - game file `p` exists and has the same SHA-1 digest: skip it;
//!    - game file `p` exists and differs: copy it to `backup/p` (creating the
//!      backup folders as needed), then overwrite it with the mod file. An
//!      existing `backup/p` from an earlier unreverted run is never replaced;
//!    - game file `p` is missing: copy the mod file in, no backup needed.
//! 4. For every mod folder at relative path `d` missing from the game folder,
//!    create it (with any ancestors) before its contents are visited.
//!
//! Every action is appended to the manifest once it has completed. The first
//! I/O failure aborts the run; nothing is rolled back.

use crate::action::{Action, ActionLog};
use crate::config::OverlayConfig;
use crate::digest::files_identical;
use crate::error::{Error, Result};
use crate::manifest::ManifestWriter;
use crate::walk::{ModEntry, ModTree};
use camino::Utf8Path;

/// Apply the mod tree described by `config` onto its game folder.
///
/// Callers are expected to have confirmed with the user already when a
/// manifest from an earlier, unreverted run exists (see
/// [`needs_confirmation`](crate::needs_confirmation)); this function proceeds
/// unconditionally.
pub fn apply(config: &OverlayConfig) -> Result<ActionLog> {
    let tree = ModTree::open(&config.mod_root)?;

    tracing::info!("Applying mods...");
    tracing::info!("Mod dir: {}", config.mod_root);
    tracing::info!("Game dir: {}", config.target_root);
    tracing::info!("Backup dir: {}", config.backup_root);

    let mut overlay = Overlay {
        config,
        manifest: ManifestWriter::create(&config.manifest_path())?,
        log: ActionLog::new(),
    };

    for entry in tree.top_down() {
        match entry? {
            ModEntry::File(rel_path) => overlay.apply_file(&rel_path)?,
            ModEntry::Dir(rel_path) => overlay.apply_dir(&rel_path)?,
        }
    }

    tracing::info!("Applied overlay: {} actions", overlay.log.len());
    Ok(overlay.log)
}

struct Overlay<'a> {
    config: &'a OverlayConfig,
    manifest: ManifestWriter,
    log: ActionLog,
}

impl Overlay<'_> {
    fn apply_file(&mut self, rel_path: &Utf8Path) -> Result<()> {
        let mod_file = self.config.mod_path(rel_path);
        let target = self.config.target_path(rel_path);

        if target.as_std_path().exists() {
            if files_identical(&target, &mod_file)? {
                return self.record(Action::Skipped { target });
            }

            let backup = self.config.backup_path(rel_path);
            if backup.as_std_path().exists() {
                // Left by an earlier unreverted apply, so it holds the game's file
                // and `target` holds old mod content
                tracing::warn!("Keeping existing backup {}", backup);
            } else {
                if let Some(parent) = backup.parent() {
                    create_dir_all(parent)?;
                }
                copy(&target, &backup)?;
                self.record(Action::BackedUp { target: target.clone(), backup })?;
            }
        }

        copy(&mod_file, &target)?;
        self.record(Action::Injected {
            rel_path: rel_path.to_path_buf(),
        })
    }

    fn apply_dir(&mut self, rel_path: &Utf8Path) -> Result<()> {
        let target = self.config.target_path(rel_path);
        if target.as_std_path().exists() {
            return Ok(());
        }

        create_dir_all(&target)?;
        self.record(Action::CreatedDir {
            rel_path: rel_path.to_path_buf(),
        })
    }

    fn record(&mut self, action: Action) -> Result<()> {
        tracing::info!("{}", action);
        self.manifest.record(&action)?;
        self.log.push(action);
        Ok(())
    }
}

pub(crate) fn copy(from: &Utf8Path, to: &Utf8Path) -> Result<()> {
    std::fs::copy(from.as_std_path(), to.as_std_path())
        .map(|_| ())
        .map_err(|source| Error::Copy {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        })
}

fn create_dir_all(path: &Utf8Path) -> Result<()> {
    std::fs::create_dir_all(path.as_std_path()).map_err(|source| Error::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}
