//! Overlay revert.
//!
//! Walks the mod tree bottom-up so a folder is only considered for removal
//! once everything inside it has been dealt with.
//!
//! - For every mod file `p`: delete `game/p` if present, then, if `backup/p`
//!   exists, copy it back to `game/p`.
//! - For every mod folder `d`: if `backup/d` exists the folder predates the
//!   overlay and is kept. Otherwise `game/d` is removed when empty and left in
//!   place (with a note in the log) when it still holds unrelated files.
//! - Once every file is restored, the restored backup copies are deleted and
//!   emptied backup folders removed. A run that fails earlier leaves the
//!   backup intact, so running revert again is safe.
//! - Finally the manifest is deleted. This only happens once everything above
//!   succeeded.

use crate::action::{Action, ActionLog};
use crate::apply::copy;
use crate::config::OverlayConfig;
use crate::error::{Error, Result};
use crate::walk::{ModEntry, ModTree};
use camino::{Utf8Path, Utf8PathBuf};

/// Undo a previous [`apply`](crate::apply) using the backup folder.
///
/// When no manifest exists the caller is expected to have confirmed with the
/// user already; this function proceeds unconditionally.
pub fn revert(config: &OverlayConfig) -> Result<ActionLog> {
    let tree = ModTree::open(&config.mod_root)?;

    tracing::info!("Reverting mods...");
    tracing::info!("Mod dir: {}", config.mod_root);
    tracing::info!("Game dir: {}", config.target_root);
    tracing::info!("Backup dir: {}", config.backup_root);

    let mut log = ActionLog::new();
    let mut restored = RestoredBackups::default();
    for entry in tree.bottom_up() {
        match entry? {
            ModEntry::File(rel_path) => {
                revert_file(config, &rel_path, &mut log, &mut restored)?
            }
            ModEntry::Dir(rel_path) => revert_dir(config, &rel_path, &mut log, &mut restored)?,
        }
    }
    restored.clean_up()?;

    let manifest = config.manifest_path();
    if manifest.as_std_path().exists() {
        remove_file(&manifest)?;
        record(&mut log, Action::RemovedManifest { path: manifest });
    }

    tracing::info!("Reverted overlay: {} actions", log.len());
    Ok(log)
}

/// Backup entries already copied back into the game folder, in walk order.
#[derive(Default)]
struct RestoredBackups {
    files: Vec<Utf8PathBuf>,
    dirs: Vec<Utf8PathBuf>,
}

impl RestoredBackups {
    fn clean_up(self) -> Result<()> {
        for file in &self.files {
            remove_file(file)?;
        }
        // Bottom-up order, so nested folders go first
        for dir in &self.dirs {
            if let Err(err) = std::fs::remove_dir(dir.as_std_path()) {
                tracing::debug!("Leaving backup folder {}: {}", dir, err);
            }
        }
        Ok(())
    }
}

fn revert_file(
    config: &OverlayConfig,
    rel_path: &Utf8Path,
    log: &mut ActionLog,
    restored: &mut RestoredBackups,
) -> Result<()> {
    let target = config.target_path(rel_path);
    let backup = config.backup_path(rel_path);

    if target.as_std_path().exists() {
        remove_file(&target)?;
        record(
            log,
            Action::RemovedFile {
                rel_path: rel_path.to_path_buf(),
            },
        );
    }

    if backup.as_std_path().exists() {
        copy(&backup, &target)?;
        restored.files.push(backup);
        record(
            log,
            Action::Restored {
                rel_path: rel_path.to_path_buf(),
            },
        );
    }

    Ok(())
}

fn revert_dir(
    config: &OverlayConfig,
    rel_path: &Utf8Path,
    log: &mut ActionLog,
    restored: &mut RestoredBackups,
) -> Result<()> {
    let target = config.target_path(rel_path);
    let backup = config.backup_path(rel_path);

    if backup.as_std_path().exists() {
        record(
            log,
            Action::KeptDir {
                rel_path: rel_path.to_path_buf(),
            },
        );
        restored.dirs.push(backup);
        return Ok(());
    }

    if !target.as_std_path().exists() {
        return Ok(());
    }

    match std::fs::remove_dir(target.as_std_path()) {
        Ok(()) => record(
            log,
            Action::RemovedDir {
                rel_path: rel_path.to_path_buf(),
            },
        ),
        Err(err) if is_not_empty(&target) => {
            tracing::warn!("Folder {} is not empty: {}", target, err);
            record(
                log,
                Action::LeftDir {
                    rel_path: rel_path.to_path_buf(),
                },
            );
        }
        Err(source) => return Err(Error::Remove { path: target, source }),
    }

    Ok(())
}

/// Platforms disagree on the error returned for a non-empty folder, so look at
/// the folder itself.
fn is_not_empty(dir: &Utf8Path) -> bool {
    std::fs::read_dir(dir.as_std_path())
        .map(|mut entries| entries.next().is_some())
        .unwrap_or(false)
}

fn remove_file(path: &Utf8Path) -> Result<()> {
    std::fs::remove_file(path.as_std_path()).map_err(|source| Error::Remove {
        path: path.to_path_buf(),
        source,
    })
}

fn record(log: &mut ActionLog, action: Action) {
    tracing::info!("{}", action);
    log.push(action);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, OverlayConfig) {
        let dir = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        let config = OverlayConfig::new(root.join("mods"), root.join("game"), root.join("backup"));
        fs::create_dir_all(&config.mod_root).unwrap();
        fs::create_dir_all(&config.target_root).unwrap();
        fs::create_dir_all(&config.backup_root).unwrap();
        (dir, config)
    }

    fn write(root: &Utf8Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_restores_backup_and_removes_it() {
        let (_dir, config) = fixture();
        write(&config.mod_root, "a.txt", "X");
        write(&config.target_root, "a.txt", "X");
        write(&config.backup_root, "a.txt", "Y");

        let log = revert(&config).unwrap();

        assert_eq!(
            fs::read_to_string(config.target_root.join("a.txt")).unwrap(),
            "Y"
        );
        assert!(!config.backup_root.join("a.txt").exists());
        assert_eq!(log.summary().removed_files, 1);
        assert_eq!(log.summary().restored, 1);
    }

    #[test]
    fn test_restores_backup_when_mod_file_already_gone() {
        let (_dir, config) = fixture();
        write(&config.mod_root, "a.txt", "X");
        write(&config.backup_root, "a.txt", "Y");

        let log = revert(&config).unwrap();

        assert_eq!(
            fs::read_to_string(config.target_root.join("a.txt")).unwrap(),
            "Y"
        );
        assert_eq!(
            log.actions(),
            &[Action::Restored {
                rel_path: Utf8PathBuf::from("a.txt"),
            }]
        );
    }

    #[test]
    fn test_non_empty_mod_folder_is_left() {
        let (_dir, config) = fixture();
        write(&config.mod_root, "data/mod.bin", "mod");
        write(&config.target_root, "data/mod.bin", "mod");
        // Created by the game after the overlay was applied
        write(&config.target_root, "data/cache.bin", "cache");

        let log = revert(&config).unwrap();

        assert!(config.target_root.join("data/cache.bin").exists());
        assert!(!config.target_root.join("data/mod.bin").exists());
        assert!(log.iter().any(|action| matches!(
            action,
            Action::LeftDir { rel_path } if rel_path == "data"
        )));
    }

    #[test]
    fn test_folder_with_backup_is_kept() {
        let (_dir, config) = fixture();
        write(&config.mod_root, "cfg/a.txt", "X");
        write(&config.target_root, "cfg/a.txt", "X");
        write(&config.backup_root, "cfg/a.txt", "Y");
        write(&config.backup_root, "cfg/other.txt", "unrelated");

        let log = revert(&config).unwrap();

        assert!(config.target_root.join("cfg").is_dir());
        // Still holds a file, so the backup folder survives too
        assert!(config.backup_root.join("cfg/other.txt").exists());
        assert!(log.iter().any(|action| matches!(
            action,
            Action::KeptDir { rel_path } if rel_path == "cfg"
        )));
    }

    #[test]
    fn test_without_manifest_still_reverts() {
        let (_dir, config) = fixture();
        write(&config.mod_root, "a.txt", "X");
        write(&config.target_root, "a.txt", "X");

        let log = revert(&config).unwrap();

        assert!(!config.target_root.join("a.txt").exists());
        assert!(log
            .iter()
            .all(|action| !matches!(action, Action::RemovedManifest { .. })));
    }

    #[test]
    fn test_failure_keeps_manifest() {
        let (_dir, config) = fixture();
        write(&config.mod_root, "a.txt", "X");
        write(&config.target_root, "a.txt", "X");
        // A folder in the backup where a file is expected makes the restore fail
        fs::create_dir_all(config.backup_root.join("a.txt")).unwrap();
        fs::write(config.manifest_path(), "Injecting mod file a.txt\r\n").unwrap();

        assert!(revert(&config).is_err());
        assert!(config.manifest_path().exists());
    }
}
