//! Mod tree traversal.
//!
//! Yields every entry below the mod root as a path relative to that root.
//! Within each folder the files come first (sorted by name), then the
//! subfolders (sorted by name). Relative paths are computed by stripping the
//! root path component-wise, never by searching for the folder name inside
//! the absolute path.
//!
//! Symbolic links are never followed. A link to a folder is skipped with a
//! warning; a link to a file is treated as that file.

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use walkdir::WalkDir;

/// One entry of the mod tree, relative to the mod root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModEntry {
    File(Utf8PathBuf),
    Dir(Utf8PathBuf),
}

/// Read-only view of the mod folder.
#[derive(Debug, Clone, Copy)]
pub struct ModTree<'a> {
    root: &'a Utf8Path,
}

impl<'a> ModTree<'a> {
    /// Open the mod tree, failing if the root is not an existing folder.
    pub fn open(root: &'a Utf8Path) -> Result<Self> {
        if !root.as_std_path().is_dir() {
            return Err(Error::ModRootMissing(root.to_path_buf()));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Utf8Path {
        self.root
    }

    /// Pre-order walk: a folder is yielded before anything inside it.
    pub fn top_down(&self) -> impl Iterator<Item = Result<ModEntry>> + 'a {
        self.walk(false)
    }

    /// Post-order walk: a folder is yielded after everything inside it.
    pub fn bottom_up(&self) -> impl Iterator<Item = Result<ModEntry>> + 'a {
        self.walk(true)
    }

    fn walk(&self, contents_first: bool) -> impl Iterator<Item = Result<ModEntry>> + 'a {
        let root = self.root;
        WalkDir::new(root.as_std_path())
            .min_depth(1)
            .follow_links(false)
            .contents_first(contents_first)
            .sort_by(|a, b| {
                a.file_type()
                    .is_dir()
                    .cmp(&b.file_type().is_dir())
                    .then_with(|| a.file_name().cmp(b.file_name()))
            })
            .into_iter()
            .filter_map(move |entry| {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        let path = err
                            .path()
                            .and_then(Utf8Path::from_path)
                            .unwrap_or(root)
                            .to_path_buf();
                        return Some(Err(Error::Walk { path, source: err }));
                    }
                };

                // walkdir always yields paths rooted at `root`
                let rel = entry.path().strip_prefix(root.as_std_path()).ok()?;
                let rel = match Utf8PathBuf::from_path_buf(rel.to_path_buf()) {
                    Ok(rel) => rel,
                    Err(p) => {
                        tracing::warn!("Skipping non-UTF-8 path: {}", p.display());
                        return None;
                    }
                };

                if entry.file_type().is_dir() {
                    Some(Ok(ModEntry::Dir(rel)))
                } else if entry.path_is_symlink() && entry.path().is_dir() {
                    tracing::warn!("Skipping symlinked folder: {}", rel);
                    None
                } else {
                    Some(Ok(ModEntry::File(rel)))
                }
            })
    }
}
