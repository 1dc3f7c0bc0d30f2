//! Configuration file handling.
//!
//! The overlay locations live in `mod-command.toml` next to the executable
//! unless `--config` points elsewhere. Command-line flags win over the file.

use crate::errors::CliError;
use camino::{Utf8Path, Utf8PathBuf};
use mod_overlay::OverlayConfig;
use std::env;
use std::fs;

pub const CONFIG_FILE_NAME: &str = "mod-command.toml";

/// Returns the directory where the current executable resides.
pub fn install_dir() -> Option<Utf8PathBuf> {
    let exe = env::current_exe().ok()?;
    let parent = exe.parent()?;
    Utf8PathBuf::from_path_buf(parent.to_path_buf()).ok()
}

/// Returns the default configuration file path (mod-command.toml).
pub fn default_config_path() -> Option<Utf8PathBuf> {
    install_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// The config file in use: the explicit one if given, the default otherwise.
pub fn resolve_config_path(explicit: Option<&Utf8Path>) -> Option<Utf8PathBuf> {
    explicit.map(Utf8Path::to_path_buf).or_else(default_config_path)
}

/// Load the overlay configuration.
///
/// An explicit path must exist. A missing default file yields the built-in
/// defaults. A file that exists but cannot be parsed is always an error.
pub fn load_config(explicit: Option<&Utf8Path>) -> Result<OverlayConfig, CliError> {
    let path = match resolve_config_path(explicit) {
        Some(path) => path,
        None => return Ok(OverlayConfig::default()),
    };

    if !path.as_std_path().exists() {
        if explicit.is_some() {
            return Err(CliError::ConfigNotFound { path });
        }
        tracing::debug!("No config file at {}, using defaults", path);
        return Ok(OverlayConfig::default());
    }

    let content = fs::read_to_string(path.as_std_path())?;
    let config: OverlayConfig =
        toml::from_str(&content).map_err(|source| CliError::ConfigParseError {
            path: path.clone(),
            source,
        })?;
    tracing::debug!("Loaded config from {}: {:?}", path, config);
    Ok(config)
}

/// Write the overlay configuration as TOML.
pub fn save_config(path: &Utf8Path, config: &OverlayConfig) -> Result<(), CliError> {
    let content = toml::to_string_pretty(config).map_err(std::io::Error::other)?;
    fs::write(path.as_std_path(), content)?;
    Ok(())
}

/// Per-run overrides taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub mod_root: Option<Utf8PathBuf>,
    pub target_root: Option<Utf8PathBuf>,
    pub backup_root: Option<Utf8PathBuf>,
    pub manifest_name: Option<String>,
}

impl ConfigOverrides {
    pub fn apply_to(self, config: &mut OverlayConfig) {
        if let Some(mod_root) = self.mod_root {
            config.mod_root = mod_root;
        }
        if let Some(target_root) = self.target_root {
            config.target_root = target_root;
        }
        if let Some(backup_root) = self.backup_root {
            config.backup_root = backup_root;
        }
        if let Some(manifest_name) = self.manifest_name {
            config.manifest_name = manifest_name;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_path(dir: &TempDir, name: &str) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().join(name)).unwrap()
    }

    #[test]
    fn load_explicit_config() {
        let dir = TempDir::new().unwrap();
        let path = temp_path(&dir, "custom.toml");
        fs::write(
            &path,
            "mod_root = \"my-mods\"\ntarget_root = \"/games/thing\"\n",
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.mod_root, Utf8PathBuf::from("my-mods"));
        assert_eq!(config.target_root, Utf8PathBuf::from("/games/thing"));
        assert_eq!(config.backup_root, Utf8PathBuf::from("backup"));
    }

    #[test]
    fn missing_explicit_config_is_error() {
        let dir = TempDir::new().unwrap();
        let path = temp_path(&dir, "missing.toml");

        assert!(matches!(
            load_config(Some(&path)),
            Err(CliError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn invalid_config_is_error() {
        let dir = TempDir::new().unwrap();
        let path = temp_path(&dir, "bad.toml");
        fs::write(&path, "mod_root = [").unwrap();

        assert!(matches!(
            load_config(Some(&path)),
            Err(CliError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = temp_path(&dir, "saved.toml");
        let config = OverlayConfig::new("m", "g", "b").with_manifest_name("log.txt");

        save_config(&path, &config).unwrap();
        assert_eq!(load_config(Some(&path)).unwrap(), config);
    }

    #[test]
    fn overrides_win() {
        let mut config = OverlayConfig::new("m", "g", "b");
        ConfigOverrides {
            target_root: Some(Utf8PathBuf::from("/other/game")),
            manifest_name: Some("x.log".to_string()),
            ..Default::default()
        }
        .apply_to(&mut config);

        assert_eq!(config.mod_root, Utf8PathBuf::from("m"));
        assert_eq!(config.target_root, Utf8PathBuf::from("/other/game"));
        assert_eq!(config.backup_root, Utf8PathBuf::from("b"));
        assert_eq!(config.manifest_name, "x.log");
    }
}
