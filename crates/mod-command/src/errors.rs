use camino::Utf8PathBuf;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    #[error("Mod folder not found: {path}")]
    #[diagnostic(
        code(config::mod_folder_missing),
        help("Set mod_root in mod-command.toml or pass --mods <path>")
    )]
    ModFolderMissing { path: Utf8PathBuf },

    #[error("Injecting mods failed at {path}")]
    #[diagnostic(
        code(overlay::apply_failed),
        help("Nothing was rolled back. The manifest in the game folder lists every step completed before the failure; fix the problem and run apply again or run revert")
    )]
    ApplyFailed {
        path: Utf8PathBuf,
        #[source]
        source: mod_overlay::Error,
    },

    #[error("Removing mods failed at {path}")]
    #[diagnostic(
        code(overlay::revert_failed),
        help("The manifest was kept. Fix the problem and run revert again")
    )]
    RevertFailed {
        path: Utf8PathBuf,
        #[source]
        source: mod_overlay::Error,
    },

    #[error("Reading overlay status failed at {path}")]
    #[diagnostic(code(overlay::status_failed))]
    StatusFailed {
        path: Utf8PathBuf,
        #[source]
        source: mod_overlay::Error,
    },

    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(config::not_found),
        help("Run 'mod-command config init' to create one, or drop --config to use the defaults")
    )]
    ConfigNotFound { path: Utf8PathBuf },

    #[error("Configuration file error: {path}")]
    #[diagnostic(
        code(config::parse_error),
        help("Check your mod-command.toml file for syntax errors")
    )]
    ConfigParseError {
        path: Utf8PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not determine the configuration file location")]
    #[diagnostic(
        code(config::path_unknown),
        help("Pass --config <path> explicitly")
    )]
    ConfigPathUnknown,

    #[error("IO operation failed")]
    #[diagnostic(code(io::operation_failed))]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("Prompt failed")]
    #[diagnostic(
        code(prompt::failed),
        help("Run from an interactive terminal or pass --yes to skip confirmation")
    )]
    PromptFailed {
        #[from]
        source: inquire::InquireError,
    },
}

impl CliError {
    pub fn apply_failed(source: mod_overlay::Error) -> Self {
        match source {
            mod_overlay::Error::ModRootMissing(path) => Self::ModFolderMissing { path },
            source => Self::ApplyFailed {
                path: source.path().to_path_buf(),
                source,
            },
        }
    }

    pub fn revert_failed(source: mod_overlay::Error) -> Self {
        match source {
            mod_overlay::Error::ModRootMissing(path) => Self::ModFolderMissing { path },
            source => Self::RevertFailed {
                path: source.path().to_path_buf(),
                source,
            },
        }
    }

    pub fn status_failed(source: mod_overlay::Error) -> Self {
        Self::StatusFailed {
            path: source.path().to_path_buf(),
            source,
        }
    }
}
