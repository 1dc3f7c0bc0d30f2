mod apply;
mod config;
mod revert;
mod status;

pub use apply::{apply_mods, ApplyModsArgs};
pub use config::{init_config, show_config};
pub use revert::{revert_mods, RevertModsArgs};
pub use status::show_status;
