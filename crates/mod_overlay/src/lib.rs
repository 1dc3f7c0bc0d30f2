//! Reversible file overlay for game mods.
//!
//! This crate copies a folder of mod files onto a game installation and can
//! later undo it exactly. It provides:
//!
//! - **Content comparison**: files already identical to the mod file (by SHA-1
//!   digest) are left alone
//! - **Backups**: game files about to be overwritten are first copied into a
//!   backup folder mirroring the game layout
//! - **Manifest marker**: a log file in the game folder whose presence means
//!   "overlay applied"
//! - **Revert**: restores backups, deletes mod files and removes folders that
//!   only existed to hold mod files
//!
//! # Example
//!
//! ```no_run
//! use mod_overlay::{apply, needs_confirmation, revert, Operation, OverlayConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = OverlayConfig::new("mods", "C:/Games/MyGame", "backup");
//!
//! let applied = mod_overlay::is_applied(&config);
//! if !needs_confirmation(applied, Operation::Apply) {
//!     let log = apply(&config)?;
//!     println!("{} actions", log.len());
//! }
//!
//! // ...later
//! revert(&config)?;
//! # Ok(())
//! # }
//! ```

pub mod action;
pub mod apply;
pub mod config;
pub mod digest;
pub mod error;
pub mod manifest;
pub mod revert;
pub mod status;
pub mod walk;


// Re-export main types
pub use action::{Action, ActionLog, ActionSummary};
pub use apply::apply;
pub use config::{OverlayConfig, DEFAULT_MANIFEST_NAME};
pub use digest::{file_digest, files_identical, FileDigest};
pub use error::{Error, Result};
pub use manifest::{is_applied, needs_confirmation, Operation};
pub use revert::revert;
pub use status::{status, OverlayStatus};
