use crate::errors::CliError;
use crate::println_pad;
use crate::utils::config;
use camino::{Utf8Path, Utf8PathBuf};
use colored::Colorize;
use mod_overlay::OverlayConfig;

/// Print a config path entry with an existence indicator
fn print_path_config(name: &str, path: &Utf8Path) {
    let status = if path.exists() {
        "✓".bright_green()
    } else {
        "✗".bright_red()
    };
    println_pad!("  {} {} {}", format!("{}:", name).bright_white(), path, status);
}

pub fn show_config(config_file: Option<&Utf8Path>, overlay: &OverlayConfig) -> miette::Result<()> {
    let config_path = config::resolve_config_path(config_file)
        .map(|p| p.to_string())
        .unwrap_or_else(|| "Unknown".to_string());

    println!();
    println_pad!("  {} {}", "config_file:".bright_white(), config_path);
    print_path_config("mod_root", &overlay.mod_root);
    print_path_config("target_root", &overlay.target_root);
    print_path_config("backup_root", &overlay.backup_root);
    println_pad!(
        "  {} {}",
        "manifest_name:".bright_white(),
        overlay.manifest_name
    );
    println!();

    Ok(())
}

pub fn init_config(config_file: Option<&Utf8Path>, overlay: &OverlayConfig) -> miette::Result<()> {
    let path: Utf8PathBuf =
        config::resolve_config_path(config_file).ok_or(CliError::ConfigPathUnknown)?;

    config::save_config(&path, overlay)?;

    println_pad!("{}", "✓ Configuration saved".bright_green().bold());
    println_pad!("  {} {}", "Config file:".bright_white().bold(), path);

    Ok(())
}
