use crate::errors::CliError;
use crate::println_pad;
use colored::Colorize;
use mod_overlay::OverlayConfig;

pub fn show_status(config: &OverlayConfig) -> miette::Result<()> {
    let status = mod_overlay::status(config).map_err(CliError::status_failed)?;

    if status.applied {
        println_pad!("{}", "✓ Mods are applied".bright_green().bold());
    } else {
        println_pad!("{}", "✗ Mods are not applied".bright_yellow().bold());
    }
    println_pad!(
        "  {} {}",
        "manifest:".bright_white(),
        status.manifest_path.as_str()
    );
    println_pad!(
        "  {} {}",
        "backed up files:".bright_white(),
        status.backed_up_files
    );

    Ok(())
}
