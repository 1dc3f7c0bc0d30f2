use crate::errors::CliError;
use crate::println_pad;
use crate::utils::confirm;
use colored::Colorize;
use mod_overlay::{needs_confirmation, Action, Operation, OverlayConfig};

pub struct RevertModsArgs {
    /// Skip the confirmation when no manifest is found
    pub yes: bool,
}

pub fn revert_mods(config: &OverlayConfig, args: RevertModsArgs) -> miette::Result<()> {
    let applied = mod_overlay::is_applied(config);
    if needs_confirmation(applied, Operation::Revert)
        && !confirm("Mods not detected, continue?", args.yes)?
    {
        println_pad!("{}", "Nothing was changed.".bright_yellow());
        return Ok(());
    }

    println_pad!(
        "{} {}",
        "🧹 Removing mods from:".bright_blue().bold(),
        config.target_root.as_str().bright_cyan().bold()
    );

    let log = mod_overlay::revert(config).map_err(CliError::revert_failed)?;

    for action in &log {
        let line = action.to_string();
        match action {
            Action::Restored { .. } => println_pad!("{}", line.bright_green()),
            Action::LeftDir { .. } => println_pad!("{}", line.bright_yellow()),
            Action::KeptDir { .. } => println_pad!("{}", line.dimmed()),
            _ => println_pad!("{}", line),
        }
    }

    let summary = log.summary();
    println_pad!(
        "{}",
        format!(
            "{} removed, {} restored, {} folders removed, {} folders kept",
            summary.removed_files, summary.restored, summary.removed_dirs, summary.kept_dirs
        )
        .dimmed()
    );
    println_pad!("{}", "✅ Done removing files".bright_green().bold());

    Ok(())
}
