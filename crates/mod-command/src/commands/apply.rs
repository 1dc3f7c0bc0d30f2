use crate::errors::CliError;
use crate::println_pad;
use crate::utils::confirm;
use colored::Colorize;
use mod_overlay::{needs_confirmation, Action, Operation, OverlayConfig};

pub struct ApplyModsArgs {
    /// Skip the confirmation when mods appear to be applied already
    pub yes: bool,
}

pub fn apply_mods(config: &OverlayConfig, args: ApplyModsArgs) -> miette::Result<()> {
    let applied = mod_overlay::is_applied(config);
    if needs_confirmation(applied, Operation::Apply)
        && !confirm("Mods detected, continue?", args.yes)?
    {
        println_pad!("{}", "Nothing was changed.".bright_yellow());
        return Ok(());
    }

    println_pad!(
        "{} {}",
        "📦 Injecting mods from:".bright_blue().bold(),
        config.mod_root.as_str().bright_cyan().bold()
    );
    println_pad!(
        "{} {}",
        "🎮 Into game folder:".bright_yellow(),
        config.target_root.as_str().bright_white().bold()
    );

    let log = mod_overlay::apply(config).map_err(CliError::apply_failed)?;

    for action in &log {
        let line = action.to_string();
        match action {
            Action::Skipped { .. } => println_pad!("{}", line.dimmed()),
            Action::BackedUp { .. } => println_pad!("{}", line.bright_yellow()),
            _ => println_pad!("{}", line),
        }
    }

    let summary = log.summary();
    println_pad!(
        "{}",
        format!(
            "{} injected, {} backed up, {} unchanged, {} folders created",
            summary.injected, summary.backed_up, summary.skipped, summary.created_dirs
        )
        .dimmed()
    );
    println_pad!("{}", "✅ Done injecting files".bright_green().bold());

    Ok(())
}
