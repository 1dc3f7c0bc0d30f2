use camino::Utf8PathBuf;
use clap::builder::{styling::AnsiColor, Styles};
use clap::ColorChoice;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use commands::{
    apply_mods, init_config, revert_mods, show_config, show_status, ApplyModsArgs,
    RevertModsArgs,
};
use inquire::Select;
use miette::Result;
use utils::config::{self, ConfigOverrides};

mod commands;
mod errors;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file (defaults to mod-command.toml next to the executable)
    #[arg(long = "config", global = true, value_name = "PATH")]
    config_file: Option<Utf8PathBuf>,

    /// Folder holding the mod files
    #[arg(long, global = true)]
    mods: Option<Utf8PathBuf>,

    /// Game folder the mod files are copied into
    #[arg(long, global = true)]
    game: Option<Utf8PathBuf>,

    /// Folder receiving the overwritten game files
    #[arg(long, global = true)]
    backup: Option<Utf8PathBuf>,

    /// File name of the manifest written inside the game folder
    #[arg(long, global = true)]
    manifest: Option<String>,

    /// Answer yes to every confirmation
    #[arg(short, long, global = true)]
    yes: bool,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            mod_root: self.mods.clone(),
            target_root: self.game.clone(),
            backup_root: self.backup.clone(),
            manifest_name: self.manifest.clone(),
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Copy the mod files into the game folder, backing up what they replace
    Apply,
    /// Remove the mod files and restore the backed up game files
    Revert,
    /// Show whether mods are currently applied
    Status,
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the resolved configuration
    Show,
    /// Write the resolved configuration to the configuration file
    Init,
}

fn parse_args() -> Args {
    // Configure colored/styled help output
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Blue.on_default());

    let matches = Args::command()
        .styles(styles)
        .color(ColorChoice::Auto)
        .get_matches();

    Args::from_arg_matches(&matches).expect("failed to parse arguments")
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "mod_command=debug,mod_overlay=debug"
    } else {
        "mod_command=info,mod_overlay=warn"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
}

/// Ask which operation to run when none was given on the command line.
fn prompt_command() -> Result<Commands> {
    const LOAD: &str = "Load mods";
    const REMOVE: &str = "Remove mods";

    let choice = Select::new("Load or remove?", vec![LOAD, REMOVE])
        .prompt()
        .map_err(errors::CliError::from)?;

    Ok(if choice == LOAD {
        Commands::Apply
    } else {
        Commands::Revert
    })
}

fn main() -> Result<()> {
    let args = parse_args();
    init_logging(args.verbose);
    tracing::debug!("Parsed CLI arguments: {:?}", args);

    let mut overlay = config::load_config(args.config_file.as_deref())?;
    args.overrides().apply_to(&mut overlay);

    let command = match args.command.clone() {
        Some(command) => command,
        None => prompt_command()?,
    };

    match command {
        Commands::Apply => apply_mods(&overlay, ApplyModsArgs { yes: args.yes }),
        Commands::Revert => revert_mods(&overlay, RevertModsArgs { yes: args.yes }),
        Commands::Status => show_status(&overlay),
        Commands::Config { action } => match action {
            ConfigCommands::Show => show_config(args.config_file.as_deref(), &overlay),
            ConfigCommands::Init => init_config(args.config_file.as_deref(), &overlay),
        },
    }
}
