use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use vsclean::commands::{clean::CleanOptions, config_cmd::ConfigOptions};
use vsclean::commands::{execute_clean, execute_config};
use vsclean::error::AppError;
use vsclean::path::resolve_root;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose());

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Commands::Clean(args) => {
            let options = CleanOptions {
                root: resolve_root(args.path, args.current),
                assume_yes: args.yes,
                json: args.json,
            };
            execute_clean(options)?;
        }
        Commands::Config(args) => {
            let options = ConfigOptions {
                show_path: args.path,
                edit: args.edit,
                add_exclude: args.add_exclude,
                remove_exclude: args.remove_exclude,
            };
            execute_config(options)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "vsclean=debug" } else { "vsclean=warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[derive(Parser)]
#[command(
    name = "vsclean",
    version,
    about = "Delete 'bin' and 'obj' build output folders and report the space freed."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn verbose(&self) -> bool {
        match &self.command {
            Commands::Clean(args) => args.verbose,
            Commands::Config(_) => false,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Delete every 'bin' and 'obj' folder under a directory.
    #[command(visible_alias = "cl")]
    Clean(CleanArgs),
    /// Manage vsclean configuration (exclusions).
    #[command(visible_alias = "cfg")]
    Config(ConfigArgs),
}

#[derive(Args)]
struct CleanArgs {
    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", action = ArgAction::SetTrue)]
    yes: bool,

    /// Log each folder as it is measured and removed (stderr).
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Print a JSON report instead of text.
    #[arg(long = "json", action = ArgAction::SetTrue, requires = "yes")]
    json: bool,

    /// Clean the current directory.
    #[arg(short = 'c', long = "current", action = ArgAction::SetTrue, conflicts_with = "path")]
    current: bool,

    /// Directory to clean.
    #[arg(value_name = "PATH", required_unless_present = "current")]
    path: Option<PathBuf>,
}

#[derive(Args)]
struct ConfigArgs {
    /// Show the configuration file path.
    #[arg(long = "path", action = ArgAction::SetTrue)]
    path: bool,

    /// Open the configuration file in $EDITOR.
    #[arg(long = "edit", action = ArgAction::SetTrue)]
    edit: bool,

    /// Add a glob pattern for folders that must never be walked or deleted.
    #[arg(long = "add-exclude", value_name = "PATTERN")]
    add_exclude: Option<String>,

    /// Remove a previously added exclude pattern.
    #[arg(long = "remove-exclude", value_name = "PATTERN")]
    remove_exclude: Option<String>,
}
