use clap::{Parser, Subcommand};
use scratchpad::commands::*;
use scratchpad::core::{
    config::{Config, ConfigOverrides, PickerProvider},
    dirs::get_log_file,
    error::Result,
    logging::init_logging,
    print_error,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scratchpad")]
#[command(about = "Scratch files scoped to the current workspace and git branch")]
#[command(version)]
struct Cli {
    /// Enable debug logging to the scratchpad log file
    #[arg(long, global = true)]
    debug: bool,

    /// Base directory for scratch files (overrides the config file)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Extension for generated file names (overrides the config file)
    #[arg(long, global = true)]
    ext: Option<String>,

    /// Picker used by `list`: builtin, fzf, skim or gum
    #[arg(long, global = true)]
    picker: Option<PickerProvider>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the latest scratch file (or PATH) in $EDITOR
    Open {
        /// Scratch file to open instead of the latest one
        path: Option<PathBuf>,
    },
    /// Create a new scratch file and print its path
    Create {
        /// File name to use verbatim instead of a generated one
        #[arg(short, long)]
        name: Option<String>,
        /// Open the new file in $EDITOR right away
        #[arg(short, long)]
        open: bool,
    },
    /// Pick a scratch file of this workspace and open it
    List {
        /// Print the paths, newest first, instead of starting a picker
        #[arg(long)]
        plain: bool,
    },
    /// Print the latest scratch file, creating one if needed
    Path,
    /// Print the scratch directory of this workspace
    Dir,
    /// Print the effective configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

fn load_config(cli: &Cli) -> Result<Config> {
    let overrides = ConfigOverrides {
        scratch_root: cli.root.clone(),
        default_file_extension: cli.ext.clone(),
        picker_provider: cli.picker,
        debug: cli.debug,
    };
    Ok(Config::load()?.apply(overrides))
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    if let Err(e) = get_log_file().and_then(|log_file| init_logging(config.log_level, &log_file)) {
        print_error(&format!("Logging disabled: {e}"));
    }

    match cli.command {
        Commands::Open { path } => execute_open(config, path),
        Commands::Create { name, open } => execute_create(config, name, open),
        Commands::List { plain } => execute_list(config, plain),
        Commands::Path => execute_path(config),
        Commands::Dir => execute_dir(config),
        Commands::Config { init } => execute_config(&config, init),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
