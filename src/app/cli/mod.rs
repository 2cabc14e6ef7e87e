//! CLI Adapter.

mod logging;
mod resolve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::AppError;
use crate::domain::repository::paths::concat;
use resolve::{OutputFormat, ResolveArgs};

#[derive(Parser)]
#[command(name = "schedout")]
#[command(version)]
#[command(about = "Resolve where a scheduled job writes its output", long_about = None)]
struct Cli {
    /// Increase log detail (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the output file path of a scheduled job against a repository catalog
    #[clap(visible_alias = "r")]
    Resolve {
        /// Repository catalog (TOML)
        #[arg(long)]
        catalog: PathBuf,
        /// Resolver configuration (TOML)
        #[arg(long)]
        config: Option<PathBuf>,
        /// User the job runs as
        #[arg(short, long)]
        user: String,
        /// Output filename pattern
        #[arg(short, long)]
        filename: String,
        /// Requested output directory
        #[arg(short, long)]
        directory: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Join a folder path and a filename with a single separator
    Concat { directory: String, filename: String },
}

pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let result: Result<(), AppError> = match cli.command {
        Commands::Resolve { catalog, config, user, filename, directory, format } => {
            resolve::run_resolve(ResolveArgs { catalog, config, user, filename, directory, format })
        }
        Commands::Concat { directory, filename } => {
            println!("{}", concat(&directory, &filename));
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
