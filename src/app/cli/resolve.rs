//! Resolve command implementation.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::adapters::{HomeFolderDeriver, RepositoryCatalog, ThreadIdentityContext};
use crate::app::ResolverContext;
use crate::app::config::load_config;
use crate::domain::{AppError, ResolutionRequest, UserName};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub struct ResolveArgs {
    pub catalog: PathBuf,
    pub config: Option<PathBuf>,
    pub user: String,
    pub filename: String,
    pub directory: Option<String>,
    pub format: OutputFormat,
}

pub fn run_resolve(args: ResolveArgs) -> Result<(), AppError> {
    let config = load_config(args.config.as_deref())?;
    let catalog = RepositoryCatalog::load(&args.catalog)?;
    let home = HomeFolderDeriver::from_config(&config);
    let identity = ThreadIdentityContext::with_known_users(catalog.known_users());
    let ctx = ResolverContext::new(config, &catalog, &catalog, &catalog, home, identity);

    let user = UserName::new(&args.user)?;
    let request =
        ResolutionRequest::new(&args.filename, user)?.with_directory(args.directory.as_deref());
    let resolved = crate::resolve_output_path(&ctx, request)?;

    match args.format {
        OutputFormat::Text => println!("{}", resolved),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&resolved)?),
    }
    Ok(())
}
