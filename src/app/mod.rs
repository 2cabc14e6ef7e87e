pub mod cli;
pub mod config;
mod context;
pub mod resolver;

pub use context::ResolverContext;
pub use resolver::OutputPathResolver;
