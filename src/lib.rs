//! schedout: resolve the authoritative output path of a scheduled job.
//!
//! A job names an output directory and a filename pattern. The resolver
//! settles on one repository path by trying, in order, the requested
//! directory, the creator's default output setting, the system default
//! output setting, and the creator's home folder, evaluating every check as
//! the job's creator.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::{OutputPathResolver, ResolverContext};
pub use domain::repository::paths::concat;
use crate::ports::{
    AuthorizationPolicy, HomePathDeriver, IdentityContext, RepositoryGateway, SettingsStore,
};

pub use domain::{
    AppError, CandidateSource, IdentityError, LookupError, ResolutionRequest, ResolvedPath,
    ResolverConfig, Session, UserName,
};

/// Resolve the output file path for `request`.
///
/// Unlike [`OutputPathResolver::resolve_output_file_path`], an exhausted
/// fallback chain is reported as [`AppError::NoValidOutputLocation`].
pub fn resolve_output_path<R, A, S, H, I>(
    ctx: &ResolverContext<R, A, S, H, I>,
    request: ResolutionRequest,
) -> Result<ResolvedPath, AppError>
where
    R: RepositoryGateway,
    A: AuthorizationPolicy,
    S: SettingsStore,
    H: HomePathDeriver,
    I: IdentityContext,
{
    let user = request.action_user().to_string();
    OutputPathResolver::new(ctx, request)
        .resolve_output_file_path()?
        .ok_or(AppError::NoValidOutputLocation { user })
}
