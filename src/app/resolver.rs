//! Output-path resolution for scheduled jobs.
//!
//! Candidates are tried in a fixed order and the first valid one wins:
//! the requested directory (which must also grant read and write access),
//! then the user's default output setting, the system default output
//! setting, and finally the user's home folder.
//!
//! Lookup failures only disqualify a candidate. The single error that ends a
//! resolution is a folder whose metadata disables scheduling for a user who
//! is otherwise allowed to manage schedules.

use crate::app::ResolverContext;
use crate::domain::repository::paths::{concat, is_blank};
use crate::domain::repository::parse_flag;
use crate::domain::{
    AppError, CandidateSource, Folder, LookupError, ResolutionRequest, ResolvedPath, Session,
};
use crate::ports::{
    AuthorizationPolicy, HomePathDeriver, IdentityContext, RepositoryGateway, SettingsStore,
    run_as,
};

/// Outcome of checking whether a folder may receive scheduled output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScheduleDecision {
    Allowed,
    /// The acting user may not manage schedules at all.
    NotAuthorized,
    /// Folder metadata explicitly denies scheduling.
    Disabled,
}

/// Resolves the file path one scheduled job writes its output to.
pub struct OutputPathResolver<'a, R, A, S, H, I>
where
    R: RepositoryGateway,
    A: AuthorizationPolicy,
    S: SettingsStore,
    H: HomePathDeriver,
    I: IdentityContext,
{
    ctx: &'a ResolverContext<R, A, S, H, I>,
    request: ResolutionRequest,
}

impl<'a, R, A, S, H, I> OutputPathResolver<'a, R, A, S, H, I>
where
    R: RepositoryGateway,
    A: AuthorizationPolicy,
    S: SettingsStore,
    H: HomePathDeriver,
    I: IdentityContext,
{
    pub fn new(ctx: &'a ResolverContext<R, A, S, H, I>, request: ResolutionRequest) -> Self {
        Self { ctx, request }
    }

    /// Resolve the output file path as the job's acting user.
    ///
    /// `Ok(None)` means no candidate validated or the acting identity could
    /// not be established. `Err` is returned only for
    /// [`AppError::SchedulingNotAllowed`].
    pub fn resolve_output_file_path(&self) -> Result<Option<ResolvedPath>, AppError> {
        let user = self.request.action_user();
        match run_as(self.ctx.identity(), user, |session| self.evaluate(session)) {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::error!(
                    user = %user,
                    error = %err,
                    "Cannot run resolution as the job creator."
                );
                Ok(None)
            }
        }
    }

    fn evaluate(&self, session: &Session) -> Result<Option<ResolvedPath>, AppError> {
        if let Some(directory) = self.candidate(session, CandidateSource::Requested) {
            if self.is_valid_output_path(session, &directory)?
                && self.is_permitted(session, &directory)
            {
                return Ok(Some(self.resolved(&directory, CandidateSource::Requested)));
            }
            tracing::debug!(
                directory = %directory,
                "Requested directory rejected, trying fallbacks."
            );
        }

        // Fallbacks are not access-checked.
        for source in CandidateSource::FALLBACKS {
            let Some(candidate) = self.candidate(session, source) else {
                continue;
            };
            if self.is_valid_output_path(session, &candidate)? {
                return Ok(Some(self.resolved(&candidate, source)));
            }
            tracing::debug!(
                source = %source,
                candidate = %candidate,
                "Fallback candidate rejected."
            );
        }

        tracing::warn!(
            user = %session.user(),
            job = self.request.job_name(),
            "No output location validated, not even the home folder."
        );
        Ok(None)
    }

    fn resolved(&self, directory: &str, source: CandidateSource) -> ResolvedPath {
        let path = concat(directory, self.request.filename());
        tracing::info!(source = %source, path = %path, "Resolved scheduled output path.");
        ResolvedPath { path, source }
    }

    /// Candidate folder for `source`, or `None` when it is blank or unavailable.
    fn candidate(&self, session: &Session, source: CandidateSource) -> Option<String> {
        let key = self.ctx.config().setting_key.as_str();
        let lookup = match source {
            CandidateSource::Requested => Ok(self.request.directory().map(str::to_string)),
            CandidateSource::UserSetting => self.ctx.settings().user_setting(session, key),
            CandidateSource::SystemSetting => self.ctx.settings().system_setting(key),
            CandidateSource::HomeFolder => {
                self.ctx.home().home_folder_path(session.user()).map(Some)
            }
        };

        match lookup {
            Ok(value) => value.filter(|path| !is_blank(path)),
            Err(err) => {
                tracing::warn!(source = %source, error = %err, "Candidate lookup failed.");
                None
            }
        }
    }

    /// Whether `path` is an existing folder that may receive scheduled output.
    ///
    /// Fails with [`AppError::SchedulingNotAllowed`] when the folder's
    /// metadata disables scheduling for an authorized user.
    fn is_valid_output_path(&self, session: &Session, path: &str) -> Result<bool, AppError> {
        let folder = match self.ctx.repository().get_folder(session, path) {
            Ok(Some(entry)) if entry.is_folder() => entry,
            Ok(Some(_)) => {
                tracing::debug!(path, "Candidate is not a folder.");
                return Ok(false);
            }
            Ok(None) => {
                tracing::debug!(path, "Candidate folder does not exist.");
                return Ok(false);
            }
            Err(err) => {
                tracing::warn!(path, error = %err, "Folder lookup failed.");
                return Ok(false);
            }
        };

        match self.schedule_decision(session, &folder) {
            Ok(ScheduleDecision::Allowed) => Ok(true),
            Ok(ScheduleDecision::NotAuthorized) => {
                tracing::debug!(user = %session.user(), "User may not manage schedules.");
                Ok(false)
            }
            Ok(ScheduleDecision::Disabled) => Err(AppError::SchedulingNotAllowed {
                job_name: self.request.job_name().to_string(),
                user: self.request.action_user().to_string(),
            }),
            Err(err) => {
                tracing::warn!(path, error = %err, "Schedulability check failed.");
                Ok(false)
            }
        }
    }

    fn schedule_decision(
        &self,
        session: &Session,
        folder: &Folder,
    ) -> Result<ScheduleDecision, LookupError> {
        let config = self.ctx.config();
        if !self.ctx.authorization().is_allowed(session, &config.manage_action)? {
            return Ok(ScheduleDecision::NotAuthorized);
        }

        let metadata = self.ctx.repository().get_folder_metadata(session, &folder.id)?;
        match metadata.get(&config.schedulable_key) {
            Some(flag) if !parse_flag(flag) => Ok(ScheduleDecision::Disabled),
            _ => Ok(ScheduleDecision::Allowed),
        }
    }

    /// Read and write access of the acting user on `path`.
    fn is_permitted(&self, session: &Session, path: &str) -> bool {
        match self.ctx.repository().has_read_write_access(session, path) {
            Ok(permitted) => {
                if !permitted {
                    tracing::debug!(path, user = %session.user(), "Missing read/write access.");
                }
                permitted
            }
            Err(err) => {
                tracing::warn!(path, error = %err, "Access check failed.");
                false
            }
        }
    }
}
