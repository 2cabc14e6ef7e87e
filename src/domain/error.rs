use std::io;

use thiserror::Error;

/// Library-wide error type for schedout operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Folder metadata explicitly disables scheduling for an authorized user.
    #[error("Scheduling job '{job_name}' as user '{user}' is not allowed: the output folder is not schedulable")]
    SchedulingNotAllowed { job_name: String, user: String },

    /// Every candidate location was rejected, including the home folder.
    #[error("No valid output location could be resolved for user '{user}'")]
    NoValidOutputLocation { user: String },

    /// Resolution request is malformed.
    #[error("Invalid resolution request: {0}")]
    InvalidRequest(String),

    /// User name is invalid.
    #[error("Invalid user name '{0}': must be alphanumeric with '-', '_', '.', or '@'")]
    InvalidUserName(String),

    /// Configuration issue.
    #[error("{0}")]
    Configuration(String),

    /// Repository catalog fixture is malformed.
    #[error("Invalid repository catalog: {0}")]
    Catalog(String),

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn catalog_error<S: Into<String>>(message: S) -> Self {
        AppError::Catalog(message.into())
    }
}

/// Failure reported by a repository, authorization, settings, or home-path collaborator.
///
/// The resolver never propagates these; they disqualify a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Path not found: {0}")]
    NotFound(String),

    /// The acting identity may not perform the lookup.
    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Malformed repository path: {0}")]
    MalformedPath(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

/// Failure to establish or run inside an impersonated identity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("Unknown user '{0}'")]
    UnknownUser(String),

    #[error("Identity context unavailable: {0}")]
    Unavailable(String),
}
