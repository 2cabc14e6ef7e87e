use crate::domain::repository::paths::{is_blank, path_no_end_separator};
use crate::domain::{AppError, UserName};

const UNKNOWN_JOB_NAME: &str = "<?>";

/// Inputs of one output-path resolution.
///
/// Immutable once built; each resolution owns its own request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRequest {
    filename: String,
    directory: Option<String>,
    action_user: UserName,
}

impl ResolutionRequest {
    /// Create a request without a requested directory.
    pub fn new(filename: &str, action_user: UserName) -> Result<Self, AppError> {
        if is_blank(filename) {
            return Err(AppError::InvalidRequest("filename pattern must not be blank".to_string()));
        }
        Ok(Self { filename: filename.to_string(), directory: None, action_user })
    }

    /// Set the requested output directory. Blank values mean "not requested".
    pub fn with_directory(mut self, directory: Option<&str>) -> Self {
        self.directory = directory.filter(|dir| !is_blank(dir)).map(str::to_string);
        self
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn directory(&self) -> Option<&str> {
        self.directory.as_deref()
    }

    pub fn action_user(&self) -> &UserName {
        &self.action_user
    }

    /// Job name carried by the filename pattern, for diagnostics.
    pub fn job_name(&self) -> &str {
        if is_blank(&self.filename) {
            UNKNOWN_JOB_NAME
        } else {
            path_no_end_separator(&self.filename)
        }
    }
}
