pub mod configuration;
pub mod error;
pub mod identifiers;
pub mod repository;
pub mod resolution;
pub mod session;

pub use configuration::{
    ConfigFile, DEFAULT_HOME_ROOT, DEFAULT_OUTPUT_PATH_SETTING, ResolverConfig,
    SCHEDULABLE_KEY, SCHEDULER_MANAGE_ACTION,
};
pub use error::{AppError, IdentityError, LookupError};
pub use identifiers::UserName;
pub use repository::{EntryKind, Folder, FolderId, FolderMetadata};
pub use resolution::{CandidateSource, ResolutionRequest, ResolvedPath};
pub use session::Session;
