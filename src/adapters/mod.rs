pub mod catalog;
pub mod home_folder;
pub mod thread_identity;

pub use catalog::RepositoryCatalog;
pub use home_folder::HomeFolderDeriver;
pub use thread_identity::{ThreadIdentityContext, current_identity};
