pub mod folder;
pub mod paths;

pub use folder::{EntryKind, Folder, FolderId, FolderMetadata, parse_flag};
