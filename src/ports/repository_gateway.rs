use crate::domain::{Folder, FolderId, FolderMetadata, LookupError, Session};

/// Read access to the repository that stores scheduled-job output.
pub trait RepositoryGateway: Send + Sync {
    /// Look up the entry at `path`. `Ok(None)` when nothing exists there.
    fn get_folder(&self, session: &Session, path: &str) -> Result<Option<Folder>, LookupError>;

    /// Read the metadata attached to an entry.
    fn get_folder_metadata(
        &self,
        session: &Session,
        id: &FolderId,
    ) -> Result<FolderMetadata, LookupError>;

    /// Whether the session user holds both read and write access on `path`.
    fn has_read_write_access(&self, session: &Session, path: &str) -> Result<bool, LookupError>;
}

impl<T: RepositoryGateway + ?Sized> RepositoryGateway for &T {
    fn get_folder(&self, session: &Session, path: &str) -> Result<Option<Folder>, LookupError> {
        (**self).get_folder(session, path)
    }

    fn get_folder_metadata(
        &self,
        session: &Session,
        id: &FolderId,
    ) -> Result<FolderMetadata, LookupError> {
        (**self).get_folder_metadata(session, id)
    }

    fn has_read_write_access(&self, session: &Session, path: &str) -> Result<bool, LookupError> {
        (**self).has_read_write_access(session, path)
    }
}
