use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::domain::{Folder, FolderId, FolderMetadata, LookupError, Session};
use crate::ports::RepositoryGateway;

/// Repository double with per-path failure injection.
///
/// Entry ids are `id:<path>`.
#[derive(Debug, Default)]
pub struct FakeRepository {
    entries: Mutex<HashMap<String, Folder>>,
    metadata: Mutex<HashMap<FolderId, FolderMetadata>>,
    read_write: Mutex<HashMap<String, HashSet<String>>>,
    failing_lookups: Mutex<HashSet<String>>,
    failing_metadata: Mutex<HashSet<String>>,
    failing_access: Mutex<HashSet<String>>,
    access_checks: Mutex<Vec<String>>,
    lookups: Mutex<Vec<(String, String)>>,
}

impl FakeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id_for(path: &str) -> FolderId {
        FolderId::new(format!("id:{path}"))
    }

    pub fn with_folder(self, path: &str) -> Self {
        let folder = Folder::folder(Self::id_for(path), path);
        self.entries.lock().unwrap().insert(path.to_string(), folder);
        self
    }

    pub fn with_file(self, path: &str) -> Self {
        let file = Folder::file(Self::id_for(path), path);
        self.entries.lock().unwrap().insert(path.to_string(), file);
        self
    }

    pub fn with_metadata(self, path: &str, key: &str, value: &str) -> Self {
        self.metadata
            .lock()
            .unwrap()
            .entry(Self::id_for(path))
            .or_default()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn grant_read_write(self, path: &str, user: &str) -> Self {
        self.read_write
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .insert(user.to_string());
        self
    }

    pub fn fail_lookup(self, path: &str) -> Self {
        self.failing_lookups.lock().unwrap().insert(path.to_string());
        self
    }

    pub fn fail_metadata(self, path: &str) -> Self {
        self.failing_metadata.lock().unwrap().insert(path.to_string());
        self
    }

    pub fn fail_access(self, path: &str) -> Self {
        self.failing_access.lock().unwrap().insert(path.to_string());
        self
    }

    /// Paths whose access was checked, in call order.
    pub fn access_checks(&self) -> Vec<String> {
        self.access_checks.lock().unwrap().clone()
    }

    /// `(user, path)` of every folder lookup, in call order.
    pub fn lookups(&self) -> Vec<(String, String)> {
        self.lookups.lock().unwrap().clone()
    }
}

impl RepositoryGateway for FakeRepository {
    fn get_folder(&self, session: &Session, path: &str) -> Result<Option<Folder>, LookupError> {
        self.lookups.lock().unwrap().push((session.user().to_string(), path.to_string()));
        if self.failing_lookups.lock().unwrap().contains(path) {
            return Err(LookupError::Unavailable(format!("lookup of {path} failed")));
        }
        Ok(self.entries.lock().unwrap().get(path).cloned())
    }

    fn get_folder_metadata(
        &self,
        _session: &Session,
        id: &FolderId,
    ) -> Result<FolderMetadata, LookupError> {
        let failing = self.failing_metadata.lock().unwrap();
        if failing.iter().any(|path| Self::id_for(path) == *id) {
            return Err(LookupError::Unavailable(format!("metadata of {id} unavailable")));
        }
        Ok(self.metadata.lock().unwrap().get(id).cloned().unwrap_or_default())
    }

    fn has_read_write_access(&self, session: &Session, path: &str) -> Result<bool, LookupError> {
        self.access_checks.lock().unwrap().push(path.to_string());
        if self.failing_access.lock().unwrap().contains(path) {
            return Err(LookupError::AccessDenied(path.to_string()));
        }
        Ok(self
            .read_write
            .lock()
            .unwrap()
            .get(path)
            .is_some_and(|users| users.contains(session.user().as_str())))
    }
}
