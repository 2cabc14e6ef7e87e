//! In-memory repository catalog loaded from TOML.
//!
//! One document describes folders, files, ACLs, metadata, authorized actions,
//! and settings, so a single value serves as repository gateway,
//! authorization policy, and settings store.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::repository::paths::normalize_folder_path;
use crate::domain::{
    AppError, Folder, FolderId, FolderMetadata, LookupError, Session, UserName,
};
use crate::ports::{AuthorizationPolicy, RepositoryGateway, SettingsStore};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDocument {
    #[serde(default)]
    settings: BTreeMap<String, String>,
    #[serde(default)]
    folders: Vec<FolderEntry>,
    #[serde(default)]
    files: Vec<FileEntry>,
    #[serde(default)]
    users: BTreeMap<UserName, UserEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct FolderEntry {
    path: String,
    id: Option<String>,
    #[serde(default)]
    read_write: Vec<UserName>,
    #[serde(default)]
    metadata: FolderMetadata,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileEntry {
    path: String,
    id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct UserEntry {
    #[serde(default)]
    actions: BTreeSet<String>,
    #[serde(default)]
    settings: BTreeMap<String, String>,
}

/// Repository, authorization, and settings fixture.
#[derive(Debug, Clone, Default)]
pub struct RepositoryCatalog {
    entries: BTreeMap<String, Folder>,
    metadata: BTreeMap<FolderId, FolderMetadata>,
    read_write: BTreeMap<String, BTreeSet<UserName>>,
    system_settings: BTreeMap<String, String>,
    user_actions: BTreeMap<UserName, BTreeSet<String>>,
    user_settings: BTreeMap<UserName, BTreeMap<String, String>>,
}

impl RepositoryCatalog {
    /// Load a catalog document from disk.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|err| {
            AppError::catalog_error(format!("cannot read {}: {}", path.display(), err))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse a catalog document.
    pub fn from_toml_str(content: &str) -> Result<Self, AppError> {
        let document: CatalogDocument = toml::from_str(content)?;
        let mut catalog = Self { system_settings: document.settings, ..Self::default() };

        for folder in document.folders {
            let path = catalog_path(&folder.path)?;
            let id = FolderId::new(folder.id.unwrap_or_else(|| path.clone()));
            catalog.insert(Folder::folder(id.clone(), path.clone()))?;
            catalog.metadata.insert(id, folder.metadata);
            catalog.read_write.insert(path, folder.read_write.into_iter().collect());
        }

        for file in document.files {
            let path = catalog_path(&file.path)?;
            let id = FolderId::new(file.id.unwrap_or_else(|| path.clone()));
            catalog.insert(Folder::file(id.clone(), path))?;
            catalog.metadata.insert(id, FolderMetadata::new());
        }

        for (user, entry) in document.users {
            catalog.user_actions.insert(user.clone(), entry.actions);
            catalog.user_settings.insert(user, entry.settings);
        }

        Ok(catalog)
    }

    /// Users that appear anywhere in the catalog.
    pub fn known_users(&self) -> BTreeSet<UserName> {
        self.user_actions
            .keys()
            .cloned()
            .chain(self.read_write.values().flat_map(|users| users.iter().cloned()))
            .collect()
    }

    fn insert(&mut self, entry: Folder) -> Result<(), AppError> {
        if self.entries.contains_key(&entry.path) {
            return Err(AppError::catalog_error(format!("duplicate path '{}'", entry.path)));
        }
        if self.entries.values().any(|existing| existing.id == entry.id) {
            return Err(AppError::catalog_error(format!("duplicate id '{}'", entry.id)));
        }
        self.entries.insert(entry.path.clone(), entry);
        Ok(())
    }

    fn lookup_path(path: &str) -> Result<String, LookupError> {
        normalize_folder_path(path).ok_or_else(|| LookupError::MalformedPath(path.to_string()))
    }
}

fn catalog_path(path: &str) -> Result<String, AppError> {
    normalize_folder_path(path)
        .ok_or_else(|| AppError::catalog_error(format!("path '{path}' must be absolute")))
}

impl RepositoryGateway for RepositoryCatalog {
    fn get_folder(&self, _session: &Session, path: &str) -> Result<Option<Folder>, LookupError> {
        let path = Self::lookup_path(path)?;
        Ok(self.entries.get(&path).cloned())
    }

    fn get_folder_metadata(
        &self,
        _session: &Session,
        id: &FolderId,
    ) -> Result<FolderMetadata, LookupError> {
        self.metadata.get(id).cloned().ok_or_else(|| LookupError::NotFound(id.to_string()))
    }

    fn has_read_write_access(&self, session: &Session, path: &str) -> Result<bool, LookupError> {
        let path = Self::lookup_path(path)?;
        if !self.entries.contains_key(&path) {
            return Err(LookupError::NotFound(path));
        }
        Ok(self.read_write.get(&path).is_some_and(|users| users.contains(session.user())))
    }
}

impl AuthorizationPolicy for RepositoryCatalog {
    fn is_allowed(&self, session: &Session, action: &str) -> Result<bool, LookupError> {
        Ok(self.user_actions.get(session.user()).is_some_and(|actions| actions.contains(action)))
    }
}

impl SettingsStore for RepositoryCatalog {
    fn user_setting(&self, session: &Session, key: &str) -> Result<Option<String>, LookupError> {
        Ok(self.user_settings.get(session.user()).and_then(|settings| settings.get(key)).cloned())
    }

    fn system_setting(&self, key: &str) -> Result<Option<String>, LookupError> {
        Ok(self.system_settings.get(key).cloned())
    }
}
