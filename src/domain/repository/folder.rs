use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque repository identifier of a file or folder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FolderId(String);

impl FolderId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether a repository entry is a folder or a plain file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Folder,
    File,
}

/// A repository entry as returned by a folder lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub id: FolderId,
    pub path: String,
    pub kind: EntryKind,
}

impl Folder {
    pub fn folder<S: Into<String>>(id: FolderId, path: S) -> Self {
        Self { id, path: path.into(), kind: EntryKind::Folder }
    }

    pub fn file<S: Into<String>>(id: FolderId, path: S) -> Self {
        Self { id, path: path.into(), kind: EntryKind::File }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }
}

/// String-valued metadata attached to a repository entry.
pub type FolderMetadata = BTreeMap<String, String>;

/// Parse a string-encoded metadata flag.
///
/// `true`, `on`, and `yes` are true regardless of ASCII case. Anything else,
/// including a padded `" true "`, is false.
pub fn parse_flag(value: &str) -> bool {
    ["true", "on", "yes"].iter().any(|accepted| value.eq_ignore_ascii_case(accepted))
}
