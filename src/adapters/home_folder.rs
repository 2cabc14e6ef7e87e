use crate::domain::repository::paths::concat;
use crate::domain::{LookupError, ResolverConfig, UserName};
use crate::ports::HomePathDeriver;

/// Derives `<home-root>/<user>`.
#[derive(Debug, Clone)]
pub struct HomeFolderDeriver {
    home_root: String,
}

impl HomeFolderDeriver {
    pub fn new<S: Into<String>>(home_root: S) -> Self {
        Self { home_root: home_root.into() }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(config.home_root.clone())
    }
}

impl HomePathDeriver for HomeFolderDeriver {
    fn home_folder_path(&self, user: &UserName) -> Result<String, LookupError> {
        Ok(concat(&self.home_root, user.as_str()))
    }
}
