//! Resolver configuration domain models.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;
use crate::domain::repository::paths::is_blank;

/// Setting key naming a default scheduler output folder.
pub const DEFAULT_OUTPUT_PATH_SETTING: &str = "default-scheduler-output-path";
/// Authorization action required to manage schedules.
pub const SCHEDULER_MANAGE_ACTION: &str = "scheduler.manage";
/// Folder metadata key carrying the string-encoded schedulable flag.
pub const SCHEDULABLE_KEY: &str = "schedulable";
/// Parent folder of every user home folder.
pub const DEFAULT_HOME_ROOT: &str = "/home";

/// Configuration file layout, `[resolver]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub resolver: ResolverConfig,
}

/// Well-known names the resolver consults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ResolverConfig {
    /// User and system setting key for the default output path.
    #[serde(default = "default_setting_key")]
    pub setting_key: String,
    /// Authorization action that allows managing schedules.
    #[serde(default = "default_manage_action")]
    pub manage_action: String,
    /// Folder metadata key that can disable scheduling.
    #[serde(default = "default_schedulable_key")]
    pub schedulable_key: String,
    /// Root folder under which home folders are derived.
    #[serde(default = "default_home_root")]
    pub home_root: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            setting_key: default_setting_key(),
            manage_action: default_manage_action(),
            schedulable_key: default_schedulable_key(),
            home_root: default_home_root(),
        }
    }
}

impl ResolverConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        let required = [
            ("setting-key", &self.setting_key),
            ("manage-action", &self.manage_action),
            ("schedulable-key", &self.schedulable_key),
            ("home-root", &self.home_root),
        ];
        for (name, value) in required {
            if is_blank(value) {
                return Err(AppError::config_error(format!("{name} must not be empty")));
            }
        }
        if !self.home_root.starts_with('/') {
            return Err(AppError::config_error(format!(
                "home-root must be an absolute repository path, got '{}'",
                self.home_root
            )));
        }
        Ok(())
    }
}

fn default_setting_key() -> String {
    DEFAULT_OUTPUT_PATH_SETTING.to_string()
}

fn default_manage_action() -> String {
    SCHEDULER_MANAGE_ACTION.to_string()
}

fn default_schedulable_key() -> String {
    SCHEDULABLE_KEY.to_string()
}

fn default_home_root() -> String {
    DEFAULT_HOME_ROOT.to_string()
}
