use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::{LookupError, Session};
use crate::ports::SettingsStore;

/// Settings double with independent user and system tables.
#[derive(Debug, Default)]
pub struct FakeSettings {
    user: Mutex<HashMap<(String, String), String>>,
    system: Mutex<HashMap<String, String>>,
    failing_user: Mutex<bool>,
    failing_system: Mutex<bool>,
}

impl FakeSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_setting(self, user: &str, key: &str, value: &str) -> Self {
        self.user.lock().unwrap().insert((user.to_string(), key.to_string()), value.to_string());
        self
    }

    pub fn with_system_setting(self, key: &str, value: &str) -> Self {
        self.system.lock().unwrap().insert(key.to_string(), value.to_string());
        self
    }

    pub fn failing_user_settings(self) -> Self {
        *self.failing_user.lock().unwrap() = true;
        self
    }

    pub fn failing_system_settings(self) -> Self {
        *self.failing_system.lock().unwrap() = true;
        self
    }
}

impl SettingsStore for FakeSettings {
    fn user_setting(&self, session: &Session, key: &str) -> Result<Option<String>, LookupError> {
        if *self.failing_user.lock().unwrap() {
            return Err(LookupError::Unavailable("user settings unavailable".to_string()));
        }
        let lookup = (session.user().to_string(), key.to_string());
        Ok(self.user.lock().unwrap().get(&lookup).cloned())
    }

    fn system_setting(&self, key: &str) -> Result<Option<String>, LookupError> {
        if *self.failing_system.lock().unwrap() {
            return Err(LookupError::Unavailable("system settings unavailable".to_string()));
        }
        Ok(self.system.lock().unwrap().get(key).cloned())
    }
}
