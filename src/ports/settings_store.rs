use crate::domain::{LookupError, Session};

/// Key/value settings, scoped per user or system-wide.
pub trait SettingsStore: Send + Sync {
    /// Setting value for the session user.
    fn user_setting(&self, session: &Session, key: &str) -> Result<Option<String>, LookupError>;

    /// System-wide setting value.
    fn system_setting(&self, key: &str) -> Result<Option<String>, LookupError>;
}

impl<T: SettingsStore + ?Sized> SettingsStore for &T {
    fn user_setting(&self, session: &Session, key: &str) -> Result<Option<String>, LookupError> {
        (**self).user_setting(session, key)
    }

    fn system_setting(&self, key: &str) -> Result<Option<String>, LookupError> {
        (**self).system_setting(key)
    }
}
