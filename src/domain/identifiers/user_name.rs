use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Deserializer};

use super::validation::validate_user_name;
use crate::domain::AppError;

/// A validated user name, the identity a scheduled job runs as.
///
/// Guarantees:
/// - Non-empty
/// - Contains only alphanumeric characters, `-`, `_`, `.`, or `@`
/// - No path separators and never `.` or `..`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserName(String);

impl UserName {
    pub fn new(name: &str) -> Result<Self, AppError> {
        if !validate_user_name(name) {
            return Err(AppError::InvalidUserName(name.to_string()));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for UserName {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<UserName> for String {
    fn from(val: UserName) -> Self {
        val.0
    }
}

impl<'de> Deserialize<'de> for UserName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        UserName::new(&s).map_err(serde::de::Error::custom)
    }
}
