use crate::domain::UserName;

/// The identity a unit of work runs as.
///
/// Handed explicitly to every repository, authorization, and settings call
/// instead of living in ambient session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: UserName,
}

impl Session {
    pub fn for_user(user: UserName) -> Self {
        Self { user }
    }

    pub fn user(&self) -> &UserName {
        &self.user
    }
}
