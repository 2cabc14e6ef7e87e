use crate::domain::{LookupError, Session};

/// Answers whether the session user may perform a named action.
pub trait AuthorizationPolicy: Send + Sync {
    fn is_allowed(&self, session: &Session, action: &str) -> Result<bool, LookupError>;
}

impl<T: AuthorizationPolicy + ?Sized> AuthorizationPolicy for &T {
    fn is_allowed(&self, session: &Session, action: &str) -> Result<bool, LookupError> {
        (**self).is_allowed(session, action)
    }
}
