//! Thread-scoped impersonation.

use std::cell::RefCell;
use std::collections::BTreeSet;

use crate::domain::{IdentityError, Session, UserName};
use crate::ports::{IdentityContext, IdentityScope};

thread_local! {
    static CURRENT_IDENTITY: RefCell<Option<UserName>> = const { RefCell::new(None) };
}

/// Identity of the current thread, if an impersonation is active.
pub fn current_identity() -> Option<UserName> {
    CURRENT_IDENTITY.try_with(|current| current.borrow().clone()).ok().flatten()
}

/// Keeps the impersonated identity in thread-local storage.
///
/// Each thread has its own slot, so concurrent resolutions never observe
/// each other's identity. Scopes nest; dropping one restores the identity
/// that was active when it was entered.
#[derive(Debug, Clone, Default)]
pub struct ThreadIdentityContext {
    known_users: Option<BTreeSet<UserName>>,
}

impl ThreadIdentityContext {
    /// Accept any user name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept only the given users; others fail with `UnknownUser`.
    pub fn with_known_users<I>(users: I) -> Self
    where
        I: IntoIterator<Item = UserName>,
    {
        Self { known_users: Some(users.into_iter().collect()) }
    }
}

impl IdentityContext for ThreadIdentityContext {
    fn enter(&self, user: &UserName) -> Result<IdentityScope, IdentityError> {
        if self.known_users.as_ref().is_some_and(|known| !known.contains(user)) {
            return Err(IdentityError::UnknownUser(user.to_string()));
        }

        let previous = CURRENT_IDENTITY
            .try_with(|current| current.replace(Some(user.clone())))
            .map_err(|err| IdentityError::Unavailable(err.to_string()))?;

        tracing::trace!(user = %user, "Entered identity scope.");
        Ok(IdentityScope::with_release(Session::for_user(user.clone()), move || {
            // The slot is gone only during thread teardown, when there is nothing to restore.
            let _ = CURRENT_IDENTITY.try_with(|current| *current.borrow_mut() = previous);
        }))
    }
}
