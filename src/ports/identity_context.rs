//! Scoped impersonation.
//!
//! An [`IdentityContext`] hands out an [`IdentityScope`] for a user. The scope
//! releases the impersonated identity when dropped, so every exit path of the
//! work run inside it (return, `?`, panic unwinding) restores the prior context.

use crate::domain::{IdentityError, Session, UserName};

/// Establishes the identity a unit of work runs as.
pub trait IdentityContext: Send + Sync {
    /// Enter `user`'s identity until the returned scope is dropped.
    fn enter(&self, user: &UserName) -> Result<IdentityScope, IdentityError>;
}

impl<T: IdentityContext + ?Sized> IdentityContext for &T {
    fn enter(&self, user: &UserName) -> Result<IdentityScope, IdentityError> {
        (**self).enter(user)
    }
}

/// An active impersonation. Dropping it restores the previous identity.
pub struct IdentityScope {
    session: Session,
    release: Option<Box<dyn FnOnce()>>,
}

impl IdentityScope {
    /// A scope that runs `release` when dropped.
    pub fn with_release<F>(session: Session, release: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self { session, release: Some(Box::new(release)) }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}

impl Drop for IdentityScope {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for IdentityScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityScope").field("session", &self.session).finish_non_exhaustive()
    }
}

/// Run `work` as `user`, returning its result.
///
/// Fails only when the identity cannot be established; whatever `work`
/// returns, including its own errors, is passed through untouched.
pub fn run_as<T, F>(
    identity: &dyn IdentityContext,
    user: &UserName,
    work: F,
) -> Result<T, IdentityError>
where
    F: FnOnce(&Session) -> T,
{
    let scope = identity.enter(user)?;
    Ok(work(scope.session()))
}
