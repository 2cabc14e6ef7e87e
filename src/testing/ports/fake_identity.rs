use std::sync::{Arc, Mutex};

use crate::domain::{IdentityError, Session, UserName};
use crate::ports::{IdentityContext, IdentityScope};

/// Identity double recording every scope it opens and closes.
#[derive(Debug, Default)]
pub struct FakeIdentity {
    entered: Mutex<Vec<String>>,
    released: Arc<Mutex<Vec<String>>>,
    failing: Mutex<bool>,
}

impl FakeIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(self) -> Self {
        *self.failing.lock().unwrap() = true;
        self
    }

    pub fn entered(&self) -> Vec<String> {
        self.entered.lock().unwrap().clone()
    }

    pub fn released(&self) -> Vec<String> {
        self.released.lock().unwrap().clone()
    }
}

impl IdentityContext for FakeIdentity {
    fn enter(&self, user: &UserName) -> Result<IdentityScope, IdentityError> {
        if *self.failing.lock().unwrap() {
            return Err(IdentityError::Unavailable("security helper missing".to_string()));
        }
        self.entered.lock().unwrap().push(user.to_string());

        let released = Arc::clone(&self.released);
        let name = user.to_string();
        Ok(IdentityScope::with_release(Session::for_user(user.clone()), move || {
            released.lock().unwrap().push(name);
        }))
    }
}
