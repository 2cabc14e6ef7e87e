use std::collections::HashSet;
use std::sync::Mutex;

use crate::domain::{LookupError, Session};
use crate::ports::AuthorizationPolicy;

/// Authorization double granting actions per user.
#[derive(Debug, Default)]
pub struct FakeAuthorization {
    grants: Mutex<HashSet<(String, String)>>,
    failing: Mutex<bool>,
}

impl FakeAuthorization {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow(self, user: &str, action: &str) -> Self {
        self.grants.lock().unwrap().insert((user.to_string(), action.to_string()));
        self
    }

    pub fn failing(self) -> Self {
        *self.failing.lock().unwrap() = true;
        self
    }
}

impl AuthorizationPolicy for FakeAuthorization {
    fn is_allowed(&self, session: &Session, action: &str) -> Result<bool, LookupError> {
        if *self.failing.lock().unwrap() {
            return Err(LookupError::Unavailable("policy service down".to_string()));
        }
        let key = (session.user().to_string(), action.to_string());
        Ok(self.grants.lock().unwrap().contains(&key))
    }
}
