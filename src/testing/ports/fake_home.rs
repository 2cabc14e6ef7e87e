use std::sync::Mutex;

use crate::domain::{LookupError, UserName};
use crate::ports::HomePathDeriver;

/// Home-path double deriving `/home/<user>`.
#[derive(Debug, Default)]
pub struct FakeHome {
    failing: Mutex<bool>,
}

impl FakeHome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(self) -> Self {
        *self.failing.lock().unwrap() = true;
        self
    }
}

impl HomePathDeriver for FakeHome {
    fn home_folder_path(&self, user: &UserName) -> Result<String, LookupError> {
        if *self.failing.lock().unwrap() {
            return Err(LookupError::Unavailable("paths strategy missing".to_string()));
        }
        Ok(format!("/home/{user}"))
    }
}
