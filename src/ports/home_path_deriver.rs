use crate::domain::{LookupError, UserName};

/// Computes a user's home folder path.
pub trait HomePathDeriver: Send + Sync {
    fn home_folder_path(&self, user: &UserName) -> Result<String, LookupError>;
}

impl<T: HomePathDeriver + ?Sized> HomePathDeriver for &T {
    fn home_folder_path(&self, user: &UserName) -> Result<String, LookupError> {
        (**self).home_folder_path(user)
    }
}
