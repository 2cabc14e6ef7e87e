pub mod user_name;
pub mod validation;

pub use user_name::UserName;
