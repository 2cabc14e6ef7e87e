mod authorization_policy;
mod home_path_deriver;
mod identity_context;
mod repository_gateway;
mod settings_store;

pub use authorization_policy::AuthorizationPolicy;
pub use home_path_deriver::HomePathDeriver;
pub use identity_context::{IdentityContext, IdentityScope, run_as};
pub use repository_gateway::RepositoryGateway;
pub use settings_store::SettingsStore;
