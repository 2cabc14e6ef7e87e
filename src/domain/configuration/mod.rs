pub mod resolver_config;

pub use resolver_config::{
    ConfigFile, DEFAULT_HOME_ROOT, DEFAULT_OUTPUT_PATH_SETTING, ResolverConfig,
    SCHEDULABLE_KEY, SCHEDULER_MANAGE_ACTION,
};
