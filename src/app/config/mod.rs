//! Disk-backed configuration loaders.
//!
//! Pure schema parsing and validation live in `domain::configuration`.

mod load_config;

pub use load_config::{load_config, parse_config_content};
