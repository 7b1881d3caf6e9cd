//! Configuration file parsing for launchdeck
//!
//! Supports `$CONFIG_DIR/launchdeck/config.toml` with `[api]` and `[ui]`
//! sections. Command-line flags override file values.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_dir, init_config_dir, load_settings, read_settings, CONFIG_FILENAME,
};
pub use types::*;
