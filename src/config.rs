//! Configuration module
//!
//! Settings come from an optional TOML file; command-line options override
//! them.

mod loader;
mod types;

pub use loader::{config_path, load_config, load_config_from_path, parse_config};
pub use types::{Config, ReferenceConfig, ReportConfig, TokenizerConfig};
