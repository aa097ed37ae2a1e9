//! Configuration: TOML file under the platform config dir, with defaults
//! when the file is absent and validation after parse.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, UiConfig};
