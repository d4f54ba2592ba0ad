mod error;
mod loader;
pub mod types;
mod writer;

pub use error::ConfigError;
pub use loader::{GeneratedConfig, load_config};
pub use types::{ApiConfig, ConfigFile, MongoConfig, ServerConfig};
pub use writer::{ensure_config_dir, write_document};
