pub mod settings;

pub use settings::{AppConfig, ServerConfig, UploaderConfig, UploaderOptions, DEFAULT_CONFIG_FILE};
