use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "uploader.toml";

const DEFAULT_MAX_FILES: usize = 10;
const DEFAULT_MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub uploader: UploaderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

/// Effective uploader settings. Built once when a controller is initialized
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploaderConfig {
    pub drop_zone_selector: String,
    pub file_input_selector: String,
    pub file_list_selector: String,
    pub status_selector: String,
    pub max_files: usize,
    pub max_file_size: u64,
    pub allowed_types: Vec<String>,
}

/// Caller-supplied overrides. Unset fields fall back to the base
/// configuration; unrecognized keys are ignored when deserializing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploaderOptions {
    #[serde(default, alias = "dropZoneSelector")]
    pub drop_zone_selector: Option<String>,
    #[serde(default, alias = "fileInputSelector")]
    pub file_input_selector: Option<String>,
    #[serde(default, alias = "fileListSelector")]
    pub file_list_selector: Option<String>,
    #[serde(default, alias = "statusSelector")]
    pub status_selector: Option<String>,
    #[serde(default, alias = "maxFiles")]
    pub max_files: Option<usize>,
    #[serde(default, alias = "maxFileSize")]
    pub max_file_size: Option<u64>,
    #[serde(default, alias = "allowedTypes")]
    pub allowed_types: Option<Vec<String>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            uploader: UploaderConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            cors_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
                "http://localhost:5000".to_string(),
            ],
        }
    }
}

impl Default for UploaderConfig {
    fn default() -> Self {
        Self {
            drop_zone_selector: ".upload-area".to_string(),
            file_input_selector: "input[type=\"file\"]".to_string(),
            file_list_selector: "#fileList".to_string(),
            status_selector: "[role=\"status\"]".to_string(),
            max_files: DEFAULT_MAX_FILES,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            allowed_types: vec![".pdf".to_string(), ".docx".to_string()],
        }
    }
}

impl UploaderConfig {
    /// Defaults with `options` laid over them.
    pub fn from_options(options: &UploaderOptions) -> Self {
        Self::default().merged_with(options)
    }

    /// Returns a copy of `self` with every option that is set replacing the
    /// corresponding field. Zero counts and sizes are not positive and are
    /// ignored.
    pub fn merged_with(&self, options: &UploaderOptions) -> Self {
        let mut merged = self.clone();

        if let Some(selector) = &options.drop_zone_selector {
            merged.drop_zone_selector = selector.clone();
        }
        if let Some(selector) = &options.file_input_selector {
            merged.file_input_selector = selector.clone();
        }
        if let Some(selector) = &options.file_list_selector {
            merged.file_list_selector = selector.clone();
        }
        if let Some(selector) = &options.status_selector {
            merged.status_selector = selector.clone();
        }

        match options.max_files {
            Some(0) => tracing::warn!("Ignoring max_files = 0, keeping {}", merged.max_files),
            Some(max_files) => merged.max_files = max_files,
            None => {}
        }

        match options.max_file_size {
            Some(0) => tracing::warn!("Ignoring max_file_size = 0, keeping {}", merged.max_file_size),
            Some(max_file_size) => merged.max_file_size = max_file_size,
            None => {}
        }

        if let Some(types) = &options.allowed_types {
            merged.allowed_types = types.clone();
        }

        merged
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_files == 0 {
            return Err(ConfigError::Message(
                "Uploader max_files must be greater than 0".to_string(),
            ));
        }

        if self.max_file_size == 0 {
            return Err(ConfigError::Message(
                "Uploader max_file_size must be greater than 0".to_string(),
            ));
        }

        if self.allowed_types.is_empty() {
            return Err(ConfigError::Message(
                "Uploader allowed_types cannot be empty".to_string(),
            ));
        }

        if let Some(bad) = self.allowed_types.iter().find(|ext| !ext.starts_with('.')) {
            return Err(ConfigError::Message(format!(
                "Allowed type {:?} must start with '.'",
                bad
            )));
        }

        if self.drop_zone_selector.is_empty() || self.file_input_selector.is_empty() {
            return Err(ConfigError::Message(
                "Drop zone and file input selectors cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Layers defaults, the TOML file at `path` (when it exists) and
    /// `UPLOADER__*` environment variables, in that order.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?);

        if path.exists() {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix("UPLOADER")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("server.cors_origins")
                .with_list_parse_key("uploader.allowed_types")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        app_config.validate()?;

        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("Server port cannot be 0".to_string()));
        }

        if self.server.host.is_empty() {
            return Err(ConfigError::Message("Server host cannot be empty".to_string()));
        }

        if self.server.host == "0.0.0.0" {
            tracing::warn!("Binding to all interfaces - make sure this is intended");
        }

        self.uploader.validate()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
