use thiserror::Error;
use tracing::debug;

use super::models::{CandidateFile, ValidationOutcome};
use crate::config::UploaderConfig;
use crate::ui::format_file_size;

/// Why a candidate was turned away. These are user-facing messages, never
/// propagated as failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("File \"{filename}\" has invalid type. Allowed: {allowed}")]
    InvalidFileType { filename: String, allowed: String },

    #[error("File \"{filename}\" exceeds maximum size of {max_size}")]
    FileTooLarge { filename: String, max_size: String },

    #[error("Only the first {max_files} valid files will be uploaded")]
    Truncated { max_files: usize },
}

#[derive(Debug, Clone)]
pub struct FileValidator {
    max_files: usize,
    max_file_size: u64,
    allowed_types: Vec<String>,
    allowed_lowercase: Vec<String>,
}

/// Extension as the uploader sees it: the text after the last `.`,
/// lower-cased and prefixed with `.`. A name without a dot yields the whole
/// lower-cased name.
pub fn file_extension(filename: &str) -> String {
    let tail = filename.rsplit('.').next().unwrap_or(filename);
    format!(".{}", tail.to_lowercase())
}

impl FileValidator {
    pub fn new(config: &UploaderConfig) -> Self {
        Self {
            max_files: config.max_files,
            max_file_size: config.max_file_size,
            allowed_types: config.allowed_types.clone(),
            allowed_lowercase: config
                .allowed_types
                .iter()
                .map(|ext| ext.to_lowercase())
                .collect(),
        }
    }

    pub fn with_default_config() -> Self {
        Self::new(&UploaderConfig::default())
    }

    /// Checks a single candidate against the type and size policy.
    pub fn check(&self, file: &CandidateFile) -> Result<(), ValidationError> {
        let extension = file_extension(&file.name);

        if !self.allowed_lowercase.contains(&extension) {
            return Err(ValidationError::InvalidFileType {
                filename: file.name.clone(),
                allowed: self.allowed_types.join(", "),
            });
        }

        if file.size > self.max_file_size {
            return Err(ValidationError::FileTooLarge {
                filename: file.name.clone(),
                max_size: format_file_size(self.max_file_size),
            });
        }

        Ok(())
    }

    /// Runs the policy over `candidates` in order. Rejections become messages
    /// and processing continues; acceptance stops once `max_files` is reached.
    /// The truncation notice is only added when candidates are left over.
    ///
    /// Expects a configuration that passed [`UploaderConfig::validate`].
    pub fn validate(&self, candidates: Vec<CandidateFile>) -> ValidationOutcome {
        let total = candidates.len();
        let mut outcome = ValidationOutcome::default();

        for (index, file) in candidates.into_iter().enumerate() {
            if let Err(err) = self.check(&file) {
                debug!(file = %file.name, size = file.size, "rejected: {}", err);
                outcome.errors.push(err.to_string());
                continue;
            }

            debug!(file = %file.name, size = file.size, "accepted");
            outcome.accepted.push(file);

            if outcome.accepted.len() >= self.max_files {
                if total > self.max_files && index + 1 < total {
                    let notice = ValidationError::Truncated {
                        max_files: self.max_files,
                    };
                    outcome.errors.push(notice.to_string());
                }
                break;
            }
        }

        outcome
    }
}
