//! Request and response models

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::UploaderOptions;
use crate::files::{CandidateFile, ValidationOutcome};
use crate::ui::format_file_size;

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }
}

/// File description submitted for a dry run of the uploader.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FileDescriptor {
    #[validate(length(min = 1, max = 255, message = "File name must be between 1 and 255 characters"))]
    pub name: String,
    pub size: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PreviewRequest {
    #[serde(default)]
    pub options: UploaderOptions,

    #[validate(length(max = 1000, message = "Too many files in one preview"), nested)]
    pub files: Vec<FileDescriptor>,
}

impl PreviewRequest {
    pub fn candidates(&self) -> Vec<CandidateFile> {
        self.files
            .iter()
            .map(|file| CandidateFile::new(file.name.clone(), file.size))
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceptedFile {
    pub name: String,
    pub size: u64,
    pub size_label: String,
}

impl From<&CandidateFile> for AcceptedFile {
    fn from(file: &CandidateFile) -> Self {
        Self {
            name: file.name.clone(),
            size: file.size,
            size_label: format_file_size(file.size),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewResponse {
    /// False when there was nothing to validate.
    pub handled: bool,
    pub accepted: Vec<AcceptedFile>,
    pub errors: Vec<String>,
    pub staged: Vec<String>,
    pub list_html: String,
    pub status_text: String,
}

impl PreviewResponse {
    pub fn from_outcome(
        outcome: Option<&ValidationOutcome>,
        staged: Vec<String>,
        list_html: String,
        status_text: String,
    ) -> Self {
        Self {
            handled: outcome.is_some(),
            accepted: outcome
                .map(|o| o.accepted.iter().map(AcceptedFile::from).collect())
                .unwrap_or_default(),
            errors: outcome.map(|o| o.errors.clone()).unwrap_or_default(),
            staged,
            list_html,
            status_text,
        }
    }
}
