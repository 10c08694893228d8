//! Dry-run endpoint: runs the uploader against an in-memory page and
//! returns what the browser would show.

use axum::{extract::State, Json};
use tracing::info;
use validator::Validate;

use crate::{
    config::UploaderConfig,
    dom::MemoryDocument,
    error::Result,
    models::{ApiResponse, PreviewRequest, PreviewResponse},
    uploader::FileUploader,
    AppState,
};

pub async fn handle_get_config(State(state): State<AppState>) -> Json<ApiResponse<UploaderConfig>> {
    Json(ApiResponse::success(state.config.uploader.clone()))
}

pub async fn handle_preview(
    State(state): State<AppState>,
    Json(request): Json<PreviewRequest>,
) -> Result<Json<ApiResponse<PreviewResponse>>> {
    request.validate()?;

    info!(files = request.files.len(), "POST /api/uploader/preview");

    let response = run_preview(&state.config.uploader, &request);
    Ok(Json(ApiResponse::success(response)))
}

pub fn run_preview(base: &UploaderConfig, request: &PreviewRequest) -> PreviewResponse {
    let config = base.merged_with(&request.options);
    let document = MemoryDocument::upload_page(&config);

    let mut uploader = FileUploader::with_config(&document, config.clone());
    let outcome = uploader.handle_files(request.candidates());

    let staged = document
        .input_files(&config.file_input_selector)
        .into_iter()
        .map(|file| file.name)
        .collect();

    PreviewResponse::from_outcome(
        outcome.as_ref(),
        staged,
        document.inner_html(&config.file_list_selector).unwrap_or_default(),
        document.text_content(&config.status_selector).unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UploaderOptions;
    use crate::models::FileDescriptor;

    fn descriptor(name: &str, size: u64) -> FileDescriptor {
        FileDescriptor {
            name: name.to_string(),
            size,
        }
    }

    #[test]
    fn test_run_preview_with_options() {
        let request = PreviewRequest {
            options: UploaderOptions {
                max_files: Some(2),
                max_file_size: Some(1000),
                allowed_types: Some(vec![".pdf".to_string()]),
                ..Default::default()
            },
            files: vec![
                descriptor("a.pdf", 500),
                descriptor("b.docx", 500),
                descriptor("c.pdf", 500),
            ],
        };

        let response = run_preview(&UploaderConfig::default(), &request);
        assert!(response.handled);
        let names: Vec<_> = response.accepted.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.pdf", "c.pdf"]);
        assert_eq!(response.staged, vec!["a.pdf", "c.pdf"]);
        assert_eq!(
            response.errors,
            vec!["File \"b.docx\" has invalid type. Allowed: .pdf"]
        );
        assert_eq!(response.accepted[0].size_label, "500 Bytes");
        assert_eq!(response.status_text, "Selected 2 files. 1 error occurred.");
    }

    #[test]
    fn test_run_preview_without_files() {
        let request = PreviewRequest {
            options: UploaderOptions::default(),
            files: Vec::new(),
        };

        let response = run_preview(&UploaderConfig::default(), &request);
        assert!(!response.handled);
        assert!(response.accepted.is_empty());
        assert!(response.staged.is_empty());
        assert_eq!(response.list_html, "");
    }
}
