//! Drag-and-drop uploader controller.
//!
//! Mediates between file-selection gestures and the file input: every
//! gesture is validated, rendered into the status list and, when anything
//! survives validation, written back to the input.

use tracing::{debug, info, warn};

use super::events::{is_activation_key, EventResponse, UploaderEvent};
use crate::config::{UploaderConfig, UploaderOptions};
use crate::dom::{Document, Element, FileInput};
use crate::files::{CandidateFile, FileValidator, ValidationOutcome};
use crate::ui::{render_file_list, status_summary};

const DRAG_ACTIVE_CLASS: &str = "active-drag";
const DROP_ZONE_LABEL: &str = "Drop files here or click to browse";

/// Observer invoked with the accepted set each time the input is updated.
pub type ChangeListener = Box<dyn FnMut(&[CandidateFile]) + Send>;

struct Controls {
    drop_zone: Box<dyn Element>,
    file_input: Box<dyn FileInput>,
    file_list: Option<Box<dyn Element>>,
    status_region: Option<Box<dyn Element>>,
}

impl Controls {
    fn attach(&mut self) {
        self.drop_zone.set_attribute("tabindex", "0");
        self.drop_zone.set_attribute("role", "button");
        self.drop_zone.set_attribute("aria-label", DROP_ZONE_LABEL);
    }

    fn highlight(&mut self) {
        self.drop_zone.add_class(DRAG_ACTIVE_CLASS);
        self.drop_zone.set_attribute("aria-live", "polite");
        self.drop_zone.set_attribute("aria-relevant", "additions");
    }

    fn unhighlight(&mut self) {
        self.drop_zone.remove_class(DRAG_ACTIVE_CLASS);
    }

    fn render(&mut self, accepted: &[CandidateFile], errors: &[String]) {
        let Some(file_list) = self.file_list.as_mut() else {
            return;
        };

        file_list.set_inner_html(&render_file_list(accepted, errors));

        if let Some(status) = self.status_region.as_mut() {
            status.set_text_content(&status_summary(accepted, errors));
        }
    }
}

pub struct FileUploader {
    config: UploaderConfig,
    validator: FileValidator,
    controls: Option<Controls>,
    listeners: Vec<ChangeListener>,
}

impl FileUploader {
    /// Merges `options` over the defaults and binds to `document`.
    pub fn initialize(document: &dyn Document, options: UploaderOptions) -> Self {
        Self::with_config(document, UploaderConfig::from_options(&options))
    }

    /// Binds to `document` using an already-resolved configuration. When the
    /// configuration is invalid, or the drop zone or the file input is
    /// missing, the uploader stays inert.
    pub fn with_config(document: &dyn Document, config: UploaderConfig) -> Self {
        let validator = FileValidator::new(&config);

        if let Err(e) = config.validate() {
            warn!("Uploader configuration rejected, staying inert: {}", e);
            return Self {
                config,
                validator,
                controls: None,
                listeners: Vec::new(),
            };
        }

        let drop_zone = document.query_selector(&config.drop_zone_selector);
        let file_input = document.query_file_input(&config.file_input_selector);

        let controls = match (drop_zone, file_input) {
            (Some(drop_zone), Some(file_input)) => {
                let mut controls = Controls {
                    drop_zone,
                    file_input,
                    file_list: document.query_selector(&config.file_list_selector),
                    status_region: document.query_selector(&config.status_selector),
                };
                controls.attach();
                info!(
                    drop_zone = %config.drop_zone_selector,
                    max_files = config.max_files,
                    max_file_size = config.max_file_size,
                    "File uploader attached"
                );
                Some(controls)
            }
            _ => {
                debug!(
                    drop_zone = %config.drop_zone_selector,
                    file_input = %config.file_input_selector,
                    "Uploader elements not found, staying inert"
                );
                None
            }
        };

        Self {
            config,
            validator,
            controls,
            listeners: Vec::new(),
        }
    }

    pub fn config(&self) -> &UploaderConfig {
        &self.config
    }

    pub fn is_active(&self) -> bool {
        self.controls.is_some()
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&[CandidateFile]) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn handle_event(&mut self, event: UploaderEvent) -> EventResponse {
        let Some(controls) = self.controls.as_mut() else {
            return EventResponse::pass();
        };

        match event {
            UploaderEvent::DragEnter | UploaderEvent::DragOver => {
                controls.highlight();
                EventResponse::swallow()
            }
            UploaderEvent::DragLeave => {
                controls.unhighlight();
                EventResponse::swallow()
            }
            UploaderEvent::Drop(files) => {
                controls.unhighlight();
                self.handle_files(files);
                EventResponse::swallow()
            }
            UploaderEvent::Click => {
                controls.file_input.open_picker();
                EventResponse::pass()
            }
            UploaderEvent::KeyDown(key) if is_activation_key(&key) => {
                controls.file_input.open_picker();
                EventResponse::prevent()
            }
            UploaderEvent::KeyDown(_) => EventResponse::pass(),
            UploaderEvent::InputChange => {
                self.handle_files(Vec::new());
                EventResponse::pass()
            }
        }
    }

    /// Validates `candidates` (or the input's current files when empty),
    /// renders the result and stages the accepted files on the input.
    ///
    /// Returns `None` when the uploader is inert or there was nothing to
    /// validate; prior state is left untouched in that case.
    pub fn handle_files(&mut self, candidates: Vec<CandidateFile>) -> Option<ValidationOutcome> {
        let controls = self.controls.as_mut()?;

        let candidates = if candidates.is_empty() {
            controls.file_input.files()
        } else {
            candidates
        };

        if candidates.is_empty() {
            debug!("No files to process");
            return None;
        }

        let outcome = self.validator.validate(candidates);
        controls.render(&outcome.accepted, &outcome.errors);

        if !outcome.accepted.is_empty() {
            controls.file_input.set_files(outcome.accepted.clone());
            info!(
                accepted = outcome.accepted.len(),
                errors = outcome.errors.len(),
                "Staged files on input"
            );

            for listener in self.listeners.iter_mut() {
                listener(&outcome.accepted);
            }
        } else {
            debug!(errors = outcome.errors.len(), "Nothing accepted, input unchanged");
        }

        Some(outcome)
    }

    /// Writes the list markup and the screen-reader summary.
    pub fn render(&mut self, accepted: &[CandidateFile], errors: &[String]) {
        if let Some(controls) = self.controls.as_mut() {
            controls.render(accepted, errors);
        }
    }
}
