//! Page access for the uploader.
//!
//! The controller never reaches into globals; it is handed a [`Document`]
//! and keeps the element handles it resolves. Handles behave like DOM
//! references: writes through a handle are visible to whoever else holds
//! the same element.

pub mod memory;

pub use memory::{ElementState, MemoryDocument};

use crate::files::CandidateFile;

pub trait Element: Send {
    fn set_attribute(&mut self, name: &str, value: &str);
    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
    fn set_inner_html(&mut self, html: &str);
    fn set_text_content(&mut self, text: &str);
}

/// The native file-picker element backing the form submission.
pub trait FileInput: Send {
    fn files(&self) -> Vec<CandidateFile>;
    /// Replaces the held file set. Does not raise any notification.
    fn set_files(&mut self, files: Vec<CandidateFile>);
    /// Opens the native picker.
    fn open_picker(&mut self);
}

pub trait Document {
    fn query_selector(&self, selector: &str) -> Option<Box<dyn Element>>;
    fn query_file_input(&self, selector: &str) -> Option<Box<dyn FileInput>>;
}
