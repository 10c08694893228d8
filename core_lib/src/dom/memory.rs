use parking_lot::Mutex;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use super::{Document, Element, FileInput};
use crate::config::UploaderConfig;
use crate::files::CandidateFile;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementState {
    pub attributes: BTreeMap<String, String>,
    pub classes: BTreeSet<String>,
    pub inner_html: String,
    pub text_content: String,
}

#[derive(Debug, Clone, Default)]
struct FileInputState {
    files: Vec<CandidateFile>,
    picker_opened: usize,
}

struct MemoryElement {
    state: Arc<Mutex<ElementState>>,
}

impl Element for MemoryElement {
    fn set_attribute(&mut self, name: &str, value: &str) {
        self.state
            .lock()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn add_class(&mut self, class: &str) {
        self.state.lock().classes.insert(class.to_string());
    }

    fn remove_class(&mut self, class: &str) {
        self.state.lock().classes.remove(class);
    }

    fn set_inner_html(&mut self, html: &str) {
        self.state.lock().inner_html = html.to_string();
    }

    fn set_text_content(&mut self, text: &str) {
        self.state.lock().text_content = text.to_string();
    }
}

struct MemoryFileInput {
    state: Arc<Mutex<FileInputState>>,
}

impl FileInput for MemoryFileInput {
    fn files(&self) -> Vec<CandidateFile> {
        self.state.lock().files.clone()
    }

    fn set_files(&mut self, files: Vec<CandidateFile>) {
        self.state.lock().files = files;
    }

    fn open_picker(&mut self) {
        self.state.lock().picker_opened += 1;
    }
}

/// In-memory page keyed by selector string. Selectors are matched
/// literally, not evaluated as CSS.
#[derive(Clone, Default)]
pub struct MemoryDocument {
    elements: HashMap<String, Arc<Mutex<ElementState>>>,
    file_inputs: HashMap<String, Arc<Mutex<FileInputState>>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page carrying every element `config` refers to.
    pub fn upload_page(config: &UploaderConfig) -> Self {
        Self::new()
            .with_element(&config.drop_zone_selector)
            .with_file_input(&config.file_input_selector)
            .with_element(&config.file_list_selector)
            .with_element(&config.status_selector)
    }

    pub fn with_element(mut self, selector: &str) -> Self {
        self.elements.insert(selector.to_string(), Arc::default());
        self
    }

    pub fn with_file_input(mut self, selector: &str) -> Self {
        self.file_inputs.insert(selector.to_string(), Arc::default());
        self
    }

    pub fn element(&self, selector: &str) -> Option<ElementState> {
        self.elements
            .get(selector)
            .map(|state| state.lock().clone())
    }

    pub fn inner_html(&self, selector: &str) -> Option<String> {
        self.element(selector).map(|state| state.inner_html)
    }

    pub fn text_content(&self, selector: &str) -> Option<String> {
        self.element(selector).map(|state| state.text_content)
    }

    pub fn input_files(&self, selector: &str) -> Vec<CandidateFile> {
        self.file_inputs
            .get(selector)
            .map(|state| state.lock().files.clone())
            .unwrap_or_default()
    }

    /// Simulates the user picking files through the native dialog.
    pub fn select_files(&self, selector: &str, files: Vec<CandidateFile>) {
        if let Some(state) = self.file_inputs.get(selector) {
            state.lock().files = files;
        }
    }

    pub fn picker_open_count(&self, selector: &str) -> usize {
        self.file_inputs
            .get(selector)
            .map(|state| state.lock().picker_opened)
            .unwrap_or(0)
    }
}

impl Document for MemoryDocument {
    fn query_selector(&self, selector: &str) -> Option<Box<dyn Element>> {
        self.elements.get(selector).map(|state| {
            Box::new(MemoryElement {
                state: Arc::clone(state),
            }) as Box<dyn Element>
        })
    }

    fn query_file_input(&self, selector: &str) -> Option<Box<dyn FileInput>> {
        self.file_inputs.get(selector).map(|state| {
            Box::new(MemoryFileInput {
                state: Arc::clone(state),
            }) as Box<dyn FileInput>
        })
    }
}
