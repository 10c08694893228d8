use crate::files::CandidateFile;

/// Gestures the uploader listens for on its drop zone and file input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploaderEvent {
    DragEnter,
    DragOver,
    DragLeave,
    Drop(Vec<CandidateFile>),
    Click,
    /// Key value as reported by the browser, e.g. `"Enter"` or `" "`.
    KeyDown(String),
    /// The native picker changed its selection.
    InputChange,
}

/// What the caller should do with the originating browser event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventResponse {
    pub prevent_default: bool,
    pub stop_propagation: bool,
}

impl EventResponse {
    pub fn pass() -> Self {
        Self::default()
    }

    pub fn prevent() -> Self {
        Self {
            prevent_default: true,
            stop_propagation: false,
        }
    }

    pub fn swallow() -> Self {
        Self {
            prevent_default: true,
            stop_propagation: true,
        }
    }
}

pub(crate) fn is_activation_key(key: &str) -> bool {
    key == "Enter" || key == " "
}
