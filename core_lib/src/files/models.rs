use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque reference to the underlying binary file. The uploader only ever
/// moves it between the candidate list and the file input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileHandle(Uuid);

impl FileHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FileHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// A file offered by a drop gesture or picker selection, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateFile {
    pub name: String,
    pub size: u64,
    pub handle: FileHandle,
}

impl CandidateFile {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self::with_handle(name, size, FileHandle::new())
    }

    pub fn with_handle(name: impl Into<String>, size: u64, handle: FileHandle) -> Self {
        Self {
            name: name.into(),
            size,
            handle,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    pub accepted: Vec<CandidateFile>,
    pub errors: Vec<String>,
}

impl ValidationOutcome {
    pub fn accepted_names(&self) -> Vec<&str> {
        self.accepted.iter().map(|file| file.name.as_str()).collect()
    }
}
