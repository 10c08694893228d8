pub mod models;
pub mod validation;

pub use models::{CandidateFile, FileHandle, ValidationOutcome};
pub use validation::{file_extension, FileValidator, ValidationError};
