pub mod request;

pub use request::{AcceptedFile, ApiResponse, FileDescriptor, PreviewRequest, PreviewResponse};
