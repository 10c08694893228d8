pub mod controller;
pub mod events;

pub use controller::{ChangeListener, FileUploader};
pub use events::{EventResponse, UploaderEvent};
