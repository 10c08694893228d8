//! Markup and text produced for the file list and the status region.

pub mod format;
pub mod render;

pub use format::{format_file_size, sanitize_html};
pub use render::{render_file_list, status_summary};
