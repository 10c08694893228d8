use super::format::{format_file_size, sanitize_html};
use crate::files::CandidateFile;

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// Upper-cased text after the last dot, shown as the file's badge.
fn badge_label(filename: &str) -> String {
    filename
        .rsplit('.')
        .next()
        .unwrap_or(filename)
        .to_uppercase()
}

fn icon_class(badge: &str) -> &'static str {
    if badge == "PDF" {
        "bi-file-earmark-pdf"
    } else {
        "bi-file-earmark-word"
    }
}

fn render_file_item(file: &CandidateFile) -> String {
    let badge = badge_label(&file.name);

    format!(
        concat!(
            "<li class=\"list-group-item d-flex justify-content-between align-items-center\">",
            "<div><i class=\"bi {icon} me-2 text-primary\"></i>{name}",
            "<span class=\"badge bg-secondary ms-2\">{badge}</span></div>",
            "<span class=\"text-muted\">{size}</span>",
            "</li>"
        ),
        icon = icon_class(&badge),
        name = sanitize_html(&file.name),
        badge = sanitize_html(&badge),
        size = format_file_size(file.size),
    )
}

/// Builds the status list markup. Empty input yields empty markup, which
/// clears the target.
pub fn render_file_list(accepted: &[CandidateFile], errors: &[String]) -> String {
    let mut html = String::new();

    if !accepted.is_empty() {
        html.push_str("<div class=\"alert alert-info mt-3\">");
        html.push_str(&format!(
            "<strong><i class=\"bi bi-file-earmark\"></i> Selected {}:</strong>",
            plural(accepted.len(), "file", "files")
        ));
        html.push_str("<ul class=\"list-group mt-2\">");
        for file in accepted {
            html.push_str(&render_file_item(file));
        }
        html.push_str("</ul></div>");
    }

    if !errors.is_empty() {
        html.push_str("<div class=\"alert alert-danger mt-3\">");
        html.push_str("<strong><i class=\"bi bi-exclamation-triangle\"></i> Errors:</strong>");
        html.push_str("<ul class=\"mb-0 mt-2\">");
        for error in errors {
            html.push_str(&format!("<li>{}</li>", sanitize_html(error)));
        }
        html.push_str("</ul></div>");
    }

    html
}

/// Short announcement for screen readers. Empty when nothing was accepted.
pub fn status_summary(accepted: &[CandidateFile], errors: &[String]) -> String {
    if accepted.is_empty() {
        return String::new();
    }

    let mut summary = format!("Selected {}.", plural(accepted.len(), "file", "files"));
    if !errors.is_empty() {
        summary.push_str(&format!(
            " {} occurred.",
            plural(errors.len(), "error", "errors")
        ));
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_render_clears() {
        assert_eq!(render_file_list(&[], &[]), "");
        assert_eq!(status_summary(&[], &[]), "");
    }

    #[test]
    fn test_render_accepted_files() {
        let files = vec![
            CandidateFile::new("report.pdf", 2048),
            CandidateFile::new("notes.docx", 500),
        ];

        let html = render_file_list(&files, &[]);
        assert!(html.contains("Selected 2 files:"));
        assert!(html.contains("report.pdf"));
        assert!(html.contains("<span class=\"badge bg-secondary ms-2\">PDF</span>"));
        assert!(html.contains("<span class=\"badge bg-secondary ms-2\">DOCX</span>"));
        assert!(html.contains("bi-file-earmark-pdf"));
        assert!(html.contains("bi-file-earmark-word"));
        assert!(html.contains("<span class=\"text-muted\">2 KB</span>"));
        assert!(html.contains("<span class=\"text-muted\">500 Bytes</span>"));
        assert!(!html.contains("alert-danger"));
    }

    #[test]
    fn test_render_single_file_heading() {
        let html = render_file_list(&[CandidateFile::new("one.pdf", 1)], &[]);
        assert!(html.contains("Selected 1 file:"));
    }

    #[test]
    fn test_render_errors_only() {
        let errors = vec!["File \"x.exe\" has invalid type. Allowed: .pdf".to_string()];
        let html = render_file_list(&[], &errors);

        assert!(!html.contains("alert-info"));
        assert!(html.contains("alert-danger"));
        assert!(html.contains("<li>File \"x.exe\" has invalid type. Allowed: .pdf</li>"));
    }

    #[test]
    fn test_render_escapes_file_names() {
        let files = vec![CandidateFile::new("<script>.pdf", 10)];
        let errors = vec!["File \"<img src=x onerror=alert(1)>.exe\" has invalid type.".to_string()];

        let html = render_file_list(&files, &errors);
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;script&gt;.pdf"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;.exe"));
    }

    #[test]
    fn test_status_summary() {
        let files = vec![CandidateFile::new("a.pdf", 1), CandidateFile::new("b.pdf", 1)];
        assert_eq!(status_summary(&files, &[]), "Selected 2 files.");

        let errors = vec!["one".to_string()];
        assert_eq!(
            status_summary(&files[..1], &errors),
            "Selected 1 file. 1 error occurred."
        );

        let errors = vec!["one".to_string(), "two".to_string()];
        assert_eq!(status_summary(&[], &errors), "");
        assert_eq!(
            status_summary(&files, &errors),
            "Selected 2 files. 2 errors occurred."
        );
    }
}
