//! Server-rendered pages.

use askama::Template;
use askama_web::WebTemplate;

/// Template for the "link not found" page.
///
/// Renders `templates/not_found.html` with the requested path. The status
/// code is set by the caller, see [`crate::error::AppError`].
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_page_escapes_path() {
        let page = NotFoundTemplate {
            path: "/<script>".to_string(),
        }
        .render()
        .unwrap();

        assert!(!page.contains("<script>"));
        assert!(page.contains("script"));
    }
}
