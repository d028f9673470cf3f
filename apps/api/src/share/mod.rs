//! Public, unauthenticated resolution of shareable links.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
};
use tracing::debug;

use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::resumes::slug::is_well_formed;
use crate::state::AppState;

const NOT_FOUND_PAGE: &str = include_str!("../../templates/not_found.html");

/// GET /:slug
///
/// Anyone holding the slug may view the resume; there is no ownership check.
pub async fn handle_resolve_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<(StatusCode, Html<String>), AppError> {
    if !is_well_formed(&slug) {
        return Ok(not_found());
    }

    match state.store.find_resume_by_slug(&slug).await? {
        Some(resume) => Ok((StatusCode::OK, Html(render_viewer(&resume)))),
        None => {
            debug!("No resume for slug '{slug}'");
            Ok(not_found())
        }
    }
}

fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE.to_string()))
}

/// Full-viewport page embedding the stored file.
pub fn render_viewer(resume: &Resume) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>html, body {{ margin: 0; padding: 0; width: 100vw; height: 100vh; overflow: hidden; }}</style>
</head>
<body>
<iframe src="{src}" title="{title}" style="width: 100%; height: 100%; border: none;"></iframe>
</body>
</html>
"#,
        title = escape_html(&resume.file_name),
        src = escape_html(&resume.file_url),
    )
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn resume(file_name: &str, file_url: &str) -> Resume {
        Resume {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            file_name: file_name.to_string(),
            file_key: "1-r.pdf".to_string(),
            file_url: file_url.to_string(),
            shareable_slug: "aaaaaaaaaa".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_viewer_embeds_file_url() {
        let html = render_viewer(&resume("r.pdf", "http://cdn/resumes/1-r.pdf"));
        assert!(html.contains(r#"<iframe src="http://cdn/resumes/1-r.pdf" title="r.pdf""#));
        assert!(html.contains("100vh"));
    }

    #[test]
    fn test_viewer_escapes_user_controlled_text() {
        let html = render_viewer(&resume(
            "\"><script>alert(1)</script>",
            "http://cdn/a.pdf?x=1&y=2",
        ));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("x=1&amp;y=2"));
    }

    #[test]
    fn test_escape_html_passthrough() {
        assert_eq!(escape_html("My Resume (2024).pdf"), "My Resume (2024).pdf");
    }
}
