//! Upload flow: multipart field → object store → resume row.

use axum::extract::Multipart;
use bytes::Bytes;
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{NewResume, Resume};
use crate::resumes::slug::generate_slug;
use crate::state::AppState;
use crate::storage::{storage_key, DEFAULT_CONTENT_TYPE};

/// Multipart field carrying the file.
pub const RESUME_FIELD: &str = "resume";
const FALLBACK_FILE_NAME: &str = "resume.pdf";

#[derive(Debug)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    pub body: Bytes,
}

/// Buffers the `resume` field fully in memory. Other fields are skipped.
pub async fn read_resume_field(multipart: &mut Multipart) -> Result<UploadedFile, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }

        let raw_name = field.file_name().map(str::to_string);
        let content_type = field
            .content_type()
            .map(str::to_string)
            .filter(|ct| !ct.is_empty())
            .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());
        let body = field.bytes().await?;

        // Browsers send an empty, unnamed part when no file was chosen.
        let named = raw_name.as_deref().is_some_and(|n| !n.trim().is_empty());
        if !named && body.is_empty() {
            break;
        }

        return Ok(UploadedFile {
            file_name: display_name(raw_name.as_deref()),
            content_type,
            body,
        });
    }

    Err(AppError::Validation("No file uploaded.".to_string()))
}

/// Strips any client-side directory components from the submitted filename.
pub fn display_name(raw: Option<&str>) -> String {
    raw.and_then(|name| name.rsplit(|c: char| c == '/' || c == '\\').next())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(FALLBACK_FILE_NAME)
        .to_string()
}

/// Stores the file, then records it. A failed insert leaves the object orphaned.
pub async fn store_resume(
    state: &AppState,
    user_id: Uuid,
    file: UploadedFile,
) -> Result<Resume, AppError> {
    let file_key = storage_key(Utc::now().timestamp_millis(), &file.file_name);

    state
        .storage
        .put_object(&file_key, file.body, &file.content_type)
        .await?;

    let new_resume = NewResume {
        user_id,
        file_name: file.file_name,
        file_url: state.storage.public_url(&file_key),
        file_key: file_key.clone(),
        shareable_slug: generate_slug(),
    };

    let resume = state.store.insert_resume(new_resume).await.map_err(|e| {
        warn!("Resume insert failed after upload; object '{file_key}' is orphaned");
        e
    })?;

    info!(
        "Stored resume {} for user {user_id} under key '{}'",
        resume.id, resume.file_key
    );
    Ok(resume)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_keeps_plain_names() {
        assert_eq!(display_name(Some("r.pdf")), "r.pdf");
        assert_eq!(display_name(Some("My Resume 2024.pdf")), "My Resume 2024.pdf");
    }

    #[test]
    fn test_display_name_strips_directories() {
        assert_eq!(display_name(Some("C:\\Users\\me\\cv.pdf")), "cv.pdf");
        assert_eq!(display_name(Some("../../etc/cv.pdf")), "cv.pdf");
    }

    #[test]
    fn test_display_name_fallback() {
        assert_eq!(display_name(None), FALLBACK_FILE_NAME);
        assert_eq!(display_name(Some("")), FALLBACK_FILE_NAME);
        assert_eq!(display_name(Some("dir/")), FALLBACK_FILE_NAME);
    }
}
