use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::store::Store;

/// Validates a requested display name. The name is stored exactly as sent.
pub fn validate_file_name(new_file_name: Option<&str>) -> Result<String, AppError> {
    new_file_name
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::Validation("Invalid file name provided.".to_string()))
}

/// Renames a resume owned by `caller`. Only the display name changes.
pub async fn rename_owned(
    store: &dyn Store,
    caller: Uuid,
    resume_id: Uuid,
    new_file_name: &str,
) -> Result<Resume, AppError> {
    let resume = store
        .find_resume(resume_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Resume not found.".to_string()))?;

    if resume.user_id != caller {
        warn!("User {caller} attempted to rename resume {resume_id} owned by another user");
        return Err(AppError::Forbidden);
    }

    let updated = store
        .rename_resume(resume_id, new_file_name)
        .await?
        .ok_or_else(|| AppError::NotFound("Resume not found.".to_string()))?;

    info!("Renamed resume {resume_id}");
    Ok(updated)
}
