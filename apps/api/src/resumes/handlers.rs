use axum::{
    extract::{
        multipart::MultipartRejection,
        rejection::{JsonRejection, PathRejection},
        Multipart, Path, State,
    },
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::resumes::registry::{rename_owned, validate_file_name};
use crate::resumes::upload::{read_resume_field, store_resume};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameRequest {
    pub new_file_name: Option<String>,
}

/// POST /upload
pub async fn handle_upload(
    State(state): State<AppState>,
    user: AuthUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Resume>, AppError> {
    let mut multipart = multipart?;
    let file = read_resume_field(&mut multipart).await?;
    let resume = store_resume(&state, user.id, file).await?;
    Ok(Json(resume))
}

/// GET /resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<Resume>>, AppError> {
    Ok(Json(state.store.list_resumes(user.id).await?))
}

/// PATCH /resumes/:id
pub async fn handle_rename_resume(
    State(state): State<AppState>,
    user: AuthUser,
    path: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<RenameRequest>, JsonRejection>,
) -> Result<Json<Resume>, AppError> {
    let Path(id) = path?;
    // A non-string newFileName fails deserialization and lands here as a 400 too.
    let Json(request) = payload?;
    let new_file_name = validate_file_name(request.new_file_name.as_deref())?;
    let resume = rename_owned(state.store.as_ref(), user.id, id, &new_file_name).await?;
    Ok(Json(resume))
}
