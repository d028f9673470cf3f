use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::session::clear_session_cookie;
use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl Credentials {
    /// Email and password exactly as sent; both must be non-empty.
    fn require(self) -> Result<(String, String), AppError> {
        let email = self.email.unwrap_or_default();
        let password = self.password.unwrap_or_default();
        if email.is_empty() || password.is_empty() {
            return Err(AppError::Validation(
                "Email and password are required".to_string(),
            ));
        }
        Ok((email, password))
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// POST /register
pub async fn handle_register(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let Json(credentials) = payload?;
    let (email, password) = credentials.require()?;

    if state.store.find_user_by_email(&email).await?.is_some() {
        return Err(AppError::Conflict(
            "User with this email already exists".to_string(),
        ));
    }

    let password_hash = hash_password(&password)?;
    let user = state.store.create_user(&email, &password_hash).await?;

    info!("Registered user {}", user.id);
    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /login
///
/// Unknown email and wrong password are indistinguishable to the caller.
pub async fn handle_login(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(credentials) = payload?;
    let (email, password) = credentials.require()?;

    let user = state
        .store
        .find_user_by_email(&email)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !verify_password(&password, &user.password_hash)? {
        info!("Rejected sign-in for user {}", user.id);
        return Err(AppError::InvalidCredentials);
    }

    let token = state.sessions.issue(user.id, &user.email)?;
    let cookie = state.sessions.session_cookie(&token);

    info!("Issued session for user {}", user.id);
    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse { token, user }),
    ))
}

/// POST /logout
///
/// Clears the cookie only; an already issued token stays valid until it expires.
pub async fn handle_logout() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [(header::SET_COOKIE, clear_session_cookie())],
    )
}
