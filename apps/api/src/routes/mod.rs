pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
    Router,
};

use crate::auth::handlers as auth;
use crate::pages;
use crate::resumes::handlers as resumes;
use crate::share;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Pages
        .route("/", get(pages::index_page))
        .route("/dashboard", get(pages::dashboard_page))
        .route("/assets/style.css", get(pages::stylesheet))
        // Auth
        .route(
            "/register",
            get(pages::register_page).post(auth::handle_register),
        )
        .route("/login", get(pages::login_page).post(auth::handle_login))
        .route("/logout", post(auth::handle_logout))
        // Resumes
        .route(
            "/upload",
            post(resumes::handle_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/resumes", get(resumes::handle_list_resumes))
        .route("/resumes/:id", patch(resumes::handle_rename_resume))
        // Public share links; static routes above take precedence
        .route("/:slug", get(share::handle_resolve_slug))
        .with_state(state)
}
