//! Browser pages. Static HTML with inline scripts that call the JSON API.

use axum::{
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::auth::AuthUser;
use crate::share::escape_html;

const INDEX_PAGE: &str = include_str!("../../templates/index.html");
const LOGIN_PAGE: &str = include_str!("../../templates/login.html");
const REGISTER_PAGE: &str = include_str!("../../templates/register.html");
const DASHBOARD_PAGE: &str = include_str!("../../templates/dashboard.html");
const STYLESHEET: &str = include_str!("../../templates/style.css");

/// GET /
pub async fn index_page() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// GET /login
pub async fn login_page() -> Html<&'static str> {
    Html(LOGIN_PAGE)
}

/// GET /register
pub async fn register_page() -> Html<&'static str> {
    Html(REGISTER_PAGE)
}

/// GET /dashboard
///
/// Signed-out visitors are sent to the login page.
pub async fn dashboard_page(user: Option<AuthUser>) -> Response {
    match user {
        Some(user) => Html(render_dashboard(&user.email)).into_response(),
        None => Redirect::to("/login").into_response(),
    }
}

/// GET /assets/style.css
pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}

pub fn render_dashboard(email: &str) -> String {
    DASHBOARD_PAGE.replace("{email}", &escape_html(email))
}
