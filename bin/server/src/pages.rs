//! Application page routes.
//!
//! The screens themselves are CRUD plumbing rendered elsewhere; these
//! handlers exist so the edge guard has a realistic router to wrap. The
//! `/home` handler demonstrates the claims pass-through: on a protected
//! route the guard has already verified the credential and stashed the
//! claims in request extensions.

use axum::{
    Extension, Router,
    http::StatusCode,
    response::Html,
    routing::get,
};
use hearth_access::Claims;

/// Builds the page router. The edge guard is layered on in `main`.
pub fn router() -> Router {
    Router::new()
        .route("/", get(landing))
        .route("/login", get(login))
        .route("/home", get(home))
        .route("/settings", get(settings))
        .route("/create-family", get(create_family))
        .route("/invitation-pending", get(invitation_pending))
        .route("/invitation-rejected", get(invitation_rejected))
        .route("/admin", get(admin))
        .fallback(not_found)
}

async fn landing() -> Html<&'static str> {
    Html("<h1>hearth</h1><p>A private network for your family.</p>")
}

async fn login() -> Html<&'static str> {
    Html("<h1>Log in</h1>")
}

async fn home(Extension(claims): Extension<Claims>) -> Html<String> {
    Html(format!("<h1>Home</h1><p>Signed in as {}.</p>", claims.sub))
}

async fn settings() -> Html<&'static str> {
    Html("<h1>Settings</h1>")
}

async fn create_family() -> Html<&'static str> {
    Html("<h1>Create a family</h1>")
}

async fn invitation_pending() -> Html<&'static str> {
    Html("<h1>Your invitation is pending</h1>")
}

async fn invitation_rejected() -> Html<&'static str> {
    Html("<h1>Your invitation was rejected</h1>")
}

async fn admin(Extension(claims): Extension<Claims>) -> Html<String> {
    Html(format!("<h1>Administration</h1><p>Operator: {}</p>", claims.sub))
}

async fn not_found() -> (StatusCode, Html<&'static str>) {
    (StatusCode::NOT_FOUND, Html("<h1>Page not found</h1>"))
}
