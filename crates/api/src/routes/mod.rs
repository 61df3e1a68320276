pub mod auth;
pub mod health;
pub mod images;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login      login (public)
/// /auth/refresh    refresh (public)
/// /auth/logout     logout (requires auth)
///
/// /images          list generated images (requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (login, refresh, logout).
        .nest("/auth", auth::router())
        // Generated image listing.
        .nest("/images", images::router())
}
