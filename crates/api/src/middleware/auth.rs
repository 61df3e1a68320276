//! Bearer-token authentication as an axum extractor.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use galleria_core::error::CoreError;
use galleria_core::types::DbId;

use crate::error::AppError;
use crate::state::AppState;

/// The one 401 message clients ever see.
///
/// Whether the header was missing, the scheme wrong, the signature bad,
/// or the token expired is logged server-side only.
const NOT_AUTHENTICATED: &str = "User not authenticated";

/// The caller's identity, resolved from the `Authorization: Bearer` header.
///
/// Handlers that need authentication take this as a parameter; identity is
/// always explicit, never read from ambient state:
///
/// ```ignore
/// async fn handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "authenticated request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        let token = match header.and_then(|value| value.strip_prefix("Bearer ")) {
            Some(token) => token,
            None => {
                tracing::debug!("No usable Authorization header on request");
                return Err(unauthenticated());
            }
        };

        match state.config.jwt.decode_access_token(token) {
            Ok(claims) => Ok(AuthUser {
                user_id: claims.sub,
            }),
            Err(e) => {
                tracing::debug!(error = %e, "Access token rejected");
                Err(unauthenticated())
            }
        }
    }
}

fn unauthenticated() -> AppError {
    AppError::Core(CoreError::Unauthorized(NOT_AUTHENTICATED.into()))
}
