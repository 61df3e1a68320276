//! Handler for the `/images` listing resource.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Deserializer, Serialize};

use galleria_core::dates::utc_day_bounds;
use galleria_core::pagination::{clamp_page, clamp_page_size, total_pages};
use galleria_core::types::{DbId, Timestamp};
use galleria_db::models::image::ImageListQuery;
use galleria_db::repositories::GeneratedImageRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// URL prefix prepended to each stored prompt to form the public image URL.
const IMAGE_URL_PREFIX: &str = "/images/";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /images`.
///
/// `page` and `limit` are parsed leniently: values that do not parse as an
/// integer (`?page=abc`) are treated as absent and fall back to their
/// defaults rather than failing the request. Filter parameters given as
/// empty strings (`?search=`) are likewise treated as absent.
#[derive(Debug, Deserialize)]
pub struct ImageListParams {
    /// 1-based page number (default 1; values below 1 are clamped up).
    #[serde(default, deserialize_with = "lenient_i64")]
    pub page: Option<i64>,
    /// Page size (default 12, capped at 100).
    #[serde(default, deserialize_with = "lenient_i64")]
    pub limit: Option<i64>,
    /// Case-insensitive substring filter on the prompt.
    pub search: Option<String>,
    /// Exact-match filter on the owning user's username.
    pub username: Option<String>,
    /// Single UTC calendar day (`YYYY-MM-DD`) filter on creation time.
    pub date: Option<String>,
}

/// One image record plus its derived public URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageWithUrl {
    pub id: DbId,
    pub user_id: DbId,
    pub prompt: String,
    pub image_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Response body for `GET /images`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageListResponse {
    pub images: Vec<ImageWithUrl>,
    pub total_pages: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/images
///
/// List the authenticated user's generated images, newest-first within each
/// page, with optional search / username / creation-day filters and
/// `totalPages` pagination metadata.
pub async fn list_images(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ImageListParams>,
) -> AppResult<Json<ImageListResponse>> {
    let page = clamp_page(params.page);
    let page_size = clamp_page_size(params.limit);

    let search = params.search.filter(|s| !s.is_empty());
    let username = params.username.filter(|s| !s.is_empty());
    let date = params.date.filter(|s| !s.is_empty());

    let (created_from, created_before) = match date {
        Some(ref raw) => {
            let (from, before) = utc_day_bounds(raw)?;
            (Some(from), Some(before))
        }
        None => (None, None),
    };

    let query = ImageListQuery {
        owner_user_id: auth_user.user_id,
        search,
        username,
        created_from,
        created_before,
        page,
        page_size,
    };

    let mut records = GeneratedImageRepo::list_page(&state.pool, &query)
        .await
        .map_err(AppError::ImageFetch)?;

    let total = GeneratedImageRepo::count(&state.pool, &query)
        .await
        .map_err(AppError::ImageFetch)?;

    // Newest-first within the fetched window only.
    records.reverse();

    let images = records
        .into_iter()
        .map(|record| {
            let image_url = format!("{IMAGE_URL_PREFIX}{}", record.prompt);
            ImageWithUrl {
                id: record.id,
                user_id: record.user_id,
                prompt: record.prompt,
                image_url,
                created_at: record.created_at,
                updated_at: record.updated_at,
            }
        })
        .collect();

    Ok(Json(ImageListResponse {
        images,
        total_pages: total_pages(total, page_size),
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Deserialize an optional integer leniently: non-numeric input becomes `None`.
fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse::<i64>().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Option<i64> {
        lenient_i64(serde_json::Value::String(raw.to_string())).unwrap()
    }

    // -- lenient_i64 --------------------------------------------------------

    #[test]
    fn lenient_parse_accepts_integers() {
        assert_eq!(parse("2"), Some(2));
        assert_eq!(parse(" 7 "), Some(7));
        assert_eq!(parse("-3"), Some(-3));
    }

    #[test]
    fn lenient_parse_discards_non_numeric_input() {
        assert_eq!(parse("abc"), None);
        assert_eq!(parse("1.5"), None);
        assert_eq!(parse(""), None);
    }
}
