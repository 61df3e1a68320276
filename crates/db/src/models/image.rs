//! Generated image model and DTOs.

use sqlx::FromRow;

use galleria_core::types::{DbId, Timestamp};

/// A generated image row from the `generated_images` table.
///
/// The `prompt` column doubles as the storage key for the rendered file;
/// the API layer derives the public URL from it.
#[derive(Debug, Clone, FromRow)]
pub struct GeneratedImage {
    pub id: DbId,
    pub user_id: DbId,
    pub prompt: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new generated image.
#[derive(Debug)]
pub struct CreateGeneratedImage {
    pub user_id: DbId,
    pub prompt: String,
}

/// Filter and paging parameters for listing generated images.
///
/// The same struct drives both the page fetch and the total count so the
/// two queries can never disagree about which rows are in scope.
#[derive(Debug, Clone)]
pub struct ImageListQuery {
    /// Rows are always scoped to this owner.
    pub owner_user_id: DbId,
    /// Case-insensitive substring match against `prompt`.
    pub search: Option<String>,
    /// Exact match against the owning user's username.
    pub username: Option<String>,
    /// Inclusive lower bound on `created_at`.
    pub created_from: Option<Timestamp>,
    /// Exclusive upper bound on `created_at`.
    pub created_before: Option<Timestamp>,
    /// 1-based page number.
    pub page: i64,
    /// Rows per page.
    pub page_size: i64,
}
