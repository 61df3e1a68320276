//! Repository for the `generated_images` table.

use sqlx::PgPool;

use galleria_core::pagination::page_offset;
use galleria_core::types::Timestamp;

use crate::models::image::{CreateGeneratedImage, GeneratedImage, ImageListQuery};

/// Column list for `generated_images` SELECT queries.
const COLUMNS: &str = "id, user_id, prompt, created_at, updated_at";

/// Provides query and insert operations for generated images.
pub struct GeneratedImageRepo;

impl GeneratedImageRepo {
    /// Insert a new generated image record.
    pub async fn create(
        pool: &PgPool,
        dto: &CreateGeneratedImage,
    ) -> Result<GeneratedImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO generated_images (user_id, prompt) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GeneratedImage>(&query)
            .bind(dto.user_id)
            .bind(&dto.prompt)
            .fetch_one(pool)
            .await
    }

    /// Fetch one page of images matching the given filters.
    ///
    /// Rows come back in insertion order (`id ASC`); presentation-order
    /// concerns belong to the caller.
    pub async fn list_page(
        pool: &PgPool,
        params: &ImageListQuery,
    ) -> Result<Vec<GeneratedImage>, sqlx::Error> {
        let limit = params.page_size.max(1);
        let offset = page_offset(params.page, limit);

        let (where_clause, bind_values, bind_idx) = build_image_filter(params);

        let query = format!(
            "SELECT {COLUMNS} FROM generated_images {where_clause} \
             ORDER BY id ASC \
             LIMIT ${bind_idx} OFFSET ${}",
            bind_idx + 1
        );

        let q = bind_image_values(sqlx::query_as::<_, GeneratedImage>(&query), &bind_values);
        q.bind(limit).bind(offset).fetch_all(pool).await
    }

    /// Count images matching the given filter (for pagination metadata).
    ///
    /// Uses the same filter builder as [`Self::list_page`], so the count can
    /// never disagree with the fetched rows about which records are in scope.
    pub async fn count(pool: &PgPool, params: &ImageListQuery) -> Result<i64, sqlx::Error> {
        let (where_clause, bind_values, _) = build_image_filter(params);

        let query = format!("SELECT COUNT(*)::BIGINT AS count FROM generated_images {where_clause}");

        let q = bind_image_values_scalar(sqlx::query_scalar::<_, i64>(&query), &bind_values);
        q.fetch_one(pool).await
    }
}

// ---------------------------------------------------------------------------
// Internal helpers for dynamic query building
// ---------------------------------------------------------------------------

/// Typed bind value for dynamically-built image queries.
enum BindValue {
    BigInt(i64),
    Text(String),
    Timestamp(Timestamp),
}

/// Build a WHERE clause and bind values from `ImageListQuery` filter parameters.
///
/// Returns `(where_clause, bind_values, next_bind_index)`. The owner scope is
/// always present, so the clause always starts with `WHERE `.
fn build_image_filter(params: &ImageListQuery) -> (String, Vec<BindValue>, u32) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut bind_values: Vec<BindValue> = Vec::new();

    conditions.push(format!("user_id = ${bind_idx}"));
    bind_idx += 1;
    bind_values.push(BindValue::BigInt(params.owner_user_id));

    if let Some(ref search) = params.search {
        conditions.push(format!("prompt ILIKE ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Text(like_pattern(search)));
    }

    if let Some(ref username) = params.username {
        conditions.push(format!(
            "EXISTS (SELECT 1 FROM users u \
             WHERE u.id = generated_images.user_id AND u.username = ${bind_idx})"
        ));
        bind_idx += 1;
        bind_values.push(BindValue::Text(username.clone()));
    }

    if let Some(from) = params.created_from {
        conditions.push(format!("created_at >= ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Timestamp(from));
    }

    if let Some(before) = params.created_before {
        conditions.push(format!("created_at < ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Timestamp(before));
    }

    let where_clause = format!("WHERE {}", conditions.join(" AND "));

    (where_clause, bind_values, bind_idx)
}

/// Build an ILIKE pattern that matches `term` as a literal substring.
///
/// `%`, `_` and `\` in the term are escaped so user input cannot act as
/// wildcards.
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    format!("%{escaped}%")
}

/// Bind a slice of `BindValue` to a sqlx `QueryAs`.
fn bind_image_values<'q, O>(
    mut q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments>,
    bind_values: &'q [BindValue],
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments> {
    for val in bind_values {
        match val {
            BindValue::BigInt(v) => q = q.bind(*v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
            BindValue::Timestamp(v) => q = q.bind(*v),
        }
    }
    q
}

/// Bind a slice of `BindValue` to a sqlx `QueryScalar`.
fn bind_image_values_scalar<'q>(
    mut q: sqlx::query::QueryScalar<'q, sqlx::Postgres, i64, sqlx::postgres::PgArguments>,
    bind_values: &'q [BindValue],
) -> sqlx::query::QueryScalar<'q, sqlx::Postgres, i64, sqlx::postgres::PgArguments> {
    for val in bind_values {
        match val {
            BindValue::BigInt(v) => q = q.bind(*v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
            BindValue::Timestamp(v) => q = q.bind(*v),
        }
    }
    q
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
