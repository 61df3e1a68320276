//! Repository for the `user_sessions` table.
//!
//! A session row backs one refresh token. Rows are never deleted by the
//! API path; revocation just flips `is_revoked`, and expiry is enforced
//! in the lookup predicate.

use sqlx::PgPool;

use galleria_core::types::DbId;

use crate::models::session::{CreateSession, UserSession};

pub struct SessionRepo;

impl SessionRepo {
    /// Persist a new session and return the stored row.
    pub async fn create(pool: &PgPool, input: &CreateSession) -> Result<UserSession, sqlx::Error> {
        sqlx::query_as::<_, UserSession>(
            "INSERT INTO user_sessions (user_id, refresh_token_hash, expires_at) \
             VALUES ($1, $2, $3) \
             RETURNING id, user_id, refresh_token_hash, expires_at, is_revoked, \
                       created_at, updated_at",
        )
        .bind(input.user_id)
        .bind(&input.refresh_token_hash)
        .bind(input.expires_at)
        .fetch_one(pool)
        .await
    }

    /// Look up a live session by refresh-token digest.
    ///
    /// Revoked and expired rows never match, so callers need no follow-up
    /// liveness check on the session itself.
    pub async fn find_by_refresh_token_hash(
        pool: &PgPool,
        digest: &str,
    ) -> Result<Option<UserSession>, sqlx::Error> {
        sqlx::query_as::<_, UserSession>(
            "SELECT id, user_id, refresh_token_hash, expires_at, is_revoked, \
                    created_at, updated_at \
             FROM user_sessions \
             WHERE refresh_token_hash = $1 AND is_revoked = false AND expires_at > NOW()",
        )
        .bind(digest)
        .fetch_optional(pool)
        .await
    }

    /// Revoke one session; `true` when a live row was actually flipped.
    pub async fn revoke(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let outcome = sqlx::query(
            "UPDATE user_sessions SET is_revoked = true WHERE id = $1 AND is_revoked = false",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(outcome.rows_affected() > 0)
    }

    /// Revoke every live session a user holds; returns how many were hit.
    pub async fn revoke_all_for_user(pool: &PgPool, user_id: DbId) -> Result<u64, sqlx::Error> {
        let outcome = sqlx::query(
            "UPDATE user_sessions SET is_revoked = true \
             WHERE user_id = $1 AND is_revoked = false",
        )
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(outcome.rows_affected())
    }
}
