//! Repository for the `users` table.
//!
//! Besides lookup, this covers the login bookkeeping the auth endpoints
//! need: failure counting, lockout, and the post-login reset.

use sqlx::PgPool;

use galleria_core::types::{DbId, Timestamp};

use crate::models::user::{CreateUser, User};

/// Shared SELECT prefix; every read returns the full row.
const SELECT_USER: &str = "SELECT id, username, email, password_hash, is_active, last_login_at, \
     failed_login_count, locked_until, created_at, updated_at FROM users";

pub struct UserRepo;

impl UserRepo {
    /// Insert a user and return the stored row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, email, password_hash) VALUES ($1, $2, $3) \
             RETURNING id, username, email, password_hash, is_active, last_login_at, \
                       failed_login_count, locked_until, created_at, updated_at",
        )
        .bind(&input.username)
        .bind(&input.email)
        .bind(&input.password_hash)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(&format!("{SELECT_USER} WHERE id = $1"))
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Username lookup, case-sensitive.
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(&format!("{SELECT_USER} WHERE username = $1"))
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Count one more failed login attempt.
    pub async fn increment_failed_login(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET failed_login_count = failed_login_count + 1 WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map(|_| ())
    }

    /// Lock the account until the given instant.
    pub async fn lock_account(
        pool: &PgPool,
        id: DbId,
        until: Timestamp,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET locked_until = $2 WHERE id = $1")
            .bind(id)
            .bind(until)
            .execute(pool)
            .await
            .map(|_| ())
    }

    /// Successful login: clear failure state and stamp `last_login_at`.
    pub async fn record_successful_login(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE users \
             SET failed_login_count = 0, locked_until = NULL, last_login_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .execute(pool)
        .await
        .map(|_| ())
    }
}
