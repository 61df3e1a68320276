//! User row model and insert DTO.

use sqlx::FromRow;

use galleria_core::types::{DbId, Timestamp};

/// One row of `users`.
///
/// Carries `password_hash`, so this type must never be serialized onto the
/// wire; API responses pick the public fields out explicitly.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    /// Consecutive failures since the last successful login.
    pub failed_login_count: i32,
    /// Set while the account is locked out; `NULL` otherwise.
    pub locked_until: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Fields needed to insert a user.
///
/// Provisioning happens out of band (operator tooling, test fixtures);
/// there is no registration endpoint.
#[derive(Debug)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
