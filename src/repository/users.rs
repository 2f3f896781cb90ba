//! Users repository (lookups only, credentials never leave the table)

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::UserShort,
};

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<UserShort> {
        sqlx::query_as::<_, UserShort>("SELECT id, name, email, level FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }

    /// Get user by email, case-insensitive
    pub async fn get_by_email(&self, email: &str) -> AppResult<UserShort> {
        sqlx::query_as::<_, UserShort>(
            "SELECT id, name, email, level FROM users WHERE LOWER(email) = LOWER($1)",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User with email {} not found", email)))
    }
}
