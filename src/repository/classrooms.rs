//! Classrooms repository (lookups only)

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::Classroom,
};

#[derive(Clone)]
pub struct ClassroomsRepository {
    pool: Pool<Postgres>,
}

impl ClassroomsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get classroom by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Classroom> {
        sqlx::query_as::<_, Classroom>("SELECT * FROM classrooms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Classroom {} not found", id)))
    }

    /// All classrooms, by id
    pub async fn list_all(&self) -> AppResult<Vec<Classroom>> {
        let rows = sqlx::query_as::<_, Classroom>("SELECT * FROM classrooms ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
