//! Presences repository

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::presence::{Presence, PresenceDetails, PresenceFilter, UpdatePresence},
};

const DETAILS_SELECT: &str = r#"
    SELECT p.id, p.presence, p.classroom_id, p.user_id, p.recorded_at, p.recorded_on,
           c.name AS classroom_name, c.capacity AS classroom_capacity,
           u.name AS user_name, u.email AS user_email
    FROM presences p
    JOIN classrooms c ON c.id = p.classroom_id
    JOIN users u ON u.id = p.user_id
"#;

/// Fields of a new attendance record
#[derive(Debug, Clone)]
pub struct NewPresence {
    pub classroom_id: i32,
    pub user_id: i32,
    pub present: bool,
    pub recorded_at: DateTime<Utc>,
    pub recorded_on: NaiveDate,
}

#[derive(Clone)]
pub struct PresencesRepository {
    pool: Pool<Postgres>,
}

impl PresencesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get presence by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Presence> {
        sqlx::query_as::<_, Presence>("SELECT * FROM presences WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Presence {} not found", id)))
    }

    /// Get presence with classroom and user details
    pub async fn get_details(&self, id: i32) -> AppResult<PresenceDetails> {
        let query = format!("{} WHERE p.id = $1", DETAILS_SELECT);
        sqlx::query_as::<_, PresenceDetails>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Presence {} not found", id)))
    }

    /// List presences with optional filters and offset pagination
    pub async fn list(&self, filter: &PresenceFilter) -> AppResult<Vec<PresenceDetails>> {
        let mut conditions = Vec::new();
        let mut idx = 1;

        if filter.classroom_id.is_some() {
            conditions.push(format!("p.classroom_id = ${}", idx));
            idx += 1;
        }
        if filter.user_id.is_some() {
            conditions.push(format!("p.user_id = ${}", idx));
            idx += 1;
        }
        if filter.date.is_some() {
            conditions.push(format!("p.recorded_on = ${}", idx));
            idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "{} {} ORDER BY p.recorded_at DESC, p.id DESC LIMIT ${} OFFSET ${}",
            DETAILS_SELECT,
            where_clause,
            idx,
            idx + 1
        );

        let mut builder = sqlx::query_as::<_, PresenceDetails>(&query);
        if let Some(classroom_id) = filter.classroom_id {
            builder = builder.bind(classroom_id);
        }
        if let Some(user_id) = filter.user_id {
            builder = builder.bind(user_id);
        }
        if let Some(date) = filter.date {
            builder = builder.bind(date);
        }

        let rows = builder
            .bind(filter.limit)
            .bind(filter.skip)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// All presences of a user, newest first
    pub async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<PresenceDetails>> {
        let query = format!(
            "{} WHERE p.user_id = $1 ORDER BY p.recorded_at DESC, p.id DESC",
            DETAILS_SELECT
        );
        let rows = sqlx::query_as::<_, PresenceDetails>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Raw presences of the inclusive day range, optionally for one classroom
    pub async fn list_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        classroom_id: Option<i32>,
    ) -> AppResult<Vec<Presence>> {
        let rows = match classroom_id {
            Some(classroom_id) => {
                sqlx::query_as::<_, Presence>(
                    r#"
                    SELECT * FROM presences
                    WHERE recorded_on >= $1 AND recorded_on <= $2 AND classroom_id = $3
                    ORDER BY recorded_at
                    "#,
                )
                .bind(start)
                .bind(end)
                .bind(classroom_id)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Presence>(
                    r#"
                    SELECT * FROM presences
                    WHERE recorded_on >= $1 AND recorded_on <= $2
                    ORDER BY recorded_at
                    "#,
                )
                .bind(start)
                .bind(end)
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(rows)
    }

    /// Insert unless the person already has a record in that classroom that day.
    ///
    /// Returns `None` when the unique (classroom, user, day) key is taken; the
    /// check and the insert are a single statement.
    pub async fn insert_once(&self, data: &NewPresence) -> AppResult<Option<Presence>> {
        let row = sqlx::query_as::<_, Presence>(
            r#"
            INSERT INTO presences (presence, classroom_id, user_id, recorded_at, recorded_on)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT ON CONSTRAINT presences_one_per_day DO NOTHING
            RETURNING *
            "#,
        )
        .bind(data.present)
        .bind(data.classroom_id)
        .bind(data.user_id)
        .bind(data.recorded_at)
        .bind(data.recorded_on)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Rewrite the provided fields of a presence
    pub async fn update(&self, id: i32, data: &UpdatePresence) -> AppResult<Presence> {
        let mut sets = Vec::new();
        let mut idx = 1;

        macro_rules! add_f {
            ($field:expr, $name:expr) => {
                if $field.is_some() { sets.push(format!("{} = ${}", $name, idx)); idx += 1; }
            };
        }

        add_f!(data.present, "presence");
        add_f!(data.classroom_id, "classroom_id");
        add_f!(data.user_id, "user_id");

        if sets.is_empty() {
            return self.get_by_id(id).await;
        }

        let query = format!(
            "UPDATE presences SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, Presence>(&query);

        macro_rules! bind_f {
            ($field:expr) => {
                if let Some(val) = $field { builder = builder.bind(val); }
            };
        }

        bind_f!(data.present);
        bind_f!(data.classroom_id);
        bind_f!(data.user_id);

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Presence {} not found", id)))
    }

    /// Delete a presence
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM presences WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Presence {} not found", id)));
        }
        Ok(())
    }
}
