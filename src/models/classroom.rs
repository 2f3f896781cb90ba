//! Classroom model (read-only from the attendance side)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Classroom record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Classroom {
    pub id: i32,
    pub name: String,
    /// Number of seats
    pub capacity: i32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
