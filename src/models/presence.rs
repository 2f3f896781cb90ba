//! Presence (attendance record) model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::error::{AppError, AppResult};

/// One attendance observation of a person in a classroom
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Presence {
    pub id: i32,
    /// true = present, false = explicitly absent
    #[sqlx(rename = "presence")]
    pub present: bool,
    pub classroom_id: i32,
    pub user_id: i32,
    pub recorded_at: DateTime<Utc>,
    /// Campus calendar day of `recorded_at`
    pub recorded_on: NaiveDate,
}

/// Presence joined with its classroom and user
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PresenceDetails {
    pub id: i32,
    #[sqlx(rename = "presence")]
    pub present: bool,
    pub classroom_id: i32,
    pub user_id: i32,
    pub recorded_at: DateTime<Utc>,
    pub recorded_on: NaiveDate,
    pub classroom_name: String,
    pub classroom_capacity: i32,
    pub user_name: String,
    pub user_email: String,
}

/// Record attendance request
///
/// The person is identified either by `user_id` or by `email`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePresence {
    #[validate(range(min = 1, message = "classroom_id must be positive"))]
    pub classroom_id: i32,
    #[validate(range(min = 1, message = "user_id must be positive"))]
    pub user_id: Option<i32>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    /// Defaults to true
    pub present: Option<bool>,
}

/// How the person of a new presence is designated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonRef {
    Id(i32),
    Email(String),
    /// Both given; they must designate the same person
    IdAndEmail(i32, String),
}

impl CreatePresence {
    pub fn person(&self) -> AppResult<PersonRef> {
        let email = self
            .email
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(str::to_string);

        match (self.user_id, email) {
            (Some(id), None) => Ok(PersonRef::Id(id)),
            (None, Some(email)) => Ok(PersonRef::Email(email)),
            (Some(id), Some(email)) => Ok(PersonRef::IdAndEmail(id, email)),
            (None, None) => Err(AppError::Validation(
                "Either user_id or email is required".to_string(),
            )),
        }
    }

    pub fn present(&self) -> bool {
        self.present.unwrap_or(true)
    }
}

/// Partial update request; absent fields are left untouched
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdatePresence {
    pub present: Option<bool>,
    #[validate(range(min = 1, message = "classroom_id must be positive"))]
    pub classroom_id: Option<i32>,
    #[validate(range(min = 1, message = "user_id must be positive"))]
    pub user_id: Option<i32>,
}

impl UpdatePresence {
    pub fn is_empty(&self) -> bool {
        self.present.is_none() && self.classroom_id.is_none() && self.user_id.is_none()
    }
}

/// Query parameters for listing presences
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct PresenceQuery {
    /// Filter by classroom
    pub classroom_id: Option<i32>,
    /// Filter by user
    pub user_id: Option<i32>,
    /// Filter by calendar day (YYYY-MM-DD)
    pub date_filter: Option<String>,
    /// Number of records to skip
    pub skip: Option<i64>,
    /// Maximum number of records to return
    pub limit: Option<i64>,
}

/// Parsed and bounded presence filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceFilter {
    pub classroom_id: Option<i32>,
    pub user_id: Option<i32>,
    pub date: Option<NaiveDate>,
    pub skip: i64,
    pub limit: i64,
}

/// Query parameters for the occupancy snapshot
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct OccupancyQuery {
    /// Day to inspect (YYYY-MM-DD), defaults to today
    pub date_filter: Option<String>,
}
