//! Attendance recording and presence management

use validator::Validate;

use crate::{
    analytics,
    clock::CampusCalendar,
    config::PaginationConfig,
    error::{AppError, AppResult},
    models::{
        analytics::OccupancySnapshot,
        presence::{
            CreatePresence, OccupancyQuery, PersonRef, Presence, PresenceDetails, PresenceFilter,
            PresenceQuery, UpdatePresence,
        },
        UserShort,
    },
    repository::{presences::NewPresence, Repository},
};

use super::parse_date;

#[derive(Clone)]
pub struct PresencesService {
    repository: Repository,
    calendar: CampusCalendar,
    pagination: PaginationConfig,
}

impl PresencesService {
    pub fn new(repository: Repository, calendar: CampusCalendar, pagination: PaginationConfig) -> Self {
        Self { repository, calendar, pagination }
    }

    /// Record one attendance event for today.
    ///
    /// Fails with `NotFound` for an unknown classroom or person and with
    /// `Conflict` when the person already has a record in that classroom today.
    pub async fn record(&self, data: &CreatePresence) -> AppResult<Presence> {
        data.validate()?;
        let person = data.person()?;

        let classroom = self.repository.classrooms.get_by_id(data.classroom_id).await?;
        let user = self.resolve_person(&person).await?;

        let recorded_at = self.calendar.now();
        let new = NewPresence {
            classroom_id: classroom.id,
            user_id: user.id,
            present: data.present(),
            recorded_at,
            recorded_on: self.calendar.day_of(recorded_at),
        };

        match self.repository.presences.insert_once(&new).await? {
            Some(presence) => {
                tracing::info!(
                    presence_id = presence.id,
                    classroom_id = presence.classroom_id,
                    user_id = presence.user_id,
                    present = presence.present,
                    "Presence recorded"
                );
                Ok(presence)
            }
            None => {
                tracing::warn!(
                    classroom_id = new.classroom_id,
                    user_id = new.user_id,
                    day = %new.recorded_on,
                    "Duplicate presence rejected"
                );
                Err(AppError::Conflict(
                    "A presence already exists for this user in this classroom today".to_string(),
                ))
            }
        }
    }

    async fn resolve_person(&self, person: &PersonRef) -> AppResult<UserShort> {
        match person {
            PersonRef::Id(id) => self.repository.users.get_by_id(*id).await,
            PersonRef::Email(email) => self.repository.users.get_by_email(email).await,
            PersonRef::IdAndEmail(id, email) => {
                let user = self.repository.users.get_by_id(*id).await?;
                if !user.email.eq_ignore_ascii_case(email) {
                    return Err(AppError::Validation(format!(
                        "user_id {} does not match email {}",
                        id, email
                    )));
                }
                Ok(user)
            }
        }
    }

    pub async fn list(&self, query: &PresenceQuery) -> AppResult<Vec<PresenceDetails>> {
        let filter = build_filter(query, &self.pagination)?;
        self.repository.presences.list(&filter).await
    }

    pub async fn get(&self, id: i32) -> AppResult<PresenceDetails> {
        self.repository.presences.get_details(id).await
    }

    /// Apply the provided fields; referenced classroom and user must exist
    pub async fn update(&self, id: i32, data: &UpdatePresence) -> AppResult<Presence> {
        data.validate()?;
        let current = self.repository.presences.get_by_id(id).await?;

        if let Some(classroom_id) = data.classroom_id {
            self.repository.classrooms.get_by_id(classroom_id).await?;
        }
        if let Some(user_id) = data.user_id {
            self.repository.users.get_by_id(user_id).await?;
        }
        if data.is_empty() {
            return Ok(current);
        }

        let presence = self.repository.presences.update(id, data).await?;
        tracing::info!(
            presence_id = presence.id,
            classroom_id = presence.classroom_id,
            user_id = presence.user_id,
            present = presence.present,
            "Presence updated"
        );
        Ok(presence)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.presences.delete(id).await?;
        tracing::info!(presence_id = id, "Presence deleted");
        Ok(())
    }

    /// Occupancy of a classroom on the requested day (today by default)
    pub async fn occupancy(&self, classroom_id: i32, query: &OccupancyQuery) -> AppResult<OccupancySnapshot> {
        let date = parse_date("date_filter", query.date_filter.as_deref())?
            .unwrap_or_else(|| self.calendar.today());
        let classroom = self.repository.classrooms.get_by_id(classroom_id).await?;

        let rows = self
            .repository
            .presences
            .list_in_range(date, date, Some(classroom.id))
            .await?;
        Ok(analytics::occupancy_snapshot(&classroom, &rows, date))
    }

    /// A user's presences, newest first
    pub async fn history(&self, user_id: i32) -> AppResult<Vec<PresenceDetails>> {
        self.repository.users.get_by_id(user_id).await?;
        self.repository.presences.list_for_user(user_id).await
    }
}

/// Turn raw list parameters into a bounded filter
pub fn build_filter(query: &PresenceQuery, pagination: &PaginationConfig) -> AppResult<PresenceFilter> {
    let skip = query.skip.unwrap_or(0);
    if skip < 0 {
        return Err(AppError::Validation("skip must not be negative".to_string()));
    }
    let limit = query.limit.unwrap_or(pagination.default_limit);
    if limit < 1 || limit > pagination.max_limit {
        return Err(AppError::Validation(format!(
            "limit must be between 1 and {}",
            pagination.max_limit
        )));
    }

    Ok(PresenceFilter {
        classroom_id: query.classroom_id,
        user_id: query.user_id,
        date: parse_date("date_filter", query.date_filter.as_deref())?,
        skip,
        limit,
    })
}
