//! Business logic services

pub mod analytics;
pub mod presences;

use crate::{
    clock::CampusCalendar,
    config::{AnalyticsConfig, PaginationConfig},
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub presences: presences::PresencesService,
    pub analytics: analytics::AnalyticsService,
    pub repository: Repository,
}

impl Services {
    /// Create all services with the given repository and calendar
    pub fn new(
        repository: Repository,
        calendar: CampusCalendar,
        analytics_config: AnalyticsConfig,
        pagination_config: PaginationConfig,
    ) -> Self {
        Self {
            presences: presences::PresencesService::new(
                repository.clone(),
                calendar.clone(),
                pagination_config,
            ),
            analytics: analytics::AnalyticsService::new(repository.clone(), calendar, analytics_config),
            repository,
        }
    }
}

/// Parse an optional `YYYY-MM-DD` query parameter
pub(crate) fn parse_date(field: &str, value: Option<&str>) -> crate::error::AppResult<Option<chrono::NaiveDate>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(raw) => chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| {
                crate::error::AppError::Validation(format!(
                    "Invalid {} '{}', expected YYYY-MM-DD",
                    field, raw
                ))
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_parse_date() {
        assert_eq!(
            assert_ok!(parse_date("date_filter", Some("2024-05-20"))),
            Some(NaiveDate::from_ymd_opt(2024, 5, 20).unwrap())
        );
        assert_eq!(assert_ok!(parse_date("date_filter", None)), None);
        assert_eq!(assert_ok!(parse_date("date_filter", Some(" "))), None);
        assert_err!(parse_date("date_filter", Some("20/05/2024")));
        assert_err!(parse_date("start_date", Some("2024-02-30")));
    }
}
