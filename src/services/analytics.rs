//! Affluence, trend and peak-time reporting

use chrono::{Duration, NaiveDate};

use crate::{
    analytics,
    clock::CampusCalendar,
    config::AnalyticsConfig,
    error::{AppError, AppResult},
    models::analytics::{
        AffluenceOverview, OverviewQuery, PeakTimesQuery, PeakTimesReport, RealTimeSnapshot,
        TrendReport, TrendsQuery,
    },
    repository::Repository,
};

use super::parse_date;

#[derive(Clone)]
pub struct AnalyticsService {
    repository: Repository,
    calendar: CampusCalendar,
    config: AnalyticsConfig,
}

impl AnalyticsService {
    pub fn new(repository: Repository, calendar: CampusCalendar, config: AnalyticsConfig) -> Self {
        Self { repository, calendar, config }
    }

    /// Present/absent totals, per-day and per-classroom counts over a date range
    pub async fn overview(&self, query: &OverviewQuery) -> AppResult<AffluenceOverview> {
        let (start, end) = overview_range(query, self.calendar.today(), &self.config)?;

        let rows = self.repository.presences.list_in_range(start, end, None).await?;
        let classrooms = self.repository.classrooms.list_all().await?;
        Ok(analytics::affluence_overview(&rows, &classrooms, start, end))
    }

    /// Daily trend and busiest hours of one classroom over a trailing window
    pub async fn classroom_trends(
        &self,
        classroom_id: i32,
        query: &TrendsQuery,
    ) -> AppResult<TrendReport> {
        let days = window_days(query.days, &self.config)?;
        let classroom = self.repository.classrooms.get_by_id(classroom_id).await?;
        let (start, end) = self.calendar.trailing_window(days);

        let rows = self
            .repository
            .presences
            .list_in_range(start, end, Some(classroom.id))
            .await?;
        Ok(analytics::classroom_trends(
            &classroom,
            &rows,
            start,
            end,
            self.config.peak_hours_limit,
            &self.calendar,
        ))
    }

    /// Today's occupancy of every classroom and the hourly distribution
    pub async fn real_time(&self) -> AppResult<RealTimeSnapshot> {
        let today = self.calendar.today();
        let classrooms = self.repository.classrooms.list_all().await?;
        let rows = self.repository.presences.list_in_range(today, today, None).await?;
        Ok(analytics::real_time_snapshot(&classrooms, &rows, today, &self.calendar))
    }

    /// Hour-of-day distribution over a trailing window, optionally for one classroom
    pub async fn peak_times(&self, query: &PeakTimesQuery) -> AppResult<PeakTimesReport> {
        let days = window_days(query.days, &self.config)?;
        let (start, end) = self.calendar.trailing_window(days);

        let rows = self
            .repository
            .presences
            .list_in_range(start, end, query.classroom_id)
            .await?;
        Ok(analytics::peak_times(&rows, query.classroom_id, start, end, &self.calendar))
    }
}

/// Requested trailing window length; `0` is today only
pub fn window_days(days: Option<i64>, config: &AnalyticsConfig) -> AppResult<i64> {
    let days = days.unwrap_or(config.trend_default_days);
    if days < 0 || days > config.max_window_days {
        return Err(AppError::Validation(format!(
            "days must be between 0 and {}",
            config.max_window_days
        )));
    }
    Ok(days)
}

/// Inclusive overview range; missing bounds default to the configured week ending today
pub fn overview_range(
    query: &OverviewQuery,
    today: NaiveDate,
    config: &AnalyticsConfig,
) -> AppResult<(NaiveDate, NaiveDate)> {
    let end = parse_date("end_date", query.end_date.as_deref())?.unwrap_or(today);
    let start = match parse_date("start_date", query.start_date.as_deref())? {
        Some(start) => start,
        None => end
            .checked_sub_signed(Duration::days(config.overview_default_days))
            .ok_or_else(|| AppError::Validation(format!("end_date {} is out of range", end)))?,
    };

    if start > end {
        return Err(AppError::Validation(format!(
            "start_date {} is after end_date {}",
            start, end
        )));
    }
    Ok((start, end))
}
