//! Derived attendance reports (never persisted)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Occupancy of one classroom on one day
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct OccupancySnapshot {
    pub classroom_id: i32,
    pub classroom_name: String,
    pub capacity: i32,
    /// Present headcount
    pub current_occupancy: i64,
    /// Percentage of capacity, 0 when capacity <= 0
    pub occupancy_percentage: f64,
    pub available_seats: i64,
    pub total_presences: i64,
    pub total_absences: i64,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ClassroomCount {
    pub classroom_id: i32,
    pub classroom_name: String,
    pub count: i64,
}

/// Attendance volume and rate over a date range
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AffluenceOverview {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_present: i64,
    pub total_absent: i64,
    pub total_records: i64,
    pub presence_rate: f64,
    /// Present records per day; days without present records are omitted
    pub daily_counts: Vec<DailyCount>,
    /// Present records per classroom, busiest first
    pub per_classroom_counts: Vec<ClassroomCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DailyTrend {
    pub date: NaiveDate,
    /// Present records that day
    pub count: i64,
    /// All records that day, absences included
    pub total: i64,
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HourCount {
    /// Hour of day, 0-23
    pub hour: u32,
    pub count: i64,
}

/// Daily presence trend and busiest hours of one classroom
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TrendReport {
    pub classroom_id: i32,
    pub classroom_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i64,
    pub daily_trends: Vec<DailyTrend>,
    pub peak_hours: Vec<HourCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ClassroomOccupancy {
    pub classroom_id: i32,
    pub classroom_name: String,
    pub capacity: i32,
    pub current_count: i64,
    pub occupancy_percentage: f64,
    pub available_seats: i64,
}

/// Today's occupancy across every classroom
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RealTimeSnapshot {
    pub date: NaiveDate,
    pub total_present_today: i64,
    pub classrooms: Vec<ClassroomOccupancy>,
    pub hourly_distribution: Vec<HourCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PeakHour {
    pub hour: u32,
    pub count: i64,
    /// Share of the busiest bucket
    pub percentage: f64,
}

/// Presence counts per hour-of-day over a trailing window
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PeakTimesReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i64,
    pub classroom_id: Option<i32>,
    pub peak_hours: Vec<PeakHour>,
    pub busiest_hour: Option<PeakHour>,
}

/// Query parameters for the affluence overview
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct OverviewQuery {
    /// Start date (YYYY-MM-DD), defaults to a week ago
    pub start_date: Option<String>,
    /// End date (YYYY-MM-DD), defaults to today
    pub end_date: Option<String>,
}

/// Query parameters for classroom trends
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct TrendsQuery {
    /// Trailing window in days (default 30)
    pub days: Option<i64>,
}

/// Query parameters for peak times
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct PeakTimesQuery {
    /// Restrict to one classroom
    pub classroom_id: Option<i32>,
    /// Trailing window in days (default 30)
    pub days: Option<i64>,
}
