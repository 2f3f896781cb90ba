//! Attendance analytics
//!
//! Pure reducers over presence rows. The repository layer fetches the rows of a
//! bounded date window; everything derived from them (headcounts, rates, day and
//! hour buckets) is computed here so it can be checked without a database.

pub mod affluence;
pub mod occupancy;
pub mod peaks;

use std::collections::BTreeMap;

use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};

use crate::{clock::CampusCalendar, models::Presence};

pub use affluence::affluence_overview;
pub use occupancy::{classroom_occupancy, occupancy_snapshot};
pub use peaks::{classroom_trends, peak_times, real_time_snapshot};

/// `part / whole * 100`, rounded half-up to two decimals; 0 when `whole <= 0`
pub fn percentage(part: i64, whole: i64) -> f64 {
    if whole <= 0 {
        return 0.0;
    }
    let ratio = Decimal::from(part) * Decimal::ONE_HUNDRED / Decimal::from(whole);
    ratio
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// Seats left once `count` people are in; never negative
pub fn available_seats(capacity: i32, count: i64) -> i64 {
    (i64::from(capacity) - count).max(0)
}

/// Present records per hour-of-day, only hours with at least one record
pub(crate) fn present_by_hour<'a, I>(rows: I, calendar: &CampusCalendar) -> BTreeMap<u32, i64>
where
    I: IntoIterator<Item = &'a Presence>,
{
    let mut buckets = BTreeMap::new();
    for row in rows.into_iter().filter(|r| r.present) {
        *buckets.entry(calendar.hour_of(row.recorded_at)).or_insert(0) += 1;
    }
    buckets
}
