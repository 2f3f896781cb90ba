//! Injected time source and campus calendar
//!
//! "Today" and "now" are never read from the ambient clock inside a computation:
//! services hold a [`CampusCalendar`] and pass the derived dates down explicitly.

use std::sync::Arc;

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Offset, Timelike, Utc};

/// Source of the current instant
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock used in production
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a given instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Maps instants to campus calendar days and hours-of-day
#[derive(Clone)]
pub struct CampusCalendar {
    clock: Arc<dyn Clock>,
    offset: FixedOffset,
}

impl CampusCalendar {
    /// Build a calendar; offsets outside +/- 24h fall back to UTC.
    pub fn new(clock: Arc<dyn Clock>, utc_offset_minutes: i32) -> Self {
        let offset = FixedOffset::east_opt(utc_offset_minutes * 60).unwrap_or_else(|| Utc.fix());
        Self { clock, offset }
    }

    pub fn utc(clock: Arc<dyn Clock>) -> Self {
        Self::new(clock, 0)
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn today(&self) -> NaiveDate {
        self.day_of(self.clock.now())
    }

    /// Calendar day an instant falls on, in campus local time
    pub fn day_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.offset).date_naive()
    }

    /// Hour-of-day (0-23) of an instant, in campus local time
    pub fn hour_of(&self, instant: DateTime<Utc>) -> u32 {
        instant.with_timezone(&self.offset).hour()
    }

    /// Inclusive window `[today - days, today]`
    pub fn trailing_window(&self, days: i64) -> (NaiveDate, NaiveDate) {
        let today = self.today();
        (today - Duration::days(days), today)
    }
}

impl std::fmt::Debug for CampusCalendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CampusCalendar")
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}
