//! Trends, peak hours and the real-time view

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::{
    clock::CampusCalendar,
    models::{
        analytics::{DailyTrend, HourCount, PeakHour, PeakTimesReport, RealTimeSnapshot, TrendReport},
        Classroom, Presence,
    },
};

use super::{classroom_occupancy, percentage, present_by_hour};

fn in_window(row: &Presence, start: NaiveDate, end: NaiveDate) -> bool {
    row.recorded_on >= start && row.recorded_on <= end
}

/// Busiest hours first; equal counts keep ascending hour order
fn top_hours(buckets: BTreeMap<u32, i64>, limit: usize) -> Vec<HourCount> {
    let mut hours: Vec<HourCount> = buckets
        .into_iter()
        .map(|(hour, count)| HourCount { hour, count })
        .collect();
    // stable sort over ascending hours
    hours.sort_by(|a, b| b.count.cmp(&a.count));
    hours.truncate(limit);
    hours
}

/// Daily trend and top hours of one classroom over `[start, end]`.
///
/// A day appears once it has at least one record; its rate counts absences in
/// the denominator.
pub fn classroom_trends(
    classroom: &Classroom,
    rows: &[Presence],
    start: NaiveDate,
    end: NaiveDate,
    peak_limit: usize,
    calendar: &CampusCalendar,
) -> TrendReport {
    let scoped: Vec<&Presence> = rows
        .iter()
        .filter(|r| r.classroom_id == classroom.id && in_window(r, start, end))
        .collect();

    let mut by_day: BTreeMap<NaiveDate, (i64, i64)> = BTreeMap::new();
    for row in &scoped {
        let entry = by_day.entry(row.recorded_on).or_insert((0, 0));
        if row.present {
            entry.0 += 1;
        }
        entry.1 += 1;
    }

    let daily_trends = by_day
        .into_iter()
        .map(|(date, (count, total))| DailyTrend {
            date,
            count,
            total,
            rate: percentage(count, total),
        })
        .collect();

    TrendReport {
        classroom_id: classroom.id,
        classroom_name: classroom.name.clone(),
        start_date: start,
        end_date: end,
        days: (end - start).num_days(),
        daily_trends,
        peak_hours: top_hours(present_by_hour(scoped.iter().copied(), calendar), peak_limit),
    }
}

/// Today's headcount for every classroom, including empty ones
pub fn real_time_snapshot(
    classrooms: &[Classroom],
    rows: &[Presence],
    today: NaiveDate,
    calendar: &CampusCalendar,
) -> RealTimeSnapshot {
    let todays: Vec<&Presence> = rows.iter().filter(|r| r.recorded_on == today).collect();

    let mut present_by_classroom: HashMap<i32, i64> = HashMap::new();
    for row in todays.iter().filter(|r| r.present) {
        *present_by_classroom.entry(row.classroom_id).or_insert(0) += 1;
    }

    // left join: every classroom gets a line, zero when nobody showed up
    let classrooms_view = classrooms
        .iter()
        .map(|c| classroom_occupancy(c, present_by_classroom.get(&c.id).copied().unwrap_or(0)))
        .collect();

    let hourly_distribution = present_by_hour(todays.iter().copied(), calendar)
        .into_iter()
        .map(|(hour, count)| HourCount { hour, count })
        .collect();

    RealTimeSnapshot {
        date: today,
        total_present_today: todays.iter().filter(|r| r.present).count() as i64,
        classrooms: classrooms_view,
        hourly_distribution,
    }
}

/// Present records per hour-of-day over `[start, end]`, optionally for one classroom.
///
/// Percentages are relative to the busiest bucket; with no data there is no
/// busiest hour and the list is empty.
pub fn peak_times(
    rows: &[Presence],
    classroom_id: Option<i32>,
    start: NaiveDate,
    end: NaiveDate,
    calendar: &CampusCalendar,
) -> PeakTimesReport {
    let scoped = rows
        .iter()
        .filter(|r| in_window(r, start, end))
        .filter(|r| classroom_id.map_or(true, |id| r.classroom_id == id));
    let buckets = present_by_hour(scoped, calendar);

    let max_count = buckets.values().copied().max().unwrap_or(0);
    let peak_hours: Vec<PeakHour> = buckets
        .into_iter()
        .map(|(hour, count)| PeakHour {
            hour,
            count,
            percentage: percentage(count, max_count),
        })
        .collect();

    // first maximum in hour order
    let busiest_hour = peak_hours
        .iter()
        .fold(None::<&PeakHour>, |best, h| match best {
            Some(b) if b.count >= h.count => Some(b),
            _ => Some(h),
        })
        .cloned();

    PeakTimesReport {
        start_date: start,
        end_date: end,
        days: (end - start).num_days(),
        classroom_id,
        peak_hours,
        busiest_hour,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::fixtures::{calendar, classroom, day, RowBuilder};

    #[test]
    fn test_peak_times_example() {
        let mut rows = RowBuilder::new();
        rows.add(1, 18, 9, true, 5).add(1, 19, 10, true, 12).add(2, 20, 14, true, 3);

        let report = peak_times(&rows.rows, None, day(1), day(20), &calendar());
        let busiest = report.busiest_hour.clone().unwrap();
        assert_eq!((busiest.hour, busiest.count, busiest.percentage), (10, 12, 100.0));

        let hours: Vec<u32> = report.peak_hours.iter().map(|h| h.hour).collect();
        assert_eq!(hours, vec![9, 10, 14]);
        assert!((report.peak_hours[0].percentage - 41.67).abs() < 1e-9);
        assert!((report.peak_hours[2].percentage - 25.0).abs() < 1e-9);
        assert_eq!(report.days, 19);
    }

    #[test]
    fn test_peak_times_empty() {
        let report = peak_times(&[], Some(3), day(1), day(20), &calendar());
        assert!(report.peak_hours.is_empty());
        assert!(report.busiest_hour.is_none());
        assert_eq!(report.classroom_id, Some(3));
    }

    #[test]
    fn test_peak_times_classroom_filter_and_absences() {
        let mut rows = RowBuilder::new();
        rows.add(1, 18, 9, true, 2).add(1, 18, 11, false, 9).add(2, 18, 11, true, 9);

        let report = peak_times(&rows.rows, Some(1), day(1), day(20), &calendar());
        assert_eq!(report.peak_hours.len(), 1);
        assert_eq!(report.busiest_hour.unwrap().hour, 9);
    }

    #[test]
    fn test_busiest_hour_tie_takes_earliest() {
        let mut rows = RowBuilder::new();
        rows.add(1, 18, 15, true, 4).add(1, 18, 8, true, 4);
        let report = peak_times(&rows.rows, None, day(18), day(18), &calendar());
        assert_eq!(report.busiest_hour.unwrap().hour, 8);
    }

    #[test]
    fn test_classroom_trends() {
        let room = classroom(1, "Amphi A", 40);
        let mut rows = RowBuilder::new();
        rows.add(1, 18, 9, true, 3)
            .add(1, 18, 9, false, 1)
            .add(1, 19, 14, true, 6)
            .add(1, 19, 10, true, 2)
            .add(2, 19, 10, true, 50)
            .add(1, 1, 10, true, 8);

        let report = classroom_trends(&room, &rows.rows, day(10), day(20), 5, &calendar());
        assert_eq!(report.daily_trends.len(), 2);
        assert_eq!(
            report.daily_trends[0],
            DailyTrend { date: day(18), count: 3, total: 4, rate: 75.0 }
        );
        assert_eq!(report.daily_trends[1].rate, 100.0);
        assert_eq!(
            report.peak_hours,
            vec![
                HourCount { hour: 14, count: 6 },
                HourCount { hour: 9, count: 3 },
                HourCount { hour: 10, count: 2 },
            ]
        );
    }

    #[test]
    fn test_trends_recomputing_is_stable() {
        let room = classroom(1, "Amphi A", 40);
        let mut rows = RowBuilder::new();
        rows.add(1, 17, 9, true, 2)
            .add(1, 18, 10, true, 2)
            .add(1, 18, 11, false, 1)
            .add(1, 19, 8, true, 2);
        let first = classroom_trends(&room, &rows.rows, day(10), day(20), 5, &calendar());

        assert_eq!(first, classroom_trends(&room, &rows.rows, day(10), day(20), 5, &calendar()));

        let mut reversed = rows.rows.clone();
        reversed.reverse();
        assert_eq!(first, classroom_trends(&room, &reversed, day(10), day(20), 5, &calendar()));
    }

    #[test]
    fn test_trend_day_with_only_absences() {
        let room = classroom(1, "Amphi A", 40);
        let mut rows = RowBuilder::new();
        rows.add(1, 18, 9, false, 2);
        let report = classroom_trends(&room, &rows.rows, day(10), day(20), 5, &calendar());
        assert_eq!(report.daily_trends[0].count, 0);
        assert_eq!(report.daily_trends[0].rate, 0.0);
        assert!(report.peak_hours.is_empty());
    }

    #[test]
    fn test_peak_hours_are_capped() {
        let room = classroom(1, "Amphi A", 40);
        let mut rows = RowBuilder::new();
        for (i, hour) in [8, 9, 10, 11, 12, 13, 14].into_iter().enumerate() {
            rows.add(1, 18, hour, true, i + 1);
        }
        let report = classroom_trends(&room, &rows.rows, day(18), day(18), 5, &calendar());
        let hours: Vec<u32> = report.peak_hours.iter().map(|h| h.hour).collect();
        assert_eq!(hours, vec![14, 13, 12, 11, 10]);
    }

    #[test]
    fn test_real_time_zero_fills_classrooms() {
        let rooms = vec![classroom(1, "Amphi A", 30), classroom(2, "Lab B", 0), classroom(3, "Hall", 100)];
        let mut rows = RowBuilder::new();
        rows.add(1, 20, 8, true, 12)
            .add(1, 20, 13, true, 3)
            .add(1, 20, 13, false, 2)
            .add(3, 19, 9, true, 40);

        let snap = real_time_snapshot(&rooms, &rows.rows, day(20), &calendar());
        assert_eq!(snap.total_present_today, 15);
        assert_eq!(snap.classrooms.len(), 3);
        assert_eq!(snap.classrooms[0].current_count, 15);
        assert_eq!(snap.classrooms[0].occupancy_percentage, 50.0);
        assert_eq!(snap.classrooms[1].current_count, 0);
        assert_eq!(snap.classrooms[1].occupancy_percentage, 0.0);
        assert_eq!(snap.classrooms[2].current_count, 0);
        assert_eq!(snap.classrooms[2].available_seats, 100);
        assert_eq!(
            snap.hourly_distribution,
            vec![HourCount { hour: 8, count: 12 }, HourCount { hour: 13, count: 3 }]
        );
    }
}
