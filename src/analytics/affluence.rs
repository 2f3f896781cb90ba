//! Affluence over a date range

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::models::{
    analytics::{AffluenceOverview, ClassroomCount, DailyCount},
    Classroom, Presence,
};

use super::percentage;

/// Aggregate presences recorded between `start` and `end` (both inclusive).
///
/// `classrooms` only provides display names; counts come from `rows`.
pub fn affluence_overview(
    rows: &[Presence],
    classrooms: &[Classroom],
    start: NaiveDate,
    end: NaiveDate,
) -> AffluenceOverview {
    let mut total_present = 0i64;
    let mut total_absent = 0i64;
    let mut by_day: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    let mut by_classroom: HashMap<i32, i64> = HashMap::new();

    for row in rows.iter().filter(|r| r.recorded_on >= start && r.recorded_on <= end) {
        if row.present {
            total_present += 1;
            *by_day.entry(row.recorded_on).or_insert(0) += 1;
            *by_classroom.entry(row.classroom_id).or_insert(0) += 1;
        } else {
            total_absent += 1;
        }
    }

    let names: HashMap<i32, &str> = classrooms.iter().map(|c| (c.id, c.name.as_str())).collect();

    let mut per_classroom_counts: Vec<ClassroomCount> = by_classroom
        .into_iter()
        .map(|(classroom_id, count)| ClassroomCount {
            classroom_id,
            classroom_name: names
                .get(&classroom_id)
                .map(|n| n.to_string())
                .unwrap_or_else(|| format!("Classroom {}", classroom_id)),
            count,
        })
        .collect();
    per_classroom_counts.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then(a.classroom_id.cmp(&b.classroom_id))
    });

    let total_records = total_present + total_absent;

    AffluenceOverview {
        start_date: start,
        end_date: end,
        total_present,
        total_absent,
        total_records,
        presence_rate: percentage(total_present, total_records),
        daily_counts: by_day
            .into_iter()
            .map(|(date, count)| DailyCount { date, count })
            .collect(),
        per_classroom_counts,
    }
}
