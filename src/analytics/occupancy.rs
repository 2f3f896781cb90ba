//! Classroom occupancy for a single day

use chrono::NaiveDate;

use crate::models::{
    analytics::{ClassroomOccupancy, OccupancySnapshot},
    Classroom, Presence,
};

use super::{available_seats, percentage};

/// Occupancy snapshot of `classroom` on `date`.
///
/// Rows of other classrooms or other days are ignored, so callers may pass a
/// wider slice than strictly needed.
pub fn occupancy_snapshot(classroom: &Classroom, rows: &[Presence], date: NaiveDate) -> OccupancySnapshot {
    let (present, absent) = rows
        .iter()
        .filter(|r| r.classroom_id == classroom.id && r.recorded_on == date)
        .fold((0i64, 0i64), |(p, a), r| if r.present { (p + 1, a) } else { (p, a + 1) });

    OccupancySnapshot {
        classroom_id: classroom.id,
        classroom_name: classroom.name.clone(),
        capacity: classroom.capacity,
        current_occupancy: present,
        occupancy_percentage: percentage(present, i64::from(classroom.capacity)),
        available_seats: available_seats(classroom.capacity, present),
        total_presences: present,
        total_absences: absent,
        date,
    }
}

/// Compact occupancy line used by the real-time snapshot
pub fn classroom_occupancy(classroom: &Classroom, current_count: i64) -> ClassroomOccupancy {
    ClassroomOccupancy {
        classroom_id: classroom.id,
        classroom_name: classroom.name.clone(),
        capacity: classroom.capacity,
        current_count,
        occupancy_percentage: percentage(current_count, i64::from(classroom.capacity)),
        available_seats: available_seats(classroom.capacity, current_count),
    }
}
