//! Medication schedules — generation, adherence and missed-dose rollups.
//!
//! A schedule is generated once when a medication is added, covering a
//! fixed window from the prescribed date. Entries flip their `taken` flag
//! in place through the store; everything here is a pure read over the
//! resulting list.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::models::enums::Frequency;
use crate::models::medication::ScheduleEntry;

// ═══════════════════════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════════════════════

/// Days covered by a newly generated schedule.
const SCHEDULE_WINDOW_DAYS: i64 = 7;

/// Dose hours per frequency, in administration order.
fn dose_hours(frequency: Frequency) -> &'static [u32] {
    match frequency {
        Frequency::OnceDaily => &[8],
        Frequency::TwiceDaily => &[8, 20],
        Frequency::ThreeTimesDaily => &[8, 14, 20],
        // As-needed medications carry no fixed schedule.
        Frequency::AsNeeded => &[],
    }
}

fn dose_time(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).expect("dose hour is a valid time")
}

// ═══════════════════════════════════════════════════════════
// Schedule operations
// ═══════════════════════════════════════════════════════════

/// Generate the dosing schedule for a frequency, starting at `start_date`.
pub fn generate_schedule(frequency: Frequency, start_date: NaiveDate) -> Vec<ScheduleEntry> {
    let mut schedule = Vec::new();
    for day in 0..SCHEDULE_WINDOW_DAYS {
        let date = start_date + Duration::days(day);
        for &hour in dose_hours(frequency) {
            schedule.push(ScheduleEntry {
                date,
                time: dose_time(hour),
                taken: false,
            });
        }
    }
    schedule
}

/// Percentage of scheduled doses marked taken, rounded. Empty schedule → 0.
pub fn adherence_rate(schedule: &[ScheduleEntry]) -> u8 {
    if schedule.is_empty() {
        return 0;
    }
    let taken = schedule.iter().filter(|entry| entry.taken).count();
    ((taken as f64 / schedule.len() as f64) * 100.0).round() as u8
}

/// Doses not taken whose scheduled instant is strictly before `now`.
pub fn missed_doses(schedule: &[ScheduleEntry], now: NaiveDateTime) -> usize {
    schedule
        .iter()
        .filter(|entry| !entry.taken && entry.date.and_time(entry.time) < now)
        .count()
}

/// Entries scheduled on a given day, in dose order.
pub fn doses_on(schedule: &[ScheduleEntry], date: NaiveDate) -> Vec<&ScheduleEntry> {
    schedule.iter().filter(|entry| entry.date == date).collect()
}

/// Taken/total rollup for one day of a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub taken: usize,
    pub total: usize,
}

/// Per-day taken/total rollup across the whole schedule, in date order of
/// first appearance.
pub fn daily_summary(schedule: &[ScheduleEntry]) -> Vec<DaySummary> {
    let mut days: Vec<DaySummary> = Vec::new();
    for entry in schedule {
        match days.iter_mut().find(|day| day.date == entry.date) {
            Some(day) => {
                day.total += 1;
                if entry.taken {
                    day.taken += 1;
                }
            }
            None => days.push(DaySummary {
                date: entry.date,
                taken: usize::from(entry.taken),
                total: 1,
            }),
        }
    }
    days
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
