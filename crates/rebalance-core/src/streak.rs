//! Logging streaks
//!
//! A streak is the number of consecutive calendar days with at least one
//! logged meal, counted backward from today. Today not being logged yet
//! does not break the streak; it is simply not counted.

use std::collections::HashSet;

use chrono::{DateTime, Days, NaiveDate, TimeZone};

/// Days of history examined when counting a streak
pub const DEFAULT_LOOKBACK_DAYS: u32 = 60;

/// Count consecutive active days ending today or yesterday
///
/// Walks back at most `lookback_days` days starting at `today`. Day 0 is
/// counted if present and skipped otherwise; from day 1 on, the first
/// missing day ends the streak.
pub fn compute_streak(active_days: &HashSet<NaiveDate>, today: NaiveDate, lookback_days: u32) -> u32 {
    let mut streak = 0;

    for i in 0..lookback_days {
        let Some(day) = today.checked_sub_days(Days::new(u64::from(i))) else {
            break;
        };

        if active_days.contains(&day) {
            streak += 1;
        } else if i > 0 {
            break;
        }
    }

    streak
}

/// Collect the calendar days covered by a set of timestamps
///
/// Each timestamp contributes its date in its own time zone, so an entry
/// logged at 23:30 local time counts for that local day.
pub fn active_days<Tz, I>(timestamps: I) -> HashSet<NaiveDate>
where
    Tz: TimeZone,
    I: IntoIterator<Item = DateTime<Tz>>,
{
    timestamps.into_iter().map(|ts| ts.date_naive()).collect()
}
