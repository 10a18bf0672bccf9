// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;

use crate::models::{DateRangeFilter, RangeKind};

static DAY_END: Lazy<NaiveTime> =
    Lazy::new(|| NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap());
static CUSTOM_DAY_END: Lazy<NaiveTime> = Lazy::new(|| NaiveTime::from_hms_opt(23, 59, 59).unwrap());

/// An inclusive instant pair; `end` may precede `start` for a reversed
/// custom filter, which then matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    /// Calendar days carry no time component; they are compared at midnight.
    pub fn contains(&self, date: NaiveDate) -> bool {
        let at = date.and_time(NaiveTime::MIN);
        at >= self.start && at <= self.end
    }
}

/// Resolve a filter to concrete instants relative to `today`. Callers pass
/// the current local date; tests pass a fixed one.
pub fn resolve(filter: &DateRangeFilter, today: NaiveDate) -> Result<DateRange> {
    let midnight = today.and_time(NaiveTime::MIN);
    let range = match filter.kind {
        RangeKind::Daily => DateRange {
            start: midnight,
            end: midnight + Duration::days(1) - Duration::milliseconds(1),
        },
        RangeKind::Weekly => {
            // Weeks run Sunday through Saturday.
            let week_start = today - Duration::days(today.weekday().num_days_from_sunday() as i64);
            DateRange {
                start: week_start.and_time(NaiveTime::MIN),
                end: (week_start + Duration::days(6)).and_time(*DAY_END),
            }
        }
        RangeKind::Monthly => {
            let month_start = today
                .with_day(1)
                .ok_or_else(|| anyhow!("Invalid month start for {}", today))?;
            DateRange {
                start: month_start.and_time(NaiveTime::MIN),
                end: month_end(today)?.and_time(*DAY_END),
            }
        }
        RangeKind::Custom => DateRange {
            start: filter.start_date.unwrap_or(today).and_time(NaiveTime::MIN),
            end: filter
                .end_date
                .map(|d| d.and_time(*CUSTOM_DAY_END))
                .unwrap_or(midnight),
        },
    };
    Ok(range)
}

/// Last calendar day of the month containing `date`.
pub fn month_end(date: NaiveDate) -> Result<NaiveDate> {
    let (y, m) = (date.year(), date.month());
    let last_day = match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if NaiveDate::from_ymd_opt(y, 2, 29).is_some() {
                29
            } else {
                28
            }
        }
        _ => return Err(anyhow!("Invalid month number {}", m)),
    };
    NaiveDate::from_ymd_opt(y, m, last_day).ok_or_else(|| anyhow!("Invalid month in {}", date))
}
