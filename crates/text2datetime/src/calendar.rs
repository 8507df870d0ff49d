//! Calendar arithmetic: unit shifts against an instant.
//!
//! Year and month shifts move the calendar fields directly rather than going
//! through elapsed seconds, clamping the day-of-month to the last valid day
//! of the resulting month (Jan 31 + 1 month = Feb 28, not March 3). Day and
//! sub-day shifts go through elapsed time and cross month/year boundaries
//! exactly. Shift functions return `None` only when the result falls outside
//! chrono's representable range.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

use crate::clock::TimeOfDay;

/// A relative-modifier unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl Unit {
    /// Map a modifier suffix (`y`, `yr`, `mo`, `d`, `h`, `m`, `s`) to a unit.
    /// Case-insensitive; `None` for anything outside the fixed vocabulary.
    pub fn from_suffix(s: &str) -> Option<Unit> {
        match s.to_ascii_lowercase().as_str() {
            "y" | "yr" => Some(Unit::Year),
            "mo" => Some(Unit::Month),
            "d" => Some(Unit::Day),
            "h" => Some(Unit::Hour),
            "m" => Some(Unit::Minute),
            "s" => Some(Unit::Second),
            _ => None,
        }
    }
}

/// Shift `base` by a signed `amount` of `unit`.
pub fn shift(base: NaiveDateTime, amount: i64, unit: Unit) -> Option<NaiveDateTime> {
    match unit {
        // A year is twelve calendar months, so Feb 29 clamps like any other
        // month-end shift.
        Unit::Year => shift_months(base, amount.checked_mul(12)?),
        Unit::Month => shift_months(base, amount),
        Unit::Day => base.checked_add_signed(Duration::try_days(amount)?),
        Unit::Hour => base.checked_add_signed(Duration::try_hours(amount)?),
        Unit::Minute => base.checked_add_signed(Duration::try_minutes(amount)?),
        Unit::Second => base.checked_add_signed(Duration::try_seconds(amount)?),
    }
}

/// Replace the time portion of `base` with `time`, keeping the date.
pub fn at_time(base: NaiveDateTime, time: TimeOfDay) -> NaiveDateTime {
    on_date(base.date(), time)
}

/// Combine a calendar date with a wall-clock time.
pub fn on_date(date: NaiveDate, time: TimeOfDay) -> NaiveDateTime {
    date.and_hms_opt(time.hour, time.minute, time.second)
        // TimeOfDay fields are range-validated, so this arm is unreachable.
        .unwrap_or_else(|| date.and_time(chrono::NaiveTime::MIN))
}

/// Shift the calendar month, clamping the day to the target month's length.
fn shift_months(base: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let total = (base.year() as i64 * 12 + base.month() as i64 - 1).checked_add(months)?;
    let year = i32::try_from(total.div_euclid(12)).ok()?;
    let month = (total.rem_euclid(12) + 1) as u32;
    let day = base.day().min(last_day_of_month(year, month)?);
    Some(NaiveDate::from_ymd_opt(year, month, day)?.and_time(base.time()))
}

/// Last valid day of a month, derived from the first of the following month.
pub fn last_day_of_month(year: i32, month: u32) -> Option<u32> {
    let (ny, nm) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    Some(NaiveDate::from_ymd_opt(ny, nm, 1)?.pred_opt()?.day())
}

// ── Tests ───────────────────────────────────────────────────────────────────
