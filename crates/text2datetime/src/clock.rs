//! Time-of-day parsing: `H:M`, `H:M:S`, optional case-insensitive AM/PM.
//!
//! Hours follow a 24-hour clock unless AM/PM is present, in which case the
//! literal hour must be 1–12 and is converted (`12 AM` → 0, `12 PM` → 12,
//! other PM hours add 12). Seconds default to 0 when omitted.

use crate::error::{ParseError, Result};

/// A parsed wall-clock time with second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    /// Hour on the 24-hour clock (0–23), already past AM/PM conversion.
    pub hour: u32,
    /// Minute (0–59).
    pub minute: u32,
    /// Second (0–59).
    pub second: u32,
}

/// AM/PM suffix stripped off a time string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

impl TimeOfDay {
    /// Start of day, 00:00:00.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// End of day, 23:59:59.
    pub const END_OF_DAY: TimeOfDay = TimeOfDay {
        hour: 23,
        minute: 59,
        second: 59,
    };

    /// Parse a time string such as `"12:28"`, `"12:28:13"`, `"5:00PM"`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidTimeField`] if the string does not have
    /// the `H:M[:S]` shape or a field is out of range for the interpretation
    /// in effect (1–12 with AM/PM, 0–23 without; minutes and seconds 0–59).
    pub fn parse(s: &str) -> Result<TimeOfDay> {
        let (digits, meridiem) = split_meridiem(s.trim());

        let fields: Vec<&str> = digits.split(':').collect();
        if !(fields.len() == 2 || fields.len() == 3) {
            return Err(ParseError::InvalidTimeField(format!(
                "time must be hours:minutes or hours:minutes:seconds, got '{s}'"
            )));
        }

        let hour = parse_field(fields[0], s)?;
        let minute = parse_field(fields[1], s)?;
        let second = match fields.get(2) {
            Some(f) => parse_field(f, s)?,
            None => 0,
        };

        let hour = match meridiem {
            Some(m) => {
                if !(1..=12).contains(&hour) {
                    return Err(ParseError::InvalidTimeField(format!(
                        "hour must be 1-12 when using AM/PM, got {hour}"
                    )));
                }
                match (hour, m) {
                    (12, Meridiem::Am) => 0,
                    (12, Meridiem::Pm) => 12,
                    (h, Meridiem::Am) => h,
                    (h, Meridiem::Pm) => h + 12,
                }
            }
            None => {
                if hour > 23 {
                    return Err(ParseError::InvalidTimeField(format!(
                        "hour must be 0-23 on a 24-hour clock, got {hour}"
                    )));
                }
                hour
            }
        };

        if minute > 59 {
            return Err(ParseError::InvalidTimeField(format!(
                "minute must be 0-59, got {minute}"
            )));
        }
        if second > 59 {
            return Err(ParseError::InvalidTimeField(format!(
                "second must be 0-59, got {second}"
            )));
        }

        Ok(TimeOfDay {
            hour,
            minute,
            second,
        })
    }

    /// Cheap shape test: colon-separated digit fields with an optional AM/PM
    /// suffix. Matchers use this to decide "no match" before committing;
    /// [`TimeOfDay::parse`] still does the range validation.
    pub fn matches_shape(s: &str) -> bool {
        let (digits, _) = split_meridiem(s.trim());
        let fields: Vec<&str> = digits.split(':').collect();
        (fields.len() == 2 || fields.len() == 3)
            && fields
                .iter()
                .all(|f| !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()))
    }
}

/// Parse one numeric time field, mapping any failure to `InvalidTimeField`.
fn parse_field(field: &str, whole: &str) -> Result<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidTimeField(format!(
            "time fields must be numeric in '{whole}'"
        )));
    }
    field.parse().map_err(|_| {
        ParseError::InvalidTimeField(format!("time field '{field}' out of range in '{whole}'"))
    })
}

/// Strip a trailing AM/PM (case-insensitive, no separating space) and report
/// which one was present.
fn split_meridiem(s: &str) -> (&str, Option<Meridiem>) {
    if s.len() >= 2 && s.is_char_boundary(s.len() - 2) {
        let (head, tail) = s.split_at(s.len() - 2);
        if tail.eq_ignore_ascii_case("am") {
            return (head.trim_end(), Some(Meridiem::Am));
        }
        if tail.eq_ignore_ascii_case("pm") {
            return (head.trim_end(), Some(Meridiem::Pm));
        }
    }
    (s, None)
}

/// Remove the single space between a time and a trailing AM/PM, so
/// `"5:00 PM"` tokenizes as one time component (`"5:00PM"`).
pub(crate) fn condense_am_pm(s: &str) -> String {
    if s.len() >= 3 && s.is_char_boundary(s.len() - 3) {
        let (head, tail) = s.split_at(s.len() - 3);
        if tail.eq_ignore_ascii_case(" am") || tail.eq_ignore_ascii_case(" pm") {
            return format!("{head}{}", &tail[1..]);
        }
    }
    s.to_string()
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn tod(hour: u32, minute: u32, second: u32) -> TimeOfDay {
        TimeOfDay {
            hour,
            minute,
            second,
        }
    }

    #[test]
    fn test_parse_hours_minutes() {
        assert_eq!(TimeOfDay::parse("12:28").unwrap(), tod(12, 28, 0));
    }

    #[test]
    fn test_parse_hours_minutes_seconds() {
        assert_eq!(TimeOfDay::parse("12:28:13").unwrap(), tod(12, 28, 13));
    }

    #[test]
    fn test_parse_midnight_24h() {
        assert_eq!(TimeOfDay::parse("00:00").unwrap(), tod(0, 0, 0));
    }

    #[test]
    fn test_parse_12_am_is_hour_zero() {
        assert_eq!(TimeOfDay::parse("12:00AM").unwrap(), tod(0, 0, 0));
    }

    #[test]
    fn test_parse_12_pm_is_noon() {
        assert_eq!(TimeOfDay::parse("12:00PM").unwrap(), tod(12, 0, 0));
    }

    #[test]
    fn test_parse_1_pm_is_thirteen() {
        assert_eq!(TimeOfDay::parse("1:00PM").unwrap(), tod(13, 0, 0));
    }

    #[test]
    fn test_parse_am_pm_case_insensitive() {
        assert_eq!(TimeOfDay::parse("5:30pm").unwrap(), tod(17, 30, 0));
        assert_eq!(TimeOfDay::parse("5:30Pm").unwrap(), tod(17, 30, 0));
    }

    #[test]
    fn test_parse_am_keeps_morning_hours() {
        assert_eq!(TimeOfDay::parse("9:15AM").unwrap(), tod(9, 15, 0));
    }

    #[test]
    fn test_parse_hour_out_of_range_24h() {
        let err = TimeOfDay::parse("99:00").unwrap_err();
        assert!(matches!(err, ParseError::InvalidTimeField(_)));
    }

    #[test]
    fn test_parse_hour_13_with_pm_rejected() {
        let err = TimeOfDay::parse("13:00PM").unwrap_err();
        assert!(err.to_string().contains("1-12"), "got: {err}");
    }

    #[test]
    fn test_parse_minute_out_of_range() {
        assert!(TimeOfDay::parse("10:61").is_err());
    }

    #[test]
    fn test_parse_second_out_of_range() {
        assert!(TimeOfDay::parse("10:30:60").is_err());
    }

    #[test]
    fn test_parse_non_numeric_field() {
        assert!(TimeOfDay::parse("ab:30").is_err());
    }

    #[test]
    fn test_parse_too_many_fields() {
        assert!(TimeOfDay::parse("1:2:3:4").is_err());
    }

    #[test]
    fn test_shape_accepts_times() {
        assert!(TimeOfDay::matches_shape("5:00"));
        assert!(TimeOfDay::matches_shape("12:28:13"));
        assert!(TimeOfDay::matches_shape("5:00PM"));
        // Shape only — range problems are hard failures at parse time.
        assert!(TimeOfDay::matches_shape("99:00"));
    }

    #[test]
    fn test_shape_rejects_non_times() {
        assert!(!TimeOfDay::matches_shape("banana"));
        assert!(!TimeOfDay::matches_shape("1/8/2015"));
        assert!(!TimeOfDay::matches_shape("12:"));
        assert!(!TimeOfDay::matches_shape(":30"));
        assert!(!TimeOfDay::matches_shape("12"));
    }

    #[test]
    fn test_condense_removes_space_before_suffix() {
        assert_eq!(condense_am_pm("5:00 PM"), "5:00PM");
        assert_eq!(condense_am_pm("tomorrow 5:00 am"), "tomorrow 5:00am");
    }

    #[test]
    fn test_condense_leaves_other_input_alone() {
        assert_eq!(condense_am_pm("5:00PM"), "5:00PM");
        assert_eq!(condense_am_pm("today"), "today");
        assert_eq!(condense_am_pm("am"), "am");
    }
}
