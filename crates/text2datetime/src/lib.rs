//! # text2datetime
//!
//! Convert free-form textual date/time expressions into a single absolute
//! point in time, resolved against an anchor instant.
//!
//! Recognized grammars, in priority order:
//!
//! - **Relative modifiers** — `"+3d"`, `"-2yr +1mo"`, `"+3d 12:00:00"`
//! - **Fixed keywords** — `"now"`, `"today"`, `"tomorrow end"`, `"yesterday 5:00PM"`
//! - **Ctime** — `"Wed Jan 28 12:28:13 2015"` (weekday optional)
//! - **Numeric slash dates** — `"1/8/2015"`, `"1/8/15 12:28:13"`
//! - **Bare times** — `"12:28"`, `"5:00 PM"` (anchor's date)
//!
//! Every resolution is a pure function of the input string, the anchor, and
//! the options — no shared state, no I/O, safe to call concurrently. The
//! anchor's own zone is consumed as-is; nothing is ever converted between
//! timezones.
//!
//! ```
//! use chrono::{NaiveDate, Timelike};
//! use text2datetime::resolve_at;
//!
//! let anchor = NaiveDate::from_ymd_opt(2020, 6, 15)
//!     .unwrap()
//!     .and_hms_opt(10, 0, 0)
//!     .unwrap();
//! let resolved = resolve_at("tomorrow 5:00AM", anchor).unwrap();
//! assert_eq!(resolved.to_string(), "2020-06-16 05:00:00");
//! assert_eq!(resolve_at("today end", anchor).unwrap().hour(), 23);
//! ```
//!
//! ## Modules
//!
//! - [`clock`] — time-of-day parsing (`H:M[:S]`, optional AM/PM)
//! - [`calendar`] — unit shifts with month-end day clamping
//! - [`resolve`] — grammar matchers, dispatch, and the entry points
//! - [`error`] — error types

pub mod calendar;
pub mod clock;
pub mod error;
pub mod resolve;

pub use calendar::Unit;
pub use clock::TimeOfDay;
pub use error::{ParseError, Result};
pub use resolve::{resolve, resolve_at, resolve_with_options, DateOrder, ParseOptions};

/// Reference text describing every supported expression form, suitable for
/// CLI help output or host application documentation.
pub const FORMAT_HELP: &str = "\
Date should be in one of the following forms:

 - Relative modifiers: a delta from the anchor instant. Each modifier is a
   direction (+ or -), a number, and a unit: y/yr (years), mo (months),
   d (days), h (hours), m (minutes), s (seconds).
   Example: \"+3d\" is three days from this very second. A final entry may be
   a fixed time, so \"+3d 12:00:00\" is noon three days out.

 - Fixed keywords: \"now\" (the anchor itself), \"today\", \"tomorrow\",
   \"yesterday\" (midnight of that date). Append \"end\" for 23:59:59, or an
   explicit time: \"tomorrow end\", \"today 5:00PM\".

 - Ctime format, with optional day of week:
   [3-letter day] 3-letter-month day hour:minute:second 4-digit-year
   Example: \"Wed Jan 28 12:28:13 2015\".

 - Numeric slash dates: month/day/year (or day/month/year with the day-first
   option), with an optional time: \"1/8/2015\", \"1/8/2015 12:28:13\".
   The year is 4-digit, or 2-digit with the century inferred.

 - Time only: \"hour:minute\" or \"hour:minute:second\" on the anchor's date.

Unless AM or PM is given, hours use a 24-hour clock (00 = midnight).
";
