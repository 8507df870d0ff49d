//! Format dispatch: the ordered grammar matchers and the public entry points.
//!
//! Each matcher is a pure function over the trimmed input, the anchor, and
//! the options. `Ok(None)` means the input's shape is not this matcher's
//! ("no match" — the dispatcher keeps going); `Err` means the shape matched
//! but a field is invalid (a hard failure that never falls through to a
//! lower-priority matcher). The priority order is fixed and total:
//! relative modifiers → fixed keywords → ctime → numeric slash dates →
//! bare time-of-day.

use chrono::{Duration, Local, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::calendar::{self, Unit};
use crate::clock::{condense_am_pm, TimeOfDay};
use crate::error::{ParseError, Result};

// ── Options ─────────────────────────────────────────────────────────────────

/// How an ambiguous `N/N/N` slash date is read.
///
/// Fixed for the call and never inferred from the string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DateOrder {
    /// US convention: month/day/year (`1/8/2015` = January 8).
    #[default]
    MonthFirst,
    /// day/month/year (`1/8/2015` = August 1).
    DayFirst,
}

/// Options for [`resolve_with_options`].
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Field order for ambiguous numeric slash dates.
    pub date_order: DateOrder,
}

// ── Public entry points ─────────────────────────────────────────────────────

/// Resolve an expression against the current local instant, month-first.
///
/// # Errors
///
/// Returns [`ParseError::UnrecognizedFormat`] if no grammar matches, or
/// [`ParseError::InvalidField`] / [`ParseError::InvalidTimeField`] if a
/// grammar matched but a field is out of range.
pub fn resolve(text: &str) -> Result<NaiveDateTime> {
    resolve_at(text, Local::now().naive_local())
}

/// Resolve an expression against an explicit anchor instant, month-first.
pub fn resolve_at(text: &str, anchor: NaiveDateTime) -> Result<NaiveDateTime> {
    resolve_with_options(text, anchor, &ParseOptions::default())
}

/// Resolve an expression against an explicit anchor with explicit options.
///
/// The input is trimmed and a single space before a trailing AM/PM is
/// removed; keywords, unit suffixes, and AM/PM compare case-insensitively.
/// Numeric and punctuation content is never altered. Results carry second
/// precision — any sub-second component of the anchor is dropped.
pub fn resolve_with_options(
    text: &str,
    anchor: NaiveDateTime,
    options: &ParseOptions,
) -> Result<NaiveDateTime> {
    let trimmed = text.trim();
    let condensed = condense_am_pm(trimmed);
    let anchor = anchor.with_nanosecond(0).unwrap_or(anchor);

    for matcher in MATCHERS {
        if let Some(resolved) = matcher(&condensed, anchor, options)? {
            return Ok(resolved);
        }
    }
    Err(ParseError::UnrecognizedFormat(format!(
        "cannot parse expression: '{trimmed}'"
    )))
}

// ── Dispatcher ──────────────────────────────────────────────────────────────

type Matcher = fn(&str, NaiveDateTime, &ParseOptions) -> Result<Option<NaiveDateTime>>;

/// The grammars in priority order. First `Ok(Some)` wins; the first `Err`
/// propagates immediately.
const MATCHERS: [Matcher; 5] = [
    try_relative_modifier,
    try_fixed_keyword,
    try_ctime,
    try_slash_date,
    try_time_only,
];

// ── Relative-Modifier ───────────────────────────────────────────────────────

/// `[+|-]<int><unit>` tokens, optionally ending with a fixed time-of-day:
/// `"+3d"`, `"-2yr +1mo"`, `"+3d 12:00:00"`.
///
/// Commits as soon as the first token carries a sign, so a malformed
/// modifier is a hard failure rather than a fall-through.
fn try_relative_modifier(
    text: &str,
    anchor: NaiveDateTime,
    _options: &ParseOptions,
) -> Result<Option<NaiveDateTime>> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    match tokens.first() {
        Some(first) if first.starts_with('+') || first.starts_with('-') => {}
        _ => return Ok(None),
    }

    let mut resolved = anchor;
    for (i, token) in tokens.iter().enumerate() {
        if let Some((amount, unit)) = parse_modifier(token)? {
            resolved = calendar::shift(resolved, amount, unit).ok_or_else(|| {
                ParseError::InvalidField(format!("'{token}' shifts the date out of range"))
            })?;
        } else if i + 1 == tokens.len() && TimeOfDay::matches_shape(token) {
            resolved = calendar::at_time(resolved, TimeOfDay::parse(token)?);
        } else {
            return Err(ParseError::InvalidField(format!(
                "unrecognized relative modifier '{token}' \
                 (expected +/- then a number then y/yr/mo/d/h/m/s)"
            )));
        }
    }
    Ok(Some(resolved))
}

/// Split a modifier token into a signed amount and a unit. `Ok(None)` if the
/// token does not start with a sign; `Err` if it does but the number or unit
/// is bad.
fn parse_modifier(token: &str) -> Result<Option<(i64, Unit)>> {
    let (sign, rest) = match token.as_bytes().first() {
        Some(b'+') => (1i64, &token[1..]),
        Some(b'-') => (-1i64, &token[1..]),
        _ => return Ok(None),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return Err(ParseError::InvalidField(format!(
            "expected a number after the sign in '{token}'"
        )));
    }
    let magnitude: i64 = rest[..digits_end]
        .parse()
        .map_err(|_| ParseError::InvalidField(format!("number out of range in '{token}'")))?;
    let unit = Unit::from_suffix(&rest[digits_end..]).ok_or_else(|| {
        ParseError::InvalidField(format!(
            "unknown unit '{}' in '{token}' (expected y/yr/mo/d/h/m/s)",
            &rest[digits_end..]
        ))
    })?;
    Ok(Some((sign * magnitude, unit)))
}

// ── Fixed-Keyword ───────────────────────────────────────────────────────────

/// `now` / `today` / `tomorrow` / `yesterday`, optional `end`, optional
/// trailing time-of-day. `now` returns the anchor verbatim and ignores
/// every suffix; the others resolve to midnight of the shifted date, with
/// `end` meaning 23:59:59 and an explicit time overriding both.
fn try_fixed_keyword(
    text: &str,
    anchor: NaiveDateTime,
    _options: &ParseOptions,
) -> Result<Option<NaiveDateTime>> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let Some(first) = tokens.first() else {
        return Ok(None);
    };

    let day_offset = match first.to_ascii_lowercase().as_str() {
        "now" => return Ok(Some(anchor)),
        "today" => 0,
        "tomorrow" => 1,
        "yesterday" => -1,
        _ => return Ok(None),
    };

    let mut rest = &tokens[1..];
    let end_of_day = matches!(rest.first(), Some(t) if t.eq_ignore_ascii_case("end"));
    if end_of_day {
        rest = &rest[1..];
    }
    let time = match rest {
        [] => None,
        [t] if TimeOfDay::matches_shape(t) => Some(TimeOfDay::parse(t)?),
        _ => return Ok(None),
    };

    let date = anchor
        .date()
        .checked_add_signed(Duration::days(day_offset))
        .ok_or_else(|| {
            ParseError::InvalidField(format!("'{first}' shifts the date out of range"))
        })?;
    let time = time.unwrap_or(if end_of_day {
        TimeOfDay::END_OF_DAY
    } else {
        TimeOfDay::MIDNIGHT
    });
    Ok(Some(calendar::on_date(date, time)))
}

// ── Ctime ───────────────────────────────────────────────────────────────────

/// `[Www] Mmm D H:M:S YYYY`, e.g. `"Wed Jan 28 12:28:13 2015"`. The weekday
/// token must be a real weekday abbreviation but is never cross-checked
/// against the actual day-of-week of the date.
fn try_ctime(
    text: &str,
    _anchor: NaiveDateTime,
    _options: &ParseOptions,
) -> Result<Option<NaiveDateTime>> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let (weekday, rest) = match tokens.len() {
        5 => (Some(tokens[0]), &tokens[1..]),
        4 => (None, &tokens[..]),
        _ => return Ok(None),
    };
    let &[month_tok, day_tok, time_tok, year_tok] = rest else {
        return Ok(None);
    };

    // Shape gate: everything below here is a hard failure, not a fall-through.
    let shape_fits = is_alpha3(month_tok)
        && weekday.map_or(true, is_alpha3)
        && day_tok.len() <= 2
        && is_digits(day_tok)
        && year_tok.len() == 4
        && is_digits(year_tok)
        && time_tok.contains(':')
        && time_tok.bytes().all(|b| b.is_ascii_digit() || b == b':');
    if !shape_fits {
        return Ok(None);
    }

    if let Some(w) = weekday {
        if !is_weekday_abbrev(w) {
            return Err(ParseError::InvalidField(format!("unknown weekday '{w}'")));
        }
    }
    let month = month_from_abbrev(month_tok)
        .ok_or_else(|| ParseError::InvalidField(format!("unknown month '{month_tok}'")))?;
    if time_tok.split(':').count() != 3 {
        return Err(ParseError::InvalidField(format!(
            "ctime expects hours:minutes:seconds, got '{time_tok}'"
        )));
    }
    let time = TimeOfDay::parse(time_tok)?;
    let year: i32 = year_tok
        .parse()
        .map_err(|_| ParseError::InvalidField(format!("year '{year_tok}' out of range")))?;
    let day: u32 = day_tok
        .parse()
        .map_err(|_| ParseError::InvalidField(format!("day '{day_tok}' out of range")))?;
    let date = valid_date(year, month, day)?;
    Ok(Some(calendar::on_date(date, time)))
}

// ── Numeric-Slash-Date ──────────────────────────────────────────────────────

/// `N/N/N` with an optional trailing time-of-day: `"1/8/2015"`,
/// `"1/8/2015 12:28:13"`, `"1/8/15 5:00PM"`. The first two fields are read
/// per [`DateOrder`]; the year is 4-digit, or 2-digit with the century
/// inferred (00–68 → 2000s, 69–99 → 1900s). Time defaults to midnight.
fn try_slash_date(
    text: &str,
    _anchor: NaiveDateTime,
    options: &ParseOptions,
) -> Result<Option<NaiveDateTime>> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.is_empty() || tokens.len() > 2 {
        return Ok(None);
    }
    let fields: Vec<&str> = tokens[0].split('/').collect();
    if fields.len() != 3 || !fields.iter().all(|f| is_digits(f)) {
        return Ok(None);
    }
    let time_tok = match tokens.get(1) {
        None => None,
        Some(t) if TimeOfDay::matches_shape(t) => Some(*t),
        Some(_) => return Ok(None),
    };

    let year = slash_year(fields[2])?;
    let (month_tok, day_tok) = match options.date_order {
        DateOrder::MonthFirst => (fields[0], fields[1]),
        DateOrder::DayFirst => (fields[1], fields[0]),
    };
    let month: u32 = month_tok
        .parse()
        .map_err(|_| ParseError::InvalidField(format!("month '{month_tok}' out of range")))?;
    if !(1..=12).contains(&month) {
        return Err(ParseError::InvalidField(format!(
            "month {month} must be 1-12"
        )));
    }
    let day: u32 = day_tok
        .parse()
        .map_err(|_| ParseError::InvalidField(format!("day '{day_tok}' out of range")))?;
    let date = valid_date(year, month, day)?;
    let time = match time_tok {
        Some(t) => TimeOfDay::parse(t)?,
        None => TimeOfDay::MIDNIGHT,
    };
    Ok(Some(calendar::on_date(date, time)))
}

/// Resolve the slash-date year field, inferring the century for 2-digit
/// years with the strptime `%y` rule.
fn slash_year(tok: &str) -> Result<i32> {
    match tok.len() {
        4 => tok
            .parse()
            .map_err(|_| ParseError::InvalidField(format!("year '{tok}' out of range"))),
        2 => {
            let two: i32 = tok
                .parse()
                .map_err(|_| ParseError::InvalidField(format!("year '{tok}' out of range")))?;
            Ok(if two <= 68 { 2000 + two } else { 1900 + two })
        }
        _ => Err(ParseError::InvalidField(format!(
            "year '{tok}' must be 2 or 4 digits"
        ))),
    }
}

// ── Time-Only ───────────────────────────────────────────────────────────────

/// A bare time-of-day with nothing else: keeps the anchor's calendar date.
fn try_time_only(
    text: &str,
    anchor: NaiveDateTime,
    _options: &ParseOptions,
) -> Result<Option<NaiveDateTime>> {
    if !TimeOfDay::matches_shape(text) {
        return Ok(None);
    }
    let time = TimeOfDay::parse(text)?;
    Ok(Some(calendar::at_time(anchor, time)))
}

// ── Field helpers ───────────────────────────────────────────────────────────

fn is_digits(t: &str) -> bool {
    !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit())
}

fn is_alpha3(t: &str) -> bool {
    t.len() == 3 && t.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_weekday_abbrev(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "mon" | "tue" | "wed" | "thu" | "fri" | "sat" | "sun"
    )
}

fn month_from_abbrev(s: &str) -> Option<u32> {
    match s.to_ascii_lowercase().as_str() {
        "jan" => Some(1),
        "feb" => Some(2),
        "mar" => Some(3),
        "apr" => Some(4),
        "may" => Some(5),
        "jun" => Some(6),
        "jul" => Some(7),
        "aug" => Some(8),
        "sep" => Some(9),
        "oct" => Some(10),
        "nov" => Some(11),
        "dec" => Some(12),
        _ => None,
    }
}

/// Build a date from range-checked fields, rejecting a day the month does
/// not have. The only clamping in the system lives in calendar shifts, never
/// here.
fn valid_date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    let last = calendar::last_day_of_month(year, month)
        .ok_or_else(|| ParseError::InvalidField(format!("year {year} out of range")))?;
    if day == 0 || day > last {
        return Err(ParseError::InvalidField(format!(
            "day {day} is not valid for {year}-{month:02}"
        )));
    }
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| ParseError::InvalidField(format!("year {year} out of range")))
}

// ── Tests ───────────────────────────────────────────────────────────────────
