//! Date predicates
//!
//! Format checks parse strictly: the whole input must match the expected
//! format. Ordering checks (`is_date_before`, `is_date_after`) parse both the
//! value and the bound leniently and compare absolute instants, so values
//! written with different UTC offsets compare correctly.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc, Weekday};
use serde_json::Value;

use super::combinators::Predicate;
use super::result::PredicateResult;

/// How [`is_date_with_format`] parses its input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DateFormat {
    /// ISO-8601 calendar, week or ordinal dates with an optional time and UTC
    /// offset. See [`parse_iso8601`].
    #[default]
    Iso8601,
    /// A chrono `strftime` pattern, e.g. `"%d/%m/%Y"`.
    Custom(String),
}

impl From<&str> for DateFormat {
    fn from(pattern: &str) -> Self {
        DateFormat::Custom(pattern.to_string())
    }
}

impl From<String> for DateFormat {
    fn from(pattern: String) -> Self {
        DateFormat::Custom(pattern)
    }
}

impl DateFormat {
    /// Parse `input` strictly against this format.
    ///
    /// Inputs without an offset are read as UTC.
    pub fn parse(&self, input: &str) -> Option<DateTime<Utc>> {
        match self {
            DateFormat::Iso8601 => parse_iso8601(input),
            DateFormat::Custom(pattern) => parse_with_pattern(input, pattern),
        }
    }
}

/// Predicate that checks a value is a date string in a given format.
#[derive(Clone, Debug)]
pub struct IsDate {
    format: DateFormat,
    message: String,
}

impl IsDate {
    /// Replace the default message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl Predicate for IsDate {
    #[inline]
    fn evaluate(&self, value: &Value) -> PredicateResult {
        let ok = value
            .as_str()
            .and_then(|s| self.format.parse(s))
            .is_some();
        PredicateResult::from_bool(ok, self.message.as_str())
    }
}

/// Create a predicate that checks a value is an ISO-8601 date string.
///
/// Default message: `"Not a valid date"`.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
/// use serde_json::json;
///
/// assert!(is_date().evaluate(&json!("2015-10-26T14:59:35.546Z")).is_success());
/// assert!(!is_date().evaluate(&json!("2015-10T14:59:35.546Z")).is_success());
/// ```
pub fn is_date() -> IsDate {
    is_date_with_format(DateFormat::Iso8601)
}

/// Create a predicate that checks a value is a date string in `format`.
///
/// Default message: `"Not a valid date"`.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
/// use serde_json::json;
///
/// let p = is_date_with_format("%d/%m/%Y");
/// assert!(p.evaluate(&json!("26/10/2015")).is_success());
/// assert!(!p.evaluate(&json!("2015-10-26")).is_success());
/// ```
pub fn is_date_with_format(format: impl Into<DateFormat>) -> IsDate {
    IsDate {
        format: format.into(),
        message: "Not a valid date".to_string(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Before,
    After,
}

/// Predicate that checks a date is strictly before or after a bound.
#[derive(Clone, Debug)]
pub struct DateBound {
    bound: Option<DateTime<Utc>>,
    direction: Direction,
    message: String,
}

impl DateBound {
    fn new(bound: &str, direction: Direction) -> Self {
        let message = match direction {
            Direction::Before => format!("Date is not prior to {bound}"),
            Direction::After => format!("Date is not after {bound}"),
        };
        Self {
            bound: parse_lenient(bound),
            direction,
            message,
        }
    }

    /// Replace the default message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// The bounding instant, or `None` if the bound could not be parsed.
    pub fn bound(&self) -> Option<DateTime<Utc>> {
        self.bound
    }
}

impl Predicate for DateBound {
    fn evaluate(&self, value: &Value) -> PredicateResult {
        let ok = match (date_from_value(value), self.bound) {
            (Some(date), Some(bound)) => match self.direction {
                Direction::Before => date < bound,
                Direction::After => date > bound,
            },
            _ => false,
        };
        PredicateResult::from_bool(ok, self.message.as_str())
    }
}

/// Create a predicate that checks a date is strictly earlier than `bound`.
///
/// Equal instants fail, as do values or bounds that cannot be parsed. An
/// unparsable bound is not rejected here; every evaluation simply fails.
///
/// Default message: `"Date is not prior to {bound}"`.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
/// use serde_json::json;
///
/// let p = is_date_before("2015-10-25T14:59:35.546Z");
/// // 13:59 at +01:00 is 12:59 UTC
/// assert!(p.evaluate(&json!("2015-10-25T13:59:35.546+01:00")).is_success());
/// assert!(!p.evaluate(&json!("2015-10-25T14:59:35.546Z")).is_success());
/// ```
pub fn is_date_before(bound: impl AsRef<str>) -> DateBound {
    DateBound::new(bound.as_ref(), Direction::Before)
}

/// Create a predicate that checks a date is strictly later than `bound`.
///
/// Default message: `"Date is not after {bound}"`.
pub fn is_date_after(bound: impl AsRef<str>) -> DateBound {
    DateBound::new(bound.as_ref(), Direction::After)
}

fn date_from_value(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_lenient(s),
        // epoch milliseconds
        Value::Number(n) => {
            let millis = match n.as_i64() {
                Some(ms) => ms,
                None => n.as_f64().filter(|f| f.is_finite())? as i64,
            };
            DateTime::<Utc>::from_timestamp_millis(millis)
        }
        _ => None,
    }
}

/// Parse a date the forgiving way: ISO-8601 first, then RFC 3339, RFC 2822
/// and slash-separated dates.
pub fn parse_lenient(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    parse_iso8601(input)
        .or_else(|| DateTime::parse_from_rfc3339(input).ok().map(|d| d.to_utc()))
        .or_else(|| DateTime::parse_from_rfc2822(input).ok().map(|d| d.to_utc()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(input, "%Y/%m/%d %H:%M:%S")
                .ok()
                .map(|n| n.and_utc())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y/%m/%d")
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN).and_utc())
        })
}

fn parse_with_pattern(input: &str, pattern: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_str(input, pattern) {
        return Some(date.to_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, pattern) {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(input, pattern)
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
}

/// Parse an ISO-8601 date, optionally with time and offset.
///
/// Accepted dates are calendar (`YYYY-MM-DD`, `YYYYMMDD`), week
/// (`YYYY-Www-D`, `YYYY-Www`, `YYYYWwwD`, `YYYYWww`) and ordinal (`YYYY-DDD`,
/// `YYYYDDD`) forms. `YYYY` and `YYYY-MM` are accepted on their own but not
/// before a time.
///
/// A time may follow after `T` or a space, in extended (`HH`, `HH:MM`,
/// `HH:MM:SS`) or basic (`HHMM`, `HHMMSS`) form. Seconds may carry a fraction
/// after `.` or `,`; digits past nanoseconds are dropped. The time may end in
/// `Z`, `±HH:MM`, `±HHMM` or `±HH`.
pub fn parse_iso8601(input: &str) -> Option<DateTime<Utc>> {
    if !input.is_ascii() {
        return None;
    }
    let (date_part, time_part) = match input.find(['T', ' ']) {
        Some(i) => (&input[..i], Some(&input[i + 1..])),
        None => (input, None),
    };

    let Some(time_part) = time_part else {
        let date = parse_partial_date(date_part)?;
        return Some(date.and_time(NaiveTime::MIN).and_utc());
    };

    let date = parse_full_date(date_part)?;
    let (clock, offset) = split_offset(time_part)?;
    let naive = date.and_time(parse_clock(clock)?);
    match offset {
        Some(offset) => naive
            .and_local_timezone(offset)
            .single()
            .map(|d| d.to_utc()),
        None => Some(naive.and_utc()),
    }
}

fn number(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn parse_full_date(s: &str) -> Option<NaiveDate> {
    let year = number(s.get(..4)?)? as i32;
    let rest = &s[4..];

    if let Some(week) = rest.strip_prefix("-W") {
        return parse_week_date(year, week, true);
    }
    if let Some(week) = rest.strip_prefix('W') {
        return parse_week_date(year, week, false);
    }

    match (rest.len(), rest.strip_prefix('-')) {
        (6, Some(md)) if &md[2..3] == "-" => {
            NaiveDate::from_ymd_opt(year, number(&md[..2])?, number(&md[3..])?)
        }
        (4, Some(ordinal)) => NaiveDate::from_yo_opt(year, number(ordinal)?),
        (4, None) => NaiveDate::from_ymd_opt(year, number(&rest[..2])?, number(&rest[2..])?),
        (3, None) => NaiveDate::from_yo_opt(year, number(rest)?),
        _ => None,
    }
}

fn parse_week_date(year: i32, s: &str, extended: bool) -> Option<NaiveDate> {
    let (week, day) = match (s.len(), extended) {
        (2, _) => (s, "1"),
        (4, true) if &s[2..3] == "-" => (&s[..2], &s[3..]),
        (3, false) => (&s[..2], &s[2..]),
        _ => return None,
    };
    // ISO weekdays run 1 (Monday) to 7 (Sunday)
    let day = u8::try_from(number(day)?).ok()?.checked_sub(1)?;
    NaiveDate::from_isoywd_opt(year, number(week)?, Weekday::try_from(day).ok()?)
}

fn parse_partial_date(s: &str) -> Option<NaiveDate> {
    match s.len() {
        4 => NaiveDate::from_ymd_opt(number(s)? as i32, 1, 1),
        7 if &s[4..5] == "-" && &s[5..6] != "W" => {
            NaiveDate::from_ymd_opt(number(&s[..4])? as i32, number(&s[5..])?, 1)
        }
        _ => parse_full_date(s),
    }
}

fn split_offset(s: &str) -> Option<(&str, Option<FixedOffset>)> {
    if let Some(clock) = s.strip_suffix('Z') {
        return Some((clock, FixedOffset::east_opt(0)));
    }
    match s.rfind(['+', '-']) {
        Some(i) => Some((&s[..i], Some(parse_offset(&s[i..])?))),
        None => Some((s, None)),
    }
}

fn parse_offset(s: &str) -> Option<FixedOffset> {
    let sign = if s.starts_with('-') { -1 } else { 1 };
    let body = &s[1..];
    let (hours, minutes) = match body.len() {
        2 => (body, "00"),
        4 => (&body[..2], &body[2..]),
        5 if &body[2..3] == ":" => (&body[..2], &body[3..]),
        _ => return None,
    };
    let (hours, minutes) = (number(hours)?, number(minutes)?);
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60) as i32)
}

fn parse_clock(s: &str) -> Option<NaiveTime> {
    let (hms, fraction) = match s.split_once(['.', ',']) {
        Some((hms, fraction)) => (hms, Some(fraction)),
        None => (s, None),
    };

    let parts: Vec<&str> = if hms.contains(':') {
        hms.split(':').collect()
    } else {
        (0..hms.len())
            .step_by(2)
            .map(|i| hms.get(i..i + 2))
            .collect::<Option<_>>()?
    };
    if parts.is_empty() || parts.len() > 3 || parts.iter().any(|p| p.len() != 2) {
        return None;
    }
    // a fraction only makes sense after seconds
    if fraction.is_some() && parts.len() != 3 {
        return None;
    }

    let hour = number(parts[0])?;
    let minute = parts.get(1).map_or(Some(0), |p| number(p))?;
    let second = parts.get(2).map_or(Some(0), |p| number(p))?;
    let nanos = match fraction {
        Some(f) => parse_nanos(f)?,
        None => 0,
    };

    NaiveTime::from_hms_nano_opt(hour, minute, second, nanos)
}

fn parse_nanos(fraction: &str) -> Option<u32> {
    if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let digits = &fraction[..fraction.len().min(9)];
    Some(number(digits)? * 10u32.pow(9 - digits.len() as u32))
}
