// Rust guideline compliant 2026-10-12

//! Period formatting for dated portfolio entries.
//!
//! Converts a start boundary and an optional end boundary into a short
//! human-readable label such as `"8 months"`, `"2 years 3 months"` or
//! `"2.5 years"`. Month and year counts come from an average month length of
//! 30.44 days, not from calendar arithmetic.

use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Average month length in days.
pub const DAYS_PER_MONTH: f64 = 30.44;

/// Sentinel stored for entries that have not ended.
pub const PRESENT: &str = "Present";

/// Which side of an interval a boundary sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Interval start; a bare year means January 1.
    Start,
    /// Interval end; a bare year means December 31.
    End,
}

/// A parsed interval boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// A calendar date.
    Date(NaiveDate),
    /// A bare four-digit year.
    Year(i32),
    /// The entry is still ongoing.
    Ongoing,
    /// No value was given.
    Absent,
}

impl Boundary {
    /// Parses a stored boundary value.
    ///
    /// Accepted date forms are `YYYY-MM-DD`, `YYYY/MM/DD`, `YYYY-MM`,
    /// `Month YYYY` (full or abbreviated month name) and RFC 3339 timestamps.
    ///
    /// # Arguments
    ///
    /// * `value` - The raw field value, if any
    ///
    /// # Returns
    ///
    /// The parsed boundary.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDate` if the value is neither empty, the
    /// ongoing sentinel, a year, nor a recognizable date.
    pub fn parse(value: Option<&str>) -> Result<Self> {
        let value = match value.map(str::trim) {
            None | Some("") => return Ok(Self::Absent),
            Some(value) => value,
        };

        if value.eq_ignore_ascii_case(PRESENT) {
            return Ok(Self::Ongoing);
        }

        if value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit()) {
            return value
                .parse()
                .map(Self::Year)
                .map_err(|_| Error::InvalidDate(value.to_string()));
        }

        parse_date(value)
            .map(Self::Date)
            .ok_or_else(|| Error::InvalidDate(value.to_string()))
    }

    /// Returns true when no value was given.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Resolves the boundary to a concrete instant.
    ///
    /// # Arguments
    ///
    /// * `role` - Whether this is the start or the end of the interval
    /// * `now` - The instant used for ongoing and open-ended intervals
    ///
    /// # Returns
    ///
    /// The resolved instant, or `None` for an absent start.
    pub fn resolve(&self, role: Role, now: NaiveDateTime) -> Option<NaiveDateTime> {
        match (self, role) {
            (Self::Absent, Role::Start) => None,
            (Self::Absent, Role::End) | (Self::Ongoing, _) => Some(now),
            (Self::Year(year), Role::Start) => {
                NaiveDate::from_ymd_opt(*year, 1, 1).map(|d| d.and_time(NaiveTime::MIN))
            }
            (Self::Year(year), Role::End) => {
                NaiveDate::from_ymd_opt(*year, 12, 31).map(|d| d.and_time(NaiveTime::MIN))
            }
            (Self::Date(date), _) => Some(date.and_time(NaiveTime::MIN)),
        }
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y/%m/%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("1 {value}"), "%d %B %Y") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
}

/// Elapsed time split into whole years, remaining months and total days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration {
    /// Whole years.
    pub years: u64,
    /// Months left over after whole years (0-11).
    pub months: u64,
    /// Absolute whole-day difference.
    pub days: u64,
}

impl Duration {
    /// Computes the duration between two instants, in either order.
    pub fn between(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        let days = (end - start).num_days().unsigned_abs();
        let total_months = (days as f64 / DAYS_PER_MONTH).floor() as u64;
        Self {
            years: total_months / 12,
            months: total_months % 12,
            days,
        }
    }

    /// Renders the detailed label, e.g. `"2 years 3 months"`.
    pub fn format_detailed(&self) -> String {
        match (self.years, self.months) {
            (0, 0) => plural(self.days, "day"),
            (0, months) => plural(months, "month"),
            (years, 0) => plural(years, "year"),
            (years, 6) => format!("{years}.5 years"),
            (years, months) => format!("{} {}", plural(years, "year"), plural(months, "month")),
        }
    }

    /// Renders the short label, rounding to the nearest half year once the
    /// duration passes a year.
    pub fn format_short(&self) -> String {
        match (self.years, self.months) {
            (0, 0) => plural(self.days, "day"),
            (0, months) => plural(months, "month"),
            (years, 0) => plural(years, "year"),
            (years, 6) => format!("{years}.5 years"),
            (years, months) => {
                let total = years as f64 + months as f64 / 12.0;
                let rounded = (total * 2.0).round() / 2.0;
                if rounded == 1.0 {
                    "1 year".to_string()
                } else {
                    format!("{rounded} years")
                }
            }
        }
    }
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// Period formatter pinned to a reference instant.
#[derive(Debug, Clone, Copy)]
pub struct PeriodFormatter {
    now: NaiveDateTime,
}

impl Default for PeriodFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl PeriodFormatter {
    /// Creates a formatter that treats the current UTC time as "now".
    pub fn new() -> Self {
        Self::at(Utc::now().naive_utc())
    }

    /// Creates a formatter with a fixed "now".
    pub fn at(now: NaiveDateTime) -> Self {
        Self { now }
    }

    /// Computes the duration between two boundary values.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when `start` is absent or empty; `end` is not examined in
    /// that case.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDate` if either value cannot be parsed.
    pub fn duration(&self, start: Option<&str>, end: Option<&str>) -> Result<Option<Duration>> {
        let start = Boundary::parse(start)?;
        let Some(start) = start.resolve(Role::Start, self.now) else {
            return Ok(None);
        };
        let end_raw = end;
        let end = Boundary::parse(end)?
            .resolve(Role::End, self.now)
            .ok_or_else(|| Error::InvalidDate(end_raw.unwrap_or_default().to_string()))?;
        Ok(Some(Duration::between(start, end)))
    }

    /// Formats the detailed period label.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDate` if either value cannot be parsed.
    pub fn detailed(&self, start: Option<&str>, end: Option<&str>) -> Result<String> {
        Ok(self
            .duration(start, end)?
            .map(|d| d.format_detailed())
            .unwrap_or_default())
    }

    /// Formats the short, half-year-rounded period label.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDate` if either value cannot be parsed.
    pub fn short(&self, start: Option<&str>, end: Option<&str>) -> Result<String> {
        Ok(self
            .duration(start, end)?
            .map(|d| d.format_short())
            .unwrap_or_default())
    }
}

/// Formats the detailed period between `start` and `end` (or now).
///
/// Returns an empty string when `start` is absent. Malformed dates are
/// logged and also produce an empty string.
pub fn calculate_period(start: Option<&str>, end: Option<&str>) -> String {
    try_calculate_period(start, end).unwrap_or_else(|err| {
        tracing::warn!(?start, ?end, "Cannot compute period: {}", err);
        String::new()
    })
}

/// Formats the short period between `start` and `end` (or now).
///
/// Returns an empty string when `start` is absent. Malformed dates are
/// logged and also produce an empty string.
pub fn calculate_short_period(start: Option<&str>, end: Option<&str>) -> String {
    try_calculate_short_period(start, end).unwrap_or_else(|err| {
        tracing::warn!(?start, ?end, "Cannot compute period: {}", err);
        String::new()
    })
}

/// Fallible variant of [`calculate_period`].
///
/// # Errors
///
/// Returns `Error::InvalidDate` if either value cannot be parsed.
pub fn try_calculate_period(start: Option<&str>, end: Option<&str>) -> Result<String> {
    if is_blank(start) {
        return Ok(String::new());
    }
    PeriodFormatter::new().detailed(start, end)
}

/// Fallible variant of [`calculate_short_period`].
///
/// # Errors
///
/// Returns `Error::InvalidDate` if either value cannot be parsed.
pub fn try_calculate_short_period(start: Option<&str>, end: Option<&str>) -> Result<String> {
    if is_blank(start) {
        return Ok(String::new());
    }
    PeriodFormatter::new().short(start, end)
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_time(NaiveTime::MIN)
    }

    #[test]
    fn test_year_boundaries_depend_on_role() {
        let now = at(2030, 1, 1);
        let year = Boundary::parse(Some("2020")).unwrap();
        assert_eq!(year.resolve(Role::Start, now), Some(at(2020, 1, 1)));
        assert_eq!(year.resolve(Role::End, now), Some(at(2020, 12, 31)));
    }

    #[test]
    fn test_absent_start_does_not_resolve() {
        assert_eq!(Boundary::Absent.resolve(Role::Start, at(2030, 1, 1)), None);
        assert_eq!(
            Boundary::Absent.resolve(Role::End, at(2030, 1, 1)),
            Some(at(2030, 1, 1))
        );
    }

    #[test]
    fn test_month_input_parses_to_first_of_month() {
        assert_eq!(
            Boundary::parse(Some("2021-03")).unwrap(),
            Boundary::Date(NaiveDate::from_ymd_opt(2021, 3, 1).unwrap())
        );
    }

    #[test]
    fn test_month_name_parses() {
        assert_eq!(
            Boundary::parse(Some("Sep 2019")).unwrap(),
            Boundary::Date(NaiveDate::from_ymd_opt(2019, 9, 1).unwrap())
        );
    }

    #[test]
    fn test_duration_is_order_independent() {
        let a = Duration::between(at(2020, 1, 1), at(2021, 6, 1));
        let b = Duration::between(at(2021, 6, 1), at(2020, 1, 1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_days() {
        let d = Duration::between(at(2020, 1, 1), at(2020, 1, 1));
        assert_eq!(d.format_detailed(), "0 days");
        assert_eq!(d.format_short(), "0 days");
    }
}
