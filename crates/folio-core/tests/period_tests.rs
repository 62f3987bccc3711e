// Rust guideline compliant 2026-10-13

//! Unit tests for period formatting.
//!
//! Expected labels follow the 30.44-day month approximation, not calendar
//! months, so a couple of fixtures land one month short of the calendar answer.

use chrono::{NaiveDate, NaiveDateTime};
use folio_core::period::{calculate_period, calculate_short_period, Boundary, PeriodFormatter};
use folio_core::Error;

fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn detailed(start: &str, end: Option<&str>) -> String {
    PeriodFormatter::at(fixed_now())
        .detailed(Some(start), end)
        .expect("valid boundaries")
}

fn short(start: &str, end: Option<&str>) -> String {
    PeriodFormatter::at(fixed_now())
        .short(Some(start), end)
        .expect("valid boundaries")
}

#[test]
fn test_bare_years_span_jan_first_to_dec_thirty_first() {
    // 730 days -> 23 average months -> 1 year 11 months.
    assert_eq!(detailed("2020", Some("2021")), "1 year 11 months");
    assert_eq!(short("2020", Some("2021")), "2 years");
}

#[test]
fn test_bare_year_end_matches_explicit_date() {
    assert_eq!(
        detailed("2019-03-01", Some("2021")),
        detailed("2019-03-01", Some("2021-12-31"))
    );
}

#[test]
fn test_whole_years() {
    assert_eq!(detailed("2019-01-01", Some("2021-01-05")), "2 years");
    assert_eq!(short("2019-01-01", Some("2021-01-05")), "2 years");
}

#[test]
fn test_half_year_phrasing_in_both_styles() {
    assert_eq!(detailed("2020-01-01", Some("2021-07-15")), "1.5 years");
    assert_eq!(short("2020-01-01", Some("2021-07-15")), "1.5 years");
}

#[test]
fn test_quarter_year_diverges_between_styles() {
    let long = detailed("2020-01-01", Some("2021-04-15"));
    let brief = short("2020-01-01", Some("2021-04-15"));
    assert_eq!(long, "1 year 3 months");
    assert_eq!(brief, "1.5 years");
    assert_ne!(long, brief);
}

#[test]
fn test_compound_label_pluralizes_each_part() {
    assert_eq!(detailed("2020-01-01", Some("2021-02-04")), "1 year 1 month");
    assert_eq!(detailed("2020-01-01", Some("2022-03-11")), "2 years 2 months");
}

#[test]
fn test_short_label_rounds_to_half_years() {
    assert_eq!(short("2020-01-01", Some("2021-02-04")), "1 year");
    assert_eq!(short("2020-01-01", Some("2022-03-11")), "2 years");
    assert_eq!(short("2020-01-01", Some("2022-05-10")), "2.5 years");
    assert_eq!(detailed("2020-01-01", Some("2022-05-10")), "2 years 4 months");
}

#[test]
fn test_months_only() {
    assert_eq!(detailed("2024-01-01", Some("2024-02-01")), "1 month");
    assert_eq!(detailed("2024-01-01", Some("2024-04-01")), "2 months");
    assert_eq!(short("2024-01-01", Some("2024-04-01")), "2 months");
}

#[test]
fn test_days_only() {
    assert_eq!(detailed("2024-03-01", Some("2024-03-02")), "1 day");
    assert_eq!(detailed("2024-03-01", Some("2024-03-20")), "19 days");
    assert_eq!(detailed("2024-03-01", Some("2024-03-01")), "0 days");
}

#[test]
fn test_ongoing_end_matches_absent_end() {
    let present = detailed("2026-01-19", Some("Present"));
    let absent = detailed("2026-01-19", None);
    let blank = detailed("2026-01-19", Some(""));
    assert_eq!(present, "8 months");
    assert_eq!(present, absent);
    assert_eq!(present, blank);
    assert_eq!(detailed("2026-01-19", Some("present")), present);
}

#[test]
fn test_argument_order_does_not_matter() {
    assert_eq!(
        detailed("2021-04-15", Some("2020-01-01")),
        detailed("2020-01-01", Some("2021-04-15"))
    );
}

#[test]
fn test_month_inputs_and_names() {
    assert_eq!(
        detailed("2020-01", Some("2021-07")),
        detailed("January 2020", Some("Jul 2021"))
    );
}

#[test]
fn test_absent_start_short_circuits() {
    assert_eq!(calculate_period(None, Some("2021")), "");
    assert_eq!(calculate_short_period(Some(""), None), "");
    // The end value is never parsed when start is absent.
    assert_eq!(calculate_period(None, Some("not a date")), "");
    let formatter = PeriodFormatter::at(fixed_now());
    assert_eq!(formatter.detailed(None, Some("garbage")).unwrap(), "");
}

#[test]
fn test_invalid_dates_are_reported() {
    let formatter = PeriodFormatter::at(fixed_now());
    assert!(matches!(
        formatter.detailed(Some("someday"), None),
        Err(Error::InvalidDate(_))
    ));
    assert!(matches!(
        formatter.short(Some("2020-01-01"), Some("2021-13-45")),
        Err(Error::InvalidDate(_))
    ));
}

#[test]
fn test_invalid_dates_render_empty() {
    assert_eq!(calculate_period(Some("someday"), None), "");
    assert_eq!(calculate_short_period(Some("2020"), Some("later")), "");
}

#[test]
fn test_present_uses_current_time() {
    let label = calculate_period(Some("2000"), Some("Present"));
    assert!(label.ends_with("years") || label.contains("years "));
}

#[test]
fn test_boundary_parse_forms() {
    let expected = Boundary::Date(NaiveDate::from_ymd_opt(2022, 5, 10).unwrap());
    assert_eq!(Boundary::parse(Some("2022-05-10")).unwrap(), expected);
    assert_eq!(Boundary::parse(Some("2022/05/10")).unwrap(), expected);
    assert_eq!(Boundary::parse(Some("2022-05-10T08:30:00Z")).unwrap(), expected);
    assert_eq!(Boundary::parse(Some("  2022 ")).unwrap(), Boundary::Year(2022));
    assert_eq!(Boundary::parse(Some("PRESENT")).unwrap(), Boundary::Ongoing);
    assert_eq!(Boundary::parse(None).unwrap(), Boundary::Absent);
    assert!(Boundary::parse(Some("20x2")).is_err());
}
