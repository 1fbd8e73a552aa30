use chrono::{NaiveDate, NaiveTime};
use saleswindow::utils::formatting::{format_currency, format_date, format_time, pad_right};

#[test]
fn currency_has_two_decimals_and_code() {
    assert_eq!(format_currency(100.0, "AED"), "AED 100.00");
    assert_eq!(format_currency(99.99, "AED"), "AED 99.99");
    assert_eq!(format_currency(0.0, "AED"), "AED 0.00");
}

#[test]
fn currency_groups_thousands() {
    assert_eq!(format_currency(1_000_000.0, "AED"), "AED 1,000,000.00");
    assert_eq!(format_currency(1250.5, "AED"), "AED 1,250.50");
}

#[test]
fn currency_keeps_sign_out_of_grouping() {
    assert_eq!(format_currency(-1250.5, "AED"), "AED -1,250.50");
}

#[test]
fn date_and_time_follow_config_patterns() {
    let d = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
    assert_eq!(format_date(d, "%a, %d %b %Y"), "Tue, 25 Aug 2026");

    let t = NaiveTime::from_hms_opt(15, 30, 0).unwrap();
    assert_eq!(format_time(t, "%H:%M"), "15:30");
    assert_eq!(format_time(t, "%I:%M %p"), "03:30 PM");
}

#[test]
fn pad_right_fills_to_width() {
    assert_eq!(pad_right("3pm", 6), "3pm   ");
}
