//! Formatting utilities for CLI outputs: currency amounts, dates, times.

use chrono::{NaiveDate, NaiveTime};

/// Format a monetary amount with thousands separators and two decimals,
/// prefixed with the currency code. Es: "AED 1,250.00".
pub fn format_currency(amount: f64, currency: &str) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let units = cents / 100;
    let frac = cents % 100;

    let digits = units.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{} {}{}.{:02}", currency, sign, grouped, frac)
}

/// Format a date for display. `fmt` is a strftime pattern from the config
/// (default "%a, %d %b %Y" → "Tue, 25 Aug 2026").
pub fn format_date(date: NaiveDate, fmt: &str) -> String {
    date.format(fmt).to_string()
}

/// Format a clock time for display. `fmt` is a strftime pattern from the
/// config (default "%H:%M").
pub fn format_time(time: NaiveTime, fmt: &str) -> String {
    time.format(fmt).to_string()
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}
