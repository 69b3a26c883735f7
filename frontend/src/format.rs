//! Display formatting for prices and event dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use festbook_cart_core::Decimal;

pub const CURRENCY_SYMBOL: &str = "₹";

/// Indian-style rupee amount: `₹1,00,000`, `₹1,234.5`. At most two decimals, no trailing zeros.
pub fn format_inr(amount: Decimal) -> String {
    let rounded = amount.round_dp(2).normalize();
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(CURRENCY_SYMBOL);
    out.push_str(&group_indian(int_part));
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}

/// Last three digits, then groups of two: 12345678 -> 1,23,45,678.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (a, b) = rest.split_at(rest.len() - 2);
        groups.push(b);
        rest = a;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// `Mar 14, 2025` (plus `06:00 PM` when a time is present). Unparseable input is returned as is.
pub fn format_event_date(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%b %d, %Y %I:%M %p").to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.format("%b %d, %Y %I:%M %p").to_string();
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.format("%b %d, %Y").to_string();
    }
    raw.to_string()
}
