//! Rupee and date formatting (no Dioxus required).

use festbook_frontend::format::{format_event_date, format_inr};
use festbook_cart_core::Decimal;
use pretty_assertions::assert_eq;
use std::str::FromStr;

fn d(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[test]
fn small_amounts_are_not_grouped() {
    assert_eq!(format_inr(d("0")), "₹0");
    assert_eq!(format_inr(d("999")), "₹999");
}

#[test]
fn indian_grouping_after_the_first_thousand() {
    assert_eq!(format_inr(d("1000")), "₹1,000");
    assert_eq!(format_inr(d("100000")), "₹1,00,000");
    assert_eq!(format_inr(d("12345678")), "₹1,23,45,678");
}

#[test]
fn fractions_keep_at_most_two_digits_without_trailing_zeros() {
    assert_eq!(format_inr(d("1234.50")), "₹1,234.5");
    assert_eq!(format_inr(d("300.00")), "₹300");
    assert_eq!(format_inr(d("49.999")), "₹50");
    assert_eq!(format_inr(d("0.126")), "₹0.13");
}

#[test]
fn negative_amounts_lead_with_minus() {
    assert_eq!(format_inr(d("-2500")), "-₹2,500");
}

#[test]
fn event_dates_render_like_the_listing() {
    assert_eq!(format_event_date("2025-03-14T18:30:00"), "Mar 14, 2025 06:30 PM");
    assert_eq!(format_event_date("2025-03-14"), "Mar 14, 2025");
    assert_eq!(format_event_date("next friday"), "next friday");
}
