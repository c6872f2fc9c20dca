#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("rent", 10), "rent");
}

#[test]
fn test_truncate_exact_length() {
    assert_eq!(truncate("rent", 4), "rent");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("weekly groceries", 7), "weekly…");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("rent", 0), "");
}

#[test]
fn test_truncate_multibyte() {
    assert_eq!(truncate("₦₦₦₦₦", 3), "₦₦…");
    assert_eq!(truncate("café résumé", 5), "café…");
}

#[test]
fn test_truncate_one_char() {
    assert_eq!(truncate("ab", 1), "…");
    assert_eq!(truncate("a", 1), "a");
}

// ── cell ──────────────────────────────────────────────────────

#[test]
fn test_cell_pads() {
    assert_eq!(cell("Food", 8), "Food    ");
}

#[test]
fn test_cell_truncates() {
    assert_eq!(cell("Entertainment", 6), "Enter…");
}

#[test]
fn test_cell_pads_multibyte_by_chars() {
    assert_eq!(cell("₦", 3), "₦  ");
}

// ── format_amount ─────────────────────────────────────────────

#[test]
fn test_format_amount_basic() {
    assert_eq!(format_amount(dec!(1234.56)), "₦1,234.56");
}

#[test]
fn test_format_amount_zero() {
    assert_eq!(format_amount(dec!(0)), "₦0.00");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-42.50)), "-₦42.50");
}

#[test]
fn test_format_amount_millions() {
    assert_eq!(format_amount(dec!(10000000)), "₦10,000,000.00");
}

#[test]
fn test_format_amount_pads_decimals() {
    assert_eq!(format_amount(dec!(1.5)), "₦1.50");
    assert_eq!(format_amount(dec!(5)), "₦5.00");
}

#[test]
fn test_format_amount_group_boundaries() {
    assert_eq!(format_amount(dec!(999)), "₦999.00");
    assert_eq!(format_amount(dec!(100000)), "₦100,000.00");
    assert_eq!(format_amount(dec!(-1000.005)), "-₦1,000.00");
}
