use super::*;

#[test]
fn single_digit_fields_are_zero_padded() {
    assert_eq!(format_timestamp(2026, 1, 5, 9, 3), "2026-01-05 09:03");
}

#[test]
fn double_digit_fields_pass_through() {
    assert_eq!(format_timestamp(2025, 12, 31, 23, 59), "2025-12-31 23:59");
}

#[test]
fn tick_period_is_fifteen_seconds() {
    assert_eq!(TICK_PERIOD_MS, 15_000);
}
