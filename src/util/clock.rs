//! Dashboard wall clock: timestamp formatting and the refresh period.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Refresh period for the header clock. Precision is cosmetic; the display
/// only carries minutes.
pub const TICK_PERIOD_MS: u32 = 15_000;

/// Format one timestamp as `YYYY-MM-DD HH:MM`.
pub fn format_timestamp(year: u32, month: u32, day: u32, hour: u32, minute: u32) -> String {
    format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}")
}

/// Current local time, formatted for the header.
#[cfg(feature = "csr")]
pub fn now_formatted() -> String {
    let now = js_sys::Date::new_0();
    format_timestamp(
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date(),
        now.get_hours(),
        now.get_minutes(),
    )
}
