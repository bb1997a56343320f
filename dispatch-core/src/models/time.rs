#[cfg(test)]
#[path = "../../tests/unit/models/time_test.rs"]
mod time_test;

use crate::models::Timestamp;

/// The last minute of the day, used as a deadline for shipments without a specific one.
pub const END_OF_DAY: Timestamp = 1439.;

/// Formats minutes since the start of the day as `H:MM AM/PM`. Fractions of a minute are truncated
/// and values outside of a day wrap around.
pub fn format_time(minutes: Timestamp) -> String {
    let total = (minutes.max(0.).floor() as u64) % (24 * 60);
    let (hours, minutes) = (total / 60, total % 60);

    let suffix = if hours < 12 { "AM" } else { "PM" };
    let hours = match hours % 12 {
        0 => 12,
        hours => hours,
    };

    format!("{hours}:{minutes:02} {suffix}")
}
