use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Named zone the clock reports in.
pub const CLOCK_ZONE: &str = "Asia/Jakarta";

// Asia/Jakarta has no daylight saving, so a fixed offset is exact
const CLOCK_UTC_OFFSET_SECS: i32 = 7 * 3600;

fn clock_offset() -> FixedOffset {
    FixedOffset::east_opt(CLOCK_UTC_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// `HH:MM:SS`, 24-hour clock.
pub fn format_time(instant: DateTime<Utc>) -> String {
    instant
        .with_timezone(&clock_offset())
        .format("%H:%M:%S")
        .to_string()
}

pub fn current_time() -> String {
    format_time(Utc::now())
}
