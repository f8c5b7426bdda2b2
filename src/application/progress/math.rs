//! Progress as a fixed point percentage

use super::datetime::DateTime;

/// 100.0000% in hundredths of a thousandth, the value shown once finished
pub const COMPLETE: u32 = 1_000_000;

/// Percentage of the way from `start` to `end` that `now` lies, times 10000.
///
/// Truncates rather than rounds so the display never claims progress that
/// hasn't happened yet.
pub fn percent_x10000(start: &DateTime, end: &DateTime, now: &DateTime) -> u32 {
    let start = start.to_absolute_minutes();
    let end = end.to_absolute_minutes();
    let now = now.to_absolute_minutes();

    if now <= start {
        0
    } else if now >= end {
        COMPLETE
    } else {
        let duration = end - start;
        if duration > 0 {
            ((now - start) * i64::from(COMPLETE) / duration) as u32
        } else {
            // unreachable while start < now < end, guards the division
            COMPLETE
        }
    }
}
