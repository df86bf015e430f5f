//! Conversion of server timestamps from China Standard Time to UTC.
//!
//! The push API stamps messages in CST (UTC+8) epoch milliseconds. Values at
//! or before 2000-01-01T00:00:00 CST are treated as "unset" and map to `0`.

/// CST is a fixed UTC+8 offset with no daylight saving.
const CST_OFFSET_MILLIS: i64 = 8 * 60 * 60 * 1000;

/// 2000-01-01T00:00:00 CST in milliseconds.
const MIN_VALID_MILLIS: i64 = 946_656_000_000;

/// Converts CST epoch milliseconds to UTC epoch milliseconds.
///
/// Anything past the threshold is larger than the offset, so the
/// subtraction cannot overflow.
#[must_use]
pub fn convert_cst_millis_to_utc(millis: i64) -> i64 {
    if millis > MIN_VALID_MILLIS {
        millis - CST_OFFSET_MILLIS
    } else {
        0
    }
}
