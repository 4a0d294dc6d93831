//! Localization of UTC event times into zoned clock strings.
//!
//! The solver works purely in UTC; everything zone-related lives here.
//! Conversion uses the named zone's historical offset and DST rules for
//! the exact instant, so a table spanning a DST transition comes out
//! correct on both sides of the switch.

use crate::error::check_zone;
use crate::types::UtcTimeOfDay;
use crate::Result;
use chrono::{DateTime, NaiveDate, TimeZone};
use chrono_tz::Tz;

/// Renders a UTC time of day as a local 12-hour clock string.
///
/// Minutes are truncated from the fractional hours (seconds are below the
/// equation's resolution); the result has no leading zero on the hour and
/// an uppercase AM/PM suffix, like `"6:42 AM"`. The conversion can cross
/// a calendar-day boundary; the string carries no date, so use
/// [`local_datetime`] when the local date matters.
///
/// # Errors
/// Returns `UnknownTimeZone` if `zone_id` is not an IANA identifier.
///
/// # Example
/// ```rust
/// use chrono::NaiveDate;
/// use suntable::{time, UtcTimeOfDay};
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
/// let sunrise = UtcTimeOfDay::from_hours(11.173185);
/// let local = time::localize(date, sunrise, "America/New_York").unwrap();
/// assert_eq!(local, "7:10 AM");
/// ```
pub fn localize(date: NaiveDate, time: UtcTimeOfDay, zone_id: &str) -> Result<String> {
    Ok(localize_in(date, time, check_zone(zone_id)?))
}

/// Renders a UTC time of day in an already-resolved zone.
///
/// Identical to [`localize`] with the resolution step done; with a valid
/// [`Tz`] in hand there is nothing left to fail.
#[must_use]
pub fn localize_in(date: NaiveDate, time: UtcTimeOfDay, zone: Tz) -> String {
    local_datetime(date, time, zone)
        .format("%-I:%M %p")
        .to_string()
}

/// Converts a UTC date and time of day into the zoned instant.
///
/// This is the timestamp behind [`localize`]; callers that need the local
/// calendar date, not just the clock string, read it from here.
///
/// # Example
/// ```rust
/// use chrono::{Datelike, NaiveDate};
/// use chrono_tz::Pacific::Auckland;
/// use suntable::{time, UtcTimeOfDay};
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let sunrise = UtcTimeOfDay::from_hours(17.295572);
/// let local = time::local_datetime(date, sunrise, Auckland);
/// assert_eq!(local.day(), 16); // already the next civil day in New Zealand
/// ```
#[must_use]
pub fn local_datetime(date: NaiveDate, time: UtcTimeOfDay, zone: Tz) -> DateTime<Tz> {
    let (hour, minute) = time.hour_minute();
    let utc = date
        .and_hms_opt(hour, minute, 0)
        .expect("normalized hour and minute are always in range");
    zone.from_utc_datetime(&utc)
}
