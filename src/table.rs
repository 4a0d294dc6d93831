//! Batch construction of sun event tables.
//!
//! A table is the cartesian product of locations and dates, one record per
//! pair, every cell computed through the same solver and localizer path.
//! Order is part of the contract: locations in input order, dates ascending
//! within each location, no reordering, no filtering, no deduplication.

use crate::time::localize_in;
use crate::types::{DateRange, Location, SolarEvent, SunEventRecord};
use crate::{Error, almanac};
use chrono::NaiveDate;
use chrono_tz::Tz;
use core::fmt;

/// Marker substituted for the sunrise field when the event never occurs.
pub const SUN_NEVER_RISES: &str = "Sun never rises";

/// Marker substituted for the sunset field when the event never occurs.
pub const SUN_NEVER_SETS: &str = "Sun never sets";

/// A failure tied to one (location, date) cell of a batch build.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordError {
    location: String,
    date: NaiveDate,
    source: Error,
}

impl RecordError {
    fn new(location: &str, date: NaiveDate, source: Error) -> Self {
        Self {
            location: location.to_owned(),
            date,
            source,
        }
    }

    /// Gets the name of the location whose cell failed.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Gets the date of the failed cell.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Gets the underlying error.
    #[must_use]
    pub const fn error(&self) -> &Error {
        &self.source
    }
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}: {}", self.location, self.date, self.source)
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Computes one record per (location, date) pair, yielding each cell's
/// outcome in canonical order.
///
/// Exactly `locations.len() × range.day_count()` items come out:
/// location-major, dates ascending within each location. A failed cell
/// yields its error in place, tagged with the location name and date, and
/// leaves every neighboring cell untouched.
///
/// An event that never occurs is not a failure; the affected field carries
/// [`SUN_NEVER_RISES`] or [`SUN_NEVER_SETS`] instead of a clock string.
/// The marker follows the field, so a polar date renders the same pair of
/// markers whether the sun stayed down or up all day.
pub fn entries(
    locations: &[Location],
    range: DateRange,
) -> impl Iterator<Item = Result<SunEventRecord, RecordError>> + '_ {
    locations.iter().flat_map(move |location| {
        range.dates().map(move |date| {
            record_for(location, date)
                .map_err(|source| RecordError::new(location.name(), date, source))
        })
    })
}

/// Builds the full table, failing fast on the first bad cell.
///
/// Equivalent to collecting [`entries`]; rebuilding from the same inputs
/// yields an identical table.
///
/// # Errors
/// Returns the first cell's [`RecordError`] if any cell fails.
///
/// # Example
/// ```rust
/// use chrono::NaiveDate;
/// use suntable::{table, DateRange, Location};
///
/// let parks = [
///     Location::new("Anastasia State Park", 29.872, -81.276, "America/New_York").unwrap(),
/// ];
/// let start = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
/// let records = table::build(&parks, DateRange::new(start, 7)).unwrap();
///
/// assert_eq!(records.len(), 7);
/// assert_eq!(records[0].sunrise(), "7:28 AM");
/// ```
pub fn build(
    locations: &[Location],
    range: DateRange,
) -> Result<Vec<SunEventRecord>, RecordError> {
    entries(locations, range).collect()
}

fn record_for(location: &Location, date: NaiveDate) -> Result<SunEventRecord, Error> {
    let events = almanac::sun_events_utc(date, location.latitude(), location.longitude())?;
    let zone = location.timezone();
    Ok(SunEventRecord::new(
        location.name(),
        zone.name(),
        date,
        event_text(events.sunrise(), date, zone, SUN_NEVER_RISES),
        event_text(events.sunset(), date, zone, SUN_NEVER_SETS),
    ))
}

fn event_text(event: SolarEvent, date: NaiveDate, zone: Tz, never_marker: &str) -> String {
    match event.occurs_at() {
        Some(time) => localize_in(date, time, zone),
        None => never_marker.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn parks() -> Vec<Location> {
        vec![
            Location::new("Anastasia State Park", 29.872, -81.276, "America/New_York").unwrap(),
            Location::new("Falling Waters State Park", 30.725, -85.528, "America/Chicago")
                .unwrap(),
        ]
    }

    #[test]
    fn test_location_major_date_ascending_order() {
        let locations = parks();
        let range = DateRange::new(date(2024, 3, 20), 3);
        let records = build(&locations, range).unwrap();

        assert_eq!(records.len(), 6);
        let expected: Vec<(&str, NaiveDate)> = vec![
            ("Anastasia State Park", date(2024, 3, 20)),
            ("Anastasia State Park", date(2024, 3, 21)),
            ("Anastasia State Park", date(2024, 3, 22)),
            ("Falling Waters State Park", date(2024, 3, 20)),
            ("Falling Waters State Park", date(2024, 3, 21)),
            ("Falling Waters State Park", date(2024, 3, 22)),
        ];
        let actual: Vec<(&str, NaiveDate)> = records
            .iter()
            .map(|r| (r.location_name(), r.date()))
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_record_contents() {
        let locations = parks();
        let records = build(&locations, DateRange::new(date(2024, 3, 20), 1)).unwrap();

        let anastasia = &records[0];
        assert_eq!(anastasia.location_name(), "Anastasia State Park");
        assert_eq!(anastasia.timezone(), "America/New_York");
        assert_eq!(anastasia.date(), date(2024, 3, 20));
        assert_eq!(anastasia.sunrise(), "7:28 AM");
        assert_eq!(anastasia.sunset(), "7:37 PM");
    }

    #[test]
    fn test_polar_markers_follow_fields() {
        let arctic = [Location::new(
            "Utqiagvik",
            71.29,
            -156.79,
            "America/Anchorage",
        )
        .unwrap()];

        let winter = build(&arctic, DateRange::new(date(2024, 12, 21), 1)).unwrap();
        assert_eq!(winter[0].sunrise(), SUN_NEVER_RISES);
        assert_eq!(winter[0].sunset(), SUN_NEVER_SETS);

        // Polar day renders the same markers; the fields cannot tell the
        // two polar conditions apart, only the solver outcomes can.
        let summer = build(&arctic, DateRange::new(date(2024, 6, 21), 1)).unwrap();
        assert_eq!(summer[0].sunrise(), SUN_NEVER_RISES);
        assert_eq!(summer[0].sunset(), SUN_NEVER_SETS);
    }

    #[test]
    fn test_empty_inputs() {
        let locations = parks();
        let no_days = build(&locations, DateRange::new(date(2024, 3, 20), 0)).unwrap();
        assert!(no_days.is_empty());

        let no_locations = build(&[], DateRange::new(date(2024, 3, 20), 10)).unwrap();
        assert!(no_locations.is_empty());
    }

    #[test]
    fn test_rebuild_is_identical() {
        let locations = parks();
        let range = DateRange::new(date(2024, 11, 1), 5);
        let first = build(&locations, range).unwrap();
        let second = build(&locations, range).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_entries_streams_in_build_order() {
        let locations = parks();
        let range = DateRange::new(date(2024, 3, 20), 2);
        let streamed: Vec<SunEventRecord> = entries(&locations, range)
            .collect::<Result<_, _>>()
            .unwrap();
        let collected = build(&locations, range).unwrap();
        assert_eq!(streamed, collected);
    }

    #[test]
    fn test_record_error_reports_cell() {
        let err = RecordError::new(
            "Ghost Park",
            date(2024, 3, 20),
            Error::invalid_latitude(95.0),
        );
        assert_eq!(err.location(), "Ghost Park");
        assert_eq!(err.date(), date(2024, 3, 20));
        assert_eq!(err.error(), &Error::invalid_latitude(95.0));
        assert_eq!(
            err.to_string(),
            "Ghost Park on 2024-03-20: invalid latitude 95° (must be between -90° and +90°)"
        );
    }
}
