//! Core data types for sun event tables.

use crate::error::{check_coordinates, check_zone};
use crate::math::normalize_hours_0_to_24;
use crate::Result;
use chrono::NaiveDate;
use chrono_tz::Tz;

/// A named observation site with validated coordinates and a resolved time zone.
///
/// Construction is the validation boundary: latitude and longitude are
/// range-checked and the IANA zone identifier is resolved once, so every
/// `Location` that exists can be fed to the solver and localizer without
/// further checks.
///
/// # Example
/// ```
/// # use suntable::Location;
/// let park = Location::new("Anastasia State Park", 29.872, -81.276, "America/New_York").unwrap();
/// assert_eq!(park.name(), "Anastasia State Park");
/// assert_eq!(park.timezone().name(), "America/New_York");
///
/// assert!(Location::new("Nowhere", 95.0, 0.0, "UTC").is_err());
/// assert!(Location::new("Nowhere", 0.0, 0.0, "Not/A_Zone").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    name: String,
    latitude: f64,
    longitude: f64,
    timezone: Tz,
}

impl Location {
    /// Creates a location from coordinates and an IANA time zone identifier.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range
    /// coordinates, `UnknownTimeZone` if the identifier does not resolve.
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        zone_id: &str,
    ) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        let timezone = check_zone(zone_id)?;
        Ok(Self {
            name: name.into(),
            latitude,
            longitude,
            timezone,
        })
    }

    /// Creates a location from coordinates and an already-resolved zone.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range
    /// coordinates.
    pub fn with_zone(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        timezone: Tz,
    ) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            name: name.into(),
            latitude,
            longitude,
            timezone,
        })
    }

    /// Gets the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the latitude in degrees (-90 to +90, north positive).
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees (-180 to +180, east positive).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Gets the resolved IANA time zone.
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.timezone
    }
}

/// A run of consecutive calendar dates given by a start date and a day count.
///
/// The range is fully explicit; nothing here reads a clock. A zero day
/// count is a valid, empty range.
///
/// # Example
/// ```
/// # use suntable::DateRange;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 2, 27).unwrap();
/// let dates: Vec<_> = DateRange::new(start, 4).dates().collect();
/// assert_eq!(dates.len(), 4);
/// assert_eq!(dates[2], NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()); // leap day
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start_date: NaiveDate,
    day_count: u32,
}

impl DateRange {
    /// Creates a range of `day_count` consecutive dates starting at `start_date`.
    #[must_use]
    pub const fn new(start_date: NaiveDate, day_count: u32) -> Self {
        Self {
            start_date,
            day_count,
        }
    }

    /// Creates a 365-day range starting at `start_date`.
    ///
    /// Always 365 days regardless of leap years, the customary window for
    /// a year of daily table rows.
    #[must_use]
    pub const fn year(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            day_count: 365,
        }
    }

    /// Gets the first date of the range.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Gets the number of dates in the range.
    #[must_use]
    pub const fn day_count(&self) -> u32 {
        self.day_count
    }

    /// Iterates the dates in ascending order, exactly `day_count` of them.
    pub fn dates(self) -> impl Iterator<Item = NaiveDate> {
        self.start_date.iter_days().take(self.day_count as usize)
    }
}

/// A time of day in UTC as fractional hours, normalized to [0, 24).
///
/// This is the solver's native output unit. Whole hours and truncated
/// minutes are recovered with [`hour_minute`](Self::hour_minute); seconds
/// are below the equation's resolution and are dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTimeOfDay(f64);

impl UtcTimeOfDay {
    /// Creates a time of day from fractional hours, wrapping into [0, 24).
    ///
    /// Values outside the range fold modulo 24, so `25.5` and `-22.5` both
    /// become `1.5`. The input must be finite.
    #[must_use]
    pub fn from_hours(hours: f64) -> Self {
        let mut in_day = normalize_hours_0_to_24(hours);
        // The fold can land exactly on 24.0 for inputs a hair below a
        // day boundary.
        if in_day >= 24.0 {
            in_day -= 24.0;
        }
        Self(in_day)
    }

    /// Gets the fractional hours since midnight UTC, in [0, 24).
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Splits into whole hours and truncated minutes.
    ///
    /// Minutes are `floor(fractional_part × 60)`, never rounded up, so an
    /// instant stays within its containing minute.
    ///
    /// # Example
    /// ```
    /// # use suntable::UtcTimeOfDay;
    /// let (hour, minute) = UtcTimeOfDay::from_hours(11.705).hour_minute();
    /// assert_eq!((hour, minute), (11, 42));
    /// ```
    #[must_use]
    pub fn hour_minute(&self) -> (u32, u32) {
        let hour = self.0 as u32;
        let minute = ((self.0 - f64::from(hour)) * 60.0) as u32;
        (hour, minute)
    }
}

/// Outcome of a single sunrise or sunset computation.
///
/// At high latitudes the sun can stay below or above the horizon for the
/// whole day; those are ordinary outcomes here, not errors, and they are
/// kept distinct from any numeric time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolarEvent {
    /// The event occurs at the contained UTC time of day.
    Occurs(UtcTimeOfDay),
    /// The sun stays below the horizon (hour-angle cosine above +1).
    NeverRises,
    /// The sun stays above the horizon (hour-angle cosine below -1).
    NeverSets,
}

impl SolarEvent {
    /// Gets the event time if the event occurs.
    #[must_use]
    pub const fn occurs_at(&self) -> Option<UtcTimeOfDay> {
        if let Self::Occurs(time) = self {
            Some(*time)
        } else {
            None
        }
    }

    /// Checks whether the event occurs on this date.
    #[must_use]
    pub const fn occurs(&self) -> bool {
        matches!(self, Self::Occurs(_))
    }

    /// Checks for the polar-night outcome (sun never rises).
    #[must_use]
    pub const fn is_never_rises(&self) -> bool {
        matches!(self, Self::NeverRises)
    }

    /// Checks for the polar-day outcome (sun never sets).
    #[must_use]
    pub const fn is_never_sets(&self) -> bool {
        matches!(self, Self::NeverSets)
    }
}

/// The sunrise and sunset outcomes for one date at one place.
///
/// The two events are computed independently, each with its own outcome;
/// on transition days near the polar circles one can occur while the
/// other does not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunEvents {
    sunrise: SolarEvent,
    sunset: SolarEvent,
}

impl SunEvents {
    /// Bundles a sunrise and a sunset outcome.
    #[must_use]
    pub const fn new(sunrise: SolarEvent, sunset: SolarEvent) -> Self {
        Self { sunrise, sunset }
    }

    /// Gets the sunrise outcome.
    #[must_use]
    pub const fn sunrise(&self) -> SolarEvent {
        self.sunrise
    }

    /// Gets the sunset outcome.
    #[must_use]
    pub const fn sunset(&self) -> SolarEvent {
        self.sunset
    }
}

/// One finished row of a sun table: a location, a date, and the rendered
/// local sunrise/sunset strings.
///
/// The `date` is the UTC calendar date the solver ran for. Zones far from
/// Greenwich can render a clock string whose civil date differs from it;
/// use [`time::local_datetime`](crate::time::local_datetime) when the
/// local date matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SunEventRecord {
    location_name: String,
    timezone: String,
    date: NaiveDate,
    sunrise: String,
    sunset: String,
}

impl SunEventRecord {
    /// Assembles a record from rendered parts.
    #[must_use]
    pub fn new(
        location_name: impl Into<String>,
        timezone: impl Into<String>,
        date: NaiveDate,
        sunrise: impl Into<String>,
        sunset: impl Into<String>,
    ) -> Self {
        Self {
            location_name: location_name.into(),
            timezone: timezone.into(),
            date,
            sunrise: sunrise.into(),
            sunset: sunset.into(),
        }
    }

    /// Gets the location name.
    #[must_use]
    pub fn location_name(&self) -> &str {
        &self.location_name
    }

    /// Gets the IANA time zone identifier the times are rendered in.
    #[must_use]
    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    /// Gets the UTC calendar date the record covers.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Gets the local sunrise string, or the never-rises marker.
    #[must_use]
    pub fn sunrise(&self) -> &str {
        &self.sunrise
    }

    /// Gets the local sunset string, or the never-sets marker.
    #[must_use]
    pub fn sunset(&self) -> &str {
        &self.sunset
    }
}
