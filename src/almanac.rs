//! Classical almanac sunrise/sunset equation.
//!
//! This follows the low-precision sunrise/sunset algorithm from the
//! "Almanac for Computers" (1990), Nautical Almanac Office, United States
//! Naval Observatory, in the form circulated by Ed Williams' Aviation
//! Formulary.
//!
//! Accuracy is on the order of a minute at low and mid latitudes and
//! degrades near the polar circles, where the sun meets the horizon at a
//! shallow angle. Times are computed for the standard zenith of 90.833°,
//! which folds atmospheric refraction and the solar semidiameter into the
//! horizon crossing.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::suboptimal_flops)]

use crate::error::check_coordinates;
use crate::math::normalize_degrees_0_to_360;
use crate::types::{SolarEvent, SunEvents, UtcTimeOfDay};
use crate::Result;
use chrono::{Datelike, NaiveDate};

/// Zenith angle in degrees defining sunrise and sunset: 90° plus standard
/// refraction plus the sun's apparent radius.
const ZENITH_DEGREES: f64 = 90.833;

#[derive(Clone, Copy)]
enum EventKind {
    Sunrise,
    Sunset,
}

impl EventKind {
    /// Rough local solar hour of the event, seeding the day fraction.
    const fn approximate_hour(self) -> f64 {
        match self {
            Self::Sunrise => 6.0,
            Self::Sunset => 18.0,
        }
    }
}

/// Computes the UTC sunrise and sunset outcomes for one date and place.
///
/// The two events are evaluated independently and each reports its own
/// outcome: a UTC time of day, or a polar marker when the sun does not
/// cross the horizon on that date. Each occurring time is normalized to
/// `[0, 24)` hours, so close to the antimeridian or to midnight UTC one
/// event of a pair can land on the other side of the UTC day from its
/// counterpart.
///
/// # Arguments
/// * `date` - Calendar date (UTC basis)
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
///
/// # Errors
/// Returns an error for invalid coordinates (latitude outside ±90°,
/// longitude outside ±180°).
///
/// # Example
/// ```rust
/// use chrono::NaiveDate;
/// use suntable::almanac;
///
/// let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
/// let events = almanac::sun_events_utc(date, 48.21, 16.37).unwrap();
///
/// assert!(events.sunrise().occurs());
/// if let Some(time) = events.sunrise().occurs_at() {
///     println!("sunrise at {:.2} h UTC", time.hours());
/// }
/// ```
pub fn sun_events_utc(date: NaiveDate, latitude: f64, longitude: f64) -> Result<SunEvents> {
    check_coordinates(latitude, longitude)?;

    let day_of_year = f64::from(date.ordinal());
    let lng_hour = longitude / 15.0;

    Ok(SunEvents::new(
        solve_event(day_of_year, lng_hour, latitude, EventKind::Sunrise),
        solve_event(day_of_year, lng_hour, latitude, EventKind::Sunset),
    ))
}

fn solve_event(day_of_year: f64, lng_hour: f64, latitude: f64, kind: EventKind) -> SolarEvent {
    let t = day_of_year + (kind.approximate_hour() - lng_hour) / 24.0;

    // Sun's mean anomaly
    let m = 0.9856 * t - 3.289;

    // True longitude, folded into [0, 360)
    let l = normalize_degrees_0_to_360(
        m + 1.916 * m.to_radians().sin() + 0.020 * (2.0 * m).to_radians().sin() + 282.634,
    );

    // Right ascension, pulled into the same quadrant as L and scaled to hours
    let mut ra = normalize_degrees_0_to_360((0.91764 * l.to_radians().tan()).atan().to_degrees());
    let l_quadrant = (l / 90.0).floor() * 90.0;
    let ra_quadrant = (ra / 90.0).floor() * 90.0;
    ra += l_quadrant - ra_quadrant;
    ra /= 15.0;

    // Declination
    let sin_dec = 0.39782 * l.to_radians().sin();
    let cos_dec = sin_dec.asin().cos();

    // Cosine of the sun's local hour angle at the sunrise/sunset zenith
    let cos_h = (ZENITH_DEGREES.to_radians().cos() - sin_dec * latitude.to_radians().sin())
        / (cos_dec * latitude.to_radians().cos());

    if cos_h > 1.0 {
        return SolarEvent::NeverRises;
    }
    if cos_h < -1.0 {
        return SolarEvent::NeverSets;
    }

    // Hour angle in hours; sunrise is on the western branch
    let mut h = cos_h.acos().to_degrees();
    if matches!(kind, EventKind::Sunrise) {
        h = 360.0 - h;
    }
    h /= 15.0;

    // Local mean time of the event, then back to UTC
    let local_mean = h + ra - 0.06571 * t - 6.622;
    SolarEvent::Occurs(UtcTimeOfDay::from_hours(local_mean - lng_hour))
}
