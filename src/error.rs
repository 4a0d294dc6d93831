//! Error types for sun table generation.

use core::fmt;

use chrono_tz::Tz;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while validating inputs for sun event calculations.
///
/// A sun that never rises or never sets on a given date is not an error;
/// the solver reports it as a regular outcome (see
/// [`SolarEvent`](crate::SolarEvent)).
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// A time zone identifier that does not resolve in the IANA database.
    UnknownTimeZone {
        /// The identifier as provided.
        zone: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::UnknownTimeZone { zone } => {
                write!(f, "unknown time zone {zone:?} (expected an IANA identifier)")
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an unknown time zone error.
    #[must_use]
    pub fn unknown_time_zone(zone: impl Into<String>) -> Self {
        Self::UnknownTimeZone { zone: zone.into() }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Resolves an IANA time zone identifier.
///
/// # Errors
/// Returns `UnknownTimeZone` if the identifier is not in the IANA database.
pub fn check_zone(zone_id: &str) -> Result<Tz> {
    zone_id
        .parse::<Tz>()
        .map_err(|_| Error::unknown_time_zone(zone_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_validation() {
        assert!(check_latitude(0.0).is_ok());
        assert!(check_latitude(90.0).is_ok());
        assert!(check_latitude(-90.0).is_ok());
        assert!(check_latitude(29.872).is_ok());

        assert!(check_latitude(91.0).is_err());
        assert!(check_latitude(-91.0).is_err());
        assert!(check_latitude(f64::NAN).is_err());
        assert!(check_latitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_longitude_validation() {
        assert!(check_longitude(0.0).is_ok());
        assert!(check_longitude(180.0).is_ok());
        assert!(check_longitude(-180.0).is_ok());
        assert!(check_longitude(-81.276).is_ok());

        assert!(check_longitude(181.0).is_err());
        assert!(check_longitude(-181.0).is_err());
        assert!(check_longitude(f64::NAN).is_err());
        assert!(check_longitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_coordinates_validation_order() {
        // Latitude is checked first when both are bad.
        assert_eq!(
            check_coordinates(95.0, 200.0),
            Err(Error::invalid_latitude(95.0))
        );
        assert_eq!(
            check_coordinates(45.0, 200.0),
            Err(Error::invalid_longitude(200.0))
        );
        assert!(check_coordinates(45.0, -120.0).is_ok());
    }

    #[test]
    fn test_zone_resolution() {
        assert!(check_zone("America/New_York").is_ok());
        assert!(check_zone("UTC").is_ok());
        assert!(check_zone("Pacific/Auckland").is_ok());

        assert_eq!(
            check_zone("America/Atlantis"),
            Err(Error::unknown_time_zone("America/Atlantis"))
        );
        assert!(check_zone("").is_err());
        assert!(check_zone("Eastern").is_err());
    }

    #[test]
    fn test_error_display() {
        let err = Error::invalid_latitude(95.0);
        assert_eq!(
            err.to_string(),
            "invalid latitude 95° (must be between -90° and +90°)"
        );

        let err = Error::invalid_longitude(185.0);
        assert_eq!(
            err.to_string(),
            "invalid longitude 185° (must be between -180° and +180°)"
        );

        let err = Error::unknown_time_zone("Mars/Olympus_Mons");
        assert_eq!(
            err.to_string(),
            "unknown time zone \"Mars/Olympus_Mons\" (expected an IANA identifier)"
        );
    }
}
