//! # Sun Table
//!
//! Sunrise/sunset tables for named locations, with IANA time zone
//! localization.
//!
//! The crate computes sunrise and sunset times with the classical almanac
//! equation, renders them as local 12-hour clock strings through named
//! IANA zones, and assembles per-location per-date tables from explicit
//! inputs. It is a pure computation core: no I/O, no system clock reads,
//! no caching.
//!
//! - **Explicit inputs**: every date comes from a [`DateRange`] the caller
//!   provides; the `chrono` clock feature is not even enabled.
//! - **Polar outcomes are values**: a sun that never rises or never sets
//!   on a date is a [`SolarEvent`] variant, not an error and not a fake
//!   midnight.
//! - **Stable table order**: batch output is location-major with dates
//!   ascending, exactly one record per (location, date) pair.
//!
//! ## Accuracy
//!
//! The almanac equation is a low-precision method: about a minute of
//! accuracy at low and mid latitudes, degrading near the polar circles
//! where the sun crosses the horizon at a shallow angle. Times use the
//! standard 90.833° zenith (refraction plus solar semidiameter).
//!
//! ## Quick Start
//!
//! ### Single date and place
//! ```rust
//! use chrono::NaiveDate;
//! use suntable::{almanac, time, SolarEvent};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
//! let events = almanac::sun_events_utc(date, 39.0, -77.0).unwrap();
//!
//! match events.sunrise() {
//!     SolarEvent::Occurs(when) => {
//!         let local = time::localize(date, when, "America/New_York").unwrap();
//!         println!("sunrise at {local}");
//!     }
//!     SolarEvent::NeverRises | SolarEvent::NeverSets => {
//!         println!("no horizon crossing today");
//!     }
//! }
//! ```
//!
//! ### A table of locations and dates
//! ```rust
//! use chrono::NaiveDate;
//! use suntable::{table, DateRange, Location};
//!
//! let parks = [
//!     Location::new("Myakka River State Park", 27.240, -82.315, "America/New_York").unwrap(),
//!     Location::new("Falling Waters State Park", 30.725, -85.528, "America/Chicago").unwrap(),
//! ];
//! let start = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
//!
//! for record in table::build(&parks, DateRange::new(start, 7)).unwrap() {
//!     println!(
//!         "{} {}: rise {} set {}",
//!         record.location_name(),
//!         record.date(),
//!         record.sunrise(),
//!         record.sunset()
//!     );
//! }
//! ```
//!
//! ## Conventions
//!
//! - **Latitude**: degrees, -90 to +90, north positive
//! - **Longitude**: degrees, -180 to +180, east positive
//! - **Event times**: UTC fractional hours in [0, 24); rendered strings
//!   are local 12-hour clock readings with no leading zero
//! - **Record dates**: the UTC calendar date the solver ran for
//!
//! ## References
//!
//! - Almanac for Computers (1990). Nautical Almanac Office, United States
//!   Naval Observatory.
//! - Williams, E. Aviation Formulary, "Sunrise, sunset and twilight".
//! - IANA time zone database, via `chrono-tz`.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::types::{DateRange, Location, SolarEvent, SunEventRecord, SunEvents, UtcTimeOfDay};

// Algorithm module
pub mod almanac;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod table;
pub mod time;
