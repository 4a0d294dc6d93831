//! Compute one day's sun events for a single place, step by step.

use chrono::NaiveDate;
use suntable::{Location, SolarEvent, almanac, time};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let park = Location::new("Anastasia State Park", 29.872, -81.276, "America/New_York")?;
    let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();

    let events = almanac::sun_events_utc(date, park.latitude(), park.longitude())?;

    println!("{} on {}:", park.name(), date);
    describe("Sunrise", events.sunrise(), date, &park);
    describe("Sunset", events.sunset(), date, &park);

    Ok(())
}

fn describe(label: &str, event: SolarEvent, date: NaiveDate, park: &Location) {
    match event {
        SolarEvent::Occurs(utc) => {
            let local = time::localize_in(date, utc, park.timezone());
            println!("  {label}: {local} local ({:.4} h UTC)", utc.hours());
        }
        SolarEvent::NeverRises => println!("  {label}: sun stays below the horizon"),
        SolarEvent::NeverSets => println!("  {label}: sun stays above the horizon"),
    }
}
