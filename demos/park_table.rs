//! Build and print a week of sunrise/sunset rows for a handful of parks.

use chrono::NaiveDate;
use suntable::{DateRange, Location, table};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let parks = vec![
        Location::new("Anastasia State Park", 29.872, -81.276, "America/New_York")?,
        Location::new("Falling Waters State Park", 30.728, -85.528, "America/Chicago")?,
        Location::new("Myakka River State Park", 27.240, -82.315, "America/New_York")?,
        // Above the Arctic Circle; June rows print the daylight markers.
        Location::new("Gates of the Arctic", 67.78, -153.30, "America/Anchorage")?,
    ];

    let start = NaiveDate::from_ymd_opt(2024, 6, 18).unwrap();
    let range = DateRange::new(start, 7);

    let records = table::build(&parks, range)?;

    println!(
        "{:<26} {:<18} {:<12} {:>15} {:>15}",
        "Location", "Time zone", "Date", "Sunrise", "Sunset"
    );
    for record in &records {
        println!(
            "{:<26} {:<18} {:<12} {:>15} {:>15}",
            record.location_name(),
            record.timezone(),
            record.date(),
            record.sunrise(),
            record.sunset()
        );
    }

    Ok(())
}
