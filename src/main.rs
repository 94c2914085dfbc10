//! Prints a flight itinerary resolved from a comma-separated path of airport codes, or a road trip
//! between two places.
#![warn(
    clippy::all,
    clippy::restriction,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    rust_2018_idioms,
    missing_debug_implementations,
    missing_docs
)]
#![allow(clippy::implicit_return)]
#![allow(clippy::blanket_clippy_restriction_lints)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::print_stdout)]
#![allow(clippy::exit)]

use log::{debug, error};
use std::env;
use std::process;
use travel_context::components::prelude::*;
use travel_context::flight_map::{DrivingMaps, RoadTrip};
use travel_context::itinerary::Itinerary;
use travel_context::ItineraryError;

const USAGE: &str = "usage: travel_context [flight] <airports.csv> <path, e.g. KJFK,KLAX>
       travel_context roadtrip <from> <to>";

/// Splits a path attribute into upper-cased codes, e.g. `kjfk,klax` into `["KJFK", "KLAX"]`.
/// Segments are not trimmed, so `"KJFK, KLAX"` yields the unknown code `" KLAX"`.
fn codes_from_path(path: &str) -> Vec<String> {
    path.to_uppercase().split(',').map(str::to_owned).collect()
}

fn run_road_trip(from: &str, to: &str) -> Result<(), ItineraryError> {
    let trip = RoadTrip::new(from, to)?;
    let mut maps = DrivingMaps::new();
    let id = maps.add(&trip);
    debug!("Road trip map {id}");

    println!("Road Trip");
    println!("{trip}");
    println!("{}", maps.to_json()?);
    Ok(())
}

fn run_flight(data_path: &str, path: &str) -> Result<(), ItineraryError> {
    let directory = AirportDirectory::shared(data_path)?;
    let codes = codes_from_path(path);
    debug!("Resolving {codes:?}");
    let itinerary = Itinerary::resolve(&codes, directory)?;

    println!(
        "Flight: {} to {}",
        itinerary.departure().city,
        itinerary.arrival().city
    );
    println!("{} miles", itinerary.total_distance().with_separators());
    println!("{itinerary}");
    Ok(())
}

fn main() {
    env_logger::init();
    let args = env::args().skip(1).collect::<Vec<_>>();
    let result = match args.as_slice() {
        [mode, from, to] if mode == "roadtrip" => run_road_trip(from, to),
        [mode, data_path, path] if mode == "flight" => run_flight(data_path, path),
        [data_path, path] => run_flight(data_path, path),
        _ => {
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };

    if let Err(e) = result {
        error!("{e}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_normalizes_a_path() {
        assert_eq!(codes_from_path("kjfk,KLAX"), vec!["KJFK", "KLAX"]);
        assert_eq!(codes_from_path("egll, rjtt"), vec!["EGLL", " RJTT"]);
        assert_eq!(codes_from_path("kjfk,"), vec!["KJFK", ""]);
        assert_eq!(codes_from_path("ksfo"), vec!["KSFO"]);
    }
}
