//! Flight itinerary resolution: airport lookup and great-circle leg distances.
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
#![allow(clippy::module_inception)]
#![allow(clippy::implicit_return)]
#![allow(clippy::blanket_clippy_restriction_lints)]
#![allow(clippy::shadow_same)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::separated_literal_suffix)]
#![allow(clippy::float_arithmetic)]
#![allow(clippy::use_self)]
#![allow(clippy::pattern_type_mismatch)]
#![allow(clippy::pub_use)]

use crate::components::prelude::*;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Holds the airport reference data and its wrappers
pub mod components;
/// Holds the per-page map data handed to a rendering phase
pub mod flight_map;
/// Resolves a chain of airport codes into an itinerary
pub mod itinerary;

/// Errors that may occur when loading airport data or resolving an itinerary.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ItineraryError {
    /// Error while reading the airport dataset from disk.
    #[error("{0}")]
    IOError(#[from] std::io::Error),
    /// The airport dataset is malformed.
    #[error("{0}")]
    CsvError(#[from] csv::Error),
    /// A requested code has no record in the directory.
    #[error("Unknown airport code: {0}")]
    UnknownAirport(AirportCode),
    /// An itinerary needs at least one stop.
    #[error("An itinerary needs at least one airport code")]
    EmptyItinerary,
    /// A road trip needs both an origin and a destination.
    #[error("A road trip needs both an origin and a destination")]
    MissingEndpoint,
    /// Error while exporting map data.
    #[error("{0}")]
    JsonError(#[from] serde_json::Error),
}

impl ItineraryError {
    /// Whether the error happened while loading the airport dataset.
    #[must_use]
    #[inline]
    pub const fn is_data_load_error(&self) -> bool {
        matches!(self, ItineraryError::IOError(_) | ItineraryError::CsvError(_))
    }
}

/// Returns a vector of rows from a CSV file.
pub trait LoadCsv
where
    Self: Sized,
{
    /// Returns a vector of rows from a CSV file.
    /// # Errors
    /// Returns an error if the file cannot be read or any row is malformed.
    fn load_csv<P: AsRef<Path>>(path: P, has_headers: bool) -> Result<Vec<Self>, ItineraryError>;

    /// Returns a vector of rows from any CSV source.
    /// # Errors
    /// Returns an error if the source cannot be read or any row is malformed.
    fn read_csv<R: Read>(reader: R, has_headers: bool) -> Result<Vec<Self>, ItineraryError>;
}

impl<T: Sized + for<'de> Deserialize<'de>> LoadCsv for T {
    #[inline]
    fn load_csv<P: AsRef<Path>>(path: P, has_headers: bool) -> Result<Vec<Self>, ItineraryError> {
        let file = File::open(path)?;
        Self::read_csv(file, has_headers)
    }

    #[inline]
    fn read_csv<R: Read>(reader: R, has_headers: bool) -> Result<Vec<Self>, ItineraryError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(has_headers)
            .delimiter(b',')
            .from_reader(reader);
        let rows = rdr.deserialize().collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

#[allow(clippy::expect_used)]
#[allow(clippy::indexing_slicing)]
#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        name: String,
        value: f64,
    }

    #[test]
    fn it_reads_rows_without_headers() {
        let rows = Row::read_csv("\"a, b\",1.5\nc,2\n".as_bytes(), false).expect("Failed to read rows");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "a, b");
        assert!((rows[1].value - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn it_fails_on_a_malformed_row() {
        let result = Row::read_csv("a,1.5\nb,oops\n".as_bytes(), false);
        let err = result.expect_err("Malformed row was accepted");
        assert!(err.is_data_load_error());
    }

    #[test]
    fn it_fails_on_a_missing_file() {
        let err = Row::load_csv("./test/does_not_exist.csv", false)
            .expect_err("Missing file was accepted");
        assert!(matches!(err, ItineraryError::IOError(_)));
    }
}
