use crate::components::coordinates::great_circle_miles;
use crate::components::wrappers::{
    Altitude, AirportCode, AirportId, Latitude, Longitude, Miles,
};
use crate::{ItineraryError, LoadCsv};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

/// The process-wide directory, loaded on first use.
static SHARED_DIRECTORY: OnceLock<AirportDirectory> = OnceLock::new();

/// A row of the airport dataset. Rows have no header and are read by position:
/// ```csv
/// id, name, city, country, code, (unused), latitude, longitude, altitude
/// ```
#[derive(Debug, Clone, Deserialize)]
struct RawAirport {
    id: AirportId,
    name: String,
    city: String,
    country: String,
    code: AirportCode,
    _unused: String,
    latitude: Latitude,
    longitude: Longitude,
    altitude: Altitude,
}

/// An airport from the reference dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct AirportRecord {
    /// The id of the airport in the dataset
    pub id: AirportId,
    /// The airport name
    pub name: String,
    /// The city the airport serves
    pub city: String,
    /// The country the airport is in
    pub country: String,
    /// The lookup code
    pub code: AirportCode,
    /// The latitude of the airport
    pub latitude: Latitude,
    /// The longitude of the airport
    pub longitude: Longitude,
    /// The altitude of the airport
    pub altitude: Altitude,
}

impl From<RawAirport> for AirportRecord {
    #[inline]
    fn from(raw: RawAirport) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            city: raw.city,
            country: raw.country,
            code: raw.code,
            latitude: raw.latitude,
            longitude: raw.longitude,
            altitude: raw.altitude,
        }
    }
}

impl AirportRecord {
    /// The latitude and longitude of the airport.
    #[must_use]
    #[inline]
    pub const fn position(&self) -> (Latitude, Longitude) {
        (self.latitude, self.longitude)
    }

    /// The great-circle distance to another airport in whole statute miles.
    #[must_use]
    #[inline]
    pub fn distance_to(&self, other: &AirportRecord) -> Miles {
        great_circle_miles(self.position(), other.position())
    }
}

/// Read-only lookup of airports by code.
#[derive(Debug, Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct AirportDirectory {
    /// The airports by code
    airports: HashMap<AirportCode, AirportRecord>,
}

impl AirportDirectory {
    /// Loads the directory from a headerless CSV file.
    /// # Errors
    /// If the file cannot be read, or if any row is malformed.
    #[inline]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ItineraryError> {
        debug!("Loading airports from {}", path.as_ref().display());
        let rows = RawAirport::load_csv(path, false)?;
        Ok(Self::from_rows(rows))
    }

    /// Loads the directory from any headerless CSV source.
    /// # Errors
    /// If the source cannot be read, or if any row is malformed.
    #[inline]
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ItineraryError> {
        let rows = RawAirport::read_csv(reader, false)?;
        Ok(Self::from_rows(rows))
    }

    /// Returns the process-wide directory, loading it from `path` on the first call. Later calls
    /// return the same table and do not read `path`.
    /// # Errors
    /// If the directory is not loaded yet and `path` cannot be loaded.
    #[inline]
    pub fn shared<P: AsRef<Path>>(path: P) -> Result<&'static Self, ItineraryError> {
        if let Some(directory) = SHARED_DIRECTORY.get() {
            return Ok(directory);
        }
        let directory = Self::from_file(path)?;
        // A racing caller may have published first; everyone gets the published table.
        Ok(SHARED_DIRECTORY.get_or_init(|| directory))
    }

    fn from_rows(rows: Vec<RawAirport>) -> Self {
        let mut airports = HashMap::with_capacity(rows.len());
        for row in rows {
            match airports.entry(row.code.clone()) {
                Entry::Occupied(_) => {
                    warn!("Airport code {} is defined more than once, keeping the first", row.code);
                }
                Entry::Vacant(slot) => {
                    slot.insert(AirportRecord::from(row));
                }
            }
        }
        debug!("{} airports loaded", airports.len());
        Self { airports }
    }

    /// Finds the airport with exactly this code.
    /// # Errors
    /// If no airport has the code.
    #[inline]
    pub fn lookup(&self, code: &str) -> Result<&AirportRecord, ItineraryError> {
        self.airports
            .get(code)
            .ok_or_else(|| ItineraryError::UnknownAirport(code.into()))
    }

    /// Whether an airport has exactly this code.
    #[must_use]
    #[inline]
    pub fn contains(&self, code: &str) -> bool {
        self.airports.contains_key(code)
    }

    /// The number of airports.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.airports.len()
    }

    /// Whether the directory has no airports.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// Iterates over the airports in no particular order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &AirportRecord> {
        self.airports.values()
    }
}

impl FromStr for AirportDirectory {
    type Err = ItineraryError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(s.as_bytes())
    }
}
