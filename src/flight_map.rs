use crate::components::prelude::*;
use crate::itinerary::Itinerary;
use crate::ItineraryError;
use derive_more::Display;
use serde::{Serialize, Serializer};
use std::fmt;

/// Identifies one map on a page. Equal trips share an id, different trips never do.
#[derive(Clone, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Serialize, Hash)]
#[non_exhaustive]
pub struct MapId(pub String);

impl MapId {
    /// Builds the id for an ordered chain of codes, e.g. `map_4_KJFK_4_KLAX`.
    #[must_use]
    #[inline]
    pub fn for_codes(codes: &[AirportCode]) -> Self {
        Self::encode("map", codes.iter().map(|code| code.0.as_str()))
    }

    /// Builds the id for a road trip, e.g. `drive_6_Boston_8_New York`.
    #[must_use]
    #[inline]
    pub fn for_road_trip(trip: &RoadTrip) -> Self {
        Self::encode("drive", [trip.from(), trip.to()].into_iter())
    }

    /// Each part is written as `_<byte length>_<part>`, so the parts can always be read back and
    /// distinct part lists give distinct ids.
    fn encode<'s, I: Iterator<Item = &'s str>>(prefix: &str, parts: I) -> Self {
        let mut id = prefix.to_owned();
        for part in parts {
            id.push_str(&format!("_{}_{part}", part.len()));
        }
        MapId(id)
    }
}

/// A marker for one stop on a flight map. Text fields are not escaped.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[non_exhaustive]
pub struct MapPoint {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
    /// The airport name
    pub title: String,
    /// The airport code
    pub code: String,
    /// The city the airport serves
    pub city: String,
    /// The country the airport is in
    pub country: String,
}

impl From<&AirportRecord> for MapPoint {
    #[inline]
    fn from(airport: &AirportRecord) -> Self {
        Self {
            lat: airport.latitude.0,
            lng: airport.longitude.0,
            title: airport.name.clone(),
            code: airport.code.0.clone(),
            city: airport.city.clone(),
            country: airport.country.clone(),
        }
    }
}

/// A drive between two places named in free text, e.g. `Boston` to `New York`. The route itself is
/// left to the mapping service, so no distance is computed here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct RoadTrip {
    from: String,
    to: String,
}

impl RoadTrip {
    /// Creates a road trip. Surrounding whitespace is trimmed from both endpoints.
    /// # Errors
    /// `MissingEndpoint` if either endpoint is blank.
    #[inline]
    pub fn new(from: &str, to: &str) -> Result<Self, ItineraryError> {
        let (from, to) = (from.trim(), to.trim());
        if from.is_empty() || to.is_empty() {
            return Err(ItineraryError::MissingEndpoint);
        }
        Ok(Self {
            from: from.to_owned(),
            to: to.to_owned(),
        })
    }

    /// The origin.
    #[must_use]
    #[inline]
    pub fn from(&self) -> &str {
        &self.from
    }

    /// The destination.
    #[must_use]
    #[inline]
    pub fn to(&self) -> &str {
        &self.to
    }
}

impl fmt::Display for RoadTrip {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.from, self.to)
    }
}

/// Maps kept in the order their ids were first added. Adding an existing id replaces its value.
#[derive(Clone, Debug, PartialEq)]
struct OrderedMaps<T> {
    maps: Vec<(MapId, T)>,
}

impl<T> Default for OrderedMaps<T> {
    fn default() -> Self {
        Self { maps: Vec::new() }
    }
}

impl<T> OrderedMaps<T> {
    fn insert(&mut self, id: MapId, value: T) {
        match self.maps.iter_mut().find(|(existing, _)| *existing == id) {
            Some((_, existing_value)) => *existing_value = value,
            None => self.maps.push((id, value)),
        }
    }

    fn get(&self, id: &MapId) -> Option<&T> {
        self.maps
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, value)| value)
    }
}

impl<T: Serialize> Serialize for OrderedMaps<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.maps.iter().map(|(id, value)| (id, value)))
    }
}

/// Collects the map points of every itinerary on a page so a later rendering phase can draw them.
/// The caller owns it and passes it along explicitly.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
#[non_exhaustive]
pub struct FlightMaps {
    /// The points of each map
    maps: OrderedMaps<Vec<MapPoint>>,
}

impl FlightMaps {
    /// Creates an empty accumulator.
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the stops of an itinerary and returns the id of its map. Adding the same chain again
    /// replaces its points but keeps its position.
    #[inline]
    pub fn add(&mut self, itinerary: &Itinerary<'_>) -> MapId {
        let id = MapId::for_codes(itinerary.codes());
        let points = itinerary
            .stops()
            .iter()
            .map(|airport| MapPoint::from(*airport))
            .collect();
        self.maps.insert(id.clone(), points);
        id
    }

    /// The points of a map.
    #[must_use]
    #[inline]
    pub fn get(&self, id: &MapId) -> Option<&[MapPoint]> {
        self.maps.get(id).map(Vec::as_slice)
    }

    /// The number of maps.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.maps.maps.len()
    }

    /// Whether no maps have been added.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.maps.maps.is_empty()
    }

    /// Iterates over the maps in the order they were first added.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&MapId, &[MapPoint])> {
        self.maps
            .maps
            .iter()
            .map(|(id, points)| (id, points.as_slice()))
    }

    /// Exports the maps as a JSON object keyed by map id.
    /// # Errors
    /// If serialization fails.
    #[inline]
    pub fn to_json(&self) -> Result<String, ItineraryError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Collects the road trips on a page for a later rendering phase, which asks the mapping service
/// for directions. The caller owns it and passes it along explicitly.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
#[non_exhaustive]
pub struct DrivingMaps {
    /// The endpoints of each map
    maps: OrderedMaps<RoadTrip>,
}

impl DrivingMaps {
    /// Creates an empty accumulator.
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a road trip and returns the id of its map.
    #[inline]
    pub fn add(&mut self, trip: &RoadTrip) -> MapId {
        let id = MapId::for_road_trip(trip);
        self.maps.insert(id.clone(), trip.clone());
        id
    }

    /// The road trip drawn on a map.
    #[must_use]
    #[inline]
    pub fn get(&self, id: &MapId) -> Option<&RoadTrip> {
        self.maps.get(id)
    }

    /// The number of maps.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.maps.maps.len()
    }

    /// Whether no maps have been added.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.maps.maps.is_empty()
    }

    /// Iterates over the maps in the order they were first added.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&MapId, &RoadTrip)> {
        self.maps.maps.iter().map(|(id, trip)| (id, trip))
    }

    /// Exports the maps as a JSON object keyed by map id.
    /// # Errors
    /// If serialization fails.
    #[inline]
    pub fn to_json(&self) -> Result<String, ItineraryError> {
        Ok(serde_json::to_string(self)?)
    }
}
