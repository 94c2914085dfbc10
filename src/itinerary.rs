use crate::components::prelude::*;
use crate::ItineraryError;
use log::debug;
use serde::Serialize;
use std::fmt;

/// A chain of resolved airports with the distance of every leg.
///
/// Only [`Itinerary::resolve`] builds one, so there is always at least one stop, one leg fewer
/// than stops, and the total is the sum of the legs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct Itinerary<'a> {
    stops: Vec<&'a AirportRecord>,
    leg_distances: Vec<Miles>,
    total_distance: Miles,
    departure: &'a AirportRecord,
    arrival: &'a AirportRecord,
    codes: Vec<AirportCode>,
}

/// Resolves `codes` against `directory`. See [`Itinerary::resolve`].
/// # Errors
/// If `codes` is empty or any code is not in the directory.
#[inline]
pub fn resolve<'a, S: AsRef<str>>(
    codes: &[S],
    directory: &'a AirportDirectory,
) -> Result<Itinerary<'a>, ItineraryError> {
    Itinerary::resolve(codes, directory)
}

impl<'a> Itinerary<'a> {
    /// Resolves each code in order and measures every leg between consecutive stops.
    ///
    /// Codes are matched exactly, so callers normalize case beforehand.
    /// # Errors
    /// * `EmptyItinerary` if `codes` is empty
    /// * `UnknownAirport` for the first code that is not in the directory
    #[inline]
    pub fn resolve<S: AsRef<str>>(
        codes: &[S],
        directory: &'a AirportDirectory,
    ) -> Result<Self, ItineraryError> {
        let stops = codes
            .iter()
            .map(|code| directory.lookup(code.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let (departure, arrival) = match (stops.first(), stops.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Err(ItineraryError::EmptyItinerary),
        };

        let leg_distances: Vec<Miles> = stops
            .iter()
            .zip(stops.iter().skip(1))
            .map(|(from, to)| from.distance_to(to))
            .collect();
        let total_distance: Miles = leg_distances.iter().copied().sum();
        let codes = codes
            .iter()
            .map(|code| AirportCode::from(code.as_ref()))
            .collect();

        let itinerary = Self {
            stops,
            leg_distances,
            total_distance,
            departure,
            arrival,
            codes,
        };
        debug!("Resolved {itinerary} ({} miles)", itinerary.total_distance);
        Ok(itinerary)
    }

    /// The airports in travel order.
    #[must_use]
    #[inline]
    pub fn stops(&self) -> &[&'a AirportRecord] {
        &self.stops
    }

    /// The distance of each leg, in travel order.
    #[must_use]
    #[inline]
    pub fn leg_distances(&self) -> &[Miles] {
        &self.leg_distances
    }

    /// Each leg as its origin, destination and distance.
    #[inline]
    pub fn legs(&self) -> impl Iterator<Item = (&'a AirportRecord, &'a AirportRecord, Miles)> + '_ {
        self.stops
            .iter()
            .zip(self.stops.iter().skip(1))
            .zip(self.leg_distances.iter())
            .map(|((from, to), miles)| (*from, *to, *miles))
    }

    /// The sum of all legs.
    #[must_use]
    #[inline]
    pub const fn total_distance(&self) -> Miles {
        self.total_distance
    }

    /// The first stop.
    #[must_use]
    #[inline]
    pub const fn departure(&self) -> &'a AirportRecord {
        self.departure
    }

    /// The last stop.
    #[must_use]
    #[inline]
    pub const fn arrival(&self) -> &'a AirportRecord {
        self.arrival
    }

    /// The requested codes in their original order.
    #[must_use]
    #[inline]
    pub fn codes(&self) -> &[AirportCode] {
        &self.codes
    }
}

impl fmt::Display for Itinerary<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut codes = self.codes.iter();
        if let Some(first) = codes.next() {
            write!(f, "{first}")?;
        }
        for code in codes {
            write!(f, " → {code}")?;
        }
        Ok(())
    }
}

#[allow(clippy::expect_used)]
#[allow(clippy::indexing_slicing)]
#[allow(clippy::panic)]
#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> AirportDirectory {
        AirportDirectory::from_file("./test/airports.csv").expect("Failed to read airports.csv")
    }

    #[test]
    fn it_resolves_a_single_stop() {
        let directory = directory();
        let itinerary = resolve(&["KJFK"], &directory).expect("Failed to resolve");
        assert_eq!(itinerary.stops().len(), 1);
        assert!(itinerary.leg_distances().is_empty());
        assert_eq!(itinerary.total_distance(), Miles(0));
        assert_eq!(itinerary.departure(), itinerary.arrival());
        assert_eq!(itinerary.departure().code.0, "KJFK");
        assert_eq!(itinerary.to_string(), "KJFK");
    }

    #[test]
    fn it_resolves_jfk_to_lax() {
        let directory = directory();
        let itinerary = resolve(&["KJFK", "KLAX"], &directory).expect("Failed to resolve");
        assert_eq!(itinerary.leg_distances(), &[Miles(2469)]);
        assert_eq!(itinerary.total_distance(), Miles(2469));
        assert_eq!(itinerary.departure().code.0, "KJFK");
        assert_eq!(itinerary.arrival().code.0, "KLAX");
        assert_eq!(itinerary.departure().city, "New York");
        assert_eq!(itinerary.arrival().city, "Los Angeles");
    }

    #[test]
    fn it_sums_every_leg() {
        let directory = directory();
        let codes = vec![
            "KJFK".to_owned(),
            "KORD".to_owned(),
            "KLAX".to_owned(),
            "RJTT".to_owned(),
        ];
        let itinerary = resolve(&codes, &directory).expect("Failed to resolve");
        assert_eq!(
            itinerary.leg_distances(),
            &[Miles(738), Miles(1741), Miles(5475)]
        );
        assert_eq!(itinerary.leg_distances().len(), codes.len() - 1);
        let sum: Miles = itinerary.leg_distances().iter().copied().sum();
        assert_eq!(itinerary.total_distance(), sum);
        assert_eq!(itinerary.total_distance(), Miles(7954));
        assert_eq!(itinerary.departure().code.0, "KJFK");
        assert_eq!(itinerary.arrival().code.0, "RJTT");
        assert_eq!(itinerary.to_string(), "KJFK → KORD → KLAX → RJTT");

        let legs = itinerary.legs().collect::<Vec<_>>();
        assert_eq!(legs.len(), 3);
        assert_eq!(legs[1].0.code.0, "KORD");
        assert_eq!(legs[1].1.code.0, "KLAX");
        assert_eq!(legs[1].2, Miles(1741));
    }

    #[test]
    fn it_is_symmetric() {
        let directory = directory();
        let there = resolve(&["EGLL", "KSFO"], &directory).expect("Failed to resolve");
        let back = resolve(&["KSFO", "EGLL"], &directory).expect("Failed to resolve");
        assert_eq!(there.total_distance(), back.total_distance());
        assert_eq!(there.total_distance(), Miles(5353));
    }

    #[test]
    fn it_allows_repeated_stops() {
        let directory = directory();
        let itinerary =
            resolve(&["KSFO", "KSFO", "KLAX", "KSFO"], &directory).expect("Failed to resolve");
        assert_eq!(
            itinerary.leg_distances(),
            &[Miles(0), Miles(337), Miles(337)]
        );
        assert_eq!(itinerary.total_distance(), Miles(674));
        assert_eq!(itinerary.departure(), itinerary.arrival());
    }

    #[test]
    fn it_fails_on_an_unknown_code() {
        let directory = directory();
        match resolve(&["KJFK", "ZZZZ"], &directory) {
            Err(ItineraryError::UnknownAirport(code)) => assert_eq!(code.0, "ZZZZ"),
            other => panic!("Expected an unknown airport, got {other:?}"),
        }
        match resolve(&["ZZZZ", "KJFK", "YYYY"], &directory) {
            Err(ItineraryError::UnknownAirport(code)) => assert_eq!(code.0, "ZZZZ"),
            other => panic!("Expected an unknown airport, got {other:?}"),
        }
    }

    #[test]
    fn it_does_not_fold_case() {
        let directory = directory();
        assert!(matches!(
            resolve(&["kjfk"], &directory),
            Err(ItineraryError::UnknownAirport(_))
        ));
    }

    #[test]
    fn it_rejects_an_empty_itinerary() {
        let directory = directory();
        let codes: [&str; 0] = [];
        assert!(matches!(
            resolve(&codes, &directory),
            Err(ItineraryError::EmptyItinerary)
        ));
    }

    #[test]
    fn it_resolves_identically_across_loads() {
        let first = directory();
        let second = directory();
        let codes = ["EGLL", "KJFK", "KSFO"];
        let a = resolve(&codes, &first).expect("Failed to resolve");
        let b = resolve(&codes, &second).expect("Failed to resolve");
        assert_eq!(a, b);
    }

    #[test]
    fn it_serializes_for_a_renderer() {
        let directory = directory();
        let itinerary = resolve(&["KJFK", "KORD"], &directory).expect("Failed to resolve");
        let json = serde_json::to_value(&itinerary).expect("Failed to serialize");
        assert_eq!(json["total_distance"], 738);
        assert_eq!(json["leg_distances"][0], 738);
        assert_eq!(json["departure"]["code"], "KJFK");
        assert_eq!(json["arrival"]["city"], "Chicago");
        assert_eq!(json["codes"][1], "KORD");
        assert_eq!(json["stops"].as_array().map(Vec::len), Some(2));
    }
}
