pub use crate::components::airport::{AirportDirectory, AirportRecord};
pub use crate::components::coordinates::great_circle_miles;
pub use crate::components::wrappers::{
    Altitude, AirportCode, AirportId, Latitude, Longitude, Miles,
};
