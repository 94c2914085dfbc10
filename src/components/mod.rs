/// Holds the airport records and the directory
pub mod airport;
/// Holds the great-circle distance calculation
pub mod coordinates;
/// Holds the public exports for the prelude
pub mod prelude;
/// Holds wrappers around primitive types
pub mod wrappers;
