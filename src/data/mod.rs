pub mod discovery;
pub mod loader;
pub mod stats;

pub use loader::{CityData, Trip, load_city_data};
