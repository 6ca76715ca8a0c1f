//! US Bikeshare Statistics Explorer Library
//!
//! This library backs an interactive terminal tool for exploring US
//! bikeshare trip data: it discovers city CSV datasets, walks the user
//! through city and time-filter selection, and prints descriptive
//! statistics about the filtered trips.
//!
//! The selection prompts are driven by an abbreviation engine with two
//! strategies: initials for composite city names ("New York City" answers
//! to "NYC") and shortest unique prefixes for plain words ("month" answers
//! to "m").
//!
//! # Examples
//!
//! ```rust
//! use ridestats::prompt::{AbbreviationStrategy, build_options};
//!
//! let (text, map) = build_options(
//!     &["Chicago", "New York City", "Washington"],
//!     AbbreviationStrategy::Acronym,
//! );
//! assert_eq!(text, "Chicago [C], New York City [NYC] or Washington [W]");
//! assert_eq!(map["NYC"], "New York City");
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod logging;
pub mod prompt;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data::{CityData, Trip, load_city_data};
pub use error::AppError;
pub use prompt::{AbbreviationStrategy, build_options, show_prompt};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
