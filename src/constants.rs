//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers and fixed vocabulary (months,
//! weekdays, CSV column names) so the rest of the codebase stays free of
//! scattered literals.

#![allow(dead_code)]

/// Month names offered by the month filter, in calendar order, plus the
/// "all" catch-all. Only the first half of the year is present because the
/// published bikeshare datasets cover January through June.
pub const MONTHS: [&str; 7] = [
    "January", "February", "March", "April", "May", "June", "all",
];

/// Weekday names offered by the day filter, Monday first, plus the "all"
/// catch-all. Index order matches `chrono::Weekday::num_days_from_monday`.
pub const WEEKDAYS: [&str; 8] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
    "all",
];

/// Sentinel meaning "no month/day filter selected".
pub const ALL: i32 = -1;

/// Maximum number of times an interactive prompt is repeated before the
/// selection is treated as invalid.
pub const MAX_PROMPT_ATTEMPTS: u32 = 3;

/// CSV column names as they appear in the published datasets
pub mod columns {
    pub const START_TIME: &str = "Start Time";
    pub const END_TIME: &str = "End Time";
    pub const TRIP_DURATION: &str = "Trip Duration";
    pub const START_STATION: &str = "Start Station";
    pub const END_STATION: &str = "End Station";
    pub const USER_TYPE: &str = "User Type";
    pub const GENDER: &str = "Gender";
    pub const BIRTH_YEAR: &str = "Birth Year";
}

/// Progress animation geometry and timing
pub mod progress {
    /// Width of the dotted track the highlight slides across
    pub const TRACK_WIDTH: usize = 20;

    /// The sliding highlight drawn over the track
    pub const HIGHLIGHT: &str = "oooo";

    /// Milliseconds between animation steps
    pub const STEP_MS: u64 = 100;

    /// Maximum animation steps before the indicator stops on its own
    pub const MAX_STEPS: usize = 48;
}

/// Raw-data pager page sizes
pub mod pager {
    /// Rows shown per page
    pub const PAGE_ROWS: usize = 5;

    /// Upper bound on rows shown across all pages of one pager session
    pub const MAX_ROWS: usize = 25;
}
