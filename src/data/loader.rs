//! CSV loading and time filtering
//!
//! Reads one city's trip CSV into typed records, derives the month,
//! weekday, and hour of each trip from its start time, and applies the
//! interactively chosen month or weekday filter. Mirroring the original
//! datasets, the `Gender` and `Birth Year` columns are optional.

use crate::constants::{ALL, columns};
use crate::error::AppError;
use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Timestamp format used by the published bikeshare CSVs
const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row as it appears in the CSV file
#[derive(Debug, Clone, Deserialize)]
struct TripRecord {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

/// One trip with its derived time fields
#[derive(Debug, Clone)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    /// 1-based calendar month of departure
    pub month: u32,
    /// Weekday of departure, 0 = Monday
    pub weekday: u32,
    /// Hour of departure, 0-23
    pub hour: u32,
    /// Trip duration in seconds
    pub duration: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

/// A loaded, filtered city dataset
#[derive(Debug, Clone)]
pub struct CityData {
    pub trips: Vec<Trip>,
    /// False when the data was filtered down to a single month, in which
    /// case the most-common-month statistic is meaningless and skipped
    pub month_visible: bool,
    /// False when the data was filtered down to a single weekday
    pub day_visible: bool,
    /// Whether the source file carried a `Gender` column
    pub has_gender: bool,
    /// Whether the source file carried a `Birth Year` column
    pub has_birth_year: bool,
}

/// Loads a city CSV and applies the month/weekday filters. `ALL` for
/// either filter means no filtering on that axis. Parsing runs on the
/// blocking thread pool.
pub async fn load_city_data(path: PathBuf, month: i32, day: i32) -> Result<CityData, AppError> {
    tokio::task::spawn_blocking(move || read_trips(&path, month, day))
        .await
        .map_err(|e| AppError::Io(std::io::Error::other(e)))?
}

fn read_trips(path: &Path, month: i32, day: i32) -> Result<CityData, AppError> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    let has_column = |name: &str| headers.iter().any(|h| h == name);
    for required in [
        columns::START_TIME,
        columns::TRIP_DURATION,
        columns::START_STATION,
        columns::END_STATION,
        columns::USER_TYPE,
    ] {
        if !has_column(required) {
            return Err(AppError::MissingColumn {
                file: path.display().to_string(),
                column: required.to_string(),
            });
        }
    }
    let has_gender = has_column(columns::GENDER);
    let has_birth_year = has_column(columns::BIRTH_YEAR);

    let mut trips = Vec::new();
    for record in reader.deserialize::<TripRecord>() {
        let record = record?;
        let start_time = NaiveDateTime::parse_from_str(&record.start_time, START_TIME_FORMAT)
            .map_err(|e| {
                AppError::datetime_parse_error(format!(
                    "bad start time {:?}: {e}",
                    record.start_time
                ))
            })?;
        let trip = Trip {
            month: start_time.month(),
            weekday: start_time.weekday().num_days_from_monday(),
            hour: start_time.hour(),
            duration: record.trip_duration,
            start_station: record.start_station,
            end_station: record.end_station,
            user_type: record.user_type,
            gender: record.gender.filter(|g| !g.is_empty()),
            birth_year: record.birth_year.map(|y| y as i32),
            start_time,
        };
        if month != ALL && trip.month != month as u32 {
            continue;
        }
        if day != ALL && trip.weekday != day as u32 {
            continue;
        }
        trips.push(trip);
    }
    info!(
        "Loaded {} trips from {} (month filter: {month}, day filter: {day})",
        trips.len(),
        path.display()
    );

    Ok(CityData {
        trips,
        month_visible: month == ALL,
        day_visible: day == ALL,
        has_gender,
        has_birth_year,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    const FULL_CSV: &str = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
2017-01-02 09:07:57,2017-01-02 09:20:53,776,State St,Clark St,Subscriber,Male,1992.0
2017-02-14 17:02:11,2017-02-14 17:30:41,1710,Clark St,State St,Customer,,
2017-02-15 17:45:04,2017-02-15 18:00:00,896,Clark St,Wabash Ave,Subscriber,Female,1985.0
";

    #[test]
    fn test_read_trips_derives_time_fields() {
        let file = write_csv(FULL_CSV);
        let data = read_trips(file.path(), ALL, ALL).unwrap();
        assert_eq!(data.trips.len(), 3);

        let first = &data.trips[0];
        assert_eq!(first.month, 1);
        assert_eq!(first.weekday, 0); // 2017-01-02 is a Monday
        assert_eq!(first.hour, 9);
        assert_eq!(first.birth_year, Some(1992));
        assert!(data.has_gender);
        assert!(data.has_birth_year);
        assert!(data.month_visible);
        assert!(data.day_visible);
    }

    #[test]
    fn test_read_trips_filters_by_month() {
        let file = write_csv(FULL_CSV);
        let data = read_trips(file.path(), 2, ALL).unwrap();
        assert_eq!(data.trips.len(), 2);
        assert!(!data.month_visible);
        assert!(data.day_visible);
    }

    #[test]
    fn test_read_trips_filters_by_day() {
        let file = write_csv(FULL_CSV);
        // 2017-02-14 is a Tuesday
        let data = read_trips(file.path(), ALL, 1).unwrap();
        assert_eq!(data.trips.len(), 1);
        assert_eq!(data.trips[0].start_station, "Clark St");
        assert!(!data.day_visible);
    }

    #[test]
    fn test_read_trips_blank_gender_is_none() {
        let file = write_csv(FULL_CSV);
        let data = read_trips(file.path(), ALL, ALL).unwrap();
        assert_eq!(data.trips[1].gender, None);
        assert_eq!(data.trips[1].birth_year, None);
    }

    #[test]
    fn test_read_trips_without_optional_columns() {
        let file = write_csv(
            "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-03-05 12:00:00,2017-03-05 12:10:00,600,F St,G St,Subscriber
",
        );
        let data = read_trips(file.path(), ALL, ALL).unwrap();
        assert!(!data.has_gender);
        assert!(!data.has_birth_year);
        assert_eq!(data.trips[0].gender, None);
    }

    #[test]
    fn test_read_trips_missing_required_column() {
        let file = write_csv("Start Time,End Time\n2017-03-05 12:00:00,2017-03-05 12:10:00\n");
        let err = read_trips(file.path(), ALL, ALL).unwrap_err();
        assert!(matches!(err, AppError::MissingColumn { ref column, .. }
            if column == "Trip Duration"));
    }

    #[test]
    fn test_read_trips_rejects_malformed_start_time() {
        let file = write_csv(
            "\
Start Time,Trip Duration,Start Station,End Station,User Type
yesterday,600,F St,G St,Subscriber
",
        );
        let err = read_trips(file.path(), ALL, ALL).unwrap_err();
        assert!(matches!(err, AppError::DateTimeParse(_)));
    }
}
