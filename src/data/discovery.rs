//! Dataset discovery: which city CSV files exist in the data directory,
//! and how file names map to display names.

use crate::error::AppError;
use std::path::Path;

/// Determines whether a path names an existing CSV file by its extension.
pub fn is_csv_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Derives the human-readable city name from a CSV file name.
///
/// # Examples
/// ```
/// use ridestats::data::discovery::city_name_from_csv;
///
/// assert_eq!(city_name_from_csv("new_york_city.csv"), "New York City");
/// ```
pub fn city_name_from_csv(csv_name: &str) -> String {
    let stem = csv_name.strip_suffix(".csv").unwrap_or(csv_name);
    stem.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Derives the CSV file name for a city's dataset from its display name.
pub fn csv_name_from_city(city: &str) -> String {
    format!("{}.csv", city.replace(' ', "_").to_lowercase())
}

/// Lists the CSV file names found directly under `dir`, sorted for a
/// stable prompt order. An empty result is an error: the tool has nothing
/// to explore without datasets.
pub fn list_city_csvs(dir: &Path) -> Result<Vec<String>, AppError> {
    let mut csvs = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if is_csv_file(&path)
            && let Some(name) = path.file_name().and_then(|n| n.to_str())
        {
            csvs.push(name.to_string());
        }
    }
    if csvs.is_empty() {
        return Err(AppError::NoDatasets {
            dir: dir.display().to_string(),
        });
    }
    csvs.sort();
    Ok(csvs)
}
