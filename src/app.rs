//! Session flow: filter prompts, data loading, statistics, restart loop.

use crate::constants::{ALL, MONTHS, WEEKDAYS};
use crate::data::discovery::{city_name_from_csv, csv_name_from_city, list_city_csvs};
use crate::data::{load_city_data, stats};
use crate::error::AppError;
use crate::prompt::{AbbreviationStrategy, show_prompt};
use crate::ui::{ProgressHandle, colors};
use std::io::Write;
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

/// The chosen dataset and time filters for one session pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filters {
    /// CSV file name of the selected city dataset
    pub csv: String,
    /// 1-based month to filter by, or `ALL`
    pub month: i32,
    /// Weekday to filter by (0 = Monday), or `ALL`
    pub day: i32,
}

/// Asks the user to pick a city and an optional month or weekday filter.
/// City options come from the CSV files discovered in `data_dir`.
pub async fn get_filters(data_dir: &Path) -> Result<Filters, AppError> {
    let welcome = "\nHello! Let's explore some US bikeshare data!";
    println!("{}", colors::paint(welcome, colors::header_fg()));
    println!(
        "{}",
        colors::paint(&"-".repeat(welcome.len() - 1), colors::header_fg())
    );

    let csvs = list_city_csvs(data_dir)?;
    let cities: Vec<String> = csvs.iter().map(|csv| city_name_from_csv(csv)).collect();
    let city = show_prompt(
        &cities,
        AbbreviationStrategy::Acronym,
        "Would you like to see data for",
    )
    .await?;

    let date_filter = show_prompt(
        &["month", "day", "not at all"],
        AbbreviationStrategy::MinimalPrefix,
        "Would you like to filter the data by",
    )
    .await?;

    let mut stats_header = format!("\nShowing statistics for {city}");
    let mut month = ALL;
    let mut day = ALL;

    if date_filter == "month" {
        let month_name = show_prompt(&MONTHS, AbbreviationStrategy::MinimalPrefix, "Which month -")
            .await?;
        if month_name != "all"
            && let Some(index) = MONTHS.iter().position(|m| *m == month_name)
        {
            month = index as i32 + 1;
            stats_header = format!("{stats_header} in the month of {month_name}");
        }
    } else if date_filter == "day" {
        let day_name = show_prompt(&WEEKDAYS, AbbreviationStrategy::MinimalPrefix, "Which day -")
            .await?;
        if day_name != "all"
            && let Some(index) = WEEKDAYS.iter().position(|d| *d == day_name)
        {
            day = index as i32;
            stats_header = format!("{stats_header} on {day_name}s");
        }
    }

    println!("{}", colors::paint(&stats_header, colors::header_fg()));
    println!(
        "{}",
        colors::paint(&"-".repeat(stats_header.len() - 1), colors::header_fg())
    );
    info!("Filters selected: city={city}, month={month}, day={day}");

    Ok(Filters {
        csv: csv_name_from_city(&city),
        month,
        day,
    })
}

/// One full exploration pass: prompt for filters, load the dataset, and
/// print all four statistics displays.
pub async fn run_session(data_dir: &Path) -> Result<(), AppError> {
    let filters = get_filters(data_dir).await?;

    println!("{}", colors::paint("\nLoading data...", colors::info_fg()));
    let progress = ProgressHandle::start();
    let data = load_city_data(data_dir.join(&filters.csv), filters.month, filters.day).await;
    progress.stop().await;
    let data = data?;

    stats::time_stats(&data).await?;
    stats::station_stats(&data).await?;
    stats::trip_duration_stats(&data).await?;
    stats::user_stats(&data).await?;
    Ok(())
}

/// Runs exploration sessions until the user declines to restart. A failed
/// session (bad selection, unreadable dataset) is reported and the restart
/// question is still asked.
pub async fn run(data_dir: &Path) -> Result<(), AppError> {
    let mut reader = BufReader::new(tokio::io::stdin());
    loop {
        match run_session(data_dir).await {
            Err(AppError::InputClosed) => {
                // No more input is coming; skip the restart question
                println!("\nBye!");
                return Ok(());
            }
            Err(e) => println!("{}", colors::paint(&e.to_string(), colors::error_fg())),
            Ok(()) => {}
        }

        print!("\nWould you like to restart? Enter yes or no.\n> ");
        std::io::stdout().flush()?;
        let mut line = String::new();
        let bytes = reader.read_line(&mut line).await?;
        if bytes == 0 || !line.trim().eq_ignore_ascii_case("yes") {
            println!("\nBye!");
            return Ok(());
        }
    }
}
