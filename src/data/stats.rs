//! Descriptive statistics over a loaded city dataset
//!
//! Four displays, matching the classic bikeshare exploration flow: travel
//! times, stations and trips, trip durations, and user demographics. Each
//! display prints a colored notice, animates progress while computing,
//! reports elapsed time, and offers a raw-data pager over the columns it
//! summarized.

use crate::constants::{MONTHS, WEEKDAYS, pager};
use crate::data::loader::CityData;
use crate::error::AppError;
use crate::ui::{ProgressHandle, colors};
use std::collections::HashMap;
use std::hash::Hash;
use std::io::Write;
use std::time::Instant;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// Most frequent value, ties broken toward the value seen first.
pub fn most_common<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, (usize, usize)> = HashMap::new();
    for (index, value) in values.into_iter().enumerate() {
        let entry = counts.entry(value).or_insert((0, index));
        entry.0 += 1;
    }
    counts
        .into_iter()
        .max_by(|a, b| a.1.0.cmp(&b.1.0).then(b.1.1.cmp(&a.1.1)))
        .map(|(value, _)| value)
}

/// Occurrence counts sorted by descending count, ties toward the value
/// seen first.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, (usize, usize)> = HashMap::new();
    for (index, value) in values.into_iter().enumerate() {
        let entry = counts.entry(value).or_insert((0, index));
        entry.0 += 1;
    }
    let mut sorted: Vec<_> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.0.cmp(&a.1.0).then(a.1.1.cmp(&b.1.1)));
    sorted.into_iter().map(|(value, (count, _))| (value, count)).collect()
}

/// 12-hour clock label for an hour of day: 0 → "12am", 13 → "1pm".
pub fn hour_label(hour: u32) -> String {
    let label = if hour % 12 == 0 { 12 } else { hour % 12 };
    let suffix = if hour < 12 { "am" } else { "pm" };
    format!("{label}{suffix}")
}

/// Displays statistics on the most frequent times of travel.
pub async fn time_stats(data: &CityData) -> Result<(), AppError> {
    let notice = "Calculating The Most Frequent Times of Travel...";
    println!("{}", colors::paint(&format!("\n{notice}"), colors::info_fg()));
    let started = Instant::now();

    let progress = ProgressHandle::start();
    let mut output = Vec::new();

    if data.month_visible
        && let Some(month) = most_common(data.trips.iter().map(|t| t.month))
    {
        output.push(format!(
            "\nThe most popular month of departure is {}.",
            MONTHS[(month - 1) as usize]
        ));
    }

    if data.day_visible
        && let Some(weekday) = most_common(data.trips.iter().map(|t| t.weekday))
    {
        output.push(format!(
            "\nThe most popular day of departure is {}.",
            WEEKDAYS[weekday as usize]
        ));
    }

    if let Some(hour) = most_common(data.trips.iter().map(|t| t.hour)) {
        output.push(format!(
            "\nThe most common hour of departure is {}",
            hour_label(hour)
        ));
    }

    output.push(format!("\nThis took {} seconds.", started.elapsed().as_secs_f64()));
    progress.stop().await;

    println!("{}", colors::paint(&output.join("\n"), colors::info_fg()));
    print_divider(notice);

    let rows: Vec<String> = data
        .trips
        .iter()
        .map(|t| t.start_time.format("%Y-%m-%d %H:%M:%S").to_string())
        .collect();
    offer_raw_data(&rows).await?;
    print_divider(notice);
    Ok(())
}

/// Displays statistics on the most popular stations and trip.
pub async fn station_stats(data: &CityData) -> Result<(), AppError> {
    let notice = "Calculating The Most Popular Stations and Trip...";
    println!("{}", colors::paint(&format!("\n{notice}"), colors::info_fg()));
    let started = Instant::now();

    let progress = ProgressHandle::start();
    let mut output = Vec::new();

    if let Some(station) = most_common(data.trips.iter().map(|t| t.start_station.as_str())) {
        output.push(format!("\nThe most commonly used start station is {station}"));
    }
    if let Some(station) = most_common(data.trips.iter().map(|t| t.end_station.as_str())) {
        output.push(format!("\nThe most commonly used end station is {station}"));
    }
    if let Some(trip) = most_common(
        data.trips
            .iter()
            .map(|t| format!("{} to {}", t.start_station, t.end_station)),
    ) {
        output.push(format!(
            "\nThe most frequent combination of start station and end station trip is {trip}"
        ));
    }

    output.push(format!("\nThis took {} seconds.", started.elapsed().as_secs_f64()));
    progress.stop().await;

    println!("{}", colors::paint(&output.join("\n"), colors::info_fg()));
    print_divider(notice);

    let rows: Vec<String> = data
        .trips
        .iter()
        .map(|t| format!("{}  {}", t.start_station, t.end_station))
        .collect();
    offer_raw_data(&rows).await?;
    print_divider(notice);
    Ok(())
}

/// Displays statistics on the total and average trip duration.
pub async fn trip_duration_stats(data: &CityData) -> Result<(), AppError> {
    let notice = "Calculating Trip Duration...";
    println!("{}", colors::paint(&format!("\n{notice}"), colors::info_fg()));
    let started = Instant::now();

    let progress = ProgressHandle::start();
    let total: f64 = data.trips.iter().map(|t| t.duration).sum();
    let mean = if data.trips.is_empty() {
        0.0
    } else {
        total / data.trips.len() as f64
    };

    let output = [
        format!("\nThe total travel time is {} seconds", total.round() as i64),
        format!("\nThe mean travel time is {} seconds", mean.round() as i64),
        format!("\nThis took {} seconds.", started.elapsed().as_secs_f64()),
    ];
    progress.stop().await;

    println!("{}", colors::paint(&output.join("\n"), colors::info_fg()));
    print_divider(notice);

    let rows: Vec<String> = data.trips.iter().map(|t| format!("{}", t.duration)).collect();
    offer_raw_data(&rows).await?;
    print_divider(notice);
    Ok(())
}

/// Displays statistics on the riders themselves: user types, and where the
/// dataset has them, gender and birth year counts.
pub async fn user_stats(data: &CityData) -> Result<(), AppError> {
    let notice = "Calculating User Stats...";
    println!("{}", colors::paint(&format!("\n{notice}"), colors::info_fg()));
    let started = Instant::now();

    let progress = ProgressHandle::start();
    let mut output = Vec::new();
    let mut raw_rows: Vec<String> = data
        .trips
        .iter()
        .map(|t| t.user_type.clone().unwrap_or_default())
        .collect();

    output.push("\nCounts of user types\n".to_string());
    for (kind, count) in value_counts(data.trips.iter().filter_map(|t| t.user_type.as_deref())) {
        output.push(format!("{kind}: {count}"));
    }

    if data.has_gender {
        output.push("\nCounts of genders\n".to_string());
        for (kind, count) in value_counts(data.trips.iter().filter_map(|t| t.gender.as_deref())) {
            output.push(format!("{kind}: {count}"));
        }
        for (row, trip) in raw_rows.iter_mut().zip(&data.trips) {
            if let Some(gender) = &trip.gender {
                row.push_str(&format!("  {gender}"));
            }
        }
    }

    if data.has_birth_year {
        output.push("\nCounts of year of birth\n".to_string());
        for (year, count) in value_counts(data.trips.iter().filter_map(|t| t.birth_year)) {
            output.push(format!("{year}: {count}"));
        }
        for (row, trip) in raw_rows.iter_mut().zip(&data.trips) {
            if let Some(year) = trip.birth_year {
                row.push_str(&format!("  {year}"));
            }
        }
    }

    output.push(format!("\nThis took {} seconds.", started.elapsed().as_secs_f64()));
    progress.stop().await;

    println!("{}", colors::paint(&output.join("\n"), colors::info_fg()));
    print_divider(notice);
    offer_raw_data(&raw_rows).await?;
    print_divider(notice);
    Ok(())
}

fn print_divider(notice: &str) {
    println!("{}", colors::paint(&"-".repeat(notice.len()), colors::info_fg()));
}

/// Stdin-backed raw-data pager offered after each statistics block.
async fn offer_raw_data(rows: &[String]) -> Result<(), AppError> {
    let mut reader = BufReader::new(tokio::io::stdin());
    page_raw_data(&mut reader, rows)
        .await
        .map(|_| ())
}

/// Pages through `rows` five at a time, up to twenty-five rows, asking
/// before each page whether to continue. Returns the number of rows shown.
pub async fn page_raw_data<R>(reader: &mut R, rows: &[String]) -> Result<usize, AppError>
where
    R: AsyncBufRead + Unpin,
{
    print!(
        "{}",
        colors::paint("\nWould you like to view the raw data?\n> ", colors::header_fg())
    );
    std::io::stdout().flush()?;
    if !read_yes(reader).await? {
        return Ok(0);
    }

    let mut shown = 0;
    while shown < pager::MAX_ROWS && shown < rows.len() {
        let page_end = (shown + pager::PAGE_ROWS).min(rows.len());
        for row in &rows[shown..page_end] {
            println!("{}", colors::paint(row, colors::data_fg()));
        }
        shown = page_end;
        if shown >= pager::MAX_ROWS || shown >= rows.len() {
            break;
        }
        print!(
            "{}",
            colors::paint("Would you like to view more raw data?\n> ", colors::header_fg())
        );
        std::io::stdout().flush()?;
        if !read_yes(reader).await? {
            break;
        }
    }
    Ok(shown)
}

async fn read_yes<R>(reader: &mut R) -> Result<bool, AppError>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    reader.read_line(&mut line).await?;
    Ok(line.trim().eq_ignore_ascii_case("yes"))
}
