//! End-to-end selection flow: build the options for a name list, run the
//! bounded read/validate/retry loop against scripted input, and check what
//! the user ends up with.

use ridestats::error::AppError;
use ridestats::prompt::{AbbreviationStrategy, build_options, select_from_reader};

async fn select_city(script: &[u8]) -> Result<String, AppError> {
    let (options_text, map) = build_options(
        &["Chicago", "New York City", "Washington"],
        AbbreviationStrategy::Acronym,
    );
    let question = format!("Would you like to see data for {options_text}?");
    let mut input = script;
    select_from_reader(&mut input, &question, &map).await
}

#[tokio::test]
async fn test_first_attempt_abbreviation_match() {
    assert_eq!(select_city(b"NYC\n").await.unwrap(), "New York City");
}

#[tokio::test]
async fn test_full_name_match_ignores_case() {
    assert_eq!(select_city(b"wAsHiNgToN\n").await.unwrap(), "Washington");
}

#[tokio::test]
async fn test_recovers_on_third_attempt() {
    // Two invalid attempts, then the lowercase abbreviation for Chicago
    assert_eq!(select_city(b"xyz\nXYZ\nc\n").await.unwrap(), "Chicago");
}

#[tokio::test]
async fn test_exhaustion_reports_last_input() {
    let err = select_city(b"xyz\nXYZ\nnope\n").await.unwrap_err();
    assert!(matches!(err, AppError::InvalidSelection { ref input } if input == "nope"));
}

#[tokio::test]
async fn test_exhaustion_on_blank_input_reports_marker() {
    let err = select_city(b"\n\n\n").await.unwrap_err();
    assert!(matches!(err, AppError::InvalidSelection { ref input } if input == "''"));
}

#[tokio::test]
async fn test_date_filter_flow_accepts_catch_all_key() {
    let (options_text, map) = build_options(
        &["month", "day", "not at all"],
        AbbreviationStrategy::MinimalPrefix,
    );
    let question = format!("Would you like to filter the data by {options_text}?");

    let mut input = &b"none\n"[..];
    let selected = select_from_reader(&mut input, &question, &map).await.unwrap();
    assert_eq!(selected, "not at all");
}

#[tokio::test]
async fn test_weekday_flow_with_prefix_keys() {
    let names = [
        "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday", "all",
    ];
    let (_, map) = build_options(&names, AbbreviationStrategy::MinimalPrefix);

    // "Su" resolves Sunday; "T" was tombstoned when Thursday displaced
    // Tuesday, so it matches nothing and the loop retries
    let mut input = &b"T\nSu\n"[..];
    let selected = select_from_reader(&mut input, "Which day -?", &map).await.unwrap();
    assert_eq!(selected, "Sunday");
}
