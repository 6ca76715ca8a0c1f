//! Interactive selection loop
//!
//! Asks a question, reads one line at a time, and matches the response
//! case-insensitively against either the abbreviation or the full name.
//! The question is repeated up to [`MAX_PROMPT_ATTEMPTS`] times before the
//! selection fails.

use crate::constants::MAX_PROMPT_ATTEMPTS;
use crate::error::AppError;
use crate::ui::colors;
use std::collections::HashMap;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// Drives the read/validate/retry loop against an arbitrary line source.
///
/// Each attempt prints the question, reads one line, and compares its
/// lowercase form against every abbreviation and every full name in
/// `options`. The first match resolves to the full name. After the last
/// failed attempt the error carries the final raw input.
///
/// # Arguments
/// * `reader` - Line source; stdin in the application, a buffer in tests
/// * `question` - Full question text, without trailing newline
/// * `options` - Abbreviation → name map to validate against
///
/// # Returns
/// * `Ok(String)` - The selected full name
/// * `Err(AppError::InvalidSelection)` - No attempt matched
/// * `Err(AppError::InputClosed)` - The line source reached end of input
pub async fn select_from_reader<R>(
    reader: &mut R,
    question: &str,
    options: &HashMap<String, String>,
) -> Result<String, AppError>
where
    R: AsyncBufRead + Unpin,
{
    let mut last_input = String::new();
    for _ in 0..MAX_PROMPT_ATTEMPTS {
        print!(
            "{}",
            colors::paint(&format!("\n{question}\n> "), colors::info_fg())
        );
        std::io::stdout().flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line).await? == 0 {
            // End of input is not a failed attempt; the session ends here
            return Err(AppError::InputClosed);
        }
        let raw = line.trim_end_matches(['\n', '\r']).to_string();

        let lowercase = raw.to_lowercase();
        for (key, name) in options {
            if lowercase == key.to_lowercase() || lowercase == name.to_lowercase() {
                return Ok(name.clone());
            }
        }
        last_input = raw;
    }
    Err(AppError::invalid_selection(&last_input))
}

/// Stdin-backed wrapper around [`select_from_reader`].
pub async fn select_from_stdin(
    question: &str,
    options: &HashMap<String, String>,
) -> Result<String, AppError> {
    let mut reader = BufReader::new(tokio::io::stdin());
    select_from_reader(&mut reader, question, options).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city_options() -> HashMap<String, String> {
        HashMap::from([
            ("C".to_string(), "Chicago".to_string()),
            ("NYC".to_string(), "New York City".to_string()),
            ("W".to_string(), "Washington".to_string()),
        ])
    }

    #[tokio::test]
    async fn test_select_accepts_abbreviation_case_insensitively() {
        let mut input = &b"nyc\n"[..];
        let selected = select_from_reader(&mut input, "Pick a city?", &city_options())
            .await
            .unwrap();
        assert_eq!(selected, "New York City");
    }

    #[tokio::test]
    async fn test_select_accepts_full_name() {
        let mut input = &b"chicago\n"[..];
        let selected = select_from_reader(&mut input, "Pick a city?", &city_options())
            .await
            .unwrap();
        assert_eq!(selected, "Chicago");
    }

    #[tokio::test]
    async fn test_select_resolves_on_third_attempt() {
        let mut input = &b"xyz\nXYZ\nc\n"[..];
        let selected = select_from_reader(&mut input, "Pick a city?", &city_options())
            .await
            .unwrap();
        assert_eq!(selected, "Chicago");
    }

    #[tokio::test]
    async fn test_select_fails_after_three_misses() {
        let mut input = &b"a\nb\nq\nc\n"[..];
        let err = select_from_reader(&mut input, "Pick a city?", &city_options())
            .await
            .unwrap_err();
        // The fourth line would have matched, but only three attempts exist
        assert!(matches!(err, AppError::InvalidSelection { ref input } if input == "q"));
    }

    #[tokio::test]
    async fn test_select_marks_empty_final_input() {
        let mut input = &b"a\nb\n\n"[..];
        // Third attempt is a blank line, reported with the empty marker
        let err = select_from_reader(&mut input, "Pick a city?", &city_options())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidSelection { ref input } if input == "''"));
    }

    #[tokio::test]
    async fn test_select_stops_at_end_of_input() {
        let mut input = &b"a\n"[..];
        // One miss, then the source closes; remaining attempts are not burned
        let err = select_from_reader(&mut input, "Pick a city?", &city_options())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InputClosed));
    }

    #[tokio::test]
    async fn test_select_on_already_closed_input() {
        let mut input = &b""[..];
        let err = select_from_reader(&mut input, "Pick a city?", &city_options())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InputClosed));
    }

    #[tokio::test]
    async fn test_select_does_not_accept_partial_input() {
        let mut input = &b"New\nNew York\nNew York City\n"[..];
        let selected = select_from_reader(&mut input, "Pick a city?", &city_options())
            .await
            .unwrap();
        assert_eq!(selected, "New York City");
    }
}
