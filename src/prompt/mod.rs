//! Interactive prompt engine: abbreviation generation, option enumeration,
//! and the bounded selection loop.

pub mod abbreviations;
pub mod selection;

use crate::error::AppError;
use std::collections::HashMap;

pub use abbreviations::{generate_acronym_prompts, generate_prefix_prompts};
pub use selection::{select_from_reader, select_from_stdin};

/// How abbreviations are derived from the option names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbbreviationStrategy {
    /// Initials of each word, suited to composite names like cities
    Acronym,
    /// Shortest unique left-prefix, suited to single-concept words
    MinimalPrefix,
}

/// Joins prompt lines into one enumeration: `"A, B or C"`.
///
/// A single line is returned unchanged. Callers must not pass an empty
/// list; that is a precondition, not a handled case.
pub fn join_options(prompts: &[String]) -> String {
    debug_assert!(!prompts.is_empty(), "join_options requires at least one option");
    match prompts {
        [single] => single.clone(),
        [rest @ .., last] => format!("{} or {}", rest.join(", "), last),
        [] => String::new(),
    }
}

/// Builds the enumerated option text and the abbreviation map for a list
/// of names under the given strategy.
pub fn build_options<S: AsRef<str>>(
    names: &[S],
    strategy: AbbreviationStrategy,
) -> (String, HashMap<String, String>) {
    let (prompts, abbreviations) = match strategy {
        AbbreviationStrategy::Acronym => generate_acronym_prompts(names),
        AbbreviationStrategy::MinimalPrefix => generate_prefix_prompts(names),
    };
    (join_options(&prompts), abbreviations)
}

/// Displays a selection prompt on stdout and resolves one line of stdin
/// input to a full option name.
///
/// # Arguments
/// * `names` - The selectable option names, pairwise distinct, non-empty
/// * `strategy` - How to abbreviate the names
/// * `header` - Leading question text, e.g. "Would you like to see data for"
///
/// # Returns
/// * `Ok(String)` - The selected full name
/// * `Err(AppError::InvalidSelection)` - All attempts were invalid
pub async fn show_prompt<S: AsRef<str>>(
    names: &[S],
    strategy: AbbreviationStrategy,
    header: &str,
) -> Result<String, AppError> {
    let (options_text, abbreviations) = build_options(names, strategy);
    let question = format!("{header} {options_text}?");
    select_from_stdin(&question, &abbreviations).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_options_single() {
        assert_eq!(join_options(&["X".to_string()]), "X");
    }

    #[test]
    fn test_join_options_pair() {
        assert_eq!(
            join_options(&["A".to_string(), "B".to_string()]),
            "A or B"
        );
    }

    #[test]
    fn test_join_options_three() {
        assert_eq!(
            join_options(&["A".to_string(), "B".to_string(), "C".to_string()]),
            "A, B or C"
        );
    }

    #[test]
    fn test_build_options_acronym_enumeration() {
        let (text, map) = build_options(
            &["Chicago", "New York City", "Washington"],
            AbbreviationStrategy::Acronym,
        );
        assert_eq!(text, "Chicago [C], New York City [NYC] or Washington [W]");
        assert_eq!(map["NYC"], "New York City");
    }

    #[test]
    fn test_build_options_minimal_prefix_enumeration() {
        let (text, map) = build_options(
            &["month", "day", "not at all"],
            AbbreviationStrategy::MinimalPrefix,
        );
        assert_eq!(text, "month [m], day [d] or not at all [none]");
        assert_eq!(map["none"], "not at all");
    }
}
