//! Abbreviation generation for interactive option lists
//!
//! Two strategies are provided. Acronym abbreviations concatenate the
//! initials of multi-word names and suit city names ("New York City" →
//! "NYC"). Minimal-prefix abbreviations find the shortest left-prefix of
//! each name that is unique across the whole list, and suit single-concept
//! words ("month" → "m"). Both return the prompt lines to display and the
//! abbreviation → name map used to validate the response.

use std::collections::HashMap;
use tracing::warn;

/// Catch-all key assigned to any name containing "not"
const NONE_KEY: &str = "none";
/// Catch-all key assigned to any name containing "all"
const ALL_KEY: &str = "all";

/// Returns the initials of a name: the first character of each
/// space-separated word, original case preserved.
///
/// # Examples
/// ```
/// use ridestats::prompt::abbreviations::initials;
///
/// assert_eq!(initials("Chicago"), "C");
/// assert_eq!(initials("New York City"), "NYC");
/// ```
pub fn initials(name: &str) -> String {
    name.split(' ').filter_map(|word| word.chars().next()).collect()
}

/// Creates prompt lines and an abbreviation map for a list of names using
/// their initials.
///
/// Initials are not checked for uniqueness: if two names share them, the
/// later name overwrites the earlier entry and the earlier name becomes
/// unselectable by abbreviation. This matches the historical behavior and
/// is logged rather than treated as an error.
///
/// # Arguments
/// * `names` - The names to abbreviate, pairwise distinct
///
/// # Returns
/// * `Vec<String>` - One `"<Name> [<Abbr>]"` line per name, in input order
/// * `HashMap<String, String>` - Abbreviation → name
pub fn generate_acronym_prompts<S: AsRef<str>>(
    names: &[S],
) -> (Vec<String>, HashMap<String, String>) {
    let mut abbreviations = HashMap::new();
    let mut prompts = Vec::with_capacity(names.len());
    for name in names {
        let name = name.as_ref();
        let abbreviation = initials(name);
        if let Some(displaced) = abbreviations.insert(abbreviation.clone(), name.to_string()) {
            warn!("Initials {abbreviation} clash: {displaced} is no longer selectable by abbreviation");
        }
        prompts.push(format!("{name} [{abbreviation}]"));
    }
    (prompts, abbreviations)
}

/// Creates prompt lines and an abbreviation map for a list of names using
/// each name's shortest unique left-prefix.
///
/// Two catch-alls are recognized before prefix search, checked against the
/// raw name in this order: a name containing `"not"` gets the fixed key
/// `"none"`, a name containing `"all"` gets the fixed key `"all"`. Every
/// other name claims the shortest prefix not already taken; when a new name
/// reaches a prefix an earlier name holds, the earlier name is pushed one
/// character deeper and the contested slot is tombstoned so neither name
/// can reclaim it.
///
/// # Arguments
/// * `names` - The names to abbreviate, pairwise distinct
///
/// # Returns
/// * `Vec<String>` - One `"<Name> [<prefix>]"` line per surviving name, in
///   input order
/// * `HashMap<String, String>` - Prefix → name, tombstones removed
///
/// # Examples
/// ```
/// use ridestats::prompt::abbreviations::generate_prefix_prompts;
///
/// let (prompts, map) = generate_prefix_prompts(&["month", "day", "not at all"]);
/// assert_eq!(prompts, ["month [m]", "day [d]", "not at all [none]"]);
/// assert_eq!(map["m"], "month");
/// assert_eq!(map["none"], "not at all");
/// ```
pub fn generate_prefix_prompts<S: AsRef<str>>(
    names: &[S],
) -> (Vec<String>, HashMap<String, String>) {
    // None marks a tombstoned slot: the prefix stays claimed but resolves
    // to no name.
    let mut candidates: HashMap<String, Option<String>> = HashMap::new();

    for name in names {
        let name = name.as_ref();
        if name.contains("not") {
            candidates.insert(NONE_KEY.to_string(), Some(name.to_string()));
            continue;
        } else if name.contains("all") {
            candidates.insert(ALL_KEY.to_string(), Some(name.to_string()));
            continue;
        }
        for length in 1..=name.chars().count() {
            let prefix = char_prefix(name, length);
            if !candidates.contains_key(&prefix) {
                candidates.insert(prefix, Some(name.to_string()));
                break;
            }
            // Clash. A live occupant is displaced one character deeper and
            // its old slot tombstoned; a tombstone just blocks this length.
            if let Some(Some(previous)) = candidates.get(&prefix).cloned() {
                candidates.insert(prefix, None);
                candidates.insert(char_prefix(&previous, length + 1), Some(previous));
            }
        }
    }

    // Drop the tombstones and invert for prompt rendering
    let mut abbreviations = HashMap::new();
    let mut keys_by_name = HashMap::new();
    for (key, value) in candidates {
        if let Some(name) = value {
            keys_by_name.insert(name.clone(), key.clone());
            abbreviations.insert(key, name);
        }
    }
    let prompts = names
        .iter()
        .filter_map(|name| {
            let name = name.as_ref();
            keys_by_name.get(name).map(|key| format!("{name} [{key}]"))
        })
        .collect();

    (prompts, abbreviations)
}

/// First `length` characters of `name`, clamped to its length. Prefixes are
/// taken by character, not by byte.
fn char_prefix(name: &str, length: usize) -> String {
    name.chars().take(length).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_single_word() {
        assert_eq!(initials("Washington"), "W");
    }

    #[test]
    fn test_initials_preserve_case() {
        assert_eq!(initials("new york city"), "nyc");
    }

    #[test]
    fn test_acronym_prompts_for_cities() {
        let (prompts, map) =
            generate_acronym_prompts(&["Chicago", "New York City", "Washington"]);
        assert_eq!(
            prompts,
            ["Chicago [C]", "New York City [NYC]", "Washington [W]"]
        );
        assert_eq!(map.len(), 3);
        assert_eq!(map["C"], "Chicago");
        assert_eq!(map["NYC"], "New York City");
        assert_eq!(map["W"], "Washington");
    }

    #[test]
    fn test_acronym_clash_last_write_wins() {
        let (prompts, map) = generate_acronym_prompts(&["Washington", "Wilmington"]);
        // Both prompt lines render, but only the later name is selectable
        assert_eq!(prompts, ["Washington [W]", "Wilmington [W]"]);
        assert_eq!(map.len(), 1);
        assert_eq!(map["W"], "Wilmington");
    }

    #[test]
    fn test_prefix_prompts_without_clashes() {
        let (prompts, map) = generate_prefix_prompts(&["month", "day", "not at all"]);
        assert_eq!(prompts, ["month [m]", "day [d]", "not at all [none]"]);
        assert_eq!(map.len(), 3);
        assert_eq!(map["m"], "month");
        assert_eq!(map["d"], "day");
        assert_eq!(map["none"], "not at all");
    }

    #[test]
    fn test_prefix_clash_deepens_earlier_name() {
        let (prompts, map) = generate_prefix_prompts(&["march", "may"]);
        // "may" reaches "m" second, so "march" is pushed to "ma"... which
        // "may" also contests, leaving "march"/"may" at three characters.
        assert_eq!(map["mar"], "march");
        assert_eq!(map["may"], "may");
        assert!(!map.contains_key("m"));
        assert!(!map.contains_key("ma"));
        assert_eq!(prompts, ["march [mar]", "may [may]"]);
    }

    #[test]
    fn test_prefix_catch_all_none_wins_over_all() {
        // "not at all" contains both substrings; "not" is checked first
        let (_, map) = generate_prefix_prompts(&["not at all"]);
        assert_eq!(map.len(), 1);
        assert_eq!(map["none"], "not at all");
    }

    #[test]
    fn test_prefix_catch_all_positions_are_irrelevant() {
        let (_, map) = generate_prefix_prompts(&["all", "Monday", "not at all"]);
        assert_eq!(map["all"], "all");
        assert_eq!(map["none"], "not at all");
        assert_eq!(map["M"], "Monday");
    }

    #[test]
    fn test_prefix_idempotence() {
        let names = ["January", "June", "July", "all"];
        let first = generate_prefix_prompts(&names);
        let second = generate_prefix_prompts(&names);
        assert_eq!(first, second);
    }

    #[test]
    fn test_prefix_keys_round_trip() {
        let names = ["Monday", "Tuesday", "Thursday", "Sunday", "Saturday"];
        let (_, map) = generate_prefix_prompts(&names);
        for (key, name) in &map {
            assert!(name.starts_with(key.as_str()), "{key} is not a prefix of {name}");
            assert!(names.contains(&name.as_str()));
        }
        assert_eq!(map.len(), names.len());
    }

    #[test]
    fn test_prefix_multibyte_names() {
        let (_, map) = generate_prefix_prompts(&["Äänekoski", "Ähtäri"]);
        assert_eq!(map["Ää"], "Äänekoski");
        assert_eq!(map["Äh"], "Ähtäri");
    }
}
