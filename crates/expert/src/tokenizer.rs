#![forbid(unsafe_code)]

use std::collections::HashSet;

/// Accented characters folded to plain ASCII after lowercasing.
const FOLDS: &[(char, char)] = &[
    ('á', 'a'),
    ('à', 'a'),
    ('é', 'e'),
    ('í', 'i'),
    ('ó', 'o'),
    ('ú', 'u'),
    ('ü', 'u'),
    ('ñ', 'n'),
];

fn fold(c: char) -> char {
    FOLDS
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
        .unwrap_or(c)
}

/// Normalize free text for comparison.
///
/// Lowercases, folds the small accent table above, drops every character
/// that is not `[a-z0-9 ]` and collapses whitespace runs into one space.
/// The result never has leading or trailing spaces.
///
/// ```
/// assert_eq!(expert::normalize("Café Ñandú!!"), "cafe nandu");
/// ```
pub fn normalize(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .map(fold)
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ')
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Set of unique tokens of the normalized text.
pub fn token_set(text: &str) -> HashSet<String> {
    normalize(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
