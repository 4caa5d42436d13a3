//! Identifier-to-title formatting.

/// Format an artifact identifier into a human-readable title.
///
/// Hyphens and underscores become spaces, camelCase boundaries are split,
/// and each word is capitalized: `"flockClaudeSonnet"` becomes
/// `"Flock Claude Sonnet"`. Empty input yields empty output.
pub fn format_title(name: &str) -> String {
    let mut spaced = String::with_capacity(name.len() + 8);
    let mut prev_lower = false;

    for ch in name.chars() {
        if ch == '-' || ch == '_' {
            spaced.push(' ');
            prev_lower = false;
            continue;
        }
        if prev_lower && ch.is_uppercase() {
            spaced.push(' ');
        }
        prev_lower = ch.is_lowercase();
        spaced.push(ch);
    }

    spaced
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character of a word, leaving the rest untouched.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
