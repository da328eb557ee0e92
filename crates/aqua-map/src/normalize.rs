//! Column label normalization.

/// Converts a raw column label into its comparison key.
///
/// Underscores, parentheses and whitespace are removed, the rest is
/// lowercased, and trailing `c` characters (a Celsius unit suffix such as
/// `Temp_C`) are stripped. Normalizing a key again returns the same key.
pub fn normalize_label(raw: &str) -> String {
    let mut key = raw
        .chars()
        .filter(|ch| !matches!(ch, '_' | '(' | ')') && !ch.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    let kept = key.trim_end_matches('c').len();
    key.truncate(kept);
    key
}

/// True when one key contains the other. Empty keys never match.
pub fn keys_match(label_key: &str, field_key: &str) -> bool {
    if label_key.is_empty() || field_key.is_empty() {
        return false;
    }
    field_key.contains(label_key) || label_key.contains(field_key)
}
