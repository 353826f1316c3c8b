/// Indefinite article selection.

/// Returns `"an"` if `word` starts with a vowel letter (a, e, i, o, u;
/// case-insensitive), `"a"` otherwise.
///
/// Returns `None` for an empty or whitespace-only word: there is no head
/// word to put an article in front of.
pub fn article(word: &str) -> Option<&'static str> {
    let first = word.trim_start().chars().next()?;
    let is_vowel = first
        .to_lowercase()
        .next()
        .is_some_and(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'));
    Some(if is_vowel { "an" } else { "a" })
}
