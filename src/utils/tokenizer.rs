/// Split text into lowercase word tokens.
///
/// Tokens are maximal runs of alphanumeric characters; everything else is
/// a separator. Splitting happens on the lowercased text so `"JavaScript"`
/// yields the single token `"javascript"` (never `"java"`).
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|ch: char| !ch.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}
