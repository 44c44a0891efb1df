/// Splits `text` into lowercase word tokens.
///
/// A token is a maximal run of alphanumeric or `_` characters at least two
/// characters long, so `"Newton's"` yields `"newton"` and the lone `s` is dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| t.chars().count() >= 2)
        .map(str::to_string)
        .collect()
}
