//! Small text utilities shared by the extractors

/// Lower-case `text` and fold Spanish diacritics to their base letter.
///
/// Taxonomy terms are declared in this folded form, so "Cooperación",
/// "COOPERACION" and "cooperacion" all compare equal.
pub fn fold(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}

/// First `max` characters of `text`
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Longest prefix of `text` that fits in `max_bytes` without splitting a character
pub fn clip_to_bytes(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// The span `start..end` widened by up to `radius` characters on each side
pub fn context_window(text: &str, start: usize, end: usize, radius: usize) -> &str {
    let from = text[..start]
        .char_indices()
        .rev()
        .take(radius)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(start);
    let to = text[end..]
        .char_indices()
        .nth(radius)
        .map(|(i, _)| end + i)
        .unwrap_or(text.len());
    &text[from..to]
}

/// Expand a year token, resolving two-digit years around a pivot of 50:
/// `"51"` becomes 1951, `"50"` becomes 2050.
pub fn expand_year(token: &str) -> Option<i32> {
    let value: i32 = token.parse().ok()?;
    if token.len() == 2 {
        Some(if value > 50 { 1900 + value } else { 2000 + value })
    } else {
        Some(value)
    }
}

/// [`expand_year`] rendered back to text; tokens that are not two digits pass through
pub fn expand_year_token(token: &str) -> String {
    if token.len() == 2 {
        if let Some(year) = expand_year(token) {
            return year.to_string();
        }
    }
    token.to_string()
}
