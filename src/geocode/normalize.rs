use crate::domain::GeocodeInput;

const PART_SEPARATOR: &str = ", ";

/// Same set as JavaScript's `String.prototype.trim`: Unicode white space plus
/// U+FEFF, without NEL (U+0085)
fn is_trimmed(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Join the trimmed, non-empty address parts in field order.
///
/// Returns an empty string when every part is missing or blank.
pub fn build_query(input: &GeocodeInput) -> String {
    input
        .parts()
        .into_iter()
        .flatten()
        .map(|part| part.trim_matches(is_trimmed))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(PART_SEPARATOR)
}
