use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Multi-level sort key for human-facing text.
///
/// Primary ignores case and accents and puts punctuation, symbols and spaces
/// ahead of digits and letters. Secondary orders unaccented before accented,
/// tertiary orders lowercase before uppercase.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: Vec<(bool, char)>,
    secondary: String,
    tertiary: Vec<bool>,
}

impl CollationKey {
    pub fn new(text: &str) -> Self {
        let decomposed: String = text.nfd().collect();
        let secondary = decomposed.to_lowercase();
        let primary = secondary
            .chars()
            .filter(|c| !is_combining_mark(*c))
            .map(|c| (c.is_alphanumeric(), c))
            .collect();
        let tertiary = decomposed.chars().map(char::is_uppercase).collect();
        Self {
            primary,
            secondary,
            tertiary,
        }
    }
}
