//! Locale glyph data.

/// Locale settings for numeric formatting.
///
/// Month and weekday names come from the datetime render patterns, so the
/// locale only carries the glyphs the numeric formatter inserts.
#[derive(Debug, Clone)]
pub struct Locale {
    pub decimal_separator: char,
    pub thousands_separator: char,
    pub currency_symbol: &'static str,
    /// Sign glyph for negative values. The default locale uses the Unicode
    /// minus sign (U+2212), not the ASCII hyphen.
    pub minus_sign: char,
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us()
    }
}

impl Locale {
    /// US English locale.
    pub fn en_us() -> Self {
        Locale {
            decimal_separator: '.',
            thousands_separator: ',',
            currency_symbol: "$",
            minus_sign: '\u{2212}',
        }
    }
}
