//! Numeric formatting (scaling, fixed precision, grouping, decoration)

use crate::field::FieldFormat;
use crate::options::FormatOptions;

/// Format a raw numeric string according to a numeric format variant.
///
/// The value is scaled by the format's divisor (percent multiplies by 100
/// instead), rendered with exactly `precision` fractional digits, grouped
/// and decorated per the format, and signed with the locale's minus glyph.
/// Text that does not parse as a finite number is the recognized "no data"
/// outcome and renders as the empty string.
pub fn format_numeric(
    value: &str,
    format: FieldFormat,
    precision: usize,
    opts: &FormatOptions,
) -> String {
    let Ok(raw) = value.trim().parse::<f64>() else {
        return String::new();
    };
    if !raw.is_finite() {
        return String::new();
    }

    let scaled = if format == FieldFormat::Percent {
        raw * 100.0
    } else {
        raw / format.divisor()
    };

    let mut digits = format!("{:.*}", precision, scaled.abs());
    if format.groups_digits() {
        digits = group_thousands(&digits, opts.locale.thousands_separator);
    }
    if opts.locale.decimal_separator != '.' {
        digits = digits.replace('.', &opts.locale.decimal_separator.to_string());
    }

    let mut out = String::with_capacity(digits.len() + 4);
    if scaled < 0.0 {
        out.push(opts.locale.minus_sign);
    }
    if format.is_currency() {
        out.push_str(opts.locale.currency_symbol);
    }
    out.push_str(&digits);
    if let Some(suffix) = format.magnitude_suffix() {
        out.push(suffix);
    }
    if format == FieldFormat::Percent {
        out.push('%');
    }
    out
}

/// Insert grouping separators into the integer part of a rendered number.
///
/// `digits` is an unsigned fixed-point rendering ("1234567.89" or "1234567").
fn group_thousands(digits: &str, separator: char) -> String {
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(digits.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}
