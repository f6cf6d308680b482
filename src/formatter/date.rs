//! Date and time re-rendering per display format

use crate::field::FieldFormat;
use crate::patterns;

/// Format a raw temporal value according to a date/time format variant.
///
/// Date-only variants require the value to already be in the fixed
/// year-month-day shape; the remaining variants interpret the value against
/// the full candidate table. Either way a failed parse returns the value
/// unchanged, so callers can tell "displayable as-is" from "reformatted" by
/// comparing output to input.
///
/// The 12-hour variants (`YyyyMmDdHhMmSs`, `MmDdYyyyHhMmSs`, `HhMm`,
/// `HhMmSs`) render hours 01-12 without a meridiem marker.
pub fn format_datetime(value: &str, format: FieldFormat) -> String {
    match format {
        FieldFormat::DdMmm => render_date(value, "%-d %b"),
        FieldFormat::DdMmmYyyy => render_date(value, "%-d %b %Y"),
        FieldFormat::MmmDd => render_date(value, "%b %-d"),
        FieldFormat::MmmDdYyyy => render_date(value, "%b %-d %Y"),
        FieldFormat::MmmYyyy => render_date(value, "%b %Y"),
        FieldFormat::MmDd => render_date(value, "%m/%d"),
        FieldFormat::MmDdYy => render_date(value, "%m/%d/%y"),
        FieldFormat::YyyyMmDdHhMmSs => render_instant(value, "%Y-%m-%d %I:%M:%S"),
        FieldFormat::MmDdYyyyHhMmSs => render_instant(value, "%m/%d/%Y %I:%M:%S"),
        FieldFormat::HhMm => render_instant(value, "%I:%M"),
        FieldFormat::HhMm24 => render_instant(value, "%H:%M"),
        FieldFormat::HhMmSs => render_instant(value, "%I:%M:%S"),
        FieldFormat::HhMmSs24 => render_instant(value, "%H:%M:%S"),
        // Numeric format routed to a temporal field: nothing to do.
        _ => value.to_string(),
    }
}

fn render_date(value: &str, pattern: &str) -> String {
    match patterns::parse_date_only(value) {
        Ok(date) => date.format(pattern).to_string(),
        Err(_) => value.to_string(),
    }
}

fn render_instant(value: &str, pattern: &str) -> String {
    match patterns::parse_datetime(value) {
        Ok(instant) => instant.format(pattern).to_string(),
        Err(_) => value.to_string(),
    }
}
