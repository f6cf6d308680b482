//! Field value formatting engine

mod date;
mod number;

use crate::field::{FieldFormat, FieldType};
use crate::options::FormatOptions;

/// Format a raw field value for display.
///
/// This is the single entry point consumed by the charting layer and any
/// other field-rendering collaborator. It never fails: absent input renders
/// as the empty string, unparseable numeric text renders as the empty
/// string, unparseable temporal text passes through unchanged, and field
/// types outside the formattable set pass through unchanged.
///
/// # Examples
/// ```
/// use fieldfmt::{format_field_value, FieldFormat, FieldType};
///
/// assert_eq!(
///     format_field_value(Some("3000000"), FieldType::Decimal, FieldFormat::Millions, 1),
///     "3.0M"
/// );
/// assert_eq!(
///     format_field_value(Some("2023-01-05"), FieldType::Date, FieldFormat::DdMmm, 0),
///     "5 Jan"
/// );
/// assert_eq!(
///     format_field_value(None, FieldType::Decimal, FieldFormat::Number, 2),
///     ""
/// );
/// ```
pub fn format_field_value(
    value: Option<&str>,
    field_type: FieldType,
    format: FieldFormat,
    precision: usize,
) -> String {
    format_field_value_with(value, field_type, format, precision, &FormatOptions::default())
}

/// Format a raw field value for display with explicit options.
pub fn format_field_value_with(
    value: Option<&str>,
    field_type: FieldType,
    format: FieldFormat,
    precision: usize,
    opts: &FormatOptions,
) -> String {
    let Some(value) = value else {
        return String::new();
    };
    if value.is_empty() {
        return String::new();
    }

    match field_type {
        FieldType::Decimal => number::format_numeric(value, format, precision, opts),
        FieldType::Date | FieldType::Datetime | FieldType::Time => {
            date::format_datetime(value, format)
        }
        FieldType::Text | FieldType::Boolean => value.to_string(),
    }
}

/// A reusable binding of field type, display format and precision.
///
/// Chart layers typically build one formatter per rendered field and apply
/// it to every data point of that field; this type is that binding.
#[derive(Debug, Clone)]
pub struct FieldFormatter {
    field_type: FieldType,
    format: FieldFormat,
    precision: usize,
    options: FormatOptions,
}

impl FieldFormatter {
    /// Create a formatter with default options.
    pub fn new(field_type: FieldType, format: FieldFormat, precision: usize) -> Self {
        FieldFormatter {
            field_type,
            format,
            precision,
            options: FormatOptions::default(),
        }
    }

    /// Replace the formatting options.
    pub fn with_options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }

    /// Format one raw value under this binding.
    pub fn format(&self, value: Option<&str>) -> String {
        format_field_value_with(
            value,
            self.field_type,
            self.format,
            self.precision,
            &self.options,
        )
    }
}
