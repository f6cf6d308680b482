//! fieldfmt - unified display formatting for heterogeneous data-field values
//!
//! This crate converts raw textual field values (decimals, dates, times,
//! datetimes) into locale-consistent display strings, driven by a declared
//! field type, a display format, and a numeric precision. It accepts the
//! heterogeneous textual encodings real data warehouses emit and degrades
//! gracefully: formatting never fails, it falls back to an empty string or
//! the original value instead.

pub mod error;
pub mod field;
pub mod locale;
pub mod options;
pub mod patterns;

mod formatter;

pub use error::DatetimeParseError;
pub use field::{FieldFormat, FieldType};
pub use formatter::{format_field_value, format_field_value_with, FieldFormatter};
pub use locale::Locale;
pub use options::FormatOptions;
