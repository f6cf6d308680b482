//! Error types for datetime interpretation.
//!
//! The formatting entry points never return errors; unparseable input
//! resolves to a sentinel string instead. These types exist on the public
//! parse surface in [`crate::patterns`], for callers that need to tell a
//! malformed value apart from one that is already displayable as-is.

use thiserror::Error;

/// Errors that can occur when interpreting a raw datetime value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatetimeParseError {
    #[error("no candidate pattern matched '{value}'")]
    NoPatternMatched { value: String },

    #[error("'{value}' is not a year-month-day date")]
    NotYearMonthDay { value: String },
}
