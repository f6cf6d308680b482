//! Field types and display formats.
//!
//! These two enumerations are the vocabulary of the engine: the field type
//! selects which sub-formatter handles a value, and the format selects the
//! display variant within that sub-formatter. The numeric family's scaling
//! and decoration rules are static configuration expressed as methods here.

/// The semantic kind of a data field.
///
/// `Decimal` routes to the numeric formatter; `Date`, `Datetime` and `Time`
/// route to the datetime formatter. Any other kind passes values through
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldType {
    Decimal,
    Date,
    Datetime,
    Time,
    Text,
    Boolean,
}

impl FieldType {
    /// Returns true for the field kinds handled by the datetime formatter.
    pub fn is_temporal(&self) -> bool {
        matches!(self, FieldType::Date | FieldType::Datetime | FieldType::Time)
    }
}

/// A display format variant.
///
/// The set is closed and partitioned into two families: numeric formats
/// (`Auto` through `CurrencyBillions`) and date/time formats (`DdMmm`
/// through `HhMmSs24`). Each numeric format maps to exactly one
/// (divisor, decoration) pair; each date/time format maps to exactly one
/// render pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldFormat {
    Auto,
    Number,
    Percent,
    Currency,
    Thousands,
    Millions,
    Billions,
    CurrencyThousands,
    CurrencyMillions,
    CurrencyBillions,
    /// "5 Jan"
    DdMmm,
    /// "5 Jan 2023"
    DdMmmYyyy,
    /// "Jan 5"
    MmmDd,
    /// "Jan 5 2023"
    MmmDdYyyy,
    /// "Jan 2023"
    MmmYyyy,
    /// "01/05"
    MmDd,
    /// "01/05/23"
    MmDdYy,
    /// "2023-07-31 01:30:00" (12-hour clock)
    YyyyMmDdHhMmSs,
    /// "07/31/2023 01:30:00" (12-hour clock)
    MmDdYyyyHhMmSs,
    /// "01:30" (12-hour clock)
    HhMm,
    /// "13:30"
    HhMm24,
    /// "01:30:00" (12-hour clock)
    HhMmSs,
    /// "13:30:00"
    HhMmSs24,
}

impl FieldFormat {
    /// Returns true for the numeric format family.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            FieldFormat::Auto
                | FieldFormat::Number
                | FieldFormat::Percent
                | FieldFormat::Currency
                | FieldFormat::Thousands
                | FieldFormat::Millions
                | FieldFormat::Billions
                | FieldFormat::CurrencyThousands
                | FieldFormat::CurrencyMillions
                | FieldFormat::CurrencyBillions
        )
    }

    /// Returns true for the date/time format family.
    pub fn is_temporal(&self) -> bool {
        !self.is_numeric()
    }

    /// The scaling divisor applied to a raw numeric value before rendering.
    pub fn divisor(&self) -> f64 {
        match self {
            FieldFormat::Thousands | FieldFormat::CurrencyThousands => 1e3,
            FieldFormat::Millions | FieldFormat::CurrencyMillions => 1e6,
            FieldFormat::Billions | FieldFormat::CurrencyBillions => 1e9,
            _ => 1.0,
        }
    }

    /// Returns true for the currency-decorated formats.
    pub fn is_currency(&self) -> bool {
        matches!(
            self,
            FieldFormat::Currency
                | FieldFormat::CurrencyThousands
                | FieldFormat::CurrencyMillions
                | FieldFormat::CurrencyBillions
        )
    }

    /// The order-of-magnitude suffix for the scaled formats.
    pub fn magnitude_suffix(&self) -> Option<char> {
        match self {
            FieldFormat::Thousands | FieldFormat::CurrencyThousands => Some('K'),
            FieldFormat::Millions | FieldFormat::CurrencyMillions => Some('M'),
            FieldFormat::Billions | FieldFormat::CurrencyBillions => Some('B'),
            _ => None,
        }
    }

    /// Whether the integer part gets thousands-grouping separators.
    ///
    /// Only the unscaled plain and currency formats group; scaled and percent
    /// output is already small in magnitude and renders ungrouped.
    pub fn groups_digits(&self) -> bool {
        matches!(
            self,
            FieldFormat::Auto | FieldFormat::Number | FieldFormat::Currency
        )
    }
}
