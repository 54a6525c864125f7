//! Comparison variants and their query-key suffixes.

use std::fmt;

/// The comparison mode attached to a filter field.
///
/// Each variant maps to a fixed suffix appended to the field's query key.
/// The service matches on the exact key spelling, so the table in
/// [`ComparisonVariant::suffix`] is closed and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComparisonVariant {
    /// Exact match; no suffix.
    #[default]
    None,
    /// `<field>_startswith`
    StartsWith,
    /// `<field>_contains`
    Contains,
    /// `<field>_start` (inclusive lower bound of a date range)
    RangeStart,
    /// `<field>_end` (inclusive upper bound of a date range)
    RangeEnd,
    /// `<field>_before`
    Before,
    /// `<field>_after`
    After,
    /// `<field>_less_than`
    LessThan,
    /// `<field>_less_equals`
    LessOrEqual,
    /// `<field>_greater_than`
    GreaterThan,
    /// `<field>_greater_equals`
    GreaterOrEqual,
}

/// Groups of variants that accept the same kind of value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantFamily {
    /// Accepts any value (only [`ComparisonVariant::None`]).
    Any,
    /// Prefix and substring matches on text.
    Text,
    /// Range boundaries on dates.
    Date,
    /// Thresholds on numbers.
    Numeric,
}

impl ComparisonVariant {
    /// Every variant, in declaration order.
    pub const ALL: [ComparisonVariant; 11] = [
        ComparisonVariant::None,
        ComparisonVariant::StartsWith,
        ComparisonVariant::Contains,
        ComparisonVariant::RangeStart,
        ComparisonVariant::RangeEnd,
        ComparisonVariant::Before,
        ComparisonVariant::After,
        ComparisonVariant::LessThan,
        ComparisonVariant::LessOrEqual,
        ComparisonVariant::GreaterThan,
        ComparisonVariant::GreaterOrEqual,
    ];

    /// The suffix appended to a field name to build its query key.
    pub const fn suffix(self) -> &'static str {
        match self {
            ComparisonVariant::None => "",
            ComparisonVariant::StartsWith => "_startswith",
            ComparisonVariant::Contains => "_contains",
            ComparisonVariant::RangeStart => "_start",
            ComparisonVariant::RangeEnd => "_end",
            ComparisonVariant::Before => "_before",
            ComparisonVariant::After => "_after",
            ComparisonVariant::LessThan => "_less_than",
            ComparisonVariant::LessOrEqual => "_less_equals",
            ComparisonVariant::GreaterThan => "_greater_than",
            ComparisonVariant::GreaterOrEqual => "_greater_equals",
        }
    }

    /// The family of values this variant can compare.
    pub const fn family(self) -> VariantFamily {
        match self {
            ComparisonVariant::None => VariantFamily::Any,
            ComparisonVariant::StartsWith | ComparisonVariant::Contains => VariantFamily::Text,
            ComparisonVariant::RangeStart
            | ComparisonVariant::RangeEnd
            | ComparisonVariant::Before
            | ComparisonVariant::After => VariantFamily::Date,
            ComparisonVariant::LessThan
            | ComparisonVariant::LessOrEqual
            | ComparisonVariant::GreaterThan
            | ComparisonVariant::GreaterOrEqual => VariantFamily::Numeric,
        }
    }

    /// Variant name for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            ComparisonVariant::None => "None",
            ComparisonVariant::StartsWith => "StartsWith",
            ComparisonVariant::Contains => "Contains",
            ComparisonVariant::RangeStart => "RangeStart",
            ComparisonVariant::RangeEnd => "RangeEnd",
            ComparisonVariant::Before => "Before",
            ComparisonVariant::After => "After",
            ComparisonVariant::LessThan => "LessThan",
            ComparisonVariant::LessOrEqual => "LessOrEqual",
            ComparisonVariant::GreaterThan => "GreaterThan",
            ComparisonVariant::GreaterOrEqual => "GreaterOrEqual",
        }
    }
}

impl fmt::Display for ComparisonVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
