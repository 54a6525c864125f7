//! Scalar filter values and their query-string rendering.

use chrono::{DateTime, FixedOffset, NaiveDate};

/// Date format expected by the service for date filters.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamp format expected by the service (e.g. `2013-08-13T14:58:05+0530`).
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// A scalar value compared by a filter.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Integer(i64),
    Decimal(f64),
    Bool(bool),
    Date(NaiveDate),
    DateTime(DateTime<FixedOffset>),
}

impl FilterValue {
    /// Render the value the way the service expects it in a query string.
    ///
    /// The result is not percent-encoded.
    pub fn to_query_value(&self) -> String {
        match self {
            FilterValue::Text(s) => s.clone(),
            FilterValue::Integer(n) => n.to_string(),
            FilterValue::Decimal(n) => n.to_string(),
            FilterValue::Bool(b) => b.to_string(),
            FilterValue::Date(d) => d.format(DATE_FORMAT).to_string(),
            FilterValue::DateTime(dt) => dt.format(DATE_TIME_FORMAT).to_string(),
        }
    }

    /// Short name of the value's kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            FilterValue::Text(_) => "text",
            FilterValue::Integer(_) => "integer",
            FilterValue::Decimal(_) => "decimal",
            FilterValue::Bool(_) => "boolean",
            FilterValue::Date(_) => "date",
            FilterValue::DateTime(_) => "date-time",
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, FilterValue::Text(_))
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, FilterValue::Integer(_) | FilterValue::Decimal(_))
    }

    pub fn is_temporal(&self) -> bool {
        matches!(self, FilterValue::Date(_) | FilterValue::DateTime(_))
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Integer(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        FilterValue::Integer(i64::from(value))
    }
}

impl From<u32> for FilterValue {
    fn from(value: u32) -> Self {
        FilterValue::Integer(i64::from(value))
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Decimal(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Bool(value)
    }
}

impl From<NaiveDate> for FilterValue {
    fn from(value: NaiveDate) -> Self {
        FilterValue::Date(value)
    }
}

impl From<DateTime<FixedOffset>> for FilterValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        FilterValue::DateTime(value)
    }
}
