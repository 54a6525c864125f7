//! Validated filter conditions and named filter fields.

use super::value::FilterValue;
use super::variant::{ComparisonVariant, VariantFamily};
use crate::error::{BooksError, Result};

/// A comparison variant paired with a value it can compare.
///
/// Construction is the only place the pairing is checked; a `Condition`
/// that exists is always encodable.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    variant: ComparisonVariant,
    value: FilterValue,
}

impl Condition {
    /// Pair a variant with a value.
    ///
    /// # Errors
    ///
    /// Returns [`BooksError::InvalidFilter`] if the value does not belong to
    /// the variant's family (e.g. a date variant with a text value), or if a
    /// decimal value is not finite.
    pub fn new(variant: ComparisonVariant, value: impl Into<FilterValue>) -> Result<Self> {
        let value = value.into();
        validate("condition", variant, &value)?;
        Ok(Self { variant, value })
    }

    /// Exact match on any value.
    pub fn equals(value: impl Into<FilterValue>) -> Result<Self> {
        Self::new(ComparisonVariant::None, value)
    }

    pub fn starts_with(text: impl Into<String>) -> Self {
        Self {
            variant: ComparisonVariant::StartsWith,
            value: FilterValue::Text(text.into()),
        }
    }

    pub fn contains(text: impl Into<String>) -> Self {
        Self {
            variant: ComparisonVariant::Contains,
            value: FilterValue::Text(text.into()),
        }
    }

    /// Inclusive lower bound of a date range.
    pub fn range_start(date: chrono::NaiveDate) -> Self {
        Self::date(ComparisonVariant::RangeStart, date)
    }

    /// Inclusive upper bound of a date range.
    pub fn range_end(date: chrono::NaiveDate) -> Self {
        Self::date(ComparisonVariant::RangeEnd, date)
    }

    pub fn before(date: chrono::NaiveDate) -> Self {
        Self::date(ComparisonVariant::Before, date)
    }

    pub fn after(date: chrono::NaiveDate) -> Self {
        Self::date(ComparisonVariant::After, date)
    }

    pub fn less_than(value: impl Into<FilterValue>) -> Result<Self> {
        Self::new(ComparisonVariant::LessThan, value)
    }

    pub fn less_or_equal(value: impl Into<FilterValue>) -> Result<Self> {
        Self::new(ComparisonVariant::LessOrEqual, value)
    }

    pub fn greater_than(value: impl Into<FilterValue>) -> Result<Self> {
        Self::new(ComparisonVariant::GreaterThan, value)
    }

    pub fn greater_or_equal(value: impl Into<FilterValue>) -> Result<Self> {
        Self::new(ComparisonVariant::GreaterOrEqual, value)
    }

    fn date(variant: ComparisonVariant, date: chrono::NaiveDate) -> Self {
        Self {
            variant,
            value: FilterValue::Date(date),
        }
    }

    pub fn variant(&self) -> ComparisonVariant {
        self.variant
    }

    pub fn value(&self) -> &FilterValue {
        &self.value
    }
}

/// One predicate entry: a field name, a comparison variant and a value.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterField {
    name: String,
    condition: Condition,
}

impl FilterField {
    /// Build a field from its logical name (e.g. `"ContactName"` or `"contact_name"`).
    ///
    /// # Errors
    ///
    /// Returns [`BooksError::InvalidFilter`] for a variant/value mismatch or an
    /// empty name.
    pub fn new(
        name: impl Into<String>,
        variant: ComparisonVariant,
        value: impl Into<FilterValue>,
    ) -> Result<Self> {
        let name = name.into();
        let value = value.into();
        validate(&name, variant, &value)?;
        Ok(Self {
            name,
            condition: Condition { variant, value },
        })
    }

    /// Attach an already validated condition to a name.
    ///
    /// # Errors
    ///
    /// Returns [`BooksError::InvalidFilter`] if the name is empty.
    pub fn with_condition(name: impl Into<String>, condition: Condition) -> Result<Self> {
        let name = name.into();
        check_name(&name, condition.variant)?;
        Ok(Self { name, condition })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn variant(&self) -> ComparisonVariant {
        self.condition.variant
    }

    pub fn value(&self) -> &FilterValue {
        &self.condition.value
    }

    /// The query key: the snake_case field name followed by the variant suffix.
    pub fn key(&self) -> String {
        let mut key = to_snake_case(&self.name);
        key.push_str(self.condition.variant.suffix());
        key
    }
}

fn check_name(name: &str, variant: ComparisonVariant) -> Result<()> {
    if name.trim().is_empty() {
        return Err(BooksError::InvalidFilter {
            field: name.to_string(),
            variant: variant.name(),
            reason: "field name is empty".to_string(),
        });
    }
    Ok(())
}

fn validate(field: &str, variant: ComparisonVariant, value: &FilterValue) -> Result<()> {
    check_name(field, variant)?;

    if let FilterValue::Decimal(n) = value {
        if !n.is_finite() {
            return Err(BooksError::InvalidFilter {
                field: field.to_string(),
                variant: variant.name(),
                reason: format!("decimal value {n} is not finite"),
            });
        }
    }

    let accepted = match variant.family() {
        VariantFamily::Any => true,
        VariantFamily::Text => value.is_text(),
        VariantFamily::Date => value.is_temporal(),
        VariantFamily::Numeric => value.is_numeric(),
    };

    if accepted {
        Ok(())
    } else {
        Err(BooksError::InvalidFilter {
            field: field.to_string(),
            variant: variant.name(),
            reason: format!("cannot compare a {} value", value.kind()),
        })
    }
}

/// Convert a logical field name to the service's snake_case key.
///
/// `"ContactName"` becomes `contact_name`; names that are already snake_case
/// pass through unchanged.
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.trim().chars().collect();
    let mut out = String::with_capacity(chars.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                let prev = chars[i - 1];
                let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
                let boundary = prev.is_lowercase()
                    || prev.is_ascii_digit()
                    || (prev.is_uppercase() && next_is_lower);
                if boundary && !out.ends_with('_') {
                    out.push('_');
                }
            }
            out.extend(c.to_lowercase());
        } else if c == ' ' || c == '-' {
            if !out.ends_with('_') {
                out.push('_');
            }
        } else {
            out.push(c);
        }
    }

    out
}
