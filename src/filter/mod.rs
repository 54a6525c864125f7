//! Structured filters and their query-string encoding.
//!
//! A [`FilterSet`] collects [`FilterField`]s for one request. Each field
//! carries a [`ComparisonVariant`] whose suffix is appended to the field's
//! snake_case name, so a single field such as `Date` can be queried as
//! `date`, `date_start`, `date_before`, and so on without per-call string
//! formatting.
//!
//! ```
//! use zohobooks::{encode, Condition, FilterSet};
//!
//! let mut filter = FilterSet::new("10234695");
//! filter.set("ContactName", Condition::starts_with("Bowman")).unwrap();
//!
//! let pairs = encode(&filter);
//! assert_eq!(pairs.get("contact_name_startswith"), Some("Bowman"));
//! assert_eq!(pairs.get("organization_id"), Some("10234695"));
//! ```

mod field;
mod set;
mod value;
mod variant;

pub use field::{to_snake_case, Condition, FilterField};
pub use set::{encode, FilterSet, QueryPairs, ORGANIZATION_ID_KEY};
pub use value::{FilterValue, DATE_FORMAT, DATE_TIME_FORMAT};
pub use variant::{ComparisonVariant, VariantFamily};

use crate::error::Result;

/// A typed, resource-specific filter that writes itself into a [`FilterSet`].
pub trait QueryFilter {
    /// Add this filter's populated fields to `set`.
    ///
    /// # Errors
    ///
    /// Returns an error if a field cannot be added.
    fn apply(&self, set: &mut FilterSet) -> Result<()>;
}

impl QueryFilter for () {
    fn apply(&self, _set: &mut FilterSet) -> Result<()> {
        Ok(())
    }
}
