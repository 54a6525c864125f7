//! Per-request filter sets and their query-string encoding.

use super::field::{Condition, FilterField};
use super::value::FilterValue;
use super::variant::ComparisonVariant;
use crate::error::Result;

/// Query key carrying the organization on every request.
pub const ORGANIZATION_ID_KEY: &str = "organization_id";

/// Ordered query-string pairs produced by [`encode`].
///
/// Keys are unique. Values are kept raw; percent-encoding happens once, at the
/// URL boundary, either through [`QueryPairs::to_query_string`] or when the
/// transport appends the pairs to a request URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPairs(Vec<(String, String)>);

impl QueryPairs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair. An existing key keeps its position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Percent-encoded `key=value&...` form.
    pub fn to_query_string(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn into_vec(self) -> Vec<(String, String)> {
        self.0
    }
}

impl<'a> IntoIterator for &'a QueryPairs {
    type Item = &'a (String, String);
    type IntoIter = std::slice::Iter<'a, (String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The filters, pagination and organization for one request or one page walk.
///
/// A `FilterSet` belongs to a single call site. The page walker takes it by
/// `&mut` and is the only code that advances [`FilterSet::page`] during a walk.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSet {
    organization_id: String,
    page: Option<u32>,
    per_page: Option<u32>,
    entries: Vec<(String, FilterField)>,
}

impl FilterSet {
    pub fn new(organization_id: impl Into<String>) -> Self {
        Self {
            organization_id: organization_id.into(),
            page: None,
            per_page: None,
            entries: Vec::new(),
        }
    }

    /// Set the page a walk starts from.
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn organization_id(&self) -> &str {
        &self.organization_id
    }

    pub fn page(&self) -> Option<u32> {
        self.page
    }

    pub fn per_page(&self) -> Option<u32> {
        self.per_page
    }

    pub(crate) fn set_page(&mut self, page: u32) {
        self.page = Some(page);
    }

    pub(crate) fn set_per_page(&mut self, per_page: u32) {
        self.per_page = Some(per_page);
    }

    /// Add or replace the entry stored under a logical name.
    pub fn insert(&mut self, logical_name: impl Into<String>, field: FilterField) {
        let logical_name = logical_name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == logical_name) {
            Some(slot) => slot.1 = field,
            None => self.entries.push((logical_name, field)),
        }
    }

    /// Store a condition under a logical name that doubles as the field name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty.
    pub fn set(&mut self, name: &str, condition: Condition) -> Result<()> {
        let field = FilterField::with_condition(name, condition)?;
        self.insert(name, field);
        Ok(())
    }

    /// Store an exact-match scalar under a logical name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or the value is a non-finite decimal.
    pub fn set_value(&mut self, name: &str, value: impl Into<FilterValue>) -> Result<()> {
        let field = FilterField::new(name, ComparisonVariant::None, value)?;
        self.insert(name, field);
        Ok(())
    }

    /// Store a condition only when one is present.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty.
    pub fn set_opt(&mut self, name: &str, condition: Option<&Condition>) -> Result<()> {
        match condition {
            Some(c) => self.set(name, c.clone()),
            None => Ok(()),
        }
    }

    /// Store a scalar only when one is present.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or the value is a non-finite decimal.
    pub fn set_value_opt<V: Into<FilterValue> + Clone>(
        &mut self,
        name: &str,
        value: Option<&V>,
    ) -> Result<()> {
        match value {
            Some(v) => self.set_value(name, v.clone()),
            None => Ok(()),
        }
    }

    pub fn get(&self, logical_name: &str) -> Option<&FilterField> {
        self.entries
            .iter()
            .find(|(n, _)| n == logical_name)
            .map(|(_, f)| f)
    }

    pub fn remove(&mut self, logical_name: &str) -> Option<FilterField> {
        let idx = self.entries.iter().position(|(n, _)| n == logical_name)?;
        Some(self.entries.remove(idx).1)
    }

    /// Number of filter entries, excluding pagination and organization.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Encode a filter set into its canonical query pairs.
///
/// `organization_id` is always emitted first, followed by the filter entries
/// in insertion order, then `page` and `per_page` when set.
pub fn encode(filter: &FilterSet) -> QueryPairs {
    let mut pairs = QueryPairs::new();
    pairs.insert(ORGANIZATION_ID_KEY, filter.organization_id.clone());

    for (_, field) in &filter.entries {
        pairs.insert(field.key(), field.value().to_query_value());
    }
    // A filter entry may not shadow the organization.
    pairs.insert(ORGANIZATION_ID_KEY, filter.organization_id.clone());

    if let Some(page) = filter.page {
        pairs.insert("page", page.to_string());
    }
    if let Some(per_page) = filter.per_page {
        pairs.insert("per_page", per_page.to_string());
    }

    pairs
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::NaiveDate;

    use super::*;

    fn as_set(pairs: &QueryPairs) -> HashSet<(String, String)> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_email_startswith_round_trip() {
        let mut filter = FilterSet::new("123");
        let field = FilterField::new("Email", ComparisonVariant::StartsWith, "foo").unwrap();
        filter.insert("Email", field);

        let expected: HashSet<(String, String)> = [
            ("email_startswith".to_string(), "foo".to_string()),
            ("organization_id".to_string(), "123".to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(as_set(&encode(&filter)), expected);
    }

    #[test]
    fn test_organization_id_always_emitted() {
        let pairs = encode(&FilterSet::new("org-1"));
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs.get("organization_id"), Some("org-1"));
    }

    #[test]
    fn test_explicit_zero_is_encoded() {
        let mut filter = FilterSet::new("1");
        filter.set("Total", Condition::greater_or_equal(0_i64).unwrap()).unwrap();

        let pairs = encode(&filter);
        assert_eq!(pairs.get("total_greater_equals"), Some("0"));
    }

    #[test]
    fn test_unset_fields_contribute_nothing() {
        let mut filter = FilterSet::new("1");
        filter.set_opt("ContactName", None).unwrap();
        filter.set_value_opt::<String>("SearchText", None).unwrap();

        assert_eq!(encode(&filter).len(), 1);
    }

    #[test]
    fn test_pagination_keys() {
        let filter = FilterSet::new("1").with_page(3).with_per_page(50);
        let pairs = encode(&filter);
        assert_eq!(pairs.get("page"), Some("3"));
        assert_eq!(pairs.get("per_page"), Some("50"));
    }

    #[test]
    fn test_output_order() {
        let mut filter = FilterSet::new("1").with_page(2);
        filter.set("VendorName", Condition::contains("acme")).unwrap();
        filter
            .set("Date", Condition::after(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()))
            .unwrap();

        let pairs = encode(&filter);
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec!["organization_id", "vendor_name_contains", "date_after", "page"]
        );
    }

    #[test]
    fn test_last_write_wins_for_same_name() {
        let mut filter = FilterSet::new("1");
        filter.set("ContactName", Condition::starts_with("a")).unwrap();
        filter.set("ContactName", Condition::contains("b")).unwrap();

        let pairs = encode(&filter);
        assert_eq!(pairs.get("contact_name_startswith"), None);
        assert_eq!(pairs.get("contact_name_contains"), Some("b"));
    }

    #[test]
    fn test_last_write_wins_for_colliding_keys() {
        let mut filter = FilterSet::new("1");
        filter.set_value("SearchText", "first").unwrap();
        filter.set_value("search_text", "second").unwrap();

        let pairs = encode(&filter);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs.get("search_text"), Some("second"));
    }

    #[test]
    fn test_query_string_is_percent_encoded() {
        let mut filter = FilterSet::new("1");
        filter.set_value("SearchText", "a&b c").unwrap();

        assert_eq!(
            encode(&filter).to_query_string(),
            "organization_id=1&search_text=a%26b%20c"
        );
    }

    #[test]
    fn test_entry_cannot_override_organization() {
        let mut filter = FilterSet::new("real-org");
        filter.set_value("OrganizationId", "other").unwrap();

        let pairs = encode(&filter);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs.get("organization_id"), Some("real-org"));
    }

    #[test]
    fn test_remove_entry() {
        let mut filter = FilterSet::new("1");
        filter.set_value("Status", "paid").unwrap();
        assert!(filter.remove("Status").is_some());
        assert!(filter.is_empty());
        assert!(filter.remove("Status").is_none());
    }
}
