//! Query encoding of the entity filters, checked through the public API.

use chrono::NaiveDate;
use zohobooks::{
    encode, BillStatus, BillsFilter, Condition, ContactsFilter, ContactsSortBy, FilterSet,
    InvoicesFilter, QueryFilter, QueryPairs,
};

fn encoded(filter: &impl QueryFilter) -> QueryPairs {
    let mut set = FilterSet::new("10234695");
    filter.apply(&mut set).unwrap();
    encode(&set)
}

#[test]
fn test_contacts_filter_keys() {
    let filter = ContactsFilter {
        contact_name: Some(Condition::starts_with("Bow")),
        email: Some(Condition::contains("@bowman")),
        sort_by: Some(ContactsSortBy::CreatedTime),
        ..Default::default()
    };

    let query = encoded(&filter);
    assert_eq!(query.get("organization_id"), Some("10234695"));
    assert_eq!(query.get("contact_name_startswith"), Some("Bow"));
    assert_eq!(query.get("email_contains"), Some("@bowman"));
    assert_eq!(query.get("sort_by"), Some("created_time"));
    assert_eq!(query.len(), 4);
}

#[test]
fn test_empty_filter_sends_only_organization() {
    let query = encoded(&InvoicesFilter::default());
    assert_eq!(
        query.into_vec(),
        vec![("organization_id".to_string(), "10234695".to_string())]
    );
}

#[test]
fn test_zero_amounts_are_sent() {
    let filter = InvoicesFilter {
        total: Some(0.0),
        balance: Some(0.0),
        ..Default::default()
    };

    let query = encoded(&filter);
    assert_eq!(query.get("total"), Some("0"));
    assert_eq!(query.get("balance"), Some("0"));
}

#[test]
fn test_date_range_uses_wire_format() {
    let filter = InvoicesFilter {
        date: Some(Condition::range_start(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())),
        due_date: Some(Condition::before(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap())),
        ..Default::default()
    };

    let query = encoded(&filter);
    assert_eq!(query.get("date_start"), Some("2024-01-01"));
    assert_eq!(query.get("due_date_before"), Some("2024-03-31"));
}

#[test]
fn test_bill_status_and_amount_threshold() {
    let filter = BillsFilter {
        status: Some(BillStatus::Overdue),
        total: Some(Condition::less_or_equal(99.5).unwrap()),
        ..Default::default()
    };

    let query = encoded(&filter);
    assert_eq!(query.get("status"), Some("overdue"));
    assert_eq!(query.get("total_less_equals"), Some("99.5"));
}

#[test]
fn test_reserved_values_are_not_escaped_before_transport() {
    let filter = ContactsFilter {
        search_text: Some("Bowman & Co".to_string()),
        ..Default::default()
    };

    // Escaping happens once, when the URL is built.
    let query = encoded(&filter);
    assert_eq!(query.get("search_text"), Some("Bowman & Co"));
}
