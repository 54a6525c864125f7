//! Execution tests for listing entities.
//!
//! Uses wiremock to stand in for the Zoho Books API and checks the query
//! each list operation sends as well as how pages are walked.

use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zohobooks::{
    Bill, BillsFilter, BooksClient, BooksError, Condition, Contact, ContactsFilter,
    ContactsFilterBy, Invoice, InvoiceStatus, InvoicesFilter, List,
};

const ORG: &str = "10234695";

fn client_for(server: &MockServer) -> BooksClient {
    BooksClient::new("test-token", ORG, &server.uri()).unwrap()
}

fn contacts_page(ids: &[&str], page: u32, per_page: u32, has_more: bool) -> serde_json::Value {
    let contacts: Vec<_> = ids
        .iter()
        .map(|id| serde_json::json!({"contact_id": id, "contact_name": format!("Contact {id}")}))
        .collect();
    serde_json::json!({
        "code": 0,
        "message": "success",
        "contacts": contacts,
        "page_context": {
            "page": page,
            "per_page": per_page,
            "has_more_page": has_more
        }
    })
}

// ============================================================================
// Single page
// ============================================================================

#[tokio::test]
async fn test_list_page_sends_filters_and_pagination() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/contacts"))
        .and(query_param("organization_id", ORG))
        .and(query_param("contact_name_startswith", "Bow"))
        .and(query_param("filter_by", "Status.Active"))
        .and(query_param("page", "2"))
        .and(query_param("per_page", "25"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(contacts_page(&["1", "2"], 2, 25, true)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let filter = ContactsFilter {
        contact_name: Some(Condition::starts_with("Bow")),
        filter_by: Some(ContactsFilterBy::Active),
        ..Default::default()
    };
    let page = Contact::list_page(&client_for(&mock_server), &filter, 2, 25)
        .await
        .unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page.number(), Some(2));
    assert!(page.has_more());
}

#[tokio::test]
async fn test_list_page_omits_unset_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/invoices"))
        .and(query_param("status", "overdue"))
        .and(query_param_is_missing("customer_id"))
        .and(query_param_is_missing("search_text"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 0,
            "message": "success",
            "invoices": [{"invoice_id": "7", "status": "overdue", "balance": 10.0}],
            "page_context": {"page": 1, "per_page": 200, "has_more_page": false}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let filter = InvoicesFilter {
        status: Some(InvoiceStatus::Overdue),
        ..Default::default()
    };
    let page = Invoice::list_page(&client_for(&mock_server), &filter, 1, 200)
        .await
        .unwrap();

    assert_eq!(page.items[0].status_kind(), Some(InvoiceStatus::Overdue));
    assert!(!page.has_more());
}

#[tokio::test]
async fn test_list_page_rejects_page_zero() {
    let mock_server = MockServer::start().await;

    let err = Contact::list_page(&client_for(&mock_server), &ContactsFilter::default(), 0, 10)
        .await
        .unwrap_err();

    assert!(matches!(err, BooksError::InvalidArgument(_)));
}

#[tokio::test]
async fn test_list_rejects_non_finite_amount_before_sending() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let filter = InvoicesFilter {
        total: Some(f64::NAN),
        ..Default::default()
    };
    let err = Invoice::list_page(&client_for(&mock_server), &filter, 1, 10)
        .await
        .unwrap_err();

    assert!(matches!(err, BooksError::InvalidFilter { .. }));
}

#[tokio::test]
async fn test_list_bills_with_amount_condition() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bills"))
        .and(query_param("total_greater_than", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 0,
            "message": "success",
            "bills": [{"bill_id": "3", "vendor_name": "Zylker", "total": 250.0}],
            "page_context": {"page": 1, "per_page": 200, "has_more_page": false}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let filter = BillsFilter {
        total: Some(Condition::greater_than(100).unwrap()),
        ..Default::default()
    };
    let bills = Bill::list_all(&client_for(&mock_server), &filter).await.unwrap();

    assert_eq!(bills.len(), 1);
    assert_eq!(bills[0].vendor_name.as_deref(), Some("Zylker"));
}

// ============================================================================
// Walking every page
// ============================================================================

#[tokio::test]
async fn test_list_all_walks_until_no_more_pages() {
    let mock_server = MockServer::start().await;

    for (page, ids, has_more) in [
        ("1", vec!["1", "2"], true),
        ("2", vec!["3", "4"], true),
        ("3", vec!["5"], false),
    ] {
        let number: u32 = page.parse().unwrap();
        Mock::given(method("GET"))
            .and(path("/contacts"))
            .and(query_param("page", page))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(contacts_page(&ids, number, 2, has_more)),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let contacts = Contact::list_all(&client_for(&mock_server), &ContactsFilter::default())
        .await
        .unwrap();

    let ids: Vec<_> = contacts.iter().map(|c| c.contact_id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
}

#[tokio::test]
async fn test_list_all_fails_on_error_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/contacts"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(contacts_page(&["1", "2"], 1, 2, true)),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/contacts"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "code": 6041,
            "message": "Invalid organization."
        })))
        .mount(&mock_server)
        .await;

    let err = Contact::list_all(&client_for(&mock_server), &ContactsFilter::default())
        .await
        .unwrap_err();

    assert!(matches!(err, BooksError::Remote { code: 6041, .. }));
}

#[tokio::test]
async fn test_list_all_fails_on_transport_error_mid_walk() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/contacts"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(contacts_page(&["1"], 1, 1, true)),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/contacts"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&mock_server)
        .await;

    let err = Contact::list_all(&client_for(&mock_server), &ContactsFilter::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        BooksError::ApiError {
            status_code: Some(503),
            ..
        }
    ));
}

// ============================================================================
// Page ranges
// ============================================================================

#[tokio::test]
async fn test_list_range_fetches_exact_pages() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/contacts"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(contacts_page(&["x"], 1, 1, true)))
        .expect(0)
        .mount(&mock_server)
        .await;

    for page in 2..=4u32 {
        let id = format!("{page}");
        Mock::given(method("GET"))
            .and(path("/contacts"))
            .and(query_param("page", id.as_str()))
            .and(query_param("per_page", "1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(contacts_page(&[id.as_str()], page, 1, page < 3)),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let contacts = Contact::list_range(&client_for(&mock_server), &ContactsFilter::default(), 2, 4, 1)
        .await
        .unwrap();

    let ids: Vec<_> = contacts.iter().map(|c| c.contact_id.as_str()).collect();
    assert_eq!(ids, vec!["2", "3", "4"]);
}
