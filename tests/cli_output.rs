//! Tests for CLI output formatting: JSON with `--json`, key-value text otherwise.

use zohobooks::{Bill, Contact, Invoice, PrettyPrint};

// ============================================================================
// JSON Output Tests
// ============================================================================

#[test]
fn test_json_output_is_valid_json() {
    let contact = make_test_contact();
    let json_output = serde_json::to_string_pretty(&contact).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&json_output).unwrap();
    assert!(parsed.is_object());
    assert_eq!(parsed["contact_name"], "Bowman and Co");
}

#[test]
fn test_json_output_for_list_is_array() {
    let contacts = vec![make_test_contact(), make_test_contact()];
    let json_output = serde_json::to_string_pretty(&contacts).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&json_output).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 2);
}

#[test]
fn test_json_output_keeps_wire_formats() {
    // Dates and timestamps serialize back into the formats the API uses.
    let invoice = make_test_invoice();
    let parsed = serde_json::to_value(&invoice).unwrap();

    assert_eq!(parsed["invoice_id"], "982000000567114");
    assert_eq!(parsed["date"], "2024-01-15");
    assert_eq!(parsed["created_time"], "2024-01-15T10:30:00+0530");
    assert_eq!(parsed["line_items"][0]["name"], "Hard Drive");
}

// ============================================================================
// Pretty-Print Tests
// ============================================================================

#[test]
fn test_default_output_is_not_json() {
    let output = make_test_contact().pretty_print();

    let parse_result: Result<serde_json::Value, _> = serde_json::from_str(&output);
    assert!(parse_result.is_err(), "Default output should NOT be valid JSON");
}

#[test]
fn test_contact_pretty_print_shows_key_fields() {
    let output = make_test_contact().pretty_print();

    assert!(output.contains("460000000026049"), "Should show ID");
    assert!(output.contains("Bowman and Co"), "Should show name");
    assert!(output.contains("Email:"), "Should have Email label");
    assert!(output.contains("Primary:        Ann Bowman"));
    assert!(output.contains("Created:        2024-01-15 10:30:00 +0530"));
}

#[test]
fn test_invoice_pretty_print_shows_amounts() {
    let output = make_test_invoice().pretty_print();

    assert!(output.starts_with("Invoice: INV-00003"));
    assert!(output.contains("Status:         sent"));
    assert!(output.contains("Total:          40.60 USD"));
    assert!(output.contains("Line items:     1"));
}

#[test]
fn test_bill_pretty_print_shows_vendor() {
    let bill: Bill = serde_json::from_value(serde_json::json!({
        "bill_id": "3",
        "bill_number": "BL-0001",
        "vendor_name": "Zylker Supplies",
        "status": "open",
        "due_date": "2024-03-01",
        "total": 250.0,
        "balance": 250.0,
        "currency_code": "EUR"
    }))
    .unwrap();

    let output = bill.pretty_print();
    assert!(output.starts_with("Bill: BL-0001"));
    assert!(output.contains("Vendor:         Zylker Supplies"));
    assert!(output.contains("Due:            2024-03-01"));
    assert!(output.contains("Balance:        250.00 EUR"));
}

#[test]
fn test_list_pretty_print_is_table() {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct TestRow {
        id: String,
        name: String,
    }

    let rows = vec![
        TestRow {
            id: "1".to_string(),
            name: "Bowman and Co".to_string(),
        },
        TestRow {
            id: "2".to_string(),
            name: "Zylker Supplies".to_string(),
        },
    ];

    let table_output = Table::new(rows).to_string();
    assert!(table_output.contains("id"), "Should have column headers");
    assert!(table_output.contains("Zylker Supplies"));
}

// ============================================================================
// Test Helpers
// ============================================================================

fn make_test_contact() -> Contact {
    serde_json::from_value(serde_json::json!({
        "contact_id": "460000000026049",
        "contact_name": "Bowman and Co",
        "contact_type": "customer",
        "status": "active",
        "email": "accounts@bowman.example",
        "created_time": "2024-01-15T10:30:00+0530",
        "contact_persons": [
            {
                "contact_person_id": "460000000026051",
                "first_name": "Ann",
                "last_name": "Bowman",
                "is_primary_contact": true
            }
        ]
    }))
    .unwrap()
}

fn make_test_invoice() -> Invoice {
    serde_json::from_value(serde_json::json!({
        "invoice_id": "982000000567114",
        "invoice_number": "INV-00003",
        "status": "sent",
        "date": "2024-01-15",
        "currency_code": "USD",
        "total": 40.6,
        "balance": 40.6,
        "created_time": "2024-01-15T10:30:00+0530",
        "line_items": [
            {"name": "Hard Drive", "rate": 20.3, "quantity": 2.0}
        ]
    }))
    .unwrap()
}
