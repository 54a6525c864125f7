//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use chrono::NaiveDate;

use crate::{Contact, ContactPerson, Invoice, LineItem};

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    // =========================================================================
    // Contact Fixtures
    // =========================================================================

    /// Create an active customer with required fields only.
    pub fn minimal_contact(id: &str, name: &str) -> Contact {
        Contact {
            contact_id: id.to_string(),
            contact_name: name.to_string(),
            company_name: None,
            contact_type: Some("customer".to_string()),
            status: Some("active".to_string()),
            first_name: None,
            last_name: None,
            email: None,
            phone: None,
            mobile: None,
            payment_terms: None,
            payment_terms_label: None,
            currency_id: None,
            currency_code: Some("USD".to_string()),
            outstanding_receivable_amount: None,
            outstanding_payable_amount: None,
            unused_credits_receivable_amount: None,
            unused_credits_payable_amount: None,
            has_attachment: false,
            created_time: None,
            last_modified_time: None,
            contact_persons: vec![],
            custom_fields: vec![],
        }
    }

    /// Create an inactive customer.
    pub fn inactive_contact(id: &str, name: &str) -> Contact {
        let mut contact = Self::minimal_contact(id, name);
        contact.status = Some("inactive".to_string());
        contact
    }

    /// Create a vendor with a primary contact person.
    pub fn vendor(id: &str, name: &str, email: &str) -> Contact {
        let mut contact = Self::minimal_contact(id, name);
        contact.contact_type = Some("vendor".to_string());
        contact.company_name = Some(name.to_string());
        contact.email = Some(email.to_string());
        contact.contact_persons = vec![ContactPerson {
            contact_person_id: Some(format!("{id}01")),
            email: Some(email.to_string()),
            is_primary_contact: true,
            ..Default::default()
        }];
        contact
    }

    /// Create `count` customers with sequential IDs, named `Customer 001`, ...
    pub fn numbered_contacts(count: usize) -> Vec<Contact> {
        (1..=count)
            .map(|n| Self::minimal_contact(&format!("{:06}", n), &format!("Customer {:03}", n)))
            .collect()
    }

    // =========================================================================
    // Invoice Fixtures
    // =========================================================================

    /// Create a draft invoice with required fields only.
    pub fn minimal_invoice(id: &str, number: &str, customer_name: &str) -> Invoice {
        Invoice {
            invoice_id: id.to_string(),
            invoice_number: Some(number.to_string()),
            customer_id: None,
            customer_name: Some(customer_name.to_string()),
            status: Some("draft".to_string()),
            reference_number: None,
            date: None,
            due_date: None,
            currency_code: Some("USD".to_string()),
            total: Some(0.0),
            balance: Some(0.0),
            is_emailed: false,
            reminders_sent: None,
            salesperson_name: None,
            notes: None,
            terms: None,
            created_time: None,
            last_modified_time: None,
            line_items: vec![],
            custom_fields: vec![],
        }
    }

    /// Create an invoice for a customer with one line item.
    pub fn invoice_for(
        id: &str,
        number: &str,
        customer: &Contact,
        status: &str,
        amount: f64,
    ) -> Invoice {
        let mut invoice = Self::minimal_invoice(id, number, &customer.contact_name);
        invoice.customer_id = Some(customer.contact_id.clone());
        invoice.status = Some(status.to_string());
        invoice.date = NaiveDate::from_ymd_opt(2024, 1, 15);
        invoice.due_date = NaiveDate::from_ymd_opt(2024, 2, 14);
        invoice.total = Some(amount);
        invoice.balance = Some(if status == "paid" { 0.0 } else { amount });
        invoice.line_items = vec![LineItem {
            line_item_id: Some(format!("{id}-1")),
            name: Some("Consulting".to_string()),
            rate: Some(amount),
            quantity: Some(1.0),
            item_total: Some(amount),
            ..Default::default()
        }];
        invoice
    }

    // =========================================================================
    // Scenarios
    // =========================================================================

    /// Create a default scenario with common test data.
    pub fn default_scenario() -> DefaultScenario {
        let bowman = Self::minimal_contact("460000000026049", "Bowman and Co");
        let zylker = Self::vendor("460000000026050", "Zylker Supplies", "ap@zylker.com");
        let dormant = Self::inactive_contact("460000000026051", "Dormant Ltd");

        let invoices = vec![
            Self::invoice_for("982000000567114", "INV-00001", &bowman, "sent", 120.0),
            Self::invoice_for("982000000567115", "INV-00002", &bowman, "paid", 80.5),
            Self::minimal_invoice("982000000567116", "INV-00003", "Dormant Ltd"),
        ];

        DefaultScenario {
            contacts: vec![bowman, zylker, dormant],
            invoices,
        }
    }
}

/// A pre-built scenario with related test data.
pub struct DefaultScenario {
    pub contacts: Vec<Contact>,
    pub invoices: Vec<Invoice>,
}
