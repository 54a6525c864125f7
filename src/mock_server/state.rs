//! Mock server state management.
//!
//! Provides the in-memory data store for the mock Zoho Books API server.

use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{Contact, Invoice};

/// Organization the server accepts when none is configured.
pub const DEFAULT_ORGANIZATION_ID: &str = "10234695";

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access. Records are kept
/// in ID order, which is also the order list endpoints page through them.
#[derive(Debug)]
pub struct MockState {
    /// Every request must carry this `organization_id`.
    pub organization_id: String,

    /// Contacts indexed by ID.
    pub contacts: BTreeMap<String, Contact>,

    /// Invoices indexed by ID.
    pub invoices: BTreeMap<String, Invoice>,

    /// Optional authentication token. If set, requests must include this token.
    pub required_token: Option<String>,

    next_id: u64,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            organization_id: DEFAULT_ORGANIZATION_ID.to_string(),
            contacts: BTreeMap::new(),
            invoices: BTreeMap::new(),
            required_token: None,
            next_id: 900_000_000_000_000,
        }
    }
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Set the organization requests must be issued for.
    pub fn with_organization(mut self, organization_id: &str) -> Self {
        self.organization_id = organization_id.to_string();
        self
    }

    /// Add a contact to the state.
    pub fn with_contact(mut self, contact: Contact) -> Self {
        self.contacts.insert(contact.contact_id.clone(), contact);
        self
    }

    /// Add several contacts to the state.
    pub fn with_contacts(mut self, contacts: impl IntoIterator<Item = Contact>) -> Self {
        for contact in contacts {
            self.contacts.insert(contact.contact_id.clone(), contact);
        }
        self
    }

    /// Add an invoice to the state.
    pub fn with_invoice(mut self, invoice: Invoice) -> Self {
        self.invoices.insert(invoice.invoice_id.clone(), invoice);
        self
    }

    /// Set the required authentication token.
    pub fn with_required_token(mut self, token: &str) -> Self {
        self.required_token = Some(token.to_string());
        self
    }

    /// Allocate an ID for a created record.
    pub fn next_id(&mut self) -> String {
        self.next_id += 1;
        self.next_id.to_string()
    }

    /// List contacts matching the given criteria, in ID order.
    ///
    /// `search` matches anywhere in the name, `name_prefix` at its start;
    /// both ignore case. `status` compares against the contact's status.
    pub fn list_contacts(
        &self,
        search: Option<&str>,
        name_prefix: Option<&str>,
        status: Option<&str>,
    ) -> Vec<&Contact> {
        let search = search.map(str::to_lowercase);
        let name_prefix = name_prefix.map(str::to_lowercase);

        self.contacts
            .values()
            .filter(|c| {
                let name = c.contact_name.to_lowercase();
                search.as_deref().map_or(true, |s| name.contains(s))
                    && name_prefix.as_deref().map_or(true, |p| name.starts_with(p))
                    && status.map_or(true, |s| c.status.as_deref().unwrap_or("active") == s)
            })
            .collect()
    }

    /// List invoices, optionally only those with the given status.
    pub fn list_invoices(&self, status: Option<&str>) -> Vec<&Invoice> {
        self.invoices
            .values()
            .filter(|i| status.map_or(true, |s| i.status.as_deref() == Some(s)))
            .collect()
    }

    /// Set a contact's status. Returns false if the contact does not exist.
    pub fn set_contact_status(&mut self, id: &str, status: &str) -> bool {
        match self.contacts.get_mut(id) {
            Some(contact) => {
                contact.status = Some(status.to_string());
                true
            }
            None => false,
        }
    }

    /// Set an invoice's status. Returns false if the invoice does not exist.
    pub fn set_invoice_status(&mut self, id: &str, status: &str) -> bool {
        match self.invoices.get_mut(id) {
            Some(invoice) => {
                invoice.status = Some(status.to_string());
                true
            }
            None => false,
        }
    }
}
