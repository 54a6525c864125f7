//! Contact model and trait implementations.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::wire_time;
use super::CustomField;
use crate::envelope::{CandidateKey, Candidates};
use crate::error::Result;
use crate::filter::{Condition, FilterSet, QueryFilter};
use crate::traits::{send_message_only, Create, Delete, Get, List, Resource, Update};
use crate::transport::Transport;

/// A customer or vendor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub contact_id: String,

    /// Display name of the contact.
    pub contact_name: String,

    #[serde(default)]
    pub company_name: Option<String>,

    /// `customer` or `vendor`.
    #[serde(default)]
    pub contact_type: Option<String>,

    /// `active` or `inactive`.
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub mobile: Option<String>,

    /// Payment terms in days.
    #[serde(default)]
    pub payment_terms: Option<i64>,

    #[serde(default)]
    pub payment_terms_label: Option<String>,

    #[serde(default)]
    pub currency_id: Option<String>,

    #[serde(default)]
    pub currency_code: Option<String>,

    #[serde(default)]
    pub outstanding_receivable_amount: Option<f64>,

    #[serde(default)]
    pub outstanding_payable_amount: Option<f64>,

    #[serde(default)]
    pub unused_credits_receivable_amount: Option<f64>,

    #[serde(default)]
    pub unused_credits_payable_amount: Option<f64>,

    #[serde(default)]
    pub has_attachment: bool,

    #[serde(default, with = "wire_time::timestamp")]
    pub created_time: Option<DateTime<FixedOffset>>,

    #[serde(default, with = "wire_time::timestamp")]
    pub last_modified_time: Option<DateTime<FixedOffset>>,

    #[serde(default)]
    pub contact_persons: Vec<ContactPerson>,

    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
}

/// A person attached to a contact.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactPerson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_person_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salutation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default)]
    pub is_primary_contact: bool,
}

impl Contact {
    /// Whether the contact is active. Contacts without a status count as active.
    pub fn is_active(&self) -> bool {
        self.status.as_deref().map_or(true, |s| s == "active")
    }

    /// The primary contact person, if one is flagged.
    pub fn primary_person(&self) -> Option<&ContactPerson> {
        self.contact_persons.iter().find(|p| p.is_primary_contact)
    }

    /// Mark a contact as active.
    ///
    /// # Errors
    ///
    /// Returns [`BooksError::Remote`](crate::BooksError::Remote) if the
    /// service refuses, or a transport/decode error.
    pub async fn mark_active(client: &dyn Transport, id: &str) -> Result<String> {
        let path = format!("{}/active", Self::item_path(id));
        send_message_only(client, Method::POST, &path).await
    }

    /// Mark a contact as inactive.
    ///
    /// # Errors
    ///
    /// Returns [`BooksError::Remote`](crate::BooksError::Remote) if the
    /// service refuses, or a transport/decode error.
    pub async fn mark_inactive(client: &dyn Transport, id: &str) -> Result<String> {
        let path = format!("{}/inactive", Self::item_path(id));
        send_message_only(client, Method::POST, &path).await
    }
}

/// Request body for creating or updating a contact.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContactParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_terms: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contact_persons: Vec<ContactPerson>,
}

catalog! {
    /// Predefined views for listing contacts.
    ContactsFilterBy {
        All => "Status.All",
        Active => "Status.Active",
        Inactive => "Status.Inactive",
        Duplicate => "Status.Duplicate",
        Crm => "Status.Crm",
    }
}

catalog! {
    /// Sort keys for listing contacts.
    ContactsSortBy {
        ContactName => "contact_name",
        FirstName => "first_name",
        LastName => "last_name",
        Email => "email",
        OutstandingReceivableAmount => "outstanding_receivable_amount",
        CreatedTime => "created_time",
        LastModifiedTime => "last_modified_time",
    }
}

/// Query filter for listing contacts.
///
/// Name fields take a [`Condition`], so `contact_name` can be searched with
/// [`Condition::starts_with`] or [`Condition::contains`] as well as matched exactly.
#[derive(Debug, Clone, Default)]
pub struct ContactsFilter {
    pub contact_name: Option<Condition>,
    pub company_name: Option<Condition>,
    pub first_name: Option<Condition>,
    pub last_name: Option<Condition>,
    pub address: Option<Condition>,
    pub email: Option<Condition>,
    pub phone: Option<Condition>,
    /// Free-text search over names and email.
    pub search_text: Option<String>,
    pub filter_by: Option<ContactsFilterBy>,
    pub sort_by: Option<ContactsSortBy>,
}

impl QueryFilter for ContactsFilter {
    fn apply(&self, set: &mut FilterSet) -> Result<()> {
        set.set_opt("contact_name", self.contact_name.as_ref())?;
        set.set_opt("company_name", self.company_name.as_ref())?;
        set.set_opt("first_name", self.first_name.as_ref())?;
        set.set_opt("last_name", self.last_name.as_ref())?;
        set.set_opt("address", self.address.as_ref())?;
        set.set_opt("email", self.email.as_ref())?;
        set.set_opt("phone", self.phone.as_ref())?;
        set.set_value_opt("search_text", self.search_text.as_ref())?;
        set.set_value_opt("filter_by", self.filter_by.as_ref())?;
        set.set_value_opt("sort_by", self.sort_by.as_ref())?;
        Ok(())
    }
}

const CONTACT_KEYS: &[CandidateKey] = &[
    CandidateKey::single("contact"),
    CandidateKey::sequence("contacts"),
];

impl Resource for Contact {
    const NAME: &'static str = "contact";
    const PATH: &'static str = "contacts";
    const KEYS: Candidates = Candidates::new(CONTACT_KEYS);
}

#[async_trait]
impl Get for Contact {}

#[async_trait]
impl List for Contact {
    type Filter = ContactsFilter;
}

#[async_trait]
impl Create for Contact {
    type Params = ContactParams;
}

#[async_trait]
impl Update for Contact {
    type Params = ContactParams;
}

#[async_trait]
impl Delete for Contact {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::encode;

    #[test]
    fn test_contact_deserialize() {
        let json = r#"{
            "contact_id": "460000000026049",
            "contact_name": "Bowman and Co",
            "company_name": "Bowman and Co",
            "contact_type": "customer",
            "status": "active",
            "payment_terms": 15,
            "payment_terms_label": "Net 15",
            "currency_code": "USD",
            "outstanding_receivable_amount": 250.5,
            "created_time": "2013-08-05T12:06:10+0530",
            "last_modified_time": "",
            "contact_persons": [
                {"contact_person_id": "4600000000260510", "first_name": "Will", "is_primary_contact": true}
            ]
        }"#;

        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.contact_id, "460000000026049");
        assert_eq!(contact.payment_terms, Some(15));
        assert_eq!(contact.outstanding_receivable_amount, Some(250.5));
        assert!(contact.created_time.is_some());
        assert!(contact.last_modified_time.is_none());
        assert!(contact.is_active());
        assert_eq!(
            contact.primary_person().and_then(|p| p.first_name.as_deref()),
            Some("Will")
        );
    }

    #[test]
    fn test_contact_deserialize_minimal() {
        let contact: Contact =
            serde_json::from_str(r#"{"contact_id": "1", "contact_name": "A", "status": "inactive"}"#)
                .unwrap();
        assert!(contact.contact_persons.is_empty());
        assert!(!contact.is_active());
        assert!(contact.primary_person().is_none());
    }

    #[test]
    fn test_contacts_filter_encoding() {
        let filter = ContactsFilter {
            contact_name: Some(Condition::starts_with("Bow")),
            email: Some(Condition::contains("@zillum")),
            filter_by: Some(ContactsFilterBy::Active),
            sort_by: Some(ContactsSortBy::CreatedTime),
            ..Default::default()
        };

        let mut set = FilterSet::new("10234695");
        filter.apply(&mut set).unwrap();
        let pairs = encode(&set);

        assert_eq!(
            pairs.into_vec(),
            vec![
                ("organization_id".to_string(), "10234695".to_string()),
                ("contact_name_startswith".to_string(), "Bow".to_string()),
                ("email_contains".to_string(), "@zillum".to_string()),
                ("filter_by".to_string(), "Status.Active".to_string()),
                ("sort_by".to_string(), "created_time".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_filter_adds_nothing() {
        let mut set = FilterSet::new("1");
        ContactsFilter::default().apply(&mut set).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_contact_params_skip_unset() {
        let params = ContactParams {
            contact_name: Some("Bowman and Co".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json, serde_json::json!({"contact_name": "Bowman and Co"}));
    }

    #[test]
    fn test_catalog_tables() {
        assert_eq!(ContactsSortBy::OutstandingReceivableAmount.as_str(), "outstanding_receivable_amount");
        assert_eq!(ContactsFilterBy::parse("Status.Crm"), Some(ContactsFilterBy::Crm));
        assert_eq!(ContactsFilterBy::parse("Status.Nope"), None);
        assert_eq!(ContactsFilterBy::ALL.len(), 5);
        assert_eq!(
            serde_json::to_string(&ContactsSortBy::Email).unwrap(),
            "\"email\""
        );
    }

    #[test]
    fn test_contact_keys() {
        assert_eq!(Contact::KEYS.names(), vec!["contact", "contacts"]);
        assert_eq!(Contact::item_path("46/0"), "contacts/46%2F0");
    }
}
