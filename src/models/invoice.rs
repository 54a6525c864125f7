//! Invoice model and trait implementations.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDate};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::wire_time;
use super::CustomField;
use crate::envelope::{CandidateKey, Candidates};
use crate::error::Result;
use crate::filter::{Condition, FilterSet, QueryFilter};
use crate::traits::{send_message_only, Create, Delete, Get, List, Resource, Update};
use crate::transport::Transport;

/// A sales invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub invoice_id: String,

    #[serde(default)]
    pub invoice_number: Option<String>,

    #[serde(default)]
    pub customer_id: Option<String>,

    #[serde(default)]
    pub customer_name: Option<String>,

    /// Wire status; see [`Invoice::status_kind`].
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub reference_number: Option<String>,

    #[serde(default, with = "wire_time::date")]
    pub date: Option<NaiveDate>,

    #[serde(default, with = "wire_time::date")]
    pub due_date: Option<NaiveDate>,

    #[serde(default)]
    pub currency_code: Option<String>,

    #[serde(default)]
    pub total: Option<f64>,

    #[serde(default)]
    pub balance: Option<f64>,

    #[serde(default)]
    pub is_emailed: bool,

    #[serde(default)]
    pub reminders_sent: Option<u32>,

    #[serde(default)]
    pub salesperson_name: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default)]
    pub terms: Option<String>,

    #[serde(default, with = "wire_time::timestamp")]
    pub created_time: Option<DateTime<FixedOffset>>,

    #[serde(default, with = "wire_time::timestamp")]
    pub last_modified_time: Option<DateTime<FixedOffset>>,

    #[serde(default)]
    pub line_items: Vec<LineItem>,

    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
}

/// One line of an invoice or bill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_item_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_total: Option<f64>,
}

impl LineItem {
    /// The line total as reported, or `rate * quantity` when it is absent.
    pub fn amount(&self) -> Option<f64> {
        self.item_total
            .or_else(|| Some(self.rate? * self.quantity?))
    }
}

impl Invoice {
    /// Parsed status, or `None` for a status this crate does not know.
    pub fn status_kind(&self) -> Option<InvoiceStatus> {
        self.status.as_deref().and_then(InvoiceStatus::parse)
    }

    /// Whether anything remains to be paid.
    pub fn is_outstanding(&self) -> bool {
        self.balance.is_some_and(|b| b > 0.0)
    }

    /// Mark a draft invoice as sent.
    ///
    /// # Errors
    ///
    /// Returns [`BooksError::Remote`](crate::BooksError::Remote) if the
    /// service refuses, or a transport/decode error.
    pub async fn mark_sent(client: &dyn Transport, id: &str) -> Result<String> {
        Self::set_status(client, id, "sent").await
    }

    /// Void an invoice.
    ///
    /// # Errors
    ///
    /// Returns [`BooksError::Remote`](crate::BooksError::Remote) if the
    /// service refuses, or a transport/decode error.
    pub async fn void(client: &dyn Transport, id: &str) -> Result<String> {
        Self::set_status(client, id, "void").await
    }

    /// Move a voided invoice back to draft.
    ///
    /// # Errors
    ///
    /// Returns [`BooksError::Remote`](crate::BooksError::Remote) if the
    /// service refuses, or a transport/decode error.
    pub async fn mark_draft(client: &dyn Transport, id: &str) -> Result<String> {
        Self::set_status(client, id, "draft").await
    }

    async fn set_status(client: &dyn Transport, id: &str, status: &str) -> Result<String> {
        let path = format!("{}/status/{status}", Self::item_path(id));
        send_message_only(client, Method::POST, &path).await
    }
}

/// Request body for creating or updating an invoice.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InvoiceParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", with = "wire_time::date")]
    pub date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none", with = "wire_time::date")]
    pub due_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_terms: Option<i64>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub line_items: Vec<LineItem>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<String>,
}

catalog! {
    /// Invoice lifecycle states.
    InvoiceStatus {
        Sent => "sent",
        Draft => "draft",
        Overdue => "overdue",
        Paid => "paid",
        Void => "void",
        Unpaid => "unpaid",
        PartiallyPaid => "partially_paid",
        Viewed => "viewed",
    }
}

catalog! {
    /// Predefined views for listing invoices.
    InvoicesFilterBy {
        All => "Status.All",
        Sent => "Status.Sent",
        Draft => "Status.Draft",
        Overdue => "Status.Overdue",
        PartiallyPaid => "Status.PartiallyPaid",
        Viewed => "Status.Viewed",
        PaymentExpectedDate => "Status.PaymentExpectedDate",
    }
}

catalog! {
    /// Sort columns for listing invoices.
    InvoicesSortColumn {
        CustomerName => "customer_name",
        InvoiceNumber => "invoice_number",
        Date => "date",
        DueDate => "due_date",
        Total => "total",
        Balance => "balance",
        CreatedTime => "created_time",
    }
}

/// Query filter for listing invoices.
#[derive(Debug, Clone, Default)]
pub struct InvoicesFilter {
    pub invoice_number: Option<Condition>,
    pub item_name: Option<Condition>,
    pub item_id: Option<String>,
    pub item_description: Option<Condition>,
    pub reference_number: Option<String>,
    pub customer_name: Option<String>,
    pub recurring_invoice_id: Option<String>,
    pub email: Option<String>,
    pub total: Option<f64>,
    pub balance: Option<f64>,
    pub custom_field: Option<Condition>,
    /// Invoice date; accepts the date variants (`date_start`, `date_before`, ...).
    pub date: Option<Condition>,
    pub due_date: Option<Condition>,
    pub status: Option<InvoiceStatus>,
    pub customer_id: Option<String>,
    pub filter_by: Option<InvoicesFilterBy>,
    pub search_text: Option<String>,
    pub sort_column: Option<InvoicesSortColumn>,
}

impl QueryFilter for InvoicesFilter {
    fn apply(&self, set: &mut FilterSet) -> Result<()> {
        set.set_opt("invoice_number", self.invoice_number.as_ref())?;
        set.set_opt("item_name", self.item_name.as_ref())?;
        set.set_value_opt("item_id", self.item_id.as_ref())?;
        set.set_opt("item_description", self.item_description.as_ref())?;
        set.set_value_opt("reference_number", self.reference_number.as_ref())?;
        set.set_value_opt("customer_name", self.customer_name.as_ref())?;
        set.set_value_opt("recurring_invoice_id", self.recurring_invoice_id.as_ref())?;
        set.set_value_opt("email", self.email.as_ref())?;
        set.set_value_opt("total", self.total.as_ref())?;
        set.set_value_opt("balance", self.balance.as_ref())?;
        set.set_opt("custom_field", self.custom_field.as_ref())?;
        set.set_opt("date", self.date.as_ref())?;
        set.set_opt("due_date", self.due_date.as_ref())?;
        set.set_value_opt("status", self.status.as_ref())?;
        set.set_value_opt("customer_id", self.customer_id.as_ref())?;
        set.set_value_opt("filter_by", self.filter_by.as_ref())?;
        set.set_value_opt("search_text", self.search_text.as_ref())?;
        set.set_value_opt("sort_column", self.sort_column.as_ref())?;
        Ok(())
    }
}

const INVOICE_KEYS: &[CandidateKey] = &[
    CandidateKey::single("invoice"),
    CandidateKey::sequence("invoices"),
];

impl Resource for Invoice {
    const NAME: &'static str = "invoice";
    const PATH: &'static str = "invoices";
    const KEYS: Candidates = Candidates::new(INVOICE_KEYS);
}

#[async_trait]
impl Get for Invoice {}

#[async_trait]
impl List for Invoice {
    type Filter = InvoicesFilter;
}

#[async_trait]
impl Create for Invoice {
    type Params = InvoiceParams;
}

#[async_trait]
impl Update for Invoice {
    type Params = InvoiceParams;
}

#[async_trait]
impl Delete for Invoice {}
