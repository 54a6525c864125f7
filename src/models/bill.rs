//! Bill model and trait implementations.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDate};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::wire_time;
use super::{CustomField, LineItem};
use crate::envelope::{CandidateKey, Candidates};
use crate::error::Result;
use crate::filter::{Condition, FilterSet, QueryFilter};
use crate::traits::{send_message_only, Create, Delete, Get, List, Resource, Update};
use crate::transport::Transport;

/// A vendor bill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    pub bill_id: String,

    #[serde(default)]
    pub bill_number: Option<String>,

    #[serde(default)]
    pub vendor_id: Option<String>,

    #[serde(default)]
    pub vendor_name: Option<String>,

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
    pub sub_total: Option<f64>,

    #[serde(default)]
    pub tax_total: Option<f64>,

    #[serde(default)]
    pub total: Option<f64>,

    #[serde(default)]
    pub balance: Option<f64>,

    #[serde(default)]
    pub payment_made: Option<f64>,

    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default, with = "wire_time::timestamp")]
    pub created_time: Option<DateTime<FixedOffset>>,

    #[serde(default, with = "wire_time::timestamp")]
    pub last_modified_time: Option<DateTime<FixedOffset>>,

    #[serde(default)]
    pub line_items: Vec<LineItem>,

    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
}

impl Bill {
    pub fn status_kind(&self) -> Option<BillStatus> {
        self.status.as_deref().and_then(BillStatus::parse)
    }

    /// Mark a draft bill as open.
    ///
    /// # Errors
    ///
    /// Returns [`BooksError::Remote`](crate::BooksError::Remote) if the
    /// service refuses, or a transport/decode error.
    pub async fn mark_open(client: &dyn Transport, id: &str) -> Result<String> {
        let path = format!("{}/status/open", Self::item_path(id));
        send_message_only(client, Method::POST, &path).await
    }

    /// Void a bill.
    ///
    /// # Errors
    ///
    /// Returns [`BooksError::Remote`](crate::BooksError::Remote) if the
    /// service refuses, or a transport/decode error.
    pub async fn void(client: &dyn Transport, id: &str) -> Result<String> {
        let path = format!("{}/status/void", Self::item_path(id));
        send_message_only(client, Method::POST, &path).await
    }
}

/// Request body for creating or updating a bill.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BillParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", with = "wire_time::date")]
    pub date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none", with = "wire_time::date")]
    pub due_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub line_items: Vec<LineItem>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

catalog! {
    BillStatus {
        Paid => "paid",
        Open => "open",
        Overdue => "overdue",
        Void => "void",
        PartiallyPaid => "partially_paid",
    }
}

catalog! {
    /// Predefined views for listing bills.
    BillsFilterBy {
        All => "Status.All",
        PartiallyPaid => "Status.PartiallyPaid",
        Paid => "Status.Paid",
        Overdue => "Status.Overdue",
        Void => "Status.Void",
        Open => "Status.Open",
    }
}

catalog! {
    BillsSortColumn {
        VendorName => "vendor_name",
        BillNumber => "bill_number",
        AccountName => "account_name",
        Date => "date",
        DueDate => "due_date",
        Total => "total",
        Balance => "balance",
        CreatedTime => "created_time",
    }
}

/// Query filter for listing bills.
#[derive(Debug, Clone, Default)]
pub struct BillsFilter {
    pub bill_number: Option<String>,
    pub reference_number: Option<Condition>,
    pub date: Option<Condition>,
    pub status: Option<BillStatus>,
    pub description: Option<String>,
    pub vendor_name: Option<Condition>,
    /// Bill total; accepts the numeric variants (`total_less_than`, ...).
    pub total: Option<Condition>,
    pub vendor_id: Option<String>,
    pub item_id: Option<String>,
    pub recurring_bill_id: Option<String>,
    pub purchase_order_id: Option<String>,
    pub last_modified_time: Option<DateTime<FixedOffset>>,
    pub search_text: Option<String>,
    pub filter_by: Option<BillsFilterBy>,
    pub sort_column: Option<BillsSortColumn>,
}

impl QueryFilter for BillsFilter {
    fn apply(&self, set: &mut FilterSet) -> Result<()> {
        set.set_value_opt("bill_number", self.bill_number.as_ref())?;
        set.set_opt("reference_number", self.reference_number.as_ref())?;
        set.set_opt("date", self.date.as_ref())?;
        set.set_value_opt("status", self.status.as_ref())?;
        set.set_value_opt("description", self.description.as_ref())?;
        set.set_opt("vendor_name", self.vendor_name.as_ref())?;
        set.set_opt("total", self.total.as_ref())?;
        set.set_value_opt("vendor_id", self.vendor_id.as_ref())?;
        set.set_value_opt("item_id", self.item_id.as_ref())?;
        set.set_value_opt("recurring_bill_id", self.recurring_bill_id.as_ref())?;
        set.set_value_opt("purchase_order_id", self.purchase_order_id.as_ref())?;
        set.set_value_opt("last_modified_time", self.last_modified_time.as_ref())?;
        set.set_value_opt("search_text", self.search_text.as_ref())?;
        set.set_value_opt("filter_by", self.filter_by.as_ref())?;
        set.set_value_opt("sort_column", self.sort_column.as_ref())?;
        Ok(())
    }
}

const BILL_KEYS: &[CandidateKey] = &[CandidateKey::single("bill"), CandidateKey::sequence("bills")];

impl Resource for Bill {
    const NAME: &'static str = "bill";
    const PATH: &'static str = "bills";
    const KEYS: Candidates = Candidates::new(BILL_KEYS);
}

#[async_trait]
impl Get for Bill {}

#[async_trait]
impl List for Bill {
    type Filter = BillsFilter;
}

#[async_trait]
impl Create for Bill {
    type Params = BillParams;
}

#[async_trait]
impl Update for Bill {
    type Params = BillParams;
}

#[async_trait]
impl Delete for Bill {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::encode;

    #[test]
    fn test_bill_deserialize() {
        let json = r#"{
            "bill_id": "460000000038029",
            "bill_number": "00454",
            "vendor_name": "Bowman Furniture",
            "status": "open",
            "date": "2013-09-11",
            "due_date": "2013-09-26",
            "total": 40.6,
            "balance": 40.6,
            "created_time": "2013-09-11T14:03:06+0530"
        }"#;

        let bill: Bill = serde_json::from_str(json).unwrap();
        assert_eq!(bill.bill_number.as_deref(), Some("00454"));
        assert_eq!(bill.status_kind(), Some(BillStatus::Open));
        assert_eq!(bill.due_date, NaiveDate::from_ymd_opt(2013, 9, 26));
        assert!(bill.line_items.is_empty());
    }

    #[test]
    fn test_bills_filter_encoding() {
        let filter = BillsFilter {
            vendor_name: Some(Condition::starts_with("Bow")),
            total: Some(Condition::greater_or_equal(100).unwrap()),
            status: Some(BillStatus::Open),
            last_modified_time: Some(
                DateTime::parse_from_rfc3339("2024-01-02T03:04:05+05:30").unwrap(),
            ),
            sort_column: Some(BillsSortColumn::DueDate),
            ..Default::default()
        };

        let mut set = FilterSet::new("10234695").with_page(2);
        filter.apply(&mut set).unwrap();
        let pairs = encode(&set);

        assert_eq!(pairs.get("vendor_name_startswith"), Some("Bow"));
        assert_eq!(pairs.get("total_greater_equals"), Some("100"));
        assert_eq!(pairs.get("status"), Some("open"));
        assert_eq!(pairs.get("last_modified_time"), Some("2024-01-02T03:04:05+0530"));
        assert_eq!(pairs.get("sort_column"), Some("due_date"));
        assert_eq!(pairs.get("page"), Some("2"));
    }

    #[test]
    fn test_numeric_condition_rejects_text() {
        assert!(Condition::greater_than("a lot").is_err());
    }

    #[test]
    fn test_bill_catalogs() {
        assert_eq!(BillsFilterBy::PartiallyPaid.as_str(), "Status.PartiallyPaid");
        assert_eq!(BillStatus::parse("void"), Some(BillStatus::Void));
        assert_eq!(BillsSortColumn::ALL.len(), 8);
    }
}
