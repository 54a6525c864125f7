//! Item model and trait implementations.

use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::CustomField;
use crate::envelope::{CandidateKey, Candidates};
use crate::error::Result;
use crate::filter::{Condition, FilterSet, QueryFilter};
use crate::traits::{send_message_only, Create, Delete, Get, List, Resource, Update};
use crate::transport::Transport;

/// A product or service that can be sold or purchased.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub item_id: String,

    pub name: String,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Sales rate.
    #[serde(default)]
    pub rate: Option<f64>,

    #[serde(default)]
    pub unit: Option<String>,

    #[serde(default)]
    pub sku: Option<String>,

    /// `goods` or `service`.
    #[serde(default)]
    pub product_type: Option<String>,

    #[serde(default)]
    pub tax_id: Option<String>,

    #[serde(default)]
    pub tax_name: Option<String>,

    #[serde(default)]
    pub tax_percentage: Option<f64>,

    #[serde(default)]
    pub account_id: Option<String>,

    #[serde(default)]
    pub purchase_description: Option<String>,

    #[serde(default)]
    pub purchase_rate: Option<f64>,

    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
}

impl Item {
    pub fn is_active(&self) -> bool {
        self.status.as_deref().map_or(true, |s| s == "active")
    }

    /// Mark an item as active.
    ///
    /// # Errors
    ///
    /// Returns [`BooksError::Remote`](crate::BooksError::Remote) if the
    /// service refuses, or a transport/decode error.
    pub async fn mark_active(client: &dyn Transport, id: &str) -> Result<String> {
        let path = format!("{}/active", Self::item_path(id));
        send_message_only(client, Method::POST, &path).await
    }

    /// Mark an item as inactive.
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

/// Request body for creating or updating an item.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ItemParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
}

catalog! {
    ItemsFilterBy {
        All => "Status.All",
        Active => "Status.Active",
        Inactive => "Status.Inactive",
    }
}

catalog! {
    ItemsSortColumn {
        Name => "name",
        Rate => "rate",
        TaxName => "tax_name",
    }
}

/// Query filter for listing items.
#[derive(Debug, Clone, Default)]
pub struct ItemsFilter {
    pub name: Option<Condition>,
    pub description: Option<Condition>,
    /// Sales rate; accepts the numeric variants.
    pub rate: Option<Condition>,
    pub tax_id: Option<String>,
    pub tax_name: Option<String>,
    pub account_id: Option<String>,
    pub search_text: Option<String>,
    pub filter_by: Option<ItemsFilterBy>,
    pub sort_column: Option<ItemsSortColumn>,
}

impl QueryFilter for ItemsFilter {
    fn apply(&self, set: &mut FilterSet) -> Result<()> {
        set.set_opt("name", self.name.as_ref())?;
        set.set_opt("description", self.description.as_ref())?;
        set.set_opt("rate", self.rate.as_ref())?;
        set.set_value_opt("tax_id", self.tax_id.as_ref())?;
        set.set_value_opt("tax_name", self.tax_name.as_ref())?;
        set.set_value_opt("account_id", self.account_id.as_ref())?;
        set.set_value_opt("search_text", self.search_text.as_ref())?;
        set.set_value_opt("filter_by", self.filter_by.as_ref())?;
        set.set_value_opt("sort_column", self.sort_column.as_ref())?;
        Ok(())
    }
}

const ITEM_KEYS: &[CandidateKey] = &[CandidateKey::single("item"), CandidateKey::sequence("items")];

impl Resource for Item {
    const NAME: &'static str = "item";
    const PATH: &'static str = "items";
    const KEYS: Candidates = Candidates::new(ITEM_KEYS);
}

#[async_trait]
impl Get for Item {}

#[async_trait]
impl List for Item {
    type Filter = ItemsFilter;
}

#[async_trait]
impl Create for Item {
    type Params = ItemParams;
}

#[async_trait]
impl Update for Item {
    type Params = ItemParams;
}

#[async_trait]
impl Delete for Item {}
