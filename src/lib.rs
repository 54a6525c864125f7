//! Zoho Books API client library.
//!
//! A Rust library for the Zoho Books REST API. Three pieces carry every
//! call: the filter encoder turns structured filters into query pairs, the
//! envelope decoder unwraps the `{code, message, <resource>}` response
//! wrapper, and the page walker repeats requests until the server reports no
//! further pages. Entity types implement operation traits on top of them.
//!
//! # Quick Start
//!
//! ```no_run
//! use zohobooks::{BooksClient, Condition, Contact, ContactsFilter, Get, List};
//!
//! #[tokio::main]
//! async fn main() -> zohobooks::Result<()> {
//!     // Create client from environment variables
//!     let client = BooksClient::from_env()?;
//!
//!     // Get a contact by ID
//!     let contact = Contact::get(&client, "460000000026049").await?;
//!     println!("Contact: {}", contact.contact_name);
//!
//!     // List every contact whose name starts with "Bow"
//!     let filter = ContactsFilter {
//!         contact_name: Some(Condition::starts_with("Bow")),
//!         ..Default::default()
//!     };
//!     let contacts = Contact::list_all(&client, &filter).await?;
//!     println!("Found {} contacts", contacts.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`encode`] - Canonical query pairs for a [`FilterSet`]
//! - [`decode`], [`decode_single`], [`decode_page`] - Candidate-key envelope decoding
//! - [`PageWalker`] - Sequential page walking driven by `has_more_page`
//! - [`Transport`] - The request boundary; [`BooksClient`] implements it over HTTP
//!
//! Operation traits ([`Get`], [`List`], [`Create`], [`Update`], [`Delete`])
//! are implemented by [`Contact`], [`Invoice`], [`Bill`] and [`Item`].
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `ZOHO_BOOKS_AUTH_TOKEN` (required) - API token
//! - `ZOHO_BOOKS_ORGANIZATION_ID` (required) - Organization sent with every request
//! - `ZOHO_BOOKS_API_URL` (optional) - Base URL (defaults to `https://books.zoho.com/api/v3/`)
//! - `ZOHO_BOOKS_AUTH_SCHEME` (optional) - `oauth` (default) or `authtoken`

mod client;
mod envelope;
mod error;
mod filter;
mod models;
mod pagination;
mod traits;
mod transport;

pub mod cli;
pub mod output;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::{AuthScheme, BooksClient};
pub use error::{BooksError, Result};
pub use transport::Transport;
pub use output::PrettyPrint;

// Filter encoder
pub use filter::{
    encode, to_snake_case, ComparisonVariant, Condition, FilterField, FilterSet, FilterValue,
    QueryFilter, QueryPairs, VariantFamily, DATE_FORMAT, DATE_TIME_FORMAT, ORGANIZATION_ID_KEY,
};

// Envelope decoder
pub use envelope::{
    decode, decode_page, decode_sequence, decode_single, CandidateKey, Candidates, Envelope,
    PageContext, PagedEnvelope, Payload, Shape,
};

// Page walker
pub use pagination::{fetch_from, CancelFlag, Page, PageFuture, PageWalker, DEFAULT_PER_PAGE};

// Re-export traits
pub use traits::{Create, Delete, Get, List, Resource, Update};

// Re-export models
pub use models::{
    // Shared
    CustomField,
    LineItem,
    // Contact types
    Contact,
    ContactParams,
    ContactPerson,
    ContactsFilter,
    ContactsFilterBy,
    ContactsSortBy,
    // Invoice types
    Invoice,
    InvoiceParams,
    InvoiceStatus,
    InvoicesFilter,
    InvoicesFilterBy,
    InvoicesSortColumn,
    // Bill types
    Bill,
    BillParams,
    BillStatus,
    BillsFilter,
    BillsFilterBy,
    BillsSortColumn,
    // Item types
    Item,
    ItemParams,
    ItemsFilter,
    ItemsFilterBy,
    ItemsSortColumn,
};
