//! Mock Zoho Books API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the Zoho
//! Books API for integration and end-to-end testing. Unlike wiremock which
//! mocks at the HTTP level per-test, this server maintains state across
//! requests and pages its list endpoints with real `page_context` cursors,
//! enabling realistic workflow testing.
//!
//! # Example
//!
//! ```ignore
//! use zohobooks::mock_server::MockServer;
//! use zohobooks::{BooksClient, Contact, Get};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = BooksClient::new("test-token", "10234695", server.url()).unwrap();
//!
//!     // Server comes with default fixtures
//!     let contact = Contact::get(&client, "460000000026049").await.unwrap();
//!     assert_eq!(contact.contact_name, "Bowman and Co");
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures};
pub use server::MockServer;
pub use state::{MockState, DEFAULT_ORGANIZATION_ID};
