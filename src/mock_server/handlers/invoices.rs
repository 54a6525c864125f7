//! Invoice endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::Response,
};
use tokio::sync::RwLock;

use super::{authorize, error, message, page, resource, Params, CODE_INVALID_VALUE, CODE_NOT_FOUND};
use crate::mock_server::state::MockState;
use crate::InvoiceStatus;

fn not_found() -> Response {
    error(
        StatusCode::NOT_FOUND,
        CODE_NOT_FOUND,
        "The invoice does not exist.",
    )
}

/// GET /invoices/{id}
pub async fn get_invoice(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<String>,
    Query(params): Query<Params>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;
    if let Err(denied) = authorize(&state, &headers, &params) {
        return denied;
    }

    match state.invoices.get(&id) {
        Some(invoice) => resource(StatusCode::OK, "success", "invoice", invoice),
        None => not_found(),
    }
}

/// GET /invoices
///
/// Supports `status`.
pub async fn list_invoices(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(params): Query<Params>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;
    if let Err(denied) = authorize(&state, &headers, &params) {
        return denied;
    }

    let invoices = state.list_invoices(params.get("status").map(String::as_str));
    page("invoices", &invoices, &params)
}

/// DELETE /invoices/{id}
pub async fn delete_invoice(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<String>,
    Query(params): Query<Params>,
    headers: HeaderMap,
) -> Response {
    let mut state = state.write().await;
    if let Err(denied) = authorize(&state, &headers, &params) {
        return denied;
    }

    match state.invoices.remove(&id) {
        Some(_) => message("The invoice has been deleted."),
        None => not_found(),
    }
}

/// POST /invoices/{id}/status/{status}
///
/// Accepts `sent`, `void` and `draft`.
pub async fn set_invoice_status(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((id, status)): Path<(String, String)>,
    Query(params): Query<Params>,
    headers: HeaderMap,
) -> Response {
    let mut state = state.write().await;
    if let Err(denied) = authorize(&state, &headers, &params) {
        return denied;
    }

    let target = match InvoiceStatus::parse(&status) {
        Some(s @ (InvoiceStatus::Sent | InvoiceStatus::Void | InvoiceStatus::Draft)) => s,
        _ => {
            return error(
                StatusCode::BAD_REQUEST,
                CODE_INVALID_VALUE,
                "Invalid URL Passed",
            )
        }
    };

    if state.set_invoice_status(&id, target.as_str()) {
        message(&format!("Invoice status has been changed to {target}."))
    } else {
        not_found()
    }
}
