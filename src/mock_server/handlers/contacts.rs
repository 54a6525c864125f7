//! Contact endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::Response,
    Json,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use super::{authorize, error, message, page, resource, Params, CODE_INVALID_VALUE, CODE_NOT_FOUND};
use crate::mock_server::{state::MockState, Fixtures};
use crate::ContactsFilterBy;

/// Body of a contact create or update request.
#[derive(Debug, Deserialize)]
pub struct ContactBody {
    pub contact_name: Option<String>,
    pub company_name: Option<String>,
    pub contact_type: Option<String>,
    pub payment_terms: Option<i64>,
    pub currency_id: Option<String>,
}

fn not_found() -> Response {
    error(StatusCode::NOT_FOUND, CODE_NOT_FOUND, "Contact does not exist.")
}

/// GET /contacts/{id}
pub async fn get_contact(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<String>,
    Query(params): Query<Params>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;
    if let Err(denied) = authorize(&state, &headers, &params) {
        return denied;
    }

    match state.contacts.get(&id) {
        Some(contact) => resource(StatusCode::OK, "success", "contact", contact),
        None => not_found(),
    }
}

/// GET /contacts
///
/// Supports `search_text`, `contact_name_startswith` and `filter_by`.
pub async fn list_contacts(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(params): Query<Params>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;
    if let Err(denied) = authorize(&state, &headers, &params) {
        return denied;
    }

    let status = match params.get("filter_by").map(|f| ContactsFilterBy::parse(f)) {
        None | Some(Some(ContactsFilterBy::All)) => None,
        Some(Some(ContactsFilterBy::Active)) => Some("active"),
        Some(Some(ContactsFilterBy::Inactive)) => Some("inactive"),
        Some(_) => {
            return error(
                StatusCode::BAD_REQUEST,
                CODE_INVALID_VALUE,
                "Invalid value passed for filter_by",
            )
        }
    };

    let contacts = state.list_contacts(
        params.get("search_text").map(String::as_str),
        params.get("contact_name_startswith").map(String::as_str),
        status,
    );
    page("contacts", &contacts, &params)
}

/// POST /contacts
pub async fn create_contact(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(params): Query<Params>,
    headers: HeaderMap,
    Json(body): Json<ContactBody>,
) -> Response {
    let mut state = state.write().await;
    if let Err(denied) = authorize(&state, &headers, &params) {
        return denied;
    }

    let Some(name) = body.contact_name.filter(|n| !n.trim().is_empty()) else {
        return error(
            StatusCode::BAD_REQUEST,
            CODE_INVALID_VALUE,
            "Contact name is required.",
        );
    };

    let id = state.next_id();
    let mut contact = Fixtures::minimal_contact(&id, &name);
    contact.company_name = body.company_name;
    if body.contact_type.is_some() {
        contact.contact_type = body.contact_type;
    }
    contact.payment_terms = body.payment_terms;
    contact.currency_id = body.currency_id;

    let response = resource(
        StatusCode::CREATED,
        "The contact has been added.",
        "contact",
        &contact,
    );
    state.contacts.insert(id, contact);
    response
}

/// PUT /contacts/{id}
pub async fn update_contact(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<String>,
    Query(params): Query<Params>,
    headers: HeaderMap,
    Json(body): Json<ContactBody>,
) -> Response {
    let mut state = state.write().await;
    if let Err(denied) = authorize(&state, &headers, &params) {
        return denied;
    }

    let Some(contact) = state.contacts.get_mut(&id) else {
        return not_found();
    };
    if let Some(name) = body.contact_name {
        contact.contact_name = name;
    }
    if body.company_name.is_some() {
        contact.company_name = body.company_name;
    }
    if body.contact_type.is_some() {
        contact.contact_type = body.contact_type;
    }
    if body.payment_terms.is_some() {
        contact.payment_terms = body.payment_terms;
    }
    if body.currency_id.is_some() {
        contact.currency_id = body.currency_id;
    }

    resource(
        StatusCode::OK,
        "Contact information has been saved.",
        "contact",
        &*contact,
    )
}

/// DELETE /contacts/{id}
pub async fn delete_contact(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<String>,
    Query(params): Query<Params>,
    headers: HeaderMap,
) -> Response {
    let mut state = state.write().await;
    if let Err(denied) = authorize(&state, &headers, &params) {
        return denied;
    }

    match state.contacts.remove(&id) {
        Some(_) => message("The contact has been deleted."),
        None => not_found(),
    }
}

/// POST /contacts/{id}/active
pub async fn mark_contact_active(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<String>,
    Query(params): Query<Params>,
    headers: HeaderMap,
) -> Response {
    set_status(state, &id, &params, &headers, "active").await
}

/// POST /contacts/{id}/inactive
pub async fn mark_contact_inactive(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<String>,
    Query(params): Query<Params>,
    headers: HeaderMap,
) -> Response {
    set_status(state, &id, &params, &headers, "inactive").await
}

async fn set_status(
    state: Arc<RwLock<MockState>>,
    id: &str,
    params: &Params,
    headers: &HeaderMap,
    status: &str,
) -> Response {
    let mut state = state.write().await;
    if let Err(denied) = authorize(&state, headers, params) {
        return denied;
    }

    if state.set_contact_status(id, status) {
        message(&format!("The contact has been marked as {status}."))
    } else {
        not_found()
    }
}
