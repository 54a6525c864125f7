//! HTTP request handlers for the mock server.
//!
//! Every response is a `{code, message, ...}` envelope. Failures carry a
//! non-zero code and an error HTTP status, the way the real service does.

pub mod contacts;
pub mod invoices;

pub use contacts::*;
pub use invoices::*;

use std::collections::HashMap;

use axum::{
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::mock_server::state::MockState;
use crate::{PageContext, DEFAULT_PER_PAGE};

/// Query parameters of any request.
pub type Params = HashMap<String, String>;

pub const CODE_INVALID_VALUE: i64 = 4;
pub const CODE_UNAUTHORIZED: i64 = 57;
pub const CODE_NOT_FOUND: i64 = 1002;
pub const CODE_INVALID_ORGANIZATION: i64 = 6041;

/// An envelope carrying only a non-zero code and a message.
pub fn error(status: StatusCode, code: i64, message: &str) -> Response {
    (status, Json(json!({ "code": code, "message": message }))).into_response()
}

/// An envelope carrying only a success message.
pub fn message(text: &str) -> Response {
    (StatusCode::OK, Json(json!({ "code": 0, "message": text }))).into_response()
}

/// A success envelope with `value` nested under `key`.
pub fn resource<T: Serialize>(status: StatusCode, text: &str, key: &str, value: &T) -> Response {
    match serde_json::to_value(value) {
        Ok(value) => {
            let mut body = Map::new();
            body.insert("code".to_string(), json!(0));
            body.insert("message".to_string(), json!(text));
            body.insert(key.to_string(), value);
            (status, Json(Value::Object(body))).into_response()
        }
        Err(e) => error(StatusCode::INTERNAL_SERVER_ERROR, 1, &e.to_string()),
    }
}

/// A list envelope: one page of `items` under `key` plus its `page_context`.
pub fn page<T: Serialize + Clone>(key: &str, items: &[&T], params: &Params) -> Response {
    let page = params
        .get("page")
        .and_then(|p| p.parse::<u32>().ok())
        .unwrap_or(1)
        .max(1);
    let per_page = params
        .get("per_page")
        .and_then(|p| p.parse::<u32>().ok())
        .unwrap_or(DEFAULT_PER_PAGE)
        .max(1);

    let start = ((page - 1) as usize).saturating_mul(per_page as usize);
    let end = start.saturating_add(per_page as usize).min(items.len());
    let slice: Vec<T> = if start < items.len() {
        items[start..end].iter().map(|i| (*i).clone()).collect()
    } else {
        vec![]
    };
    let context = PageContext::new(page, per_page, end < items.len());

    match (serde_json::to_value(slice), serde_json::to_value(context)) {
        (Ok(items), Ok(context)) => {
            let mut body = Map::new();
            body.insert("code".to_string(), json!(0));
            body.insert("message".to_string(), json!("success"));
            body.insert(key.to_string(), items);
            body.insert("page_context".to_string(), context);
            (StatusCode::OK, Json(Value::Object(body))).into_response()
        }
        (Err(e), _) | (_, Err(e)) => error(StatusCode::INTERNAL_SERVER_ERROR, 1, &e.to_string()),
    }
}

/// Check the token (when one is required) and the organization.
pub fn authorize(state: &MockState, headers: &HeaderMap, params: &Params) -> Result<(), Response> {
    if let Some(ref token) = state.required_token {
        let presented = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split_once(' '))
            .map(|(_, t)| t);
        if presented != Some(token.as_str()) {
            return Err(error(
                StatusCode::UNAUTHORIZED,
                CODE_UNAUTHORIZED,
                "You are not authorized to perform this operation",
            ));
        }
    }

    match params.get("organization_id") {
        Some(org) if *org == state.organization_id => Ok(()),
        _ => Err(error(
            StatusCode::BAD_REQUEST,
            CODE_INVALID_ORGANIZATION,
            "Invalid value passed for organization_id",
        )),
    }
}
