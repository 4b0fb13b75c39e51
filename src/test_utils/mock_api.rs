//! An in-process stand-in for the petty cash API.
//!
//! The mock keeps entries as raw JSON, records every request it receives and
//! ignores the list filters so that tests can check both the query that was
//! sent and the filtering done on our side.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use crate::api::ApiClient;

/// A request received by the mock API.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub body: Option<Value>,
}

/// How the mock API should answer every following request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum MockFailure {
    /// Answer `200 OK` with `success: false` and the given error message.
    Rejected(Option<&'static str>),
    /// Answer `500 Internal Server Error` with a plain text body.
    PlainTextServerError,
    /// Answer `200 OK` with a body that is not JSON.
    NotJson,
    /// Answer `200 OK` with `success: true` and no data.
    MissingData,
}

#[derive(Debug, Default)]
struct MockState {
    entries: Vec<Value>,
    requests: Vec<RecordedRequest>,
    failure: Option<MockFailure>,
    next_id: u64,
}

type SharedState = Arc<Mutex<MockState>>;

/// A running mock API server.
pub(crate) struct MockApi {
    base_url: String,
    state: SharedState,
}

impl MockApi {
    /// Serve the mock API on an ephemeral local port, seeded with `entries`.
    pub async fn start(entries: Vec<Value>) -> Self {
        let state = Arc::new(Mutex::new(MockState {
            next_id: entries.len() as u64 + 1,
            entries,
            ..Default::default()
        }));

        let router = Router::new()
            .fallback(handle_request)
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Could not bind mock API listener");
        let address = listener
            .local_addr()
            .expect("Could not get mock API address");

        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Mock API server failed");
        });

        Self {
            base_url: format!("http://{address}"),
            state,
        }
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.base_url).expect("Could not create client for mock API")
    }

    pub fn fail_with(&self, failure: MockFailure) {
        self.lock().failure = Some(failure);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    pub fn entries(&self) -> Vec<Value> {
        self.lock().entries.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().expect("Mock API state lock poisoned")
    }
}

/// An entry as the real API sends it.
pub(crate) fn entry_json(id: &str, date: &str, category: &str, amount: f64, entry_type: &str) -> Value {
    json!({
        "id": id,
        "date": date,
        "description": "",
        "category": category,
        "amount": amount,
        "type": entry_type,
        "cash_from": "",
        "cash_to": ""
    })
}

/// The URL of a local port that nothing is listening on.
pub(crate) async fn unreachable_api_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Could not bind listener");
    let address = listener.local_addr().expect("Could not get address");
    drop(listener);

    format!("http://{address}")
}

async fn handle_request(
    State(state): State<SharedState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let mut state = state.lock().expect("Mock API state lock poisoned");

    let body = serde_json::from_slice::<Value>(&body).ok();
    state.requests.push(RecordedRequest {
        method: method.clone(),
        path: uri.path().to_owned(),
        query: uri.query().map(str::to_owned),
        body: body.clone(),
    });

    match state.failure {
        Some(MockFailure::Rejected(Some(message))) => {
            return Json(json!({ "success": false, "error": message })).into_response();
        }
        Some(MockFailure::Rejected(None)) => {
            return Json(json!({ "success": false })).into_response();
        }
        Some(MockFailure::PlainTextServerError) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response();
        }
        Some(MockFailure::NotJson) => {
            return "<html><body>Welcome to nginx!</body></html>".into_response();
        }
        Some(MockFailure::MissingData) => {
            return Json(json!({ "success": true })).into_response();
        }
        None => {}
    }

    let segments = uri
        .path()
        .trim_matches('/')
        .split('/')
        .collect::<Vec<_>>();

    match (method, segments.as_slice()) {
        (Method::GET, ["api", "summary"]) => {
            let date = uri.query().and_then(|query| {
                query
                    .split('&')
                    .find_map(|pair| pair.strip_prefix("date="))
                    .map(str::to_owned)
            });
            Json(json!({ "success": true, "data": summarise(&state.entries, date.as_deref()) }))
                .into_response()
        }
        (Method::GET, ["api", "entries"]) => {
            Json(json!({ "success": true, "data": state.entries })).into_response()
        }
        (Method::POST, ["api", "entries"]) => {
            let mut entry = body.unwrap_or_else(|| json!({}));
            entry["id"] = json!(state.next_id);
            state.next_id += 1;
            state.entries.push(entry.clone());

            (
                StatusCode::CREATED,
                Json(json!({ "success": true, "data": entry })),
            )
                .into_response()
        }
        (Method::PUT, ["api", "entries", id]) => {
            let Some(entry) = state.entries.iter_mut().find(|entry| has_id(entry, id)) else {
                return entry_not_found();
            };

            let id = entry["id"].clone();
            *entry = body.unwrap_or_else(|| json!({}));
            entry["id"] = id;

            Json(json!({ "success": true, "data": entry })).into_response()
        }
        (Method::DELETE, ["api", "entries", id]) => {
            let count_before = state.entries.len();
            state.entries.retain(|entry| !has_id(entry, id));

            if state.entries.len() == count_before {
                return entry_not_found();
            }

            Json(json!({ "success": true, "message": "Entry deleted" })).into_response()
        }
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "error": "Route not found" })),
        )
            .into_response(),
    }
}

fn has_id(entry: &Value, id: &str) -> bool {
    match &entry["id"] {
        Value::String(entry_id) => entry_id == id,
        Value::Number(entry_id) => entry_id.to_string() == id,
        _ => false,
    }
}

fn entry_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "success": false, "error": "Entry not found" })),
    )
        .into_response()
}

fn summarise(entries: &[Value], date: Option<&str>) -> Value {
    let (total_in, total_out) = entries
        .iter()
        .filter(|entry| date.is_none_or(|date| entry["date"].as_str() == Some(date)))
        .fold((0.0, 0.0), |(total_in, total_out), entry| {
            let amount = entry["amount"].as_f64().unwrap_or_default();

            if entry["type"] == "Credit" {
                (total_in + amount, total_out)
            } else {
                (total_in, total_out + amount)
            }
        });

    json!({
        "totalIn": total_in,
        "totalOut": total_out,
        "balance": total_in - total_out,
    })
}
