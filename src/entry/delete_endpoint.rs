//! The endpoint for removing an entry.

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use axum_htmx::HX_TRIGGER;

use crate::{
    AppState,
    alert::Alert,
    api::ApiClient,
    entry::{ENTRIES_CHANGED_EVENT, EntryId},
};

/// The state needed for deleting an entry.
#[derive(Debug, Clone)]
pub struct DeleteEntryState {
    pub api_client: ApiClient,
}

impl FromRef<AppState> for DeleteEntryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api_client: state.api_client.clone(),
        }
    }
}

/// Delete an entry and announce that the entries changed.
pub async fn delete_entry_endpoint(
    State(state): State<DeleteEntryState>,
    Path(entry_id): Path<String>,
) -> Response {
    let entry_id = EntryId::new(entry_id);

    match state.api_client.delete_entry(&entry_id).await {
        Ok(()) => {
            tracing::info!("Deleted entry {entry_id}");

            (
                [(HX_TRIGGER, ENTRIES_CHANGED_EVENT)],
                Alert::SuccessSimple {
                    message: "Entry deleted successfully".to_owned(),
                },
            )
                .into_response()
        }
        Err(error) => {
            tracing::error!("Could not delete entry {entry_id}: {error}");
            error.into_alert_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };

    use crate::{
        entry::delete_entry_endpoint,
        test_utils::{MockApi, entry_json, get_header, parse_html_fragment},
    };

    use super::DeleteEntryState;

    #[tokio::test]
    async fn can_delete_entry() {
        let api = MockApi::start(vec![
            entry_json("1", "2025-05-01", "Tea", 40.0, "Debit"),
            entry_json("2", "2025-05-01", "Other", 10.0, "Debit"),
        ])
        .await;
        let state = DeleteEntryState {
            api_client: api.client(),
        };

        let response = delete_entry_endpoint(State(state), Path("1".to_owned())).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(get_header(&response, "hx-trigger"), "entries-changed");
        assert_eq!(api.entries().len(), 1);
        assert_eq!(api.entries()[0]["id"], "2");

        let html = parse_html_fragment(response).await;
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("Entry deleted successfully"), "got {text:?}");
    }

    #[tokio::test]
    async fn missing_entry_shows_api_message() {
        let api = MockApi::start(vec![]).await;
        let state = DeleteEntryState {
            api_client: api.client(),
        };

        let response = delete_entry_endpoint(State(state), Path("1".to_owned())).await;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert!(response.headers().get("hx-trigger").is_none());
        let html = parse_html_fragment(response).await;
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("Entry not found"), "got {text:?}");
    }
}
