//! Endpoints for loading an entry into the form and for saving the changes.

use axum::{
    Form,
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use axum_htmx::HX_TRIGGER;

use crate::{
    AppState, Error,
    api::{ApiClient, EntryQuery},
    entry::{ENTRIES_CHANGED_EVENT, EntryFormData, EntryId, FormMode, entry_form_view},
    timezone::local_today,
};

/// The state needed for editing an entry.
#[derive(Debug, Clone)]
pub struct EditEntryState {
    pub api_client: ApiClient,
    pub local_timezone: String,
}

impl FromRef<AppState> for EditEntryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api_client: state.api_client.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Render the entry form filled in with the entry `entry_id`.
///
/// The API has no endpoint for a single entry, so the entry is picked out of
/// the full list.
pub async fn get_edit_entry_form(
    State(state): State<EditEntryState>,
    Path(entry_id): Path<String>,
) -> Response {
    let entry_id = EntryId::new(entry_id);

    let entries = match state.api_client.list_entries(&EntryQuery::default()).await {
        Ok(entries) => entries,
        Err(error) => return error.into_alert_response(),
    };

    match entries.iter().find(|entry| entry.id == entry_id) {
        Some(entry) => entry_form_view(
            FormMode::Edit(&entry_id),
            &EntryFormData::from_entry(entry),
            None,
        )
        .into_response(),
        None => {
            tracing::warn!("Tried to edit entry {entry_id} which does not exist");
            Error::EditMissingEntry.into_alert_response()
        }
    }
}

/// Handle the edit form submission.
///
/// On success the form switches back to adding entries and the entries changed
/// event is announced. Otherwise the edit form is shown again with the
/// submitted values and the reason it was rejected.
pub async fn update_entry_endpoint(
    State(state): State<EditEntryState>,
    Path(entry_id): Path<String>,
    Form(form): Form<EntryFormData>,
) -> Response {
    let entry_id = EntryId::new(entry_id);

    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(error) => {
            return entry_form_view(FormMode::Edit(&entry_id), &form, Some(&error.to_string()))
                .into_response();
        }
    };

    let today = match local_today(&state.local_timezone) {
        Ok(today) => today,
        Err(error) => return error.into_alert_response(),
    };

    if let Err(error) = state.api_client.update_entry(&entry_id, &payload).await {
        tracing::error!("Could not update entry {entry_id}: {error}");
        return entry_form_view(FormMode::Edit(&entry_id), &form, Some(&error.to_string()))
            .into_response();
    }

    tracing::info!("Updated entry {entry_id}");

    (
        [(HX_TRIGGER, ENTRIES_CHANGED_EVENT)],
        entry_form_view(FormMode::Create, &EntryFormData::blank(today), None),
    )
        .into_response()
}


#[cfg(test)]
mod update_entry_endpoint_tests {
    use axum::{
        Form,
        extract::{Path, State},
        http::StatusCode,
    };

    use crate::{
        entry::{EntryFormData, update_entry_endpoint},
        test_utils::{
            MockApi, MockFailure, assert_form_error_message, assert_hx_endpoint, entry_json,
            get_header, must_get_form, parse_html_fragment,
        },
    };

    use super::EditEntryState;

    fn state(api: &MockApi) -> EditEntryState {
        EditEntryState {
            api_client: api.client(),
            local_timezone: "Etc/UTC".to_owned(),
        }
    }

    fn form() -> EntryFormData {
        EntryFormData {
            date: "2025-05-01".to_owned(),
            entry_type: "Credit".to_owned(),
            amount: "500".to_owned(),
            category: "Other".to_owned(),
            description: String::new(),
            cash_from: String::new(),
            cash_to: "Saleem".to_owned(),
        }
    }

    #[tokio::test]
    async fn can_update_entry() {
        let api = MockApi::start(vec![entry_json("5", "2025-05-01", "Tea", 40.0, "Debit")]).await;

        let response =
            update_entry_endpoint(State(state(&api)), Path("5".to_owned()), Form(form())).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(get_header(&response, "hx-trigger"), "entries-changed");
        let stored = &api.entries()[0];
        assert_eq!(stored["type"], "Credit");
        assert_eq!(stored["cash_to"], "Saleem");
        assert_eq!(stored["amount"], 500.0);

        let html = parse_html_fragment(response).await;
        let form = must_get_form(&html);
        assert_hx_endpoint(&form, "/entries", "hx-post");
    }

    #[tokio::test]
    async fn invalid_form_stays_in_edit_mode() {
        let api = MockApi::start(vec![entry_json("5", "2025-05-01", "Tea", 40.0, "Debit")]).await;
        let form = EntryFormData {
            cash_to: "Nobody".to_owned(),
            ..form()
        };

        let response =
            update_entry_endpoint(State(state(&api)), Path("5".to_owned()), Form(form)).await;

        let html = parse_html_fragment(response).await;
        let form = must_get_form(&html);
        assert_hx_endpoint(&form, "/entries/5", "hx-put");
        assert_form_error_message(&form, "\"Nobody\" is not a known employee");
        assert!(api.requests().is_empty());
    }

    #[tokio::test]
    async fn api_failure_stays_in_edit_mode() {
        let api = MockApi::start(vec![entry_json("5", "2025-05-01", "Tea", 40.0, "Debit")]).await;
        api.fail_with(MockFailure::Rejected(None));

        let response =
            update_entry_endpoint(State(state(&api)), Path("5".to_owned()), Form(form())).await;

        assert!(response.headers().get("hx-trigger").is_none());
        let html = parse_html_fragment(response).await;
        let form = must_get_form(&html);
        assert_hx_endpoint(&form, "/entries/5", "hx-put");
        assert_form_error_message(&form, "Failed to update entry");
    }
}
