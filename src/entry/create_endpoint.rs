//! Endpoints for showing a blank entry form and for adding an entry.

use axum::{
    Form,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use axum_htmx::HX_TRIGGER;

use crate::{
    AppState,
    api::ApiClient,
    entry::{ENTRIES_CHANGED_EVENT, EntryFormData, FormMode, entry_form_view},
    timezone::local_today,
};

/// The state needed for adding an entry.
#[derive(Debug, Clone)]
pub struct CreateEntryState {
    pub api_client: ApiClient,
    pub local_timezone: String,
}

impl FromRef<AppState> for CreateEntryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api_client: state.api_client.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Render a blank form for adding an entry, e.g. when cancelling an edit.
pub async fn get_new_entry_form(State(state): State<CreateEntryState>) -> Response {
    match local_today(&state.local_timezone) {
        Ok(today) => {
            entry_form_view(FormMode::Create, &EntryFormData::blank(today), None).into_response()
        }
        Err(error) => error.into_alert_response(),
    }
}

/// Handle the entry form submission.
///
/// On success the form is cleared and the entries changed event is announced.
/// Otherwise the form is shown again with the submitted values and the reason
/// it was rejected.
pub async fn create_entry_endpoint(
    State(state): State<CreateEntryState>,
    Form(form): Form<EntryFormData>,
) -> Response {
    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(error) => {
            return entry_form_view(FormMode::Create, &form, Some(&error.to_string()))
                .into_response();
        }
    };

    let today = match local_today(&state.local_timezone) {
        Ok(today) => today,
        Err(error) => return error.into_alert_response(),
    };

    if let Err(error) = state.api_client.create_entry(&payload).await {
        tracing::error!("Could not add entry {payload:?}: {error}");
        return entry_form_view(FormMode::Create, &form, Some(&error.to_string())).into_response();
    }

    tracing::info!("Added entry dated {} for {}", payload.date, payload.amount);

    (
        [(HX_TRIGGER, ENTRIES_CHANGED_EVENT)],
        entry_form_view(FormMode::Create, &EntryFormData::blank(today), None),
    )
        .into_response()
}
