//! The partial that reloads the entry table together with the dashboard.

use axum::{
    extract::{FromRef, Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use axum_htmx::HxTrigger;
use maud::html;

use crate::{
    AppState, Error,
    api::{ApiClient, Summary},
    dashboard::dashboard_view,
    entry::{Entry, EntryFilters, entry_table_view},
};

/// The id of the filter form, sent by htmx when the filters trigger a reload.
pub const FILTER_FORM_ID: &str = "entry-filters";

/// The state needed for loading the entry table.
#[derive(Debug, Clone)]
pub struct EntriesViewState {
    pub api_client: ApiClient,
}

impl FromRef<AppState> for EntriesViewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api_client: state.api_client.clone(),
        }
    }
}

/// Render the entry table for `filters` and swap in the matching dashboard.
///
/// The selected date only follows the date filters when the filter form sent
/// a new date range. Search edits, dashboard changes and reloads after an edit
/// keep the date they were sent with.
///
/// Filters that cannot be parsed are answered with an error alert.
pub async fn get_entries_view(
    State(state): State<EntriesViewState>,
    HxTrigger(trigger): HxTrigger,
    query: Result<Query<EntryFilters>, QueryRejection>,
) -> Response {
    let filters = match query {
        Ok(Query(filters)) => filters,
        Err(rejection) => {
            return Error::InvalidFilters(rejection.body_text()).into_alert_response();
        }
    };

    let filters = if trigger.as_deref() == Some(FILTER_FORM_ID) {
        filters.synced_if_range_changed()
    } else {
        filters
    };

    let (entries, summary) = load_entries_and_summary(&state.api_client, &filters).await;

    html! {
        (entry_table_view(&entries))
        (dashboard_view(&filters, &summary, true))
    }
    .into_response()
}

/// Fetch the entries matching `filters` and the summary for the selected date
/// at the same time.
///
/// The entries are filtered again locally in case the API ignored a filter.
pub(crate) async fn load_entries_and_summary(
    api_client: &ApiClient,
    filters: &EntryFilters,
) -> (Result<Vec<Entry>, Error>, Result<Summary, Error>) {
    let query = filters.to_query();

    let (entries, summary) = tokio::join!(
        api_client.list_entries(&query),
        api_client.get_summary(filters.date)
    );

    let entries = entries.map(|entries| {
        entries
            .into_iter()
            .filter(|entry| query.matches(entry))
            .collect()
    });

    (entries, summary)
}
