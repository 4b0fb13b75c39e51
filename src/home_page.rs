//! The home page, which holds the entry form, the dashboard and the entry table.

use axum::{
    extract::{FromRef, Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    api::ApiClient,
    dashboard::dashboard_view,
    entries_view::load_entries_and_summary,
    entry::{
        EntryFilters, EntryFormData, FormMode, entries_section_view, entry_form_view,
        entry_table_view,
    },
    html::{PAGE_CONTAINER_STYLE, base},
    timezone::local_today,
};

/// The state needed for the home page.
#[derive(Debug, Clone)]
pub struct HomePageState {
    pub api_client: ApiClient,
    pub local_timezone: String,
}

impl FromRef<AppState> for HomePageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api_client: state.api_client.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Render the home page.
///
/// The query string may carry the table filters and the selected date so that
/// a filtered view can be bookmarked. A query string that cannot be parsed is
/// ignored and the page shows every entry.
pub async fn get_home_page(
    State(state): State<HomePageState>,
    query: Result<Query<EntryFilters>, QueryRejection>,
) -> Result<Response, Error> {
    let today = local_today(&state.local_timezone)?;
    let filters = match query {
        Ok(Query(filters)) => filters.synced(),
        Err(rejection) => {
            tracing::warn!("Ignoring invalid filters: {}", rejection.body_text());
            EntryFilters::default()
        }
    };

    let (entries, summary) = load_entries_and_summary(&state.api_client, &filters).await;

    let content = html! {
        (header_view())

        main class=(PAGE_CONTAINER_STYLE)
        {
            (entry_form_view(FormMode::Create, &EntryFormData::blank(today), None))
            (dashboard_view(&filters, &summary, false))
            (entries_section_view(&filters, entry_table_view(&entries)))
        }

        (footer_view())
    };

    Ok(base("Home", &content).into_response())
}

fn header_view() -> Markup {
    html! {
        header class="bg-white shadow dark:bg-gray-800"
        {
            div class="flex items-center gap-3 px-4 py-4 mx-auto max-w-6xl"
            {
                img class="w-8 h-8" src="/static/favicon.svg" alt="logo";
                h1 class="text-2xl font-bold text-gray-900 dark:text-white" { "Petty Cash Manager" }
            }
        }
    }
}

fn footer_view() -> Markup {
    html! {
        footer class="py-6 text-sm text-center text-gray-500 dark:text-gray-400"
        {
            "Petty Cash Manager. Track daily cash in and cash out."
        }
    }
}
