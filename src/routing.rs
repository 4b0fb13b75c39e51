//! Application router configuration.

use std::path::Path;

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints,
    entries_view::get_entries_view,
    entry::{
        create_entry_endpoint, delete_entry_endpoint, get_edit_entry_form, get_new_entry_form,
        update_entry_endpoint,
    },
    home_page::get_home_page,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
///
/// Static assets are served from `static_dir`.
pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_home_page))
        .route(endpoints::ENTRIES_VIEW, get(get_entries_view))
        .route(endpoints::NEW_ENTRY_FORM, get(get_new_entry_form))
        .route(endpoints::EDIT_ENTRY_FORM, get(get_edit_entry_form))
        .route(endpoints::ENTRIES, post(create_entry_endpoint))
        .route(
            endpoints::ENTRY,
            put(update_entry_endpoint).delete(delete_entry_endpoint),
        )
        .nest_service(endpoints::STATIC, ServeDir::new(static_dir.as_ref()))
        .fallback(get_404_not_found)
        .with_state(state)
}
