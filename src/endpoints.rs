//! The endpoint URIs served by the petty cash web app.
//!
//! For endpoints that take a parameter, e.g., '/entries/{entry_id}', use [format_endpoint].

/// The home page with the entry form, the dashboard and the entry table.
pub const ROOT: &str = "/";
/// The entry table and, out of band, the dashboard for the given filters.
pub const ENTRIES_VIEW: &str = "/view/entries";
/// A blank form for adding an entry.
pub const NEW_ENTRY_FORM: &str = "/entries/new";
/// The form for editing an existing entry.
pub const EDIT_ENTRY_FORM: &str = "/entries/{entry_id}/edit";
/// The route to create an entry.
pub const ENTRIES: &str = "/entries";
/// The route to update or delete a single entry.
pub const ENTRY: &str = "/entries/{entry_id}";
/// The route for static files.
pub const STATIC: &str = "/static";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/entries/{entry_id}', '{entry_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: impl std::fmt::Display) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|offset| param_start + offset + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
