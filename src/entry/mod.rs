//! Petty cash entries: the entry form, the entry table and the endpoints that
//! add, change and remove entries through the petty cash API.

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod filters;
mod form;
mod table;

/// The htmx event announced after an entry is added, changed or removed.
///
/// The entry table listens for it and reloads itself, along with the dashboard.
pub const ENTRIES_CHANGED_EVENT: &str = "entries-changed";

pub use core::{
    Category, EMPLOYEES, Entry, EntryId, EntryType, format_date, is_known_employee, parse_date,
};
pub(crate) use core::{
    deserialize_optional_date, empty_string_as_none, number_or_numeric_string, serialize_date,
};
pub use create_endpoint::{create_entry_endpoint, get_new_entry_form};
pub use delete_endpoint::delete_entry_endpoint;
pub use edit_endpoint::{get_edit_entry_form, update_entry_endpoint};
pub use filters::EntryFilters;
pub use form::{EntryFormData, FormMode, entry_form_view};
pub use table::{entries_section_view, entry_table_view};
