//! The boundary to the petty cash REST API, which owns persistence and aggregation.
//!
//! Every response from the API is wrapped as `{success, data | error}`.

mod client;
mod models;

pub use client::ApiClient;
pub use models::{EntryPayload, EntryQuery, Summary};
