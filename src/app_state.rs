//! Implements a struct that holds the state of the web server.

use crate::{Error, api::ApiClient, timezone::get_local_offset};

/// The state of the web server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The client for the petty cash API that stores the entries.
    pub api_client: ApiClient,

    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState] that talks to the petty cash API at `api_url`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Asia/Kolkata".
    ///
    /// # Errors
    /// Returns an error if `api_url` is not an HTTP(S) URL or if
    /// `local_timezone` is not a known timezone.
    pub fn new(api_url: &str, local_timezone: &str) -> Result<Self, Error> {
        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
        }

        Ok(Self {
            api_client: ApiClient::new(api_url)?,
            local_timezone: local_timezone.to_owned(),
        })
    }
}
