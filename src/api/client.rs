//! An HTTP client for the petty cash REST API.

use reqwest::{StatusCode, Url};
use serde::{Serialize, de::DeserializeOwned, de::IgnoredAny};
use time::Date;

use crate::{
    Error,
    api::models::{EntryPayload, EntryQuery, Envelope, ErrorBody, Summary},
    entry::{Entry, EntryId, format_date},
};

/// Talks to the petty cash API which stores entries and computes totals.
///
/// Cloning is cheap, the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the API served from `base_url`, e.g.
    /// "http://localhost:5000". Endpoints are resolved under `<base_url>/api`.
    ///
    /// # Errors
    /// Returns an error if `base_url` is not an absolute HTTP(S) URL.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let parsed_url = Url::parse(base_url)
            .map_err(|error| Error::InvalidApiUrl(format!("{base_url}: {error}")))?;

        if !matches!(parsed_url.scheme(), "http" | "https") || parsed_url.cannot_be_a_base() {
            return Err(Error::InvalidApiUrl(format!(
                "{base_url}: expected an http or https URL"
            )));
        }

        Ok(Self {
            base_url: parsed_url,
            http: reqwest::Client::new(),
        })
    }

    /// The URL the API is served from.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the totals over all entries, or only the entries on `date`.
    pub async fn get_summary(&self, date: Option<Date>) -> Result<Summary, Error> {
        let mut url = self.endpoint(&["api", "summary"])?;

        if let Some(date) = date {
            url.query_pairs_mut()
                .append_pair("date", &format_date(date));
        }

        tracing::debug!("Fetching summary from {url}");
        let response = self.http.get(url).send().await.map_err(network_error)?;

        read_data(response, "Failed to load summary").await
    }

    /// List the entries matching `query`.
    pub async fn list_entries(&self, query: &EntryQuery) -> Result<Vec<Entry>, Error> {
        let mut url = self.endpoint(&["api", "entries"])?;
        let query_string = query.to_query_string()?;

        if !query_string.is_empty() {
            url.set_query(Some(&query_string));
        }

        tracing::debug!("Fetching entries from {url}");
        let response = self.http.get(url).send().await.map_err(network_error)?;

        read_data(response, "Failed to load entries").await
    }

    /// Record a new entry.
    pub async fn create_entry(&self, payload: &EntryPayload) -> Result<(), Error> {
        let url = self.endpoint(&["api", "entries"])?;

        self.send_json(self.http.post(url), payload, "Failed to add entry")
            .await
    }

    /// Replace the entry `id` with `payload`.
    pub async fn update_entry(&self, id: &EntryId, payload: &EntryPayload) -> Result<(), Error> {
        let url = self.endpoint(&["api", "entries", id.as_str()])?;

        self.send_json(self.http.put(url), payload, "Failed to update entry")
            .await
    }

    /// Remove the entry `id`.
    pub async fn delete_entry(&self, id: &EntryId) -> Result<(), Error> {
        let url = self.endpoint(&["api", "entries", id.as_str()])?;

        tracing::debug!("Deleting entry via {url}");
        let response = self.http.delete(url).send().await.map_err(network_error)?;

        read_envelope::<IgnoredAny>(response, "Failed to delete entry")
            .await
            .map(|_| ())
    }

    async fn send_json(
        &self,
        request: reqwest::RequestBuilder,
        payload: &impl Serialize,
        fallback_message: &str,
    ) -> Result<(), Error> {
        let response = request
            .json(payload)
            .send()
            .await
            .map_err(network_error)?;

        read_envelope::<IgnoredAny>(response, fallback_message)
            .await
            .map(|_| ())
    }

    /// Append `segments` to the base URL, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.set_query(None);

        url.path_segments_mut()
            .map_err(|_| Error::InvalidApiUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }
}

fn network_error(error: reqwest::Error) -> Error {
    tracing::error!("Could not reach the petty cash API: {error}");
    Error::Network(error.to_string())
}

fn server_error_message(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("Server error: {} {reason}", status.as_u16()),
        None => format!("Server error: {}", status.as_u16()),
    }
}

async fn read_data<T: DeserializeOwned>(
    response: reqwest::Response,
    fallback_message: &str,
) -> Result<T, Error> {
    read_envelope::<T>(response, fallback_message)
        .await?
        .data
        .ok_or_else(|| Error::InvalidApiResponse("the response did not include any data".to_owned()))
}

/// Check the status code and the `success` flag of an API response.
///
/// Error messages are taken from the response body's `error` field, then its
/// `message` field, and otherwise fall back to the status code or
/// `fallback_message`.
async fn read_envelope<T: DeserializeOwned>(
    response: reqwest::Response,
    fallback_message: &str,
) -> Result<Envelope<T>, Error> {
    let status = response.status();
    let url = response.url().clone();
    let body = response.text().await.map_err(network_error)?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(ErrorBody::into_message)
            .unwrap_or_else(|| server_error_message(status));

        tracing::error!("The petty cash API responded to {url} with {status}: {body}");
        return Err(Error::ApiRejected(message));
    }

    let envelope: Envelope<T> = serde_json::from_str(&body).map_err(|error| {
        tracing::error!("Could not parse the response from {url}: {error}\nbody: {body}");
        Error::InvalidApiResponse(error.to_string())
    })?;

    if !envelope.success {
        let message = envelope
            .error
            .or(envelope.message)
            .unwrap_or_else(|| fallback_message.to_owned());

        tracing::error!("The petty cash API rejected the request to {url}: {message}");
        return Err(Error::ApiRejected(message));
    }

    Ok(envelope)
}
