//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, internal_server_error::InternalServerError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The petty cash API could not be reached, or the connection failed
    /// part way through the response.
    #[error("Network error: {0}. Please check if the backend server is running.")]
    Network(String),

    /// The petty cash API answered with an error status or `success: false`.
    ///
    /// The string is the message from the API, or a fallback describing the
    /// failed operation, and is intended to be shown to the user.
    #[error("{0}")]
    ApiRejected(String),

    /// The petty cash API answered with a body that is not a valid response.
    #[error("the petty cash API sent an unexpected response: {0}")]
    InvalidApiResponse(String),

    /// The configured URL for the petty cash API cannot be used.
    #[error("invalid petty cash API URL {0}")]
    InvalidApiUrl(String),

    /// The filters for listing entries could not be encoded as a query string.
    #[error("could not encode the entry filters: {0}")]
    QueryEncoding(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// The certificate or key for serving HTTPS could not be loaded.
    #[error("could not load the TLS certificate and key from {0}")]
    TlsConfig(String),

    /// The table filters in a request's query string could not be parsed.
    #[error("invalid filters: {0}")]
    InvalidFilters(String),

    /// Tried to edit an entry that the API does not know about.
    #[error("tried to edit an entry that does not exist")]
    EditMissingEntry,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            Error::Network(_) => InternalServerError {
                description: "Could not reach the petty cash server",
                fix: "Check that the backend server is running and try again.",
            }
            .into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::Network(_) => (
                StatusCode::BAD_GATEWAY,
                Alert::Error {
                    message: "Could not reach the petty cash server".to_owned(),
                    details: self.to_string(),
                },
            ),
            Error::ApiRejected(details) => (
                StatusCode::BAD_GATEWAY,
                Alert::Error {
                    message: "The petty cash server rejected the request".to_owned(),
                    details,
                },
            ),
            Error::InvalidFilters(details) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid filters".to_owned(),
                    details,
                },
            ),
            Error::EditMissingEntry => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Could not edit entry".to_owned(),
                    details: "The entry could not be found. \
                    Try refreshing the page to see if the entry has been deleted."
                        .to_owned(),
                },
            ),
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Invalid Timezone Settings".to_owned(),
                    details: format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                    ),
                },
            ),
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::Error {
                        message: "Something went wrong".to_owned(),
                        details:
                            "An unexpected error occurred, check the server logs for more details."
                                .to_owned(),
                    },
                )
            }
        };

        (status_code, alert.into_html()).into_response()
    }
}
