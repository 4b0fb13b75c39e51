//! Alert system for displaying success and error messages to users.
//!
//! Alerts are swapped into the `#alert-container` element that every page
//! provides, and can be dismissed by the user.

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

/// A success message, or an error message with more details.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    SuccessSimple { message: String },
    Error { message: String, details: String },
}

impl Alert {
    pub fn into_html(self) -> Markup {
        let (is_error, message, details) = match self {
            Alert::SuccessSimple { message } => (false, message, None),
            Alert::Error { message, details } => (true, message, Some(details)),
        };

        let style = if is_error {
            "border-l-4 border-red-500 bg-red-50 text-red-700 \
            dark:bg-gray-800 dark:text-red-400"
        } else {
            "border-l-4 border-green-500 bg-green-50 text-green-700 \
            dark:bg-gray-800 dark:text-green-400"
        };

        html! {
            div
                role="alert"
                class={ "flex items-start justify-between gap-4 p-4 mb-4 rounded-lg shadow-lg " (style) }
            {
                div
                {
                    p class="font-medium" { (message) }

                    @if let Some(details) = details.filter(|details| !details.is_empty()) {
                        p class="text-sm mt-1" { (details) }
                    }
                }

                button
                    type="button"
                    aria-label="Dismiss"
                    class="text-lg leading-none opacity-70 hover:opacity-100"
                    onclick="this.closest('[role=alert]').remove()"
                {
                    "×"
                }
            }
        }
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        self.into_html().into_response()
    }
}
