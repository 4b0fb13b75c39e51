//! Request and response bodies exchanged with the petty cash API.

use serde::{Deserialize, Serialize, Serializer};
use time::Date;

use crate::{
    Error,
    entry::{Category, Entry, EntryType, format_date, number_or_numeric_string, serialize_date},
};

/// Aggregate totals over all entries, or over the entries of a single day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// The sum of all credits.
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub total_in: f64,
    /// The sum of all debits.
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub total_out: f64,
    /// Cash in minus cash out.
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub balance: f64,
}

/// The filters supported by `GET /api/entries`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryQuery {
    /// Text to look for in the description or category.
    pub search: Option<String>,
    /// The earliest date to include.
    pub start_date: Option<Date>,
    /// The latest date to include.
    pub end_date: Option<Date>,
}

impl EntryQuery {
    /// Encode the filters that are set as a URL query string, e.g.
    /// `search=tea&startDate=2025-01-01`.
    ///
    /// Returns an empty string if no filter is set.
    pub fn to_query_string(&self) -> Result<String, Error> {
        let mut pairs = Vec::with_capacity(3);

        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }

        if let Some(start_date) = self.start_date {
            pairs.push(("startDate", format_date(start_date)));
        }

        if let Some(end_date) = self.end_date {
            pairs.push(("endDate", format_date(end_date)));
        }

        serde_urlencoded::to_string(&pairs).map_err(|error| Error::QueryEncoding(error.to_string()))
    }

    /// Whether `entry` satisfies every filter that is set.
    ///
    /// Search text matches the description or the category, ignoring case.
    /// Both date bounds are inclusive.
    pub fn matches(&self, entry: &Entry) -> bool {
        let matches_search = match &self.search {
            Some(search) => {
                let search = search.to_lowercase();
                let description_matches = entry
                    .description
                    .as_deref()
                    .is_some_and(|description| description.to_lowercase().contains(&search));

                description_matches || entry.category.to_lowercase().contains(&search)
            }
            None => true,
        };

        let after_start = self.start_date.is_none_or(|start| entry.date >= start);
        let before_end = self.end_date.is_none_or(|end| entry.date <= end);

        matches_search && after_start && before_end
    }
}

/// The body of a create or update request.
///
/// Optional text fields are sent as empty strings when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryPayload {
    /// The day the cash changed hands.
    #[serde(serialize_with = "serialize_date")]
    pub date: Date,
    /// Free text notes.
    #[serde(serialize_with = "none_as_empty_string")]
    pub description: Option<String>,
    /// What the cash was for.
    pub category: Category,
    /// The amount in rupees, greater than zero.
    pub amount: f64,
    /// Whether the cash went out or came in.
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// The employee who handed over the cash.
    #[serde(serialize_with = "none_as_empty_string")]
    pub cash_from: Option<String>,
    /// The employee who received the cash.
    #[serde(serialize_with = "none_as_empty_string")]
    pub cash_to: Option<String>,
}

fn none_as_empty_string<S>(text: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(text.as_deref().unwrap_or_default())
}

/// The wrapper around every API response: `{success, data | error}`.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub message: Option<String>,
}

/// The parts of an error response body that carry a message.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.error.or(self.message)
    }
}
