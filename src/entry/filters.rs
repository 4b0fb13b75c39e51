//! The table filters and the date selected on the dashboard.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    api::EntryQuery,
    entry::{deserialize_optional_date, empty_string_as_none, format_date},
};

/// The filters sent by the table's filter form, plus the dashboard's selected date.
///
/// Empty inputs are treated as absent, so a cleared date field removes the filter.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EntryFilters {
    #[serde(deserialize_with = "empty_string_as_none")]
    pub search: Option<String>,

    #[serde(
        deserialize_with = "deserialize_optional_date",
        serialize_with = "serialize_optional_date"
    )]
    pub start_date: Option<Date>,

    #[serde(
        deserialize_with = "deserialize_optional_date",
        serialize_with = "serialize_optional_date"
    )]
    pub end_date: Option<Date>,

    /// The date selected on the dashboard.
    #[serde(
        deserialize_with = "deserialize_optional_date",
        serialize_with = "serialize_optional_date"
    )]
    pub date: Option<Date>,

    /// The start date the selected date was last synced with.
    #[serde(
        deserialize_with = "deserialize_optional_date",
        serialize_with = "serialize_optional_date"
    )]
    pub synced_start_date: Option<Date>,

    /// The end date the selected date was last synced with.
    #[serde(
        deserialize_with = "deserialize_optional_date",
        serialize_with = "serialize_optional_date"
    )]
    pub synced_end_date: Option<Date>,
}

fn serialize_optional_date<S>(date: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match date {
        Some(date) => serializer.serialize_str(&format_date(*date)),
        None => serializer.serialize_str(""),
    }
}

impl EntryFilters {
    /// The selected date after applying the table's date filters.
    ///
    /// A single day range or a lone start date selects that day, any other
    /// combination keeps the current selection.
    pub fn selected_date(&self) -> Option<Date> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) if start == end => Some(start),
            (Some(start), None) => Some(start),
            _ => self.date,
        }
    }

    /// Update the selected date from the date filters and remember the
    /// filters it was synced with.
    pub fn synced(self) -> Self {
        Self {
            date: self.selected_date(),
            synced_start_date: self.start_date,
            synced_end_date: self.end_date,
            ..self
        }
    }

    /// Like [EntryFilters::synced], but only if the date filters changed since
    /// the last sync. Otherwise the selected date is left alone, so that a date
    /// picked on the dashboard survives edits to the search text.
    pub fn synced_if_range_changed(self) -> Self {
        if (self.start_date, self.end_date) == (self.synced_start_date, self.synced_end_date) {
            self
        } else {
            self.synced()
        }
    }

    /// The query for listing entries.
    ///
    /// Explicit date filters take priority over the selected date.
    pub fn to_query(&self) -> EntryQuery {
        let search = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|search| !search.is_empty())
            .map(str::to_owned);

        let (start_date, end_date) = if self.start_date.is_some() || self.end_date.is_some() {
            (self.start_date, self.end_date)
        } else {
            (self.date, self.date)
        };

        EntryQuery {
            search,
            start_date,
            end_date,
        }
    }
}
