//! The petty cash entry model and the fixed value sets offered by the entry form.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

/// The date format used by the petty cash API and by HTML date inputs.
pub const DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month repr:numerical padding:zero]-[day padding:zero]");

/// The employees that can hand out or receive cash.
pub const EMPLOYEES: [&str; 13] = [
    "Hiba", "Abu", "Rose", "Aneena", "Nuhman", "Rasheed", "Favas", "Ilyas", "Rashid", "Fahad",
    "Anees", "Saleem", "Others",
];

/// Returns `true` if `name` is one of [EMPLOYEES].
pub fn is_known_employee(name: &str) -> bool {
    EMPLOYEES.contains(&name)
}

/// Identifies an entry in the petty cash API.
///
/// The API may send IDs as JSON numbers or strings, both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Wrap `id` without any validation.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The ID as it appears in URLs.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for EntryId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        let id = match RawId::deserialize(deserializer)? {
            RawId::Text(text) => text,
            RawId::Signed(number) => number.to_string(),
            RawId::Unsigned(number) => number.to_string(),
        };

        if id.trim().is_empty() {
            return Err(de::Error::custom("entry ID cannot be empty"));
        }

        Ok(Self(id))
    }
}

/// Whether cash left or entered the petty cash box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryType {
    /// Cash out.
    #[default]
    Debit,
    /// Cash in.
    Credit,
}

impl EntryType {
    /// Both entry types in the order they are offered in the form.
    pub const ALL: [EntryType; 2] = [EntryType::Debit, EntryType::Credit];

    /// The value sent to the API and used in HTML forms.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Debit => "Debit",
            EntryType::Credit => "Credit",
        }
    }

    /// The human readable label for the form.
    pub fn label(&self) -> &'static str {
        match self {
            EntryType::Debit => "Debit (Cash Out)",
            EntryType::Credit => "Credit (Cash In)",
        }
    }
}

impl FromStr for EntryType {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Debit" => Ok(EntryType::Debit),
            "Credit" => Ok(EntryType::Credit),
            _ => Err(()),
        }
    }
}

/// What the cash was spent on or received for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// Stationery, printer ink and the like.
    #[serde(rename = "Office Supplies")]
    OfficeSupplies,
    /// Fares, fuel and parking.
    Transportation,
    /// Tea and snacks for the office.
    Tea,
    /// Anything else, including top-ups of the cash box.
    Other,
}

impl Category {
    /// Every category in the order they are offered in the form.
    pub const ALL: [Category; 4] = [
        Category::OfficeSupplies,
        Category::Transportation,
        Category::Tea,
        Category::Other,
    ];

    /// The name sent to the API and shown in the table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::OfficeSupplies => "Office Supplies",
            Category::Transportation => "Transportation",
            Category::Tea => "Tea",
            Category::Other => "Other",
        }
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or(())
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One recorded cash transaction, as returned by the petty cash API.
///
/// The category is kept as free text so that entries recorded with a
/// category that has since been retired still display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// The ID assigned by the API.
    pub id: EntryId,
    /// The day the cash changed hands.
    #[serde(
        serialize_with = "serialize_date",
        deserialize_with = "deserialize_date"
    )]
    pub date: Date,
    /// Free text notes, `None` if left blank.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub description: Option<String>,
    /// The category name as stored by the API.
    pub category: String,
    /// The amount in rupees, always positive.
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub amount: f64,
    /// Whether the cash went out or came in.
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// The employee who handed over the cash.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub cash_from: Option<String>,
    /// The employee who received the cash.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub cash_to: Option<String>,
}

/// Format `date` as `YYYY-MM-DD`.
pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

/// Parse a `YYYY-MM-DD` date.
///
/// ISO 8601 date-times are accepted too, only the date part is kept.
pub fn parse_date(text: &str) -> Result<Date, time::error::Parse> {
    let text = text.trim();
    let date_part = text.get(..10).unwrap_or(text);

    Date::parse(date_part, DATE_FORMAT)
}

pub(crate) fn serialize_date<S>(date: &Date, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_date(*date))
}

pub(crate) fn deserialize_date<'de, D>(deserializer: D) -> Result<Date, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;

    parse_date(&text).map_err(|error| de::Error::custom(format!("invalid date {text:?}: {error}")))
}

/// Deserialize an optional date where an empty string means no date.
pub(crate) fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
where
    D: Deserializer<'de>,
{
    match empty_string_as_none(deserializer)? {
        Some(text) => parse_date(&text)
            .map(Some)
            .map_err(|error| de::Error::custom(format!("invalid date {text:?}: {error}"))),
        None => Ok(None),
    }
}

/// Deserialize an optional string where blank strings mean no value.
pub(crate) fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = Option::<String>::deserialize(deserializer)?;

    Ok(text.filter(|text| !text.trim().is_empty()))
}

/// Deserialize an amount sent either as a JSON number or as a numeric string.
pub(crate) fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Number(f64),
        Text(String),
    }

    match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(number) => Ok(number),
        RawAmount::Text(text) => text
            .trim()
            .parse()
            .map_err(|error| de::Error::custom(format!("invalid amount {text:?}: {error}"))),
    }
}
