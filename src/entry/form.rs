//! The form for adding a new entry or editing an existing one.

use maud::{Markup, html};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    api::EntryPayload,
    endpoints,
    entry::{Category, EMPLOYEES, Entry, EntryId, EntryType, format_date, is_known_employee, parse_date},
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, CARD_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, loading_spinner,
    },
};

/// The raw values submitted by the entry form.
///
/// Values are kept as text so that the form can be shown again with exactly
/// what the user typed when validation fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryFormData {
    pub date: String,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub amount: String,
    pub category: String,
    pub description: String,
    pub cash_from: String,
    pub cash_to: String,
}

/// The reasons the entry form can be rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EntryFormError {
    #[error("Please choose a date")]
    MissingDate,
    #[error("\"{0}\" is not a valid date")]
    InvalidDate(String),
    #[error("\"{0}\" is not a valid entry type")]
    InvalidType(String),
    #[error("Please enter an amount")]
    MissingAmount,
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),
    #[error("Amount must be at least 0.01")]
    AmountTooSmall,
    #[error("Please choose a category")]
    MissingCategory,
    #[error("\"{0}\" is not a known category")]
    UnknownCategory(String),
    #[error("\"{0}\" is not a known employee")]
    UnknownEmployee(String),
}

impl EntryFormData {
    /// A blank form for a new debit dated `today`.
    pub fn blank(today: Date) -> Self {
        Self {
            date: format_date(today),
            entry_type: EntryType::default().as_str().to_owned(),
            ..Default::default()
        }
    }

    /// The form filled with the values of `entry`.
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            date: format_date(entry.date),
            entry_type: entry.entry_type.as_str().to_owned(),
            amount: entry.amount.to_string(),
            category: entry.category.clone(),
            description: entry.description.clone().unwrap_or_default(),
            cash_from: entry.cash_from.clone().unwrap_or_default(),
            cash_to: entry.cash_to.clone().unwrap_or_default(),
        }
    }

    /// Check the form values and convert them into a request body for the API.
    pub fn validate(&self) -> Result<EntryPayload, EntryFormError> {
        let date = match self.date.trim() {
            "" => return Err(EntryFormError::MissingDate),
            date => parse_date(date).map_err(|_| EntryFormError::InvalidDate(date.to_owned()))?,
        };

        let entry_type = self
            .entry_type
            .parse::<EntryType>()
            .map_err(|_| EntryFormError::InvalidType(self.entry_type.clone()))?;

        let amount = match self.amount.trim() {
            "" => return Err(EntryFormError::MissingAmount),
            amount => amount
                .parse::<f64>()
                .ok()
                .filter(|amount| amount.is_finite())
                .ok_or_else(|| EntryFormError::InvalidAmount(amount.to_owned()))?,
        };

        // Amounts are stored to the paisa.
        if amount < 0.01 {
            return Err(EntryFormError::AmountTooSmall);
        }

        let category = match self.category.trim() {
            "" => return Err(EntryFormError::MissingCategory),
            category => category
                .parse::<Category>()
                .map_err(|_| EntryFormError::UnknownCategory(category.to_owned()))?,
        };

        Ok(EntryPayload {
            date,
            description: optional_text(&self.description),
            category,
            amount,
            entry_type,
            cash_from: optional_employee(&self.cash_from)?,
            cash_to: optional_employee(&self.cash_to)?,
        })
    }
}

fn optional_text(text: &str) -> Option<String> {
    let text = text.trim();

    (!text.is_empty()).then(|| text.to_owned())
}

fn optional_employee(name: &str) -> Result<Option<String>, EntryFormError> {
    match optional_text(name) {
        Some(name) if !is_known_employee(&name) => Err(EntryFormError::UnknownEmployee(name)),
        name => Ok(name),
    }
}

/// Whether the form adds a new entry or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormMode<'a> {
    Create,
    Edit(&'a EntryId),
}

/// Render the entry form.
///
/// A successful submission swaps in a fresh form, failures are shown in
/// `error_message` with the submitted values kept.
pub fn entry_form_view(mode: FormMode, values: &EntryFormData, error_message: Option<&str>) -> Markup {
    let (title, idle_label, busy_label) = match mode {
        FormMode::Create => ("Add New Entry", "Add Entry", "Adding..."),
        FormMode::Edit(_) => ("Edit Entry", "Update Entry", "Updating..."),
    };
    let (hx_post, hx_put) = match mode {
        FormMode::Create => (Some(endpoints::ENTRIES.to_owned()), None),
        FormMode::Edit(id) => (None, Some(endpoints::format_endpoint(endpoints::ENTRY, id))),
    };

    html! {
        form
            id="entry-form"
            hx-post=[hx_post]
            hx-put=[hx_put]
            hx-target="this"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            hx-disabled-elt="find button"
            class={ (CARD_STYLE) " space-y-4" }
        {
            h2 class="text-xl font-bold" { (title) }

            div class="grid grid-cols-1 gap-4 md:grid-cols-2"
            {
                div
                {
                    label for="date" class=(FORM_LABEL_STYLE) { "Date" }
                    input
                        id="date"
                        type="date"
                        name="date"
                        required
                        value=(values.date)
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="type" class=(FORM_LABEL_STYLE) { "Type" }
                    select id="type" name="type" required class=(FORM_TEXT_INPUT_STYLE)
                    {
                        @for entry_type in EntryType::ALL {
                            option
                                value=(entry_type.as_str())
                                selected[values.entry_type == entry_type.as_str()]
                            {
                                (entry_type.label())
                            }
                        }
                    }
                }

                div
                {
                    label for="amount" class=(FORM_LABEL_STYLE) { "Amount (₹)" }
                    input
                        id="amount"
                        type="number"
                        name="amount"
                        step="0.01"
                        min="0.01"
                        placeholder="0.00"
                        required
                        value=(values.amount)
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="category" class=(FORM_LABEL_STYLE) { "Category" }
                    select id="category" name="category" required class=(FORM_TEXT_INPUT_STYLE)
                    {
                        option value="" selected[values.category.is_empty()] { "Select category" }

                        @for category in Category::ALL {
                            option
                                value=(category.as_str())
                                selected[values.category == category.as_str()]
                            {
                                (category.as_str())
                            }
                        }
                    }
                }

                (employee_select("cash_from", "Cash From", &values.cash_from))
                (employee_select("cash_to", "Cash To", &values.cash_to))

                div class="md:col-span-2"
                {
                    label for="description" class=(FORM_LABEL_STYLE) { "Description" }
                    textarea
                        id="description"
                        name="description"
                        rows="2"
                        placeholder="Optional details"
                        class=(FORM_TEXT_INPUT_STYLE)
                    {
                        (values.description)
                    }
                }
            }

            @if let Some(error_message) = error_message {
                p id="form-error" class="text-red-600 dark:text-red-400" { (error_message) }
            }

            div class="flex gap-2"
            {
                button type="submit" class=(BUTTON_PRIMARY_STYLE)
                {
                    span class="idle-label" { (idle_label) }
                    span class="busy-label" { (loading_spinner()) (busy_label) }
                }

                @if let FormMode::Edit(_) = mode {
                    button
                        type="button"
                        hx-get=(endpoints::NEW_ENTRY_FORM)
                        hx-target="#entry-form"
                        hx-swap="outerHTML"
                        class=(BUTTON_SECONDARY_STYLE)
                    {
                        "Cancel"
                    }
                }
            }
        }
    }
}

fn employee_select(name: &str, label: &str, selected_name: &str) -> Markup {
    html! {
        div
        {
            label for=(name) class=(FORM_LABEL_STYLE) { (label) }
            select id=(name) name=(name) class=(FORM_TEXT_INPUT_STYLE)
            {
                option value="" selected[selected_name.is_empty()] { "Select employee" }

                @for employee in EMPLOYEES {
                    option value=(employee) selected[selected_name == employee] { (employee) }
                }
            }
        }
    }
}
