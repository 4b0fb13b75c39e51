//! Dashboard module
//!
//! Shows the cash in, cash out and balance over all entries, or over the
//! entries of the selected date.

mod cards;

use maud::{Markup, html};
use time::Date;

use crate::{
    Error,
    api::Summary,
    endpoints,
    entry::{EntryFilters, format_date},
    html::{
        BUTTON_SECONDARY_STYLE, CARD_STYLE, FORM_TEXT_INPUT_STYLE, HIDE_WHILE_LOADING_CLASS,
        format_display_date,
    },
};

use cards::{summary_cards_skeleton, summary_cards_view};

/// The inputs holding the selected date and the date filters it was last
/// synced with. Every request that reloads the entry table sends them.
pub const DATE_STATE_INPUTS: &str = "#selected-date, #synced-start-date, #synced-end-date";

/// Render the dashboard for the date selected in `filters`.
///
/// Set `out_of_band` when the dashboard is sent alongside the entry table so
/// that htmx swaps it into the existing `#dashboard` element.
pub fn dashboard_view(
    filters: &EntryFilters,
    summary: &Result<Summary, Error>,
    out_of_band: bool,
) -> Markup {
    let selected_date = filters.date;
    let heading = match selected_date {
        Some(date) => format!("Summary for {}", format_display_date(date)),
        None => "Summary".to_owned(),
    };
    let date_value = date_input_value(selected_date);
    let synced_start_date = date_input_value(filters.synced_start_date);
    let synced_end_date = date_input_value(filters.synced_end_date);

    html! {
        section
            id="dashboard"
            hx-swap-oob=[out_of_band.then_some("true")]
            class={ (CARD_STYLE) " space-y-4" }
        {
            div class="flex flex-wrap items-center justify-between gap-4"
            {
                h2 class="text-xl font-bold" { (heading) }

                div class="flex items-center gap-2"
                {
                    label for="selected-date" class="sr-only" { "Selected date" }
                    input
                        id="selected-date"
                        type="date"
                        name="date"
                        value=(date_value)
                        hx-get=(endpoints::ENTRIES_VIEW)
                        hx-trigger="change"
                        hx-target="#entry-table"
                        hx-swap="outerHTML"
                        hx-include="#entry-filters, #synced-start-date, #synced-end-date"
                        hx-indicator="#dashboard-skeleton, #entry-table-skeleton"
                        class=(FORM_TEXT_INPUT_STYLE);
                    input
                        id="synced-start-date"
                        type="hidden"
                        name="synced_start_date"
                        value=(synced_start_date);
                    input
                        id="synced-end-date"
                        type="hidden"
                        name="synced_end_date"
                        value=(synced_end_date);

                    @if selected_date.is_some() {
                        button
                            id="show-all-days"
                            type="button"
                            hx-get=(endpoints::ENTRIES_VIEW)
                            hx-vals=(r#"{"date": ""}"#)
                            hx-target="#entry-table"
                            hx-swap="outerHTML"
                            hx-include="#entry-filters, #synced-start-date, #synced-end-date"
                            hx-indicator="#dashboard-skeleton, #entry-table-skeleton"
                            class=(BUTTON_SECONDARY_STYLE)
                        {
                            "Show all days"
                        }
                    }
                }
            }

            div id="dashboard-skeleton" class="htmx-indicator" aria-hidden="true"
            {
                (summary_cards_skeleton())
            }

            div class=(HIDE_WHILE_LOADING_CLASS)
            {
                @match summary {
                    Ok(summary) => (summary_cards_view(summary, selected_date.is_some())),
                    Err(error) => {
                        p class="text-red-600 dark:text-red-400" { (error.to_string()) }
                    }
                }
            }
        }
    }
}

fn date_input_value(date: Option<Date>) -> String {
    date.map(format_date).unwrap_or_default()
}
