//! The entry table with its search and date filters.

use maud::{Markup, html};

use crate::{
    Error, endpoints,
    entry::{ENTRIES_CHANGED_EVENT, Entry, EntryFilters, EntryType, format_date},
    dashboard::DATE_STATE_INPUTS,
    html::{
        BUTTON_DELETE_STYLE, BUTTON_EDIT_STYLE, CARD_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, HIDE_WHILE_LOADING_CLASS, TABLE_CELL_STYLE, TABLE_HEADER_STYLE,
        TABLE_ROW_STYLE, format_display_date, format_rupees,
    },
};

/// The card holding the filters, the loading skeleton and the table.
pub fn entries_section_view(filters: &EntryFilters, table: Markup) -> Markup {
    html! {
        section class=(CARD_STYLE)
        {
            h2 class="mb-4 text-xl font-bold" { "Entries" }

            (entry_filters_view(filters))
            (entry_table_skeleton())
            (table)
        }
    }
}

/// The search and date range inputs.
///
/// Any change reloads the table, which also keeps the dashboard in sync with
/// the chosen dates.
pub fn entry_filters_view(filters: &EntryFilters) -> Markup {
    let start_date = filters.start_date.map(format_date).unwrap_or_default();
    let end_date = filters.end_date.map(format_date).unwrap_or_default();

    html! {
        form
            id="entry-filters"
            hx-get=(endpoints::ENTRIES_VIEW)
            hx-trigger="input delay:300ms, submit"
            hx-target="#entry-table"
            hx-swap="outerHTML"
            hx-include=(DATE_STATE_INPUTS)
            hx-indicator="#dashboard-skeleton, #entry-table-skeleton"
            class="grid grid-cols-1 gap-4 mb-4 md:grid-cols-3"
        {
            div
            {
                label for="search" class=(FORM_LABEL_STYLE) { "Search" }
                input
                    id="search"
                    type="search"
                    name="search"
                    placeholder="Search by description or category"
                    value=(filters.search.as_deref().unwrap_or_default())
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="start_date" class=(FORM_LABEL_STYLE) { "Start Date" }
                input
                    id="start_date"
                    type="date"
                    name="start_date"
                    value=(start_date)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="end_date" class=(FORM_LABEL_STYLE) { "End Date" }
                input
                    id="end_date"
                    type="date"
                    name="end_date"
                    value=(end_date)
                    class=(FORM_TEXT_INPUT_STYLE);
            }
        }
    }
}

/// Pulsing placeholder rows shown while the table reloads.
fn entry_table_skeleton() -> Markup {
    html! {
        div id="entry-table-skeleton" class="htmx-indicator space-y-3 mb-4" aria-hidden="true"
        {
            @for _ in 0..5 {
                div class="h-8 bg-gray-200 rounded animate-pulse dark:bg-gray-700" {}
            }
        }
    }
}

/// The table rows, or a message explaining why there are none.
///
/// The table reloads itself with the current filters whenever an entry is
/// added, changed or removed.
pub fn entry_table_view(entries: &Result<Vec<Entry>, Error>) -> Markup {
    html! {
        div
            id="entry-table"
            hx-get=(endpoints::ENTRIES_VIEW)
            hx-trigger={ (ENTRIES_CHANGED_EVENT) " from:body" }
            hx-include={ "#entry-filters, " (DATE_STATE_INPUTS) }
            hx-swap="outerHTML"
            hx-indicator="#dashboard-skeleton, #entry-table-skeleton"
            class={ "overflow-x-auto " (HIDE_WHILE_LOADING_CLASS) }
        {
            @match entries {
                Err(error) => {
                    p class="py-4 text-center text-red-600 dark:text-red-400" { (error.to_string()) }
                }
                Ok(entries) if entries.is_empty() => {
                    p class="py-4 text-center text-gray-500 dark:text-gray-400"
                    {
                        "No entries found. Add your first entry above!"
                    }
                }
                Ok(entries) => {
                    table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Cash From" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Cash To" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                            }
                        }

                        tbody
                        {
                            @for entry in entries {
                                (entry_row_view(entry))
                            }
                        }
                    }
                }
            }
        }
    }
}

fn entry_row_view(entry: &Entry) -> Markup {
    let (sign, amount_style, badge_style) = match entry.entry_type {
        EntryType::Credit => (
            "+",
            "text-green-600 dark:text-green-400",
            "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-300",
        ),
        EntryType::Debit => (
            "-",
            "text-red-600 dark:text-red-400",
            "bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-300",
        ),
    };
    let edit_url = endpoints::format_endpoint(endpoints::EDIT_ENTRY_FORM, &entry.id);
    let delete_url = endpoints::format_endpoint(endpoints::ENTRY, &entry.id);

    html! {
        tr class=(TABLE_ROW_STYLE) data-entry-id=(entry.id.as_str())
        {
            td class=(TABLE_CELL_STYLE) { (format_display_date(entry.date)) }
            td class=(TABLE_CELL_STYLE) { (entry.description.as_deref().unwrap_or("-")) }
            td class=(TABLE_CELL_STYLE) { (entry.category) }
            td class=(TABLE_CELL_STYLE)
            {
                span class={ "px-2.5 py-0.5 text-xs font-semibold rounded-full " (badge_style) }
                {
                    (entry.entry_type.as_str())
                }
            }
            td class={ (TABLE_CELL_STYLE) " font-medium " (amount_style) }
            {
                (sign) (format_rupees(entry.amount))
            }
            td class=(TABLE_CELL_STYLE) { (entry.cash_from.as_deref().unwrap_or("-")) }
            td class=(TABLE_CELL_STYLE) { (entry.cash_to.as_deref().unwrap_or("-")) }
            td class={ (TABLE_CELL_STYLE) " flex gap-2" }
            {
                button
                    type="button"
                    hx-get=(edit_url)
                    hx-target="#entry-form"
                    hx-swap="outerHTML show:window:top"
                    hx-target-error="#alert-container"
                    class=(BUTTON_EDIT_STYLE)
                {
                    "Edit"
                }

                button
                    type="button"
                    hx-delete=(delete_url)
                    hx-confirm="Are you sure you want to delete this entry?"
                    hx-target="#alert-container"
                    hx-target-error="#alert-container"
                    class=(BUTTON_DELETE_STYLE)
                {
                    "Delete"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{ElementRef, Html, Selector};
    use time::macros::date;

    use crate::{
        Error,
        entry::{Entry, EntryFilters, EntryId, EntryType},
        test_utils::assert_valid_html,
    };

    use super::{entries_section_view, entry_filters_view, entry_table_view};

    fn entry(id: &str, entry_type: EntryType, amount: f64) -> Entry {
        Entry {
            id: EntryId::new(id),
            date: date!(2026 - 10 - 16),
            description: None,
            category: "Tea".to_owned(),
            amount,
            entry_type,
            cash_from: Some("Hiba".to_owned()),
            cash_to: None,
        }
    }

    fn cell_text(row: ElementRef<'_>) -> Vec<String> {
        row.select(&Selector::parse("td").unwrap())
            .map(|cell| cell.text().collect::<String>().trim().to_owned())
            .collect()
    }

    #[test]
    fn renders_rows_with_signed_amounts() {
        let entries = vec![
            entry("1", EntryType::Credit, 123_456.78),
            entry("2", EntryType::Debit, 40.0),
        ];

        let html = Html::parse_fragment(&entry_table_view(&Ok(entries)).into_string());
        assert_valid_html(&html);

        let rows = html
            .select(&Selector::parse("tbody tr").unwrap())
            .map(cell_text)
            .collect::<Vec<_>>();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0][..7],
            [
                "Oct 16, 2026",
                "-",
                "Tea",
                "Credit",
                "+₹1,23,456.78",
                "Hiba",
                "-"
            ]
        );
        assert_eq!(rows[1][4], "-₹40.00");
    }

    #[test]
    fn row_actions_target_entry() {
        let html = Html::parse_fragment(
            &entry_table_view(&Ok(vec![entry("abc", EntryType::Debit, 1.0)])).into_string(),
        );

        let edit = html
            .select(&Selector::parse("button[hx-get]").unwrap())
            .next()
            .expect("No edit button found");
        assert_eq!(edit.value().attr("hx-get"), Some("/entries/abc/edit"));
        assert_eq!(edit.value().attr("hx-target"), Some("#entry-form"));

        let delete = html
            .select(&Selector::parse("button[hx-delete]").unwrap())
            .next()
            .expect("No delete button found");
        assert_eq!(delete.value().attr("hx-delete"), Some("/entries/abc"));
        assert_eq!(
            delete.value().attr("hx-confirm"),
            Some("Are you sure you want to delete this entry?")
        );
    }

    #[test]
    fn empty_list_shows_prompt() {
        let html = Html::parse_fragment(&entry_table_view(&Ok(vec![])).into_string());

        let text = html.root_element().text().collect::<String>();
        assert_eq!(text.trim(), "No entries found. Add your first entry above!");
        assert!(html.select(&Selector::parse("table").unwrap()).next().is_none());
    }

    #[test]
    fn fetch_error_replaces_rows() {
        let html = Html::parse_fragment(
            &entry_table_view(&Err(Error::ApiRejected("Failed to load entries".to_owned())))
                .into_string(),
        );

        let text = html.root_element().text().collect::<String>();
        assert_eq!(text.trim(), "Failed to load entries");
    }

    #[test]
    fn table_reload_sends_filters_and_date_state() {
        let html = Html::parse_fragment(&entry_table_view(&Ok(vec![])).into_string());

        let table = html
            .select(&Selector::parse("#entry-table").unwrap())
            .next()
            .unwrap();
        assert_eq!(
            table.value().attr("hx-include"),
            Some("#entry-filters, #selected-date, #synced-start-date, #synced-end-date")
        );
        assert_eq!(table.value().attr("hx-trigger"), Some("entries-changed from:body"));
    }

    #[test]
    fn skeleton_comes_before_table_it_replaces() {
        let filters = EntryFilters::default();
        let html = Html::parse_fragment(
            &entries_section_view(&filters, entry_table_view(&Ok(vec![]))).into_string(),
        );
        assert_valid_html(&html);

        let skeleton_then_table =
            Selector::parse("#entry-table-skeleton.htmx-indicator ~ #entry-table.hide-while-loading")
                .unwrap();
        assert_eq!(html.select(&skeleton_then_table).count(), 1);
    }

    #[test]
    fn filters_keep_their_values() {
        let filters = EntryFilters {
            search: Some("tea".to_owned()),
            start_date: Some(date!(2025 - 05 - 01)),
            ..Default::default()
        };

        let html = Html::parse_fragment(&entry_filters_view(&filters).into_string());
        assert_valid_html(&html);

        let value_of = |name: &str| {
            html.select(&Selector::parse(&format!("input[name={name}]")).unwrap())
                .next()
                .and_then(|input| input.value().attr("value"))
                .map(str::to_owned)
        };
        assert_eq!(value_of("search").as_deref(), Some("tea"));
        assert_eq!(value_of("start_date").as_deref(), Some("2025-05-01"));
        assert_eq!(value_of("end_date").as_deref(), Some(""));
    }
}
