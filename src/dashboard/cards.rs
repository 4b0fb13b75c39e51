//! The cash in, cash out and balance cards.

use maud::{Markup, html};

use crate::{api::Summary, html::format_rupees};

/// The colours of a card's background, label and amount.
struct CardPalette {
    container: &'static str,
    label: &'static str,
    amount: &'static str,
}

const CASH_IN_PALETTE: CardPalette = CardPalette {
    container: "bg-green-50 border-green-200 dark:bg-green-900/20 dark:border-green-800",
    label: "text-green-700 dark:text-green-300",
    amount: "text-green-800 dark:text-green-200",
};

const CASH_OUT_PALETTE: CardPalette = CardPalette {
    container: "bg-red-50 border-red-200 dark:bg-red-900/20 dark:border-red-800",
    label: "text-red-700 dark:text-red-300",
    amount: "text-red-800 dark:text-red-200",
};

const POSITIVE_BALANCE_PALETTE: CardPalette = CardPalette {
    container: "bg-amber-50 border-amber-200 dark:bg-amber-900/20 dark:border-amber-800",
    label: "text-amber-700 dark:text-amber-300",
    amount: "text-amber-800 dark:text-amber-200",
};

const NEGATIVE_BALANCE_PALETTE: CardPalette = CardPalette {
    container: "bg-red-100 border-red-300 dark:bg-red-900/40 dark:border-red-700",
    label: "text-red-700 dark:text-red-300",
    amount: "text-red-900 dark:text-red-100",
};

/// The labels for the three cards, for a single day or for all time.
pub(super) fn card_labels(is_daily: bool) -> [&'static str; 3] {
    if is_daily {
        ["Daily Cash In", "Daily Cash Out", "Day's Balance"]
    } else {
        ["Total Cash In", "Total Cash Out", "Current Balance"]
    }
}

/// Renders the three summary cards.
pub(super) fn summary_cards_view(summary: &Summary, is_daily: bool) -> Markup {
    let [cash_in_label, cash_out_label, balance_label] = card_labels(is_daily);
    let balance_palette = if summary.balance >= 0.0 {
        &POSITIVE_BALANCE_PALETTE
    } else {
        &NEGATIVE_BALANCE_PALETTE
    };

    html! {
        div class="grid grid-cols-1 gap-4 md:grid-cols-3"
        {
            (summary_card(cash_in_label, summary.total_in, &CASH_IN_PALETTE))
            (summary_card(cash_out_label, summary.total_out, &CASH_OUT_PALETTE))
            (summary_card(balance_label, summary.balance, balance_palette))
        }
    }
}

fn summary_card(label: &str, amount: f64, palette: &CardPalette) -> Markup {
    html! {
        div class={ "p-4 border rounded-lg shadow-sm " (palette.container) }
        {
            h3 class={ "text-sm font-medium " (palette.label) } { (label) }
            p class={ "mt-1 text-2xl font-bold " (palette.amount) } { (format_rupees(amount)) }
        }
    }
}

/// Three pulsing placeholder cards.
pub(super) fn summary_cards_skeleton() -> Markup {
    html! {
        div class="grid grid-cols-1 gap-4 md:grid-cols-3"
        {
            @for _ in 0..3 {
                div class="p-4 border border-gray-200 rounded-lg animate-pulse dark:border-gray-700"
                {
                    div class="w-1/2 h-4 mb-3 bg-gray-200 rounded dark:bg-gray-700" {}
                    div class="w-3/4 h-7 bg-gray-200 rounded dark:bg-gray-700" {}
                }
            }
        }
    }
}
