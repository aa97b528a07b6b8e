//! Bank theming hook.

use dioxus::prelude::*;
use store::BankTheme;

use crate::auth::use_auth;

/// Theme for the signed-in user's bank, falling back to the default theme
/// when no affiliation is known.
pub fn use_bank_theme() -> &'static BankTheme {
    let auth = use_auth();
    store::theme_for_bank(auth().snapshot.bank_id)
}

/// A small badge showing the resolved bank, themed with its colors.
#[component]
pub fn BankBadge() -> Element {
    let theme = use_bank_theme();

    rsx! {
        span {
            class: "inline-flex items-center gap-2 rounded-full px-3 py-1 text-sm text-white {theme.primary}",
            img {
                class: "h-4 w-4 rounded-full bg-white object-contain",
                src: "{theme.logo}",
                alt: "{theme.name}",
            }
            "{theme.name}"
        }
    }
}
