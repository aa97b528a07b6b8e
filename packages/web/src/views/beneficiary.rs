//! Beneficiary space, themed with the user's bank colors.

use dioxus::prelude::*;
use store::Role;
use ui::{use_auth, use_bank_theme, BankBadge, RequireRole, SignOutButton};

#[component]
pub fn BeneficiarySpace() -> Element {
    rsx! {
        RequireRole {
            required: Role::Beneficiary,
            BeneficiaryInner {}
        }
    }
}

#[component]
fn BeneficiaryInner() -> Element {
    let auth = use_auth();
    let theme = use_bank_theme();
    let rib = auth().snapshot.rib;

    rsx! {
        div {
            class: "min-h-screen {theme.gradient} {theme.text}",
            header {
                class: "flex items-center justify-between px-6 py-4",
                div {
                    class: "flex items-center gap-3",
                    h1 { class: "text-lg font-semibold", "My checks" }
                    BankBadge {}
                }
                SignOutButton {
                    class: "rounded-lg {theme.secondary} px-4 py-2 text-sm",
                }
            }
            main {
                class: "p-6",
                if let Some(rib) = rib {
                    p {
                        class: "text-sm opacity-80",
                        "Account: {rib}"
                    }
                } else {
                    p {
                        class: "text-sm opacity-80",
                        "No bank account on file. Checks deposited to your name will still appear here."
                    }
                }
            }
        }
    }
}
