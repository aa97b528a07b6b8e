use dioxus::prelude::*;

/// Full-screen blocking loader shown while auth state settles.
#[component]
pub fn Spinner() -> Element {
    rsx! {
        div {
            class: "h-screen w-full flex items-center justify-center bg-zinc-900",
            div {
                class: "size-8 rounded-full border-2 border-emerald-500 border-t-transparent animate-spin",
            }
        }
    }
}
