//! Transient toast notifications.
//!
//! A `Signal<Toasts>` lives in context; anything on the main thread can push
//! into it (including the websocket supervisor, which runs outside a render
//! scope). The [`Toaster`] component renders the stack and prunes entries
//! past their time-to-live.

use api::NotificationKind;
use dioxus::prelude::*;

use crate::icons::{FaBell, FaCircleCheck, FaTriangleExclamation};
use crate::Icon;

/// How long a toast stays on screen.
pub const TOAST_TTL_MS: f64 = 5_000.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Info,
    Success,
    Warning,
}

impl ToastVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ToastVariant::Info => "toast toast--info bg-blue-600 text-white border-none",
            ToastVariant::Success => "toast toast--success bg-emerald-600 text-white border-none",
            ToastVariant::Warning => "toast toast--warning bg-orange-500 text-white border-none",
        }
    }
}

/// Styling for an inbound notification: a received check warns (orange), a
/// processed check celebrates (emerald), everything else is neutral (blue).
pub fn toast_variant(kind: &NotificationKind) -> ToastVariant {
    match kind {
        NotificationKind::ChequeReceived => ToastVariant::Warning,
        NotificationKind::ChequeProcessed => ToastVariant::Success,
        NotificationKind::Other(_) => ToastVariant::Info,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub variant: ToastVariant,
    pub title: String,
    pub message: String,
    born_ms: f64,
}

/// The toast stack. All mutation goes through [`Toasts::push`] and
/// [`Toasts::prune`] so the behavior stays testable off the UI thread.
#[derive(Clone, Debug, Default)]
pub struct Toasts {
    next_id: u64,
    pub items: Vec<Toast>,
}

impl Toasts {
    pub fn push(
        &mut self,
        variant: ToastVariant,
        title: impl Into<String>,
        message: impl Into<String>,
        now_ms: f64,
    ) -> u64 {
        self.next_id += 1;
        self.items.push(Toast {
            id: self.next_id,
            variant,
            title: title.into(),
            message: message.into(),
            born_ms: now_ms,
        });
        self.next_id
    }

    /// Would a prune at `now_ms` remove anything?
    pub fn has_expired(&self, now_ms: f64) -> bool {
        self.items.iter().any(|t| t.born_ms + TOAST_TTL_MS <= now_ms)
    }

    /// Drop toasts past their time-to-live.
    pub fn prune(&mut self, now_ms: f64) {
        self.items.retain(|t| t.born_ms + TOAST_TTL_MS > now_ms);
    }
}

/// Get the toast stack.
pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Renders the toast stack and expires old entries.
#[component]
pub fn Toaster() -> Element {
    let mut toasts = use_toasts();

    let _ = use_future(move || async move {
        loop {
            crate::time::sleep(std::time::Duration::from_millis(500)).await;
            let now = crate::time::now_ms();
            // Only touch the signal when something actually expires.
            if toasts.peek().has_expired(now) {
                toasts.write().prune(now);
            }
        }
    });

    rsx! {
        div {
            class: "toaster fixed bottom-4 right-4 z-50 flex flex-col gap-2",
            for toast in toasts().items {
                div {
                    key: "{toast.id}",
                    class: "{toast.variant.class()} rounded-lg shadow-lg px-4 py-3 flex items-start gap-3 max-w-sm",
                    ToastGlyph { variant: toast.variant }
                    div {
                        p { class: "font-semibold text-sm", "{toast.title}" }
                        p { class: "text-sm opacity-90", "{toast.message}" }
                    }
                }
            }
        }
    }
}

#[component]
fn ToastGlyph(variant: ToastVariant) -> Element {
    match variant {
        ToastVariant::Warning => rsx! { Icon { icon: FaTriangleExclamation, width: 20, height: 20 } },
        ToastVariant::Success => rsx! { Icon { icon: FaCircleCheck, width: 20, height: 20 } },
        ToastVariant::Info => rsx! { Icon { icon: FaBell, width: 20, height: 20 } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_mapping_matches_the_wire_types() {
        assert_eq!(
            toast_variant(&NotificationKind::ChequeProcessed),
            ToastVariant::Success
        );
        assert_eq!(
            toast_variant(&NotificationKind::ChequeReceived),
            ToastVariant::Warning
        );
        assert_eq!(
            toast_variant(&NotificationKind::Other("X".to_string())),
            ToastVariant::Info
        );
    }

    #[test]
    fn processed_checks_render_emerald() {
        let variant = toast_variant(&NotificationKind::ChequeProcessed);
        assert!(variant.class().contains("emerald"));
    }

    #[test]
    fn toasts_expire_after_their_ttl() {
        let mut toasts = Toasts::default();
        toasts.push(ToastVariant::Info, "t", "m", 0.0);
        assert_eq!(toasts.items.len(), 1);

        assert!(!toasts.has_expired(TOAST_TTL_MS - 1.0));
        toasts.prune(TOAST_TTL_MS - 1.0);
        assert_eq!(toasts.items.len(), 1);

        assert!(toasts.has_expired(TOAST_TTL_MS));
        toasts.prune(TOAST_TTL_MS);
        assert!(toasts.items.is_empty());
    }

    #[test]
    fn each_push_gets_a_distinct_id() {
        let mut toasts = Toasts::default();
        let a = toasts.push(ToastVariant::Info, "a", "", 0.0);
        let b = toasts.push(ToastVariant::Info, "b", "", 0.0);
        assert_ne!(a, b);
        assert_eq!(toasts.items.len(), 2);
    }
}
