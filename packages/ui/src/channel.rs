//! # Realtime notification channel
//!
//! One persistent websocket per signed-in user at `{ws_base}/ws/{user_id}`.
//! Inbound frames are decoded with [`api::NotificationEvent::parse`] and
//! surfaced as toasts plus a best-effort audio cue; malformed frames are
//! logged and dropped.
//!
//! Lifecycle: `Disconnected → Connecting → Open → Disconnected`. The
//! supervisor task opens at most one connection per user, closes it when the
//! user signs out or the provider unmounts, and reconnects on transport loss
//! with a bounded exponential backoff ([`backoff_delay`], up to
//! [`MAX_RECONNECT_ATTEMPTS`]). After exhausting the retries it logs a
//! warning and stays down until the next sign-in. There is no queuing or
//! replay: frames sent while disconnected are lost.

use std::time::Duration;

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::toast::{toast_variant, Toaster, Toasts};

#[cfg(target_arch = "wasm32")]
use crate::auth::AuthState;

/// Connection lifecycle of the channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelState {
    Disconnected,
    Connecting,
    Open,
}

/// Reconnect attempts before the channel gives up until the next sign-in.
pub const MAX_RECONNECT_ATTEMPTS: u32 = 5;

/// Backoff before reconnect attempt `attempt` (0-based): 1s, 2s, 4s, 8s,
/// 16s, capped at 30s.
pub fn backoff_delay(attempt: u32) -> Duration {
    let secs = 1u64.checked_shl(attempt).unwrap_or(u64::MAX).min(30);
    Duration::from_secs(secs)
}

/// Get the channel connection state.
pub fn use_channel_state() -> Signal<ChannelState> {
    use_context::<Signal<ChannelState>>()
}

/// Deliver one inbound text frame: decode, toast, audio cue.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn deliver_frame(mut toasts: Signal<Toasts>, text: &str) {
    match api::NotificationEvent::parse(text) {
        Ok(event) => {
            tracing::info!(title = %event.title, "notification received");
            let now = crate::time::now_ms();
            toasts
                .write()
                .push(toast_variant(&event.kind), event.title, event.message, now);
            play_notification_sound();
        }
        Err(err) => tracing::warn!("dropping malformed notification frame: {err}"),
    }
}

fn play_notification_sound() {
    // Best effort: autoplay policies routinely block this.
    #[cfg(target_arch = "wasm32")]
    {
        if let Ok(audio) = web_sys::HtmlAudioElement::new_with_src("/notification.mp3") {
            let _ = audio.play();
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod socket {
    use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    pub enum SocketEvent {
        Opened,
        Frame(String),
        Closed,
    }

    /// An open websocket plus its registered callbacks. Dropping it detaches
    /// the callbacks and closes the transport, so nothing can be delivered
    /// after teardown.
    pub struct Socket {
        inner: web_sys::WebSocket,
        _on_open: Closure<dyn FnMut(web_sys::Event)>,
        _on_message: Closure<dyn FnMut(web_sys::MessageEvent)>,
        _on_close: Closure<dyn FnMut(web_sys::CloseEvent)>,
        _on_error: Closure<dyn FnMut(web_sys::Event)>,
    }

    impl Socket {
        pub fn connect(url: &str) -> Result<(Self, UnboundedReceiver<SocketEvent>), String> {
            let inner = web_sys::WebSocket::new(url)
                .map_err(|_| format!("could not open websocket to {url}"))?;
            let (tx, rx) = unbounded();

            let on_open = {
                let tx: UnboundedSender<SocketEvent> = tx.clone();
                Closure::wrap(Box::new(move |_: web_sys::Event| {
                    let _ = tx.unbounded_send(SocketEvent::Opened);
                }) as Box<dyn FnMut(web_sys::Event)>)
            };
            let on_message = {
                let tx = tx.clone();
                Closure::wrap(Box::new(move |event: web_sys::MessageEvent| {
                    if let Some(text) = event.data().as_string() {
                        let _ = tx.unbounded_send(SocketEvent::Frame(text));
                    }
                }) as Box<dyn FnMut(web_sys::MessageEvent)>)
            };
            let on_close = {
                let tx = tx.clone();
                Closure::wrap(Box::new(move |_: web_sys::CloseEvent| {
                    let _ = tx.unbounded_send(SocketEvent::Closed);
                }) as Box<dyn FnMut(web_sys::CloseEvent)>)
            };
            let on_error = {
                let tx = tx.clone();
                Closure::wrap(Box::new(move |_: web_sys::Event| {
                    // The transport fires a close right after; the error
                    // event alone carries no useful detail.
                    let _ = tx.unbounded_send(SocketEvent::Closed);
                }) as Box<dyn FnMut(web_sys::Event)>)
            };

            inner.set_onopen(Some(on_open.as_ref().unchecked_ref()));
            inner.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
            inner.set_onclose(Some(on_close.as_ref().unchecked_ref()));
            inner.set_onerror(Some(on_error.as_ref().unchecked_ref()));

            Ok((
                Self {
                    inner,
                    _on_open: on_open,
                    _on_message: on_message,
                    _on_close: on_close,
                    _on_error: on_error,
                },
                rx,
            ))
        }
    }

    impl Drop for Socket {
        fn drop(&mut self) {
            self.inner.set_onopen(None);
            self.inner.set_onmessage(None);
            self.inner.set_onclose(None);
            self.inner.set_onerror(None);
            let _ = self.inner.close();
        }
    }
}

/// Supervisor: one connection per signed-in user, bounded reconnect.
#[cfg(target_arch = "wasm32")]
async fn run_channel(
    auth: Signal<AuthState>,
    toasts: Signal<Toasts>,
    mut state: Signal<ChannelState>,
) {
    use socket::{Socket, SocketEvent};

    let current_user = |expected: &str| auth.peek().user_id.as_deref() == Some(expected);

    loop {
        // Wait for a signed-in user.
        let user_id = loop {
            if let Some(id) = auth.peek().user_id.clone() {
                break id;
            }
            crate::time::sleep(Duration::from_millis(250)).await;
        };

        let mut attempts = 0u32;
        'session: loop {
            if !current_user(&user_id) {
                break 'session;
            }

            let url = format!("{}/ws/{}", api::ws_base(), user_id);
            state.set(ChannelState::Connecting);
            let connection = match Socket::connect(&url) {
                Ok(connection) => Some(connection),
                Err(err) => {
                    tracing::warn!("{err}");
                    None
                }
            };

            if let Some((socket, mut events)) = connection {
                'pump: loop {
                    // Drain everything the transport has queued.
                    loop {
                        match events.try_next() {
                            Ok(Some(SocketEvent::Opened)) => {
                                attempts = 0;
                                state.set(ChannelState::Open);
                                tracing::info!("notification channel open");
                            }
                            Ok(Some(SocketEvent::Frame(text))) => deliver_frame(toasts, &text),
                            Ok(Some(SocketEvent::Closed)) | Ok(None) => break 'pump,
                            Err(_) => break, // nothing pending
                        }
                    }
                    if !current_user(&user_id) {
                        break 'pump;
                    }
                    crate::time::sleep(Duration::from_millis(250)).await;
                }
                drop(socket);
            }

            state.set(ChannelState::Disconnected);
            if !current_user(&user_id) {
                break 'session;
            }
            if attempts >= MAX_RECONNECT_ATTEMPTS {
                tracing::warn!(
                    "notification channel gave up after {MAX_RECONNECT_ATTEMPTS} attempts; \
                     it stays down until the next sign-in"
                );
                break 'session;
            }
            let delay = backoff_delay(attempts);
            attempts += 1;
            tracing::info!("notification channel reconnecting in {delay:?}");
            crate::time::sleep(delay).await;
        }

        state.set(ChannelState::Disconnected);
        // Park until the user changes (sign-out, or a different sign-in).
        loop {
            match auth.peek().user_id.clone() {
                Some(id) if id == user_id => {
                    crate::time::sleep(Duration::from_secs(1)).await;
                }
                _ => break,
            }
        }
    }
}

/// Provider component: owns the toast stack and the websocket supervisor,
/// and mounts the global [`Toaster`].
#[component]
pub fn NotificationProvider(children: Element) -> Element {
    let toasts = use_context_provider(|| Signal::new(Toasts::default()));
    let state = use_context_provider(|| Signal::new(ChannelState::Disconnected));
    let auth = use_auth();

    #[cfg(target_arch = "wasm32")]
    {
        // Cancelled on unmount, which drops the socket and closes it.
        let _ = use_future(move || run_channel(auth, toasts, state));
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (auth, toasts, state);
    }

    rsx! {
        {children}
        Toaster {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_doubles_then_caps() {
        assert_eq!(backoff_delay(0), Duration::from_secs(1));
        assert_eq!(backoff_delay(1), Duration::from_secs(2));
        assert_eq!(backoff_delay(2), Duration::from_secs(4));
        assert_eq!(backoff_delay(4), Duration::from_secs(16));
        assert_eq!(backoff_delay(5), Duration::from_secs(30));
        assert_eq!(backoff_delay(63), Duration::from_secs(30));
        assert_eq!(backoff_delay(64), Duration::from_secs(30));
    }

    #[test]
    fn retry_budget_is_bounded() {
        // Worst case the channel waits 1+2+4+8+16 seconds before giving up.
        let total: u64 = (0..MAX_RECONNECT_ATTEMPTS)
            .map(|a| backoff_delay(a).as_secs())
            .sum();
        assert_eq!(total, 31);
    }
}
